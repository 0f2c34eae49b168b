use leptos_router::NavigateOptions;

use pf_app::usecases::NavigationCommand;

use super::scroll::scroll_to_anchor;

/// Carries out a [`NavigationCommand`] with the router's `navigate` function.
pub fn perform<N>(command: NavigationCommand, navigate: &N)
where
    N: Fn(&str, NavigateOptions),
{
    match command {
        NavigationCommand::Push(path) => navigate(&path, NavigateOptions::default()),
        NavigationCommand::Replace(path) => navigate(
            &path,
            NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            },
        ),
        NavigationCommand::ScrollTo(anchor) => {
            scroll_to_anchor(&anchor);
        }
    }
}
