//! Root component: context, theme and routes.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
    path,
};

use pf_app::App;

use crate::adapters::perform;
use crate::components::{PresentationPage, ProjectDetailPage};

/// Shared with every view through the reactive context.
#[derive(Clone)]
pub struct SiteContext {
    pub app: Arc<App>,
}

pub fn use_site() -> SiteContext {
    expect_context::<SiteContext>()
}

#[component]
pub fn PortfolioApp(site: Arc<App>) -> impl IntoView {
    provide_meta_context();

    let theme = site.config().theme.css_variables();
    provide_context(SiteContext { app: site });

    view! {
        <Title text="Portfolio" />
        <Router>
            <div class="site-root" style=theme>
                <Routes fallback=|| view! { <UnresolvedRoute /> }>
                    <Route path=path!("/") view=PresentationPage />
                    <Route path=path!("/progetto/:id") view=ProjectDetailPage />
                </Routes>
            </div>
        </Router>
    }
}

/// Rendered for any location the router does not match. Unknown paths are
/// replaced by the home route; routable paths in a non-canonical form are
/// replaced by their canonical one.
#[component]
fn UnresolvedRoute() -> impl IntoView {
    let navigate_use_case = use_site().app.navigate();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let pathname = location.pathname.get();
        if let Some(command) = navigate_use_case.reconcile(&pathname) {
            perform(command, &navigate);
        }
    });

    view! { <p class="loading">"Caricamento..."</p> }
}
