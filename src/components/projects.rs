use std::sync::Arc;

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use pf_app::usecases::RevealTracker;
use pf_app::MountGuard;
use pf_core::catalog::ProjectRecord;
use pf_core::navigation::{NavigationTarget, PROJECTS_ANCHOR};
use pf_core::ports::VisibilityObserverPort;
use pf_core::reveal::RevealState;

use crate::adapters::{current_scroll_y, perform, DomVisibilityObserver};
use crate::app::use_site;

/// Project list. Owns the scroll direction shared by every card.
#[component]
pub fn ProjectsSection() -> impl IntoView {
    let site = use_site();
    let tracker = site.app.reveal_tracker();
    let mount = MountGuard::new();
    let threshold = site.app.config().reveal.threshold;

    let scroll = {
        let tracker = tracker.clone();
        window_event_listener(ev::scroll, move |_| {
            tracker.on_scroll(current_scroll_y());
        })
    };
    {
        let mount = mount.clone();
        on_cleanup(move || {
            mount.unmount();
            scroll.remove();
        });
    }

    let cards = site
        .app
        .catalog()
        .iter()
        .cloned()
        .map(|project| {
            view! {
                <ProjectCard
                    project=project
                    tracker=tracker.clone()
                    mount=mount.clone()
                    threshold=threshold
                />
            }
        })
        .collect_view();

    let explore = site
        .app
        .config()
        .profile
        .repositories_url
        .clone()
        .map(|url| {
            view! {
                <div class="projects-more">
                    <a class="button contained" href=url target="_blank" rel="noopener noreferrer">
                        "Esplora Altri Progetti"
                    </a>
                </div>
            }
        });

    view! {
        <section id=PROJECTS_ANCHOR class="projects">
            <h2 class="section-title">"I Miei Progetti"</h2>
            <div class="project-grid">{cards}</div>
            {explore}
        </section>
    }
}

/// One project card. Slides in from the side the page scrolls from whenever it
/// becomes visible, and opens the detail view on click.
#[component]
pub fn ProjectCard(
    project: ProjectRecord,
    tracker: Arc<RevealTracker>,
    mount: MountGuard,
    threshold: f64,
) -> impl IntoView {
    let nav = use_site().app.navigate();
    let navigate = use_navigate();
    let reveal = RwSignal::new(RevealState::default());
    let card_ref = NodeRef::<Div>::new();

    Effect::new(move |_| {
        let Some(card) = card_ref.get() else {
            return;
        };
        let element: web_sys::Element = card.into();
        let visibility = DomVisibilityObserver::new(threshold).observe(element);
        let tracker = tracker.clone();
        let mount = mount.clone();
        spawn_local(async move {
            tracker
                .track(visibility, mount, move |state| {
                    let _ = reveal.try_set(state);
                })
                .await;
        });
    });

    let style = move || {
        let state = reveal.get();
        format!(
            "transform: translateX({}px); opacity: {};",
            state.offset_px(),
            state.opacity()
        )
    };
    let id = project.id;

    view! {
        <div
            class="project-card"
            node_ref=card_ref
            style=style
            on:click=move |_| perform(nav.execute(NavigationTarget::project(id)), &navigate)
        >
            <h3 class="project-card-title">{project.title}</h3>
            <p class="project-card-description">{project.description}</p>
            <TechChips technologies=project.technologies />
        </div>
    }
}

#[component]
pub fn TechChips(technologies: Vec<String>) -> impl IntoView {
    view! {
        <div class="chips">
            {technologies
                .into_iter()
                .map(|tech| view! { <span class="chip">{tech}</span> })
                .collect_view()}
        </div>
    }
}
