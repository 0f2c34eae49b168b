use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use pf_core::navigation::{NavigationTarget, CONTACT_ANCHOR, PROJECTS_ANCHOR};

use crate::adapters::perform;
use crate::app::use_site;

/// Top bar of the presentation page. Both buttons scroll within the page.
#[component]
pub fn Navbar() -> impl IntoView {
    let nav = use_site().app.navigate();
    let navigate = use_navigate();
    let go = move |anchor: &'static str| {
        perform(nav.execute(NavigationTarget::section(anchor)), &navigate);
    };
    let go_contact = go.clone();

    view! {
        <header class="navbar">
            <span class="navbar-brand">"Portfolio"</span>
            <nav class="navbar-links">
                <button class="button text" on:click=move |_| go(PROJECTS_ANCHOR)>
                    "Progetti"
                </button>
                <button class="button outlined" on:click=move |_| go_contact(CONTACT_ANCHOR)>
                    "Contattami"
                </button>
            </nav>
        </header>
    }
}

/// Top bar of the detail page with a single way back.
#[component]
pub fn NavbarProject() -> impl IntoView {
    let nav = use_site().app.navigate();
    let navigate = use_navigate();

    view! {
        <header class="navbar">
            <button
                class="button icon"
                aria-label="Torna alla home"
                on:click=move |_| perform(nav.execute(NavigationTarget::home()), &navigate)
            >
                "←"
            </button>
            <span class="navbar-brand">"Progetto"</span>
        </header>
    }
}
