use leptos::prelude::*;
use leptos_meta::Title;

use super::{ContactSection, Navbar, ProjectsSection};
use crate::app::use_site;

/// Landing view: hero, project list and contact form, in that order.
#[component]
pub fn PresentationPage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Navbar />
        <main>
            <Hero />
            <ProjectsSection />
            <ContactSection />
        </main>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let profile = use_site().app.config().profile.clone();
    let portrait = profile.image.clone().map(|src| {
        view! { <img class="hero-portrait" src=src alt=profile.name.clone() /> }
    });

    view! {
        <section class="hero">
            <div class="hero-text">
                <h1 class="hero-title">"Benvenuto nel mio Portfolio"</h1>
                <h2 class="hero-greeting">
                    "Ciao, sono " <span class="accent">{profile.name.clone()}</span>
                </h2>
                <p class="hero-bio">{profile.bio}</p>
            </div>
            {portrait}
        </section>
    }
}
