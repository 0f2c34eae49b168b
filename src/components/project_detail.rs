use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::{use_navigate, use_params_map};
use tracing::debug;

use pf_app::usecases::ProjectDetailOutcome;
use pf_app::RunGuards;
use pf_core::catalog::{ProjectActionKind, ProjectRecord};

use super::{Footer, NavbarProject, TechChips};
use crate::adapters::perform;
use crate::app::use_site;

#[derive(Debug, Clone, PartialEq)]
enum DetailState {
    Loading,
    Ready(ProjectRecord),
}

/// `/progetto/:id`. Shows a loading indicator for the configured delay, then
/// the project or a redirect home.
#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let site = use_site();
    let params = use_params_map();
    let navigate = use_navigate();
    let detail = RwSignal::new(DetailState::Loading);

    let runs = Arc::new(RunGuards::new());
    {
        let runs = runs.clone();
        on_cleanup(move || runs.stop());
    }

    let resolver = site.app.resolve_project();
    let nav = site.app.navigate();
    Effect::new(move |_| {
        let raw_id = params
            .with(|p| p.get("id").map(|id| id.to_string()))
            .unwrap_or_default();
        detail.set(DetailState::Loading);

        let mount = runs.start();
        let resolver = resolver.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match resolver.execute(&raw_id, &mount).await {
                Ok(ProjectDetailOutcome::Show(project)) => {
                    let _ = detail.try_set(DetailState::Ready(project));
                }
                Ok(ProjectDetailOutcome::Redirect(target)) => {
                    perform(nav.execute(target), &navigate);
                }
                Err(err) => debug!(error = %err, "project resolution dropped"),
            }
        });
    });

    let year = site.app.current_year();

    view! {
        <Title text="Progetto" />
        <NavbarProject />
        <main class="project-detail">
            {move || match detail.get() {
                DetailState::Loading => {
                    view! { <p class="loading">"Caricamento..."</p> }.into_any()
                }
                DetailState::Ready(project) => {
                    view! { <ProjectDetailBody project=project /> }.into_any()
                }
            }}
        </main>
        <Footer year=year />
    }
}

#[component]
fn ProjectDetailBody(project: ProjectRecord) -> impl IntoView {
    let actions = project
        .actions()
        .into_iter()
        .map(|action| {
            let class = match action.kind {
                ProjectActionKind::Repository => "button outlined",
                ProjectActionKind::LiveDemo => "button contained",
            };
            view! {
                <a class=class href=action.url target="_blank" rel="noopener noreferrer">
                    {action.kind.label()}
                </a>
            }
        })
        .collect_view();

    let image = project.image.clone().map(|src| {
        view! { <img class="project-image" src=src alt=project.title.clone() /> }
    });

    let details = project.details.clone().map(|details| {
        view! {
            <aside class="project-facts">
                <h3>"Dettagli progetto"</h3>
                <p><strong>"Stack: "</strong>{details.stack}</p>
                <p><strong>"Data: "</strong>{details.date}</p>
                <p><strong>"Status: "</strong>{details.status}</p>
            </aside>
        }
    });

    view! {
        <article class="project">
            <h1 class="project-title">{project.title.clone()}</h1>
            <TechChips technologies=project.technologies.clone() />
            {image}
            <div class="project-body">
                <p class="project-description">{project.description.clone()}</p>
                {details}
            </div>
            <div class="project-actions">{actions}</div>
        </article>
    }
}
