use std::sync::Arc;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::debug;

use pf_app::usecases::ContactOrchestrator;
use pf_core::contact::{ContactField, ContactFormState, FeedbackLevel};
use pf_core::navigation::CONTACT_ANCHOR;

use crate::adapters::SignalContactEvents;
use crate::app::use_site;

/// Contact form. The view only renders the orchestrator's state and forwards
/// input; the submit guard and banner timing live in the use case.
#[component]
pub fn ContactSection() -> impl IntoView {
    let state = RwSignal::new(ContactFormState::default());
    let form = Arc::new(
        use_site()
            .app
            .contact_form(Arc::new(SignalContactEvents::new(state))),
    );

    {
        let form = form.clone();
        on_cleanup(move || form.unmount());
    }

    let edit = {
        let form = form.clone();
        move |field: ContactField, value: String| {
            if let Err(err) = form.edit_field(field, value) {
                debug!(error = %err, ?field, "edit ignored");
            }
        }
    };
    let (edit_name, edit_email, edit_message) = (edit.clone(), edit.clone(), edit);

    let on_submit = {
        let form = form.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let form = form.clone();
            spawn_local(async move {
                match form.submit().await {
                    Ok(status) => debug!(?status, "contact submission finished"),
                    Err(err) => debug!(error = %err, "contact submission not sent"),
                }
            });
        }
    };

    let submitting = move || state.with(|s| s.is_submitting());

    view! {
        <section id=CONTACT_ANCHOR class="contact">
            <h2 class="section-title">"Contattami"</h2>
            <p class="section-subtitle">
                "Hai un progetto in mente o vuoi semplicemente fare due chiacchiere? Scrivimi!"
            </p>
            <form class="contact-form" on:submit=on_submit>
                <label>
                    "Nome"
                    <input
                        type="text"
                        name="nome"
                        required
                        prop:value=move || state.with(|s| s.fields.name.clone())
                        on:input=move |ev| edit_name(ContactField::Name, event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        name="email"
                        required
                        prop:value=move || state.with(|s| s.fields.email.clone())
                        on:input=move |ev| edit_email(ContactField::Email, event_target_value(&ev))
                    />
                </label>
                <label>
                    "Messaggio"
                    <textarea
                        name="messaggio"
                        rows="4"
                        required
                        prop:value=move || state.with(|s| s.fields.message.clone())
                        on:input=move |ev| {
                            edit_message(ContactField::Message, event_target_value(&ev))
                        }
                    ></textarea>
                </label>
                <button type="submit" class="button contained" disabled=submitting>
                    {move || {
                        submitting()
                            .then(|| view! { <span class="spinner" aria-hidden="true"></span> })
                    }}
                    {move || state.with(|s| s.submit_label())}
                </button>
            </form>
            <FeedbackBanner state=state form=form />
        </section>
    }
}

/// Snackbar for the last submission outcome, dismissable by hand.
#[component]
fn FeedbackBanner(
    state: RwSignal<ContactFormState>,
    form: Arc<ContactOrchestrator>,
) -> impl IntoView {
    move || {
        let feedback = state.with(|s| s.feedback.clone());
        let form = form.clone();
        feedback.visible.then(move || {
            let class = match feedback.level {
                FeedbackLevel::Success => "snackbar success",
                FeedbackLevel::Error => "snackbar error",
            };
            view! {
                <div class=class role="status">
                    <span>{feedback.message}</span>
                    <button
                        class="button icon"
                        aria-label="Chiudi"
                        on:click=move |_| {
                            if let Err(err) = form.dismiss_feedback() {
                                debug!(error = %err, "dismiss ignored");
                            }
                        }
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
