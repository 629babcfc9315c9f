//! Registration page view with email/password form.

use api::{Error, Notifier, Registration};
use dioxus::prelude::*;
use ui::{use_activity_log, use_session, use_session_store, ActivityNotifier};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let store = use_session_store();
    let session = use_session();
    let notifier = ActivityNotifier::new(use_activity_log());
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    // If already logged in, go to workouts
    if session().is_authenticated() {
        nav.replace(Route::Workouts {});
    }

    let is_active =
        !email().is_empty() && !password().is_empty() && !confirm_password().is_empty();

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let store = store.clone();
        spawn(async move {
            loading.set(true);
            let registration = Registration::new(email(), password(), confirm_password());
            let result = store.register(&registration).await;
            loading.set(false);

            match result {
                Ok(message) => {
                    email.set(String::new());
                    password.set(String::new());
                    confirm_password.set(String::new());
                    notifier.success(
                        message
                            .as_deref()
                            .unwrap_or("Registration successful! You can now log in."),
                    );
                }
                Err(e @ Error::Transport(_)) => {
                    tracing::warn!("Registration request failed: {}", e);
                    notifier.error("An error occurred during registration. Please try again.");
                }
                Err(e) => {
                    notifier.error(&e.user_message("Registration failed. Please try again."))
                }
            }
        });
    };

    rsx! {
        form {
            onsubmit: handle_register,
            class: "auth-form",
            style: "display: flex; flex-direction: column; gap: 0.75rem; max-width: 360px; margin: 3rem auto;",

            h1 { style: "text-align: center;", "Register" }

            input {
                r#type: "email",
                placeholder: "Email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            input {
                r#type: "password",
                placeholder: "Password (min 8 characters)",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            input {
                r#type: "password",
                placeholder: "Confirm password",
                value: confirm_password(),
                oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
            }

            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: !is_active || loading(),
                if loading() { "Creating account..." } else { "Register" }
            }

            p {
                "Already have an account? "
                Link { to: Route::Login {}, "Log in" }
            }
        }
    }
}
