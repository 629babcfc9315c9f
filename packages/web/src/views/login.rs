//! Login page: email and password form.

use api::{Credentials, Error, Notifier};
use dioxus::prelude::*;
use ui::{use_activity_log, use_session, use_session_store, ActivityNotifier};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let store = use_session_store();
    let mut session = use_session();
    let notifier = ActivityNotifier::new(use_activity_log());
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    // Already logged in
    if session().is_authenticated() {
        nav.replace(Route::Workouts {});
    }

    let is_active = !email().is_empty() && !password().is_empty();

    let authenticate = move |evt: FormEvent| {
        evt.prevent_default();
        let store = store.clone();
        spawn(async move {
            loading.set(true);
            let credentials = Credentials::new(email(), password());
            let result = store.login(&credentials).await;
            session.set(store.snapshot());
            loading.set(false);

            match result {
                Ok(_) => {
                    email.set(String::new());
                    password.set(String::new());
                    notifier.success("Successful Login");
                    nav.push(Route::Workouts {});
                }
                Err(Error::Superseded) => {}
                Err(Error::InvalidSession) => {
                    notifier.error("Failed retrieving user details. Please try again.");
                }
                Err(e) => notifier.error(&e.user_message("Login failed. Please try again.")),
            }
        });
    };

    rsx! {
        form {
            onsubmit: authenticate,
            class: "auth-form",
            style: "display: flex; flex-direction: column; gap: 0.75rem; max-width: 360px; margin: 3rem auto;",

            h1 { style: "text-align: center;", "Login" }

            label { r#for: "userEmail", "Email address" }
            input {
                id: "userEmail",
                r#type: "text",
                placeholder: "Enter email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }

            label { r#for: "password", "Password" }
            input {
                id: "password",
                r#type: "password",
                placeholder: "Password",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }

            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: !is_active || loading(),
                if loading() { "Logging in..." } else { "Login" }
            }

            p {
                "Don't have an account? "
                Link { to: Route::Register {}, "Register here" }
            }
        }
    }
}
