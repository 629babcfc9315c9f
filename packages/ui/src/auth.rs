//! Session context and hooks for the UI.

use api::{ApiClient, ClientConfig, Session, SessionState, SessionStore};
use dioxus::prelude::*;

use crate::tokens::{make_token_store, PlatformTokens};
use crate::workouts::WorkoutsHandle;

pub type AppSession = SessionStore<PlatformTokens>;

/// Current session. Re-renders readers when the user logs in or out.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// The session store itself, for login, register and logout.
pub fn use_session_store() -> AppSession {
    use_context::<AppSession>()
}

/// Owns the session for everything below it.
///
/// Builds the session store from the environment configuration and the
/// platform token store, then restores any persisted session once on mount.
/// Until that finishes the session reads as not authenticated.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let config = use_hook(ClientConfig::from_env);
    let store = use_hook(|| SessionStore::new(ApiClient::new(&config), make_token_store()));
    let mut session = use_signal(Session::default);

    use_hook(|| {
        let store = store.clone();
        if store.token().is_some() {
            session.set(Session {
                state: SessionState::Validating,
                ..Session::default()
            });
        }
        spawn(async move {
            let restored = store.bootstrap().await;
            session.set(restored);
        });
    });

    use_context_provider(|| config.clone());
    use_context_provider(|| store.clone());
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button that ends the session. `onlogout` runs afterwards, typically to
/// navigate to the login page.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    onlogout: Option<EventHandler<()>>,
) -> Element {
    let store = use_session_store();
    let mut session = use_session();
    let workouts = try_use_context::<WorkoutsHandle>();

    let onclick = move |_| {
        store.logout();
        session.set(store.snapshot());
        if let Some(workouts) = &workouts {
            workouts.clear();
        }
        if let Some(handler) = onlogout {
            handler.call(());
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
