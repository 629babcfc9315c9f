//! Navigation bar shared by every page.

use dioxus::prelude::*;
use ui::{use_session, LogoutButton};

use crate::Route;

#[component]
pub fn AppLayout() -> Element {
    let session = use_session();
    let nav = use_navigator();

    rsx! {
        nav {
            class: "app-navbar",
            style: "display: flex; align-items: center; gap: 1rem; padding: 0.75rem 1.5rem; background: #212529; color: #fff;",
            Link { to: Route::Home {}, class: "brand", "Workout Tracker" }
            div { style: "flex: 1;" }
            if session().is_authenticated() {
                Link { to: Route::Dashboard {}, "Dashboard" }
                Link { to: Route::Workouts {}, "Workouts" }
                LogoutButton {
                    class: "btn btn-outline-light",
                    onlogout: move |_| {
                        nav.push(Route::Login {});
                    },
                }
            } else {
                Link { to: Route::Login {}, "Login" }
                Link { to: Route::Register {}, "Register" }
            }
        }
        main {
            style: "max-width: 960px; margin: 0 auto; padding: 1.5rem;",
            Outlet::<Route> {}
        }
    }
}
