use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let session = use_session();

    rsx! {
        div {
            class: "home",
            style: "text-align: center; padding: 3rem 0;",
            h1 { "Track every workout" }
            p { "Log your sessions, mark them done and watch your completion rate climb." }
            if session().is_authenticated() {
                Link { to: Route::Workouts {}, class: "btn btn-primary", "Go to my workouts" }
            } else {
                Link { to: Route::Register {}, class: "btn btn-primary", "Get started" }
            }
        }
    }
}
