//! Workouts page: add form, list with status toggles and deletes.

use api::{NewWorkout, SessionState, WorkoutStatus};
use dioxus::prelude::*;
use ui::{use_session, use_workouts};

use crate::Route;

#[component]
pub fn Workouts() -> Element {
    let session = use_session();
    let workouts = use_workouts();
    let nav = use_navigator();
    let list = workouts.list();
    let mut name = use_signal(String::new);
    let mut duration = use_signal(String::new);
    let mut status = use_signal(WorkoutStatus::default);
    let mut submitting = use_signal(|| false);

    let loader = workouts.clone();
    use_effect(move || {
        if session().is_authenticated() {
            let workouts = loader.clone();
            spawn(async move {
                let _ = workouts.refresh().await;
            });
        }
    });

    let current = session();
    if current.state == SessionState::Unauthenticated {
        nav.replace(Route::Login {});
        return rsx! {};
    }
    if !current.is_authenticated() {
        return rsx! { p { "Checking your session..." } };
    }

    let adder = workouts.clone();
    let add_workout = move |evt: FormEvent| {
        evt.prevent_default();
        let workouts = adder.clone();
        spawn(async move {
            submitting.set(true);
            let workout = NewWorkout::new(name(), duration()).with_status(status());
            if workouts.add(workout).await.is_ok() {
                name.set(String::new());
                duration.set(String::new());
                status.set(WorkoutStatus::Pending);
            }
            submitting.set(false);
        });
    };

    let bulk = workouts.clone();
    let delete_all = move |_| {
        let workouts = bulk.clone();
        spawn(async move {
            let _ = workouts.remove_all().await;
        });
    };

    let snapshot = list();

    rsx! {
        div {
            class: "workouts-page",
            h1 { "My Workouts" }
            p { "Track, complete and clean up your training sessions." }

            form {
                onsubmit: add_workout,
                class: "add-workout",
                style: "display: flex; gap: 0.5rem; margin: 1rem 0;",
                input {
                    placeholder: "Workout name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                input {
                    placeholder: "Duration (minutes)",
                    value: duration(),
                    oninput: move |evt: FormEvent| duration.set(evt.value()),
                }
                select {
                    value: status().as_str(),
                    onchange: move |evt: FormEvent| status.set(WorkoutStatus::from_lenient(&evt.value())),
                    option { value: "pending", "Pending" }
                    option { value: "completed", "Completed" }
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: submitting(),
                    "Add Workout"
                }
                button {
                    r#type: "button",
                    class: "btn btn-outline-danger",
                    disabled: snapshot.workouts.is_empty(),
                    onclick: delete_all,
                    "Delete All"
                }
            }

            if snapshot.loading && snapshot.workouts.is_empty() {
                p { "Loading workouts..." }
            } else if snapshot.workouts.is_empty() {
                div {
                    h3 { "No workouts found" }
                    p { "Start tracking your fitness journey by adding your first workout!" }
                }
            } else {
                div {
                    class: "workout-list",
                    for workout in snapshot.workouts.clone() {
                        WorkoutCard { key: "{workout.id}", workout }
                    }
                }
            }
        }
    }
}

#[component]
fn WorkoutCard(workout: api::Workout) -> Element {
    let workouts = use_workouts();
    let completed = workout.status.is_completed();

    let toggler = workouts.clone();
    let toggle_id = workout.id.clone();
    let toggle = move |_| {
        let workouts = toggler.clone();
        let id = toggle_id.clone();
        let next = if completed {
            WorkoutStatus::Pending
        } else {
            WorkoutStatus::Completed
        };
        spawn(async move {
            let _ = workouts.set_status(id, next).await;
        });
    };

    let delete_id = workout.id.clone();
    let delete = move |_| {
        let workouts = workouts.clone();
        let id = delete_id.clone();
        spawn(async move {
            let _ = workouts.remove(id).await;
        });
    };

    rsx! {
        div {
            class: if completed { "workout-card completed" } else { "workout-card" },
            h5 { "{workout.name}" }
            p { "{workout.duration} minutes" }
            if let Some(date) = workout.date_added {
                p { class: "small", "Added {date.date_naive()}" }
            }
            span {
                class: if completed { "badge bg-success" } else { "badge bg-warning" },
                "{workout.status}"
            }
            button {
                class: "btn btn-sm btn-outline-success",
                onclick: toggle,
                if completed { "Mark Pending" } else { "Mark Complete" }
            }
            button {
                class: "btn btn-sm btn-outline-danger",
                onclick: delete,
                "Delete"
            }
        }
    }
}
