//! Dashboard: totals, recent workouts and a word of encouragement.

use api::stats::{motivation, recent, WorkoutStats, RECENT_COUNT};
use api::SessionState;
use dioxus::prelude::*;
use ui::{use_session, use_workouts};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let workouts = use_workouts();
    let nav = use_navigator();
    let list = workouts.list();

    use_effect(move || {
        if session().is_authenticated() {
            let workouts = workouts.clone();
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

    let snapshot = list();
    let stats = WorkoutStats::from_workouts(&snapshot.workouts);
    let quick_stats = [
        ("Total Workouts", stats.total.to_string(), "Workouts logged"),
        ("Completed", stats.completed.to_string(), "Workouts finished"),
        ("Total Time", format!("{}m", stats.total_minutes), "Minutes exercised"),
        ("Success Rate", format!("{}%", stats.completion_rate), "Completion rate"),
    ];

    rsx! {
        div {
            class: "dashboard-page",
            h1 { "Welcome to Your Fitness Dashboard" }
            p { "Here's an overview of your fitness journey and recent activity." }

            div {
                class: "quick-stats",
                style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; margin: 1.5rem 0;",
                for (title, value, description) in quick_stats {
                    div {
                        key: "{title}",
                        class: "stat-card",
                        h3 { "{value}" }
                        h6 { "{title}" }
                        p { class: "small", "{description}" }
                    }
                }
            }

            h4 { "Recent Workouts" }
            if snapshot.loading {
                p { "Loading..." }
            } else if snapshot.workouts.is_empty() {
                div {
                    h5 { "No workouts yet" }
                    p { "Start your fitness journey by adding your first workout!" }
                    Link { to: Route::Workouts {}, class: "btn btn-primary", "Add workout" }
                }
            } else {
                div {
                    class: "recent-workouts",
                    for workout in recent(&snapshot.workouts, RECENT_COUNT) {
                        div {
                            key: "{workout.id}",
                            class: "workout-item",
                            h6 { "{workout.name}" }
                            small {
                                "{workout.duration} minutes"
                                if let Some(date) = workout.date_added {
                                    " • {date.date_naive()}"
                                }
                            }
                            span {
                                class: if workout.status.is_completed() { "badge bg-success" } else { "badge bg-warning" },
                                "{workout.status}"
                            }
                        }
                    }
                    Link { to: Route::Workouts {}, "View all workouts" }
                }
            }

            div {
                class: "motivation",
                style: "margin-top: 2rem; text-align: center;",
                h3 { "Keep Up the Great Work!" }
                p { {motivation(stats.completion_rate)} }
            }
        }
    }
}
