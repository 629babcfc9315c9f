//! Data models exchanged with the backend.

mod user;
mod workout;

pub use user::{parse_identity, Credentials, Registration, UserId, UserInfo};
pub use workout::{NewWorkout, StatusUpdate, Workout, WorkoutDuration, WorkoutId, WorkoutStatus};
