//! # Workout resource
//!
//! A [`Workout`] is owned by exactly one user; the backend only ever hands the
//! client its own. The client never edits one locally: it sends a request and
//! then re-reads the whole list.
//!
//! ## Wire format
//!
//! ```json
//! {
//!   "_id": "w1",
//!   "name": "Run",
//!   "duration": "30",
//!   "status": "pending",
//!   "dateAdded": "2024-05-01T08:30:00.000Z"
//! }
//! ```
//!
//! Decoding is lenient where the backend has been inconsistent:
//!
//! - `duration` may be a JSON string or number; it is kept as text
//!   ([`WorkoutDuration`]) because users type things like `"30 min"`.
//! - `status` is matched case-insensitively; anything that is not
//!   `"completed"` is [`WorkoutStatus::Pending`].
//! - `dateAdded` that is missing or unparseable becomes `None` rather than
//!   failing the whole list.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Backend-assigned workout identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(pub String);

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkoutId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for WorkoutId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Whether a workout has been done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WorkoutStatus {
    #[default]
    Pending,
    Completed,
}

impl WorkoutStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutStatus::Pending => "pending",
            WorkoutStatus::Completed => "completed",
        }
    }

    pub fn is_completed(self) -> bool {
        self == WorkoutStatus::Completed
    }

    /// Map any backend text to a status; only "completed" (any case) is completed.
    pub fn from_lenient(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("completed") {
            WorkoutStatus::Completed
        } else {
            WorkoutStatus::Pending
        }
    }
}

impl fmt::Display for WorkoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(WorkoutStatus::Pending),
            "completed" => Ok(WorkoutStatus::Completed),
            other => Err(format!("unknown workout status: {other}")),
        }
    }
}

impl Serialize for WorkoutStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WorkoutStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .map(WorkoutStatus::from_lenient)
            .unwrap_or_default())
    }
}

/// Free-form elapsed time as the user typed it, e.g. `"30"` or `"45 min"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WorkoutDuration(pub String);

impl WorkoutDuration {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Minutes used for totals: the leading integer of the text, or 0.
    ///
    /// Leading whitespace and one sign are accepted, so `" 30 min"` is 30
    /// and `"-5"` is -5. Text without a leading number counts as 0.
    pub fn minutes(&self) -> i64 {
        let s = self.0.trim_start();
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let end = digits
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(digits.len());
        let value = digits[..end]
            .bytes()
            .fold(0i64, |acc, b| {
                acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
            });
        if negative {
            -value
        } else {
            value
        }
    }
}

impl fmt::Display for WorkoutDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for WorkoutDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
            Float(f64),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Text(s)) => WorkoutDuration(s),
            Some(Raw::Int(n)) => WorkoutDuration(n.to_string()),
            Some(Raw::Float(f)) => WorkoutDuration(f.to_string()),
            None => WorkoutDuration::default(),
        })
    }
}

/// A workout as returned by `GET /workouts/getMyWorkouts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    #[serde(rename = "_id", alias = "id")]
    pub id: WorkoutId,
    pub name: String,
    #[serde(default)]
    pub duration: WorkoutDuration,
    #[serde(default)]
    pub status: WorkoutStatus,
    #[serde(
        rename = "dateAdded",
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_added: Option<DateTime<Utc>>,
}

fn lenient_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer).unwrap_or(None);
    Ok(raw
        .as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc)))
}

/// Body of `POST /workouts/addWorkout`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkout {
    pub name: String,
    pub duration: String,
    #[serde(default)]
    pub status: WorkoutStatus,
}

impl NewWorkout {
    pub fn new(name: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration: duration.into(),
            status: WorkoutStatus::Pending,
        }
    }

    /// Builder method to set the initial status.
    pub fn with_status(mut self, status: WorkoutStatus) -> Self {
        self.status = status;
        self
    }
}

/// Body of `PATCH /workouts/updateWorkout/:id`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: WorkoutStatus,
}
