//! Dashboard summary over a workout list.

use crate::models::Workout;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkoutStats {
    pub total: usize,
    pub completed: usize,
    /// Sum of the numeric prefix of every duration.
    pub total_minutes: i64,
    /// Rounded percentage of completed workouts, 0 for an empty list.
    pub completion_rate: u32,
}

impl WorkoutStats {
    pub fn from_workouts(workouts: &[Workout]) -> Self {
        let total = workouts.len();
        let completed = workouts.iter().filter(|w| w.status.is_completed()).count();
        let total_minutes = workouts.iter().map(|w| w.duration.minutes()).sum();
        let completion_rate = if total == 0 {
            0
        } else {
            (completed as f64 * 100.0 / total as f64).round() as u32
        };
        Self {
            total,
            completed,
            total_minutes,
            completion_rate,
        }
    }

    pub fn pending(&self) -> usize {
        self.total - self.completed
    }
}

/// How many workouts the dashboard lists as recent.
pub const RECENT_COUNT: usize = 3;

/// The last `n` workouts in list order, newest first.
pub fn recent(workouts: &[Workout], n: usize) -> Vec<&Workout> {
    workouts.iter().rev().take(n).collect()
}

/// Encouragement matching a completion rate.
pub fn motivation(completion_rate: u32) -> &'static str {
    match completion_rate {
        80.. => "You're crushing your fitness goals! Your dedication is paying off.",
        50..=79 => "You're making good progress! Stay consistent to reach your goals.",
        _ => "Every workout counts! Start building your fitness habit today.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn workouts() -> Vec<Workout> {
        serde_json::from_value(json!([
            {"_id": "w1", "name": "Run", "duration": "30", "status": "completed"},
            {"_id": "w2", "name": "Swim", "duration": "45 min", "status": "pending"},
            {"_id": "w3", "name": "Yoga", "duration": "an hour", "status": "COMPLETED"},
        ]))
        .unwrap()
    }

    #[test]
    fn test_stats_from_workouts() {
        let stats = WorkoutStats::from_workouts(&workouts());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.pending(), 1);
        assert_eq!(stats.total_minutes, 75);
        assert_eq!(stats.completion_rate, 67);
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(WorkoutStats::from_workouts(&[]), WorkoutStats::default());
    }

    #[test]
    fn test_recent_is_newest_first() {
        let all = workouts();
        let names: Vec<&str> = recent(&all, 2).iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["Yoga", "Swim"]);
        assert_eq!(recent(&all, 10).len(), 3);
    }

    #[test]
    fn test_dashboard_shows_three_newest() {
        let mut all = workouts();
        all.extend(workouts());
        let shown = recent(&all, RECENT_COUNT);
        let names: Vec<&str> = shown.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["Yoga", "Swim", "Run"]);
    }

    #[test]
    fn test_motivation_tiers() {
        assert!(motivation(100).starts_with("You're crushing"));
        assert!(motivation(80).starts_with("You're crushing"));
        assert!(motivation(50).starts_with("You're making good progress"));
        assert!(motivation(49).starts_with("Every workout counts"));
        assert!(motivation(0).starts_with("Every workout counts"));
    }
}
