//! # Workouts controller
//!
//! [`WorkoutsController`] owns the current user's workout list and every
//! mutation against it. The list is never patched locally: each successful
//! mutation ends in a full re-fetch, so what is displayed is always the last
//! confirmed server read.
//!
//! Every operation needs a persisted token. Without one the operation reports
//! an auth error and never touches the network.
//!
//! Outcomes are reported through the [`Notifier`] as well as returned, so UI
//! callers can ignore the `Result` unless they need to branch on it.

use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use futures_util::future::join_all;
use store::TokenStore;

use crate::auth::SessionStore;
use crate::error::Error;
use crate::models::{NewWorkout, StatusUpdate, Workout, WorkoutId, WorkoutStatus};
use crate::notify::{Confirm, Notifier};

/// Upper bound on delete requests in flight during [`WorkoutsController::remove_all`].
pub const MAX_CONCURRENT_DELETES: usize = 16;

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this workout?";
pub const CONFIRM_DELETE_ALL: &str =
    "Are you sure you want to delete ALL workouts? This action cannot be undone.";

/// Last confirmed list plus whether a fetch is in flight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkoutList {
    pub workouts: Vec<Workout>,
    pub loading: bool,
}

/// How a bulk delete ended, when nothing failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulkOutcome {
    /// Nothing to delete; no prompt was shown.
    Empty,
    /// The user said no.
    Declined,
    /// Every workout was deleted.
    Deleted(usize),
}

/// The displayed list plus the number of fetches still running.
#[derive(Default)]
struct ListState {
    list: WorkoutList,
    in_flight: usize,
}

impl ListState {
    fn start_fetch(&mut self) {
        self.in_flight += 1;
        self.list.loading = true;
    }

    fn finish_fetch(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.list.loading = self.in_flight > 0;
    }
}

pub struct WorkoutsController<S, N> {
    session: SessionStore<S>,
    notifier: N,
    state: Arc<RwLock<ListState>>,
}

impl<S, N: Clone> Clone for WorkoutsController<S, N> {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
            notifier: self.notifier.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: TokenStore, N: Notifier> WorkoutsController<S, N> {
    pub fn new(session: SessionStore<S>, notifier: N) -> Self {
        Self {
            session,
            notifier,
            state: Arc::new(RwLock::new(ListState::default())),
        }
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn snapshot(&self) -> WorkoutList {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .list
            .clone()
    }

    /// Forget the displayed list, e.g. after logout. Fetches still running
    /// keep the loading flag up until they settle.
    pub fn clear(&self) {
        let mut state = self.write_state();
        state.list = WorkoutList {
            loading: state.in_flight > 0,
            ..WorkoutList::default()
        };
    }

    /// Fetch the current user's workouts and replace the displayed list.
    ///
    /// `loading` stays set while any fetch is running. On failure the
    /// previous list stays as it was. A result that arrives after the session
    /// changed is dropped.
    pub async fn list(&self) -> Result<Vec<Workout>, Error> {
        let token = self.token_for("view workouts")?;
        let epoch = self.session.epoch();

        self.write_state().start_fetch();
        let result = self.session.client().my_workouts(&token).await;

        let mut state = self.write_state();
        state.finish_fetch();
        if self.session.epoch() != epoch {
            tracing::debug!("Dropping workout list fetched for a previous session");
            return Err(Error::Superseded);
        }

        match result {
            Ok(workouts) => {
                tracing::debug!("Loaded {} workouts", workouts.len());
                state.list.workouts = workouts.clone();
                Ok(workouts)
            }
            Err(e) => {
                drop(state);
                self.notifier
                    .error(&e.user_message("Failed to load workouts. Please try again."));
                Err(e)
            }
        }
    }

    /// Create a workout, then resync.
    pub async fn add(&self, workout: &NewWorkout) -> Result<(), Error> {
        if let Err(e) = workout.validate() {
            self.notifier.error(&e.user_message(""));
            return Err(e);
        }
        let token = self.token_for("add workouts")?;
        let epoch = self.session.epoch();

        let result = self.session.client().add_workout(&token, workout).await;
        self.ensure_current(epoch)?;
        match result {
            Ok(()) => {
                self.notifier.success("Workout added successfully!");
                self.resync().await;
                Ok(())
            }
            Err(e) => {
                self.notifier
                    .error(&e.user_message("Failed to add workout. Please try again."));
                Err(e)
            }
        }
    }

    /// Move a workout to `status`, then resync.
    pub async fn set_status(&self, id: &WorkoutId, status: WorkoutStatus) -> Result<(), Error> {
        match status {
            WorkoutStatus::Completed => self.complete(id).await,
            WorkoutStatus::Pending => self.revert_to_pending(id).await,
        }
    }

    /// Mark a workout completed through the dedicated status route.
    pub async fn complete(&self, id: &WorkoutId) -> Result<(), Error> {
        let token = self.token_for("update workouts")?;
        let epoch = self.session.epoch();

        let result = self.session.client().complete_workout(&token, id).await;
        self.ensure_current(epoch)?;
        match result {
            Ok(()) => {
                self.notifier.success("Workout marked completed");
                self.resync().await;
                Ok(())
            }
            Err(e) => {
                self.notifier
                    .error(&e.user_message("Failed to update workout status. Try again."));
                Err(e)
            }
        }
    }

    /// Put a workout back to pending through the generic update route.
    pub async fn revert_to_pending(&self, id: &WorkoutId) -> Result<(), Error> {
        let token = self.token_for("update workouts")?;
        let epoch = self.session.epoch();

        let update = StatusUpdate {
            status: WorkoutStatus::Pending,
        };
        let result = self
            .session
            .client()
            .update_workout(&token, id, &update)
            .await;
        self.ensure_current(epoch)?;
        match result {
            Ok(()) => {
                self.notifier.success("Workout reverted to pending");
                self.resync().await;
                Ok(())
            }
            Err(e) => {
                self.notifier
                    .error(&e.user_message("Failed to revert workout status. Try again."));
                Err(e)
            }
        }
    }

    /// Delete one workout after confirmation. Resyncs whether or not the
    /// delete succeeded. Returns `false` when the user declined.
    pub async fn remove(&self, id: &WorkoutId, confirm: &impl Confirm) -> Result<bool, Error> {
        let token = self.token_for("delete workouts")?;
        if !confirm.confirm(CONFIRM_DELETE) {
            return Ok(false);
        }
        let epoch = self.session.epoch();

        let result = self.session.client().delete_workout(&token, id).await;
        self.ensure_current(epoch)?;
        match result {
            Ok(()) => self.notifier.success("Workout deleted"),
            Err(ref e) => self
                .notifier
                .error(&e.user_message("Failed to delete workout. Try again.")),
        }
        self.resync().await;
        result.map(|()| true)
    }

    /// Delete every displayed workout after one confirmation.
    ///
    /// Deletes run concurrently, at most [`MAX_CONCURRENT_DELETES`] at a time.
    /// All of them settle before a single resync, whatever their outcome.
    pub async fn remove_all(&self, confirm: &impl Confirm) -> Result<BulkOutcome, Error> {
        let token = self.token_for("delete workouts")?;

        let ids: Vec<WorkoutId> = self
            .snapshot()
            .workouts
            .into_iter()
            .map(|w| w.id)
            .collect();
        if ids.is_empty() {
            self.notifier.info("No workouts to delete");
            return Ok(BulkOutcome::Empty);
        }
        if !confirm.confirm(CONFIRM_DELETE_ALL) {
            return Ok(BulkOutcome::Declined);
        }
        let epoch = self.session.epoch();

        let client = self.session.client();
        let mut failed = 0;
        for chunk in ids.chunks(MAX_CONCURRENT_DELETES) {
            let results = join_all(chunk.iter().map(|id| client.delete_workout(&token, id))).await;
            for (id, result) in chunk.iter().zip(results) {
                if let Err(e) = result {
                    tracing::warn!("Failed to delete workout {}: {}", id, e);
                    failed += 1;
                }
            }
        }
        self.ensure_current(epoch)?;

        let total = ids.len();
        self.resync().await;
        if failed > 0 {
            self.notifier
                .error("Failed to delete some workouts. Please try again.");
            return Err(Error::PartialFailure { failed, total });
        }
        self.notifier.success("All workouts deleted");
        Ok(BulkOutcome::Deleted(total))
    }

    /// Re-read the list from the backend after a mutation. Failures are
    /// already reported by [`list`](Self::list).
    async fn resync(&self) {
        if let Err(e) = self.list().await {
            tracing::debug!("Resync failed: {}", e);
        }
    }

    fn token_for(&self, action: &'static str) -> Result<String, Error> {
        self.session.require_token(action).map_err(|e| {
            self.notifier.error(&e.to_string());
            e
        })
    }

    fn ensure_current(&self, epoch: u64) -> Result<(), Error> {
        if self.session.epoch() == epoch {
            Ok(())
        } else {
            tracing::debug!("Session changed while a workout request was in flight");
            Err(Error::Superseded)
        }
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ListState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
