//! Workout list context for views.
//!
//! [`WorkoutsHandle`] wraps the controller and mirrors its list into a
//! signal after every operation, so views re-render from the last confirmed
//! server read.

use api::{
    BulkOutcome, Error, NewWorkout, WorkoutId, WorkoutList, WorkoutStatus, WorkoutsController,
};
use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, ActivityNotifier};
use crate::auth::use_session_store;
use crate::confirm::BrowserConfirm;
use crate::tokens::PlatformTokens;

pub type AppWorkouts = WorkoutsController<PlatformTokens, ActivityNotifier>;

#[derive(Clone)]
pub struct WorkoutsHandle {
    controller: AppWorkouts,
    list: Signal<WorkoutList>,
}

impl PartialEq for WorkoutsHandle {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl WorkoutsHandle {
    /// Current list, subscribing the caller to changes.
    pub fn list(&self) -> Signal<WorkoutList> {
        self.list
    }

    pub async fn refresh(&self) -> Result<(), Error> {
        let mut list = self.list;
        list.write().loading = true;
        let result = self.controller.list().await;
        self.sync();
        result.map(|_| ())
    }

    pub async fn add(&self, workout: NewWorkout) -> Result<(), Error> {
        let result = self.controller.add(&workout).await;
        self.sync();
        result
    }

    pub async fn set_status(&self, id: WorkoutId, status: WorkoutStatus) -> Result<(), Error> {
        let result = self.controller.set_status(&id, status).await;
        self.sync();
        result
    }

    pub async fn remove(&self, id: WorkoutId) -> Result<bool, Error> {
        let result = self.controller.remove(&id, &BrowserConfirm).await;
        self.sync();
        result
    }

    pub async fn remove_all(&self) -> Result<BulkOutcome, Error> {
        let result = self.controller.remove_all(&BrowserConfirm).await;
        self.sync();
        result
    }

    pub fn clear(&self) {
        self.controller.clear();
        self.sync();
    }

    fn sync(&self) {
        let mut list = self.list;
        list.set(self.controller.snapshot());
    }
}

pub fn use_workouts() -> WorkoutsHandle {
    use_context::<WorkoutsHandle>()
}

/// Provides [`WorkoutsHandle`] to everything below it. Must sit inside
/// [`SessionProvider`](crate::SessionProvider) and below a provided
/// activity log.
#[component]
pub fn WorkoutsProvider(children: Element) -> Element {
    let session = use_session_store();
    let log = use_activity_log();
    let list = use_signal(WorkoutList::default);

    use_context_provider(|| WorkoutsHandle {
        controller: WorkoutsController::new(session, ActivityNotifier::new(log)),
        list,
    });

    rsx! {
        {children}
    }
}
