//! Request state of the workout planner.
//!
//! The planner owns everything a submission touches: the query input, the filter selection, the
//! loading flag, the last error and the last workout. Which view is shown is derived from that
//! state and never stored.

use crate::{BackendStatus, GenerateError, Query, Workout, WorkoutFilter, WorkoutQuery};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Planner {
    pub input: String,
    pub filter: WorkoutFilter,
    loading: bool,
    error: Option<String>,
    workout: Option<Workout>,
}

impl Planner {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn workout(&self) -> Option<&Workout> {
        self.workout.as_ref()
    }

    /// Starts a submission if its preconditions hold.
    ///
    /// On success the previous error and workout are cleared, the planner is marked as loading and
    /// the query to send is returned. Otherwise the error is recorded and nothing should be sent.
    pub fn begin_submit(&mut self, backend_status: BackendStatus) -> Option<WorkoutQuery> {
        match prepare_workout_query(&self.input, &self.filter, backend_status) {
            Ok(query) => {
                self.error = None;
                self.workout = None;
                self.loading = true;
                Some(query)
            }
            Err(err) => {
                self.error = Some(err.message());
                None
            }
        }
    }

    pub fn finish_submit(&mut self, result: Result<Workout, GenerateError>) {
        match result {
            Ok(workout) => self.workout = Some(workout),
            Err(err) => self.error = Some(err.message()),
        }
        self.loading = false;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    #[must_use]
    pub fn view(&self) -> View<'_> {
        View::select(self.loading, self.error.as_deref(), self.workout.as_ref())
    }
}

/// Checks the preconditions of a submission: a non-empty query first, then a reachable backend.
pub fn prepare_workout_query(
    input: &str,
    filter: &WorkoutFilter,
    backend_status: BackendStatus,
) -> Result<WorkoutQuery, GenerateError> {
    let query = Query::new(input)?;
    if !backend_status.is_connected() {
        return Err(GenerateError::BackendUnavailable);
    }
    Ok(filter.query(query))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    Loading,
    Error(&'a str),
    Results(&'a Workout),
    Empty,
}

impl<'a> View<'a> {
    #[must_use]
    pub fn select(loading: bool, error: Option<&'a str>, workout: Option<&'a Workout>) -> Self {
        if loading {
            return View::Loading;
        }
        if let Some(error) = error {
            return View::Error(error);
        }
        match workout {
            Some(workout) if workout.has_exercises() => View::Results(workout),
            _ => View::Empty,
        }
    }
}
