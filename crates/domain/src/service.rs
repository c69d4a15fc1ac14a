use log::{debug, error, info};

use crate::{
    BackendStatus, GenerateError, HealthRepository, HealthService, ReadError, StorageError,
    Workout, WorkoutQuery, WorkoutRepository, WorkoutService,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: HealthRepository> HealthService for Service<R> {
    async fn check_backend(&self) -> BackendStatus {
        match log_on_error!(
            self.repository.read_health(),
            ReadError,
            "check",
            "backend health"
        ) {
            Ok(info) => {
                info!(
                    "connected to {} (version {})",
                    info.service.as_deref().unwrap_or("backend"),
                    info.version.as_deref().unwrap_or("unknown")
                );
                BackendStatus::Connected
            }
            Err(_) => BackendStatus::Error,
        }
    }
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    async fn generate_workout(&self, query: &WorkoutQuery) -> Result<Workout, GenerateError> {
        log_on_error!(
            self.repository.generate_workout(query),
            GenerateError,
            "generate",
            "workout"
        )
    }
}
