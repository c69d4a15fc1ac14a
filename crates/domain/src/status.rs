use crate::ReadError;

#[allow(async_fn_in_trait)]
pub trait HealthService {
    async fn check_backend(&self) -> BackendStatus;
}

#[allow(async_fn_in_trait)]
pub trait HealthRepository {
    async fn read_health(&self) -> Result<BackendInfo, ReadError>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    #[default]
    Checking,
    Connected,
    Error,
}

impl BackendStatus {
    #[must_use]
    pub fn is_connected(self) -> bool {
        self == BackendStatus::Connected
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            BackendStatus::Checking => "Checking backend",
            BackendStatus::Connected => "Backend connected",
            BackendStatus::Error => "Backend disconnected",
        }
    }
}

/// Self-description of the backend, if it sent one with the health response.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BackendInfo {
    pub status: Option<String>,
    pub service: Option<String>,
    pub version: Option<String>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(BackendStatus::Checking, false)]
    #[case(BackendStatus::Connected, true)]
    #[case(BackendStatus::Error, false)]
    fn test_backend_status_is_connected(#[case] status: BackendStatus, #[case] expected: bool) {
        assert_eq!(status.is_connected(), expected);
    }

    #[test]
    fn test_backend_status_default() {
        assert_eq!(BackendStatus::default(), BackendStatus::Checking);
    }
}
