use crate::QueryError;

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(
        "Backend server is not running. Please start the backend server and reload the page."
    )]
    BackendUnavailable,
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl GenerateError {
    pub const FALLBACK_MESSAGE: &'static str = "Failed to generate workout. Please try again.";

    /// Error for a non-ok response, preferring the `detail` reported by the server.
    #[must_use]
    pub fn server(status: u16, detail: Option<String>) -> Self {
        let message = match detail {
            Some(detail) if !detail.trim().is_empty() => detail,
            _ => format!("Server Error: {status}"),
        };
        GenerateError::Server { status, message }
    }

    #[must_use]
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            Self::FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("No connection to server")]
    NoConnection,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}
