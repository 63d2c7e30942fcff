use shared_types::AppError;

/// Failure of a console operation, as the view reports it.
///
/// `Validation` never reached the service. `Remote` carries the message to
/// show in the banner. `Auth` means the credential was rejected; the view
/// escalates it to the session instead of showing a banner.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsoleError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Remote(String),
    #[error("session expired")]
    Auth,
    #[error("a request is already in progress")]
    Busy,
}

impl ConsoleError {
    /// Classify a service error, substituting `fallback` when it has no message.
    pub fn from_remote(err: &AppError, fallback: &str) -> Self {
        if err.is_auth_failure() {
            ConsoleError::Auth
        } else {
            ConsoleError::Remote(err.message_or(fallback))
        }
    }

    /// Text for the error banner, if this failure is shown inline at all.
    pub fn banner(&self) -> Option<String> {
        match self {
            ConsoleError::Validation(msg) | ConsoleError::Remote(msg) => Some(msg.clone()),
            ConsoleError::Auth | ConsoleError::Busy => None,
        }
    }
}
