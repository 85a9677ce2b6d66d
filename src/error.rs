#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The key-value substrate could not be read or written, or a stored
    /// blob failed to deserialize. First-run absence is NOT this error.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Credential missing, network failure, or a malformed reply from the
    /// insight service. Terminal for the request; the caller decides
    /// whether to re-invoke.
    #[error("Remote service error: {0}")]
    RemoteService(String),
}

pub type AppResult<T> = Result<T, AppError>;
