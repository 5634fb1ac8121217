use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    IOError(#[from] std::io::Error),
    #[error("invalid configuration json: {0}")]
    JsonParseError(#[from] serde_json::Error),
    #[error("utc offset of {0} minutes is out of range")]
    InvalidUtcOffset(i32),
    #[error("resync interval of {0} seconds is out of range")]
    InvalidResyncInterval(u64)
}

/// Failure of the official time service. The caller falls back to local time.
#[derive(Debug, Error)]
pub enum TimeSyncError {
    #[error("time service unavailable: {0}")]
    Unavailable(String),
    #[error("time service returned an invalid response: {0}")]
    InvalidResponse(String)
}
