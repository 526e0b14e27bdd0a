use std::fmt;

// === ClientError ===

/// Errors returned by the remote bookmark API.
///
/// Callers treat both kinds the same way: the action that triggered the call
/// reports a notice and leaves panel state as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced a usable response (connection refused,
    /// reset, unreadable body).
    TransportFailure(String),
    /// The server answered with a non-success status.
    RequestRejected { status: u16 },
}

impl ClientError {
    /// HTTP status of a rejected request, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::TransportFailure(_) => None,
            ClientError::RequestRejected { status } => Some(*status),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::TransportFailure(msg) => write!(f, "Transport failure: {}", msg),
            ClientError::RequestRejected { status } => {
                write!(f, "Request rejected with status {}", status)
            }
        }
    }
}

impl std::error::Error for ClientError {}

// === SettingsError ===

/// Errors related to loading client settings.
#[derive(Debug)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    IoError(String),
    /// The settings file is not valid settings JSON.
    SerializationError(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
