use thiserror::Error;

/// Broad category of a [`RosterError`], used by the HTTP layer to pick a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    CapacityExceeded,
    Storage,
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound(String),

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Activity is at maximum capacity")]
    AtCapacity,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("participant list is not valid JSON: {0}")]
    CorruptRoster(#[from] serde_json::Error),
}

impl RosterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RosterError::ActivityNotFound(_) => ErrorKind::NotFound,
            RosterError::AlreadySignedUp | RosterError::NotSignedUp => ErrorKind::Conflict,
            RosterError::AtCapacity => ErrorKind::CapacityExceeded,
            RosterError::Storage(_) | RosterError::CorruptRoster(_) => ErrorKind::Storage,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidVar { name: &'static str, value: String },
}
