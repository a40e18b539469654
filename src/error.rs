use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound { activity: String },

    #[error("Student is already signed up")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Student not found in participants")]
    NotSignedUp { activity: String, email: String },
}

impl DirectoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DirectoryError::ActivityNotFound { .. } | DirectoryError::NotSignedUp { .. } => {
                ErrorKind::NotFound
            }
            DirectoryError::AlreadySignedUp { .. } => ErrorKind::Conflict,
        }
    }

    pub fn activity(&self) -> &str {
        match self {
            DirectoryError::ActivityNotFound { activity }
            | DirectoryError::AlreadySignedUp { activity, .. }
            | DirectoryError::NotSignedUp { activity, .. } => activity,
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
