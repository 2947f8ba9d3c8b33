use thiserror::Error;

/// Coarse failure categories a host can branch on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    NotFound,
    AlreadyExists,
    CapabilityUnavailable,
    InvalidInput,
}

#[derive(Error, Debug)]
pub enum TextkeepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("File {0} already exists")]
    AlreadyExists(String),

    #[error("No file loaded")]
    NoActiveDocument,

    #[error("Invalid {0}")]
    Invalid(String),

    #[error("{0} not available")]
    Unavailable(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl TextkeepError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TextkeepError::Io(_) | TextkeepError::Serialization(_) => ErrorKind::Io,
            TextkeepError::NotFound(_) | TextkeepError::NoActiveDocument => ErrorKind::NotFound,
            TextkeepError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            TextkeepError::Unavailable(_) => ErrorKind::CapabilityUnavailable,
            TextkeepError::Invalid(_) | TextkeepError::Pattern(_) => ErrorKind::InvalidInput,
        }
    }
}

pub type Result<T> = std::result::Result<T, TextkeepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinct_per_failure() {
        assert_eq!(
            TextkeepError::AlreadyExists("a.txt".into()).kind(),
            ErrorKind::AlreadyExists
        );
        assert_eq!(TextkeepError::NoActiveDocument.kind(), ErrorKind::NotFound);
        assert_eq!(
            TextkeepError::Unavailable("Token counting".into()).kind(),
            ErrorKind::CapabilityUnavailable
        );
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(TextkeepError::from(io).kind(), ErrorKind::Io);
    }
}
