use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StreamError>;

#[derive(Error, Debug)]
pub enum StreamError {
    /// The requested position lies before the start of the stream.
    /// `position` is the cursor, which stays where it was.
    #[error("Cannot seek to {target}: position must not be negative (cursor stays at {position})")]
    InvalidSeek { target: i128, position: u64 },
    #[error("Unknown whence code: {0}")]
    InvalidWhence(i32),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<StreamError> for io::Error {
    fn from(err: StreamError) -> Self {
        match err {
            StreamError::Io(inner) => inner,
            other => io::Error::new(io::ErrorKind::InvalidInput, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_seek_becomes_invalid_input() {
        let err: io::Error = StreamError::InvalidSeek {
            target: -3,
            position: 7,
        }
        .into();

        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("-3"));
        assert!(err.to_string().contains("cursor stays at 7"));
    }

    #[test]
    fn io_error_round_trips_unchanged() {
        let original = io::Error::new(io::ErrorKind::UnexpectedEof, "short");
        let wrapped: StreamError = original.into();
        let back: io::Error = wrapped.into();

        assert_eq!(back.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(back.to_string(), "short");
    }
}
