use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("out of range: {0}")]
    OutOfRange(String),

    #[error("invalid buffer: {0}")]
    InvalidBuffer(String),

    #[error("buffer too small: {length} bytes, need at least {min}")]
    BufferTooSmall { length: usize, min: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an OutOfRange error from any printable context
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange(message.into())
    }

    /// Create an InvalidBuffer error from any printable context
    pub fn invalid_buffer(message: impl Into<String>) -> Self {
        Self::InvalidBuffer(message.into())
    }

    /// Create an InvalidArgument error from any printable context
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Check if this error is a bounds violation
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange(_))
    }
}
