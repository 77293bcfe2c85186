use thiserror::Error;

/// Main error type for the class-manipulator crate
#[derive(Debug, Error)]
pub enum ClassListError {
    #[error("list() expects a class string or an attribute source, got {got}")]
    InvalidArgument { got: String },
}

impl ClassListError {
    /// Build an `InvalidArgument` error describing the rejected input.
    pub fn invalid_argument(got: impl Into<String>) -> Self {
        Self::InvalidArgument { got: got.into() }
    }
}

pub type Result<T> = std::result::Result<T, ClassListError>;
