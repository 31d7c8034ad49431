/// Convenience result type used across the crate.
pub type OsbResult<T> = Result<T, OsbError>;

/// Error taxonomy for storyboard building, serialization and file placement.
#[derive(thiserror::Error, Debug)]
pub enum OsbError {
    /// A parameter had the wrong shape or kind.
    #[error("type error: {0}")]
    Type(String),

    /// A parameter had the right kind but a disallowed value.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// The operation is not valid in the object's current state.
    #[error("state error: {0}")]
    State(String),

    /// An authoring script could not be read as JSON.
    #[error("script error: {0}")]
    Script(String),

    /// Reading or writing a storyboard file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other failure, usually with attached context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OsbError {
    /// Build an [`OsbError::Type`].
    pub fn type_error(msg: impl Into<String>) -> Self {
        Self::Type(msg.into())
    }

    /// Build an [`OsbError::InvalidValue`].
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    /// Build an [`OsbError::State`].
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Build an [`OsbError::Script`].
    pub fn script(msg: impl Into<String>) -> Self {
        Self::Script(msg.into())
    }

    /// Prefix the message with a location (e.g. a JSON path), keeping the variant.
    pub fn at(self, location: impl std::fmt::Display) -> Self {
        match self {
            Self::Type(m) => Self::Type(format!("{location}: {m}")),
            Self::InvalidValue(m) => Self::InvalidValue(format!("{location}: {m}")),
            Self::State(m) => Self::State(format!("{location}: {m}")),
            Self::Script(m) => Self::Script(format!("{location}: {m}")),
            other => other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
