/// Convenience result type used across the crate.
pub type ImgAnimResult<T> = Result<T, ImgAnimError>;

/// Top-level error type for form handling and export.
#[derive(thiserror::Error, Debug)]
pub enum ImgAnimError {
    /// A required field (`image` or `animation`) was empty at submit time.
    #[error("Form is not valid")]
    InvalidForm,

    /// Input rejected before it reached the form (unknown field, bad identifier).
    #[error("validation error: {0}")]
    Validation(String),

    /// An artifact sink failed to emit the generated file.
    #[error("export error: {0}")]
    Export(String),

    /// Form JSON could not be read or written.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped error from a lower layer.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImgAnimError {
    /// Build an [`ImgAnimError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ImgAnimError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build an [`ImgAnimError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ImgAnimError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
