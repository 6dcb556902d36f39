/// Convenience result type used across spriteforge.
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Top-level error taxonomy used by pipeline APIs.
///
/// Item-level variants (see [`ForgeError::is_item_level`]) are skipped and reported by batch
/// drivers. Everything else aborts the run.
#[derive(thiserror::Error, Debug)]
pub enum ForgeError {
    /// Structurally invalid input (zero-sized buffers, empty frame lists, bad fps).
    #[error("validation error: {0}")]
    Validation(String),

    /// A source image produced no regions.
    #[error("empty segmentation: {0}")]
    EmptySegmentation(String),

    /// A folder label or name carries no recognizable direction.
    #[error("unrecognized direction: {0}")]
    UnrecognizedDirection(String),

    /// A name does not follow the naming grammar.
    #[error("grammar mismatch: {0}")]
    GrammarMismatch(String),

    /// Clip timing configuration is inconsistent.
    #[error("invalid timing: {0}")]
    InvalidTiming(String),

    /// Two clips map onto the same axis values.
    #[error("duplicate axis values: {0}")]
    DuplicateAxisValues(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ForgeError {
    /// Build a [`ForgeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ForgeError::EmptySegmentation`] value.
    pub fn empty_segmentation(msg: impl Into<String>) -> Self {
        Self::EmptySegmentation(msg.into())
    }

    /// Build a [`ForgeError::UnrecognizedDirection`] value.
    pub fn unrecognized_direction(msg: impl Into<String>) -> Self {
        Self::UnrecognizedDirection(msg.into())
    }

    /// Build a [`ForgeError::GrammarMismatch`] value.
    pub fn grammar_mismatch(msg: impl Into<String>) -> Self {
        Self::GrammarMismatch(msg.into())
    }

    /// Build a [`ForgeError::InvalidTiming`] value.
    pub fn invalid_timing(msg: impl Into<String>) -> Self {
        Self::InvalidTiming(msg.into())
    }

    /// Build a [`ForgeError::DuplicateAxisValues`] value.
    pub fn duplicate_axis_values(msg: impl Into<String>) -> Self {
        Self::DuplicateAxisValues(msg.into())
    }

    /// Build a [`ForgeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for failures that only affect one batch item.
    pub fn is_item_level(&self) -> bool {
        matches!(
            self,
            Self::EmptySegmentation(_)
                | Self::UnrecognizedDirection(_)
                | Self::GrammarMismatch(_)
                | Self::DuplicateAxisValues(_)
        )
    }
}

impl From<serde_json::Error> for ForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
