/// Convenience result type used across Avagen.
pub type AvatarResult<T> = Result<T, AvatarError>;

/// Top-level error taxonomy used by generator APIs.
#[derive(thiserror::Error, Debug)]
pub enum AvatarError {
    /// Asset root or configuration data could not be loaded at construction.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Requested variant is absent from the asset catalog.
    #[error("unsupported variant: {0}")]
    UnsupportedVariant(String),

    /// A variant resolved to zero contributing parts for an identifier.
    #[error("empty selection: {0}")]
    EmptySelection(String),

    /// Compositor invariant violations.
    #[error("composite error: {0}")]
    Composite(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AvatarError {
    /// Build a [`AvatarError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`AvatarError::UnsupportedVariant`] value.
    pub fn unsupported_variant(msg: impl Into<String>) -> Self {
        Self::UnsupportedVariant(msg.into())
    }

    /// Build a [`AvatarError::EmptySelection`] value.
    pub fn empty_selection(msg: impl Into<String>) -> Self {
        Self::EmptySelection(msg.into())
    }

    /// Build a [`AvatarError::Composite`] value.
    pub fn composite(msg: impl Into<String>) -> Self {
        Self::Composite(msg.into())
    }
}
