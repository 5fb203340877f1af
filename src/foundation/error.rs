/// Convenience result type used across the generators.
pub type AssetResult<T> = Result<T, AssetError>;

/// Error taxonomy for asset loading, synthesis and output.
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    /// Invalid generator parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// A source image could not be read or decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// An output could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AssetError {
    /// Build an [`AssetError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AssetError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build an [`AssetError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
