/// Convenience result type used across the crate.
pub type CascadeResult<T> = Result<T, CascadeError>;

/// Top-level error taxonomy used by chain and rendering APIs.
#[derive(thiserror::Error, Debug)]
pub enum CascadeError {
    /// A track index outside `[0, len)` of the chain.
    #[error("invalid track index {index} (chain has {len} tracks)")]
    InvalidIndex {
        /// Requested index.
        index: usize,
        /// Number of tracks in the chain at the time of the call.
        len: usize,
    },

    /// A resolution of zero cells.
    #[error("invalid length {0}: resolution must be > 0")]
    InvalidLength(usize),

    /// Invalid user-provided configuration or color data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CascadeError {
    /// Build a [`CascadeError::InvalidIndex`] value.
    pub fn invalid_index(index: usize, len: usize) -> Self {
        Self::InvalidIndex { index, len }
    }

    /// Build a [`CascadeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CascadeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

/// Reject zero-length resolutions.
pub(crate) fn ensure_len(len: usize) -> CascadeResult<usize> {
    if len == 0 {
        return Err(CascadeError::InvalidLength(len));
    }
    Ok(len)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
