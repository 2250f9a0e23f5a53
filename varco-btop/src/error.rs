use thiserror::Error;

/// Error type for BTOP decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BtopError {
    /// Tokenization could not consume the entire encoded string.
    #[error("malformed BTOP encoding at offset {offset}: {reason}")]
    MalformedEncoding { offset: usize, reason: String },
}

impl BtopError {
    pub fn malformed(offset: usize, reason: impl Into<String>) -> Self {
        BtopError::MalformedEncoding {
            offset,
            reason: reason.into(),
        }
    }
}
