//! Error types for uri-state operations.

use thiserror::Error;

/// Result type alias for uri-state operations.
pub type UriStateResult<T> = Result<T, UriStateError>;

/// Errors that can occur while synchronizing state with the query string.
#[derive(Debug, Error)]
pub enum UriStateError {
    /// The query source failed to read or replace the query string.
    #[error("query source error: {message}")]
    Source {
        /// Description of the host-side failure.
        message: String,
    },

    /// A query value could not be decoded into a state value.
    ///
    /// On the read path this error is suppressed and the reader falls back
    /// to defaults; custom decoders return it to signal a malformed value.
    #[error("failed to decode query value `{uri_key}`: {message}")]
    Decode {
        /// The query-string name whose value failed to decode.
        uri_key: String,
        /// Description of what went wrong.
        message: String,
    },

    /// A state value could not be encoded for the query string.
    ///
    /// Unlike decode failures, encode failures propagate out of the writer.
    #[error("failed to encode state value `{key}`: {message}")]
    Encode {
        /// The state key whose value failed to encode.
        key: String,
        /// Description of what went wrong.
        message: String,
    },

    /// JSON serialization/deserialization error from a codec.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl UriStateError {
    /// Create a query source error.
    #[inline]
    pub fn source(message: impl Into<String>) -> Self {
        UriStateError::Source {
            message: message.into(),
        }
    }

    /// Create a decode error for the given query-string name.
    #[inline]
    pub fn decode(uri_key: impl Into<String>, message: impl Into<String>) -> Self {
        UriStateError::Decode {
            uri_key: uri_key.into(),
            message: message.into(),
        }
    }

    /// Create an encode error for the given state key.
    #[inline]
    pub fn encode(key: impl Into<String>, message: impl Into<String>) -> Self {
        UriStateError::Encode {
            key: key.into(),
            message: message.into(),
        }
    }
}
