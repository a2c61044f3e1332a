//! Error types for Boardwalk decoding.
//!
//! Every failure is local to the frame being decoded. A capture session keeps
//! going after any of these errors; the dissector leaves its sequence state
//! untouched when a frame cannot be read far enough to obtain the packet count.
//!
//! ## Error Categories
//!
//! - **Malformed Frames**: Buffers too short to hold the header and trailer
//! - **Parse Errors**: A field read at an offset outside the buffer
//! - **Configuration Errors**: Invalid or unparseable dissector settings
//!
//! ```rust
//! use brdwlk::DecodeError;
//!
//! let error = DecodeError::malformed_frame(3, 6);
//! assert!(error.is_recoverable());
//! assert_eq!(error.to_string(), "Malformed Boardwalk frame: 3 bytes, need at least 6");
//! ```

use thiserror::Error;

/// Result type alias for decoding operations.
pub type Result<T, E = DecodeError> = std::result::Result<T, E>;

/// Main error type for decoding operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("Malformed Boardwalk frame: {length} bytes, need at least {required}")]
    MalformedFrame { length: usize, required: usize },

    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },

    #[error("Invalid dissector configuration: {details}")]
    Config { details: String },
}

impl DecodeError {
    /// Returns whether decoding can continue with the next frame of the session.
    pub fn is_recoverable(&self) -> bool {
        match self {
            DecodeError::MalformedFrame { .. } => true,
            DecodeError::Parse { .. } => true,
            DecodeError::Config { .. } => false,
        }
    }

    /// Helper constructor for frames shorter than the encapsulation allows.
    pub fn malformed_frame(length: usize, required: usize) -> Self {
        DecodeError::MalformedFrame { length, required }
    }

    /// Helper constructor for configuration errors.
    pub fn config(details: impl Into<String>) -> Self {
        DecodeError::Config { details: details.into() }
    }
}

impl From<serde_yaml_ng::Error> for DecodeError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        DecodeError::Config { details: err.to_string() }
    }
}
