//! Error types for the alps-profile SDK.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlpsProfileError {
    /// Metadata registry is inconsistent; no document can be built.
    #[error("Profile configuration error: {message}")]
    Configuration { message: String },

    #[error("No exposed resource with relation '{rel}'")]
    NotFound { rel: String },

    #[error("Unknown projection '{projection}' for type '{source_type}'")]
    UnknownProjection {
        source_type: String,
        projection: String,
    },
}

impl AlpsProfileError {
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(rel: impl Into<String>) -> Self {
        Self::NotFound { rel: rel.into() }
    }
}
