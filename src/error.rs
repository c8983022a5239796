//! Error types for the `AskMyCity` directory client.

use thiserror::Error;

/// Classified failures raised by the catalog client.
///
/// The client classifies and raises; it never retries or swallows. The
/// selector and resolver convert these into UI-facing status values and stop
/// propagation there.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Transport-level failure: connectivity, timeout, or a server error
    /// status that is not a not-found signal.
    #[error("network error: {message}")]
    Network { message: String },

    /// The response body could not be parsed into the expected shape.
    #[error("malformed response: {message}")]
    Decode { message: String },

    /// The backend reported the requested slug unknown.
    #[error("city not found: {slug}")]
    NotFound { slug: String },

    /// Missing or malformed configuration, detected at startup.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// A caller precondition was violated before any request was made.
    #[error("invalid input: {message}")]
    Validation { message: String },
}

impl CatalogError {
    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new decode error
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a new not-found error for the given slug
    pub fn not_found<S: Into<String>>(slug: S) -> Self {
        Self::NotFound { slug: slug.into() }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Network { .. } | CatalogError::Decode { .. } => {
                "Failed to load services. Please try again.".to_string()
            }
            CatalogError::NotFound { .. } => {
                "The city you're looking for doesn't exist in our database.".to_string()
            }
            CatalogError::Config { .. } => {
                "Configuration error. Please check the backend URL settings.".to_string()
            }
            CatalogError::Validation { message } => {
                format!("Invalid input: {message}")
            }
        }
    }
}
