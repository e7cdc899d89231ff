//! Error types for tagging service access

use lineage_core::retry::HttpStatusError;
use thiserror::Error;

/// Result type alias using lineage-tags' Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while talking to the tagging service
#[derive(Error, Debug)]
pub enum Error {
    /// The configured base URL is not a valid URL
    #[error("Invalid tagging service URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status
    #[error("Tagging service returned {status} for {url}: {body}")]
    Status { url: String, status: u16, body: String },

    /// The response body was not the expected JSON
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl Error {
    /// Create a status error
    pub fn status(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            url: url.into(),
            status,
            body: body.into(),
        }
    }
}

impl HttpStatusError for Error {
    fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Transport { source, .. } | Error::Decode { source, .. } => {
                source.status().map(|s| s.as_u16())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code() {
        let err = Error::status("http://clouddriver/tags", 503, "down");
        assert_eq!(err.status_code(), Some(503));
        assert_eq!(
            err.to_string(),
            "Tagging service returned 503 for http://clouddriver/tags: down"
        );
    }

    #[test]
    fn test_url_errors_have_no_status() {
        let err = Error::InvalidUrl {
            url: "not a url".to_string(),
            source: url::Url::parse("not a url").unwrap_err(),
        };
        assert_eq!(err.status_code(), None);
    }
}
