//! Error types for the pact broker client

use thiserror::Error;

/// Main error type for the pact broker client
#[derive(Debug, Error)]
pub enum BrokerClientError {
    /// The broker base URL or a link href could not be parsed
    #[error("Invalid pact broker URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A transport option was missing a companion value or was empty
    #[error("Invalid pact broker client option: {0}")]
    InvalidOption(String),

    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The pact document did not advertise where to publish results
    #[error(
        "Unable to publish verification results as there is no pb:publish-verification-results link"
    )]
    MissingPublishLink,

    /// The broker answered with a non-success status
    #[error("Pact broker rejected verification results with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// Any other failure reported by a publisher implementation
    #[error("{0}")]
    Other(String),
}

/// Result type alias for the pact broker client
pub type Result<T> = std::result::Result<T, BrokerClientError>;
