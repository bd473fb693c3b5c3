//! Error types shared by the flag parsers, the commands and the service layer.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppTrustError>;

#[derive(Debug, Error)]
pub enum AppTrustError {
    /// A flag value or a combination of flags was rejected
    #[error("{0}")]
    InvalidFlag(String),

    /// A delimited flag value could not be parsed
    #[error("{0}")]
    Parse(String),

    #[error("failed to read spec file {}: {source}", path.display())]
    SpecFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid spec file: {0}")]
    SpecJson(#[from] serde_json::Error),

    #[error("{0}")]
    Config(String),

    #[error("failed to load configuration: {0}")]
    Confy(#[from] confy::ConfyError),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The server answered with a status code the operation does not accept
    #[error("failed to {operation}. Status code: {status}.\n{body}")]
    Status {
        operation: &'static str,
        status: u16,
        body: String,
    },
}

impl AppTrustError {
    pub fn invalid_flag(message: impl Into<String>) -> Self {
        Self::InvalidFlag(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
