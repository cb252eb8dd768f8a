use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: &'static str,
    },
    #[error("Failed to send request")]
    Transport {
        #[source]
        cause: reqwest::Error,
    },
    #[error("GitHub API responded with status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Failed to serialize request")]
    SerializeRequest {
        #[source]
        cause: serde_json::Error,
    },
    #[error("Failed to parse response")]
    ParseResponse {
        #[source]
        cause: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        Error::InvalidArgument { field, reason }
    }

    /// HTTP status of an [`Error::Api`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Body of an [`Error::Api`] failure parsed as JSON, if it is JSON.
    pub fn api_payload(&self) -> Option<Value> {
        match self {
            Error::Api { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(cause: reqwest::Error) -> Self {
        Error::Transport { cause }
    }
}
