use std::path::Path;

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum WordhashError {
    #[error("Wordlist must contain exactly 256 words, got {len}")]
    WordlistSize { len: usize },

    #[error("Invalid hex digest '{digest}': {source}")]
    InvalidDigest {
        digest: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Failed to read wordlist file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize response JSON: {source}")]
    ResponseSerialization {
        #[source]
        source: serde_json::Error,
    },
}

impl WordhashError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            Self::WordlistSize { .. } => ErrorResponse {
                error: ErrorBody {
                    r#type: "invalid_wordlist".to_string(),
                    message: self.to_string(),
                    suggestion: Some(
                        "Provide a wordlist with exactly 256 entries, one word per line"
                            .to_string(),
                    ),
                },
            },
            Self::InvalidDigest { .. } => ErrorResponse {
                error: ErrorBody {
                    r#type: "invalid_digest".to_string(),
                    message: self.to_string(),
                    suggestion: Some(
                        "Pass an even-length hexadecimal string such as '60ad8d0d871b6095808297'"
                            .to_string(),
                    ),
                },
            },
            Self::Io { .. } => ErrorResponse {
                error: ErrorBody {
                    r#type: "io_error".to_string(),
                    message: self.to_string(),
                    suggestion: None,
                },
            },
            Self::ResponseSerialization { .. } => ErrorResponse {
                error: ErrorBody {
                    r#type: "serialization_error".to_string(),
                    message: self.to_string(),
                    suggestion: None,
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub r#type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}
