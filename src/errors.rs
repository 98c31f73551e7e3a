use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// RFC 6241 error categories, as carried by a RESTCONF error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorType {
    Transport,
    Rpc,
    Protocol,
    Application,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::Transport => f.write_str("transport"),
            ErrorType::Rpc => f.write_str("rpc"),
            ErrorType::Protocol => f.write_str("protocol"),
            ErrorType::Application => f.write_str("application"),
        }
    }
}

/// RFC 8040 error tags, each with a fixed HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorTag {
    InvalidValue,
    MalformedMessage,
    UnknownElement,
    OperationNotSupported,
}

impl ErrorTag {
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorTag::InvalidValue => 400,
            ErrorTag::MalformedMessage => 400,
            ErrorTag::UnknownElement => 400,
            ErrorTag::OperationNotSupported => 501,
        }
    }
}

impl fmt::Display for ErrorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorTag::InvalidValue => f.write_str("invalid-value"),
            ErrorTag::MalformedMessage => f.write_str("malformed-message"),
            ErrorTag::UnknownElement => f.write_str("unknown-element"),
            ErrorTag::OperationNotSupported => f.write_str("operation-not-supported"),
        }
    }
}

/// A structured RESTCONF error raised while parsing a fields expression.
///
/// Every syntax or resolution failure in the fields parser collapses to the
/// same externally visible triple (`protocol`, `invalid-value`, 400); the
/// message and byte offset are kept for diagnostics only.
#[derive(Debug, Error, Serialize)]
#[error("{error_type} error ({tag}): {message} at index {offset}")]
pub struct FieldsError {
    pub error_type: ErrorType,
    pub tag: ErrorTag,
    pub message: String,
    pub offset: usize,
}

impl FieldsError {
    pub fn new(error_type: ErrorType, tag: ErrorTag, message: String, offset: usize) -> Self {
        Self {
            error_type,
            tag,
            message,
            offset,
        }
    }

    /// A client-attributable fields expression fault.
    pub fn invalid_value(message: String, offset: usize) -> Self {
        Self::new(ErrorType::Protocol, ErrorTag::InvalidValue, message, offset)
    }

    pub fn status_code(&self) -> u16 {
        self.tag.status_code()
    }
}
