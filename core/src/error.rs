//! Error taxonomy for the bond API client.
//!
//! # Design
//! Exactly one of three disjoint kinds describes a failed call. `Validation`
//! gets a dedicated variant because callers treat "the server rejected the
//! request as semantically invalid" differently from every other non-2xx
//! status, which land in `Api` with the raw status code and any detail
//! payload the server supplied. `Network` covers everything that prevented a
//! classifiable response from existing at all: connectivity failures,
//! cancellation, and exceptions not already classified.
//!
//! `ApiClient` is the sole constructor of these values; higher layers only
//! propagate or pattern-match, never reclassify.

use std::fmt;

/// Errors returned by `ApiClient` and everything layered on top of it.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The endpoint rejected the request as semantically invalid (HTTP 400).
    Validation { message: String },

    /// Any other non-2xx response. `details` preserves the server's raw
    /// error payload for diagnostics when one was present.
    Api {
        status: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// The request could not complete at the transport level.
    Network { message: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Validation { message } => {
                write!(f, "validation rejected: {message}")
            }
            ClientError::Api { status, message, .. } => {
                write!(f, "HTTP {status}: {message}")
            }
            ClientError::Network { message } => {
                write!(f, "network failure: {message}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

impl ClientError {
    /// The HTTP status code, when the failure came from a classified response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
