//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and classifies `HttpResponse` values
//! without ever touching the network — the caller (host) is responsible for
//! executing the actual I/O. This separation keeps the core deterministic and
//! easy to test: the only suspension point in a submission is the round-trip
//! the host performs between build and parse.
//!
//! All fields use owned types (`String`, `Vec`) so values can be handed to
//! whatever transport the host uses without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `ApiClient`. `url` is the full URL including the query string.
/// The caller executes this request against the network and returns the
/// corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// back for status classification and deserialization. `status_text` is the
/// transport's reason phrase ("Bad Request"); it is the fallback message when
/// an error body carries nothing usable.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// How the host reports that the round-trip itself failed, leaving no
/// `HttpResponse` to classify.
///
/// The host maps its transport's failure modes onto these cases and passes
/// the value to `ApiClient::classify_transport`; it never constructs error
/// kinds itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    /// Connection could not be established (DNS failure, refused, unreachable).
    ConnectionFailed,
    /// The caller cancelled the in-flight request.
    Cancelled,
    /// Any other transport-level failure, with the underlying message.
    Other(String),
}
