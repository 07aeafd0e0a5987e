//! Stateless HTTP request builder and response classifier.
//!
//! # Design
//! `ApiClient` holds only a base URL and a fixed default header set, and
//! carries no mutable state between calls. Request building and response
//! classification are split so the caller executes the actual round-trip in
//! between. The client is the sole place error kinds are constructed: every
//! non-2xx response and every transport failure is mapped onto exactly one
//! `ClientError` variant here, and higher layers only propagate or match.
//!
//! Classification rules:
//! - 400 is a semantic rejection of the request (`Validation`).
//! - 401/403/404 and 5xx substitute a fixed human-readable message while
//!   preserving the server's raw detail payload for diagnostics.
//! - Any other non-2xx keeps the message extracted from the body (`message`,
//!   then `error`, then `detail`, else the transport's status text).
//! - Transport failures become `Network`, with fixed messages for the
//!   connect-failure and cancellation cases.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, TransportFailure};

/// Message for a 401 response.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized: Please check your credentials";
/// Message for a 403 response.
pub const FORBIDDEN_MESSAGE: &str = "Forbidden: You do not have access to this resource";
/// Message for a 404 response.
pub const NOT_FOUND_MESSAGE: &str = "Resource not found";
/// Message for any 5xx response.
pub const SERVER_ERROR_MESSAGE: &str = "Server error: Please try again later";
/// Message when the transport could not reach the server at all.
pub const CONNECTION_FAILED_MESSAGE: &str =
    "Unable to connect to the server. Please check your internet connection.";
/// Message when the caller cancelled the in-flight request.
pub const REQUEST_CANCELLED_MESSAGE: &str = "Request was cancelled";

/// Extra pieces a caller may attach to a request.
///
/// Query parameters keep their insertion order; caller headers win over the
/// client's defaults on a (case-insensitive) name collision.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

/// A successful response: the deserialized body plus status metadata.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: u16,
    pub status_text: String,
}

/// Stateless client over a fixed base URL with JSON content negotiation.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    default_headers: Vec<(String, String)>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            default_headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ],
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get(&self, endpoint: &str, options: &RequestOptions) -> HttpRequest {
        self.build(HttpMethod::Get, endpoint, options, None)
    }

    pub fn delete(&self, endpoint: &str, options: &RequestOptions) -> HttpRequest {
        self.build(HttpMethod::Delete, endpoint, options, None)
    }

    pub fn post<T: Serialize>(
        &self,
        endpoint: &str,
        body: Option<&T>,
        options: &RequestOptions,
    ) -> Result<HttpRequest, ClientError> {
        let body = self.serialize_body(body)?;
        Ok(self.build(HttpMethod::Post, endpoint, options, body))
    }

    pub fn put<T: Serialize>(
        &self,
        endpoint: &str,
        body: Option<&T>,
        options: &RequestOptions,
    ) -> Result<HttpRequest, ClientError> {
        let body = self.serialize_body(body)?;
        Ok(self.build(HttpMethod::Put, endpoint, options, body))
    }

    /// Classify a response and deserialize the body on success.
    ///
    /// A failure status never yields a response value — it is mapped onto the
    /// error taxonomy instead. A 2xx body that does not deserialize falls
    /// under the "anything else" rule and classifies as `Network`.
    pub fn parse<T: DeserializeOwned>(
        &self,
        response: HttpResponse,
    ) -> Result<ApiResponse<T>, ClientError> {
        if !(200..300).contains(&response.status) {
            return Err(self.classify_error_response(&response));
        }
        let data = serde_json::from_str(&response.body)
            .map_err(|e| ClientError::Network { message: e.to_string() })?;
        Ok(ApiResponse {
            data,
            status: response.status,
            status_text: response.status_text,
        })
    }

    /// Map a failed round-trip onto the error taxonomy.
    pub fn classify_transport(&self, failure: TransportFailure) -> ClientError {
        let message = match failure {
            TransportFailure::ConnectionFailed => CONNECTION_FAILED_MESSAGE.to_string(),
            TransportFailure::Cancelled => REQUEST_CANCELLED_MESSAGE.to_string(),
            TransportFailure::Other(message) => message,
        };
        ClientError::Network { message }
    }

    fn serialize_body<T: Serialize>(&self, body: Option<&T>) -> Result<Option<String>, ClientError> {
        body.map(|value| {
            serde_json::to_string(value).map_err(|e| ClientError::Network { message: e.to_string() })
        })
        .transpose()
    }

    fn build(
        &self,
        method: HttpMethod,
        endpoint: &str,
        options: &RequestOptions,
        body: Option<String>,
    ) -> HttpRequest {
        HttpRequest {
            method,
            url: self.url_for(endpoint, &options.query),
            headers: self.merge_headers(&options.headers),
            body,
        }
    }

    /// Full URL for an endpoint, query parameters appended in insertion order.
    fn url_for(&self, endpoint: &str, query: &[(String, String)]) -> String {
        let url = format!("{}{endpoint}", self.base_url);
        if query.is_empty() {
            return url;
        }
        let query_string = query
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{url}?{query_string}")
    }

    /// Caller headers layered over the defaults; neither input is mutated.
    fn merge_headers(&self, extra: &[(String, String)]) -> Vec<(String, String)> {
        let mut merged = self.default_headers.clone();
        for (name, value) in extra {
            match merged.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
                Some(slot) => slot.1 = value.clone(),
                None => merged.push((name.clone(), value.clone())),
            }
        }
        merged
    }

    fn classify_error_response(&self, response: &HttpResponse) -> ClientError {
        let (message, details) = extract_error_body(response);
        match response.status {
            400 => ClientError::Validation { message },
            401 => ClientError::Api {
                status: 401,
                message: UNAUTHORIZED_MESSAGE.to_string(),
                details,
            },
            403 => ClientError::Api {
                status: 403,
                message: FORBIDDEN_MESSAGE.to_string(),
                details,
            },
            404 => ClientError::Api {
                status: 404,
                message: NOT_FOUND_MESSAGE.to_string(),
                details,
            },
            status if status >= 500 => ClientError::Api {
                status,
                message: SERVER_ERROR_MESSAGE.to_string(),
                details,
            },
            status => ClientError::Api {
                status,
                message,
                details,
            },
        }
    }
}

/// Extract a human-readable message and the raw detail payload from an error
/// body. Message lookup priority: `message`, `error`, `detail` (strings only),
/// falling back to the transport's status text when the body is not JSON or
/// carries none of them. The payload is preserved when it named an `error` or
/// `detail` field.
fn extract_error_body(response: &HttpResponse) -> (String, Option<serde_json::Value>) {
    let parsed: Option<serde_json::Value> = serde_json::from_str(&response.body).ok();
    let Some(serde_json::Value::Object(record)) = parsed else {
        return (response.status_text.clone(), None);
    };

    let message = ["message", "error", "detail"]
        .iter()
        .find_map(|key| record.get(*key).and_then(|v| v.as_str()))
        .unwrap_or(response.status_text.as_str())
        .to_string();

    let details = if record.contains_key("error") || record.contains_key("detail") {
        Some(serde_json::Value::Object(record))
    } else {
        None
    };

    (message, details)
}
