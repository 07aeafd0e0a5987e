//! Bond service: binds the generic client to the calculation endpoint.
//!
//! # Design
//! One endpoint, one request/response schema. The request body passes through
//! unmodified and the response is trusted structurally — no range checks on
//! the numbers a calculation returns. Every failure from the client is
//! already one of the three taxonomy kinds, so this layer propagates with `?`
//! and never reclassifies.

use crate::client::{ApiClient, ApiResponse, RequestOptions};
use crate::error::ClientError;
use crate::http::{HttpRequest, HttpResponse, TransportFailure};
use crate::types::{BondCalculationRequest, BondCalculationResponse};

/// Route for the calculation endpoint, relative to the base URL.
pub const CALCULATE_ROUTE: &str = "/bond/calculate";

/// Client for the bond calculation service.
///
/// Host-does-IO split: `build_calculate` produces the `HttpRequest`, the host
/// executes it, and `parse_calculate` consumes the `HttpResponse`.
#[derive(Debug, Clone)]
pub struct BondService {
    client: ApiClient,
}

impl BondService {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: ApiClient::new(base_url),
        }
    }

    /// Service bound to the base URL from the environment.
    pub fn from_env() -> Self {
        Self::new(&crate::config::api_base_url())
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Build the calculation request. The body is the request serialized
    /// as-is.
    pub fn build_calculate(
        &self,
        request: &BondCalculationRequest,
    ) -> Result<HttpRequest, ClientError> {
        self.client
            .post(CALCULATE_ROUTE, Some(request), &RequestOptions::default())
    }

    /// Classify the response and return the calculation result on success.
    pub fn parse_calculate(
        &self,
        response: HttpResponse,
    ) -> Result<BondCalculationResponse, ClientError> {
        let parsed: ApiResponse<BondCalculationResponse> = self.client.parse(response)?;
        Ok(parsed.data)
    }

    /// Map a failed round-trip onto the error taxonomy (delegates to the
    /// client, the sole classifier).
    pub fn classify_transport(&self, failure: TransportFailure) -> ClientError {
        self.client.classify_transport(failure)
    }
}
