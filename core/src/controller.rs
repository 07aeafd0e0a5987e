//! Submission state machine.
//!
//! # Design
//! The controller makes the submission lifecycle an explicit enumerated state
//! plus a transition function, so resubmission and edge cases are testable
//! without any rendering. Validation is synchronous, so the transient
//! validating step is simply the body of `submit`: a call either lands in
//! `Rejected` (field errors, no request built) or hands the host an
//! `HttpRequest` and enters `Loading`. The host reports the round-trip result
//! through `complete` / `fail`, which settle into `Success` or `Failed`.
//!
//! Error-kind classification stays in the HTTP client; this layer only
//! pattern-matches to produce the user-facing message, and mirrors server
//! detail payloads (together with the outbound request) to the diagnostic
//! channel via `tracing`.
//!
//! A new submit is permitted from any settled state and restarts validation
//! from scratch. Disabling inputs during `Loading` is the host's job; the
//! controller just reports `is_loading`.

use crate::error::ClientError;
use crate::http::{HttpRequest, HttpResponse, TransportFailure};
use crate::service::BondService;
use crate::types::{BondCalculationRequest, BondCalculationResponse};
use crate::validate::{validate, Field, FieldErrors};

/// Where one submission attempt currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    /// No request in flight, nothing to display.
    Idle,
    /// Validation failed; per-field errors are set and no request was built.
    Rejected,
    /// Request handed to the host, round-trip pending.
    Loading,
    /// The service answered; the result is stored.
    Success(BondCalculationResponse),
    /// The call failed; carries the user-facing message.
    Failed(String),
}

/// What `submit` did with the candidate request.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; nothing left the controller.
    Rejected,
    /// The request could not be built; state is `Failed`.
    Failed,
    /// Execute this request and report back via `complete` or `fail`.
    Dispatched(HttpRequest),
}

/// Orchestrates validate → call service → transition state.
#[derive(Debug)]
pub struct SubmissionController {
    service: BondService,
    state: SubmissionState,
    field_errors: FieldErrors,
    last_request: Option<BondCalculationRequest>,
}

impl SubmissionController {
    pub fn new(service: BondService) -> Self {
        Self {
            service,
            state: SubmissionState::Idle,
            field_errors: FieldErrors::new(),
            last_request: None,
        }
    }

    /// Validate and, if clean, build the calculation request for the host to
    /// execute. Local validation failures never reach the network layer.
    pub fn submit(&mut self, request: BondCalculationRequest) -> SubmitOutcome {
        let errors = validate(&request);
        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "submission rejected by validation");
            self.field_errors = errors;
            self.state = SubmissionState::Rejected;
            return SubmitOutcome::Rejected;
        }

        self.field_errors.clear();
        let built = self.service.build_calculate(&request);
        self.last_request = Some(request);
        match built {
            Ok(http_request) => {
                self.state = SubmissionState::Loading;
                SubmitOutcome::Dispatched(http_request)
            }
            Err(error) => {
                self.fail_with(error);
                SubmitOutcome::Failed
            }
        }
    }

    /// Feed back the response of a dispatched request.
    pub fn complete(&mut self, response: HttpResponse) {
        match self.service.parse_calculate(response) {
            Ok(result) => {
                tracing::debug!(status = ?result.status, "calculation succeeded");
                self.state = SubmissionState::Success(result);
            }
            Err(error) => self.fail_with(error),
        }
    }

    /// Feed back a transport-level failure of a dispatched request.
    pub fn fail(&mut self, failure: TransportFailure) {
        let error = self.service.classify_transport(failure);
        self.fail_with(error);
    }

    /// Clear the edited field's error — and only that one. The field is not
    /// re-validated until the next submit.
    pub fn edit_field(&mut self, field: Field) {
        self.field_errors.remove(&field);
    }

    /// Back to `Idle`, dropping result, error message, and field errors. The
    /// last-request snapshot is kept for display echo.
    pub fn reset(&mut self) {
        self.state = SubmissionState::Idle;
        self.field_errors.clear();
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn last_request(&self) -> Option<&BondCalculationRequest> {
        self.last_request.as_ref()
    }

    pub fn result(&self) -> Option<&BondCalculationResponse> {
        match &self.state {
            SubmissionState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SubmissionState::Loading)
    }

    fn fail_with(&mut self, error: ClientError) {
        tracing::error!(%error, "calculation failed");
        let message = match &error {
            ClientError::Validation { message } => format!("Validation Error: {message}"),
            ClientError::Api {
                status,
                message,
                details,
            } => {
                if let Some(details) = details {
                    tracing::error!(%details, "server error details");
                }
                if let Some(request) = &self.last_request {
                    tracing::error!(request = ?request, "request data");
                }
                format!("Server Error ({status}): {message}")
            }
            ClientError::Network { message } => format!("Network Error: {message}"),
        };
        self.state = SubmissionState::Failed(message);
    }
}
