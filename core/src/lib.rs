//! Client core for the bond calculation service.
//!
//! # Overview
//! Collects bond parameters, validates them field by field, submits them to a
//! remote calculation endpoint, and exposes the returned metrics and cashflow
//! schedule. Builds `HttpRequest` values and classifies `HttpResponse` values
//! without touching the network (host-does-IO pattern); the caller executes
//! the actual round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `ApiClient` is stateless — base URL and fixed default headers only. It
//!   is the sole constructor of the three error kinds (`Validation`, `Api`,
//!   `Network`); everything above it propagates or pattern-matches.
//! - `BondService` binds the client to the one calculation endpoint; the
//!   request body passes through unmodified and the response is trusted
//!   structurally.
//! - `validate` gates submission with per-field error messages; a rejected
//!   form never reaches the network layer.
//! - `SubmissionController` is the explicit state machine the presentation
//!   layer observes: Idle → Loading/Rejected → Success/Failed → Idle.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod service;
pub mod types;
pub mod validate;

pub use client::{ApiClient, ApiResponse, RequestOptions};
pub use controller::{SubmissionController, SubmissionState, SubmitOutcome};
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, TransportFailure};
pub use service::BondService;
pub use types::{
    BondCalculationRequest, BondCalculationResponse, BondStatus, CashflowRow, Frequency,
};
pub use validate::{validate, Field, FieldErrors};
