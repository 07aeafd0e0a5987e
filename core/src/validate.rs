//! Field-level validation that gates submission.
//!
//! # Design
//! `validate` is a pure function from a candidate request to a map of
//! per-field error messages. Every rule is evaluated independently — there is
//! no short-circuiting, so a form with several bad fields reports all of them
//! at once. A field absent from the map is valid; submission proceeds only
//! when the map is empty. Frequency never appears here: the `Frequency` type
//! only has valid inhabitants.
//!
//! The map is keyed by a closed `Field` enum rather than strings so that the
//! controller's per-field error clearing cannot drift from the rule set.

use std::collections::BTreeMap;

use crate::types::BondCalculationRequest;

/// Identifies one input field of the calculation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FaceValue,
    CouponRate,
    MarketPrice,
    YearsToMaturity,
    Frequency,
}

impl Field {
    /// The field's wire name, matching the request's JSON keys.
    pub fn name(self) -> &'static str {
        match self {
            Field::FaceValue => "faceValue",
            Field::CouponRate => "couponRate",
            Field::MarketPrice => "marketPrice",
            Field::YearsToMaturity => "yearsToMaturity",
            Field::Frequency => "frequency",
        }
    }
}

/// Per-field error messages. Empty means the request may be submitted.
pub type FieldErrors = BTreeMap<Field, String>;

/// A "missing" field arrives as zero (the form's empty-input sentinel), so
/// required-and-positive collapses into one check. Non-finite input can only
/// come from a programmatic caller, but it is just as unsubmittable.
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Validate a candidate request, returning one message per failing field.
pub fn validate(request: &BondCalculationRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if !is_positive(request.face_value) {
        errors.insert(
            Field::FaceValue,
            "Face value must be greater than 0".to_string(),
        );
    }
    if !is_positive(request.coupon_rate) {
        errors.insert(
            Field::CouponRate,
            "Coupon rate must be greater than 0".to_string(),
        );
    } else if request.coupon_rate > 100.0 {
        errors.insert(
            Field::CouponRate,
            "Coupon rate must not exceed 100".to_string(),
        );
    }
    if !is_positive(request.market_price) {
        errors.insert(
            Field::MarketPrice,
            "Market price must be greater than 0".to_string(),
        );
    }
    if !is_positive(request.years_to_maturity) {
        errors.insert(
            Field::YearsToMaturity,
            "Years to maturity must be greater than 0".to_string(),
        );
    }

    errors
}
