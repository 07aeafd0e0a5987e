//! Domain DTOs for the bond calculation API.
//!
//! # Design
//! These types mirror the service's wire schema (camelCase JSON) but are
//! defined independently from the mock-server crate; integration tests catch
//! schema drift between the two. Response fields are trusted structurally —
//! the client never range-checks the numbers a calculation returns, it only
//! displays them. The few derived figures the presentation layer needs
//! (current yield, interest and payment totals) are methods here so hosts do
//! not re-implement them.

use serde::{Deserialize, Serialize};

/// Number of coupon payments per year.
///
/// The form offers exactly these two options, so a request can never carry an
/// unsupported frequency. On the wire this is the plain integer payments per
/// year (1 or 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Frequency {
    Annual,
    SemiAnnual,
}

impl Frequency {
    /// Payments per year.
    pub fn per_year(self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
        }
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Frequency::SemiAnnual
    }
}

impl From<Frequency> for u32 {
    fn from(frequency: Frequency) -> Self {
        frequency.per_year()
    }
}

impl TryFrom<u32> for Frequency {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Frequency::Annual),
            2 => Ok(Frequency::SemiAnnual),
            other => Err(format!("unsupported payment frequency: {other}")),
        }
    }
}

/// Parameters for one calculation request.
///
/// Validation happens in `validate` before a request is submitted; the type
/// itself only fixes the wire shape. `frequency` defaults to semi-annual when
/// absent, independent of user entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondCalculationRequest {
    pub face_value: f64,
    pub coupon_rate: f64,
    pub market_price: f64,
    pub years_to_maturity: f64,
    #[serde(default)]
    pub frequency: Frequency,
}

/// Whether the bond trades above, below, or at face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BondStatus {
    Premium,
    Discount,
    Par,
}

/// One scheduled payment in the cashflow schedule.
///
/// Periods are 1-based, sequential, and ordered ascending; hosts use them
/// directly as table row keys. `payment_date` is an opaque calendar string
/// produced by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashflowRow {
    pub period: u32,
    pub payment_date: String,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub balance: f64,
}

/// The service's answer to a calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondCalculationResponse {
    pub status: BondStatus,
    pub yield_to_maturity: f64,
    pub present_value: f64,
    pub macaulay_duration: f64,
    pub modified_duration: f64,
    pub current_bond_price: f64,
    pub accrued_interest: f64,
    pub dirty_price: f64,
    pub cashflows: Vec<CashflowRow>,
}

impl BondCalculationResponse {
    /// First-period interest over the current bond price, as a percentage.
    pub fn current_yield(&self) -> f64 {
        let first_interest = self.cashflows.first().map_or(0.0, |row| row.interest);
        first_interest / self.current_bond_price * 100.0
    }

    /// Total interest paid over the life of the schedule.
    pub fn total_interest(&self) -> f64 {
        self.cashflows.iter().map(|row| row.interest).sum()
    }

    /// Total of all scheduled payments, used for table footers.
    pub fn total_payments(&self) -> f64 {
        self.cashflows.iter().map(|row| row.payment).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_camel_case_fields() {
        let request = BondCalculationRequest {
            face_value: 1000.0,
            coupon_rate: 5.0,
            market_price: 950.0,
            years_to_maturity: 5.0,
            frequency: Frequency::SemiAnnual,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["faceValue"], 1000.0);
        assert_eq!(json["couponRate"], 5.0);
        assert_eq!(json["marketPrice"], 950.0);
        assert_eq!(json["yearsToMaturity"], 5.0);
        assert_eq!(json["frequency"], 2);
    }

    #[test]
    fn frequency_defaults_to_semi_annual() {
        let request: BondCalculationRequest = serde_json::from_str(
            r#"{"faceValue":1000,"couponRate":5,"marketPrice":950,"yearsToMaturity":5}"#,
        )
        .unwrap();
        assert_eq!(request.frequency, Frequency::SemiAnnual);
    }

    #[test]
    fn frequency_accepts_annual() {
        let request: BondCalculationRequest = serde_json::from_str(
            r#"{"faceValue":1000,"couponRate":5,"marketPrice":950,"yearsToMaturity":5,"frequency":1}"#,
        )
        .unwrap();
        assert_eq!(request.frequency, Frequency::Annual);
        assert_eq!(request.frequency.per_year(), 1);
    }

    #[test]
    fn frequency_rejects_unsupported_values() {
        let result: Result<BondCalculationRequest, _> = serde_json::from_str(
            r#"{"faceValue":1000,"couponRate":5,"marketPrice":950,"yearsToMaturity":5,"frequency":4}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn response_roundtrips_through_json() {
        let response = BondCalculationResponse {
            status: BondStatus::Discount,
            yield_to_maturity: 6.15,
            present_value: 948.7,
            macaulay_duration: 4.4,
            modified_duration: 4.27,
            current_bond_price: 950.0,
            accrued_interest: 0.0,
            dirty_price: 950.0,
            cashflows: vec![CashflowRow {
                period: 1,
                payment_date: "2026-02-05".to_string(),
                payment: 25.0,
                principal: 0.0,
                interest: 25.0,
                balance: 1000.0,
            }],
        };
        let json = serde_json::to_string(&response).unwrap();
        let back: BondCalculationResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn response_deserializes_camel_case_wire_format() {
        let response: BondCalculationResponse = serde_json::from_str(
            r#"{
                "status": "Premium",
                "yieldToMaturity": 4.2,
                "presentValue": 1050.0,
                "macaulayDuration": 4.5,
                "modifiedDuration": 4.4,
                "currentBondPrice": 1050.0,
                "accruedInterest": 1.2,
                "dirtyPrice": 1051.2,
                "cashflows": []
            }"#,
        )
        .unwrap();
        assert_eq!(response.status, BondStatus::Premium);
        assert_eq!(response.yield_to_maturity, 4.2);
        assert!(response.cashflows.is_empty());
    }

    #[test]
    fn derived_metrics_from_cashflows() {
        let row = |period: u32, payment: f64, interest: f64| CashflowRow {
            period,
            payment_date: format!("2026-{:02}-05", period),
            payment,
            principal: 0.0,
            interest,
            balance: 1000.0,
        };
        let response = BondCalculationResponse {
            status: BondStatus::Par,
            yield_to_maturity: 5.0,
            present_value: 1000.0,
            macaulay_duration: 1.0,
            modified_duration: 0.97,
            current_bond_price: 1000.0,
            accrued_interest: 0.0,
            dirty_price: 1000.0,
            cashflows: vec![row(1, 25.0, 25.0), row(2, 1025.0, 25.0)],
        };
        assert_eq!(response.current_yield(), 2.5);
        assert_eq!(response.total_interest(), 50.0);
        assert_eq!(response.total_payments(), 1050.0);
    }

    #[test]
    fn derived_metrics_with_empty_schedule() {
        let response = BondCalculationResponse {
            status: BondStatus::Par,
            yield_to_maturity: 0.0,
            present_value: 0.0,
            macaulay_duration: 0.0,
            modified_duration: 0.0,
            current_bond_price: 1000.0,
            accrued_interest: 0.0,
            dirty_price: 0.0,
            cashflows: Vec::new(),
        };
        assert_eq!(response.current_yield(), 0.0);
        assert_eq!(response.total_interest(), 0.0);
    }
}
