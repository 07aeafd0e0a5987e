use axum::{http::StatusCode, routing::post, Json, Router};
use chrono::{Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondCalculationRequest {
    pub face_value: f64,
    pub coupon_rate: f64,
    pub market_price: f64,
    pub years_to_maturity: f64,
    #[serde(default = "default_frequency")]
    pub frequency: u32,
}

fn default_frequency() -> u32 {
    2
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BondStatus {
    Premium,
    Discount,
    Par,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashflowRow {
    pub period: u32,
    pub payment_date: String,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, Serialize)]
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

/// Error body: the client looks the message up under this key.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    message: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub fn app() -> Router {
    Router::new().route("/bond/calculate", post(calculate))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn calculate(
    Json(input): Json<BondCalculationRequest>,
) -> Result<Json<BondCalculationResponse>, (StatusCode, Json<ErrorResponse>)> {
    if let Err(message) = check_request(&input) {
        return Err((StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))));
    }
    tracing::debug!(
        face_value = input.face_value,
        market_price = input.market_price,
        "calculating bond metrics"
    );
    Ok(Json(calculate_metrics(&input, Utc::now().date_naive())))
}

fn check_request(input: &BondCalculationRequest) -> Result<(), String> {
    if input.face_value <= 0.0 {
        return Err("faceValue must be greater than 0".to_string());
    }
    if input.coupon_rate <= 0.0 {
        return Err("couponRate must be greater than 0".to_string());
    }
    if input.coupon_rate > 100.0 {
        return Err("couponRate must not exceed 100".to_string());
    }
    if input.market_price <= 0.0 {
        return Err("marketPrice must be greater than 0".to_string());
    }
    if input.years_to_maturity <= 0.0 {
        return Err("yearsToMaturity must be greater than 0".to_string());
    }
    if input.frequency != 1 && input.frequency != 2 {
        return Err("frequency must be 1 or 2".to_string());
    }
    Ok(())
}

/// Bullet-bond figures good enough for a test fixture: level coupons, the
/// principal repaid in the final period, and the standard YTM approximation
/// `(C + (F - P)/n) / ((F + P)/2)` instead of a root solver.
fn calculate_metrics(input: &BondCalculationRequest, start: NaiveDate) -> BondCalculationResponse {
    let face = input.face_value;
    let price = input.market_price;
    let frequency = input.frequency as f64;

    let periods = (input.years_to_maturity * frequency).ceil().max(1.0) as u32;
    let coupon = face * input.coupon_rate / 100.0 / frequency;
    let months_per_period = 12 / input.frequency;

    let cashflows: Vec<CashflowRow> = (1..=periods)
        .map(|period| {
            let is_final = period == periods;
            let date = start
                .checked_add_months(Months::new(months_per_period * (period - 1)))
                .unwrap_or(start);
            CashflowRow {
                period,
                payment_date: date.format("%Y-%m-%d").to_string(),
                payment: if is_final { coupon + face } else { coupon },
                principal: if is_final { face } else { 0.0 },
                interest: coupon,
                balance: if is_final { 0.0 } else { face },
            }
        })
        .collect();

    let annual_coupon = face * input.coupon_rate / 100.0;
    let yield_to_maturity = (annual_coupon + (face - price) / input.years_to_maturity)
        / ((face + price) / 2.0)
        * 100.0;
    let period_rate = yield_to_maturity / 100.0 / frequency;

    let discounted = |row: &CashflowRow| row.payment / (1.0 + period_rate).powi(row.period as i32);
    let present_value: f64 = cashflows.iter().map(discounted).sum();
    let macaulay_duration = cashflows
        .iter()
        .map(|row| (row.period as f64 / frequency) * discounted(row))
        .sum::<f64>()
        / present_value;
    let modified_duration = macaulay_duration / (1.0 + period_rate);

    let status = if price > face {
        BondStatus::Premium
    } else if price < face {
        BondStatus::Discount
    } else {
        BondStatus::Par
    };

    // Settlement is assumed to fall on a coupon date.
    let accrued_interest = 0.0;

    BondCalculationResponse {
        status,
        yield_to_maturity,
        present_value,
        macaulay_duration,
        modified_duration,
        current_bond_price: present_value,
        accrued_interest,
        dirty_price: present_value + accrued_interest,
        cashflows,
    }
}
