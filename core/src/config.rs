//! Runtime configuration.
//!
//! The one externally tunable value is the service base URL, supplied by the
//! environment at run time.

/// Environment variable naming the bond service base URL.
pub const API_BASE_URL_ENV: &str = "BOND_API_BASE_URL";

/// Base URL used when the environment does not provide one.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000";

/// The configured base URL, falling back to the local default.
pub fn api_base_url() -> String {
    std::env::var(API_BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
}
