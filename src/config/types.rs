//! Configuration types for the calculator service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section has
//! defaults, so a partial file (or none at all in tests) is enough.

use serde::Deserialize;

/// Default year of the projected average salary announcement.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2025;

/// Default URL of the announcement page. `{year}` is substituted.
pub const DEFAULT_URL_TEMPLATE: &str = "https://www.zus.pl/-/nowe-wysoko%C5%9Bci-sk%C5%82adek-na-ubezpieczenia-spo%C5%82eczne-w-{year}-r.?p_l_back_url=%2Fwyniki-wyszukiwania%3Fquery%3Dkwota%2Bprognozowanego%2Bprzeci%25C4%2599tnego%2Bwynagrodzenia%26dateFrom%3D%26dateTo%3D";

/// Default pattern locating the salary figure. `{year}` is substituted and the
/// first capture group holds the numeral.
pub const DEFAULT_SALARY_PATTERN: &str = r"Kwota\s+prognozowanego\s+przeciętnego\s+wynagrodzenia\s+w\s+{year}\s+roku\s+wynosi\s+([\d\s.,]+)\s*zł\.?";

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind_address: String,
    /// Origins allowed to call the API from a browser.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:5173".to_string(),
            ],
        }
    }
}

/// Where and how often to fetch the reference salary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReferenceDataConfig {
    /// The contribution year to fetch figures for.
    pub year: i32,
    /// Page URL with a `{year}` placeholder.
    pub url_template: String,
    /// Salary regex with a `{year}` placeholder.
    pub salary_pattern: String,
    /// Timeout for the single fetch attempt.
    pub request_timeout_secs: u64,
    /// How long a successful fetch is reused.
    pub cache_ttl_secs: i64,
}

impl Default for ReferenceDataConfig {
    fn default() -> Self {
        Self {
            year: DEFAULT_REFERENCE_YEAR,
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            salary_pattern: DEFAULT_SALARY_PATTERN.to_string(),
            request_timeout_secs: 10,
            cache_ttl_secs: 3600,
        }
    }
}

impl ReferenceDataConfig {
    /// Returns the page URL for the configured year.
    pub fn url(&self) -> String {
        self.url_template.replace("{year}", &self.year.to_string())
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub filter: String,
    /// Emit JSON lines instead of compact text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "b2b_contributions=info,info".to_string(),
            json: false,
        }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Reference data fetching settings.
    pub reference_data: ReferenceDataConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}
