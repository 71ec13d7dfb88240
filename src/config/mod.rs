use std::env;
use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::str::FromStr;

use crate::screening::ScreeningCriteria;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the screening service.
///
/// Besides the usual server and logging knobs, deployments can tune the
/// screening thresholds through `APP_*` environment variables without code
/// changes; anything not overridden keeps the standard criteria defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub criteria: ScreeningCriteria,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            criteria: load_criteria()?,
        })
    }
}

/// Screening thresholds, starting from the standard criteria and applying
/// any per-threshold environment override.
fn load_criteria() -> Result<ScreeningCriteria, ConfigError> {
    let mut criteria = ScreeningCriteria::default();

    override_threshold("APP_MIN_AGE", &mut criteria.min_age)?;
    override_threshold("APP_MAX_AGE", &mut criteria.max_age)?;
    override_threshold(
        "APP_PARENTAL_CONSENT_AGE",
        &mut criteria.parental_consent_age,
    )?;
    override_threshold("APP_MIN_WEIGHT_KG", &mut criteria.min_weight_kg)?;
    override_threshold("APP_MIN_HEMOGLOBIN_MALE", &mut criteria.min_hemoglobin_male)?;
    override_threshold(
        "APP_MIN_HEMOGLOBIN_FEMALE",
        &mut criteria.min_hemoglobin_female,
    )?;
    override_threshold("APP_MIN_SYSTOLIC", &mut criteria.min_systolic)?;
    override_threshold("APP_MAX_SYSTOLIC", &mut criteria.max_systolic)?;
    override_threshold("APP_MIN_DIASTOLIC", &mut criteria.min_diastolic)?;
    override_threshold("APP_MAX_DIASTOLIC", &mut criteria.max_diastolic)?;
    override_threshold("APP_MIN_PULSE", &mut criteria.min_pulse)?;
    override_threshold("APP_MAX_PULSE", &mut criteria.max_pulse)?;

    Ok(criteria)
}

fn override_threshold<T: FromStr>(key: &'static str, slot: &mut T) -> Result<(), ConfigError> {
    match env::var(key) {
        Ok(raw) => {
            *slot = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidThreshold { key })?;
            Ok(())
        }
        Err(env::VarError::NotPresent) => Ok(()),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidThreshold { key }),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid u16")]
    InvalidPort,
    #[error("APP_HOST must parse to an IPv4 or IPv6 address")]
    InvalidHost { source: AddrParseError },
    #[error("{key} must be a valid number")]
    InvalidThreshold { key: &'static str },
}
