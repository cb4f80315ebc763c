//! OSRM HTTP adapter for travel-cost matrices.

use std::env;

use serde::Deserialize;
use tracing::debug;

use crate::error::{ConfigError, ProviderError};
use crate::options::TravelMode;
use crate::place::LocationKey;
use crate::traits::{CostProvider, CostRow};

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "car".to_string(),
            timeout_secs: 10,
        }
    }
}

impl OsrmConfig {
    pub fn for_mode(mode: TravelMode) -> Self {
        Self {
            profile: mode.osrm_profile().to_string(),
            ..Self::default()
        }
    }

    /// Read `OSRM_BASE_URL`, `OSRM_PROFILE` and `OSRM_TIMEOUT_SECS`,
    /// keeping defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like [`OsrmConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(base_url) = lookup("OSRM_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(profile) = lookup("OSRM_PROFILE") {
            config.profile = profile;
        }
        if let Some(timeout) = lookup("OSRM_TIMEOUT_SECS") {
            config.timeout_secs = timeout.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "OSRM_TIMEOUT_SECS",
                value: timeout.clone(),
            })?;
        }
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn table_url(&self, locations: &[LocationKey]) -> Result<String, ProviderError> {
        let coords = locations
            .iter()
            .map(|key| {
                key.coords()
                    .map(|(lat, lng)| format!("{:.6},{:.6}", lng, lat))
                    .ok_or_else(|| ProviderError::MissingCoordinates(key.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?
            .join(";");

        Ok(format!(
            "{}/table/v1/{}/{}?annotations=duration",
            self.config.base_url, self.config.profile, coords
        ))
    }
}

impl CostProvider for OsrmClient {
    fn matrix_for(&self, locations: &[LocationKey]) -> Result<Vec<CostRow>, ProviderError> {
        if locations.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.table_url(locations)?;
        debug!(%url, "requesting OSRM table");

        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmTableResponse>())?;

        if body.code != "Ok" {
            return Err(ProviderError::service(
                body.code,
                body.message.unwrap_or_default(),
            ));
        }

        Ok(body.durations.unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
struct OsrmTableResponse {
    code: String,
    message: Option<String>,
    durations: Option<Vec<Option<Vec<Option<f64>>>>>,
}
