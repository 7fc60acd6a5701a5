//! Server configuration.
//!
//! Read from the JSON file named by `DENTLEAD_CONFIG` (every field optional),
//! then overridden by `DENTLEAD_BIND` and `DENTLEAD_CRM_ENDPOINT`.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use dentlead_core::lead::LeadMetadata;

pub const CONFIG_ENV: &str = "DENTLEAD_CONFIG";
pub const BIND_ENV: &str = "DENTLEAD_BIND";
pub const CRM_ENDPOINT_ENV: &str = "DENTLEAD_CRM_ENDPOINT";

/// Which signal picks the dial code a new form starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InferenceStrategy {
    #[default]
    Slug,
    GeoIp,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CrmConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://zoho.hotelistan.net/api/form-patient".into(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ipapi.co".into(),
            timeout_secs: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub inference: InferenceStrategy,
    pub crm: CrmConfig,
    pub geo: GeoConfig,
    pub lead: LeadMetadata,
    /// JSON catalog layered over the built-in English messages.
    pub catalog: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".into(),
            inference: InferenceStrategy::default(),
            crm: CrmConfig::default(),
            geo: GeoConfig::default(),
            lead: LeadMetadata::default(),
            catalog: None,
        }
    }
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        Self::from_env(|key| std::env::var(key).ok())
    }

    fn from_env(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match var(CONFIG_ENV) {
            Some(path) => {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {path}"))?;
                Self::from_json(&content).with_context(|| format!("parsing config file {path}"))?
            }
            None => Self::default(),
        };

        if let Some(bind) = var(BIND_ENV) {
            config.bind = bind;
        }
        if let Some(endpoint) = var(CRM_ENDPOINT_ENV) {
            config.crm.endpoint = endpoint;
        }
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn crm_timeout(&self) -> Duration {
        Duration::from_secs(self.crm.timeout_secs)
    }

    pub fn geo_timeout(&self) -> Duration {
        Duration::from_secs(self.geo.timeout_secs)
    }
}
