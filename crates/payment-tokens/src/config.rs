use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Value shipped in sample `.env` files; treated as "not configured".
pub const PLACEHOLDER_ADDRESS: &str = "your_address_here";

pub const ETHEREUM_USDC_ADDRESS_KEY: &str = "ETHEREUM_USDC_ADDRESS";
pub const POLYGON_USDC_ADDRESS_KEY: &str = "POLYGON_USDC_ADDRESS";
pub const BASE_USDC_ADDRESS_KEY: &str = "BASE_USDC_ADDRESS";

/// Contract address overrides applied when the registry is built.
///
/// Every field is optional. A missing, empty, or placeholder value falls back
/// to the compiled-in address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethereum_usdc_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polygon_usdc_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_usdc_address: Option<String>,
}

impl RegistryConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            ethereum_usdc_address: lookup(ETHEREUM_USDC_ADDRESS_KEY),
            polygon_usdc_address: lookup(POLYGON_USDC_ADDRESS_KEY),
            base_usdc_address: lookup(BASE_USDC_ADDRESS_KEY),
        }
    }

    /// Parse overrides from a JSON object with camelCase keys.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }
}

/// Pick the configured address unless it is missing, empty, or the placeholder.
pub fn resolve_address(configured: Option<&str>, fallback: &str) -> String {
    match configured {
        Some(address) if !address.is_empty() && address != PLACEHOLDER_ADDRESS => {
            address.to_string()
        }
        _ => fallback.to_string(),
    }
}
