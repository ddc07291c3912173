use anyhow::{anyhow, Result};
use std::env;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const NOVA_PRO_MODEL_ID: &str = "us.amazon.nova-pro-v1:0";
pub const DEFAULT_TOP_P: f64 = 0.95;
pub const DEFAULT_TEMPERATURE: f64 = 0.1;

pub trait ProviderConfig {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self>
    where
        Self: Sized;

    /// Helper function to get environment variables with error handling
    fn get_env(key: &str, required: bool, default: Option<String>) -> Result<Option<String>> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) if !required => Ok(default),
            Err(env::VarError::NotPresent) => Err(anyhow!(
                "Environment variable '{}' is required but not set.",
                key
            )),
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BedrockProviderConfig {
    pub region: String,
    /// Named profile from the shared AWS config files
    pub profile: Option<String>,
    pub model_id: String,
    pub top_p: f64,
    pub temperature: f64,
}

impl BedrockProviderConfig {
    pub fn new(profile: Option<String>) -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            profile,
            model_id: NOVA_PRO_MODEL_ID.to_string(),
            top_p: DEFAULT_TOP_P,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl Default for BedrockProviderConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ProviderConfig for BedrockProviderConfig {
    fn from_env() -> Result<Self> {
        let profile = Self::get_env("AWS_PROFILE", false, None)?.filter(|p| !p.is_empty());
        Ok(Self::new(profile))
    }
}
