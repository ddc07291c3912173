use crate::error::{to_env_var, ConfigError};
use anyhow::Result;
use config::{Config, Environment};
use nova::providers::configs::{
    BedrockProviderConfig, ProviderConfig, DEFAULT_TEMPERATURE, DEFAULT_TOP_P, NOVA_PRO_MODEL_ID,
};
use nova::tools::DisplaySettings;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProviderSettings {
    /// Falls back to `AWS_PROFILE` when unset
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_top_p")]
    pub top_p: f64,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            profile: None,
            model: default_model(),
            top_p: default_top_p(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl ProviderSettings {
    /// The region always comes from `BedrockProviderConfig`, it is not configurable
    pub fn into_config(self) -> Result<BedrockProviderConfig> {
        let from_env = BedrockProviderConfig::from_env()?;
        Ok(BedrockProviderConfig {
            region: from_env.region,
            profile: self.profile.or(from_env.profile),
            model_id: self.model,
            top_p: self.top_p,
            temperature: self.temperature,
        })
    }
}

/// Unset fields fall back to `WIDTH`, `HEIGHT` and `DISPLAY_NUM`
#[derive(Debug, Default, Deserialize)]
pub struct DisplaySection {
    #[serde(default)]
    pub width_px: Option<u32>,
    #[serde(default)]
    pub height_px: Option<u32>,
    #[serde(default)]
    pub display_number: Option<u32>,
}

impl DisplaySection {
    pub fn into_display(self) -> Result<DisplaySettings> {
        let from_env = DisplaySettings::from_env()?;
        Ok(DisplaySettings {
            width_px: self.width_px.unwrap_or(from_env.width_px),
            height_px: self.height_px.unwrap_or(from_env.height_px),
            display_number: self.display_number.or(from_env.display_number),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub display: DisplaySection,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("NOVA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        tracing::debug!(?settings, "loaded settings");
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let unit_interval = 0.0..=1.0;
        if !unit_interval.contains(&self.provider.top_p) {
            return Err(invalid("provider.top_p", "must be between 0 and 1"));
        }
        if !unit_interval.contains(&self.provider.temperature) {
            return Err(invalid("provider.temperature", "must be between 0 and 1"));
        }
        if self.provider.max_tokens == 0 {
            return Err(invalid("provider.max_tokens", "must be greater than 0"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        env_var: to_env_var(field),
        reason: reason.to_string(),
    }
}

fn default_model() -> String {
    NOVA_PRO_MODEL_ID.to_string()
}

fn default_top_p() -> f64 {
    DEFAULT_TOP_P
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    4096
}
