use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {env_var}: {reason}")]
    Invalid { env_var: String, reason: String },
}

/// Environment variable that sets a dotted settings key, e.g. `provider.top_p`
pub fn to_env_var(field_path: &str) -> String {
    format!("NOVA_{}", field_path.replace('.', "__").to_uppercase())
}
