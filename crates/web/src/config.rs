use anyhow::{Context, Result, anyhow};
use pickem::models::ScoringPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_keys: String,
    pub scoring_policy: ScoringPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a number")?,
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
            scoring_policy: match std::env::var("SCORING_POLICY") {
                Ok(raw) => raw.parse().map_err(|e: String| anyhow!(e))?,
                Err(_) => ScoringPolicy::default(),
            },
        })
    }
}
