use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Path to the line-delimited word list.
    pub dictionary_path: String,
    /// Default number of ranked moves to return when a request sets none.
    pub move_limit: usize,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let dictionary_path = env::var("DICTIONARY_PATH")
            .unwrap_or_else(|_| "./dictionary.txt".to_string());

        let move_limit = env::var("MOVE_LIMIT")
            .unwrap_or_else(|_| "20".to_string())
            .parse()
            .context("MOVE_LIMIT must be a number")?;

        Ok(EngineConfig {
            dictionary_path,
            move_limit,
        })
    }
}
