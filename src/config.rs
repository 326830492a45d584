use crate::api::dispatch::ApiCredential;
use crate::api::endpoints::DEFAULT_MATCH_COUNT;
use crate::error::AppError;
use std::env;

pub const DEFAULT_REGION: &str = "na";
pub const DEFAULT_DDRAGON_VERSION: &str = "13.6.1";
pub const DEFAULT_DDRAGON_BASE_URL: &str = "https://ddragon.leagueoflegends.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<ApiCredential>,
    pub region: String,
    pub ddragon_version: String,
    pub ddragon_base_url: String,
    pub match_count: u32,
}

impl Config {
    /// Loads `.env` from the working directory and then from
    /// `<config dir>/lol-stats/.env` before reading the process environment.
    /// Variables already set are never overridden.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        if let Some(dir) = dirs::config_dir() {
            dotenvy::from_path(dir.join("lol-stats").join(".env")).ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("RIOT_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .map(ApiCredential::new);

        let region = lookup("RIOT_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string());
        let ddragon_version =
            lookup("DDRAGON_VERSION").unwrap_or_else(|| DEFAULT_DDRAGON_VERSION.to_string());
        let ddragon_base_url = lookup("DDRAGON_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_DDRAGON_BASE_URL.to_string());

        let match_count = match lookup("MATCH_COUNT") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(AppError::Config(format!(
                        "MATCH_COUNT must be a positive integer, got {:?}",
                        raw
                    )))
                }
            },
            None => DEFAULT_MATCH_COUNT,
        };

        Ok(Config {
            api_key,
            region,
            ddragon_version,
            ddragon_base_url,
            match_count,
        })
    }

    pub fn credential(&self) -> Result<&ApiCredential, AppError> {
        self.api_key.as_ref().ok_or_else(|| {
            AppError::Config("RIOT_API_KEY not found in environment or .env file".to_string())
        })
    }
}
