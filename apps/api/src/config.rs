use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_EXTRACTION_LATENCY_MS: u64 = 2000;
const DEFAULT_EXTRACTION_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON file replacing the built-in sample vocabularies.
    pub vocabulary_path: Option<PathBuf>,
    /// Makes mock extraction reproducible across restarts.
    pub generator_seed: Option<u64>,
    /// Simulated processing time of the mock extractor.
    pub extraction_latency: Duration,
    pub extraction_timeout: Duration,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            vocabulary_path: None,
            generator_seed: None,
            extraction_latency: Duration::from_millis(DEFAULT_EXTRACTION_LATENCY_MS),
            extraction_timeout: Duration::from_millis(DEFAULT_EXTRACTION_TIMEOUT_MS),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            port: parse_or(&lookup, "PORT", defaults.port)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            vocabulary_path: lookup("VOCABULARY_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            generator_seed: lookup("GENERATOR_SEED")
                .map(|raw| {
                    raw.parse::<u64>()
                        .context("GENERATOR_SEED must be an unsigned integer")
                })
                .transpose()?,
            extraction_latency: Duration::from_millis(parse_or(
                &lookup,
                "EXTRACTION_LATENCY_MS",
                DEFAULT_EXTRACTION_LATENCY_MS,
            )?),
            extraction_timeout: Duration::from_millis(parse_or(
                &lookup,
                "EXTRACTION_TIMEOUT_MS",
                DEFAULT_EXTRACTION_TIMEOUT_MS,
            )?),
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
