use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::enhancement::RuleSet;
use crate::resumes::IdStrategy;

const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Wildcard origins for the static-hosting platforms the editor frontend is
/// deployed to. Only added when `ALLOW_HOSTED_ORIGINS` is set.
pub const HOSTED_ORIGIN_PATTERNS: &[&str] = &[
    "https://*.vercel.app",
    "https://*.netlify.app",
    "https://*.onrender.com",
];

/// Application configuration loaded from environment variables.
/// Every setting has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Exact origins and `https://*.domain` patterns, in declaration order.
    pub allowed_origins: Vec<String>,
    pub resumes_dir: PathBuf,
    pub enhancement_rules: RuleSet,
    pub id_strategy: IdStrategy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut allowed_origins = parse_origins(
            &lookup("ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ORIGIN.to_string()),
        );
        if lookup("ALLOW_HOSTED_ORIGINS").is_some_and(|v| is_truthy(&v)) {
            allowed_origins.extend(HOSTED_ORIGIN_PATTERNS.iter().map(|p| p.to_string()));
        }

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            allowed_origins,
            resumes_dir: lookup("RESUMES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("resumes")),
            enhancement_rules: match lookup("ENHANCEMENT_RULES") {
                Some(v) => v.parse().map_err(|e: String| anyhow!(e))?,
                None => RuleSet::default(),
            },
            id_strategy: match lookup("RESUME_ID_STRATEGY") {
                Some(v) => v.parse().map_err(|e: String| anyhow!(e))?,
                None => IdStrategy::default(),
            },
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
