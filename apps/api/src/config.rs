use anyhow::{bail, Context, Result};

use crate::search::DEFAULT_RADIUS_KM;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Radius applied to searches that do not name one.
    pub default_radius_km: f64,
    /// Optional JSON array of postings loaded into the board at startup.
    pub seed_jobs_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_radius_km = match std::env::var("DEFAULT_RADIUS_KM") {
            Ok(raw) => parse_radius(&raw)?,
            Err(_) => DEFAULT_RADIUS_KM,
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_radius_km,
            seed_jobs_path: std::env::var("SEED_JOBS_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            default_radius_km: DEFAULT_RADIUS_KM,
            seed_jobs_path: None,
        }
    }
}

fn parse_radius(raw: &str) -> Result<f64> {
    let radius = raw
        .trim()
        .parse::<f64>()
        .with_context(|| format!("DEFAULT_RADIUS_KM must be a number, got '{raw}'"))?;
    if !radius.is_finite() || radius < 0.0 {
        bail!("DEFAULT_RADIUS_KM must be a non-negative number, got '{raw}'");
    }
    Ok(radius)
}
