use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::job::JobPosting;

/// Reads a JSON array of postings used to prime the board at startup.
pub fn load_postings(path: impl AsRef<Path>) -> Result<Vec<JobPosting>> {
    let path = path.as_ref();
    info!("Loading seed postings from {}", path.display());

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file '{}'", path.display()))?;
    let postings: Vec<JobPosting> = serde_json::from_str(&raw)
        .with_context(|| format!("Seed file '{}' is not a JSON array of postings", path.display()))?;

    info!("Loaded {} seed postings", postings.len());
    Ok(postings)
}
