use anyhow::{Context, Error};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Reads a JSON or TOML document, picking the format from the file extension.
pub fn load_document<T>(path: &Path) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed reading {}", path.display()))?;

    let document = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => load_json(&content),
        Some("toml") => load_toml(&content),
        _ => Err(anyhow::anyhow!(
            "unsupported document format for {}: expected .json or .toml",
            path.display()
        )),
    };
    document.with_context(|| format!("failed loading {}", path.display()))
}

pub fn load_json<T>(content: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    serde_json::from_str(content).with_context(|| "failed loading JSON document")
}

pub fn load_toml<T>(content: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    toml::from_str(content).with_context(|| "failed loading TOML document")
}
