use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

use crate::error::{AppError, Result};
use crate::skills::{Palette, PaletteConfig};
use super::types::PortfolioDocument;

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

async fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::NotFound(format!("File not found: {}", path.display())),
        _ => AppError::Io(e),
    })
}

/// Parse as YAML for `.yaml`/`.yml` and as JSON otherwise
fn parse<T: DeserializeOwned>(path: &Path, content: &str) -> Result<T> {
    let parsed = if is_yaml(path) {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(content).map_err(|e| e.to_string())
    };

    parsed.map_err(|e| AppError::BadRequest(format!("{}: {}", path.display(), e)))
}

/// Read a portfolio document
pub async fn load_portfolio(path: impl AsRef<Path>) -> Result<PortfolioDocument> {
    let path = path.as_ref();
    let content = read(path).await?;
    parse(path, &content)
}

/// Read and validate a `level: token` palette file
pub async fn load_palette(path: impl AsRef<Path>) -> Result<Palette> {
    let path = path.as_ref();
    let content = read(path).await?;

    let config: PaletteConfig = parse(path, &content)?;

    Ok(Palette::new(&config)?)
}
