//! Project parameter files (JSON or TOML, chosen by extension)

use ecodesign_domain::model::{ProjectParameters, CURRENT_SCHEMA_VERSION};
use ecodesign_types::{Error, Result};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFormat {
    Json,
    Toml,
}

impl ProjectFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Ok(ProjectFormat::Json),
            Some("toml") => Ok(ProjectFormat::Toml),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

pub fn parse_project(content: &str, format: ProjectFormat) -> Result<ProjectParameters> {
    let mut params: ProjectParameters = match format {
        ProjectFormat::Json => serde_json::from_str(content)?,
        ProjectFormat::Toml => toml::from_str(content)?,
    };
    if params.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(Error::SchemaVersion {
            found: params.schema_version,
            supported: CURRENT_SCHEMA_VERSION,
        });
    }
    params.schema_version = CURRENT_SCHEMA_VERSION;
    Ok(params)
}

pub fn render_project(params: &ProjectParameters, format: ProjectFormat) -> Result<String> {
    let content = match format {
        ProjectFormat::Json => serde_json::to_string_pretty(params)?,
        ProjectFormat::Toml => toml::to_string_pretty(params)?,
    };
    Ok(content)
}

pub fn load_project(path: &Path) -> Result<ProjectParameters> {
    let format = ProjectFormat::from_path(path)?;
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let params = parse_project(&content, format)?;
    debug!(path = %path.display(), "loaded project parameters");
    Ok(params)
}

/// Write parameters; the file is replaced only once the content is rendered
pub fn save_project(path: &Path, params: &ProjectParameters) -> Result<()> {
    let format = ProjectFormat::from_path(path)?;
    let content = render_project(params, format)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    debug!(path = %path.display(), "saved project parameters");
    Ok(())
}
