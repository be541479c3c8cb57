//! Catalog override loading (TOML)

use ecodesign_domain::catalog::Catalog;
use ecodesign_types::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Parse a catalog file
///
/// ```toml
/// [prices."concrete.eco"]
/// unit = "EUR/m3"
/// default = 175.0
/// min = 100.0
/// max = 300.0
/// step = 5.0
///
/// [[binder_options]]
/// name = "CEM II/C-M"
/// footprint = 0.45
/// ```
pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let catalog: Catalog = toml::from_str(&content)?;
    debug!(
        path = %path.display(),
        prices = catalog.prices.len(),
        factors = catalog.emission_factors.len(),
        "loaded catalog override"
    );
    Ok(catalog)
}

/// Built-in catalog, extended by an optional override file
pub fn load_catalog_with_override(path: Option<&Path>) -> Result<Catalog> {
    let mut catalog = Catalog::builtin();
    if let Some(path) = path {
        catalog.merge(load_catalog_file(path)?);
    }
    Ok(catalog)
}
