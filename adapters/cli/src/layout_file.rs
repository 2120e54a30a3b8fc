use std::{fs, path::Path};

use anyhow::{Context, Result};
use fountain_core::Layout;

/// Reads a custom map layout from a TOML file.
pub(crate) fn load(path: &Path) -> Result<Layout> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read layout file {}", path.display()))?;
    parse(&contents).with_context(|| format!("invalid layout file {}", path.display()))
}

/// Parses a layout from TOML text. Missing optional fields take their defaults.
pub(crate) fn parse(contents: &str) -> Result<Layout> {
    toml::from_str(contents).context("failed to parse layout toml contents")
}
