//! CLI command implementations

pub mod generate;
pub mod validate;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use sprinkle_spec::BorderSpec;

/// Loads and parses a spec file.
pub fn load_spec(path: &Path) -> Result<BorderSpec> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read spec file: {}", path.display()))?;
    BorderSpec::from_json(&json)
        .with_context(|| format!("Failed to parse spec file: {}", path.display()))
}
