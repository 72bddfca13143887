//! Generate command implementation
//!
//! Renders a spec file to an SVG document on disk.

use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use sprinkle_border::generator::{Container, SprinkleBorderGenerator};
use sprinkle_border::surface::SvgSurface;
use sprinkle_spec::{validate_spec, BorderSpec};

use super::load_spec;

/// Run the generate command.
///
/// # Arguments
/// * `spec_path` - Path to the spec file
/// * `out_root` - Directory output paths are resolved against
/// * `seed` - Optional seed override, pinning the output regardless of the
///   spec's own seed
///
/// # Returns
/// Exit code: 0 on success, 1 on validation failure.
pub fn run(spec_path: &str, out_root: &str, seed: Option<&str>) -> Result<ExitCode> {
    let start = Instant::now();
    println!("{} {}", "Generating from:".cyan().bold(), spec_path);
    println!("{} {}", "Output root:".cyan().bold(), out_root);

    let mut spec = load_spec(Path::new(spec_path))?;
    if let Some(seed) = seed {
        spec.seed = Some(seed.to_string());
    }

    let result = validate_spec(&spec);
    for warning in &result.warnings {
        println!("  {} [{}]: {}", "!".yellow(), warning.code.code(), warning.message);
    }
    if !result.ok {
        for error in &result.errors {
            println!("  {} [{}]: {}", "x".red(), error.code.code(), error.message);
        }
        println!("{} spec failed validation", "Error:".red().bold());
        return Ok(ExitCode::from(1));
    }

    let (out_path, digest) = generate_to_disk(&spec, Path::new(out_root))?;

    println!(
        "{} {} ({})",
        "Wrote:".green().bold(),
        out_path.display(),
        &digest[..16]
    );
    println!("{} {:.1?}", "Elapsed:".dimmed(), start.elapsed());
    Ok(ExitCode::SUCCESS)
}

/// Renders a validated spec and writes its SVG under `out_root`.
///
/// Returns the output path and the document's BLAKE3 digest.
pub fn generate_to_disk(spec: &BorderSpec, out_root: &Path) -> Result<(PathBuf, String)> {
    let mut generator = SprinkleBorderGenerator::new(spec.params.clone());

    let mut container = Container::new(
        spec.border_id.clone(),
        f64::from(spec.width()),
        f64::from(spec.height()),
        SvgSurface::new(),
    );
    if let Some(seed) = &spec.seed {
        container = container.with_seed(seed.clone());
    }
    generator
        .register(container)
        .map_err(|e| anyhow!("failed to register container: {}", e))?;
    generator
        .render(&spec.border_id, None)
        .with_context(|| format!("generation failed for '{}'", spec.border_id))?;

    let surface = &generator
        .container(&spec.border_id)
        .ok_or_else(|| anyhow!("container '{}' vanished after render", spec.border_id))?
        .surface;
    let svg = surface.finish();
    let digest = surface.digest();

    let relative = spec
        .output
        .clone()
        .unwrap_or_else(|| format!("{}.svg", spec.border_id));
    let out_path = out_root.join(relative);
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&out_path, &svg)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    Ok((out_path, digest))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> BorderSpec {
        BorderSpec::builder("hero-banner")
            .seed("bakery-2024")
            .size(640, 240)
            .output("borders/hero.svg")
            .build()
    }

    #[test]
    fn writes_svg_under_the_output_root() {
        let dir = tempfile::tempdir().unwrap();
        let (path, digest) = generate_to_disk(&spec(), dir.path()).unwrap();
        assert_eq!(path, dir.path().join("borders/hero.svg"));
        assert_eq!(digest.len(), 64);
        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("viewBox=\"0 0 640 240\""));
    }

    #[test]
    fn pinned_seeds_write_identical_documents() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        let (_, digest_a) = generate_to_disk(&spec(), dir_a.path()).unwrap();
        let (_, digest_b) = generate_to_disk(&spec(), dir_b.path()).unwrap();
        assert_eq!(digest_a, digest_b);
    }

    #[test]
    fn missing_output_defaults_to_the_border_id() {
        let dir = tempfile::tempdir().unwrap();
        let spec = BorderSpec::builder("card-02").seed("s").size(300, 200).build();
        let (path, _) = generate_to_disk(&spec, dir.path()).unwrap();
        assert_eq!(path, dir.path().join("card-02.svg"));
    }
}
