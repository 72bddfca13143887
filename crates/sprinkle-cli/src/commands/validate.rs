//! Validate command implementation
//!
//! Validates a spec file and reports errors and warnings.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use sprinkle_spec::{validate_spec, BorderSpec, ValidationResult};

use super::load_spec;

/// Run the validate command.
///
/// # Arguments
/// * `spec_path` - Path to the spec file
/// * `json_output` - Whether to emit machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid.
pub fn run(spec_path: &str, json_output: bool) -> Result<ExitCode> {
    let (spec, result) = validate_file(Path::new(spec_path))?;

    if json_output {
        print_json(spec_path, &spec, &result)?;
    } else {
        print_human(spec_path, &spec, &result);
    }

    Ok(if result.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Loads and validates a spec file.
pub fn validate_file(path: &Path) -> Result<(BorderSpec, ValidationResult)> {
    let spec = load_spec(path)?;
    let result = validate_spec(&spec);
    Ok((spec, result))
}

fn print_json(spec_path: &str, spec: &BorderSpec, result: &ValidationResult) -> Result<()> {
    let diagnostics = serde_json::json!({
        "spec": spec_path,
        "border_id": spec.border_id,
        "ok": result.ok,
        "errors": result.errors.iter().map(|e| serde_json::json!({
            "code": e.code.code(),
            "message": e.message,
            "path": e.path,
        })).collect::<Vec<_>>(),
        "warnings": result.warnings.iter().map(|w| serde_json::json!({
            "code": w.code.code(),
            "message": w.message,
            "path": w.path,
        })).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&diagnostics)?);
    Ok(())
}

fn print_human(spec_path: &str, spec: &BorderSpec, result: &ValidationResult) {
    println!("{} {}", "Validating:".cyan().bold(), spec_path);

    for warning in &result.warnings {
        let location = warning
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "!".yellow(),
            warning.code.code(),
            location.dimmed(),
            warning.message
        );
    }

    for error in &result.errors {
        let location = error
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "x".red(),
            error.code.code(),
            location.dimmed(),
            error.message
        );
    }

    if result.ok {
        println!(
            "{} {} ({} warning(s))",
            "Valid:".green().bold(),
            spec.border_id,
            result.warnings.len()
        );
    } else {
        println!(
            "{} {} error(s), {} warning(s)",
            "Invalid:".red().bold(),
            result.errors.len(),
            result.warnings.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn valid_spec_passes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hero.json");
        fs::write(
            &path,
            r#"{"border_id": "hero-banner", "seed": "s", "size": [800, 320]}"#,
        )
        .unwrap();
        let (spec, result) = validate_file(&path).unwrap();
        assert_eq!(spec.border_id, "hero-banner");
        assert!(result.ok);
    }

    #[test]
    fn empty_palette_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(
            &path,
            r#"{"border_id": "bad-card", "size": [800, 320], "params": {"colors": []}}"#,
        )
        .unwrap();
        let (_, result) = validate_file(&path).unwrap();
        assert!(!result.ok);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(validate_file(Path::new("does-not-exist.json")).is_err());
    }
}
