//! Spec validation.
//!
//! Errors cover conditions generation cannot survive (empty palette or shape
//! set, bad identifiers). Degenerate geometry is reported as warnings only:
//! the generator takes parameter arithmetic as-is.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{
    ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
use crate::spec::{BorderSpec, SPEC_VERSION};

/// Border id pattern: lowercase, digits, `-` and `_`, 3-64 chars.
const BORDER_ID_PATTERN: &str = r"^[a-z][a-z0-9_-]{2,63}$";

static BORDER_ID_REGEX: OnceLock<Regex> = OnceLock::new();

fn border_id_regex() -> &'static Regex {
    BORDER_ID_REGEX.get_or_init(|| Regex::new(BORDER_ID_PATTERN).expect("invalid regex pattern"))
}

/// Checks if a border id matches the required format.
pub fn is_valid_border_id(border_id: &str) -> bool {
    border_id_regex().is_match(border_id)
}

fn is_safe_output_path(path: &str) -> bool {
    !path.is_empty()
        && !path.starts_with('/')
        && !path.starts_with('\\')
        && !path.contains("..")
        && path.ends_with(".svg")
}

/// Validates a spec and returns errors and warnings.
pub fn validate_spec(spec: &BorderSpec) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if spec.spec_version != SPEC_VERSION {
        errors.push(ValidationError::with_path(
            ErrorCode::UnsupportedSpecVersion,
            format!(
                "spec_version {} is not supported (expected {})",
                spec.spec_version, SPEC_VERSION
            ),
            "spec_version",
        ));
    }

    if !is_valid_border_id(&spec.border_id) {
        errors.push(ValidationError::with_path(
            ErrorCode::InvalidBorderId,
            format!(
                "border_id '{}' does not match {}",
                spec.border_id, BORDER_ID_PATTERN
            ),
            "border_id",
        ));
    }

    let params = &spec.params;

    if params.colors.is_empty() {
        errors.push(ValidationError::with_path(
            ErrorCode::EmptyColorPalette,
            "colors must contain at least one fill color",
            "params.colors",
        ));
    }

    if params.shapes.is_empty() {
        errors.push(ValidationError::with_path(
            ErrorCode::EmptyShapeSet,
            "shapes must contain at least one shape kind",
            "params.shapes",
        ));
    }

    if params.min_scale > params.max_scale {
        errors.push(ValidationError::with_path(
            ErrorCode::ScaleRangeInverted,
            format!(
                "min_scale {} exceeds max_scale {}",
                params.min_scale, params.max_scale
            ),
            "params.min_scale",
        ));
    }

    if let Some(output) = &spec.output {
        if !is_safe_output_path(output) {
            errors.push(ValidationError::with_path(
                ErrorCode::UnsafeOutputPath,
                format!("output path '{}' must be a relative .svg path", output),
                "output",
            ));
        }
    }

    let half_extent = f64::from(spec.width().min(spec.height())) / 2.0;
    if params.border_thickness > half_extent {
        warnings.push(ValidationWarning::with_path(
            WarningCode::ThicknessExceedsHalfExtent,
            format!(
                "border_thickness {} exceeds half the smaller dimension ({}); side strips degenerate",
                params.border_thickness, half_extent
            ),
            "params.border_thickness",
        ));
    }

    if params.jitter < 0.0 {
        warnings.push(ValidationWarning::with_path(
            WarningCode::NegativeJitter,
            format!("jitter {} is negative", params.jitter),
            "params.jitter",
        ));
    }

    if params.density <= 0.0 {
        warnings.push(ValidationWarning::with_path(
            WarningCode::ZeroDensity,
            "density is not positive; sprinkle count clamps to the minimum of 16",
            "params.density",
        ));
    }

    // A keep-out radius covering the whole band makes every sample land in a
    // rejected zone; the bounded retry in the generator will then error out.
    let band_reach = params.border_thickness.max(1.0);
    if params.corner_clear >= f64::from(spec.width().max(spec.height())) + band_reach {
        warnings.push(ValidationWarning::with_path(
            WarningCode::CornerClearSwallowsBand,
            format!(
                "corner_clear {} may reject every band sample for a {}x{} container",
                params.corner_clear,
                spec.width(),
                spec.height()
            ),
            "params.corner_clear",
        ));
    }

    ValidationResult::from_parts(errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SprinkleParams;

    #[test]
    fn stock_spec_is_valid() {
        let spec = BorderSpec::builder("hero-banner")
            .seed("s")
            .size(800, 320)
            .build();
        let result = validate_spec(&spec);
        assert!(result.ok, "unexpected errors: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn border_id_format() {
        assert!(is_valid_border_id("hero-banner"));
        assert!(is_valid_border_id("card_02"));
        assert!(!is_valid_border_id("He"));
        assert!(!is_valid_border_id("2cards"));
        assert!(!is_valid_border_id("UPPER"));
    }

    #[test]
    fn empty_palette_is_an_error() {
        let spec = BorderSpec::builder("card-01")
            .size(300, 200)
            .params(SprinkleParams {
                colors: Vec::new(),
                ..SprinkleParams::default()
            })
            .build();
        let result = validate_spec(&spec);
        assert!(!result.ok);
        assert!(result
            .errors
            .iter()
            .any(|e| e.code == ErrorCode::EmptyColorPalette));
    }

    #[test]
    fn inverted_scale_range_is_an_error() {
        let spec = BorderSpec::builder("card-01")
            .size(300, 200)
            .params(SprinkleParams {
                min_scale: 3.0,
                max_scale: 1.0,
                ..SprinkleParams::default()
            })
            .build();
        let result = validate_spec(&spec);
        assert!(result
            .errors
            .iter()
            .any(|e| e.code == ErrorCode::ScaleRangeInverted));
    }

    #[test]
    fn oversized_thickness_warns_but_passes() {
        // 100px band on a 120px-tall container: side strips degenerate.
        let spec = BorderSpec::builder("thin-strip").size(800, 120).build();
        let result = validate_spec(&spec);
        assert!(result.ok);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.code == WarningCode::ThicknessExceedsHalfExtent));
    }

    #[test]
    fn absolute_output_path_is_rejected() {
        let spec = BorderSpec::builder("card-01")
            .size(300, 200)
            .output("/etc/border.svg")
            .build();
        let result = validate_spec(&spec);
        assert!(result
            .errors
            .iter()
            .any(|e| e.code == ErrorCode::UnsafeOutputPath));
    }
}
