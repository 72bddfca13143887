//! Error and warning types for spec validation and processing.

use thiserror::Error;

/// Error codes for spec validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Unsupported spec_version
    UnsupportedSpecVersion,
    /// E002: Invalid border_id format
    InvalidBorderId,
    /// E003: Empty color palette
    EmptyColorPalette,
    /// E004: Empty shape vocabulary
    EmptyShapeSet,
    /// E005: min_scale greater than max_scale
    ScaleRangeInverted,
    /// E006: Unsafe output path (absolute or traversal)
    UnsafeOutputPath,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnsupportedSpecVersion => "E001",
            ErrorCode::InvalidBorderId => "E002",
            ErrorCode::EmptyColorPalette => "E003",
            ErrorCode::EmptyShapeSet => "E004",
            ErrorCode::ScaleRangeInverted => "E005",
            ErrorCode::UnsafeOutputPath => "E006",
        }
    }
}

/// Warning codes for suspicious but non-fatal configurations.
///
/// The generator takes parameter arithmetic as-is, so degenerate values are
/// diagnosed here rather than rejected at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Band thickness exceeds half the smaller container dimension
    ThicknessExceedsHalfExtent,
    /// W002: Negative jitter
    NegativeJitter,
    /// W003: Zero or negative density (count clamps to the minimum)
    ZeroDensity,
    /// W004: Corner keep-out radius may swallow the entire band
    CornerClearSwallowsBand,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::ThicknessExceedsHalfExtent => "W001",
            WarningCode::NegativeJitter => "W002",
            WarningCode::ZeroDensity => "W003",
            WarningCode::CornerClearSwallowsBand => "W004",
        }
    }
}

/// A single validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "params.colors").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

/// A single validation warning.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

/// Result of validating a spec.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a result from collected errors and warnings.
    pub fn from_parts(errors: Vec<ValidationError>, warnings: Vec<ValidationWarning>) -> Self {
        Self {
            ok: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self::from_parts(Vec::new(), Vec::new())
    }
}

/// Errors from loading or serializing a spec document.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON parse or serialize failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document declares a spec_version this library does not support.
    #[error("unsupported spec_version {0} (expected {expected})", expected = crate::spec::SPEC_VERSION)]
    UnsupportedVersion(u32),
}
