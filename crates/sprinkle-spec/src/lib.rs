//! Canonical sprinkle-border spec library.
//!
//! This crate provides the types, validation, and seed hashing for
//! sprinkle-border specs. A spec is a JSON document describing one
//! rectangular container that receives a procedurally generated border of
//! decorative shapes; generation itself lives in `sprinkle-border`.
//!
//! # Overview
//!
//! A spec carries:
//!
//! - **Contract fields**: `spec_version`, `border_id`, the rendered `size`,
//!   and an optional persisted `seed` string
//! - **Params**: fully-defaulted generation parameters (band thickness,
//!   density, palette, shape vocabulary, ...)
//! - **Output**: an optional relative `.svg` path for CLI generation
//!
//! # Example
//!
//! ```
//! use sprinkle_spec::{BorderSpec, validate_spec};
//!
//! let spec = BorderSpec::builder("hero-banner")
//!     .seed("bakery-2024")
//!     .size(800, 320)
//!     .output("borders/hero.svg")
//!     .build();
//!
//! let result = validate_spec(&spec);
//! assert!(result.ok);
//! ```
//!
//! # Determinism
//!
//! Generation is keyed by `(seed, width, height)`: the seed string is
//! combined with the literal rendered dimensions and reduced to a 32-bit
//! state via FNV-1a (see [`hash::compose_seed`]). Specs without a seed are
//! intentionally non-reproducible across runs.

pub mod error;
pub mod hash;
pub mod params;
pub mod spec;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{
    ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use hash::{compose_seed, fnv1a_32, scene_digest};
pub use params::{ParamsPatch, ShapeKind, SprinkleParams};
pub use spec::{BorderSpec, BorderSpecBuilder, SPEC_VERSION};
pub use validation::{is_valid_border_id, validate_spec};
