//! Generation parameters and partial overrides.
//!
//! `SprinkleParams` is the full, defaulted parameter set for one generation
//! pass. `ParamsPatch` is the all-optional override shape accepted by
//! `render`/`refresh`; omitted fields fall back to the base value.

use serde::{Deserialize, Serialize};

/// The shape vocabulary for border sprinkles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Rounded capsule, 18x8 at scale 1.
    Pill,
    /// 5-pointed star, outer radius 6 at scale 1.
    Star,
    /// Fixed proportional heart outline, 10 units tall at scale 1.
    Heart,
    /// Filled circle, radius 4 at scale 1. Rotation-invariant.
    Dot,
}

impl ShapeKind {
    /// Returns the lowercase name used in spec documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Pill => "pill",
            ShapeKind::Star => "star",
            ShapeKind::Heart => "heart",
            ShapeKind::Dot => "dot",
        }
    }
}

/// Parameters for one sprinkle-border generation pass.
///
/// Every field carries a serde default, so `{}` deserializes to the stock
/// brand configuration. Values are taken as-is: degenerate combinations
/// (thickness wider than the container, negative jitter) are diagnosed by
/// validation but never rejected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SprinkleParams {
    /// Thickness in px of the edge band, measured inward from each side.
    pub border_thickness: f64,

    /// Target sprinkles per px^2 of band area.
    pub density: f64,

    /// Lower bound of the uniform per-sprinkle scale range.
    pub min_scale: f64,

    /// Upper bound of the uniform per-sprinkle scale range.
    pub max_scale: f64,

    /// Whether sprinkles receive a random rotation in [0, 360) degrees.
    pub rotate: bool,

    /// Maximum positional perturbation in px applied after band sampling.
    pub jitter: f64,

    /// Ordered fill palette (CSS hex strings).
    pub colors: Vec<String>,

    /// Ordered shape vocabulary to draw from.
    pub shapes: Vec<ShapeKind>,

    /// Minimum allowed distance in px from any container corner.
    pub corner_clear: f64,

    /// Whether a debounced resize notification regenerates all containers.
    pub regenerate_on_resize: bool,
}

impl Default for SprinkleParams {
    fn default() -> Self {
        Self {
            border_thickness: 100.0,
            density: 0.00055,
            min_scale: 1.4,
            max_scale: 2.5,
            rotate: true,
            jitter: 8.0,
            colors: default_palette(),
            shapes: vec![
                ShapeKind::Pill,
                ShapeKind::Star,
                ShapeKind::Heart,
                ShapeKind::Dot,
            ],
            corner_clear: 1.0,
            regenerate_on_resize: true,
        }
    }
}

/// The stock brand palette.
fn default_palette() -> Vec<String> {
    [
        "#FF4D6D", "#FF9F1C", "#FFD166", "#70D6FF", "#06D6A0", "#B28DFF", "#FF7AC6", "#FFD1DC",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl SprinkleParams {
    /// Merges a partial override on top of this parameter set.
    ///
    /// Fields absent from the patch keep their base values.
    pub fn apply(&self, patch: &ParamsPatch) -> SprinkleParams {
        SprinkleParams {
            border_thickness: patch.border_thickness.unwrap_or(self.border_thickness),
            density: patch.density.unwrap_or(self.density),
            min_scale: patch.min_scale.unwrap_or(self.min_scale),
            max_scale: patch.max_scale.unwrap_or(self.max_scale),
            rotate: patch.rotate.unwrap_or(self.rotate),
            jitter: patch.jitter.unwrap_or(self.jitter),
            colors: patch.colors.clone().unwrap_or_else(|| self.colors.clone()),
            shapes: patch.shapes.clone().unwrap_or_else(|| self.shapes.clone()),
            corner_clear: patch.corner_clear.unwrap_or(self.corner_clear),
            regenerate_on_resize: patch
                .regenerate_on_resize
                .unwrap_or(self.regenerate_on_resize),
        }
    }
}

/// Partial parameter override accepted by `render`/`refresh`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ParamsPatch {
    /// Override for [`SprinkleParams::border_thickness`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_thickness: Option<f64>,

    /// Override for [`SprinkleParams::density`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,

    /// Override for [`SprinkleParams::min_scale`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_scale: Option<f64>,

    /// Override for [`SprinkleParams::max_scale`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_scale: Option<f64>,

    /// Override for [`SprinkleParams::rotate`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<bool>,

    /// Override for [`SprinkleParams::jitter`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jitter: Option<f64>,

    /// Override for [`SprinkleParams::colors`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,

    /// Override for [`SprinkleParams::shapes`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shapes: Option<Vec<ShapeKind>>,

    /// Override for [`SprinkleParams::corner_clear`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_clear: Option<f64>,

    /// Override for [`SprinkleParams::regenerate_on_resize`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regenerate_on_resize: Option<bool>,
}

impl ParamsPatch {
    /// A patch that overrides nothing.
    pub fn empty() -> Self {
        Self::default()
    }
}
