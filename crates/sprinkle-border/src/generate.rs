//! The render pass: deterministic sprinkle emission.
//!
//! Everything random in one pass is drawn from a single PCG32 stream in a
//! fixed order, so the emitted instance vector is fully determined by the
//! 32-bit composite seed. Per sprinkle the order is: band point (strip
//! choice, x, y, jitter x, jitter y, repeated on corner retry), scale,
//! color, shape, rotation. The rotation draw happens for every sprinkle,
//! dots included, so the stream position never depends on the shape chosen.

use sprinkle_spec::{ShapeKind, SprinkleParams};
use thiserror::Error;

use crate::band::{band_area, sample_band_point, SampleError};
use crate::rng::DeterministicRng;

/// Floor on the sprinkle count; guarantees a visible border even on tiny or
/// zero-density configurations.
pub const MIN_SPRINKLE_COUNT: usize = 16;

/// Errors from one generation pass.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// No colors to pick from.
    #[error("color palette is empty")]
    EmptyColorPalette,

    /// No shape kinds to pick from.
    #[error("shape vocabulary is empty")]
    EmptyShapeSet,

    /// Band sampling could not find a corner-clear point.
    #[error(transparent)]
    Sample(#[from] SampleError),
}

/// One emitted sprinkle. Ephemeral: regenerated wholesale each pass, never
/// persisted or diffed against the previous pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SprinkleInstance {
    /// Center x within container bounds.
    pub x: f64,
    /// Center y within container bounds.
    pub y: f64,
    /// Shape kind from the configured vocabulary.
    pub kind: ShapeKind,
    /// Fill color from the configured palette.
    pub color: String,
    /// Uniform scale factor from [min_scale, max_scale).
    pub scale: f64,
    /// Rotation in whole degrees, [0, 360); 0 when rotation is disabled.
    /// Dots record the draw but render rotation-free.
    pub rotation: f64,
}

/// Target sprinkle count for a container: `max(16, floor(band_area * density))`.
///
/// The raw band area feeds the formula unchanged, so degenerate thickness
/// (negative side strips) simply pulls the count toward the floor.
pub fn sprinkle_count(params: &SprinkleParams, width: u32, height: u32) -> usize {
    let area = band_area(f64::from(width), f64::from(height), params.border_thickness);
    let target = (area * params.density).floor() as i64;
    target.max(MIN_SPRINKLE_COUNT as i64) as usize
}

/// Generates the ordered sprinkle vector for one render pass.
///
/// `width` and `height` are the container's floored (>= 1) dimensions;
/// `seed` is the composite 32-bit seed from
/// [`sprinkle_spec::hash::compose_seed`].
pub fn generate_sprinkles(
    params: &SprinkleParams,
    seed: u32,
    width: u32,
    height: u32,
) -> Result<Vec<SprinkleInstance>, GenerateError> {
    if params.colors.is_empty() {
        return Err(GenerateError::EmptyColorPalette);
    }
    if params.shapes.is_empty() {
        return Err(GenerateError::EmptyShapeSet);
    }

    let w = f64::from(width);
    let h = f64::from(height);
    let count = sprinkle_count(params, width, height);
    let mut rng = DeterministicRng::new(seed);

    let mut sprinkles = Vec::with_capacity(count);
    for _ in 0..count {
        let point = sample_band_point(&mut rng, w, h, params)?;
        let scale = rng.range_f64(params.min_scale, params.max_scale);
        let color = params.colors[rng.pick_index(params.colors.len())].clone();
        let kind = params.shapes[rng.pick_index(params.shapes.len())];
        let rotation = if params.rotate {
            rng.range_f64(0.0, 360.0).floor()
        } else {
            0.0
        };
        sprinkles.push(SprinkleInstance {
            x: point.x,
            y: point.y,
            kind,
            color,
            scale,
            rotation,
        });
    }

    Ok(sprinkles)
}
