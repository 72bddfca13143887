//! Pure shape descriptions.
//!
//! Shape construction produces tagged geometry data only; turning a
//! description into drawable primitives is the surface adapter's job (see
//! `surface`). Base sizes follow the stock vocabulary: pill 18x8, dot r=4,
//! star outer r=6, heart 10 units tall, all multiplied by the per-sprinkle
//! scale.

use std::f64::consts::{FRAC_PI_2, PI};

use sprinkle_spec::ShapeKind;

/// Inner-to-outer radius ratio of the 5-pointed star.
pub const STAR_INNER_RATIO: f64 = 0.45;

/// Fixed proportional heart outline, centered at the origin, 10 units from
/// notch to tip. Drawn at curve scale `size / 10`.
pub const HEART_OUTLINE: &str =
    "M0,-6 C-5,-11 -12,-4 -8,2 C-5,6 0,10 0,10 C0,10 5,6 8,2 C12,-4 5,-11 0,-6 Z";

/// Tagged geometric description of one sprinkle shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeDesc {
    /// Rounded capsule centered at the sample point.
    Pill {
        width: f64,
        height: f64,
        corner_radius: f64,
    },
    /// Filled circle. Rotation-invariant.
    Dot { radius: f64 },
    /// 5-pointed star; vertices alternate outer/inner starting at the top.
    Star {
        outer_radius: f64,
        inner_radius: f64,
    },
    /// Heart outline at curve scale `size / 10`.
    Heart { size: f64 },
}

impl ShapeDesc {
    /// Builds the description for a shape kind at the given scale.
    pub fn for_kind(kind: ShapeKind, scale: f64) -> ShapeDesc {
        match kind {
            ShapeKind::Pill => {
                let width = 18.0 * scale;
                let height = 8.0 * scale;
                ShapeDesc::Pill {
                    width,
                    height,
                    corner_radius: width.min(height) / 2.0,
                }
            }
            ShapeKind::Dot => ShapeDesc::Dot {
                radius: 4.0 * scale,
            },
            ShapeKind::Star => {
                let outer_radius = 6.0 * scale;
                ShapeDesc::Star {
                    outer_radius,
                    inner_radius: outer_radius * STAR_INNER_RATIO,
                }
            }
            ShapeKind::Heart => ShapeDesc::Heart { size: 10.0 * scale },
        }
    }

    /// Whether the shape ignores its rotation angle.
    pub fn rotation_invariant(&self) -> bool {
        matches!(self, ShapeDesc::Dot { .. })
    }
}

/// The 10 star vertices, alternating outer/inner at equal angular steps,
/// starting at the top (-90 degree offset), centered at the origin.
pub fn star_vertices(outer_radius: f64, inner_radius: f64) -> [(f64, f64); 10] {
    let mut vertices = [(0.0, 0.0); 10];
    for (i, vertex) in vertices.iter_mut().enumerate() {
        let angle = PI / 5.0 * i as f64 - FRAC_PI_2;
        let radius = if i % 2 == 0 {
            outer_radius
        } else {
            inner_radius
        };
        *vertex = (angle.cos() * radius, angle.sin() * radius);
    }
    vertices
}
