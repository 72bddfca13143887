//! Drawing surfaces.
//!
//! A surface consumes the pure shape descriptions from `shape` and turns
//! them into whatever the host draws with. `begin` discards all prior
//! content (no incremental diffing); `place` appends, and append order is
//! z-order.

use sprinkle_spec::hash::scene_digest;

use crate::generate::SprinkleInstance;
use crate::shape::{star_vertices, ShapeDesc, HEART_OUTLINE};

/// A target for one render pass.
pub trait DrawSurface {
    /// Discards all existing content and sets the viewport.
    fn begin(&mut self, width: u32, height: u32);

    /// Appends one sprinkle. Later placements overlap earlier ones.
    fn place(&mut self, sprinkle: &SprinkleInstance);
}

/// SVG document surface with fixed formatting: a fixed instance sequence
/// produces a byte-identical document.
#[derive(Debug, Default, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    body: String,
}

impl SvgSurface {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles the SVG document.
    pub fn finish(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\" preserveAspectRatio=\"none\">\n{}</svg>\n",
            self.width, self.height, self.body
        )
    }

    /// BLAKE3 hex digest of the assembled document.
    pub fn digest(&self) -> String {
        scene_digest(&self.finish())
    }
}

impl DrawSurface for SvgSurface {
    fn begin(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.body.clear();
    }

    fn place(&mut self, sprinkle: &SprinkleInstance) {
        let element = match ShapeDesc::for_kind(sprinkle.kind, sprinkle.scale) {
            ShapeDesc::Pill {
                width,
                height,
                corner_radius,
            } => format!(
                "<g transform=\"translate({} {}) rotate({})\"><rect x=\"{}\" y=\"{}\" rx=\"{}\" ry=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/></g>",
                sprinkle.x,
                sprinkle.y,
                sprinkle.rotation,
                -width / 2.0,
                -height / 2.0,
                corner_radius,
                corner_radius,
                width,
                height,
                sprinkle.color
            ),
            ShapeDesc::Dot { radius } => format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
                sprinkle.x, sprinkle.y, radius, sprinkle.color
            ),
            ShapeDesc::Star {
                outer_radius,
                inner_radius,
            } => {
                let mut path = String::new();
                for (i, (px, py)) in star_vertices(outer_radius, inner_radius)
                    .iter()
                    .enumerate()
                {
                    let command = if i == 0 { 'M' } else { 'L' };
                    path.push_str(&format!("{}{} {} ", command, px, py));
                }
                path.push('Z');
                format!(
                    "<g transform=\"translate({} {}) rotate({})\"><path d=\"{}\" fill=\"{}\"/></g>",
                    sprinkle.x, sprinkle.y, sprinkle.rotation, path, sprinkle.color
                )
            }
            ShapeDesc::Heart { size } => format!(
                "<g transform=\"translate({} {}) rotate({}) scale({})\"><path d=\"{}\" fill=\"{}\"/></g>",
                sprinkle.x,
                sprinkle.y,
                sprinkle.rotation,
                size / 10.0,
                HEART_OUTLINE,
                sprinkle.color
            ),
        };
        self.body.push_str(&element);
        self.body.push('\n');
    }
}

/// Surface that retains the placed instances verbatim. Test and inspection
/// support for hosts that draw with something other than SVG.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    /// Viewport width from the last `begin`.
    pub width: u32,
    /// Viewport height from the last `begin`.
    pub height: u32,
    /// Instances placed since the last `begin`, in draw order.
    pub placed: Vec<SprinkleInstance>,
}

impl RecordingSurface {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawSurface for RecordingSurface {
    fn begin(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.placed.clear();
    }

    fn place(&mut self, sprinkle: &SprinkleInstance) {
        self.placed.push(sprinkle.clone());
    }
}
