//! Deterministic sprinkle-border generation backend.
//!
//! Given a rectangular container, this crate produces a vector drawing of
//! decorative shapes (pills, stars, hearts, dots) confined to a band near
//! the container's edges. Output is fully determined by
//! `(seed, width, height)`: the same pinned seed at the same rendered size
//! always yields the same ordered set of shapes.
//!
//! # Overview
//!
//! - [`generate`]: the render pass — band-area-weighted sampling, jitter,
//!   corner keep-out, and shape/color/scale/rotation draws from one PCG32
//!   stream
//! - [`surface`]: drawing surfaces consuming pure shape descriptions; the
//!   stock [`surface::SvgSurface`] emits byte-stable SVG documents
//! - [`generator`]: an explicit container registry with
//!   `register`/`unregister`, `render`/`refresh`, and the resize path
//! - [`debounce`]: collapses resize bursts into one regeneration after 150ms
//!   of quiescence
//!
//! # Example
//!
//! ```
//! use sprinkle_border::generator::{Container, SprinkleBorderGenerator};
//! use sprinkle_border::surface::SvgSurface;
//!
//! let mut generator = SprinkleBorderGenerator::with_defaults();
//! let container = Container::new("hero-banner", 800.0, 320.0, SvgSurface::new())
//!     .with_seed("bakery-2024");
//! generator.register(container).unwrap();
//! generator.render("hero-banner", None).unwrap();
//!
//! let svg = generator.container("hero-banner").unwrap().surface.finish();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod band;
pub mod debounce;
pub mod generate;
pub mod generator;
pub mod rng;
pub mod shape;
pub mod surface;

// Re-export commonly used types at the crate root
pub use band::{band_area, sample_band_point, Point, SampleError, MAX_SAMPLE_ATTEMPTS};
pub use debounce::{Debouncer, DEFAULT_QUIESCENCE};
pub use generate::{
    generate_sprinkles, sprinkle_count, GenerateError, SprinkleInstance, MIN_SPRINKLE_COUNT,
};
pub use generator::{Container, GeneratorError, SprinkleBorderGenerator};
pub use rng::DeterministicRng;
pub use shape::{star_vertices, ShapeDesc, HEART_OUTLINE, STAR_INNER_RATIO};
pub use surface::{DrawSurface, RecordingSurface, SvgSurface};
