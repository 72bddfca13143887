//! End-to-end determinism checks over the public API.

use pretty_assertions::assert_eq;
use sprinkle_border::generator::{Container, SprinkleBorderGenerator};
use sprinkle_border::surface::{RecordingSurface, SvgSurface};
use sprinkle_border::{generate_sprinkles, MIN_SPRINKLE_COUNT};
use sprinkle_spec::{compose_seed, ParamsPatch, ShapeKind, SprinkleParams};

fn render_recorded(seed: &str, width: f64, height: f64) -> Vec<sprinkle_border::SprinkleInstance> {
    let mut generator = SprinkleBorderGenerator::with_defaults();
    let container = Container::new("probe", width, height, RecordingSurface::new())
        .with_seed(seed);
    generator.register(container).unwrap();
    generator.render("probe", None).unwrap();
    generator.container("probe").unwrap().surface.placed.clone()
}

#[test]
fn fixed_seed_and_size_reproduce_the_full_sequence() {
    let a = render_recorded("amerikoa", 400.0, 200.0);
    let b = render_recorded("amerikoa", 400.0, 200.0);
    assert_eq!(a, b);
    assert!(a.len() >= MIN_SPRINKLE_COUNT);
}

#[test]
fn changing_the_seed_changes_the_output() {
    let a = render_recorded("amerikoa", 400.0, 200.0);
    let b = render_recorded("amerikob", 400.0, 200.0);
    assert_ne!(a, b);
}

#[test]
fn changing_the_size_changes_the_output() {
    let a = render_recorded("amerikoa", 400.0, 200.0);
    let b = render_recorded("amerikoa", 401.0, 200.0);
    assert_ne!(a, b);
}

#[test]
fn svg_documents_are_byte_identical_for_fixed_inputs() {
    let mut digests = Vec::new();
    for _ in 0..2 {
        let mut generator = SprinkleBorderGenerator::with_defaults();
        let container = Container::new("hero", 640.0, 240.0, SvgSurface::new())
            .with_seed("bakery-2024");
        generator.register(container).unwrap();
        generator.render("hero", None).unwrap();
        digests.push(generator.container("hero").unwrap().surface.digest());
    }
    assert_eq!(digests[0], digests[1]);
}

#[test]
fn zero_density_override_yields_the_minimum_count() {
    let mut generator = SprinkleBorderGenerator::with_defaults();
    let container = Container::new("huge", 4000.0, 4000.0, RecordingSurface::new())
        .with_seed("s");
    generator.register(container).unwrap();

    let patch = ParamsPatch {
        density: Some(0.0),
        ..ParamsPatch::default()
    };
    generator.refresh("huge", Some(&patch)).unwrap();
    assert_eq!(
        generator.container("huge").unwrap().surface.placed.len(),
        MIN_SPRINKLE_COUNT
    );
}

#[test]
fn every_sprinkle_uses_the_configured_vocabulary_and_palette() {
    let params = SprinkleParams {
        colors: vec!["#111111".to_string(), "#222222".to_string()],
        shapes: vec![ShapeKind::Star, ShapeKind::Dot],
        ..SprinkleParams::default()
    };
    let seed = compose_seed("vocab", 500, 300);
    let sprinkles = generate_sprinkles(&params, seed, 500, 300).unwrap();

    assert!(!sprinkles.is_empty());
    for s in &sprinkles {
        assert!(matches!(s.kind, ShapeKind::Star | ShapeKind::Dot));
        assert!(params.colors.contains(&s.color));
    }
}

#[test]
fn count_lower_bound_holds_across_sizes() {
    // Keep-out relaxed so the degenerate sizes stay sampleable; the stock
    // radius rejects every point of a floored 1x1 box.
    let params = SprinkleParams {
        corner_clear: 0.0,
        ..SprinkleParams::default()
    };
    for (w, h) in [(1.0, 1.0), (10.0, 10.0), (50.0, 400.0), (0.0, 0.0)] {
        let mut generator = SprinkleBorderGenerator::new(params.clone());
        let container =
            Container::new("floor", w, h, RecordingSurface::new()).with_seed("floor");
        generator.register(container).unwrap();
        generator.render("floor", None).unwrap();
        let placed = &generator.container("floor").unwrap().surface.placed;
        assert!(
            placed.len() >= MIN_SPRINKLE_COUNT,
            "{}x{} emitted {}",
            w,
            h,
            placed.len()
        );
    }
}
