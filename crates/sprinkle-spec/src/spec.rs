//! The `BorderSpec` document type and builder.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::params::SprinkleParams;

/// Current spec schema version.
pub const SPEC_VERSION: u32 = 1;

/// A sprinkle-border spec: one rectangular container to decorate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderSpec {
    /// Schema version; must be 1 for v1 specs.
    #[serde(default = "default_spec_version")]
    pub spec_version: u32,

    /// Stable identifier for the container.
    /// Format: `[a-z][a-z0-9_-]{2,63}`
    pub border_id: String,

    /// Persisted seed string. Absent means a fresh nondeterministic seed is
    /// derived per render, so output is not reproducible across runs.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub seed: Option<String>,

    /// Rendered container size [width, height] in px.
    pub size: [u32; 2],

    /// Generation parameters. Missing fields take stock defaults.
    #[serde(default)]
    pub params: SprinkleParams,

    /// Relative output path for CLI generation (must end in `.svg`).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub output: Option<String>,
}

fn default_spec_version() -> u32 {
    SPEC_VERSION
}

impl BorderSpec {
    /// Creates a builder with the given border id.
    pub fn builder(border_id: impl Into<String>) -> BorderSpecBuilder {
        BorderSpecBuilder::new(border_id)
    }

    /// Parses a spec from a JSON string, checking the schema version.
    pub fn from_json(json: &str) -> Result<BorderSpec, SpecError> {
        let spec: BorderSpec = serde_json::from_str(json)?;
        if spec.spec_version != SPEC_VERSION {
            return Err(SpecError::UnsupportedVersion(spec.spec_version));
        }
        Ok(spec)
    }

    /// Serializes the spec to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rendered width in px.
    pub fn width(&self) -> u32 {
        self.size[0]
    }

    /// Rendered height in px.
    pub fn height(&self) -> u32 {
        self.size[1]
    }
}

/// Builder for [`BorderSpec`].
#[derive(Debug, Clone)]
pub struct BorderSpecBuilder {
    border_id: String,
    seed: Option<String>,
    size: [u32; 2],
    params: SprinkleParams,
    output: Option<String>,
}

impl BorderSpecBuilder {
    /// Creates a new builder for the given border id.
    pub fn new(border_id: impl Into<String>) -> Self {
        Self {
            border_id: border_id.into(),
            seed: None,
            size: [1, 1],
            params: SprinkleParams::default(),
            output: None,
        }
    }

    /// Pins the persisted seed string.
    pub fn seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Sets the rendered container size.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = [width, height];
        self
    }

    /// Replaces the generation parameters.
    pub fn params(mut self, params: SprinkleParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the relative SVG output path.
    pub fn output(mut self, path: impl Into<String>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Builds the spec.
    pub fn build(self) -> BorderSpec {
        BorderSpec {
            spec_version: SPEC_VERSION,
            border_id: self.border_id,
            seed: self.seed,
            size: self.size,
            params: self.params,
            output: self.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_produces_v1_spec() {
        let spec = BorderSpec::builder("hero-banner")
            .seed("bakery-2024")
            .size(800, 320)
            .output("borders/hero.svg")
            .build();

        assert_eq!(spec.spec_version, SPEC_VERSION);
        assert_eq!(spec.border_id, "hero-banner");
        assert_eq!(spec.seed.as_deref(), Some("bakery-2024"));
        assert_eq!(spec.width(), 800);
        assert_eq!(spec.height(), 320);
    }

    #[test]
    fn json_round_trip() {
        let spec = BorderSpec::builder("footer-strip")
            .seed("s1")
            .size(1200, 80)
            .build();
        let json = spec.to_json().unwrap();
        let parsed = BorderSpec::from_json(&json).unwrap();
        assert_eq!(parsed, spec);
    }

    #[test]
    fn minimal_document_takes_defaults() {
        let spec =
            BorderSpec::from_json(r#"{"border_id": "card", "size": [300, 200]}"#).unwrap();
        assert_eq!(spec.spec_version, SPEC_VERSION);
        assert_eq!(spec.seed, None);
        assert_eq!(spec.params, SprinkleParams::default());
    }

    #[test]
    fn future_version_is_rejected() {
        let err =
            BorderSpec::from_json(r#"{"spec_version": 2, "border_id": "x-1", "size": [10, 10]}"#)
                .unwrap_err();
        assert!(matches!(err, SpecError::UnsupportedVersion(2)));
    }
}
