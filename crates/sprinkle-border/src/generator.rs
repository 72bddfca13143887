//! Container registry and render orchestration.
//!
//! The generator owns an explicit, insertion-ordered collection of
//! containers. Membership is managed with `register`/`unregister`, so hosts
//! can add containers at any point instead of relying on a one-shot query at
//! startup. `render` runs to completion synchronously.

use sprinkle_spec::{compose_seed, ParamsPatch, SprinkleParams};
use thiserror::Error;

use crate::generate::{generate_sprinkles, GenerateError};
use crate::rng::fresh_seed;
use crate::surface::DrawSurface;

/// Errors from registry and render operations.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A container with this id is already registered.
    #[error("container '{0}' is already registered")]
    DuplicateContainer(String),

    /// No container registered under this id.
    #[error("no container registered with id '{0}'")]
    UnknownContainer(String),

    /// The generation pass itself failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// One managed rectangular container and its drawing surface.
#[derive(Debug)]
pub struct Container<S> {
    /// Host identifier; unique within a generator.
    pub id: String,
    /// Current rendered width in px (floored to >= 1 at render time).
    pub width: f64,
    /// Current rendered height in px (floored to >= 1 at render time).
    pub height: f64,
    /// Persisted seed. `None` means every render draws a fresh
    /// nondeterministic seed.
    pub seed: Option<String>,
    /// The drawing surface this container renders into.
    pub surface: S,
}

impl<S> Container<S> {
    /// Creates a container with the given layout box and surface.
    pub fn new(id: impl Into<String>, width: f64, height: f64, surface: S) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            seed: None,
            surface,
        }
    }

    /// Pins a persisted seed, making renders reproducible at a fixed size.
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }
}

/// Orchestrates generation over a registry of containers.
pub struct SprinkleBorderGenerator<S> {
    base: SprinkleParams,
    containers: Vec<Container<S>>,
}

impl<S: DrawSurface> SprinkleBorderGenerator<S> {
    /// Creates a generator with the given base parameters.
    pub fn new(base: SprinkleParams) -> Self {
        Self {
            base,
            containers: Vec::new(),
        }
    }

    /// Creates a generator with stock parameters.
    pub fn with_defaults() -> Self {
        Self::new(SprinkleParams::default())
    }

    /// The base parameters renders start from before per-call patches.
    pub fn base_params(&self) -> &SprinkleParams {
        &self.base
    }

    /// Adds a container to the registry. Ids must be unique.
    pub fn register(&mut self, container: Container<S>) -> Result<(), GeneratorError> {
        if self.containers.iter().any(|c| c.id == container.id) {
            return Err(GeneratorError::DuplicateContainer(container.id));
        }
        self.containers.push(container);
        Ok(())
    }

    /// Removes and returns a container, if registered.
    pub fn unregister(&mut self, id: &str) -> Option<Container<S>> {
        let index = self.containers.iter().position(|c| c.id == id)?;
        Some(self.containers.remove(index))
    }

    /// Borrows a registered container.
    pub fn container(&self, id: &str) -> Option<&Container<S>> {
        self.containers.iter().find(|c| c.id == id)
    }

    /// Registered container ids in registration order.
    pub fn container_ids(&self) -> Vec<&str> {
        self.containers.iter().map(|c| c.id.as_str()).collect()
    }

    /// Updates a container's layout box ahead of a regeneration.
    pub fn set_size(&mut self, id: &str, width: f64, height: f64) -> Result<(), GeneratorError> {
        let container = self.container_mut(id)?;
        container.width = width;
        container.height = height;
        Ok(())
    }

    /// Renders one container: floors its size, resolves the seed, clears the
    /// surface, and emits a full pass of sprinkles.
    pub fn render(&mut self, id: &str, patch: Option<&ParamsPatch>) -> Result<(), GeneratorError> {
        let params = match patch {
            Some(p) => self.base.apply(p),
            None => self.base.clone(),
        };
        let container = self.container_mut(id)?;
        Self::render_pass(&params, container)
    }

    /// Public re-entry point; identical to [`Self::render`]. Lets hosts
    /// refresh after layout changes the resize path does not see.
    pub fn refresh(&mut self, id: &str, patch: Option<&ParamsPatch>) -> Result<(), GeneratorError> {
        self.render(id, patch)
    }

    /// One render pass per registered container, in registration order.
    /// The first failure aborts and propagates.
    pub fn regenerate_all(&mut self) -> Result<(), GeneratorError> {
        let params = self.base.clone();
        for container in &mut self.containers {
            Self::render_pass(&params, container)?;
        }
        Ok(())
    }

    /// Resize-path entry: regenerates everything unless the base parameters
    /// opt out of resize regeneration. Called by the host loop after the
    /// debouncer fires.
    pub fn on_resize_quiesced(&mut self) -> Result<(), GeneratorError> {
        if self.base.regenerate_on_resize {
            self.regenerate_all()
        } else {
            Ok(())
        }
    }

    fn container_mut(&mut self, id: &str) -> Result<&mut Container<S>, GeneratorError> {
        self.containers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| GeneratorError::UnknownContainer(id.to_string()))
    }

    fn render_pass(
        params: &SprinkleParams,
        container: &mut Container<S>,
    ) -> Result<(), GeneratorError> {
        let width = (container.width.floor() as u32).max(1);
        let height = (container.height.floor() as u32).max(1);

        let seed = match &container.seed {
            Some(s) => compose_seed(s, width, height),
            None => compose_seed(&fresh_seed(), width, height),
        };

        let sprinkles = generate_sprinkles(params, seed, width, height)?;
        container.surface.begin(width, height);
        for sprinkle in &sprinkles {
            container.surface.place(sprinkle);
        }
        Ok(())
    }
}
