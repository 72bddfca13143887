//! Sprinkle CLI library.
//!
//! Command implementations for the `sprinkle` binary: spec validation and
//! SVG generation.

pub mod commands;
