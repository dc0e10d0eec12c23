// Copyright 2026 The Veritas Project
// SPDX-License-Identifier: Apache-2.0

// Config loader and validator.
//
// Loads veritas.yaml, validates structure, resolves variable interpolation,
// compiles marker regexes, and computes a contract hash of the raw YAML.

mod defaults;
mod error;
mod interpolation;
mod loader;
mod marker;
mod raw;
mod source;
mod types;

pub use defaults::default_markers;
pub use error::ConfigError;
pub use interpolation::resolve_variables;
pub use loader::{compute_hash, load_config};
pub use marker::Marker;
pub use source::{ConfigSource, FileSource, StringSource};
pub use types::*;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
