// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing and validation of `daogen.toml`.
//!
//! The file is optional; every setting it carries has a default and can be
//! overridden from the command line.

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{DaogenToml, GeneratorConfig, Manifest, ParseContext, UnmappedTypePolicy};
