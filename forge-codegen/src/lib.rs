//! Builder pattern synthesis for Java classes.
//!
//! Given a class and its fields, [`BuilderSynthesizer`] attaches a private
//! constructor taking a builder, a static `builder()` factory and a nested
//! `Builder` class with one chainable setter per field and a `build()` method.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, MethodSpec, etc.)
//! - [`java`] - Java rendering of method specs and model nodes
//! - [`synthesizer`] - The builder synthesizer and its fragments

pub mod builder;
mod error;
pub mod java;
mod options;
pub mod synthesizer;

pub use error::{Error, Result};
pub use options::BuilderOptions;
pub use synthesizer::{BuilderSynthesizer, Fragment};
