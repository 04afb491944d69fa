//! `forge.toml` configuration for Builderforge.
//!
//! ```toml
//! [builder]
//! class_name = "Builder"
//! factory_method = "builder"
//! build_method = "build"
//!
//! [format]
//! indent = 4
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod parse;
mod validate;

pub use config::{BuilderSection, CONFIG_FILE, Config, FormatSection, IndentSetting};
pub use error::{Error, Result, SourceContext};
pub use parse::parse_config;
