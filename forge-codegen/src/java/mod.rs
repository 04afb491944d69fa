//! Java source rendering.
//!
//! - [`render`] - Method specs, statements and expressions
//! - [`printer`] - Model nodes: classes, fields and methods
//! - [`splice`] - Insertion of rendered members into existing source

mod printer;
mod render;
mod splice;

pub use splice::insert_members;

use crate::builder::{CodeBuilder, Indent, Renderable};

/// Render a node to Java source with the given indentation.
pub fn to_source(node: &impl Renderable, indent: Indent) -> String {
    let mut builder = CodeBuilder::new(indent);
    builder.emit(node);
    builder.build()
}
