//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`] - Indentation configuration
//! - [`MethodSpec`], [`Statement`], [`Expr`] - Declarative member definitions

mod code_builder;
mod expr;
mod indent;
mod method;
mod renderable;
mod types;

pub use code_builder::CodeBuilder;
pub use expr::Expr;
pub use indent::Indent;
pub use method::{MethodSpec, ParamSpec, Statement};
pub use renderable::{CodeFragment, Renderable};
pub use types::Visibility;
