//! In-memory Java class model for Builderforge.
//!
//! This crate is the structural store that generated members are attached to.
//! It knows nothing about builders; it only holds classes, fields and methods,
//! parses member declarations from text and enforces the few structural rules
//! a Java class must obey.
//!
//! # Module Organization
//!
//! - [`types`] - Type references (`int`, `List<String>`, `byte[]`)
//! - [`modifier`] - Modifier keywords and modifier sets
//! - [`node`] - Class, field and method nodes
//! - [`parser`] - Member, class and compilation-unit parsing
//! - [`factory`] - The [`ElementFactory`] host interface and its Java implementation
//! - [`target`] - The [`TargetClass`] host interface

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
pub mod factory;
pub mod keywords;
pub mod modifier;
pub mod node;
pub mod parser;
pub mod target;
pub mod types;

pub use error::{Error, Result};
pub use factory::{ElementFactory, JavaElementFactory};
pub use modifier::{Modifier, Modifiers};
pub use node::{ClassNode, CompilationUnit, FieldNode, Member, MemberKind, MethodNode, ParamNode};
pub use parser::{parse_class, parse_compilation_unit, parse_member, parse_type};
pub use target::TargetClass;
pub use types::{PrimitiveType, TypeArg, TypeRef};
