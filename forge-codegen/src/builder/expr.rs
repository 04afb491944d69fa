//! Expressions used in generated method bodies.

use builderforge_model::TypeRef;

/// An expression in a generated statement.
///
/// Only the shapes builder code needs: names, `this`, field access and
/// object creation.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A local name or parameter.
    Ident(String),
    /// `this`
    This,
    /// `target.name`
    Field { target: Box<Expr>, name: String },
    /// `new Type(args...)`
    New { ty: TypeRef, args: Vec<Expr> },
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    pub fn this() -> Self {
        Self::This
    }

    /// Field access on an arbitrary target.
    pub fn field(target: Expr, name: impl Into<String>) -> Self {
        Self::Field {
            target: Box::new(target),
            name: name.into(),
        }
    }

    /// `this.name`
    pub fn this_field(name: impl Into<String>) -> Self {
        Self::field(Self::This, name)
    }

    /// `new Type(args...)`
    pub fn new_instance(ty: TypeRef, args: impl IntoIterator<Item = Expr>) -> Self {
        Self::New {
            ty,
            args: args.into_iter().collect(),
        }
    }
}
