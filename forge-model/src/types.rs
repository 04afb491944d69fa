//! Java type references.

use std::{fmt, str::FromStr};

use crate::{Error, Result, parser};

/// Java primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    /// All primitive types.
    pub const ALL: [PrimitiveType; 8] = [
        PrimitiveType::Boolean,
        PrimitiveType::Byte,
        PrimitiveType::Char,
        PrimitiveType::Short,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Float,
        PrimitiveType::Double,
    ];

    /// Get the keyword for this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// Look up a primitive by keyword.
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == word)
    }
}

/// A reference to a Java type, as declared on a field or parameter.
///
/// The [`Display`](fmt::Display) form is the presentable text used when a
/// type is written back into source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A primitive type.
    Primitive(PrimitiveType),
    /// A class or interface type, possibly qualified and parameterized.
    Class { name: String, args: Vec<TypeArg> },
    /// An array of the inner type.
    Array(Box<TypeRef>),
    /// A type the host could not resolve, kept as written.
    Unresolved(String),
}

impl TypeRef {
    /// Create a primitive type.
    pub fn primitive(p: PrimitiveType) -> Self {
        Self::Primitive(p)
    }

    /// `int`.
    pub fn int() -> Self {
        Self::Primitive(PrimitiveType::Int)
    }

    /// `String`.
    pub fn string() -> Self {
        Self::class("String")
    }

    /// Create a class type without type arguments.
    ///
    /// The name is taken as-is and not checked.
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Create a parameterized class type.
    pub fn generic(name: impl Into<String>, args: impl IntoIterator<Item = TypeRef>) -> Self {
        Self::Class {
            name: name.into(),
            args: args.into_iter().map(TypeArg::Type).collect(),
        }
    }

    /// Create an array type.
    pub fn array(inner: TypeRef) -> Self {
        Self::Array(Box::new(inner))
    }

    /// Create an unresolved type from its source text.
    pub fn unresolved(text: impl Into<String>) -> Self {
        Self::Unresolved(text.into())
    }

    /// Parse presentable type text such as `Map<String, List<Integer>>`.
    pub fn parse(text: &str) -> Result<Self> {
        parser::parse_type(text)
    }

    /// Check if this is a primitive type.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Check that neither this type nor any of its components is unresolved.
    pub fn is_resolved(&self) -> bool {
        match self {
            Self::Primitive(_) => true,
            Self::Class { args, .. } => args.iter().all(TypeArg::is_resolved),
            Self::Array(inner) => inner.is_resolved(),
            Self::Unresolved(_) => false,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.as_str()),
            Self::Class { name, args } => {
                f.write_str(name)?;
                if !args.is_empty() {
                    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
                    write!(f, "<{}>", args.join(", "))?;
                }
                Ok(())
            }
            Self::Array(inner) => write!(f, "{}[]", inner),
            Self::Unresolved(text) => f.write_str(text),
        }
    }
}

impl FromStr for TypeRef {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A type argument inside `<...>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeArg {
    /// A concrete type argument.
    Type(TypeRef),
    /// `?`
    Wildcard,
    /// `? extends T`
    Extends(TypeRef),
    /// `? super T`
    Super(TypeRef),
}

impl TypeArg {
    fn is_resolved(&self) -> bool {
        match self {
            Self::Type(ty) | Self::Extends(ty) | Self::Super(ty) => ty.is_resolved(),
            Self::Wildcard => true,
        }
    }
}

impl fmt::Display for TypeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(ty) => write!(f, "{}", ty),
            Self::Wildcard => f.write_str("?"),
            Self::Extends(ty) => write!(f, "? extends {}", ty),
            Self::Super(ty) => write!(f, "? super {}", ty),
        }
    }
}
