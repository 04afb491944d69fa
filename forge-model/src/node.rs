//! Structural nodes: classes and their members.

use std::fmt;

use crate::{Error, Modifier, Modifiers, Result, TypeRef};

/// A field declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldNode {
    pub name: String,
    pub ty: TypeRef,
    pub modifiers: Modifiers,
    /// Initializer expression text, without the `=`.
    pub initializer: Option<String>,
}

impl FieldNode {
    /// Create a field with no modifiers.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Modifiers::new(),
            initializer: None,
        }
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.set(modifier, true);
        self
    }

    pub fn initializer(mut self, expr: impl Into<String>) -> Self {
        self.initializer = Some(expr.into());
        self
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.has(Modifier::Static)
    }
}

/// A method or constructor parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamNode {
    pub name: String,
    pub ty: TypeRef,
    /// `final` and annotations.
    pub modifiers: Modifiers,
    /// `T... name`; only the last parameter may be variadic.
    pub varargs: bool,
}

impl ParamNode {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Modifiers::new(),
            varargs: false,
        }
    }

    /// The parameter's type as it reads in a signature.
    pub fn type_text(&self) -> String {
        if self.varargs {
            format!("{}...", self.ty)
        } else {
            self.ty.to_string()
        }
    }
}

impl fmt::Display for ParamNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.modifiers.is_empty() {
            write!(f, "{} ", self.modifiers)?;
        }
        write!(f, "{} {}", self.type_text(), self.name)
    }
}

/// A method or constructor declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodNode {
    pub name: String,
    pub modifiers: Modifiers,
    /// Return type; `None` means `void` (or nothing, for constructors).
    pub return_type: Option<TypeRef>,
    pub params: Vec<ParamNode>,
    pub throws: Vec<TypeRef>,
    /// Top-level statements; `None` for abstract and native methods.
    pub body: Option<Vec<String>>,
    pub constructor: bool,
}

impl MethodNode {
    /// Create a `void` method with an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Modifiers::new(),
            return_type: None,
            params: Vec::new(),
            throws: Vec::new(),
            body: Some(Vec::new()),
            constructor: false,
        }
    }

    /// Create a constructor with an empty body.
    pub fn constructor(name: impl Into<String>) -> Self {
        Self {
            constructor: true,
            ..Self::new(name)
        }
    }

    pub fn is_constructor(&self) -> bool {
        self.constructor
    }

    /// Statements of the body, empty for bodyless methods.
    pub fn statements(&self) -> &[String] {
        self.body.as_deref().unwrap_or_default()
    }

    /// `name(Type, Type)`, used to describe the method in messages.
    pub fn signature(&self) -> String {
        let params: Vec<String> = self.params.iter().map(ParamNode::type_text).collect();
        format!("{}({})", self.name, params.join(", "))
    }
}

/// A class declaration and its members, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassNode {
    pub name: String,
    pub modifiers: Modifiers,
    pub superclass: Option<TypeRef>,
    pub interfaces: Vec<TypeRef>,
    pub(crate) members: Vec<Member>,
}

impl ClassNode {
    /// Create an empty class with no modifiers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Modifiers::new(),
            superclass: None,
            interfaces: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    pub fn set_modifier(&mut self, modifier: Modifier, on: bool) {
        self.modifiers.set(modifier, on);
    }

    /// All members in declaration order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldNode> {
        self.members.iter().filter_map(Member::as_field)
    }

    /// Methods, excluding constructors.
    pub fn methods(&self) -> impl Iterator<Item = &MethodNode> {
        self.members
            .iter()
            .filter_map(Member::as_method)
            .filter(|m| !m.is_constructor())
    }

    pub fn constructors(&self) -> impl Iterator<Item = &MethodNode> {
        self.members
            .iter()
            .filter_map(Member::as_method)
            .filter(|m| m.is_constructor())
    }

    pub fn inner_classes(&self) -> impl Iterator<Item = &ClassNode> {
        self.members.iter().filter_map(Member::as_class)
    }

    pub fn find_field(&self, name: &str) -> Option<&FieldNode> {
        self.fields().find(|f| f.name == name)
    }

    pub fn find_inner_class(&self, name: &str) -> Option<&ClassNode> {
        self.inner_classes().find(|c| c.name == name)
    }

    /// Append a member.
    ///
    /// Members are never merged: adding the same declaration twice keeps both.
    /// A constructor must carry the class name, and a nested class may not
    /// reuse the name of the class it is added to.
    pub fn add(&mut self, member: impl Into<Member>) -> Result<()> {
        let member = member.into();
        if let Some(reason) = self.conflict(&member) {
            return Err(Error::rejected(&self.name, member.to_string(), reason));
        }
        self.members.push(member);
        Ok(())
    }

    pub(crate) fn conflict(&self, member: &Member) -> Option<String> {
        match member {
            Member::Method(m) if m.is_constructor() && m.name != self.name => Some(format!(
                "a constructor of '{}' must be named '{}'",
                self.name, self.name
            )),
            Member::Class(c) if c.name == self.name => Some(format!(
                "a nested class cannot share the name of its enclosing class '{}'",
                self.name
            )),
            _ => None,
        }
    }
}

/// Any member that can be attached to a class.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Field(FieldNode),
    Method(MethodNode),
    Class(ClassNode),
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Member::Field(f) => &f.name,
            Member::Method(m) => &m.name,
            Member::Class(c) => &c.name,
        }
    }

    pub fn kind(&self) -> MemberKind {
        match self {
            Member::Field(_) => MemberKind::Field,
            Member::Method(m) if m.is_constructor() => MemberKind::Constructor,
            Member::Method(_) => MemberKind::Method,
            Member::Class(_) => MemberKind::Class,
        }
    }

    pub fn as_field(&self) -> Option<&FieldNode> {
        match self {
            Member::Field(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodNode> {
        match self {
            Member::Method(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassNode> {
        match self {
            Member::Class(c) => Some(c),
            _ => None,
        }
    }
}

/// Short description, e.g. `constructor 'User(Builder)'`.
impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Method(m) => write!(f, "{} '{}'", self.kind(), m.signature()),
            _ => write!(f, "{} '{}'", self.kind(), self.name()),
        }
    }
}

impl From<FieldNode> for Member {
    fn from(field: FieldNode) -> Self {
        Member::Field(field)
    }
}

impl From<MethodNode> for Member {
    fn from(method: MethodNode) -> Self {
        Member::Method(method)
    }
}

impl From<ClassNode> for Member {
    fn from(class: ClassNode) -> Self {
        Member::Class(class)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Field,
    Method,
    Constructor,
    Class,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MemberKind::Field => "field",
            MemberKind::Method => "method",
            MemberKind::Constructor => "constructor",
            MemberKind::Class => "class",
        })
    }
}

/// A source file: package, imports and one top-level class.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationUnit {
    pub package: Option<String>,
    /// Import targets as written after `import`, e.g. `java.util.List`
    /// or `static java.util.Objects.requireNonNull`.
    pub imports: Vec<String>,
    pub class: ClassNode,
    /// Byte offset of the class's closing `}` in the parsed text.
    pub class_close: usize,
}
