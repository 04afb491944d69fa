//! Declarative method and constructor definitions.

use builderforge_model::{Modifier, Modifiers, TypeRef};

use super::{expr::Expr, types::Visibility};

/// A declarative specification for a method or constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    /// Method name; for constructors, the class name.
    pub name: String,
    /// Visibility modifier.
    pub visibility: Visibility,
    /// Whether this is a static method.
    pub is_static: bool,
    /// Return type (None for void, and for constructors).
    pub return_type: Option<TypeRef>,
    /// Whether this is a constructor.
    pub constructor: bool,
    /// Parameters.
    pub params: Vec<ParamSpec>,
    /// Body statements.
    pub body: Vec<Statement>,
}

impl MethodSpec {
    /// Create a new public void method spec.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            return_type: None,
            constructor: false,
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Create a new public constructor spec for the named class.
    pub fn constructor(class_name: impl Into<String>) -> Self {
        Self {
            constructor: true,
            ..Self::new(class_name)
        }
    }

    /// Make this method private.
    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    /// Make this method static.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Set return type.
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Add a parameter.
    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Add a statement to the body.
    pub fn statement(mut self, stmt: Statement) -> Self {
        self.body.push(stmt);
        self
    }

    /// Add multiple statements to the body.
    pub fn statements(mut self, stmts: impl IntoIterator<Item = Statement>) -> Self {
        self.body.extend(stmts);
        self
    }

    /// The modifiers this spec declares.
    pub fn modifiers(&self) -> Modifiers {
        let mut modifiers = Modifiers::new().with(self.visibility.modifier());
        modifiers.set(Modifier::Static, self.is_static);
        modifiers
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    pub ty: TypeRef,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A statement in a method body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `target = value;`
    Assign { target: Expr, value: Expr },
    /// `return value;`
    Return(Expr),
}

impl Statement {
    /// Create an assignment.
    pub fn assign(target: Expr, value: Expr) -> Self {
        Self::Assign { target, value }
    }

    /// Create a return statement.
    pub fn return_(value: Expr) -> Self {
        Self::Return(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_spec() {
        let spec = MethodSpec::new("builder")
            .static_()
            .returns(TypeRef::class("Builder"))
            .statement(Statement::return_(Expr::new_instance(
                TypeRef::class("Builder"),
                [],
            )));

        assert!(!spec.constructor);
        assert_eq!(spec.modifiers().to_string(), "public static");
        assert_eq!(spec.body.len(), 1);
    }

    #[test]
    fn test_constructor_spec() {
        let spec = MethodSpec::constructor("User")
            .private()
            .param(ParamSpec::new("builder", TypeRef::class("Builder")));

        assert!(spec.constructor);
        assert_eq!(spec.name, "User");
        assert_eq!(spec.return_type, None);
        assert_eq!(spec.modifiers().to_string(), "private");
    }
}
