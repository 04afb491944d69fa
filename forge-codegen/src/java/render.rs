use std::fmt;

use builderforge_model::{Modifiers, TypeRef};

use crate::builder::{CodeFragment, Expr, MethodSpec, ParamSpec, Renderable, Statement};

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident(name) => f.write_str(name),
            Expr::This => f.write_str("this"),
            Expr::Field { target, name } => write!(f, "{}.{}", target, name),
            Expr::New { ty, args } => {
                let args: Vec<String> = args.iter().map(ToString::to_string).collect();
                write!(f, "new {}({})", ty, args.join(", "))
            }
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assign { target, value } => write!(f, "{} = {};", target, value),
            Statement::Return(value) => write!(f, "return {};", value),
        }
    }
}

impl fmt::Display for ParamSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

impl Renderable for MethodSpec {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let params: Vec<String> = self.params.iter().map(ToString::to_string).collect();
        let header = method_header(&MethodHeader {
            modifiers: &self.modifiers(),
            return_type: self.return_type.as_ref(),
            constructor: self.constructor,
            name: &self.name,
            params: &params,
            throws: &[],
        });
        let body: Vec<String> = self.body.iter().map(ToString::to_string).collect();
        vec![method_body(header, Some(body.as_slice()))]
    }
}

/// The parts of a method declaration before its body.
pub(super) struct MethodHeader<'a> {
    pub modifiers: &'a Modifiers,
    pub return_type: Option<&'a TypeRef>,
    pub constructor: bool,
    pub name: &'a str,
    pub params: &'a [String],
    pub throws: &'a [TypeRef],
}

pub(super) fn method_header(header: &MethodHeader<'_>) -> String {
    let mut out = String::new();
    if !header.modifiers.is_empty() {
        out.push_str(&header.modifiers.to_string());
        out.push(' ');
    }
    match (header.constructor, header.return_type) {
        (true, _) => {}
        (false, Some(ty)) => {
            out.push_str(&ty.to_string());
            out.push(' ');
        }
        (false, None) => out.push_str("void "),
    }
    out.push_str(header.name);
    out.push('(');
    out.push_str(&header.params.join(", "));
    out.push(')');
    if !header.throws.is_empty() {
        let throws: Vec<String> = header.throws.iter().map(ToString::to_string).collect();
        out.push_str(" throws ");
        out.push_str(&throws.join(", "));
    }
    out
}

/// `header;`, `header {}` or a braced block of statements.
pub(super) fn method_body(header: String, body: Option<&[String]>) -> CodeFragment {
    match body {
        None => CodeFragment::line(format!("{};", header)),
        Some([]) => CodeFragment::line(format!("{} {{}}", header)),
        Some(statements) => CodeFragment::braced(
            format!("{} {{", header),
            statements.iter().map(CodeFragment::line).collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::Indent, java::to_source};

    #[test]
    fn test_expr_display() {
        assert_eq!(Expr::this_field("name").to_string(), "this.name");
        assert_eq!(
            Expr::field(Expr::ident("builder"), "age").to_string(),
            "builder.age"
        );
        assert_eq!(
            Expr::new_instance(TypeRef::class("User"), [Expr::this()]).to_string(),
            "new User(this)"
        );
    }

    #[test]
    fn test_statement_display() {
        let assign = Statement::assign(Expr::this_field("name"), Expr::ident("name"));
        assert_eq!(assign.to_string(), "this.name = name;");
        assert_eq!(
            Statement::return_(Expr::this()).to_string(),
            "return this;"
        );
    }

    #[test]
    fn test_render_method() {
        let spec = MethodSpec::new("tags")
            .returns(TypeRef::class("Builder"))
            .param(ParamSpec::new(
                "tags",
                TypeRef::generic("List", [TypeRef::string()]),
            ))
            .statement(Statement::assign(
                Expr::this_field("tags"),
                Expr::ident("tags"),
            ))
            .statement(Statement::return_(Expr::this()));

        assert_eq!(
            to_source(&spec, Indent::Spaces(2)),
            "public Builder tags(List<String> tags) {\n  this.tags = tags;\n  return this;\n}\n"
        );
    }

    #[test]
    fn test_render_empty_constructor() {
        let spec = MethodSpec::constructor("Builder").private();
        assert_eq!(to_source(&spec, Indent::JAVA), "private Builder() {}\n");
    }

    #[test]
    fn test_render_void_method() {
        let spec = MethodSpec::new("reset");
        assert_eq!(to_source(&spec, Indent::JAVA), "public void reset() {}\n");
    }
}
