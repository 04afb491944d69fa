//! Creation of structural nodes for generated code.

use crate::{
    ClassNode, Error, FieldNode, Member, Modifier, Result, TypeRef, keywords::is_identifier,
    parser,
};

/// Creates members that can be attached to a [`TargetClass`](crate::TargetClass).
pub trait ElementFactory {
    /// Parse one member declaration (field, method, constructor or class).
    fn create_member_from_text(&self, text: &str) -> Result<Member>;

    /// Create an empty public class.
    fn create_class(&self, name: &str) -> Result<ClassNode>;

    /// Create a private field. The type is embedded as given.
    fn create_field(&self, name: &str, ty: &TypeRef) -> Result<FieldNode>;
}

/// [`ElementFactory`] backed by the Java declaration parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaElementFactory;

impl ElementFactory for JavaElementFactory {
    fn create_member_from_text(&self, text: &str) -> Result<Member> {
        parser::parse_member(text)
    }

    fn create_class(&self, name: &str) -> Result<ClassNode> {
        check_name(name, "class")?;
        let mut class = ClassNode::new(name);
        class.set_modifier(Modifier::Public, true);
        Ok(class)
    }

    fn create_field(&self, name: &str, ty: &TypeRef) -> Result<FieldNode> {
        check_name(name, "field")?;
        Ok(FieldNode::new(name, ty.clone()).modifier(Modifier::Private))
    }
}

fn check_name(name: &str, what: &str) -> Result<()> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(Error::syntax(
            name,
            &format!("<{} name>", what),
            0,
            name.len(),
            format!("'{}' is not a valid {} name", name, what),
        ))
    }
}
