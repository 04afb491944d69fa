//! The class a builder is generated for.

use crate::{ClassNode, FieldNode, Member, Result};

/// A class that accepts generated members.
///
/// [`ClassNode`] implements this directly. Hosts with their own class
/// representation implement it to receive generated members.
pub trait TargetClass {
    fn name(&self) -> &str;

    /// Fields in declaration order.
    fn fields(&self) -> Vec<FieldNode>;

    /// Append a member, failing if the class cannot hold it.
    fn add(&mut self, member: Member) -> Result<()>;
}

impl TargetClass for ClassNode {
    fn name(&self) -> &str {
        ClassNode::name(self)
    }

    fn fields(&self) -> Vec<FieldNode> {
        ClassNode::fields(self).cloned().collect()
    }

    fn add(&mut self, member: Member) -> Result<()> {
        ClassNode::add(self, member)
    }
}
