use builderforge_model::{ClassNode, FieldNode, Member, MethodNode};

use super::render::{MethodHeader, method_body, method_header};
use crate::builder::{CodeFragment, Renderable};

impl Renderable for FieldNode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut line = String::new();
        if !self.modifiers.is_empty() {
            line.push_str(&self.modifiers.to_string());
            line.push(' ');
        }
        line.push_str(&format!("{} {}", self.ty, self.name));
        if let Some(init) = &self.initializer {
            line.push_str(" = ");
            line.push_str(init);
        }
        line.push(';');
        vec![CodeFragment::Line(line)]
    }
}

impl Renderable for MethodNode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let params: Vec<String> = self.params.iter().map(ToString::to_string).collect();
        let header = method_header(&MethodHeader {
            modifiers: &self.modifiers,
            return_type: self.return_type.as_ref(),
            constructor: self.constructor,
            name: &self.name,
            params: &params,
            throws: &self.throws,
        });
        vec![method_body(header, self.body.as_deref())]
    }
}

impl Renderable for Member {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Member::Field(f) => f.to_fragments(),
            Member::Method(m) => m.to_fragments(),
            Member::Class(c) => c.to_fragments(),
        }
    }
}

/// Members are separated by a blank line, except between adjacent fields.
impl Renderable for ClassNode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut header = String::new();
        if !self.modifiers().is_empty() {
            header.push_str(&self.modifiers().to_string());
            header.push(' ');
        }
        header.push_str("class ");
        header.push_str(self.name());
        if let Some(superclass) = &self.superclass {
            header.push_str(&format!(" extends {}", superclass));
        }
        if !self.interfaces.is_empty() {
            let interfaces: Vec<String> = self.interfaces.iter().map(ToString::to_string).collect();
            header.push_str(&format!(" implements {}", interfaces.join(", ")));
        }

        if self.members().is_empty() {
            return vec![CodeFragment::line(format!("{} {{}}", header))];
        }

        let mut body = Vec::new();
        let mut previous: Option<&Member> = None;
        for member in self.members() {
            if let Some(prev) = previous {
                let both_fields = matches!((prev, member), (Member::Field(_), Member::Field(_)));
                if !both_fields {
                    body.push(CodeFragment::Blank);
                }
            }
            body.extend(member.to_fragments());
            previous = Some(member);
        }
        vec![CodeFragment::braced(format!("{} {{", header), body)]
    }
}
