//! Insertion of rendered members into existing source text.

use builderforge_model::Member;

use crate::builder::{CodeBuilder, Indent};

/// Insert `members` just before the class's closing brace at `class_close`.
///
/// Everything outside the insertion point is kept byte for byte. Members
/// are indented one level and separated from each other, and from any
/// existing body, by a blank line.
pub fn insert_members(
    source: &str,
    class_close: usize,
    members: &[Member],
    indent: Indent,
) -> String {
    if members.is_empty() {
        return source.to_string();
    }
    let head = source[..class_close].trim_end();
    let brace_line = &source[head.len()..class_close];
    // Keep the brace's own indentation when it sits alone on its line.
    let brace_indent = match brace_line.rfind('\n') {
        Some(newline) => &brace_line[newline + 1..],
        None => "",
    };

    let mut builder = CodeBuilder::new(indent);
    builder.push_indent();
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            builder.push_blank();
        }
        builder.emit(member);
    }

    let mut out = String::with_capacity(source.len() + 1024);
    out.push_str(head);
    out.push('\n');
    if !head.ends_with('{') {
        out.push('\n');
    }
    out.push_str(&builder.build());
    out.push_str(brace_indent);
    out.push_str(&source[class_close..]);
    out
}
