//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use builderforge_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::java();
/// builder
///     .push_line("void run() {")
///     .push_indent()
///     .push_line("step();")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(builder.build(), "void run() {\n    step();\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_lines() {
        let mut builder = CodeBuilder::java();
        builder
            .push_line("int x = 1;")
            .push_blank()
            .push_line("int y = 2;");
        assert_eq!(builder.build(), "int x = 1;\n\nint y = 2;\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::java();
        builder.push_dedent().push_indent().push_line("step();");
        assert_eq!(builder.build(), "    step();\n");
    }

    #[test]
    fn test_tab_indent() {
        let mut builder = CodeBuilder::new(Indent::Tab);
        builder
            .push_line("class A {")
            .push_indent()
            .push_line("int a;")
            .push_dedent()
            .push_line("}");
        assert_eq!(builder.build(), "class A {\n\tint a;\n}\n");
    }

    #[test]
    fn test_emit_nested_blocks() {
        struct Nested;
        impl Renderable for Nested {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::braced(
                    "class Outer {",
                    vec![CodeFragment::braced(
                        "void run() {",
                        vec![CodeFragment::line("go();")],
                    )],
                )]
            }
        }

        let mut builder = CodeBuilder::new(Indent::Spaces(2));
        builder.emit(&Nested);
        assert_eq!(
            builder.build(),
            "class Outer {\n  void run() {\n    go();\n  }\n}\n"
        );
    }

    #[test]
    fn test_emit_sequence_and_blank() {
        let mut builder = CodeBuilder::java();
        builder.emit(&CodeFragment::sequence(vec![
            CodeFragment::line("int a;"),
            CodeFragment::Blank,
            CodeFragment::line("int b;"),
        ]));
        assert_eq!(builder.build(), "int a;\n\nint b;\n");
    }
}
