//! Parsing of Java declarations into structural nodes.
//!
//! The grammar covers what generated members and plain data classes need:
//! fields with optional initializers, methods and constructors with bodies,
//! nested classes, package and import declarations. Method bodies are not
//! parsed into expressions; they are split into top-level statements with
//! whitespace collapsed. Comments are skipped. Annotations are kept as raw
//! modifier text. Generic type parameters on classes or methods, and
//! initializer blocks are rejected.

use crate::{
    ClassNode, CompilationUnit, Error, FieldNode, Member, MethodNode, Modifier, Modifiers,
    ParamNode, PrimitiveType, Result, TypeArg, TypeRef,
    keywords::{is_identifier_part, is_identifier_start, is_reserved},
};

const MEMBER_SOURCE: &str = "<member>";
const TYPE_SOURCE: &str = "<type>";

/// Parse exactly one member declaration.
pub fn parse_member(text: &str) -> Result<Member> {
    let mut parser = Parser::new(text, MEMBER_SOURCE);
    let member = parser.member()?;
    parser.expect_end()?;
    Ok(member)
}

/// Parse exactly one class declaration.
pub fn parse_class(text: &str) -> Result<ClassNode> {
    let mut parser = Parser::new(text, MEMBER_SOURCE);
    let class = parser.top_level_class()?;
    parser.expect_end()?;
    Ok(class)
}

/// Parse presentable type text.
pub fn parse_type(text: &str) -> Result<TypeRef> {
    let mut parser = Parser::new(text, TYPE_SOURCE);
    let ty = parser.type_ref()?;
    parser.expect_end()?;
    Ok(ty)
}

/// Parse a source file holding a single top-level class.
pub fn parse_compilation_unit(text: &str, filename: &str) -> Result<CompilationUnit> {
    let mut parser = Parser::new(text, filename);
    let package = if parser.eat_keyword("package")? {
        let name = parser.qualified_name(false)?;
        parser.expect(';', "';'")?;
        Some(name)
    } else {
        None
    };

    let mut imports = Vec::new();
    while parser.eat_keyword("import")? {
        let is_static = parser.eat_keyword("static")?;
        let name = parser.qualified_name(true)?;
        parser.expect(';', "';'")?;
        imports.push(if is_static {
            format!("static {}", name)
        } else {
            name
        });
    }

    let class = parser.top_level_class()?;
    let class_close = parser.pos - 1;
    parser.expect_end()?;
    Ok(CompilationUnit {
        package,
        imports,
        class,
        class_close,
    })
}

struct Parser<'a> {
    src: &'a str,
    filename: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str, filename: &'a str) -> Self {
        Self {
            src,
            filename,
            pos: 0,
        }
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    fn top_level_class(&mut self) -> Result<ClassNode> {
        let start = self.offset()?;
        let modifiers = self.modifiers()?;
        if !self.eat_keyword("class")? {
            return Err(self.unexpected("a class declaration"));
        }
        self.class_rest(start, modifiers)
    }

    fn member(&mut self) -> Result<Member> {
        let start = self.offset()?;
        let modifiers = self.modifiers()?;

        if self.eat_keyword("class")? {
            return self.class_rest(start, modifiers).map(Member::Class);
        }
        if self.peek_char()? == Some('{') {
            return Err(self.error(start, 1, "initializer blocks are not supported"));
        }
        if self.peek_char()? == Some('<') {
            return Err(self.error(self.pos, 1, "generic methods are not supported"));
        }

        // `Name(` with no return type declares a constructor.
        let checkpoint = self.pos;
        if let Some((word, _)) = self.word()? {
            if !is_reserved(word) && self.peek_char()? == Some('(') {
                let mut ctor = MethodNode::constructor(word);
                ctor.modifiers = modifiers;
                self.method_rest(&mut ctor)?;
                return Ok(Member::Method(ctor));
            }
        }
        self.pos = checkpoint;

        let return_type = if self.eat_keyword("void")? {
            None
        } else {
            Some(self.type_ref()?)
        };
        let name = self.identifier("a member name")?;

        if self.peek_char()? == Some('(') {
            let mut method = MethodNode::new(name);
            method.modifiers = modifiers;
            method.return_type = return_type;
            self.method_rest(&mut method)?;
            return Ok(Member::Method(method));
        }

        let Some(ty) = return_type else {
            return Err(self.error(start, self.pos - start, "a field cannot have type 'void'"));
        };
        let mut field = FieldNode::new(name, ty);
        field.modifiers = modifiers;
        if self.eat('=')? {
            field.initializer = Some(self.initializer()?);
        } else if self.peek_char()? == Some(',') {
            return Err(self.error(
                self.pos,
                1,
                "declare one field per statement; multiple declarators are not supported",
            ));
        } else {
            self.expect(';', "'=' or ';'")?;
        }
        Ok(Member::Field(field))
    }

    /// Everything after the `class` keyword.
    fn class_rest(&mut self, start: usize, modifiers: Modifiers) -> Result<ClassNode> {
        let mut class = ClassNode::new(self.identifier("a class name")?);
        class.modifiers = modifiers;
        if self.peek_char()? == Some('<') {
            return Err(self.error(self.pos, 1, "generic classes are not supported"));
        }
        if self.eat_keyword("extends")? {
            class.superclass = Some(self.type_ref()?);
        }
        if self.eat_keyword("implements")? {
            loop {
                class.interfaces.push(self.type_ref()?);
                if !self.eat(',')? {
                    break;
                }
            }
        }
        self.expect('{', "'{'")?;

        loop {
            if self.eat('}')? {
                return Ok(class);
            }
            if self.eat(';')? {
                continue;
            }
            if self.peek_char()?.is_none() {
                return Err(self.error(start, self.pos - start, "unclosed class body"));
            }
            let member_start = self.offset()?;
            let member = self.member()?;
            if let Some(reason) = class.conflict(&member) {
                return Err(self.error(member_start, self.pos - member_start, reason));
            }
            class.members.push(member);
        }
    }

    /// Parameters, `throws` clause and body.
    fn method_rest(&mut self, method: &mut MethodNode) -> Result<()> {
        self.expect('(', "'('")?;
        if !self.eat(')')? {
            loop {
                let param = self.param()?;
                let varargs = param.varargs;
                method.params.push(param);
                if self.eat(')')? {
                    break;
                }
                if varargs {
                    return Err(self.unexpected("')' after a varargs parameter"));
                }
                self.expect(',', "',' or ')'")?;
            }
        }
        if self.eat_keyword("throws")? {
            loop {
                method.throws.push(self.type_ref()?);
                if !self.eat(',')? {
                    break;
                }
            }
        }
        if self.eat(';')? {
            method.body = None;
        } else {
            method.body = Some(self.block_statements()?);
        }
        Ok(())
    }

    fn param(&mut self) -> Result<ParamNode> {
        let start = self.offset()?;
        let modifiers = self.modifiers()?;
        if modifiers.iter().any(|m| m != Modifier::Final) {
            return Err(self.error(
                start,
                self.pos - start,
                "parameters only take 'final' and annotations",
            ));
        }
        let ty = self.type_ref()?;
        let varargs = self.eat_str("...")?;
        let mut param = ParamNode::new(self.identifier("a parameter name")?, ty);
        param.modifiers = modifiers;
        param.varargs = varargs;
        Ok(param)
    }

    fn modifiers(&mut self) -> Result<Modifiers> {
        let mut modifiers = Modifiers::new();
        loop {
            if self.peek_char()? == Some('@') {
                let annotation = self.annotation()?;
                modifiers.annotate(annotation);
                continue;
            }
            let checkpoint = self.pos;
            let Some((word, start)) = self.word()? else {
                return Ok(modifiers);
            };
            let Some(modifier) = Modifier::from_keyword(word) else {
                self.pos = checkpoint;
                return Ok(modifiers);
            };
            if modifiers.has(modifier) {
                return Err(self.error(start, word.len(), format!("repeated modifier '{}'", word)));
            }
            if modifier.is_access() && modifiers.access().is_some() {
                return Err(self.error(start, word.len(), "conflicting access modifiers"));
            }
            modifiers.set(modifier, true);
        }
    }

    /// `@Name` with optional arguments, whitespace collapsed.
    fn annotation(&mut self) -> Result<String> {
        let start = self.offset()?;
        self.expect('@', "'@'")?;
        if self.eat_keyword("interface")? {
            return Err(self.error(
                start,
                self.pos - start,
                "annotation type declarations are not supported",
            ));
        }
        let mut text = format!("@{}", self.qualified_name(false)?);
        if self.peek_char()? == Some('(') {
            let mut depth = 0;
            loop {
                let Some(c) = self.peek() else {
                    return Err(self.error(start, self.pos - start, "unclosed annotation"));
                };
                self.raw_char(c, &mut text, &mut depth)?;
                if depth == 0 {
                    break;
                }
            }
        }
        Ok(text)
    }

    // =========================================================================
    // Types and names
    // =========================================================================

    fn type_ref(&mut self) -> Result<TypeRef> {
        let Some((word, start)) = self.word()? else {
            return Err(self.unexpected("a type"));
        };
        let mut ty = if let Some(p) = PrimitiveType::from_keyword(word) {
            TypeRef::Primitive(p)
        } else if is_reserved(word) {
            return Err(self.error(start, word.len(), format!("'{}' is not a type", word)));
        } else {
            let mut name = word.to_string();
            while !self.at("...")? && self.eat('.')? {
                name.push('.');
                name.push_str(&self.identifier("a type name")?);
            }
            let args = if self.eat('<')? {
                self.type_args()?
            } else {
                Vec::new()
            };
            TypeRef::Class { name, args }
        };
        while self.eat('[')? {
            self.expect(']', "']'")?;
            ty = TypeRef::Array(Box::new(ty));
        }
        Ok(ty)
    }

    fn type_args(&mut self) -> Result<Vec<TypeArg>> {
        let mut args = Vec::new();
        loop {
            let arg = if self.eat('?')? {
                if self.eat_keyword("extends")? {
                    TypeArg::Extends(self.type_ref()?)
                } else if self.eat_keyword("super")? {
                    TypeArg::Super(self.type_ref()?)
                } else {
                    TypeArg::Wildcard
                }
            } else {
                let start = self.offset()?;
                let ty = self.type_ref()?;
                if ty.is_primitive() {
                    return Err(self.error(
                        start,
                        self.pos - start,
                        "primitive types cannot be type arguments",
                    ));
                }
                TypeArg::Type(ty)
            };
            args.push(arg);
            if !self.eat(',')? {
                self.expect('>', "',' or '>'")?;
                return Ok(args);
            }
        }
    }

    /// Dotted name; with `wildcard`, a trailing `.*` is accepted.
    fn qualified_name(&mut self, wildcard: bool) -> Result<String> {
        let mut name = self.identifier("a name")?;
        while self.eat('.')? {
            if wildcard && self.eat('*')? {
                name.push_str(".*");
                break;
            }
            name.push('.');
            name.push_str(&self.identifier("a name")?);
        }
        Ok(name)
    }

    fn identifier(&mut self, what: &str) -> Result<String> {
        match self.word()? {
            Some((word, start)) if is_reserved(word) => Err(self.error(
                start,
                word.len(),
                format!("'{}' is a reserved word and cannot be used as {}", word, what),
            )),
            Some((word, _)) => Ok(word.to_string()),
            None => Err(self.unexpected(what)),
        }
    }

    // =========================================================================
    // Raw text: initializers and bodies
    // =========================================================================

    /// Expression text up to the `;` that ends the field declaration.
    fn initializer(&mut self) -> Result<String> {
        let start = self.offset()?;
        let mut text = String::new();
        let mut depth = 0usize;
        loop {
            let Some(c) = self.peek() else {
                return Err(self.error(start, self.pos - start, "expected ';' after initializer"));
            };
            match c {
                ';' if depth == 0 => {
                    self.pos += 1;
                    let text = text.trim_end().to_string();
                    if text.is_empty() {
                        return Err(self.error(start, 1, "expected an initializer expression"));
                    }
                    return Ok(text);
                }
                _ => self.raw_char(c, &mut text, &mut depth)?,
            }
        }
    }

    /// The statements of a `{ ... }` block.
    fn block_statements(&mut self) -> Result<Vec<String>> {
        self.expect('{', "'{' or ';'")?;
        let open = self.pos - 1;
        let mut statements = Vec::new();
        let mut current = String::new();
        let mut depth = 0usize;
        loop {
            let Some(c) = self.peek() else {
                return Err(self.error(open, 1, "unclosed '{'"));
            };
            match c {
                '}' if depth == 0 => {
                    self.pos += 1;
                    flush(&mut current, &mut statements);
                    return Ok(statements);
                }
                ';' if depth == 0 => {
                    self.pos += 1;
                    current.push(';');
                    flush(&mut current, &mut statements);
                }
                '}' => {
                    self.raw_char(c, &mut current, &mut depth)?;
                    if depth == 0 && !self.statement_continues()? {
                        flush(&mut current, &mut statements);
                    }
                }
                _ => self.raw_char(c, &mut current, &mut depth)?,
            }
        }
    }

    /// Whether the text after a closing `}` still belongs to the statement,
    /// as in `} else {`, `} catch (...)`, `} while (...);` or `};`.
    fn statement_continues(&mut self) -> Result<bool> {
        let checkpoint = self.pos;
        let continues = match self.peek_char()? {
            Some(';' | ')' | ',' | '.') => true,
            _ => matches!(
                self.word()?,
                Some(("else" | "catch" | "finally" | "while", _))
            ),
        };
        self.pos = checkpoint;
        Ok(continues)
    }

    /// Consume one character (or literal, or comment) of raw text.
    fn raw_char(&mut self, c: char, text: &mut String, depth: &mut usize) -> Result<()> {
        match c {
            '"' if self.rest().starts_with("\"\"\"") => {
                let block = self.text_block()?;
                text.push_str(block);
            }
            '"' | '\'' => {
                let literal = self.literal(c)?;
                text.push_str(literal);
            }
            '/' if self.rest().starts_with("//") || self.rest().starts_with("/*") => {
                self.skip_trivia()?;
                push_space(text);
            }
            c if c.is_whitespace() => {
                self.pos += c.len_utf8();
                push_space(text);
            }
            '{' | '(' | '[' => {
                self.pos += 1;
                *depth += 1;
                text.push(c);
            }
            '}' | ')' | ']' => {
                *depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| self.error(self.pos, 1, format!("unbalanced '{}'", c)))?;
                self.pos += 1;
                text.push(c);
            }
            _ => {
                self.pos += c.len_utf8();
                text.push(c);
            }
        }
        Ok(())
    }

    /// A string or character literal, returned verbatim.
    fn literal(&mut self, quote: char) -> Result<&'a str> {
        let start = self.pos;
        let mut escaped = false;
        for (i, c) in self.src[start + 1..].char_indices() {
            match c {
                '\n' => break,
                '\\' if !escaped => escaped = true,
                c if c == quote && !escaped => {
                    self.pos = start + 1 + i + 1;
                    return Ok(&self.src[start..self.pos]);
                }
                _ => escaped = false,
            }
        }
        Err(self.error(start, 1, "unterminated literal"))
    }

    /// A `"""` text block, returned verbatim.
    fn text_block(&mut self) -> Result<&'a str> {
        let start = self.pos;
        let body = start + 3;
        let mut escaped = false;
        for (i, c) in self.src[body..].char_indices() {
            match c {
                '\\' if !escaped => escaped = true,
                '"' if !escaped && self.src[body + i..].starts_with("\"\"\"") => {
                    self.pos = body + i + 3;
                    return Ok(&self.src[start..self.pos]);
                }
                _ => escaped = false,
            }
        }
        Err(self.error(start, 3, "unterminated text block"))
    }

    // =========================================================================
    // Low-level scanning
    // =========================================================================

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Next significant character, after whitespace and comments.
    fn peek_char(&mut self) -> Result<Option<char>> {
        self.skip_trivia()?;
        Ok(self.peek())
    }

    /// Offset of the next significant character.
    fn offset(&mut self) -> Result<usize> {
        self.skip_trivia()?;
        Ok(self.pos)
    }

    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            let rest = self.rest();
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();
            if trimmed.starts_with("//") {
                self.pos += trimmed.find('\n').unwrap_or(trimmed.len());
            } else if let Some(comment) = trimmed.strip_prefix("/*") {
                match comment.find("*/") {
                    Some(end) => self.pos += end + 4,
                    None => return Err(self.error(self.pos, 2, "unterminated comment")),
                }
            } else {
                return Ok(());
            }
        }
    }

    fn eat(&mut self, c: char) -> Result<bool> {
        if self.peek_char()? == Some(c) {
            self.pos += c.len_utf8();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Whether the next significant text starts with `s`.
    fn at(&mut self, s: &str) -> Result<bool> {
        self.skip_trivia()?;
        Ok(self.rest().starts_with(s))
    }

    fn eat_str(&mut self, s: &str) -> Result<bool> {
        if self.at(s)? {
            self.pos += s.len();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, c: char, expected: &str) -> Result<()> {
        if self.eat(c)? {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn expect_end(&mut self) -> Result<()> {
        if self.peek_char()?.is_some() {
            Err(self.unexpected("end of input"))
        } else {
            Ok(())
        }
    }

    /// Consume an identifier-like word, returning it with its offset.
    fn word(&mut self) -> Result<Option<(&'a str, usize)>> {
        self.skip_trivia()?;
        let rest = self.rest();
        match rest.chars().next() {
            Some(c) if is_identifier_start(c) => {}
            _ => return Ok(None),
        }
        let len = rest
            .char_indices()
            .find(|&(_, c)| !is_identifier_part(c))
            .map_or(rest.len(), |(i, _)| i);
        let start = self.pos;
        self.pos += len;
        Ok(Some((&rest[..len], start)))
    }

    fn eat_keyword(&mut self, keyword: &str) -> Result<bool> {
        let checkpoint = self.pos;
        match self.word()? {
            Some((word, _)) if word == keyword => Ok(true),
            _ => {
                self.pos = checkpoint;
                Ok(false)
            }
        }
    }

    fn error(&self, offset: usize, len: usize, message: impl Into<String>) -> Box<Error> {
        Error::syntax(self.src, self.filename, offset, len, message)
    }

    /// Error for whatever token sits at the current position.
    fn unexpected(&mut self, expected: &str) -> Box<Error> {
        if let Err(err) = self.skip_trivia() {
            return err;
        }
        let rest = self.rest();
        let found = match rest.chars().next() {
            None => return self.error(self.pos, 0, format!("expected {}, found end of input", expected)),
            Some(c) if is_identifier_start(c) => rest
                .split(|c: char| !is_identifier_part(c))
                .next()
                .unwrap_or_default(),
            Some(c) => &rest[..c.len_utf8()],
        };
        self.error(
            self.pos,
            found.len(),
            format!("expected {}, found '{}'", expected, found),
        )
    }
}

fn push_space(text: &mut String) {
    if !text.is_empty() && !text.ends_with(' ') {
        text.push(' ');
    }
}

fn flush(current: &mut String, statements: &mut Vec<String>) {
    let statement = current.trim();
    if !statement.is_empty() {
        statements.push(statement.to_string());
    }
    current.clear();
}
