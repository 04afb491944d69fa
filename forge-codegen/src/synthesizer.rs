//! Builder synthesis.
//!
//! [`BuilderSynthesizer`] turns one class into a builder-equipped class by
//! attaching three [`Fragment`]s, in order:
//!
//! 1. a private constructor copying every field from a builder,
//! 2. a static factory method returning a new builder,
//! 3. a nested, final builder class with one field and one chainable setter
//!    per target field, a private constructor and a `build()` method.
//!
//! Every fragment is described as a [`MethodSpec`], rendered to Java text and
//! handed to the host's [`ElementFactory`] to become a structural member.
//! Generation is a single forward pass: nothing is rolled back when a later
//! fragment fails, and running it twice attaches everything twice.

use std::fmt;

use builderforge_model::{
    ClassNode, ElementFactory, FieldNode, Member, Modifier, TargetClass, TypeRef,
    keywords::check_identifier,
};
use tracing::debug;

use crate::{
    BuilderOptions, Error, Result,
    builder::{Expr, Indent, MethodSpec, ParamSpec, Statement},
    java::to_source,
};

/// Name of the builder parameter of the generated private constructor.
const BUILDER_PARAM: &str = "builder";

/// One of the three members attached to the target class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    PrivateConstructor,
    FactoryMethod,
    BuilderClass,
}

impl Fragment {
    /// All fragments in attachment order.
    pub const ALL: [Fragment; 3] = [
        Fragment::PrivateConstructor,
        Fragment::FactoryMethod,
        Fragment::BuilderClass,
    ];
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Fragment::PrivateConstructor => "private constructor",
            Fragment::FactoryMethod => "factory method",
            Fragment::BuilderClass => "builder class",
        })
    }
}

/// Generates a builder for one target class.
///
/// The class name and fields are captured when the synthesizer is created;
/// generated text is derived from that snapshot only.
///
/// # Example
///
/// ```
/// use builderforge_codegen::BuilderSynthesizer;
/// use builderforge_model::{JavaElementFactory, parse_class};
///
/// let mut class = parse_class("public class Point { private int x; private int y; }").unwrap();
/// BuilderSynthesizer::new(&mut class, &JavaElementFactory)
///     .generate()
///     .unwrap();
///
/// assert!(class.find_inner_class("Builder").is_some());
/// ```
pub struct BuilderSynthesizer<'a, C: TargetClass + ?Sized, F: ElementFactory + ?Sized> {
    target: &'a mut C,
    factory: &'a F,
    class_name: String,
    fields: Vec<FieldNode>,
    options: BuilderOptions,
}

impl<'a, C: TargetClass + ?Sized, F: ElementFactory + ?Sized> BuilderSynthesizer<'a, C, F> {
    /// Capture the target's name and fields.
    pub fn new(target: &'a mut C, factory: &'a F) -> Self {
        let class_name = target.name().to_string();
        let fields = target.fields();
        Self {
            target,
            factory,
            class_name,
            fields,
            options: BuilderOptions::default(),
        }
    }

    /// Use custom names for the generated members.
    pub fn with_options(mut self, options: BuilderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The captured fields, in declaration order.
    pub fn fields(&self) -> &[FieldNode] {
        &self.fields
    }

    pub fn options(&self) -> &BuilderOptions {
        &self.options
    }

    /// Check names and field types before anything is attached.
    ///
    /// Type text is not checked here: a type that resolved but does not
    /// form a valid declaration is reported by the host when the fragment
    /// embedding it is parsed.
    pub fn validate(&self) -> Result<()> {
        let class = &self.class_name;
        check_identifier(class)
            .map_err(|problem| Error::precondition(class, format!("class {}", problem)))?;

        for (role, name) in self.options.named() {
            check_identifier(name).map_err(|problem| {
                Error::precondition(class, format!("{} '{}': {}", role, name, problem))
            })?;
        }

        for field in &self.fields {
            check_identifier(&field.name).map_err(|problem| {
                Error::precondition(class, format!("field '{}': {}", field.name, problem))
            })?;
            if !field.ty.is_resolved() {
                return Err(Error::precondition(
                    class,
                    format!("field '{}' has unresolved type '{}'", field.name, field.ty),
                ));
            }
        }
        Ok(())
    }

    /// Attach all three fragments to the target, in order.
    pub fn generate(&mut self) -> Result<()> {
        self.validate()?;
        debug!(
            class = %self.class_name,
            fields = self.fields.len(),
            "generating builder"
        );
        for fragment in Fragment::ALL {
            self.attach_validated(fragment)?;
        }
        Ok(())
    }

    /// Attach a single fragment.
    pub fn attach(&mut self, fragment: Fragment) -> Result<()> {
        self.validate()?;
        self.attach_validated(fragment)
    }

    fn attach_validated(&mut self, fragment: Fragment) -> Result<()> {
        let member = self.synthesize(fragment)?;
        debug!(class = %self.class_name, %fragment, %member, "attaching");
        self.target
            .add(member)
            .map_err(|e| Error::fragment(fragment, e))
    }

    /// Build the structural member for a fragment without attaching it.
    pub fn synthesize(&self, fragment: Fragment) -> Result<Member> {
        match fragment {
            Fragment::PrivateConstructor => self.parse(fragment, &self.private_constructor()),
            Fragment::FactoryMethod => self.parse(fragment, &self.factory_method()),
            Fragment::BuilderClass => self.builder_class().map(Member::Class),
        }
    }

    /// Java source of a fragment, for previews. Nothing is attached.
    pub fn render(&self, fragment: Fragment, indent: Indent) -> Result<String> {
        self.validate()?;
        let text = match fragment {
            Fragment::PrivateConstructor => to_source(&self.private_constructor(), indent),
            Fragment::FactoryMethod => to_source(&self.factory_method(), indent),
            Fragment::BuilderClass => to_source(&self.builder_class()?, indent),
        };
        Ok(text)
    }

    // =========================================================================
    // Fragment specs
    // =========================================================================

    /// `private Target(Builder builder) { this.f = builder.f; ... }`
    pub fn private_constructor(&self) -> MethodSpec {
        MethodSpec::constructor(&self.class_name)
            .private()
            .param(ParamSpec::new(BUILDER_PARAM, self.builder_type()))
            .statements(self.fields.iter().map(|field| {
                Statement::assign(
                    Expr::this_field(&field.name),
                    Expr::field(Expr::ident(BUILDER_PARAM), &field.name),
                )
            }))
    }

    /// `public static Builder builder() { return new Builder(); }`
    pub fn factory_method(&self) -> MethodSpec {
        MethodSpec::new(&self.options.factory_method)
            .static_()
            .returns(self.builder_type())
            .statement(Statement::return_(Expr::new_instance(
                self.builder_type(),
                [],
            )))
    }

    /// `private Builder() {}`
    pub fn builder_constructor(&self) -> MethodSpec {
        MethodSpec::constructor(&self.options.class_name).private()
    }

    /// `public Builder f(T f) { this.f = f; return this; }`
    pub fn setter(&self, field: &FieldNode) -> MethodSpec {
        MethodSpec::new(&field.name)
            .returns(self.builder_type())
            .param(ParamSpec::new(&field.name, field.ty.clone()))
            .statement(Statement::assign(
                Expr::this_field(&field.name),
                Expr::ident(&field.name),
            ))
            .statement(Statement::return_(Expr::this()))
    }

    /// `public Target build() { return new Target(this); }`
    pub fn build_method(&self) -> MethodSpec {
        let target = TypeRef::class(&self.class_name);
        MethodSpec::new(&self.options.build_method)
            .returns(target.clone())
            .statement(Statement::return_(Expr::new_instance(
                target,
                [Expr::this()],
            )))
    }

    /// Assemble the nested builder class.
    ///
    /// Members are added in a fixed order: mirrored fields, the private
    /// constructor, one setter per field, then the build method.
    pub fn builder_class(&self) -> Result<ClassNode> {
        let fragment = Fragment::BuilderClass;
        let wrap = |e: Box<builderforge_model::Error>| Error::fragment(fragment, e);

        let mut builder = self
            .factory
            .create_class(&self.options.class_name)
            .map_err(wrap)?;
        builder.set_modifier(Modifier::Static, true);
        builder.set_modifier(Modifier::Final, true);

        for field in &self.fields {
            let mirrored = self
                .factory
                .create_field(&field.name, &field.ty)
                .map_err(wrap)?;
            builder.add(mirrored).map_err(wrap)?;
        }

        let constructor = self.parse(fragment, &self.builder_constructor())?;
        builder.add(constructor).map_err(wrap)?;

        for field in &self.fields {
            let setter = self.parse(fragment, &self.setter(field))?;
            builder.add(setter).map_err(wrap)?;
        }

        let build = self.parse(fragment, &self.build_method())?;
        builder.add(build).map_err(wrap)?;

        Ok(builder)
    }

    fn builder_type(&self) -> TypeRef {
        TypeRef::class(&self.options.class_name)
    }

    fn parse(&self, fragment: Fragment, spec: &MethodSpec) -> Result<Member> {
        let text = to_source(spec, Indent::default());
        self.factory
            .create_member_from_text(&text)
            .map_err(|e| Error::fragment(fragment, e))
    }
}

#[cfg(test)]
mod tests {
    use builderforge_model::{JavaElementFactory, MethodNode, ParamNode};

    use super::*;

    fn user() -> ClassNode {
        builderforge_model::parse_class(
            "public class User {
                private String name;
                private int age;
            }",
        )
        .unwrap()
    }

    fn method<'c>(class: &'c ClassNode, name: &str) -> &'c MethodNode {
        class
            .methods()
            .find(|m| m.name == name)
            .unwrap_or_else(|| panic!("method '{}' not found", name))
    }

    #[test]
    fn test_snapshot_is_taken_at_construction() {
        let mut class = user();
        let synthesizer = BuilderSynthesizer::new(&mut class, &JavaElementFactory);
        assert_eq!(synthesizer.class_name(), "User");
        let names: Vec<&str> = synthesizer.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["name", "age"]);
    }

    #[test]
    fn test_private_constructor_spec() {
        let mut class = user();
        let synthesizer = BuilderSynthesizer::new(&mut class, &JavaElementFactory);
        let spec = synthesizer.private_constructor();
        assert!(spec.constructor);
        assert_eq!(spec.name, "User");
        assert_eq!(spec.params, [ParamSpec::new("builder", TypeRef::class("Builder"))]);
        let body: Vec<String> = spec.body.iter().map(ToString::to_string).collect();
        assert_eq!(body, ["this.name = builder.name;", "this.age = builder.age;"]);
    }

    #[test]
    fn test_setter_is_named_after_field() {
        let mut class = user();
        let synthesizer = BuilderSynthesizer::new(&mut class, &JavaElementFactory);
        let field = FieldNode::new("age", TypeRef::int());
        let spec = synthesizer.setter(&field);
        assert_eq!(spec.name, "age");
        assert_eq!(spec.return_type, Some(TypeRef::class("Builder")));
        assert_eq!(spec.params, [ParamSpec::new("age", TypeRef::int())]);
    }

    #[test]
    fn test_generate_attaches_three_members() {
        let mut class = user();
        BuilderSynthesizer::new(&mut class, &JavaElementFactory)
            .generate()
            .unwrap();

        assert_eq!(class.members().len(), 2 + 3);
        let ctor = class.constructors().next().unwrap();
        assert!(ctor.modifiers.has(Modifier::Private));
        assert_eq!(
            ctor.params,
            [ParamNode::new("builder", TypeRef::class("Builder"))]
        );

        let factory = method(&class, "builder");
        assert_eq!(factory.modifiers.to_string(), "public static");
        assert_eq!(factory.statements(), ["return new Builder();"]);

        let builder = class.find_inner_class("Builder").unwrap();
        assert_eq!(builder.modifiers().to_string(), "public static final");
        assert_eq!(builder.members().len(), 2 * 2 + 2);
    }

    #[test]
    fn test_attach_order() {
        let mut class = user();
        BuilderSynthesizer::new(&mut class, &JavaElementFactory)
            .generate()
            .unwrap();
        let added: Vec<String> = class.members()[2..].iter().map(ToString::to_string).collect();
        assert_eq!(
            added,
            [
                "constructor 'User(Builder)'",
                "method 'builder()'",
                "class 'Builder'",
            ]
        );
    }

    #[test]
    fn test_custom_names() {
        let mut class = user();
        BuilderSynthesizer::new(&mut class, &JavaElementFactory)
            .with_options(
                BuilderOptions::default()
                    .class_name("UserBuilder")
                    .factory_method("newBuilder")
                    .build_method("create"),
            )
            .generate()
            .unwrap();

        assert_eq!(method(&class, "newBuilder").statements(), ["return new UserBuilder();"]);
        let builder = class.find_inner_class("UserBuilder").unwrap();
        assert_eq!(method(builder, "create").statements(), ["return new User(this);"]);
        assert_eq!(
            method(builder, "name").return_type,
            Some(TypeRef::class("UserBuilder"))
        );
    }

    #[test]
    fn test_attach_single_fragment() {
        let mut class = user();
        let mut synthesizer = BuilderSynthesizer::new(&mut class, &JavaElementFactory);
        synthesizer.attach(Fragment::FactoryMethod).unwrap();
        assert_eq!(class.members().len(), 3);
        assert_eq!(class.methods().count(), 1);
        assert_eq!(class.constructors().count(), 0);
    }

    #[test]
    fn test_render_does_not_mutate() {
        let mut class = user();
        let synthesizer = BuilderSynthesizer::new(&mut class, &JavaElementFactory);
        let text = synthesizer
            .render(Fragment::FactoryMethod, Indent::JAVA)
            .unwrap();
        assert_eq!(
            text,
            "public static Builder builder() {\n    return new Builder();\n}\n"
        );
        drop(synthesizer);
        assert_eq!(class.members().len(), 2);
    }

    #[test]
    fn test_precondition_rejects_reserved_field_name() {
        let mut class = ClassNode::new("Weird");
        class.add(FieldNode::new("default", TypeRef::int())).unwrap();
        let err = BuilderSynthesizer::new(&mut class, &JavaElementFactory)
            .generate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot generate a builder for 'Weird': field 'default': name is a reserved word"
        );
        assert_eq!(err.fragment_kind(), None);
        assert_eq!(class.members().len(), 1);
    }

    #[test]
    fn test_precondition_rejects_unresolved_type() {
        let mut class = ClassNode::new("Order");
        class
            .add(FieldNode::new("total", TypeRef::unresolved("Money")))
            .unwrap();
        let err = BuilderSynthesizer::new(&mut class, &JavaElementFactory)
            .generate()
            .unwrap_err();
        assert!(matches!(*err, Error::Precondition { .. }));
        assert!(err.to_string().ends_with("field 'total' has unresolved type 'Money'"));
    }

    #[test]
    fn test_precondition_rejects_empty_class_name() {
        let mut class = ClassNode::new("");
        let err = BuilderSynthesizer::new(&mut class, &JavaElementFactory)
            .generate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot generate a builder for '': class name is empty"
        );
    }

    #[test]
    fn test_precondition_rejects_bad_option() {
        let mut class = user();
        let err = BuilderSynthesizer::new(&mut class, &JavaElementFactory)
            .with_options(BuilderOptions::default().build_method("build-it"))
            .generate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot generate a builder for 'User': build method 'build-it': name contains invalid character '-'"
        );
    }
}
