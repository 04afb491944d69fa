use std::path::PathBuf;

use builderforge_codegen::{BuilderSynthesizer, Fragment};
use builderforge_config::Config;
use builderforge_model::{ClassNode, JavaElementFactory};
use clap::Args;
use eyre::Result;

use super::{UnwrapOrExit, generate::load_unit};

#[derive(Args)]
pub struct CheckCommand {
    /// Java source file holding the target class
    pub file: PathBuf,

    /// Path to forge.toml (defaults to ./forge.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref()).unwrap_or_exit();
        let mut file = load_unit(&self.file)?;
        print!("{}", inspect(&mut file.unit.class, &config).unwrap_or_exit());
        Ok(())
    }
}

/// Build every fragment without attaching it and describe the outcome.
fn inspect(class: &mut ClassNode, config: &Config) -> builderforge_codegen::Result<String> {
    let synthesizer =
        BuilderSynthesizer::new(class, &JavaElementFactory).with_options(config.builder_options());
    synthesizer.validate()?;
    let members = Fragment::ALL
        .into_iter()
        .map(|fragment| synthesizer.synthesize(fragment))
        .collect::<builderforge_codegen::Result<Vec<_>>>()?;

    let mut out = String::new();
    let fields = synthesizer.fields();
    out.push_str(&format!("✓ {} can take a builder\n\n", synthesizer.class_name()));
    out.push_str(&format!(
        "  {} field{}:\n",
        fields.len(),
        if fields.len() == 1 { "" } else { "s" }
    ));
    for field in fields {
        let note = if field.is_static() { ", static" } else { "" };
        out.push_str(&format!("    {} ({}{})\n", field.name, field.ty, note));
    }
    out.push_str("\n  adds:\n");
    for member in &members {
        out.push_str(&format!("    {}\n", member));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use builderforge_model::{FieldNode, TypeRef, parse_class};

    use super::*;

    #[test]
    fn test_inspect_lists_fields_and_members() {
        let mut class = parse_class(
            "class Counter { private static int instances; private String label; }",
        )
        .unwrap();
        let report = inspect(&mut class, &Config::default()).unwrap();

        assert_eq!(
            report,
            "✓ Counter can take a builder\n\
             \n  2 fields:\n    instances (int, static)\n    label (String)\n\
             \n  adds:\n    constructor 'Counter(Builder)'\n    method 'builder()'\n    class 'Builder'\n"
        );
        assert_eq!(class.members().len(), 2);
    }

    #[test]
    fn test_inspect_catches_bad_type_text() {
        let mut class = ClassNode::new("Broken");
        class
            .add(FieldNode::new("index", TypeRef::class("Map<String")))
            .unwrap();

        let err = inspect(&mut class, &Config::default()).unwrap_err();
        assert_eq!(err.fragment_kind(), Some(Fragment::BuilderClass));
        assert_eq!(class.members().len(), 1);
    }

    #[test]
    fn test_inspect_reports_invalid_field_name() {
        let mut class = ClassNode::new("Odd");
        class
            .add(FieldNode::new("class", TypeRef::int()))
            .unwrap();

        let err = inspect(&mut class, &Config::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot generate a builder for 'Odd': field 'class': name is a reserved word"
        );
    }
}
