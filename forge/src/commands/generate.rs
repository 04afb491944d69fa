use std::{
    fs,
    path::{Path, PathBuf},
};

use builderforge_codegen::{BuilderSynthesizer, Fragment, java::insert_members};
use builderforge_config::Config;
use builderforge_model::{ClassNode, CompilationUnit, JavaElementFactory, parse_compilation_unit};
use clap::Args;
use eyre::{Context, Result};
use tracing::{debug, info};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Java source file holding the target class
    pub file: PathBuf,

    /// Path to forge.toml (defaults to ./forge.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long, conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Overwrite the input file with the result
    #[arg(long)]
    pub in_place: bool,

    /// Print the generated members without touching any file
    #[arg(long, conflicts_with_all = ["output", "in_place"])]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref()).unwrap_or_exit();
        let SourceFile { text, mut unit } = load_unit(&self.file)?;

        if self.dry_run {
            print!("{}", preview(&mut unit.class, &config).unwrap_or_exit());
            return Ok(());
        }

        let existing = unit.class.members().len();
        augment(&mut unit.class, &config).unwrap_or_exit();
        let added = &unit.class.members()[existing..];
        let source = insert_members(&text, unit.class_close, added, config.indent());

        let target = if self.in_place {
            Some(self.file.as_path())
        } else {
            self.output.as_deref()
        };
        match target {
            Some(path) => {
                fs::write(path, source)
                    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                info!(path = %path.display(), class = %unit.class.name(), "wrote builder");
                println!("✓ Added a builder to {}", unit.class.name());
            }
            None => print!("{}", source),
        }
        Ok(())
    }
}

/// A Java source file and its parsed declarations.
pub(super) struct SourceFile {
    pub text: String,
    pub unit: CompilationUnit,
}

/// Read and parse a Java source file, exiting with a diagnostic if it does not parse.
pub(super) fn load_unit(path: &Path) -> Result<SourceFile> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    let unit = parse_compilation_unit(&text, &path.display().to_string()).unwrap_or_exit();
    debug!(
        class = %unit.class.name(),
        imports = unit.imports.len(),
        "parsed compilation unit"
    );
    Ok(SourceFile { text, unit })
}

/// Attach the builder members to `class`.
fn augment(class: &mut ClassNode, config: &Config) -> builderforge_codegen::Result<()> {
    BuilderSynthesizer::new(class, &JavaElementFactory)
        .with_options(config.builder_options())
        .generate()
}

/// Render the three generated members, separated by blank lines.
fn preview(class: &mut ClassNode, config: &Config) -> builderforge_codegen::Result<String> {
    let synthesizer =
        BuilderSynthesizer::new(class, &JavaElementFactory).with_options(config.builder_options());
    let mut out = String::new();
    for (i, fragment) in Fragment::ALL.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&synthesizer.render(fragment, config.indent())?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use builderforge_model::parse_class;

    use super::*;

    const USER: &str = "package com.example;

import java.util.List;

public class User {
    private String name;
    private List<String> roles;
}
";

    fn command(file: PathBuf) -> GenerateCommand {
        GenerateCommand {
            file,
            config: None,
            output: None,
            in_place: false,
            dry_run: false,
        }
    }

    #[test]
    fn test_generate_to_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("User.java");
        let output = dir.path().join("Out.java");
        fs::write(&input, USER).unwrap();

        let cmd = GenerateCommand {
            output: Some(output.clone()),
            ..command(input.clone())
        };
        cmd.run().unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("package com.example;\n\nimport java.util.List;\n\n"));
        assert!(written.contains("    private User(Builder builder) {\n"));
        assert!(written.contains("        public Builder roles(List<String> roles) {\n"));
        assert!(written.contains("        public User build() {\n"));
        // The input is left alone.
        assert_eq!(fs::read_to_string(&input).unwrap(), USER);
    }

    #[test]
    fn test_generate_in_place_with_config() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("User.java");
        let config = dir.path().join("forge.toml");
        fs::write(&input, USER).unwrap();
        fs::write(
            &config,
            "[builder]\nclass_name = \"Maker\"\nbuild_method = \"make\"\n\n[format]\nindent = 2\n",
        )
        .unwrap();

        let cmd = GenerateCommand {
            config: Some(config),
            in_place: true,
            ..command(input.clone())
        };
        cmd.run().unwrap();

        let written = fs::read_to_string(&input).unwrap();
        assert!(written.contains("  public static Maker builder() {\n    return new Maker();\n  }\n"));
        assert!(written.contains("  public static final class Maker {\n"));
        assert!(written.contains("    public User make() {\n"));
    }

    #[test]
    fn test_generate_in_place_keeps_comments() {
        let source = "// Copyright ACME\npackage a;\n\n/** A user. */\npublic class User {\n    /** The name. */\n    private String name;\n\n    @Override\n    public String toString() {\n        return name; // as is\n    }\n}\n";
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("User.java");
        fs::write(&input, source).unwrap();

        let cmd = GenerateCommand {
            in_place: true,
            ..command(input.clone())
        };
        cmd.run().unwrap();

        let written = fs::read_to_string(&input).unwrap();
        let close = source.rfind('}').unwrap();
        // Everything before the class's closing brace is untouched.
        assert!(written.starts_with(source[..close].trim_end()));
        assert!(written.starts_with("// Copyright ACME\npackage a;\n\n/** A user. */\n"));
        assert!(written.contains("    /** The name. */\n    private String name;\n"));
        assert!(written.contains("        return name; // as is\n    }\n\n    private User(Builder builder) {\n"));
        assert!(written.ends_with("            return new User(this);\n        }\n    }\n}\n"));
    }

    #[test]
    fn test_load_unit() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("User.java");
        fs::write(&input, USER).unwrap();

        let SourceFile { text, unit } = load_unit(&input).unwrap();
        assert_eq!(text, USER);
        assert_eq!(unit.package.as_deref(), Some("com.example"));
        assert_eq!(unit.imports, ["java.util.List"]);
        assert_eq!(unit.class.name(), "User");
        assert!(load_unit(&dir.path().join("Missing.java")).is_err());
    }

    #[test]
    fn test_preview_leaves_class_untouched() {
        let mut class = parse_class("class Point { private int x; }").unwrap();
        let text = preview(&mut class, &Config::default()).unwrap();

        assert_eq!(class.members().len(), 1);
        assert!(text.starts_with("private Point(Builder builder) {\n    this.x = builder.x;\n}\n\n"));
        assert!(text.contains("public static Builder builder() {"));
        assert!(text.ends_with("    public Point build() {\n        return new Point(this);\n    }\n}\n"));
    }

    #[test]
    fn test_preview_does_not_attach() {
        let mut class = parse_class("class Point { private int x; }").unwrap();
        let config: Config = "[builder]\nclass_name = \"Point\"\n".parse().unwrap();
        // A builder named after its enclosing class is only refused when attached.
        assert!(preview(&mut class, &config).is_ok());
        assert!(augment(&mut class, &config).is_err());
        assert_eq!(class.members().len(), 3);
    }

    #[test]
    fn test_preview_reports_preconditions() {
        let mut class = parse_class("class Point { private int x; }").unwrap();
        let config: Config = "[builder]\nbuild_method = \"make\"\n".parse().unwrap();
        let mut renamed = class.clone();
        renamed.name = String::new();
        assert!(preview(&mut class, &config).is_ok());
        assert!(preview(&mut renamed, &config).is_err());
    }
}
