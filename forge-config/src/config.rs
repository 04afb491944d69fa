//! The `forge.toml` schema.

use builderforge_codegen::{BuilderOptions, builder::Indent};
use serde::Deserialize;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "forge.toml";

/// Root schema for forge.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Names of the generated members
    #[serde(default)]
    pub builder: BuilderSection,

    /// Output formatting
    #[serde(default)]
    pub format: FormatSection,
}

impl Config {
    /// Options for the synthesizer.
    pub fn builder_options(&self) -> BuilderOptions {
        BuilderOptions::default()
            .class_name(&self.builder.class_name)
            .factory_method(&self.builder.factory_method)
            .build_method(&self.builder.build_method)
    }

    /// Indentation for printed source.
    pub fn indent(&self) -> Indent {
        self.format.indent.to_indent().unwrap_or_default()
    }

    /// A commented forge.toml holding the default values.
    pub fn template() -> &'static str {
        TEMPLATE
    }
}

/// `[builder]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderSection {
    pub class_name: String,
    pub factory_method: String,
    pub build_method: String,
}

impl Default for BuilderSection {
    fn default() -> Self {
        let options = BuilderOptions::default();
        Self {
            class_name: options.class_name,
            factory_method: options.factory_method,
            build_method: options.build_method,
        }
    }
}

/// `[format]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatSection {
    pub indent: IndentSetting,
}

/// Raw `indent` value: a width or the string `"tab"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IndentSetting {
    Width(i64),
    Keyword(String),
}

impl IndentSetting {
    /// The indentation this setting stands for, if it is a supported one.
    pub fn to_indent(&self) -> Option<Indent> {
        match self {
            IndentSetting::Width(width @ (2 | 4 | 8)) => Some(Indent::Spaces(*width as u8)),
            IndentSetting::Keyword(keyword) if keyword == "tab" => Some(Indent::Tab),
            _ => None,
        }
    }
}

impl Default for IndentSetting {
    fn default() -> Self {
        IndentSetting::Width(4)
    }
}

const TEMPLATE: &str = r#"# Builderforge configuration

[builder]
# Name of the nested builder class
class_name = "Builder"
# Static method on the target class that returns a new builder
factory_method = "builder"
# Builder method that constructs the target class
build_method = "build"

[format]
# Indentation of generated code: 2, 4, 8 or "tab"
indent = 4
"#;
