//! Config parsing from files and strings.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{CONFIG_FILE, Config, Error, Result, error::SourceContext, validate::validate_config};

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, CONFIG_FILE)
    }
}

impl Config {
    /// Parse a forge.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Load the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `forge.toml` in the working
    /// directory is used when present, and the defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Self::discover(Path::new(".")),
        }
    }

    /// Load `forge.toml` from `dir`, falling back to the defaults.
    pub fn discover(dir: &Path) -> Result<Self> {
        match Self::find(dir) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Path of the `forge.toml` in `dir`, if there is one.
    pub fn find(dir: &Path) -> Option<PathBuf> {
        let path = dir.join(CONFIG_FILE);
        path.is_file().then_some(path)
    }
}

/// Parse a config from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_config(&config, &ctx)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use builderforge_codegen::builder::Indent;
    use miette::Diagnostic;

    use super::*;

    fn label_text<'a>(err: &Error, src: &'a str) -> &'a str {
        let label = err
            .labels()
            .and_then(|mut labels| labels.next())
            .expect("error has no label");
        &src[label.offset()..label.offset() + label.len()]
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_config() {
        let config: Config = r#"
[builder]
class_name = "Maker"
factory_method = "maker"
build_method = "make"

[format]
indent = "tab"
"#
        .parse()
        .unwrap();

        assert_eq!(config.builder.class_name, "Maker");
        assert_eq!(config.builder.factory_method, "maker");
        assert_eq!(config.builder.build_method, "make");
        assert_eq!(config.indent(), Indent::Tab);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = "[builder]\nbuild_method = \"create\"\n".parse().unwrap();
        assert_eq!(config.builder.class_name, "Builder");
        assert_eq!(config.builder.factory_method, "builder");
        assert_eq!(config.builder.build_method, "create");
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let config: Config = Config::template().parse().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = "[builder]\nclass = \"Maker\"\n".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_section_rejected() {
        let err = "[output]\npath = \"out\"\n".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_reserved_name_rejected() {
        let src = "[builder]\nbuild_method = \"new\"\n";
        let err = src.parse::<Config>().unwrap_err();

        match err.as_ref() {
            Error::InvalidIdentifier {
                key, name, reason, ..
            } => {
                assert_eq!(key, "build_method");
                assert_eq!(name, "new");
                assert_eq!(reason, "name is a reserved word");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "invalid build_method 'new'");
        assert_eq!(label_text(&err, src), "\"new\"");
    }

    #[test]
    fn test_invalid_character_rejected() {
        let src = "[builder]\nclass_name = \"My-Builder\"\n";
        let err = src.parse::<Config>().unwrap_err();
        match err.as_ref() {
            Error::InvalidIdentifier { reason, .. } => {
                assert_eq!(reason, "name contains invalid character '-'");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_indent_rejected() {
        let src = "[format]\nindent = 3\n";
        let err = src.parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
        assert_eq!(err.to_string(), "indent must be 2, 4, 8 or \"tab\"");
        assert_eq!(label_text(&err, src), "3");
    }

    #[test]
    fn test_from_file_and_discover() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::find(dir.path()), None);
        assert_eq!(Config::discover(dir.path()).unwrap(), Config::default());

        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[format]\nindent = 2\n").unwrap();

        assert_eq!(Config::find(dir.path()), Some(path.clone()));
        assert_eq!(Config::discover(dir.path()).unwrap().indent(), Indent::Spaces(2));
        assert_eq!(
            Config::load(Some(&path)).unwrap().indent(),
            Indent::Spaces(2)
        );
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_error_reports_filename() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[builder]\nclass_name = \"\"\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        match err.as_ref() {
            Error::InvalidIdentifier { src, reason, .. } => {
                assert_eq!(src.name(), path.display().to_string());
                assert_eq!(reason, "name is empty");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
