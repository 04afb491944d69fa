//! Validation of parsed configuration values.

use builderforge_model::keywords::check_identifier;
use miette::SourceSpan;

use crate::{Config, Result, error::SourceContext};

/// Check every value that serde cannot check on its own.
pub(crate) fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    let names = [
        ("class_name", &config.builder.class_name),
        ("factory_method", &config.builder.factory_method),
        ("build_method", &config.builder.build_method),
    ];
    for (key, name) in names {
        if let Err(problem) = check_identifier(name) {
            return Err(ctx.invalid_identifier_error(
                key,
                name.as_str(),
                problem.to_string(),
                find_value_span(ctx.src(), key),
            ));
        }
    }

    if config.format.indent.to_indent().is_none() {
        return Err(ctx.validation_error(
            "indent must be 2, 4, 8 or \"tab\"",
            find_value_span(ctx.src(), "indent"),
        ));
    }

    Ok(())
}

/// Find the span of the value assigned to `key` in the TOML source.
///
/// Matches lines of the form `key = value`; the span covers a quoted string
/// including its quotes, or a bare value up to whitespace or a comment.
pub(crate) fn find_value_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        let indent = line.len() - line.trim_start().len();
        let Some(rest) = line.trim_start().strip_prefix(key) else {
            continue;
        };
        let Some(value) = rest.trim_start().strip_prefix('=') else {
            continue;
        };
        let value_trimmed = value.trim_start();
        let start = line_start + indent + key.len() + (rest.len() - value_trimmed.len());

        let len = match value_trimmed.strip_prefix('"') {
            Some(quoted) => quoted.find('"').map_or(quoted.trim_end().len() + 1, |end| end + 2),
            None => value_trimmed
                .find(|c: char| c.is_whitespace() || c == '#')
                .unwrap_or(value_trimmed.len()),
        };
        return Some(SourceSpan::from((start, len)));
    }
    None
}
