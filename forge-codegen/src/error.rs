use miette::Diagnostic;
use thiserror::Error;

use crate::Fragment;

/// Result type for builder generation (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Why builder generation failed.
///
/// Errors are never recovered locally. A [`Syntax`](Error::Syntax) or
/// [`Rejected`](Error::Rejected) error leaves the fragments attached before
/// it in place.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot generate a builder for '{class}': {reason}")]
    #[diagnostic(code(forge::precondition))]
    Precondition { class: String, reason: String },

    #[error("generated {fragment} could not be parsed")]
    #[diagnostic(
        code(forge::generated_syntax),
        help("a field type of the target class does not form a valid declaration")
    )]
    Syntax {
        fragment: Fragment,
        #[source]
        source: Box<builderforge_model::Error>,
    },

    #[error("{fragment} was rejected by the target class")]
    #[diagnostic(code(forge::rejected_fragment))]
    Rejected {
        fragment: Fragment,
        #[source]
        source: Box<builderforge_model::Error>,
    },
}

impl Error {
    pub(crate) fn precondition(class: &str, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::Precondition {
            class: class.to_string(),
            reason: reason.into(),
        })
    }

    /// Wrap a model error raised while producing or attaching `fragment`.
    pub(crate) fn fragment(fragment: Fragment, source: Box<builderforge_model::Error>) -> Box<Self> {
        if source.is_syntax() {
            Box::new(Error::Syntax { fragment, source })
        } else {
            Box::new(Error::Rejected { fragment, source })
        }
    }

    /// The fragment being generated when the error occurred.
    pub fn fragment_kind(&self) -> Option<Fragment> {
        match self {
            Error::Precondition { .. } => None,
            Error::Syntax { fragment, .. } | Error::Rejected { fragment, .. } => Some(*fragment),
        }
    }

    /// Take the underlying model error, which carries the offending source text.
    pub fn into_model_error(self) -> Option<Box<builderforge_model::Error>> {
        match self {
            Error::Precondition { .. } => None,
            Error::Syntax { source, .. } | Error::Rejected { source, .. } => Some(source),
        }
    }
}
