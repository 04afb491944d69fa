use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for model operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{message}")]
    #[diagnostic(code(forge::syntax))]
    Syntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },

    #[error("cannot add {member} to class '{class}'")]
    #[diagnostic(code(forge::rejected_member), help("{reason}"))]
    Rejected {
        class: String,
        member: String,
        reason: String,
    },
}

impl Error {
    /// Create a syntax error pointing at `len` bytes from `offset` in `src`.
    pub fn syntax(
        src: &str,
        filename: &str,
        offset: usize,
        len: usize,
        message: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::Syntax {
            src: NamedSource::new(filename, src.to_string()),
            span: (offset, len).into(),
            message: message.into(),
        })
    }

    /// Create an error for a member the class refuses to hold.
    pub fn rejected(
        class: impl Into<String>,
        member: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::Rejected {
            class: class.into(),
            member: member.into(),
            reason: reason.into(),
        })
    }

    /// Whether this error came from parsing text.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax { .. })
    }

    /// The message without source context.
    pub fn message(&self) -> String {
        match self {
            Error::Syntax { message, .. } => message.clone(),
            Error::Rejected { reason, .. } => reason.clone(),
        }
    }
}
