//! Member visibility.

use builderforge_model::Modifier;

/// Visibility of a generated member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    /// The access modifier keyword.
    pub fn modifier(&self) -> Modifier {
        match self {
            Self::Public => Modifier::Public,
            Self::Private => Modifier::Private,
        }
    }
}
