//! Modifier keywords.

use std::{collections::BTreeSet, fmt};

/// A Java modifier keyword.
///
/// Variants are declared in the conventional source order, so sorting a set
/// of modifiers yields `public static final` rather than `final static public`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
}

impl Modifier {
    pub const ALL: [Modifier; 11] = [
        Modifier::Public,
        Modifier::Protected,
        Modifier::Private,
        Modifier::Abstract,
        Modifier::Static,
        Modifier::Final,
        Modifier::Transient,
        Modifier::Volatile,
        Modifier::Synchronized,
        Modifier::Native,
        Modifier::Strictfp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Abstract => "abstract",
            Self::Static => "static",
            Self::Final => "final",
            Self::Transient => "transient",
            Self::Volatile => "volatile",
            Self::Synchronized => "synchronized",
            Self::Native => "native",
            Self::Strictfp => "strictfp",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == word)
    }

    /// Access modifiers are mutually exclusive.
    pub fn is_access(&self) -> bool {
        matches!(self, Self::Public | Self::Protected | Self::Private)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The modifiers of a declaration: keywords in canonical order, plus any
/// annotations as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modifiers {
    keywords: BTreeSet<Modifier>,
    annotations: Vec<String>,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a modifier (consuming).
    pub fn with(mut self, modifier: Modifier) -> Self {
        self.set(modifier, true);
        self
    }

    /// Turn a modifier on or off.
    ///
    /// Turning an access modifier on clears any other access modifier.
    pub fn set(&mut self, modifier: Modifier, on: bool) {
        if !on {
            self.keywords.remove(&modifier);
            return;
        }
        if modifier.is_access() {
            self.keywords.retain(|m| !m.is_access());
        }
        self.keywords.insert(modifier);
    }

    pub fn has(&self, modifier: Modifier) -> bool {
        self.keywords.contains(&modifier)
    }

    /// The access modifier, if any.
    pub fn access(&self) -> Option<Modifier> {
        self.keywords.iter().copied().find(Modifier::is_access)
    }

    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.keywords.iter().copied()
    }

    /// Append an annotation such as `@Override` or `@Size(max = 10)`.
    pub fn annotate(&mut self, annotation: impl Into<String>) {
        self.annotations.push(annotation.into());
    }

    /// Annotations in source order.
    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.annotations.is_empty()
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        let mut modifiers = Self::new();
        for modifier in iter {
            modifiers.set(modifier, true);
        }
        modifiers
    }
}

/// Annotations first, then keywords, separated by spaces.
impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words: Vec<&str> = self
            .annotations
            .iter()
            .map(String::as_str)
            .chain(self.iter().map(|m| m.as_str()))
            .collect();
        f.write_str(&words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let modifiers: Modifiers = [Modifier::Final, Modifier::Static, Modifier::Public]
            .into_iter()
            .collect();
        assert_eq!(modifiers.to_string(), "public static final");
    }

    #[test]
    fn test_access_is_exclusive() {
        let mut modifiers = Modifiers::new().with(Modifier::Public).with(Modifier::Static);
        modifiers.set(Modifier::Private, true);
        assert!(!modifiers.has(Modifier::Public));
        assert_eq!(modifiers.access(), Some(Modifier::Private));
        assert_eq!(modifiers.to_string(), "private static");
    }

    #[test]
    fn test_unset() {
        let mut modifiers = Modifiers::new().with(Modifier::Final);
        modifiers.set(Modifier::Final, false);
        assert!(modifiers.is_empty());
        assert_eq!(modifiers.to_string(), "");
    }

    #[test]
    fn test_from_keyword() {
        assert_eq!(Modifier::from_keyword("static"), Some(Modifier::Static));
        assert_eq!(Modifier::from_keyword("class"), None);
    }

    #[test]
    fn test_annotations_print_before_keywords() {
        let mut modifiers = Modifiers::new().with(Modifier::Public);
        modifiers.annotate("@Override");
        modifiers.annotate("@SuppressWarnings(\"unchecked\")");
        assert!(!modifiers.is_empty());
        assert_eq!(modifiers.annotations().len(), 2);
        assert_eq!(
            modifiers.to_string(),
            "@Override @SuppressWarnings(\"unchecked\") public"
        );
    }
}
