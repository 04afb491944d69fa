/// Names used for the generated builder members.
///
/// The defaults produce `Builder`, `builder()` and `build()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderOptions {
    /// Name of the nested builder class.
    pub class_name: String,
    /// Name of the static factory method on the target class.
    pub factory_method: String,
    /// Name of the terminal method on the builder.
    pub build_method: String,
}

impl BuilderOptions {
    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = name.into();
        self
    }

    pub fn factory_method(mut self, name: impl Into<String>) -> Self {
        self.factory_method = name.into();
        self
    }

    pub fn build_method(mut self, name: impl Into<String>) -> Self {
        self.build_method = name.into();
        self
    }

    /// Each option with the role it plays, for validation messages.
    pub(crate) fn named(&self) -> [(&'static str, &str); 3] {
        [
            ("builder class", &self.class_name),
            ("factory method", &self.factory_method),
            ("build method", &self.build_method),
        ]
    }
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            class_name: "Builder".to_string(),
            factory_method: "builder".to_string(),
            build_method: "build".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = BuilderOptions::default();
        assert_eq!(options.class_name, "Builder");
        assert_eq!(options.factory_method, "builder");
        assert_eq!(options.build_method, "build");
    }

    #[test]
    fn test_overrides() {
        let options = BuilderOptions::default()
            .class_name("UserBuilder")
            .factory_method("newBuilder")
            .build_method("create");
        assert_eq!(
            options.named(),
            [
                ("builder class", "UserBuilder"),
                ("factory method", "newBuilder"),
                ("build method", "create"),
            ]
        );
    }
}
