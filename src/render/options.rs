use std::borrow::Cow;

/// Stimulus-style controller identifier the numeric stepper behaviour registers under.
pub const DEFAULT_CONTROLLER: &str = "polaris--text-field";

const BLOCK: &str = "TextField";
const INPUT_ELEMENT: &str = "Input";

/// Naming rule for the CSS classes emitted by the builders.
///
/// The flat scheme emits bare tokens (`TextField`, `--error`, `Input`, `--alignLeft`). A
/// namespaced scheme emits BEM names under the namespace (`Polaris-TextField--error`,
/// `Polaris-TextField__Input--alignLeft`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassScheme {
    namespace: Option<Cow<'static, str>>,
}

impl ClassScheme {
    pub fn flat() -> Self {
        Self::default()
    }

    pub fn namespaced(namespace: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: Some(namespace.into()),
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn block(&self) -> String {
        match self.namespace() {
            None => BLOCK.to_string(),
            Some(namespace) => format!("{namespace}-{BLOCK}"),
        }
    }

    pub fn block_modifier(&self, modifier: &str) -> String {
        match self.namespace() {
            None => format!("--{modifier}"),
            Some(namespace) => format!("{namespace}-{BLOCK}--{modifier}"),
        }
    }

    pub fn input(&self) -> String {
        match self.namespace() {
            None => INPUT_ELEMENT.to_string(),
            Some(namespace) => format!("{namespace}-{BLOCK}__{INPUT_ELEMENT}"),
        }
    }

    pub fn input_modifier(&self, modifier: &str) -> String {
        match self.namespace() {
            None => format!("--{modifier}"),
            Some(namespace) => format!("{namespace}-{BLOCK}__{INPUT_ELEMENT}--{modifier}"),
        }
    }
}

/// Settings shared by every render, independent of a single field's options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub classes: ClassScheme,
    pub controller: Cow<'static, str>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            classes: ClassScheme::flat(),
            controller: Cow::Borrowed(DEFAULT_CONTROLLER),
        }
    }
}

impl RenderOptions {
    pub fn with_class_scheme(mut self, classes: ClassScheme) -> Self {
        self.classes = classes;
        self
    }

    pub fn with_namespace(self, namespace: impl Into<Cow<'static, str>>) -> Self {
        self.with_class_scheme(ClassScheme::namespaced(namespace))
    }

    pub fn with_controller(mut self, controller: impl Into<Cow<'static, str>>) -> Self {
        self.controller = controller.into();
        self
    }

    pub fn controller(&self) -> &str {
        &self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_scheme_emits_bare_tokens() {
        let scheme = ClassScheme::flat();
        assert_eq!(scheme.block(), "TextField");
        assert_eq!(scheme.block_modifier("error"), "--error");
        assert_eq!(scheme.input(), "Input");
        assert_eq!(scheme.input_modifier("suffixed"), "--suffixed");
    }

    #[test]
    fn namespaced_scheme_emits_bem_names() {
        let scheme = ClassScheme::namespaced("Polaris");
        assert_eq!(scheme.block(), "Polaris-TextField");
        assert_eq!(scheme.block_modifier("monospaced"), "Polaris-TextField--monospaced");
        assert_eq!(scheme.input(), "Polaris-TextField__Input");
        assert_eq!(
            scheme.input_modifier("alignRight"),
            "Polaris-TextField__Input--alignRight"
        );
    }

    #[test]
    fn default_controller_is_wire_compatible() {
        assert_eq!(RenderOptions::default().controller(), "polaris--text-field");
        let options = RenderOptions::default().with_controller("stepper");
        assert_eq!(options.controller(), "stepper");
    }
}
