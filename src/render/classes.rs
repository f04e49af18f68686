use std::fmt;

use serde::Serialize;

use super::options::ClassScheme;
use crate::domain::{TextField, is_present};

/// Classes for the widget root, block class first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, class: &str) -> bool {
        self.iter().any(|candidate| candidate == class)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl IntoIterator for ClassList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

pub fn build_classes(field: &TextField, scheme: &ClassScheme) -> ClassList {
    let mut classes = vec![scheme.block()];
    if field.value().is_some_and(|value| value.is_present()) {
        classes.push(scheme.block_modifier("hasValue"));
    }
    if is_present(field.error()) {
        classes.push(scheme.block_modifier("error"));
    }
    if field.disabled() {
        classes.push(scheme.block_modifier("disabled"));
    }
    ClassList(classes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> crate::domain::TextFieldOptions {
        TextField::builder("account", "email")
    }

    #[test]
    fn bare_field_only_has_the_block_class() {
        let field = options().build().unwrap();
        let classes = build_classes(&field, &ClassScheme::flat());
        assert_eq!(classes.to_vec(), vec!["TextField"]);
    }

    #[test]
    fn empty_value_with_error_skips_has_value() {
        let field = options().with_value("").with_error("Required").build().unwrap();
        let classes = build_classes(&field, &ClassScheme::flat());
        assert_eq!(classes.to_vec(), vec!["TextField", "--error"]);
    }

    #[test]
    fn modifiers_keep_their_order() {
        let field = options()
            .with_value("a@b.c")
            .with_error("Taken")
            .with_disabled(true)
            .build()
            .unwrap();
        let classes = build_classes(&field, &ClassScheme::flat());
        assert_eq!(
            classes.to_vec(),
            vec!["TextField", "--hasValue", "--error", "--disabled"]
        );
        assert_eq!(classes.to_string(), "TextField --hasValue --error --disabled");
    }

    #[test]
    fn numeric_zero_value_counts_as_present() {
        let field = options().with_value(0).build().unwrap();
        assert!(build_classes(&field, &ClassScheme::flat()).contains("--hasValue"));
    }

    #[test]
    fn blank_error_is_ignored() {
        let field = options().with_error("  ").build().unwrap();
        assert!(!build_classes(&field, &ClassScheme::flat()).contains("--error"));
    }

    #[test]
    fn namespaced_scheme_prefixes_every_class() {
        let field = options().with_disabled(true).build().unwrap();
        let classes = build_classes(&field, &ClassScheme::namespaced("Polaris"));
        assert_eq!(
            classes.to_vec(),
            vec!["Polaris-TextField", "Polaris-TextField--disabled"]
        );
    }

    #[test]
    fn repeated_builds_are_identical() {
        let field = options().with_value("x").build().unwrap();
        let scheme = ClassScheme::flat();
        assert_eq!(build_classes(&field, &scheme), build_classes(&field, &scheme));
    }
}
