use serde::Serialize;

use crate::domain::{Action, FormRef, TextField};

/// Everything the label collaborator needs: label text, help text, error and action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelledProps {
    pub form: FormRef,
    pub attribute: String,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub label_hidden: bool,
    pub help_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

pub fn build_labelled_props(field: &TextField) -> LabelledProps {
    LabelledProps {
        form: field.form().clone(),
        attribute: field.attribute().to_string(),
        error: field.error().to_string(),
        label: field.label().map(str::to_string),
        label_hidden: field.label_hidden(),
        help_text: field.help_text().to_string(),
        index: field.index(),
        action: field.label_action().cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_label_concerns_unchanged() {
        let action = Action::new("Forgot?").with_url("/password/new");
        let field = TextField::builder("session", "password")
            .with_label("Password")
            .with_label_hidden(true)
            .with_label_action(action.clone())
            .with_help_text("At least 8 characters")
            .with_error("Too short")
            .with_index(1)
            .with_placeholder("ignored by the label")
            .build()
            .unwrap();

        assert_eq!(
            build_labelled_props(&field),
            LabelledProps {
                form: FormRef::new("session"),
                attribute: "password".to_string(),
                error: "Too short".to_string(),
                label: Some("Password".to_string()),
                label_hidden: true,
                help_text: "At least 8 characters".to_string(),
                index: Some(1),
                action: Some(action),
            }
        );
    }

    #[test]
    fn absent_label_fields_stay_absent() {
        let field = TextField::builder("session", "login").build().unwrap();
        let props = build_labelled_props(&field);
        assert!(props.label.is_none());
        assert!(props.action.is_none());
        assert!(props.index.is_none());
        let json = serde_json::to_value(&props).unwrap();
        assert!(json.get("label").is_none());
        assert_eq!(json["form"], "session");
    }
}
