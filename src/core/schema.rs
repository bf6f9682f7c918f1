use crate::core::FieldId;
use crate::core::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Number,
    Select,
    Radio,
    Display,
    /// A tag this renderer does not know. Kept so misconfigured schemas can be
    /// reported instead of failing to load.
    Unsupported(String),
}

impl FieldKind {
    pub fn tag(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Display => "display",
            Self::Unsupported(tag) => tag.as_str(),
        }
    }

    pub fn is_text_like(&self) -> bool {
        matches!(self, Self::Text | Self::Email | Self::Password | Self::Number)
    }

    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Select | Self::Radio)
    }

    /// Whether values of this kind take part in validation.
    pub fn is_editable(&self) -> bool {
        self.is_text_like() || self.is_choice()
    }
}

impl From<&str> for FieldKind {
    fn from(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "text" => Self::Text,
            "email" => Self::Email,
            "password" => Self::Password,
            "number" => Self::Number,
            "select" => Self::Select,
            "radio" => Self::Radio,
            "display" => Self::Display,
            _ => Self::Unsupported(tag.to_string()),
        }
    }
}

impl From<String> for FieldKind {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.tag().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "OptionRepr")]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl From<&str> for FieldOption {
    fn from(value: &str) -> Self {
        Self::new(value, value)
    }
}

// Options may be written as `{ value, label }` or as a bare string.
#[derive(Deserialize)]
#[serde(untagged)]
enum OptionRepr {
    Plain(String),
    Full { value: String, label: Option<String> },
}

impl From<OptionRepr> for FieldOption {
    fn from(repr: OptionRepr) -> Self {
        match repr {
            OptionRepr::Plain(value) => Self::new(value.clone(), value),
            OptionRepr::Full { value, label } => {
                let label = label.unwrap_or_else(|| value.clone());
                Self { value, label }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: FieldId,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, alias = "defaultValue", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    #[serde(default, alias = "readOnly")]
    pub read_only: bool,
    #[serde(default)]
    pub row: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, alias = "helperText", skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
}

impl FieldSpec {
    pub fn new(name: impl Into<FieldId>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            default_value: None,
            options: Vec::new(),
            read_only: false,
            row: false,
            placeholder: None,
            helper_text: None,
        }
    }

    pub fn text(name: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn email(name: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub fn password(name: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Password)
    }

    pub fn number(name: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub fn select(
        name: impl Into<FieldId>,
        label: impl Into<String>,
        options: Vec<FieldOption>,
    ) -> Self {
        Self::new(name, label, FieldKind::Select).with_options(options)
    }

    pub fn radio(
        name: impl Into<FieldId>,
        label: impl Into<String>,
        options: Vec<FieldOption>,
    ) -> Self {
        Self::new(name, label, FieldKind::Radio).with_options(options)
    }

    pub fn display(name: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Display)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = options;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn inline_row(mut self) -> Self {
        self.row = true;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    /// Whether the user can change this field. `read_only` only applies to
    /// text-like kinds; display and unsupported kinds are never editable.
    pub fn is_locked(&self) -> bool {
        (self.read_only && self.kind.is_text_like()) || !self.kind.is_editable()
    }

    /// Required and subject to validation; locked fields never are.
    pub fn is_validated_required(&self) -> bool {
        self.required && !self.is_locked()
    }

    pub fn option_label(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
    }

    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaIssue {
    #[error("field `{0}` is declared more than once")]
    DuplicateName(FieldId),
    #[error("field `{0}` is a choice field without options")]
    MissingOptions(FieldId),
    #[error("field `{field}` uses unsupported type `{tag}`")]
    UnsupportedKind { field: FieldId, tag: String },
}

/// Ordered list of field specs describing one dialog form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        self.fields.as_slice()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name.as_str() == name)
    }

    pub fn required_names(&self) -> Vec<FieldId> {
        self.fields
            .iter()
            .filter(|field| field.is_validated_required())
            .map(|field| field.name.clone())
            .collect()
    }

    pub fn label_of<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).map(|field| field.label.as_str()).unwrap_or(name)
    }

    pub fn issues(&self) -> Vec<SchemaIssue> {
        let mut seen = HashSet::new();
        let mut issues = Vec::new();

        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                issues.push(SchemaIssue::DuplicateName(field.name.clone()));
            }
            match &field.kind {
                FieldKind::Select | FieldKind::Radio if field.options.is_empty() => {
                    issues.push(SchemaIssue::MissingOptions(field.name.clone()));
                }
                FieldKind::Unsupported(tag) => issues.push(SchemaIssue::UnsupportedKind {
                    field: field.name.clone(),
                    tag: tag.clone(),
                }),
                _ => {}
            }
        }

        issues
    }
}

impl From<Vec<FieldSpec>> for Schema {
    fn from(fields: Vec<FieldSpec>) -> Self {
        Self::new(fields)
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a FieldSpec;
    type IntoIter = std::slice::Iter<'a, FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldKind, FieldOption, FieldSpec, Schema, SchemaIssue};
    use crate::core::value::Value;

    #[test]
    fn unknown_type_tag_is_kept_as_unsupported() {
        let field: FieldSpec =
            serde_json::from_str(r#"{ "name": "sig", "label": "Signature", "type": "signature" }"#)
                .expect("field should parse");
        assert_eq!(field.kind, FieldKind::Unsupported("signature".to_string()));
        assert!(!field.kind.is_editable());
    }

    #[test]
    fn camel_case_aliases_and_bare_options_parse() {
        let field: FieldSpec = serde_json::from_str(
            r#"{
                "name": "reason",
                "label": "Reason",
                "type": "radio",
                "required": true,
                "defaultValue": "no-show",
                "readOnly": false,
                "options": ["no-show", { "value": "guest", "label": "Guest request" }]
            }"#,
        )
        .expect("field should parse");

        assert_eq!(field.kind, FieldKind::Radio);
        assert_eq!(field.default_value, Some(Value::text("no-show")));
        assert_eq!(
            field.options,
            vec![
                FieldOption::new("no-show", "no-show"),
                FieldOption::new("guest", "Guest request"),
            ]
        );
        assert_eq!(field.option_label("guest"), Some("Guest request"));
    }

    #[test]
    fn display_fields_are_never_validated_required() {
        let field = FieldSpec::display("room", "Room").required();
        assert!(!field.is_validated_required());
        let schema = Schema::new(vec![field, FieldSpec::text("note", "Note").required()]);
        assert_eq!(schema.required_names(), vec!["note".into()]);
    }

    #[test]
    fn read_only_locks_text_like_fields_only() {
        let text = FieldSpec::text("guest", "Guest").required().read_only();
        assert!(text.is_locked());
        assert!(!text.is_validated_required());

        let select = FieldSpec::select("room", "Room", vec![FieldOption::from("101")])
            .required()
            .read_only();
        assert!(!select.is_locked());
        assert!(select.is_validated_required());

        assert!(FieldSpec::display("rate", "Rate").is_locked());
    }

    #[test]
    fn issues_report_misconfigured_fields() {
        let schema = Schema::new(vec![
            FieldSpec::text("a", "A"),
            FieldSpec::text("a", "A again"),
            FieldSpec::select("room", "Room", Vec::new()),
            FieldSpec::new("x", "X", FieldKind::from("slider")),
        ]);

        assert_eq!(
            schema.issues(),
            vec![
                SchemaIssue::DuplicateName("a".into()),
                SchemaIssue::MissingOptions("room".into()),
                SchemaIssue::UnsupportedKind {
                    field: "x".into(),
                    tag: "slider".to_string(),
                },
            ]
        );
    }
}
