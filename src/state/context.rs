use crate::core::schema::Schema;
use crate::core::value::{Record, Value};
use crate::ui::action_style::ActionType;
use serde::{Deserialize, Serialize};

pub const STATUS_KEY: &str = "status";
pub const DESCRIPTION_KEY: &str = "description";

/// Caller-owned props, handed to the dialog again on every render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionContext {
    pub open: bool,
    pub title: String,
    pub action: ActionType,
    pub data: Record,
    pub loading: bool,
    /// Message from a failed remote action, shown as a banner.
    pub error: Option<String>,
    pub fields: Schema,
    pub description: Option<String>,
    /// Data key holding the booking status; `"status"` when unset.
    pub status_field: Option<String>,
}

impl ActionContext {
    pub fn new(title: impl Into<String>, action: ActionType, fields: impl Into<Schema>) -> Self {
        Self {
            title: title.into(),
            action,
            fields: fields.into(),
            ..Self::default()
        }
    }

    pub fn opened(mut self) -> Self {
        self.open = true;
        self
    }

    pub fn closed(mut self) -> Self {
        self.open = false;
        self
    }

    pub fn with_data(mut self, data: Record) -> Self {
        self.data = data;
        self
    }

    pub fn with_datum(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status_field(mut self, key: impl Into<String>) -> Self {
        self.status_field = Some(key.into());
        self
    }

    /// Raw status string from the data snapshot, if any.
    pub fn status(&self) -> Option<String> {
        self.data
            .get(self.status_field.as_deref().unwrap_or(STATUS_KEY))
            .and_then(Value::to_text_scalar)
            .filter(|status| !status.trim().is_empty())
    }

    /// Explicit description, else one carried in the data snapshot.
    pub fn description_text(&self) -> Option<String> {
        self.description.clone().or_else(|| {
            self.data
                .get(DESCRIPTION_KEY)
                .and_then(Value::to_text_scalar)
                .filter(|text| !text.trim().is_empty())
        })
    }
}

/// Which checks run when the user submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitPolicy {
    /// Required fields only; custom validators are not consulted.
    #[default]
    RequiredOnly,
    /// Required fields, then the dialog's custom validators.
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogOptions {
    pub submit_policy: SubmitPolicy,
    /// Reject select/radio values that are not among the declared options.
    pub enforce_options: bool,
    /// Ignore further submits until the caller resolves the pending one.
    pub submit_guard: bool,
}

impl Default for DialogOptions {
    fn default() -> Self {
        Self {
            submit_policy: SubmitPolicy::RequiredOnly,
            enforce_options: false,
            submit_guard: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ActionContext, DialogOptions, SubmitPolicy};
    use crate::core::schema::Schema;
    use crate::core::value::Value;
    use crate::ui::action_style::ActionType;

    #[test]
    fn status_and_description_come_from_data() {
        let ctx = ActionContext::new("Check in", ActionType::CheckIn, Schema::default())
            .with_datum("status", "confirmed")
            .with_datum("description", "Booking #812");
        assert_eq!(ctx.status().as_deref(), Some("confirmed"));
        assert_eq!(ctx.description_text().as_deref(), Some("Booking #812"));

        let explicit = ctx.with_description("Room 204");
        assert_eq!(explicit.description_text().as_deref(), Some("Room 204"));
    }

    #[test]
    fn status_field_can_be_renamed() {
        let ctx = ActionContext::new("x", ActionType::CheckOut, Schema::default())
            .with_datum("status", "pending")
            .with_datum("bookingStatus", "checked-in")
            .with_status_field("bookingStatus");
        assert_eq!(ctx.status().as_deref(), Some("checked-in"));
    }

    #[test]
    fn blank_status_is_absent() {
        let ctx = ActionContext::new("x", ActionType::Complete, Schema::default())
            .with_datum("status", Value::text(" "));
        assert_eq!(ctx.status(), None);
    }

    #[test]
    fn options_default_preserves_required_only_submit() {
        let options = DialogOptions::default();
        assert_eq!(options.submit_policy, SubmitPolicy::RequiredOnly);
        assert!(!options.enforce_options);
        assert!(options.submit_guard);

        let parsed: DialogOptions =
            serde_yaml::from_str("submit_policy: full\n").expect("options should parse");
        assert_eq!(parsed.submit_policy, SubmitPolicy::Full);
        assert!(parsed.submit_guard);
    }
}
