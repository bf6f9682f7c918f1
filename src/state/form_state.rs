use crate::core::FieldId;
use crate::core::schema::{FieldSpec, Schema};
use crate::core::validation::{FieldErrors, FormValues, required_errors};
use crate::core::value::{Record, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("no field named `{0}` in this form")]
    UnknownField(String),
    #[error("field `{0}` is read-only")]
    ReadOnlyField(FieldId),
}

fn seed_value(field: &FieldSpec, data: &Record) -> Value {
    data.get(field.name.as_str())
        .filter(|value| !value.is_none())
        .or(field.default_value.as_ref())
        .cloned()
        .unwrap_or_else(|| Value::text(""))
}

/// Values and errors of one open dialog session, keyed by schema field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: FormValues,
    errors: FieldErrors,
}

impl FormState {
    /// Seeds every schema field: the caller's data wins unless it is absent
    /// or null, then the field default, then an empty string.
    pub fn seed(schema: &Schema, data: &Record) -> Self {
        let values = schema
            .iter()
            .map(|field| (field.name.clone(), seed_value(field, data)))
            .collect();

        Self {
            values,
            errors: FieldErrors::new(),
        }
    }

    /// Re-keys the form to a changed schema while it stays open. Existing
    /// values and errors survive for names still present, new names are
    /// seeded like [`FormState::seed`], and dropped names are removed.
    pub fn reconcile(&mut self, schema: &Schema, data: &Record) {
        let mut previous = std::mem::take(&mut self.values);
        self.values = schema
            .iter()
            .map(|field| {
                let value = previous
                    .shift_remove(field.name.as_str())
                    .unwrap_or_else(|| seed_value(field, data));
                (field.name.clone(), value)
            })
            .collect();
        let values = &self.values;
        self.errors.retain(|name, _| values.contains_key(name));
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Stores `value` and drops any stale error on that field only. Nothing is
    /// re-validated until the next submit. Returns whether an error was cleared.
    pub fn edit(
        &mut self,
        schema: &Schema,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<bool, FormError> {
        let field = schema
            .get(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        if field.is_locked() {
            return Err(FormError::ReadOnlyField(field.name.clone()));
        }

        let Some(slot) = self.values.get_mut(name) else {
            return Err(FormError::UnknownField(name.to_string()));
        };
        *slot = value.into();

        Ok(self.errors.shift_remove(name).is_some())
    }

    /// Required-field errors for the current values; display fields are
    /// never required. Stored errors are left alone.
    pub fn check_required(&self, schema: &Schema) -> FieldErrors {
        required_errors(schema, &self.values)
    }

    /// Replaces the stored errors, keeping only names this form knows.
    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors
            .into_iter()
            .filter(|(name, _)| self.values.contains_key(name))
            .collect();
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{FormError, FormState};
    use crate::core::FieldId;
    use crate::core::schema::{FieldOption, FieldSpec, Schema};
    use crate::core::validation::{FieldErrors, required_errors};
    use crate::core::value::{Record, Value};

    fn schema() -> Schema {
        Schema::new(vec![
            FieldSpec::text("a", "A").required(),
            FieldSpec::text("b", "B").required(),
            FieldSpec::text("c", "C").with_default("fallback"),
            FieldSpec::display("room", "Room"),
        ])
    }

    #[test]
    fn seed_prefers_data_then_default_then_empty() {
        let mut data = Record::new();
        data.insert("a".to_string(), Value::text("from data"));
        data.insert("b".to_string(), Value::None);
        data.insert("extra".to_string(), Value::text("ignored"));

        let state = FormState::seed(&schema(), &data);

        assert_eq!(state.value("a"), Some(&Value::text("from data")));
        assert_eq!(state.value("b"), Some(&Value::text("")));
        assert_eq!(state.value("c"), Some(&Value::text("fallback")));
        assert_eq!(state.value("room"), Some(&Value::text("")));
        assert_eq!(state.value("extra"), None);
        assert_eq!(
            state.values().keys().map(FieldId::as_str).collect::<Vec<_>>(),
            vec!["a", "b", "c", "room"]
        );
        assert!(!state.has_errors());
    }

    #[test]
    fn null_data_falls_back_to_default() {
        let schema = Schema::new(vec![FieldSpec::number("nights", "Nights").with_default(1_i64)]);
        let mut data = Record::new();
        data.insert("nights".to_string(), Value::None);

        let state = FormState::seed(&schema, &data);
        assert_eq!(state.value("nights"), Some(&Value::Number(1.0)));
    }

    #[test]
    fn edit_clears_only_that_fields_error() {
        let schema = schema();
        let mut state = FormState::seed(&schema, &Record::new());
        state.set_errors(state.check_required(&schema));
        assert_eq!(state.errors().len(), 2);

        let cleared = state.edit(&schema, "a", "x").expect("edit should apply");

        assert!(cleared);
        assert_eq!(state.error("a"), None);
        assert_eq!(state.error("b"), Some("this field is required"));
    }

    #[test]
    fn edit_does_not_revalidate() {
        let schema = schema();
        let mut state = FormState::seed(&schema, &Record::new());
        state.set_errors(required_errors(&schema, state.values()));

        state.edit(&schema, "a", "   ").expect("edit should apply");
        assert_eq!(state.error("a"), None);
        assert_eq!(state.value("a"), Some(&Value::text("   ")));
    }

    #[test]
    fn edit_rejects_unknown_and_display_fields() {
        let schema = schema();
        let mut state = FormState::seed(&schema, &Record::new());
        let before = state.clone();

        assert_eq!(
            state.edit(&schema, "nope", "x"),
            Err(FormError::UnknownField("nope".to_string()))
        );
        assert_eq!(
            state.edit(&schema, "room", "301"),
            Err(FormError::ReadOnlyField("room".into()))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn read_only_choice_fields_stay_editable() {
        let schema = Schema::new(vec![
            FieldSpec::select("room", "Room", vec![FieldOption::from("101")])
                .required()
                .read_only(),
            FieldSpec::text("guest", "Guest").read_only(),
        ]);
        let mut state = FormState::seed(&schema, &Record::new());
        state.set_errors(state.check_required(&schema));
        assert_eq!(state.error("room"), Some("this field is required"));

        assert_eq!(state.edit(&schema, "room", "101"), Ok(true));
        assert!(state.check_required(&schema).is_empty());
        assert_eq!(
            state.edit(&schema, "guest", "Ana"),
            Err(FormError::ReadOnlyField("guest".into()))
        );
    }

    #[test]
    fn reconcile_adds_and_drops_fields_keeping_edits() {
        let before = Schema::new(vec![
            FieldSpec::text("a", "A").required(),
            FieldSpec::text("gone", "Gone").required(),
        ]);
        let mut state = FormState::seed(&before, &Record::new());
        state.set_errors(state.check_required(&before));
        state.edit(&before, "a", "typed").expect("edit should apply");

        let after = Schema::new(vec![
            FieldSpec::text("a", "A").required(),
            FieldSpec::text("b", "B").required(),
            FieldSpec::text("c", "C").with_default("fallback"),
        ]);
        let mut data = Record::new();
        data.insert("b".to_string(), Value::text("from data"));
        state.reconcile(&after, &data);

        assert_eq!(
            state.values().keys().map(FieldId::as_str).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
        assert_eq!(state.value("a"), Some(&Value::text("typed")));
        assert_eq!(state.value("b"), Some(&Value::text("from data")));
        assert_eq!(state.value("c"), Some(&Value::text("fallback")));
        assert_eq!(state.error("gone"), None);
        assert!(!state.has_errors());
    }

    #[test]
    fn set_errors_drops_names_outside_schema() {
        let schema = schema();
        let mut state = FormState::seed(&schema, &Record::new());
        let mut errors = FieldErrors::new();
        errors.insert("a".into(), "bad".to_string());
        errors.insert("ghost".into(), "bad".to_string());

        state.set_errors(errors);
        assert_eq!(state.errors().len(), 1);
        assert_eq!(state.error("a"), Some("bad"));
    }
}
