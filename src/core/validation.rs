use crate::core::FieldId;
use crate::core::schema::Schema;
use crate::core::value::Value;
use indexmap::IndexMap;

pub const REQUIRED_MESSAGE: &str = "this field is required";
pub const INVALID_OPTION_MESSAGE: &str = "select one of the available options";

pub type FormValues = IndexMap<FieldId, Value>;
pub type FieldErrors = IndexMap<FieldId, String>;

/// Field-level check. `Ok(())` accepts the value; `Err` carries the message
/// shown under the field. The full value map is passed for cross-field rules.
pub type FieldValidator = Box<dyn Fn(&Value, &FormValues) -> Result<(), String> + Send + Sync>;

/// Custom validators keyed by the field they guard, at most one per field.
#[derive(Default)]
pub struct CustomValidators {
    entries: IndexMap<FieldId, FieldValidator>,
}

impl CustomValidators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(
        mut self,
        name: impl Into<FieldId>,
        validator: impl Fn(&Value, &FormValues) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.insert(name, Box::new(validator));
        self
    }

    pub fn insert(&mut self, name: impl Into<FieldId>, validator: FieldValidator) {
        self.entries.insert(name.into(), validator);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &FieldValidator)> {
        self.entries.iter()
    }
}

impl std::fmt::Debug for CustomValidators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.keys()).finish()
    }
}

fn is_missing(values: &FormValues, name: &str) -> bool {
    values.get(name).is_none_or(Value::is_blank)
}

/// Required fields first, then custom validators for fields still clean.
pub fn validate(
    values: &FormValues,
    required_fields: &[FieldId],
    custom_validators: &CustomValidators,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for name in required_fields {
        if is_missing(values, name.as_str()) {
            errors.insert(name.clone(), REQUIRED_MESSAGE.to_string());
        }
    }

    for (name, validator) in custom_validators.iter() {
        if errors.contains_key(name) {
            continue;
        }
        let Some(value) = values.get(name) else {
            continue;
        };
        if let Err(message) = validator(value, values) {
            errors.insert(name.clone(), message);
        }
    }

    errors
}

/// Required-only check over every editable field of `schema`.
pub fn required_errors(schema: &Schema, values: &FormValues) -> FieldErrors {
    schema
        .iter()
        .filter(|field| field.is_validated_required())
        .filter(|field| is_missing(values, field.name.as_str()))
        .map(|field| (field.name.clone(), REQUIRED_MESSAGE.to_string()))
        .collect()
}

/// Non-blank select/radio values that are not among the declared options.
pub fn option_errors(schema: &Schema, values: &FormValues) -> FieldErrors {
    schema
        .iter()
        .filter(|field| field.kind.is_choice())
        .filter_map(|field| {
            let value = values.get(&field.name)?;
            if value.is_blank() {
                return None;
            }
            let text = value.to_text_scalar().unwrap_or_default();
            (!field.has_option(&text))
                .then(|| (field.name.clone(), INVALID_OPTION_MESSAGE.to_string()))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationSummary {
    pub has_errors: bool,
    pub message: String,
}

impl ValidationSummary {
    /// Joins every error into one line for toast/banner display, prefixing
    /// each with the field label when a schema is given.
    pub fn from_errors(errors: &FieldErrors, schema: Option<&Schema>) -> Self {
        let message = errors
            .iter()
            .map(|(name, error)| {
                let label = schema
                    .map(|schema| schema.label_of(name.as_str()))
                    .unwrap_or(name.as_str());
                format!("{label}: {error}")
            })
            .collect::<Vec<_>>()
            .join("; ");

        Self {
            has_errors: !errors.is_empty(),
            message,
        }
    }
}
