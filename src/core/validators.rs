//! Stock field validators for use with [`CustomValidators`].
//!
//! [`CustomValidators`]: crate::core::validation::CustomValidators

use crate::core::schema::{FieldKind, Schema};
use crate::core::validation::{CustomValidators, FieldValidator, FormValues};
use crate::core::value::Value;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

fn text_of(value: &Value) -> String {
    value.to_text_scalar().unwrap_or_default()
}

pub fn email(message: impl Into<String>) -> FieldValidator {
    let message = message.into();
    Box::new(move |value: &Value, _: &FormValues| {
        let text = text_of(value);
        if text.is_empty() || EMAIL.is_match(text.trim()) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

pub fn numeric(message: impl Into<String>) -> FieldValidator {
    let message = message.into();
    Box::new(move |value: &Value, _: &FormValues| {
        if value.is_blank() || value.as_number().is_some() {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

pub fn min_length(min_len: usize, message: impl Into<String>) -> FieldValidator {
    let message = message.into();
    Box::new(move |value: &Value, _: &FormValues| {
        if text_of(value).chars().count() < min_len {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn max_length(max_len: usize, message: impl Into<String>) -> FieldValidator {
    let message = message.into();
    Box::new(move |value: &Value, _: &FormValues| {
        if text_of(value).chars().count() > max_len {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn pattern(pattern: &str, message: impl Into<String>) -> Result<FieldValidator, regex::Error> {
    let regex = Regex::new(pattern)?;
    let message = message.into();
    Ok(Box::new(move |value: &Value, _: &FormValues| {
        let text = text_of(value);
        if text.is_empty() || regex.is_match(&text) {
            Ok(())
        } else {
            Err(message.clone())
        }
    }))
}

pub fn one_of(allowed: Vec<String>, message: impl Into<String>) -> FieldValidator {
    let message = message.into();
    Box::new(move |value: &Value, _: &FormValues| {
        let text = text_of(value);
        if allowed.iter().any(|candidate| candidate == &text) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

/// Format checks implied by field kinds: e-mail syntax and numeric input.
pub fn for_schema(schema: &Schema) -> CustomValidators {
    let mut validators = CustomValidators::new();
    for spec in schema.iter().filter(|spec| !spec.is_locked()) {
        match spec.kind {
            FieldKind::Email => validators.insert(spec.name.clone(), email("enter a valid e-mail address")),
            FieldKind::Number => validators.insert(spec.name.clone(), numeric("enter a number")),
            _ => {}
        }
    }
    validators
}
