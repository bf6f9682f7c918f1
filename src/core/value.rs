use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A loosely typed value as supplied by callers (data snapshots, defaults) or
/// produced by editing a field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    None,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}

/// Caller-owned data snapshot keyed by attribute name.
pub type Record = IndexMap<String, Value>;

impl Value {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(v) => v.is_empty(),
            Self::List(v) => v.is_empty(),
            Self::Object(v) => v.is_empty(),
            _ => false,
        }
    }

    /// Missing, whitespace-only text, or an empty collection.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(v) => v.trim().is_empty(),
            other => other.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(v) => v.trim().parse().ok(),
            _ => None,
        }
    }

    /// Scalar rendered as text; collections have no scalar form.
    pub fn to_text_scalar(&self) -> Option<String> {
        match self {
            Self::Text(v) => Some(v.clone()),
            Self::Bool(v) => Some(v.to_string()),
            Self::Number(v) => Some(format_number(*v)),
            Self::None | Self::List(_) | Self::Object(_) => None,
        }
    }

    /// Human readable form used by display fields and summaries.
    pub fn display(&self) -> String {
        match self {
            Self::List(items) => items
                .iter()
                .map(Value::display)
                .filter(|item| !item.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
            Self::Object(map) => map
                .iter()
                .map(|(key, value)| format!("{key}: {}", value.display()))
                .collect::<Vec<_>>()
                .join(", "),
            other => other.to_text_scalar().unwrap_or_default(),
        }
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::None,
            serde_json::Value::Bool(v) => Self::Bool(v),
            serde_json::Value::Number(n) => n.as_f64().map(Self::Number).unwrap_or(Self::None),
            serde_json::Value::String(v) => Self::Text(v),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn blank_covers_whitespace_and_empty_collections() {
        assert!(Value::None.is_blank());
        assert!(Value::text("   \t").is_blank());
        assert!(Value::List(Vec::new()).is_blank());
        assert!(!Value::text(" a ").is_blank());
        assert!(!Value::Bool(false).is_blank());
        assert!(!Value::Number(0.0).is_blank());
    }

    #[test]
    fn json_conversion_maps_every_shape() {
        let json = serde_json::json!({ "room": 204, "guest": "Ana", "tags": ["vip"], "notes": null });
        let Value::Object(map) = Value::from(json) else {
            panic!("expected object");
        };
        assert_eq!(map.len(), 4);
        assert_eq!(map.get("room").and_then(Value::as_number), Some(204.0));
        assert_eq!(map.get("guest").and_then(Value::as_text), Some("Ana"));
        assert_eq!(map.get("tags"), Some(&Value::List(vec![Value::text("vip")])));
        assert_eq!(map.get("notes"), Some(&Value::None));
    }

    #[test]
    fn numbers_render_without_trailing_fraction() {
        assert_eq!(Value::Number(3.0).display(), "3");
        assert_eq!(Value::Number(2.5).display(), "2.5");
        assert_eq!(Value::from(vec!["a", "b"]).display(), "a, b");
    }
}
