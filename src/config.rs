//! Dialog definitions loaded from YAML or JSON files.

use crate::core::FieldId;
use crate::core::schema::{Schema, SchemaIssue};
use crate::core::value::{Record, Value};
use crate::state::context::{ActionContext, DialogOptions};
use crate::ui::action_style::ActionType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported file extension for {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),
    #[error("field `{0}` is declared more than once")]
    DuplicateField(FieldId),
    #[error("data snapshot must be a mapping")]
    NotAMapping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogConfig {
    pub title: String,
    #[serde(default, alias = "actionType")]
    pub action: ActionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, alias = "statusField", skip_serializing_if = "Option::is_none")]
    pub status_field: Option<String>,
    #[serde(default)]
    pub options: DialogOptions,
    pub fields: Schema,
}

impl DialogConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(source)?;
        config.checked()
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.checked()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = read(path)?;
        match Format::of(path)? {
            Format::Yaml => Self::from_yaml_str(&source),
            Format::Json => Self::from_json_str(&source),
        }
    }

    /// Duplicate names break the one-slot-per-field invariant and are
    /// rejected; other schema issues are logged and tolerated.
    fn checked(self) -> Result<Self, ConfigError> {
        for issue in self.fields.issues() {
            match issue {
                SchemaIssue::DuplicateName(name) => return Err(ConfigError::DuplicateField(name)),
                other => tracing::warn!(title = %self.title, "{other}"),
            }
        }
        Ok(self)
    }

    /// Closed context for this dialog; callers add data and open it.
    pub fn context(&self) -> ActionContext {
        let mut ctx = ActionContext::new(self.title.clone(), self.action.clone(), self.fields.clone());
        ctx.description = self.description.clone();
        ctx.status_field = self.status_field.clone();
        ctx
    }
}

/// Reads a data snapshot (a top-level mapping) from YAML or JSON.
pub fn load_record(path: &Path) -> Result<Record, ConfigError> {
    let source = read(path)?;
    let value: Value = match Format::of(path)? {
        Format::Yaml => serde_yaml::from_str(&source)?,
        Format::Json => serde_json::from_str(&source)?,
    };
    match value {
        Value::Object(map) => Ok(map),
        Value::None => Ok(Record::new()),
        _ => Err(ConfigError::NotAMapping),
    }
}
