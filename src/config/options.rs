//! Pagination options (options.yml)

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_yaml::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::PaginationError;

pub const DEFAULT_DISTANCE: i64 = 5;
pub const DEFAULT_NEXT: &str = ">>";
pub const DEFAULT_PREVIOUS: &str = "<<";
pub const DEFAULT_ELLIPSIS: &str = "…";

/// How the first or last page shortcut is shown
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EdgeLink {
    /// No shortcut
    Disabled,
    /// A plain page number link (page 1, or the last page)
    #[default]
    Number,
    /// A link with custom text
    Label(String),
}

impl EdgeLink {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, EdgeLink::Disabled)
    }

    fn from_value(field: &str, value: &Value) -> Result<Self, String> {
        if let Value::Bool(true) = value {
            return Ok(EdgeLink::Number);
        }
        Ok(match scalar_text(field, value)? {
            Some(text) => EdgeLink::Label(text),
            None => EdgeLink::Disabled,
        })
    }
}

impl Serialize for EdgeLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EdgeLink::Disabled => serializer.serialize_bool(false),
            EdgeLink::Number => serializer.serialize_bool(true),
            EdgeLink::Label(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for EdgeLink {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        EdgeLink::from_value("first/last", &value).map_err(serde::de::Error::custom)
    }
}

/// Options controlling which links are produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Number of page links shown on each side of the current page
    pub distance: i64,
    #[serde(deserialize_with = "deserialize_next")]
    pub next: Option<String>,
    #[serde(deserialize_with = "deserialize_previous")]
    pub previous: Option<String>,
    pub first: EdgeLink,
    pub last: EdgeLink,
    #[serde(deserialize_with = "deserialize_ellipsis")]
    pub ellipsis: Option<String>,

    // Unrecognized keys, kept only so they can be reported
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE,
            next: Some(DEFAULT_NEXT.to_string()),
            previous: Some(DEFAULT_PREVIOUS.to_string()),
            first: EdgeLink::Number,
            last: EdgeLink::Number,
            ellipsis: Some(DEFAULT_ELLIPSIS.to_string()),
            extra: HashMap::new(),
        }
    }
}

impl Options {
    /// Load options from a YAML (or JSON) file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PaginationError> {
        let content = fs::read_to_string(path.as_ref())?;
        let options = Self::from_yaml_str(&content)?;
        tracing::debug!("Loaded pagination options from {:?}", path.as_ref());
        Ok(options)
    }

    /// Parse options from a YAML (or JSON) string and validate them
    pub fn from_yaml_str(content: &str) -> Result<Self, PaginationError> {
        // An empty document means "all defaults"
        let options: Options = if content.trim().is_empty() {
            Options::default()
        } else {
            serde_yaml::from_str(content)?
        };

        for key in options.extra.keys() {
            tracing::debug!("Ignoring unknown pagination option: {}", key);
        }

        options.validate()?;
        Ok(options)
    }

    /// Check the invariants that cannot be expressed in the field types
    pub fn validate(&self) -> Result<(), PaginationError> {
        if self.distance < 1 {
            return Err(PaginationError::InvalidDistance(self.distance));
        }
        Ok(())
    }

    pub fn with_distance(mut self, distance: i64) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_first(mut self, first: EdgeLink) -> Self {
        self.first = first;
        self
    }

    pub fn with_last(mut self, last: EdgeLink) -> Self {
        self.last = last;
        self
    }

    pub fn with_next(mut self, next: Option<&str>) -> Self {
        self.next = next.map(str::to_string);
        self
    }

    pub fn with_previous(mut self, previous: Option<&str>) -> Self {
        self.previous = previous.map(str::to_string);
        self
    }

    pub fn with_ellipsis(mut self, ellipsis: Option<&str>) -> Self {
        self.ellipsis = ellipsis.map(str::to_string);
        self
    }
}

/// Text of a scalar option value, or `None` when the value is falsy
/// (`null`, `false`, `0` or the empty string).
fn scalar_text(field: &str, value: &Value) -> Result<Option<String>, String> {
    match value {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Bool(true) => Ok(Some("true".to_string())),
        Value::Number(n) => {
            if n.as_f64() == Some(0.0) {
                Ok(None)
            } else {
                Ok(Some(n.to_string()))
            }
        }
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Tagged(tagged) => scalar_text(field, &tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => {
            Err(format!("{} must be a scalar, false or null", field))
        }
    }
}

/// Label options keep their default text when set to a bare `true`
fn label_from_value(field: &str, value: &Value, default: &str) -> Result<Option<String>, String> {
    if let Value::Bool(true) = value {
        return Ok(Some(default.to_string()));
    }
    scalar_text(field, value)
}

fn deserialize_label<'de, D: Deserializer<'de>>(
    deserializer: D,
    field: &str,
    default: &str,
) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    label_from_value(field, &value, default).map_err(serde::de::Error::custom)
}

fn deserialize_next<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    deserialize_label(d, "next", DEFAULT_NEXT)
}

fn deserialize_previous<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    deserialize_label(d, "previous", DEFAULT_PREVIOUS)
}

fn deserialize_ellipsis<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    deserialize_label(d, "ellipsis", DEFAULT_ELLIPSIS)
}
