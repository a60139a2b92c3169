use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::fmt;

/// How serious a finding is. Only [`Severity::Error`] fails a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self { severity, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Shape of a decoded frontmatter value, as seen by the rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Sequence(&'a [Value]),
    Mapping(&'a Mapping),
    Other(&'a Value),
}

impl<'a> From<&'a Value> for FieldValue<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(text) => FieldValue::Text(text),
            Value::Sequence(items) => FieldValue::Sequence(items),
            Value::Mapping(map) => FieldValue::Mapping(map),
            other => FieldValue::Other(other),
        }
    }
}

/// Renders a YAML value for messages and summaries. Strings are printed bare.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, render_value(&tagged.value)),
        Value::Sequence(_) | Value::Mapping(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

/// The YAML header of a `SKILL.md`, keys kept in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    fields: Mapping,
}

impl Frontmatter {
    pub fn new(fields: Mapping) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<FieldValue<'_>> {
        self.fields.get(key).map(FieldValue::from)
    }

    pub fn get_raw(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.fields.get("description").and_then(Value::as_str)
    }

    pub fn license(&self) -> Option<&str> {
        self.fields.get("license").and_then(Value::as_str)
    }

    /// Entries of `metadata` in declaration order, or `None` when it is
    /// absent or not a mapping.
    pub fn metadata_entries(&self) -> Option<Vec<(String, String)>> {
        match self.get("metadata")? {
            FieldValue::Mapping(map) => {
                Some(map.iter().map(|(k, v)| (render_value(k), render_value(v))).collect())
            }
            _ => None,
        }
    }
}

/// A successfully extracted manifest: parsed header plus trimmed body.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillManifest {
    pub frontmatter: Frontmatter,
    pub body: String,
}
