//! Property Form Generator: turns a node's schema + current config into a
//! renderable form description, and parses a raw form submission back into
//! a config map.
//!
//! Submission semantics deliberately mirror HTML forms, because that is the
//! contract backend consumers already depend on:
//!
//! - a checkbox is present in the submission iff it is checked; absence
//!   means `false`, never "unchanged",
//! - an empty numeric input parses to `null`, not `0` (consumers treat
//!   `null` as "unset" and `0` as "explicit zero"),
//! - fields hidden by a select dependency still submit their values, the
//!   same way `display: none` inputs do.

use crate::graph::Node;
use crate::registry::{self, ConfigMap, FieldDescriptor, FieldKind, NodeType};
use ahash::AHashMap;
use serde_json::Value;

/// One renderable input: the schema descriptor plus the value it should be
/// pre-filled with.
#[derive(Debug, Clone)]
pub struct FormField {
    pub descriptor: FieldDescriptor,
    pub value: Value,
}

impl FormField {
    /// The raw string this field would submit. Booleans have no raw string;
    /// they participate via presence (see [`PropertyForm::submitted_values`]).
    pub fn raw_value(&self) -> String {
        match &self.descriptor.kind {
            FieldKind::Boolean => String::new(),
            FieldKind::Number { .. } => match &self.value {
                Value::Null => String::new(),
                Value::Number(n) => match n.as_i64() {
                    Some(i) => i.to_string(),
                    None => n.as_f64().unwrap_or(0.0).to_string(),
                },
                other => stringify(other),
            },
            FieldKind::StringList => match &self.value {
                Value::Array(items) => items
                    .iter()
                    .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| stringify(v)))
                    .collect::<Vec<_>>()
                    .join("\n"),
                other => stringify(other),
            },
            _ => stringify(&self.value),
        }
    }

    fn is_checked(&self) -> bool {
        matches!(self.descriptor.kind, FieldKind::Boolean) && self.value == Value::Bool(true)
    }
}

/// A rendered property form: ordered fields plus the keys currently hidden
/// by select dependencies.
#[derive(Debug, Clone)]
pub struct PropertyForm {
    pub node_type: NodeType,
    pub fields: Vec<FormField>,
    /// Field keys not visible under the current select choices. Hidden
    /// fields still submit; visibility is purely a display concern.
    pub hidden_keys: Vec<&'static str>,
}

impl PropertyForm {
    /// The submission an untouched form would produce. Feeding this straight
    /// back through [`parse`] reproduces the node's config.
    pub fn submitted_values(&self) -> SubmittedValues {
        let mut values = SubmittedValues::new();
        for field in &self.fields {
            match field.descriptor.kind {
                FieldKind::Boolean => {
                    if field.is_checked() {
                        values.check(field.descriptor.key);
                    }
                }
                _ => values.set(field.descriptor.key, field.raw_value()),
            }
        }
        values
    }
}

/// A raw, string-keyed form submission. Checkbox fields appear only when
/// checked.
#[derive(Debug, Clone, Default)]
pub struct SubmittedValues {
    entries: AHashMap<String, String>,
}

impl SubmittedValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.entries.insert(key.to_string(), value.into());
    }

    /// Marks a checkbox as checked (HTML submits `"on"` for these).
    pub fn check(&mut self, key: &str) {
        self.entries.insert(key.to_string(), "on".to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

/// Renders the property form for a node: one field per schema descriptor,
/// pre-filled from the node's config (or the schema default when the key is
/// absent).
pub fn render(node: &Node) -> PropertyForm {
    let schema = registry::property_schema(node.node_type);
    let mut hidden_keys = Vec::new();
    let fields: Vec<FormField> = schema
        .into_iter()
        .map(|descriptor| {
            let value = node
                .config
                .get(descriptor.key)
                .cloned()
                .unwrap_or_else(|| descriptor.default.clone());
            FormField { descriptor, value }
        })
        .collect();

    for field in &fields {
        if let FieldKind::Select { reveals, .. } = &field.descriptor.kind {
            let selected = field.value.as_str().unwrap_or_default();
            for (option, keys) in reveals {
                if *option != selected {
                    hidden_keys.extend(keys.iter().copied());
                }
            }
        }
    }

    PropertyForm {
        node_type: node.node_type,
        fields,
        hidden_keys,
    }
}

/// Parses a raw submission back into a full config for the given node type,
/// applying the per-kind coercions.
pub fn parse(node_type: NodeType, submitted: &SubmittedValues) -> ConfigMap {
    registry::property_schema(node_type)
        .into_iter()
        .map(|descriptor| {
            let value = coerce(&descriptor, submitted);
            (descriptor.key.to_string(), value)
        })
        .collect()
}

fn coerce(descriptor: &FieldDescriptor, submitted: &SubmittedValues) -> Value {
    let raw = submitted.get(descriptor.key);
    match &descriptor.kind {
        FieldKind::Boolean => Value::Bool(submitted.contains(descriptor.key)),
        FieldKind::Number { .. } => parse_number(descriptor.key, raw),
        FieldKind::StringList => Value::Array(
            raw.unwrap_or_default()
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(Value::from)
                .collect(),
        ),
        _ => Value::from(raw.unwrap_or_default()),
    }
}

fn parse_number(key: &str, raw: Option<&str>) -> Value {
    let trimmed = raw.unwrap_or_default().trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    match trimmed.parse::<f64>() {
        Ok(n) => registry::field::number_value(n),
        Err(_) => {
            log::warn!("field '{key}': unparseable number '{trimmed}', storing null");
            Value::Null
        }
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
