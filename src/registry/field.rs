use serde::Serialize;
use serde_json::Value;

/// Converts a float to a JSON number, normalizing integral values to JSON
/// integers so that registry defaults compare equal after a form round-trip.
pub fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}

/// The input widget a property field renders as, plus any coercion metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FieldKind {
    /// Single-line free text.
    Text,
    /// Multi-line free text (textarea).
    MultilineText,
    /// Float-valued field; empty input parses to `null`, never `0`.
    Number { min: Option<f64>, max: Option<f64> },
    /// HTML-checkbox semantics: present in a submission means `true`,
    /// absent means `false`.
    Boolean,
    /// Closed set of options. `reveals` maps an option to the field keys
    /// that are only visible while that option is selected; every
    /// field-visibility dependency lives here, in schema data.
    Select {
        options: Vec<&'static str>,
        reveals: Vec<(&'static str, Vec<&'static str>)>,
    },
    /// List of strings edited as newline-delimited text; blank lines are
    /// dropped on parse.
    StringList,
}

/// One entry in a node type's property schema: a stable key, a display
/// label, the widget kind, and the default value new nodes start with.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
    pub default: Value,
}

impl FieldDescriptor {
    pub fn text(key: &'static str, label: &'static str, default: &str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            default: Value::from(default),
        }
    }

    pub fn multiline(key: &'static str, label: &'static str, default: &str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::MultilineText,
            default: Value::from(default),
        }
    }

    pub fn number(
        key: &'static str,
        label: &'static str,
        default: Option<f64>,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Number { min, max },
            default: default.map(number_value).unwrap_or(Value::Null),
        }
    }

    pub fn boolean(key: &'static str, label: &'static str, default: bool) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Boolean,
            default: Value::from(default),
        }
    }

    pub fn select(
        key: &'static str,
        label: &'static str,
        options: &[&'static str],
        default: &'static str,
    ) -> Self {
        Self::select_revealing(key, label, options, default, Vec::new())
    }

    /// A select whose chosen option controls the visibility of other fields.
    pub fn select_revealing(
        key: &'static str,
        label: &'static str,
        options: &[&'static str],
        default: &'static str,
        reveals: Vec<(&'static str, Vec<&'static str>)>,
    ) -> Self {
        debug_assert!(options.contains(&default));
        Self {
            key,
            label,
            kind: FieldKind::Select {
                options: options.to_vec(),
                reveals,
            },
            default: Value::from(default),
        }
    }

    pub fn string_list(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::StringList,
            default: Value::Array(Vec::new()),
        }
    }
}
