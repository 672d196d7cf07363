// Domain models - Core types for frame properties and display rows

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// A single frame-property value.
///
/// Frame properties are attached to decoded video frames as a flat
/// key-to-value mapping. Values are one of a small closed set of shapes;
/// the `Display` impl is the generic string conversion used whenever no
/// formatting rule claims the key.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// Signed integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text value
    Str(String),
    /// Boolean value
    Bool(bool),
    /// Opaque byte sequence
    Data(Vec<u8>),
}

impl PropValue {
    /// Interpret the value as an enum code for table lookups.
    ///
    /// Integers map directly; booleans map to 0/1. Other shapes have no
    /// code interpretation.
    pub fn as_code(&self) -> Option<i64> {
        match self {
            PropValue::Int(v) => Some(*v),
            PropValue::Bool(v) => Some(i64::from(*v)),
            _ => None,
        }
    }

    /// Interpret the value as text, covering both string and UTF-8 data.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Str(s) => Some(s),
            PropValue::Data(d) => std::str::from_utf8(d).ok(),
            _ => None,
        }
    }

    /// Interpret the value as a float, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropValue::Float(v) => Some(*v),
            PropValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Int(v) => write!(f, "{}", v),
            PropValue::Float(v) => write!(f, "{}", v),
            PropValue::Str(s) => write!(f, "{}", s),
            PropValue::Bool(b) => write!(f, "{}", b),
            PropValue::Data(d) => match std::str::from_utf8(d) {
                Ok(s) if !s.is_empty() && !s.chars().any(char::is_control) => {
                    write!(f, "{}", s)
                }
                _ => write!(f, "<{} bytes>", d.len()),
            },
        }
    }
}

/// Per-frame property mapping.
///
/// Keys prefixed with an underscore are reserved/system keys by convention;
/// unprefixed keys are user keys. The mapping is treated as immutable input
/// and rebuilt in full for every presented frame.
pub type FrameProps = BTreeMap<String, PropValue>;

/// Display category for grouping prettified rows.
///
/// Variant order is the display order; empty categories are omitted from
/// the presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Video,
    Audio,
    Text,
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Video,
        Category::Audio,
        Category::Text,
        Category::Other,
    ];

    /// Human-readable category name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Video => "Video",
            Category::Audio => "Audio",
            Category::Text => "Text",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One presented row: the original property key, the display label and the
/// formatted value. Derived data only; recomputed on every frame change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    /// Original property key the row was derived from
    pub key: String,
    /// Display label (rule title, or the key with one leading `_` stripped)
    pub label: String,
    /// Formatted value text
    pub value: String,
}

impl DisplayRow {
    /// Create a new display row.
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Ordering rule shared by raw and prettified views: underscore-prefixed
/// keys sort before unprefixed keys, lexicographic within each group.
pub fn prop_key_cmp(a: &str, b: &str) -> Ordering {
    let a_user = !a.starts_with('_');
    let b_user = !b.starts_with('_');
    a_user.cmp(&b_user).then_with(|| a.cmp(b))
}

/// Keys of a property mapping in display order.
pub fn sorted_keys(props: &FrameProps) -> Vec<&str> {
    let mut keys: Vec<&str> = props.keys().map(String::as_str).collect();
    keys.sort_by(|a, b| prop_key_cmp(a, b));
    keys
}

#[cfg(test)]
mod tests;
