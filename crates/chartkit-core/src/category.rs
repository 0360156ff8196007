// File: crates/chartkit-core/src/category.rs
// Summary: Closed union of category-axis keys (text, number, date).

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

#[derive(Clone, Debug, PartialEq)]
pub enum CategoryKey {
    Text(String),
    Number(f64),
    Date(DateTime<Utc>),
}

/// Discriminant of a [`CategoryKey`], used for the homogeneity check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    Text,
    Number,
    Date,
}

impl KeyKind {
    pub fn name(self) -> &'static str {
        match self {
            KeyKind::Text => "text",
            KeyKind::Number => "number",
            KeyKind::Date => "date",
        }
    }
}

impl CategoryKey {
    pub fn text(s: impl Into<String>) -> Self {
        CategoryKey::Text(s.into())
    }

    /// Convenience for the common all-string case.
    pub fn texts<S: AsRef<str>>(items: &[S]) -> Vec<CategoryKey> {
        items.iter().map(|s| CategoryKey::Text(s.as_ref().to_string())).collect()
    }

    pub fn kind(&self) -> KeyKind {
        match self {
            CategoryKey::Text(_) => KeyKind::Text,
            CategoryKey::Number(_) => KeyKind::Number,
            CategoryKey::Date(_) => KeyKind::Date,
        }
    }

    /// Numeric position on a value axis, when the key has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CategoryKey::Text(_) => None,
            CategoryKey::Number(v) => Some(*v),
            CategoryKey::Date(d) => Some(d.timestamp_millis() as f64),
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKey::Text(s) => f.write_str(s),
            CategoryKey::Number(v) => write!(f, "{v}"),
            CategoryKey::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for CategoryKey {
    fn from(s: &str) -> Self {
        CategoryKey::Text(s.to_string())
    }
}

impl From<String> for CategoryKey {
    fn from(s: String) -> Self {
        CategoryKey::Text(s)
    }
}

impl From<f64> for CategoryKey {
    fn from(v: f64) -> Self {
        CategoryKey::Number(v)
    }
}

impl From<i64> for CategoryKey {
    fn from(v: i64) -> Self {
        CategoryKey::Number(v as f64)
    }
}

impl From<i32> for CategoryKey {
    fn from(v: i32) -> Self {
        CategoryKey::Number(v as f64)
    }
}

impl From<DateTime<Utc>> for CategoryKey {
    fn from(d: DateTime<Utc>) -> Self {
        CategoryKey::Date(d)
    }
}

impl From<NaiveDate> for CategoryKey {
    fn from(d: NaiveDate) -> Self {
        CategoryKey::Date(d.and_time(chrono::NaiveTime::MIN).and_utc())
    }
}
