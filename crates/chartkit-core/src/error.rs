// File: crates/chartkit-core/src/error.rs
// Summary: Error taxonomy shared by the store, validators, range engine and style cascade.

use thiserror::Error;

use crate::axis::AxisId;

/// Exact wording callers match on when a radar value leaves the unit interval.
pub const RADAR_RANGE_MESSAGE: &str = "Values must be in [0, 1] range!!!";

/// Coarse grouping of [`ChartError`] variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    Range,
    IncompatibleState,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("series name must not be empty")]
    InvalidName,

    #[error("series name '{0}' has already been used; use unique names")]
    DuplicateName(String),

    #[error("series name '{0}' not found")]
    NotFound(String),

    #[error("{0} data must not be empty")]
    EmptyData(&'static str),

    #[error("{what} sizes are not the same: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{what} data contains a null element at index {index}")]
    NullElement { what: &'static str, index: usize },

    #[error("category keys must share one type: expected {expected}, found {found} at index {index}")]
    HeterogeneousType {
        expected: &'static str,
        found: &'static str,
        index: usize,
    },

    #[error("{axis} is logarithmic but contains non-positive value {value}")]
    NonPositiveLogValue { axis: AxisId, value: f64 },

    #[error("{what} must be a finite number, got {value}")]
    NonFiniteValue { what: &'static str, value: f64 },

    #[error("{what} must not be negative, got {value}")]
    NegativeValue { what: &'static str, value: f64 },

    #[error("invalid value for style property {property}: {reason}")]
    InvalidStyleValue {
        property: &'static str,
        reason: String,
    },

    #[error("malformed decimal pattern '{0}'")]
    MalformedDecimalPattern(String),

    #[error("chart {which} must be in [{min}, {max}], got {value}")]
    InvalidDimension {
        which: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{0}")]
    Range(String),

    #[error("render style {style} is incompatible with series '{series}': {reason}")]
    IncompatibleRenderStyle {
        series: String,
        style: &'static str,
        reason: &'static str,
    },

    #[error("{kind} charts hold a single series; '{existing}' is already present")]
    DuplicateSeries {
        kind: &'static str,
        existing: String,
    },

    #[error("operation requires a {expected} chart, this chart is {actual}")]
    WrongChartKind {
        expected: &'static str,
        actual: &'static str,
    },
}

impl ChartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChartError::Range(_) => ErrorKind::Range,
            ChartError::IncompatibleRenderStyle { .. }
            | ChartError::DuplicateSeries { .. }
            | ChartError::WrongChartKind { .. } => ErrorKind::IncompatibleState,
            _ => ErrorKind::InvalidArgument,
        }
    }

    pub(crate) fn radar_range() -> Self {
        ChartError::Range(RADAR_RANGE_MESSAGE.to_string())
    }

    pub(crate) fn style(property: &'static str, reason: impl Into<String>) -> Self {
        ChartError::InvalidStyleValue { property, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
