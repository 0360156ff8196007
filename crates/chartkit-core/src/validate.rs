// File: crates/chartkit-core/src/validate.rs
// Summary: Pure admission checks run before a series enters the store.
// Notes:
// - Nothing here mutates chart state; every function returns the owned payload it accepted.
// - NaN and infinities inside coordinate arrays are preserved, not rejected.

use crate::axis::AxisId;
use crate::category::CategoryKey;
use crate::error::{ChartError, Result};

/// Collect a numeric list, rejecting emptiness and null elements.
/// Accepts plain `f64` slices as well as `Option<f64>` slices.
pub fn numbers<T>(what: &'static str, values: &[T]) -> Result<Vec<f64>>
where
    T: Copy + Into<Option<f64>>,
{
    if values.is_empty() {
        return Err(ChartError::EmptyData(what));
    }
    values
        .iter()
        .enumerate()
        .map(|(index, v)| (*v).into().ok_or(ChartError::NullElement { what, index }))
        .collect()
}

fn same_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(ChartError::LengthMismatch { what, expected, actual });
    }
    Ok(())
}

/// Integer index sequence `0..n-1`, used when X data is omitted.
pub fn auto_x(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

/// X/Y pair for XY-family series. Missing X is synthesized from Y's length.
pub fn xy<T>(x: Option<&[T]>, y: &[T]) -> Result<(Vec<f64>, Vec<f64>)>
where
    T: Copy + Into<Option<f64>>,
{
    let y = numbers("Y", y)?;
    let x = match x {
        Some(x) => {
            let x = numbers("X", x)?;
            same_len("X and Y", x.len(), y.len())?;
            x
        }
        None => auto_x(y.len()),
    };
    Ok((x, y))
}

/// Optional error bars must match the Y length.
pub fn error_bars(bars: Option<&[f64]>, n: usize) -> Result<Option<Vec<f64>>> {
    match bars {
        None => Ok(None),
        Some(b) => {
            let b = numbers("error bars", b)?;
            same_len("Y and error bars", n, b.len())?;
            Ok(Some(b))
        }
    }
}

pub fn bubble(x: Option<&[f64]>, y: &[f64], sizes: &[f64]) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)> {
    let (x, y) = xy(x, y)?;
    let sizes = numbers("bubble size", sizes)?;
    same_len("coordinate and bubble size", y.len(), sizes.len())?;
    Ok((x, y, sizes))
}

/// Category keys must be present and share one concrete type.
pub fn category<K>(keys: Option<&[K]>, y: &[f64]) -> Result<(Vec<CategoryKey>, Vec<f64>)>
where
    K: Clone + Into<Option<CategoryKey>>,
{
    let y = numbers("Y", y)?;
    let keys = match keys {
        None => auto_x(y.len()).into_iter().map(CategoryKey::Number).collect(),
        Some(keys) => {
            if keys.is_empty() {
                return Err(ChartError::EmptyData("category"));
            }
            let keys: Vec<CategoryKey> = keys
                .iter()
                .enumerate()
                .map(|(index, k)| {
                    k.clone()
                        .into()
                        .ok_or(ChartError::NullElement { what: "category", index })
                })
                .collect::<Result<_>>()?;
            homogeneous(&keys)?;
            same_len("category and Y", keys.len(), y.len())?;
            keys
        }
    };
    Ok((keys, y))
}

fn homogeneous(keys: &[CategoryKey]) -> Result<()> {
    let Some(first) = keys.first().map(CategoryKey::kind) else {
        return Ok(());
    };
    for (index, k) in keys.iter().enumerate().skip(1) {
        if k.kind() != first {
            return Err(ChartError::HeterogeneousType {
                expected: first.name(),
                found: k.kind().name(),
                index,
            });
        }
    }
    Ok(())
}

/// Pie values must be finite; negatives only fail under the rejecting policy.
pub fn pie(value: f64, reject_negative: bool) -> Result<f64> {
    if !value.is_finite() {
        return Err(ChartError::NonFiniteValue { what: "pie value", value });
    }
    if reject_negative && value < 0.0 {
        return Err(ChartError::NegativeValue { what: "pie value", value });
    }
    Ok(value)
}

/// Radar values live in the closed unit interval; NaN is outside it.
pub fn radar<T>(values: &[T], label_count: Option<usize>) -> Result<Vec<f64>>
where
    T: Copy + Into<Option<f64>>,
{
    let values = numbers("radar", values)?;
    if values.iter().any(|v| !(0.0..=1.0).contains(v)) {
        return Err(ChartError::radar_range());
    }
    if let Some(n) = label_count {
        same_len("radii labels and radar values", n, values.len())?;
    }
    Ok(values)
}

pub fn box_data<T>(data: &[T]) -> Result<Vec<f64>>
where
    T: Copy + Into<Option<f64>>,
{
    numbers("box", data)
}

pub struct OhlcArrays {
    pub x: Vec<f64>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
}

pub fn ohlc(x: Option<&[f64]>, open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<OhlcArrays> {
    let open = numbers("open", open)?;
    let high = numbers("high", high)?;
    let low = numbers("low", low)?;
    let close = numbers("close", close)?;
    let n = open.len();
    same_len("open and high", n, high.len())?;
    same_len("open and low", n, low.len())?;
    same_len("open and close", n, close.len())?;
    let x = match x {
        Some(x) => {
            let x = numbers("X", x)?;
            same_len("X and OHLC", x.len(), n)?;
            x
        }
        None => auto_x(n),
    };
    Ok(OhlcArrays { x, open, high, low, close })
}

/// The heat matrix is indexed `heat[x][y]`; an entirely empty map is allowed.
pub fn heat_map(x: &[f64], y: &[f64], heat: &[Vec<f64>]) -> Result<()> {
    same_len("heat map columns and X", x.len(), heat.len())?;
    for column in heat {
        same_len("heat map rows and Y", y.len(), column.len())?;
    }
    Ok(())
}

pub fn dial(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(ChartError::NonFiniteValue { what: "dial value", value });
    }
    Ok(value)
}

/// Every value on a logarithmic axis must be strictly positive. NaN is skipped.
pub fn log_positive(axis: AxisId, values: &[f64]) -> Result<()> {
    match values.iter().find(|v| **v <= 0.0) {
        Some(&value) => Err(ChartError::NonPositiveLogValue { axis, value }),
        None => Ok(()),
    }
}
