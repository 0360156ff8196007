// File: crates/chartkit-core/src/range.rs
// Summary: Auto-range engine: data extents, forced bounds, degenerate padding and tick step.

use tracing::{trace, warn};

use crate::axis::{nice_step, Axis, AxisId, AxisRange};
use crate::error::{ChartError, Result};

/// Inputs for one range computation besides the data itself.
#[derive(Clone, Copy, Debug)]
pub struct RangeRequest<'a> {
    pub id: AxisId,
    pub axis: &'a Axis,
    /// Pixel length available to the axis.
    pub length_px: f64,
    /// Desired pixel distance between ticks.
    pub tick_spacing_hint: f64,
}

/// Compute the range of one axis from every value plotted on it.
/// Under log scale, any value `<= 0` fails before a range is produced.
pub fn compute(req: RangeRequest<'_>, values: impl IntoIterator<Item = f64>) -> Result<AxisRange> {
    if !(req.tick_spacing_hint > 0.0) || !req.tick_spacing_hint.is_finite() {
        return Err(ChartError::style(
            "tick_mark_spacing_hint",
            format!("must be > 0, got {}", req.tick_spacing_hint),
        ));
    }
    let log = req.axis.is_logarithmic();

    let mut data_min = f64::INFINITY;
    let mut data_max = f64::NEG_INFINITY;
    for v in values {
        if log && v <= 0.0 {
            return Err(ChartError::NonPositiveLogValue { axis: req.id, value: v });
        }
        if v.is_finite() {
            data_min = data_min.min(v);
            data_max = data_max.max(v);
        }
    }
    let has_data = data_min <= data_max;

    for forced in [req.axis.min, req.axis.max].into_iter().flatten() {
        if log && forced <= 0.0 {
            return Err(ChartError::NonPositiveLogValue { axis: req.id, value: forced });
        }
    }

    let (empty_lo, empty_hi) = if log { (1.0, 10.0) } else { (0.0, 1.0) };
    let mut lo = req.axis.min.unwrap_or(if has_data { data_min } else { empty_lo });
    let mut hi = req.axis.max.unwrap_or(if has_data { data_max } else { empty_hi });

    if let (Some(_), Some(_)) = (req.axis.min, req.axis.max) {
        if lo > hi {
            warn!(axis = %req.id, min = lo, max = hi, "forced axis bounds are inverted; swapping");
            std::mem::swap(&mut lo, &mut hi);
        }
    }

    if hi <= lo {
        match (req.axis.min.is_some(), req.axis.max.is_some()) {
            (true, false) => hi = pad(lo, log).1,
            (false, true) => lo = pad(hi, log).0,
            _ => (lo, hi) = pad(lo, log),
        }
    }

    let tick_spacing = if log {
        1.0
    } else {
        let count = (req.length_px / req.tick_spacing_hint).floor().max(1.0);
        nice_step((hi - lo) / count)
    };

    trace!(axis = %req.id, min = lo, max = hi, tick_spacing, log, "axis range computed");
    Ok(AxisRange { min: lo, max: hi, tick_spacing, logarithmic: log })
}

/// Symmetric padding around a single value: ±10% (±1 at zero), or one decade on log axes.
fn pad(v: f64, log: bool) -> (f64, f64) {
    if log {
        return (v / 10.0, v * 10.0);
    }
    if v == 0.0 {
        return (-1.0, 1.0);
    }
    let d = v.abs() * 0.1;
    (v - d, v + d)
}
