// File: crates/chartkit-core/src/axis.rs
// Summary: Axis configuration (title, forced bounds, scale kind) and the derived AxisRange.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scale::ValueScale;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleKind {
    #[default]
    Linear,
    Log10,
}

/// Which axis a range query targets: the X axis or the Y axis of one axis group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisId {
    X,
    Y(usize),
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisId::X => f.write_str("X axis"),
            AxisId::Y(0) => f.write_str("Y axis"),
            AxisId::Y(group) => write!(f, "Y axis (group {group})"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Axis {
    pub title: String,
    /// User-forced lower bound; wins over data.
    pub min: Option<f64>,
    /// User-forced upper bound; wins over data.
    pub max: Option<f64>,
    pub kind: ScaleKind,
    /// Values are epoch milliseconds.
    pub date: bool,
}

impl Axis {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    pub fn is_logarithmic(&self) -> bool {
        self.kind == ScaleKind::Log10
    }

    pub fn set_logarithmic(&mut self, log: bool) -> &mut Self {
        self.kind = if log { ScaleKind::Log10 } else { ScaleKind::Linear };
        self
    }

    pub fn set_min(&mut self, min: Option<f64>) -> &mut Self {
        self.min = min;
        self
    }

    pub fn set_max(&mut self, max: Option<f64>) -> &mut Self {
        self.max = max;
        self
    }
}

/// Derived range of one axis. For log axes `tick_spacing` is in decades.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub tick_spacing: f64,
    pub logarithmic: bool,
}

/// Upper bound on generated ticks; a pathological span never allocates unbounded memory.
const MAX_TICKS: usize = 1_000;

impl AxisRange {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Tick values inside `[min, max]`: multiples of the step, or whole powers of ten on log axes.
    pub fn ticks(&self) -> Vec<f64> {
        if self.logarithmic {
            let lo = self.min.log10().ceil() as i32;
            let hi = self.max.log10().floor() as i32;
            if hi < lo {
                return vec![self.min, self.max];
            }
            return (lo..=hi).take(MAX_TICKS).map(|k| 10f64.powi(k)).collect();
        }

        let step = self.tick_spacing;
        if !(step > 0.0) || !step.is_finite() {
            return vec![self.min, self.max];
        }
        let start = (self.min / step).ceil() * step;
        let eps = step * 1e-9;
        (0..MAX_TICKS)
            .map(|i| start + step * i as f64)
            .take_while(|v| *v <= self.max + eps)
            // clear rounding residue around zero
            .map(|v| if v.abs() < eps { 0.0 } else { v })
            .collect()
    }

    /// Ticks paired with their pixel offset along an axis from `start_px` (min) to `end_px` (max).
    pub fn tick_positions(&self, start_px: f32, end_px: f32) -> Vec<(f64, f32)> {
        let scale = ValueScale::from_range(self, start_px, end_px);
        self.ticks().into_iter().map(|t| (t, scale.to_px(t))).collect()
    }
}

/// Smallest 1/2/5 × 10^k step that is at least `raw`.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw > 0.0) || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}
