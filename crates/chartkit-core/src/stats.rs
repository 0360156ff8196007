// File: crates/chartkit-core/src/stats.rs
// Summary: Per-chart-type numeric transforms: box-plot quartiles, pie angles, radar radii.

use serde::{Deserialize, Serialize};

use crate::grid::linspace;

/// Index formula used to locate quartiles inside a sorted sample of size `n`.
/// Positions are 1-based and clamped to `[1, n]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuartileMethod {
    /// `Qi = i(n - 1) / 4`, interpolated.
    NLess1,
    /// `Qi = i(n + 1) / 4`, interpolated.
    #[default]
    NPlus1,
    /// `Qi = 1 + i(n - 1) / 4`, interpolated.
    NLess1Plus1,
    /// `Qi = i·n / 4`; an integer position averages it with the next value,
    /// a fractional one rounds up.
    Np,
}

impl QuartileMethod {
    pub const ALL: [QuartileMethod; 4] = [
        QuartileMethod::NLess1,
        QuartileMethod::NPlus1,
        QuartileMethod::NLess1Plus1,
        QuartileMethod::Np,
    ];

    /// Value of quartile `i` (1, 2 or 3) in an ascending, non-empty sample.
    pub fn quartile(self, sorted: &[f64], i: u8) -> f64 {
        let n = sorted.len() as f64;
        let i = f64::from(i);
        match self {
            QuartileMethod::NLess1 => interpolate(sorted, i * (n - 1.0) / 4.0),
            QuartileMethod::NPlus1 => interpolate(sorted, i * (n + 1.0) / 4.0),
            QuartileMethod::NLess1Plus1 => interpolate(sorted, 1.0 + i * (n - 1.0) / 4.0),
            QuartileMethod::Np => {
                let pos = i * n / 4.0;
                if pos.fract() == 0.0 {
                    let a = at(sorted, pos);
                    let b = at(sorted, pos + 1.0);
                    if a == b { a } else { (a + b) / 2.0 }
                } else {
                    at(sorted, pos.ceil())
                }
            }
        }
    }
}

/// Value at a 1-based position, clamped into the sample.
fn at(sorted: &[f64], pos: f64) -> f64 {
    let n = sorted.len();
    let idx = (pos.max(1.0) as usize).min(n);
    sorted[idx - 1]
}

fn interpolate(sorted: &[f64], pos: f64) -> f64 {
    let n = sorted.len();
    let pos = pos.clamp(1.0, n as f64);
    let lower = pos.floor() as usize;
    let frac = pos - lower as f64;
    let lo = sorted[lower - 1];
    if frac == 0.0 || lower >= n {
        return lo;
    }
    let hi = sorted[lower];
    if lo == hi { lo } else { lo + frac * (hi - lo) }
}

/// Derived box-plot fields. Outliers lie beyond `Q1 - 1.5·IQR` / `Q3 + 1.5·IQR`;
/// whiskers are the most extreme samples inside those fences.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxStats {
    pub method: QuartileMethod,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Number of samples that took part (NaN samples are skipped).
    pub count: usize,
}

impl BoxStats {
    /// Statistics of the multiset `data`; input order never matters.
    pub fn compute(data: &[f64], method: QuartileMethod) -> Self {
        let mut sorted: Vec<f64> = data.iter().copied().filter(|v| !v.is_nan()).collect();
        sorted.sort_by(f64::total_cmp);

        if sorted.is_empty() {
            return Self {
                method,
                q1: f64::NAN,
                median: f64::NAN,
                q3: f64::NAN,
                iqr: f64::NAN,
                lower_whisker: f64::NAN,
                upper_whisker: f64::NAN,
                outliers: Vec::new(),
                min: f64::NAN,
                max: f64::NAN,
                mean: f64::NAN,
                count: 0,
            };
        }

        let q1 = method.quartile(&sorted, 1);
        let median = method.quartile(&sorted, 2);
        let q3 = method.quartile(&sorted, 3);
        let iqr = q3 - q1;
        let lower_fence = q1 - 1.5 * iqr;
        let upper_fence = q3 + 1.5 * iqr;

        let outliers: Vec<f64> = sorted
            .iter()
            .copied()
            .filter(|&v| v < lower_fence || v > upper_fence)
            .collect();
        let lower_whisker = sorted.iter().copied().find(|&v| v >= lower_fence).unwrap_or(q1);
        let upper_whisker = sorted.iter().rev().copied().find(|&v| v <= upper_fence).unwrap_or(q3);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;

        Self {
            method,
            q1,
            median,
            q3,
            iqr,
            lower_whisker,
            upper_whisker,
            outliers,
            min: sorted[0],
            max: sorted[count - 1],
            mean,
            count,
        }
    }
}

/// Slice angles in degrees: `v / Σv × 360`. A zero total yields all-zero angles.
/// Mixed signs are not clamped: `[3, -1]` gives `[540, -180]`. Charts that need
/// angles within `[0, 360]` enable `PieStyle::reject_negative_values`.
pub fn pie_angles(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total == 0.0 || !total.is_finite() {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v / total * 360.0).collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClockwiseDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

/// Resolved geometry of one pie slice.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    /// Share of the enabled total, in percent.
    pub percentage: f64,
    /// Angular extent in degrees.
    pub angle: f64,
    /// Where the slice begins, in degrees, measured counter-clockwise from 3 o'clock.
    pub start_angle: f64,
}

/// Lay slices out one after another from `start_angle`. Disabled slices get a zero extent.
pub fn pie_slices<'a>(
    entries: impl IntoIterator<Item = (&'a str, f64, bool)>,
    start_angle: f64,
    direction: ClockwiseDirection,
) -> Vec<PieSlice> {
    let entries: Vec<(&str, f64, bool)> = entries.into_iter().collect();
    let enabled: Vec<f64> = entries.iter().filter(|e| e.2).map(|e| e.1).collect();
    let mut angles = pie_angles(&enabled).into_iter();

    let sign = match direction {
        ClockwiseDirection::Clockwise => -1.0,
        ClockwiseDirection::CounterClockwise => 1.0,
    };

    let mut cursor = start_angle;
    let mut out = Vec::with_capacity(entries.len());
    for (name, value, on) in entries {
        let angle = if on { angles.next().unwrap_or(0.0) } else { 0.0 };
        out.push(PieSlice {
            name: name.to_string(),
            value,
            percentage: angle / 360.0 * 100.0,
            angle,
            start_angle: cursor,
        });
        cursor += sign * angle;
    }
    out
}

/// Plot radius of a radar value in `[0, 1]`.
#[inline]
pub fn radar_radius(value: f64, max_radius: f64) -> f64 {
    value * max_radius
}

/// Offset of variable `index` (of `count`) from the radar center. Zero degrees points up,
/// variables advance clockwise.
pub fn radar_point(index: usize, count: usize, value: f64, max_radius: f64, start_angle_deg: f64) -> (f64, f64) {
    let count = count.max(1) as f64;
    let theta = (start_angle_deg + index as f64 * 360.0 / count).to_radians();
    let r = radar_radius(value, max_radius);
    (r * theta.sin(), -r * theta.cos())
}

/// Fractions of the max radius at which the radii tick rings sit.
pub fn radar_ring_values(tick_marks: usize) -> Vec<f64> {
    if tick_marks == 0 {
        return Vec::new();
    }
    linspace(0.0, 1.0, tick_marks + 1).into_iter().skip(1).collect()
}
