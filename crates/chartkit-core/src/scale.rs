// File: crates/chartkit-core/src/scale.rs
// Summary: Value-to-pixel transform for a computed axis range (linear or log10).

use crate::axis::AxisRange;

/// Maps values in `[vmin, vmax]` onto pixels from `start_px` to `end_px`.
/// `end_px` may be smaller than `start_px` (vertical axes grow upwards).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: f64,
    pub vmax: f64,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl ValueScale {
    pub fn new_linear(start_px: f32, end_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { start_px, end_px, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-12 {
            s.vmax = s.vmin + 1.0;
        }
        s
    }

    pub fn new_log10(start_px: f32, end_px: f32, vmin: f64, vmax: f64) -> Self {
        let eps = 1e-12;
        let vmin = if vmin <= eps { eps } else { vmin };
        let vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        Self { start_px, end_px, vmin, vmax, log: true, log_min: vmin.log10(), log_max: vmax.log10() }
    }

    pub fn from_range(range: &AxisRange, start_px: f32, end_px: f32) -> Self {
        if range.logarithmic {
            Self::new_log10(start_px, end_px, range.min, range.max)
        } else {
            Self::new_linear(start_px, end_px, range.min, range.max)
        }
    }

    fn fraction(&self, v: f64) -> f64 {
        if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            (v.max(1e-12).log10() - self.log_min) / span
        } else {
            (v - self.vmin) / (self.vmax - self.vmin)
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.start_px + (self.fraction(v) as f32) * (self.end_px - self.start_px)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let len = self.end_px - self.start_px;
        let frac = if len.abs() < f32::EPSILON { 0.0 } else { ((px - self.start_px) / len) as f64 };
        if self.log {
            10f64.powf(self.log_min + frac * (self.log_max - self.log_min))
        } else {
            self.vmin + frac * (self.vmax - self.vmin)
        }
    }
}
