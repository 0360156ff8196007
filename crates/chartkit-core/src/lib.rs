// File: crates/chartkit-core/src/lib.rs
// Summary: Core library entry point; exports the chart data, validation, statistics and style API.

pub mod axis;
pub mod category;
pub mod chart;
pub mod error;
pub mod grid;
pub mod range;
pub mod scale;
pub mod series;
pub mod stats;
pub mod store;
pub mod style;
pub mod styler;
pub mod theme;
pub mod types;
pub mod validate;

pub use axis::{Axis, AxisId, AxisRange, ScaleKind};
pub use category::CategoryKey;
pub use chart::{Chart, ChartConfig, ChartKind};
pub use error::{ChartError, ErrorKind, Result};
pub use series::{RenderStyle, Series, SeriesData};
pub use stats::{BoxStats, QuartileMethod};
pub use store::SeriesStore;
pub use style::{StyleCascade, StyleProperty, StyleValue};
pub use styler::Styler;
pub use theme::{Theme, ThemeId};
pub use types::Color;
