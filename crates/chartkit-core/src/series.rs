// File: crates/chartkit-core/src/series.rs
// Summary: Series model: common attributes, per-kind payloads and render styles.
// Notes:
// - Payload fields are private; data only changes through the chart's validated
//   add/update calls. Style attributes are mutable through the live map, behind
//   setters that reject out-of-domain values.

use serde::{Deserialize, Serialize};

use crate::category::CategoryKey;
use crate::error::{ChartError, Result};
use crate::stats::BoxStats;
use crate::types::{Color, LineStyle, Marker};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XySeriesRenderStyle {
    #[default]
    Line,
    Scatter,
    Area,
    Step,
    StepArea,
    PolygonArea,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategorySeriesRenderStyle {
    #[default]
    Bar,
    Line,
    Area,
    Scatter,
    Stick,
    SteppedBar,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieSeriesRenderStyle {
    #[default]
    Pie,
    Donut,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OhlcSeriesRenderStyle {
    #[default]
    Candle,
    HiLo,
    Line,
}

impl OhlcSeriesRenderStyle {
    pub fn name(self) -> &'static str {
        match self {
            OhlcSeriesRenderStyle::Candle => "Candle",
            OhlcSeriesRenderStyle::HiLo => "HiLo",
            OhlcSeriesRenderStyle::Line => "Line",
        }
    }
}

/// How a series should be drawn; one variant per series family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderStyle {
    Xy(XySeriesRenderStyle),
    Category(CategorySeriesRenderStyle),
    Pie(PieSeriesRenderStyle),
    Ohlc(OhlcSeriesRenderStyle),
    Bubble,
    Box,
    HeatMap,
    Radar,
    Dial,
}

impl RenderStyle {
    pub fn name(&self) -> &'static str {
        match self {
            RenderStyle::Xy(_) => "XY",
            RenderStyle::Category(_) => "Category",
            RenderStyle::Pie(_) => "Pie",
            RenderStyle::Ohlc(s) => s.name(),
            RenderStyle::Bubble => "Bubble",
            RenderStyle::Box => "Box",
            RenderStyle::HeatMap => "HeatMap",
            RenderStyle::Radar => "Radar",
            RenderStyle::Dial => "Dial",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct XyData {
    pub(crate) x: Vec<f64>,
    pub(crate) y: Vec<f64>,
    pub(crate) error_bars: Option<Vec<f64>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BubbleData {
    pub(crate) x: Vec<f64>,
    pub(crate) y: Vec<f64>,
    pub(crate) bubble: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryData {
    pub(crate) x: Vec<CategoryKey>,
    pub(crate) y: Vec<f64>,
    pub(crate) error_bars: Option<Vec<f64>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoxData {
    pub(crate) data: Vec<f64>,
    pub(crate) stats: BoxStats,
}

/// OHLC payload: either full bars or a plain `(x, y)` line.
#[derive(Clone, Debug, PartialEq)]
pub enum OhlcData {
    Bars {
        x: Vec<f64>,
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
    },
    Line {
        x: Vec<f64>,
        y: Vec<f64>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeatMapData {
    pub(crate) x: Vec<f64>,
    pub(crate) y: Vec<f64>,
    /// `heat[xi][yi]`
    pub(crate) heat: Vec<Vec<f64>>,
    pub(crate) min: Option<f64>,
    pub(crate) max: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SeriesData {
    Xy(XyData),
    Category(CategoryData),
    Pie { value: f64 },
    Bubble(BubbleData),
    Box(BoxData),
    Ohlc(OhlcData),
    HeatMap(HeatMapData),
    Radar { values: Vec<f64> },
    Dial { value: f64, annotation: Option<String> },
}

impl SeriesData {
    pub fn kind_name(&self) -> &'static str {
        match self {
            SeriesData::Xy(_) => "XY",
            SeriesData::Category(_) => "Category",
            SeriesData::Pie { .. } => "Pie",
            SeriesData::Bubble(_) => "Bubble",
            SeriesData::Box(_) => "Box",
            SeriesData::Ohlc(_) => "OHLC",
            SeriesData::HeatMap(_) => "HeatMap",
            SeriesData::Radar { .. } => "Radar",
            SeriesData::Dial { .. } => "Dial",
        }
    }

    /// Default render style for freshly added data.
    pub(crate) fn default_render_style(&self) -> RenderStyle {
        match self {
            SeriesData::Xy(_) => RenderStyle::Xy(XySeriesRenderStyle::default()),
            SeriesData::Category(_) => RenderStyle::Category(CategorySeriesRenderStyle::default()),
            SeriesData::Pie { .. } => RenderStyle::Pie(PieSeriesRenderStyle::default()),
            SeriesData::Bubble(_) => RenderStyle::Bubble,
            SeriesData::Box(_) => RenderStyle::Box,
            SeriesData::Ohlc(OhlcData::Bars { .. }) => RenderStyle::Ohlc(OhlcSeriesRenderStyle::Candle),
            SeriesData::Ohlc(OhlcData::Line { .. }) => RenderStyle::Ohlc(OhlcSeriesRenderStyle::Line),
            SeriesData::HeatMap(_) => RenderStyle::HeatMap,
            SeriesData::Radar { .. } => RenderStyle::Radar,
            SeriesData::Dial { .. } => RenderStyle::Dial,
        }
    }
}

/// Per-series overrides; `None` defers to the chart's styler.
/// Fields are only reachable through setters so widths stay valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesStyle {
    line_color: Option<Color>,
    marker_color: Option<Color>,
    fill_color: Option<Color>,
    marker: Option<Marker>,
    line_width: Option<f32>,
    line_style: Option<LineStyle>,
}

impl SeriesStyle {
    pub fn line_color(&self) -> Option<Color> {
        self.line_color
    }

    pub fn marker_color(&self) -> Option<Color> {
        self.marker_color
    }

    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    pub fn marker(&self) -> Option<Marker> {
        self.marker
    }

    pub fn line_width(&self) -> Option<f32> {
        self.line_width
    }

    pub fn line_style(&self) -> Option<LineStyle> {
        self.line_style
    }

    pub fn set_line_color(&mut self, color: Color) -> &mut Self {
        self.line_color = Some(color);
        self
    }

    pub fn set_marker_color(&mut self, color: Color) -> &mut Self {
        self.marker_color = Some(color);
        self
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        self.fill_color = Some(color);
        self
    }

    pub fn set_marker(&mut self, marker: Marker) -> &mut Self {
        self.marker = Some(marker);
        self
    }

    /// Stroke width in pixels; must be finite and `> 0`.
    pub fn set_line_width(&mut self, width: f32) -> Result<&mut Self> {
        if !(width > 0.0) || !width.is_finite() {
            return Err(ChartError::style("line_width", format!("must be > 0, got {width}")));
        }
        self.line_width = Some(width);
        Ok(self)
    }

    pub fn set_line_style(&mut self, line_style: LineStyle) -> &mut Self {
        self.line_style = Some(line_style);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    name: String,
    label: Option<String>,
    enabled: bool,
    y_axis_group: usize,
    render_style: RenderStyle,
    style: SeriesStyle,
    data: SeriesData,
}

impl Series {
    pub(crate) fn new(name: impl Into<String>, data: SeriesData) -> Self {
        let render_style = data.default_render_style();
        Self {
            name: name.into(),
            label: None,
            enabled: true,
            y_axis_group: 0,
            render_style,
            style: SeriesStyle::default(),
            data,
        }
    }

    pub(crate) fn with_render_style(mut self, style: RenderStyle) -> Self {
        self.render_style = style;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display label: the override when set, else the name.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = Some(label.into());
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) -> &mut Self {
        self.enabled = enabled;
        self
    }

    pub fn y_axis_group(&self) -> usize {
        self.y_axis_group
    }

    pub fn set_y_axis_group(&mut self, group: usize) -> &mut Self {
        self.y_axis_group = group;
        self
    }

    pub fn render_style(&self) -> RenderStyle {
        self.render_style
    }

    /// Switch render style. The style must belong to this series' family and, for OHLC,
    /// the payload must carry the data the style draws.
    pub fn set_render_style(&mut self, style: RenderStyle) -> Result<&mut Self> {
        check_render_style(&self.name, &self.data, style)?;
        self.render_style = style;
        Ok(self)
    }

    pub fn set_xy_render_style(&mut self, style: XySeriesRenderStyle) -> Result<&mut Self> {
        self.set_render_style(RenderStyle::Xy(style))
    }

    pub fn set_category_render_style(&mut self, style: CategorySeriesRenderStyle) -> Result<&mut Self> {
        self.set_render_style(RenderStyle::Category(style))
    }

    pub fn set_ohlc_render_style(&mut self, style: OhlcSeriesRenderStyle) -> Result<&mut Self> {
        self.set_render_style(RenderStyle::Ohlc(style))
    }

    pub fn style(&self) -> &SeriesStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut SeriesStyle {
        &mut self.style
    }

    pub fn set_line_color(&mut self, color: Color) -> &mut Self {
        self.style.set_line_color(color);
        self
    }

    pub fn set_marker_color(&mut self, color: Color) -> &mut Self {
        self.style.set_marker_color(color);
        self
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        self.style.set_fill_color(color);
        self
    }

    pub fn set_marker(&mut self, marker: Marker) -> &mut Self {
        self.style.set_marker(marker);
        self
    }

    pub fn set_line_width(&mut self, width: f32) -> Result<&mut Self> {
        self.style.set_line_width(width)?;
        Ok(self)
    }

    pub fn set_line_style(&mut self, line_style: LineStyle) -> &mut Self {
        self.style.set_line_style(line_style);
        self
    }

    pub fn data(&self) -> &SeriesData {
        &self.data
    }

    /// Replace the payload, keeping every style attribute.
    pub(crate) fn replace_data(&mut self, data: SeriesData) -> Result<()> {
        check_render_style(&self.name, &data, self.render_style)?;
        self.data = data;
        Ok(())
    }

    pub(crate) fn data_mut(&mut self) -> &mut SeriesData {
        &mut self.data
    }

    /// Numeric X values, for the families that have them.
    pub fn x_data(&self) -> Option<&[f64]> {
        match &self.data {
            SeriesData::Xy(d) => Some(&d.x),
            SeriesData::Bubble(d) => Some(&d.x),
            SeriesData::Ohlc(OhlcData::Bars { x, .. }) | SeriesData::Ohlc(OhlcData::Line { x, .. }) => Some(x),
            SeriesData::HeatMap(d) => Some(&d.x),
            _ => None,
        }
    }

    /// Numeric Y values (line values for OHLC line form, raw sample for box series).
    pub fn y_data(&self) -> Option<&[f64]> {
        match &self.data {
            SeriesData::Xy(d) => Some(&d.y),
            SeriesData::Category(d) => Some(&d.y),
            SeriesData::Bubble(d) => Some(&d.y),
            SeriesData::Box(d) => Some(&d.data),
            SeriesData::Ohlc(OhlcData::Line { y, .. }) => Some(y),
            SeriesData::HeatMap(d) => Some(&d.y),
            SeriesData::Radar { values } => Some(values),
            _ => None,
        }
    }

    pub fn category_keys(&self) -> Option<&[CategoryKey]> {
        match &self.data {
            SeriesData::Category(d) => Some(&d.x),
            _ => None,
        }
    }

    pub fn error_bars(&self) -> Option<&[f64]> {
        match &self.data {
            SeriesData::Xy(d) => d.error_bars.as_deref(),
            SeriesData::Category(d) => d.error_bars.as_deref(),
            _ => None,
        }
    }

    pub fn bubble_sizes(&self) -> Option<&[f64]> {
        match &self.data {
            SeriesData::Bubble(d) => Some(&d.bubble),
            _ => None,
        }
    }

    /// Scalar value of pie and dial series.
    pub fn value(&self) -> Option<f64> {
        match &self.data {
            SeriesData::Pie { value } | SeriesData::Dial { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn box_stats(&self) -> Option<&BoxStats> {
        match &self.data {
            SeriesData::Box(d) => Some(&d.stats),
            _ => None,
        }
    }

    pub fn ohlc(&self) -> Option<&OhlcData> {
        match &self.data {
            SeriesData::Ohlc(d) => Some(d),
            _ => None,
        }
    }

    pub fn heat(&self) -> Option<&[Vec<f64>]> {
        match &self.data {
            SeriesData::HeatMap(d) => Some(&d.heat),
            _ => None,
        }
    }

    /// Lower bound of the heat color scale: forced value, else the smallest finite cell.
    pub fn heat_min(&self) -> Option<f64> {
        match &self.data {
            SeriesData::HeatMap(d) => d.min.or_else(|| fold_heat(&d.heat, f64::min)),
            _ => None,
        }
    }

    pub fn heat_max(&self) -> Option<f64> {
        match &self.data {
            SeriesData::HeatMap(d) => d.max.or_else(|| fold_heat(&d.heat, f64::max)),
            _ => None,
        }
    }

    /// Pin the lower bound of the color scale. Only heat-map series carry one.
    pub fn set_heat_min(&mut self, min: f64) -> Result<&mut Self> {
        self.heat_data_mut("heat min", min)?.min = Some(min);
        Ok(self)
    }

    pub fn set_heat_max(&mut self, max: f64) -> Result<&mut Self> {
        self.heat_data_mut("heat max", max)?.max = Some(max);
        Ok(self)
    }

    fn heat_data_mut(&mut self, what: &'static str, value: f64) -> Result<&mut HeatMapData> {
        if !value.is_finite() {
            return Err(ChartError::NonFiniteValue { what, value });
        }
        match &mut self.data {
            SeriesData::HeatMap(d) => Ok(d),
            other => Err(ChartError::WrongChartKind { expected: "HeatMap", actual: other.kind_name() }),
        }
    }
}

fn fold_heat(heat: &[Vec<f64>], f: fn(f64, f64) -> f64) -> Option<f64> {
    heat.iter().flatten().copied().filter(|v| v.is_finite()).reduce(f)
}

fn check_render_style(name: &str, data: &SeriesData, style: RenderStyle) -> Result<()> {
    let incompatible = |reason: &'static str| ChartError::IncompatibleRenderStyle {
        series: name.to_string(),
        style: style.name(),
        reason,
    };
    match (data, style) {
        (SeriesData::Ohlc(OhlcData::Bars { .. }), RenderStyle::Ohlc(OhlcSeriesRenderStyle::Line)) => {
            Err(incompatible("series has no y data for a line"))
        }
        (SeriesData::Ohlc(OhlcData::Line { .. }), RenderStyle::Ohlc(OhlcSeriesRenderStyle::Candle | OhlcSeriesRenderStyle::HiLo)) => {
            Err(incompatible("series has no open/high/low/close data"))
        }
        (SeriesData::Xy(_), RenderStyle::Xy(_))
        | (SeriesData::Category(_), RenderStyle::Category(_))
        | (SeriesData::Pie { .. }, RenderStyle::Pie(_))
        | (SeriesData::Ohlc(_), RenderStyle::Ohlc(_))
        | (SeriesData::Bubble(_), RenderStyle::Bubble)
        | (SeriesData::Box(_), RenderStyle::Box)
        | (SeriesData::HeatMap(_), RenderStyle::HeatMap)
        | (SeriesData::Radar { .. }, RenderStyle::Radar)
        | (SeriesData::Dial { .. }, RenderStyle::Dial) => Ok(()),
        _ => Err(incompatible("render style belongs to another series family")),
    }
}
