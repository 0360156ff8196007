// File: crates/chartkit-core/src/chart.rs
// Summary: Chart object: validated construction, per-kind series admission and range queries.
// Notes:
// - Every add/update validates the whole payload before the store changes; a failed call
//   leaves the chart exactly as it was.
// - The renderer only reads: width(), height(), series_map(), styler().

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::axis::{Axis, AxisId, AxisRange};
use crate::category::CategoryKey;
use crate::error::{ChartError, Result};
use crate::range::{self, RangeRequest};
use crate::series::{
    BoxData, BubbleData, CategoryData, CategorySeriesRenderStyle, HeatMapData, OhlcData, OhlcSeriesRenderStyle,
    RenderStyle, Series, SeriesData, XyData,
};
use crate::stats::{pie_slices, radar_point, BoxStats, PieSlice, QuartileMethod};
use crate::store::SeriesStore;
use crate::styler::Styler;
use crate::theme::{Theme, ThemeId};
use crate::types::{BYTES_PER_PIXEL, HEIGHT, MAX_DIMENSION, MIN_DIMENSION, WIDTH};
use crate::validate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Xy,
    Category,
    Pie,
    Bubble,
    Box,
    Ohlc,
    HeatMap,
    Radar,
    Dial,
}

impl ChartKind {
    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Xy => "XY",
            ChartKind::Category => "Category",
            ChartKind::Pie => "Pie",
            ChartKind::Bubble => "Bubble",
            ChartKind::Box => "Box",
            ChartKind::Ohlc => "OHLC",
            ChartKind::HeatMap => "HeatMap",
            ChartKind::Radar => "Radar",
            ChartKind::Dial => "Dial",
        }
    }

    /// Kinds drawn on X/Y axes.
    pub fn has_axes(self) -> bool {
        !matches!(self, ChartKind::Pie | ChartKind::Radar | ChartKind::Dial)
    }
}

/// Construction options. Missing TOML/serde fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: i32,
    pub height: i32,
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub theme: ThemeId,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            title: String::new(),
            x_axis_title: String::new(),
            y_axis_title: String::new(),
            theme: ThemeId::XChart,
        }
    }
}

impl ChartConfig {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn x_axis_title(mut self, title: impl Into<String>) -> Self {
        self.x_axis_title = title.into();
        self
    }

    pub fn y_axis_title(mut self, title: impl Into<String>) -> Self {
        self.y_axis_title = title.into();
        self
    }

    pub fn theme(mut self, theme: ThemeId) -> Self {
        self.theme = theme;
        self
    }

    /// Both edges must lie in `[MIN_DIMENSION, MAX_DIMENSION]` and the ARGB pixel buffer
    /// must stay addressable by an `i32`.
    pub fn validate(&self) -> Result<()> {
        for (which, value) in [("width", self.width), ("height", self.height)] {
            if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
                return Err(ChartError::InvalidDimension {
                    which,
                    value: i64::from(value),
                    min: i64::from(MIN_DIMENSION),
                    max: i64::from(MAX_DIMENSION),
                });
            }
        }
        let bytes = i64::from(self.width) * i64::from(self.height) * BYTES_PER_PIXEL;
        if bytes > i64::from(i32::MAX) {
            return Err(ChartError::InvalidDimension {
                which: "pixel buffer",
                value: bytes,
                min: 0,
                max: i64::from(i32::MAX),
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    kind: ChartKind,
    width: i32,
    height: i32,
    title: String,
    x_axis: Axis,
    y_axis: Axis,
    y_group_axes: BTreeMap<usize, Axis>,
    styler: Styler,
    series: SeriesStore,
    radii_labels: Vec<Option<String>>,
}

impl Chart {
    pub fn new(kind: ChartKind, config: ChartConfig) -> Result<Self> {
        config.validate()?;
        debug!(kind = kind.name(), width = config.width, height = config.height, "chart created");
        Ok(Self {
            kind,
            width: config.width,
            height: config.height,
            title: config.title,
            x_axis: Axis::new(config.x_axis_title),
            y_axis: Axis::new(config.y_axis_title),
            y_group_axes: BTreeMap::new(),
            styler: Styler::new(kind, Theme::from_id(config.theme)),
            series: SeriesStore::new(),
            radii_labels: Vec::new(),
        })
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    /// An empty title is never drawn, whatever the styler says.
    pub fn title_visible(&self) -> bool {
        !self.title.is_empty() && self.styler.is_chart_title_visible()
    }

    pub fn styler(&self) -> &Styler {
        &self.styler
    }

    pub fn styler_mut(&mut self) -> &mut Styler {
        &mut self.styler
    }

    /// Swap the theme; explicitly set style properties survive.
    pub fn set_theme(&mut self, theme: ThemeId) -> &mut Self {
        self.styler.set_theme(Theme::from_id(theme));
        self
    }

    /// Live view of the series; removing or clearing through it changes the chart.
    pub fn series_map(&self) -> &SeriesStore {
        &self.series
    }

    pub fn series_map_mut(&mut self) -> &mut SeriesStore {
        &mut self.series
    }

    pub fn remove_series(&mut self, name: &str) -> Option<Series> {
        self.series.remove(name)
    }

    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    pub fn x_axis_mut(&mut self) -> &mut Axis {
        &mut self.x_axis
    }

    /// Primary Y axis; also the configuration of groups without their own.
    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    pub fn y_axis_mut(&mut self) -> &mut Axis {
        &mut self.y_axis
    }

    pub fn y_axis_group(&self, group: usize) -> &Axis {
        self.y_group_axes.get(&group).unwrap_or(&self.y_axis)
    }

    /// Give `group` its own Y axis configuration, seeded from the primary axis.
    pub fn y_axis_group_mut(&mut self, group: usize) -> &mut Axis {
        if group == 0 {
            return &mut self.y_axis;
        }
        let seed = self.y_axis.clone();
        self.y_group_axes.entry(group).or_insert(seed)
    }

    fn expect_kind(&self, expected: ChartKind) -> Result<()> {
        if self.kind != expected {
            return Err(ChartError::WrongChartKind { expected: expected.name(), actual: self.kind.name() });
        }
        Ok(())
    }

    /// Y axis group a series is drawn against; new series start on group 0.
    fn group_of(&self, name: &str) -> usize {
        self.series.get(name).map_or(0, Series::y_axis_group)
    }

    fn check_log_y(&self, group: usize, y: &[f64]) -> Result<()> {
        if self.y_axis_group(group).is_logarithmic() {
            validate::log_positive(AxisId::Y(group), y)?;
        }
        Ok(())
    }

    fn check_log(&self, group: usize, x: &[f64], y: &[f64]) -> Result<()> {
        if self.x_axis.is_logarithmic() {
            validate::log_positive(AxisId::X, x)?;
        }
        self.check_log_y(group, y)
    }

    fn admit(&mut self, name: &str, data: SeriesData, style: RenderStyle) -> Result<&mut Series> {
        self.series.add(Series::new(name, data).with_render_style(style))
    }

    // ---- XY -------------------------------------------------------------------

    fn xy_render_style(&self) -> RenderStyle {
        RenderStyle::Xy(self.styler.xy_style().map(|s| s.default_render_style).unwrap_or_default())
    }

    fn xy_payload(&self, group: usize, x: Vec<f64>, y: Vec<f64>, error_bars: Option<&[f64]>) -> Result<SeriesData> {
        let error_bars = validate::error_bars(error_bars, y.len())?;
        self.check_log(group, &x, &y)?;
        Ok(SeriesData::Xy(XyData { x, y, error_bars }))
    }

    pub fn add_xy_series(&mut self, name: &str, x: &[f64], y: &[f64]) -> Result<&mut Series> {
        self.add_xy_series_with_error_bars(name, x, y, None)
    }

    /// X is synthesized as `0..n-1`.
    pub fn add_xy_series_auto(&mut self, name: &str, y: &[f64]) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Xy)?;
        let (x, y) = validate::xy(None, y)?;
        let data = self.xy_payload(0, x, y, None)?;
        let style = self.xy_render_style();
        self.admit(name, data, style)
    }

    pub fn add_xy_series_with_error_bars(
        &mut self,
        name: &str,
        x: &[f64],
        y: &[f64],
        error_bars: Option<&[f64]>,
    ) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Xy)?;
        let (x, y) = validate::xy(Some(x), y)?;
        let data = self.xy_payload(0, x, y, error_bars)?;
        let style = self.xy_render_style();
        self.admit(name, data, style)
    }

    /// List form: any `None` element is rejected.
    pub fn add_xy_series_nullable(
        &mut self,
        name: &str,
        x: Option<&[Option<f64>]>,
        y: &[Option<f64>],
    ) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Xy)?;
        let (x, y) = validate::xy(x, y)?;
        let data = self.xy_payload(0, x, y, None)?;
        let style = self.xy_render_style();
        self.admit(name, data, style)
    }

    /// Date-valued X data, stored as epoch milliseconds; flags the X axis as a date axis.
    pub fn add_xy_series_dates(&mut self, name: &str, x: &[DateTime<Utc>], y: &[f64]) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Xy)?;
        let millis: Vec<f64> = x.iter().map(|d| d.timestamp_millis() as f64).collect();
        let (x, y) = validate::xy(Some(millis.as_slice()), y)?;
        let data = self.xy_payload(0, x, y, None)?;
        let style = self.xy_render_style();
        let series = self.series.add(Series::new(name, data).with_render_style(style))?;
        self.x_axis.date = true;
        Ok(series)
    }

    pub fn update_xy_series(
        &mut self,
        name: &str,
        x: Option<&[f64]>,
        y: &[f64],
        error_bars: Option<&[f64]>,
    ) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Xy)?;
        let (x, y) = validate::xy(x, y)?;
        let data = self.xy_payload(self.group_of(name), x, y, error_bars)?;
        self.series.update(name, data)
    }

    // ---- Bubble ---------------------------------------------------------------

    pub fn add_bubble_series(&mut self, name: &str, x: &[f64], y: &[f64], bubble: &[f64]) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Bubble)?;
        let data = self.bubble_payload(0, Some(x), y, bubble)?;
        self.admit(name, data, RenderStyle::Bubble)
    }

    pub fn update_bubble_series(
        &mut self,
        name: &str,
        x: Option<&[f64]>,
        y: &[f64],
        bubble: &[f64],
    ) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Bubble)?;
        let data = self.bubble_payload(self.group_of(name), x, y, bubble)?;
        self.series.update(name, data)
    }

    fn bubble_payload(&self, group: usize, x: Option<&[f64]>, y: &[f64], bubble: &[f64]) -> Result<SeriesData> {
        let (x, y, bubble) = validate::bubble(x, y, bubble)?;
        self.check_log(group, &x, &y)?;
        Ok(SeriesData::Bubble(BubbleData { x, y, bubble }))
    }

    // ---- Category -------------------------------------------------------------

    fn category_payload(
        &self,
        group: usize,
        keys: Option<&[Option<CategoryKey>]>,
        y: &[f64],
        error_bars: Option<&[f64]>,
    ) -> Result<SeriesData> {
        let (x, y) = validate::category(keys, y)?;
        let error_bars = validate::error_bars(error_bars, y.len())?;
        self.check_log_y(group, &y)?;
        Ok(SeriesData::Category(CategoryData { x, y, error_bars }))
    }

    pub fn add_category_series<K>(&mut self, name: &str, x: &[K], y: &[f64]) -> Result<&mut Series>
    where
        K: Clone + Into<CategoryKey>,
    {
        self.add_category_series_with_error_bars(name, x, y, None)
    }

    pub fn add_category_series_with_error_bars<K>(
        &mut self,
        name: &str,
        x: &[K],
        y: &[f64],
        error_bars: Option<&[f64]>,
    ) -> Result<&mut Series>
    where
        K: Clone + Into<CategoryKey>,
    {
        self.expect_kind(ChartKind::Category)?;
        let keys: Vec<Option<CategoryKey>> = x.iter().cloned().map(|k| Some(k.into())).collect();
        let data = self.category_payload(0, Some(keys.as_slice()), y, error_bars)?;
        let style = RenderStyle::Category(
            self.styler.category_style().map(|s| s.default_render_style).unwrap_or_default(),
        );
        self.admit(name, data, style)
    }

    /// List form: `None` keys are rejected; omitted keys become `0..n-1`.
    pub fn add_category_series_nullable(
        &mut self,
        name: &str,
        x: Option<&[Option<CategoryKey>]>,
        y: &[f64],
    ) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Category)?;
        let data = self.category_payload(0, x, y, None)?;
        let style = RenderStyle::Category(
            self.styler.category_style().map(|s| s.default_render_style).unwrap_or_default(),
        );
        self.admit(name, data, style)
    }

    pub fn update_category_series(
        &mut self,
        name: &str,
        x: Option<&[CategoryKey]>,
        y: &[f64],
        error_bars: Option<&[f64]>,
    ) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Category)?;
        let keys: Option<Vec<Option<CategoryKey>>> = x.map(|x| x.iter().cloned().map(Some).collect());
        let data = self.category_payload(self.group_of(name), keys.as_deref(), y, error_bars)?;
        self.series.update(name, data)
    }

    // ---- Pie ------------------------------------------------------------------

    fn pie_value(&self, value: f64) -> Result<f64> {
        let reject = self.styler.pie_style().is_some_and(|s| s.reject_negative_values);
        validate::pie(value, reject)
    }

    pub fn add_pie_series(&mut self, name: &str, value: f64) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Pie)?;
        let value = self.pie_value(value)?;
        let style = RenderStyle::Pie(self.styler.pie_style().map(|s| s.default_render_style).unwrap_or_default());
        self.admit(name, SeriesData::Pie { value }, style)
    }

    pub fn update_pie_series(&mut self, name: &str, value: f64) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Pie)?;
        let value = self.pie_value(value)?;
        self.series.update(name, SeriesData::Pie { value })
    }

    /// Slice geometry in insertion order; disabled slices have a zero extent.
    pub fn pie_slices(&self) -> Result<Vec<PieSlice>> {
        self.expect_kind(ChartKind::Pie)?;
        let (start, direction) = self
            .styler
            .pie_style()
            .map(|s| (s.start_angle(), s.direction))
            .unwrap_or_default();
        let entries = self
            .series
            .iter()
            .map(|s| (s.name(), s.value().unwrap_or(0.0), s.is_enabled()));
        Ok(pie_slices(entries, start, direction))
    }

    // ---- Box ------------------------------------------------------------------

    fn quartile_method(&self) -> QuartileMethod {
        self.styler.box_style().map(|s| s.quartile_method()).unwrap_or_default()
    }

    fn box_payload(&self, group: usize, data: Vec<f64>) -> Result<SeriesData> {
        self.check_log_y(group, &data)?;
        let stats = BoxStats::compute(&data, self.quartile_method());
        Ok(SeriesData::Box(BoxData { data, stats }))
    }

    pub fn add_box_series(&mut self, name: &str, data: &[f64]) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Box)?;
        let data = self.box_payload(0, validate::box_data(data)?)?;
        self.admit(name, data, RenderStyle::Box)
    }

    /// List form: any `None` element is rejected.
    pub fn add_box_series_nullable(&mut self, name: &str, data: &[Option<f64>]) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Box)?;
        let data = self.box_payload(0, validate::box_data(data)?)?;
        self.admit(name, data, RenderStyle::Box)
    }

    pub fn update_box_series(&mut self, name: &str, data: &[f64]) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Box)?;
        let data = self.box_payload(self.group_of(name), validate::box_data(data)?)?;
        self.series.update(name, data)
    }

    /// Switch the quartile method and recompute every box series.
    pub fn set_quartile_method(&mut self, method: QuartileMethod) -> Result<&mut Self> {
        self.expect_kind(ChartKind::Box)?;
        if let Some(style) = self.styler.box_style_mut() {
            style.set_quartile_method(method);
        }
        for series in self.series.iter_mut() {
            if let SeriesData::Box(d) = series.data_mut() {
                d.stats = BoxStats::compute(&d.data, method);
            }
        }
        debug!(?method, "box statistics recomputed");
        Ok(self)
    }

    // ---- OHLC -----------------------------------------------------------------

    fn ohlc_bars(
        &self,
        group: usize,
        x: Option<&[f64]>,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<SeriesData> {
        let a = validate::ohlc(x, open, high, low, close)?;
        if self.x_axis.is_logarithmic() {
            validate::log_positive(AxisId::X, &a.x)?;
        }
        for values in [&a.open, &a.high, &a.low, &a.close] {
            self.check_log_y(group, values)?;
        }
        Ok(SeriesData::Ohlc(OhlcData::Bars { x: a.x, open: a.open, high: a.high, low: a.low, close: a.close }))
    }

    fn ohlc_line(&self, group: usize, x: Option<&[f64]>, y: &[f64]) -> Result<SeriesData> {
        let (x, y) = validate::xy(x, y)?;
        self.check_log(group, &x, &y)?;
        Ok(SeriesData::Ohlc(OhlcData::Line { x, y }))
    }

    pub fn add_ohlc_series(
        &mut self,
        name: &str,
        x: &[f64],
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Ohlc)?;
        let data = self.ohlc_bars(0, Some(x), open, high, low, close)?;
        let style = match self.styler.ohlc_style().map(|s| s.default_render_style).unwrap_or_default() {
            OhlcSeriesRenderStyle::Line => OhlcSeriesRenderStyle::Candle,
            other => other,
        };
        self.admit(name, data, RenderStyle::Ohlc(style))
    }

    /// Line form: only `(x, y)`; the series can never be drawn as candles.
    pub fn add_ohlc_line_series(&mut self, name: &str, x: &[f64], y: &[f64]) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Ohlc)?;
        let data = self.ohlc_line(0, Some(x), y)?;
        self.admit(name, data, RenderStyle::Ohlc(OhlcSeriesRenderStyle::Line))
    }

    pub fn update_ohlc_series(
        &mut self,
        name: &str,
        x: Option<&[f64]>,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Ohlc)?;
        let data = self.ohlc_bars(self.group_of(name), x, open, high, low, close)?;
        self.series.update(name, data)
    }

    pub fn update_ohlc_line_series(&mut self, name: &str, x: Option<&[f64]>, y: &[f64]) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Ohlc)?;
        let data = self.ohlc_line(self.group_of(name), x, y)?;
        self.series.update(name, data)
    }

    // ---- Heat map -------------------------------------------------------------

    /// A heat map chart holds at most one series.
    pub fn add_heat_map_series(
        &mut self,
        name: &str,
        x: &[f64],
        y: &[f64],
        heat: Vec<Vec<f64>>,
    ) -> Result<&mut Series> {
        self.expect_kind(ChartKind::HeatMap)?;
        if let Some(existing) = self.series.first() {
            return Err(ChartError::DuplicateSeries { kind: ChartKind::HeatMap.name(), existing: existing.name().to_string() });
        }
        validate::heat_map(x, y, &heat)?;
        let data = HeatMapData { x: x.to_vec(), y: y.to_vec(), heat, min: None, max: None };
        self.admit(name, SeriesData::HeatMap(data), RenderStyle::HeatMap)
    }

    /// Replace the matrix; forced min/max stay in place.
    pub fn update_heat_map_series(
        &mut self,
        name: &str,
        x: &[f64],
        y: &[f64],
        heat: Vec<Vec<f64>>,
    ) -> Result<&mut Series> {
        self.expect_kind(ChartKind::HeatMap)?;
        validate::heat_map(x, y, &heat)?;
        let (min, max) = match self.series.get(name).map(Series::data) {
            Some(SeriesData::HeatMap(d)) => (d.min, d.max),
            Some(_) => (None, None),
            None => return Err(ChartError::NotFound(name.to_string())),
        };
        let data = HeatMapData { x: x.to_vec(), y: y.to_vec(), heat, min, max };
        self.series.update(name, SeriesData::HeatMap(data))
    }

    /// Color-scale bounds of the heat map: forced values, else the finite matrix extremes.
    pub fn heat_range(&self) -> Result<Option<(f64, f64)>> {
        self.expect_kind(ChartKind::HeatMap)?;
        Ok(self.series.first().and_then(|s| Some((s.heat_min()?, s.heat_max()?))))
    }

    // ---- Radar ----------------------------------------------------------------

    fn radar_label_count(&self) -> Option<usize> {
        (!self.radii_labels.is_empty()).then_some(self.radii_labels.len())
    }

    pub fn add_radar_series(&mut self, name: &str, values: &[f64]) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Radar)?;
        let values = validate::radar(values, self.radar_label_count())?;
        self.admit(name, SeriesData::Radar { values }, RenderStyle::Radar)
    }

    pub fn update_radar_series(&mut self, name: &str, values: &[f64]) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Radar)?;
        let values = validate::radar(values, self.radar_label_count())?;
        self.series.update(name, SeriesData::Radar { values })
    }

    pub fn radii_labels(&self) -> &[Option<String>] {
        &self.radii_labels
    }

    /// Variable labels around the radar; individual labels may be absent.
    /// The count must match every series already present.
    pub fn set_radii_labels(&mut self, labels: Vec<Option<String>>) -> Result<&mut Self> {
        self.expect_kind(ChartKind::Radar)?;
        for s in self.series.iter() {
            if let SeriesData::Radar { values } = s.data() {
                if values.len() != labels.len() {
                    return Err(ChartError::LengthMismatch {
                        what: "radii labels and radar values",
                        expected: values.len(),
                        actual: labels.len(),
                    });
                }
            }
        }
        self.radii_labels = labels;
        Ok(self)
    }

    /// Polygon vertices of a radar series as offsets from the center.
    pub fn radar_points(&self, name: &str, max_radius: f64) -> Result<Vec<(f64, f64)>> {
        self.expect_kind(ChartKind::Radar)?;
        let series = self.series.get(name).ok_or_else(|| ChartError::NotFound(name.to_string()))?;
        let start = self.styler.radar_style().map(|s| s.start_angle()).unwrap_or(0.0);
        let values = series.y_data().unwrap_or_default();
        Ok(values
            .iter()
            .enumerate()
            .map(|(i, v)| radar_point(i, values.len(), *v, max_radius, start))
            .collect())
    }

    // ---- Dial -----------------------------------------------------------------

    pub fn add_dial_series(&mut self, name: &str, value: f64, annotation: Option<&str>) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Dial)?;
        let value = validate::dial(value)?;
        let data = SeriesData::Dial { value, annotation: annotation.map(str::to_string) };
        self.admit(name, data, RenderStyle::Dial)
    }

    pub fn update_dial_series(&mut self, name: &str, value: f64, annotation: Option<&str>) -> Result<&mut Series> {
        self.expect_kind(ChartKind::Dial)?;
        let value = validate::dial(value)?;
        let data = SeriesData::Dial { value, annotation: annotation.map(str::to_string) };
        self.series.update(name, data)
    }

    // ---- Ranges ---------------------------------------------------------------

    /// Range and tick spacing of one axis over the enabled series plotted on it.
    pub fn axis_range(&self, id: AxisId) -> Result<AxisRange> {
        if !self.kind.has_axes() {
            return Err(ChartError::WrongChartKind { expected: "axis-based", actual: self.kind.name() });
        }
        let padding = f64::from(self.styler.chart_padding()) * 2.0;
        let (axis, length_px, hint) = match id {
            AxisId::X => (
                &self.x_axis,
                f64::from(self.width) - padding,
                self.styler.x_axis_tick_mark_spacing_hint(),
            ),
            AxisId::Y(group) => (
                self.y_axis_group(group),
                f64::from(self.height) - padding,
                self.styler.y_axis_tick_mark_spacing_hint(),
            ),
        };
        let values = self.axis_values(id, axis.is_logarithmic());
        let req = RangeRequest { id, axis, length_px: length_px.max(1.0), tick_spacing_hint: f64::from(hint) };
        range::compute(req, values)
    }

    fn axis_values(&self, id: AxisId, log: bool) -> Vec<f64> {
        let on_axis = |s: &&Series| match id {
            AxisId::X => true,
            AxisId::Y(group) => s.y_axis_group() == group,
        };
        let series: Vec<&Series> = self.series.enabled().filter(on_axis).collect();
        let mut out = Vec::new();

        match (self.kind, id) {
            (ChartKind::Box, AxisId::X) => out.extend((0..series.len()).map(|i| i as f64)),
            (ChartKind::Category, AxisId::X) => {
                for s in &series {
                    if let Some(keys) = s.category_keys() {
                        out.extend(keys.iter().enumerate().map(|(i, k)| k.as_f64().unwrap_or(i as f64)));
                    }
                }
            }
            (ChartKind::Category, AxisId::Y(_)) => self.category_y_values(&series, log, &mut out),
            (_, AxisId::X) => {
                for s in &series {
                    out.extend_from_slice(s.x_data().unwrap_or_default());
                }
            }
            (_, AxisId::Y(_)) => {
                for s in &series {
                    match s.data() {
                        SeriesData::Box(d) => {
                            out.extend([d.stats.lower_whisker, d.stats.upper_whisker]);
                            out.extend_from_slice(&d.stats.outliers);
                        }
                        SeriesData::Ohlc(OhlcData::Bars { open, high, low, close, .. }) => {
                            for v in [open, high, low, close] {
                                out.extend_from_slice(v);
                            }
                        }
                        _ => {
                            let y = s.y_data().unwrap_or_default();
                            out.extend_from_slice(y);
                            if let Some(err) = s.error_bars() {
                                out.extend(y.iter().zip(err).flat_map(|(v, e)| [v - e, v + e]));
                            }
                        }
                    }
                }
            }
        }
        out
    }

    /// Stacked charts range over per-category sums; bar-like styles include the zero baseline.
    fn category_y_values(&self, series: &[&Series], log: bool, out: &mut Vec<f64>) {
        let stacked = self.styler.category_style().is_some_and(|s| s.stacked);
        if stacked {
            // a side only counts at an index once some series contributed to it
            let mut pos: Vec<Option<f64>> = Vec::new();
            let mut neg: Vec<Option<f64>> = Vec::new();
            for s in series {
                for (i, v) in s.y_data().unwrap_or_default().iter().enumerate() {
                    if i >= pos.len() {
                        pos.resize(i + 1, None);
                        neg.resize(i + 1, None);
                    }
                    if *v >= 0.0 {
                        pos[i] = Some(pos[i].unwrap_or(0.0) + v);
                    } else if *v < 0.0 {
                        neg[i] = Some(neg[i].unwrap_or(0.0) + v);
                    }
                }
            }
            out.extend(pos.into_iter().flatten());
            out.extend(neg.into_iter().flatten());
        } else {
            for s in series {
                let y = s.y_data().unwrap_or_default();
                out.extend_from_slice(y);
                if let Some(err) = s.error_bars() {
                    out.extend(y.iter().zip(err).flat_map(|(v, e)| [v - e, v + e]));
                }
            }
        }
        let bar_like = series.iter().any(|s| {
            matches!(
                s.render_style(),
                RenderStyle::Category(
                    CategorySeriesRenderStyle::Bar
                        | CategorySeriesRenderStyle::SteppedBar
                        | CategorySeriesRenderStyle::Stick
                        | CategorySeriesRenderStyle::Area
                )
            )
        });
        if bar_like && !log && !out.is_empty() {
            out.push(0.0);
        }
    }
}
