// File: crates/chartkit-core/src/styler.rs
// Summary: Chart styler: typed accessors over the cascade plus one style struct per chart kind.

use serde::{Deserialize, Serialize};

use crate::chart::ChartKind;
use crate::error::{ChartError, Result};
use crate::series::{CategorySeriesRenderStyle, OhlcSeriesRenderStyle, PieSeriesRenderStyle, SeriesStyle, XySeriesRenderStyle};
use crate::stats::{radar_ring_values, ClockwiseDirection, QuartileMethod};
use crate::style::{StyleCascade, StyleProperty};
use crate::theme::Theme;
use crate::types::{Color, FontSpec, LegendLayout, LegendPosition, LineStyle, Marker, Stroke};

fn unit_interval(property: &'static str, v: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&v) {
        return Err(ChartError::style(property, format!("must be in [0, 1], got {v}")));
    }
    Ok(v)
}

fn finite(property: &'static str, v: f64) -> Result<f64> {
    if !v.is_finite() {
        return Err(ChartError::style(property, format!("must be finite, got {v}")));
    }
    Ok(v)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct XyStyle {
    pub default_render_style: XySeriesRenderStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryStyle {
    pub default_render_style: CategorySeriesRenderStyle,
    pub stacked: bool,
    pub overlapped: bool,
    available_space_fill: f64,
}

impl Default for CategoryStyle {
    fn default() -> Self {
        Self {
            default_render_style: CategorySeriesRenderStyle::Bar,
            stacked: false,
            overlapped: false,
            available_space_fill: 0.9,
        }
    }
}

impl CategoryStyle {
    pub fn available_space_fill(&self) -> f64 {
        self.available_space_fill
    }

    /// Share of each category slot the bars occupy, in `(0, 1]`.
    pub fn set_available_space_fill(&mut self, fill: f64) -> Result<&mut Self> {
        if !(fill > 0.0 && fill <= 1.0) {
            return Err(ChartError::style("available_space_fill", format!("must be in (0, 1], got {fill}")));
        }
        self.available_space_fill = fill;
        Ok(self)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieStyle {
    pub default_render_style: PieSeriesRenderStyle,
    pub direction: ClockwiseDirection,
    /// Reject negative slice values on add and update. When off, a mixed-sign
    /// pie yields slice angles outside `[0, 360]` (see `stats::pie_angles`).
    pub reject_negative_values: bool,
    pub sum_visible: bool,
    start_angle: f64,
    donut_thickness: f64,
}

impl Default for PieStyle {
    fn default() -> Self {
        Self {
            default_render_style: PieSeriesRenderStyle::Pie,
            direction: ClockwiseDirection::Clockwise,
            reject_negative_values: false,
            sum_visible: false,
            start_angle: 0.0,
            donut_thickness: 0.33,
        }
    }
}

impl PieStyle {
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    pub fn set_start_angle(&mut self, degrees: f64) -> Result<&mut Self> {
        self.start_angle = finite("start_angle", degrees)?;
        Ok(self)
    }

    pub fn donut_thickness(&self) -> f64 {
        self.donut_thickness
    }

    pub fn set_donut_thickness(&mut self, thickness: f64) -> Result<&mut Self> {
        self.donut_thickness = unit_interval("donut_thickness", thickness)?;
        Ok(self)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoxStyle {
    quartile_method: QuartileMethod,
    pub outliers_visible: bool,
}

impl BoxStyle {
    pub fn quartile_method(&self) -> QuartileMethod {
        self.quartile_method
    }

    /// Changing the method invalidates stored statistics; the chart recomputes them.
    pub(crate) fn set_quartile_method(&mut self, method: QuartileMethod) {
        self.quartile_method = method;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OhlcStyle {
    pub default_render_style: OhlcSeriesRenderStyle,
    pub up_color: Color,
    pub down_color: Color,
}

impl Default for OhlcStyle {
    fn default() -> Self {
        Self {
            default_render_style: OhlcSeriesRenderStyle::Candle,
            up_color: Color::rgb(19, 179, 70),
            down_color: Color::rgb(230, 17, 17),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeatMapStyle {
    pub value_visible: bool,
    pub piecewise: bool,
    range_colors: Vec<Color>,
    split_number: usize,
}

impl Default for HeatMapStyle {
    fn default() -> Self {
        Self {
            value_visible: false,
            piecewise: false,
            range_colors: vec![Color::rgb(255, 255, 255), Color::rgb(255, 0, 0)],
            split_number: 5,
        }
    }
}

impl HeatMapStyle {
    pub fn range_colors(&self) -> &[Color] {
        &self.range_colors
    }

    pub fn set_range_colors(&mut self, colors: Vec<Color>) -> Result<&mut Self> {
        if colors.is_empty() {
            return Err(ChartError::style("range_colors", "at least one color is required"));
        }
        self.range_colors = colors;
        Ok(self)
    }

    pub fn split_number(&self) -> usize {
        self.split_number
    }

    /// Number of legend buckets in piecewise mode; at least one.
    pub fn set_split_number(&mut self, n: usize) -> Result<&mut Self> {
        if n == 0 {
            return Err(ChartError::style("split_number", "must be > 0"));
        }
        self.split_number = n;
        Ok(self)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RadarRenderStyle {
    #[default]
    Polygon,
    Circle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadarStyle {
    pub render_style: RadarRenderStyle,
    pub variable_labels_visible: bool,
    /// Number of concentric tick rings.
    pub tick_marks: usize,
    start_angle: f64,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            render_style: RadarRenderStyle::Polygon,
            variable_labels_visible: true,
            tick_marks: 5,
            start_angle: 0.0,
        }
    }
}

impl RadarStyle {
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    pub fn set_start_angle(&mut self, degrees: f64) -> Result<&mut Self> {
        self.start_angle = finite("start_angle", degrees)?;
        Ok(self)
    }

    /// Ring radii as fractions of the max radius.
    pub fn ring_values(&self) -> Vec<f64> {
        radar_ring_values(self.tick_marks)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DialStyle {
    pub label_visible: bool,
    arc_angle: f64,
    donut_thickness: f64,
    green_range: (f64, f64),
    red_range: (f64, f64),
}

impl Default for DialStyle {
    fn default() -> Self {
        Self {
            label_visible: true,
            arc_angle: 270.0,
            donut_thickness: 0.15,
            green_range: (0.0, 0.0),
            red_range: (0.0, 0.0),
        }
    }
}

impl DialStyle {
    pub fn arc_angle(&self) -> f64 {
        self.arc_angle
    }

    /// Sweep of the dial in degrees, `(0, 360]`.
    pub fn set_arc_angle(&mut self, degrees: f64) -> Result<&mut Self> {
        if !(degrees > 0.0 && degrees <= 360.0) {
            return Err(ChartError::style("arc_angle", format!("must be in (0, 360], got {degrees}")));
        }
        self.arc_angle = degrees;
        Ok(self)
    }

    pub fn donut_thickness(&self) -> f64 {
        self.donut_thickness
    }

    pub fn set_donut_thickness(&mut self, thickness: f64) -> Result<&mut Self> {
        self.donut_thickness = unit_interval("donut_thickness", thickness)?;
        Ok(self)
    }

    pub fn green_range(&self) -> (f64, f64) {
        self.green_range
    }

    pub fn set_green_range(&mut self, from: f64, to: f64) -> Result<&mut Self> {
        self.green_range = ordered_fractions("green_range", from, to)?;
        Ok(self)
    }

    pub fn red_range(&self) -> (f64, f64) {
        self.red_range
    }

    pub fn set_red_range(&mut self, from: f64, to: f64) -> Result<&mut Self> {
        self.red_range = ordered_fractions("red_range", from, to)?;
        Ok(self)
    }
}

fn ordered_fractions(property: &'static str, from: f64, to: f64) -> Result<(f64, f64)> {
    let from = unit_interval(property, from)?;
    let to = unit_interval(property, to)?;
    if from > to {
        return Err(ChartError::style(property, format!("start {from} is after end {to}")));
    }
    Ok((from, to))
}

/// Kind-specific styling, selected by the chart kind at construction.
#[derive(Clone, Debug, PartialEq)]
pub enum KindStyle {
    /// XY and bubble charts.
    Xy(XyStyle),
    Category(CategoryStyle),
    Pie(PieStyle),
    Box(BoxStyle),
    Ohlc(OhlcStyle),
    HeatMap(HeatMapStyle),
    Radar(RadarStyle),
    Dial(DialStyle),
}

impl KindStyle {
    pub fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Xy | ChartKind::Bubble => KindStyle::Xy(XyStyle::default()),
            ChartKind::Category => KindStyle::Category(CategoryStyle::default()),
            ChartKind::Pie => KindStyle::Pie(PieStyle::default()),
            ChartKind::Box => KindStyle::Box(BoxStyle::default()),
            ChartKind::Ohlc => KindStyle::Ohlc(OhlcStyle::default()),
            ChartKind::HeatMap => KindStyle::HeatMap(HeatMapStyle::default()),
            ChartKind::Radar => KindStyle::Radar(RadarStyle::default()),
            ChartKind::Dial => KindStyle::Dial(DialStyle::default()),
        }
    }
}

/// Fully resolved drawing attributes of one series.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSeriesStyle {
    pub line_color: Color,
    pub marker_color: Color,
    pub fill_color: Color,
    pub marker: Marker,
    pub line_width: f32,
    pub line_style: LineStyle,
}

#[derive(Clone, Debug)]
pub struct Styler {
    cascade: StyleCascade,
    kind: KindStyle,
}

macro_rules! kind_style_accessors {
    ($( $get:ident, $get_mut:ident => $variant:ident($ty:ty); )*) => {
        impl Styler {
            $(
                pub fn $get(&self) -> Option<&$ty> {
                    match &self.kind {
                        KindStyle::$variant(s) => Some(s),
                        _ => None,
                    }
                }

                pub fn $get_mut(&mut self) -> Option<&mut $ty> {
                    match &mut self.kind {
                        KindStyle::$variant(s) => Some(s),
                        _ => None,
                    }
                }
            )*
        }
    };
}

kind_style_accessors! {
    xy_style, xy_style_mut => Xy(XyStyle);
    category_style, category_style_mut => Category(CategoryStyle);
    pie_style, pie_style_mut => Pie(PieStyle);
    box_style, box_style_mut => Box(BoxStyle);
    ohlc_style, ohlc_style_mut => Ohlc(OhlcStyle);
    heat_map_style, heat_map_style_mut => HeatMap(HeatMapStyle);
    radar_style, radar_style_mut => Radar(RadarStyle);
    dial_style, dial_style_mut => Dial(DialStyle);
}

macro_rules! style_accessors {
    ($( $get:ident, $set:ident => $prop:ident: $ty:ty; )*) => {
        impl Styler {
            $(
                pub fn $get(&self) -> $ty {
                    self.cascade.get::<$ty>(StyleProperty::$prop).unwrap_or_default()
                }

                pub fn $set(&mut self, value: $ty) -> Result<&mut Self> {
                    self.cascade.set(StyleProperty::$prop, value)?;
                    Ok(self)
                }
            )*
        }
    };
}

style_accessors! {
    chart_background_color, set_chart_background_color => ChartBackgroundColor: Color;
    chart_font_color, set_chart_font_color => ChartFontColor: Color;
    chart_padding, set_chart_padding => ChartPadding: i32;
    is_chart_title_visible, set_chart_title_visible => ChartTitleVisible: bool;
    chart_title_font, set_chart_title_font => ChartTitleFont: FontSpec;
    is_chart_title_box_visible, set_chart_title_box_visible => ChartTitleBoxVisible: bool;
    chart_title_box_background_color, set_chart_title_box_background_color => ChartTitleBoxBackgroundColor: Color;
    chart_title_box_border_color, set_chart_title_box_border_color => ChartTitleBoxBorderColor: Color;
    chart_title_padding, set_chart_title_padding => ChartTitlePadding: i32;
    chart_button_margin, set_chart_button_margin => ChartButtonMargin: i32;
    is_anti_alias, set_anti_alias => AntiAlias: bool;

    plot_background_color, set_plot_background_color => PlotBackgroundColor: Color;
    plot_border_color, set_plot_border_color => PlotBorderColor: Color;
    is_plot_border_visible, set_plot_border_visible => PlotBorderVisible: bool;
    is_plot_grid_lines_visible, set_plot_grid_lines_visible => PlotGridLinesVisible: bool;
    is_plot_grid_horizontal_lines_visible, set_plot_grid_horizontal_lines_visible => PlotGridHorizontalLinesVisible: bool;
    is_plot_grid_vertical_lines_visible, set_plot_grid_vertical_lines_visible => PlotGridVerticalLinesVisible: bool;
    plot_grid_lines_color, set_plot_grid_lines_color => PlotGridLinesColor: Color;
    plot_grid_lines_stroke, set_plot_grid_lines_stroke => PlotGridLinesStroke: Stroke;
    is_plot_ticks_marks_visible, set_plot_ticks_marks_visible => PlotTicksMarksVisible: bool;
    plot_margin, set_plot_margin => PlotMargin: i32;
    plot_content_size, set_plot_content_size => PlotContentSize: f64;

    is_legend_visible, set_legend_visible => LegendVisible: bool;
    legend_background_color, set_legend_background_color => LegendBackgroundColor: Color;
    legend_border_color, set_legend_border_color => LegendBorderColor: Color;
    legend_font, set_legend_font => LegendFont: FontSpec;
    legend_padding, set_legend_padding => LegendPadding: i32;
    legend_series_line_length, set_legend_series_line_length => LegendSeriesLineLength: i32;
    legend_position, set_legend_position => LegendPosition: LegendPosition;
    legend_layout, set_legend_layout => LegendLayout: LegendLayout;

    is_x_axis_title_visible, set_x_axis_title_visible => XAxisTitleVisible: bool;
    is_y_axis_title_visible, set_y_axis_title_visible => YAxisTitleVisible: bool;
    axis_title_font, set_axis_title_font => AxisTitleFont: FontSpec;
    axis_title_padding, set_axis_title_padding => AxisTitlePadding: i32;
    is_x_axis_ticks_visible, set_x_axis_ticks_visible => XAxisTicksVisible: bool;
    is_y_axis_ticks_visible, set_y_axis_ticks_visible => YAxisTicksVisible: bool;
    axis_tick_labels_font, set_axis_tick_labels_font => AxisTickLabelsFont: FontSpec;
    axis_tick_labels_color, set_axis_tick_labels_color => AxisTickLabelsColor: Color;
    axis_tick_mark_length, set_axis_tick_mark_length => AxisTickMarkLength: i32;
    axis_tick_padding, set_axis_tick_padding => AxisTickPadding: i32;
    axis_tick_marks_color, set_axis_tick_marks_color => AxisTickMarksColor: Color;
    axis_tick_marks_stroke, set_axis_tick_marks_stroke => AxisTickMarksStroke: Stroke;
    is_axis_ticks_line_visible, set_axis_ticks_line_visible => AxisTicksLineVisible: bool;
    x_axis_tick_mark_spacing_hint, set_x_axis_tick_mark_spacing_hint => XAxisTickMarkSpacingHint: i32;
    y_axis_tick_mark_spacing_hint, set_y_axis_tick_mark_spacing_hint => YAxisTickMarkSpacingHint: i32;
    x_axis_label_rotation, set_x_axis_label_rotation => XAxisLabelRotation: i32;
    decimal_pattern, set_decimal_pattern => DecimalPattern: String;
    x_axis_decimal_pattern, set_x_axis_decimal_pattern => XAxisDecimalPattern: String;
    y_axis_decimal_pattern, set_y_axis_decimal_pattern => YAxisDecimalPattern: String;
    date_pattern, set_date_pattern => DatePattern: String;

    series_colors, set_series_colors => SeriesColors: Vec<Color>;
    series_markers, set_series_markers => SeriesMarkers: Vec<Marker>;
    marker_size, set_marker_size => MarkerSize: i32;
    series_line_width, set_series_line_width => SeriesLineWidth: f64;
    error_bars_color, set_error_bars_color => ErrorBarsColor: Color;

    annotations_font, set_annotations_font => AnnotationsFont: FontSpec;
    annotations_font_color, set_annotations_font_color => AnnotationsFontColor: Color;
    annotation_text_panel_padding, set_annotation_text_panel_padding => AnnotationTextPanelPadding: i32;
    is_labels_visible, set_labels_visible => LabelsVisible: bool;
    is_tool_tips_enabled, set_tool_tips_enabled => ToolTipsEnabled: bool;
    tool_tip_background_color, set_tool_tip_background_color => ToolTipBackgroundColor: Color;
    tool_tip_border_color, set_tool_tip_border_color => ToolTipBorderColor: Color;
    tool_tip_font, set_tool_tip_font => ToolTipFont: FontSpec;
    is_cursor_enabled, set_cursor_enabled => CursorEnabled: bool;
    cursor_color, set_cursor_color => CursorColor: Color;
}

impl Styler {
    pub fn new(kind: ChartKind, theme: Theme) -> Self {
        Self { cascade: StyleCascade::new(theme), kind: KindStyle::for_kind(kind) }
    }

    pub fn cascade(&self) -> &StyleCascade {
        &self.cascade
    }

    pub fn cascade_mut(&mut self) -> &mut StyleCascade {
        &mut self.cascade
    }

    pub fn theme(&self) -> &Theme {
        self.cascade.theme()
    }

    pub fn set_theme(&mut self, theme: Theme) -> &mut Self {
        self.cascade.set_theme(theme);
        self
    }

    pub fn kind_style(&self) -> &KindStyle {
        &self.kind
    }

    /// Palette color for the series at insertion `index`, cycling through the palette.
    pub fn series_color(&self, index: usize) -> Color {
        let colors = self.series_colors();
        if colors.is_empty() {
            return Color::BLACK;
        }
        colors[index % colors.len()]
    }

    pub fn series_marker(&self, index: usize) -> Marker {
        let markers = self.series_markers();
        if markers.is_empty() {
            return Marker::None;
        }
        markers[index % markers.len()]
    }

    /// Merge a series' own overrides with the palette entry for its position.
    pub fn resolve_series_style(&self, index: usize, own: &SeriesStyle) -> ResolvedSeriesStyle {
        let base = self.series_color(index);
        let line_color = own.line_color().unwrap_or(base);
        ResolvedSeriesStyle {
            line_color,
            marker_color: own.marker_color().unwrap_or(line_color),
            fill_color: own.fill_color().unwrap_or(line_color),
            marker: own.marker().unwrap_or_else(|| self.series_marker(index)),
            line_width: own.line_width().unwrap_or(self.series_line_width() as f32),
            line_style: own.line_style().unwrap_or_default(),
        }
    }
}
