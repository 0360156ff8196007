// File: crates/chartkit-core/src/style.rs
// Summary: Style properties, typed values and the override-over-theme cascade.
// Notes:
// - Lookup order: per-chart override, then the active theme, then the library default.
// - Overrides are validated on the way in; themes and library defaults are trusted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, Result};
use crate::theme::Theme;
use crate::types::{Color, FontSpec, FontStyle, LegendLayout, LegendPosition, Marker, Stroke};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Color,
    Colors,
    Font,
    Stroke,
    Bool,
    Int,
    Float,
    Text,
    Markers,
    LegendPosition,
    LegendLayout,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StyleValue {
    Color(Color),
    Colors(Vec<Color>),
    Font(FontSpec),
    Stroke(Stroke),
    Bool(bool),
    Int(i32),
    Float(f64),
    Text(String),
    Markers(Vec<Marker>),
    LegendPosition(LegendPosition),
    LegendLayout(LegendLayout),
}

impl StyleValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            StyleValue::Color(_) => ValueKind::Color,
            StyleValue::Colors(_) => ValueKind::Colors,
            StyleValue::Font(_) => ValueKind::Font,
            StyleValue::Stroke(_) => ValueKind::Stroke,
            StyleValue::Bool(_) => ValueKind::Bool,
            StyleValue::Int(_) => ValueKind::Int,
            StyleValue::Float(_) => ValueKind::Float,
            StyleValue::Text(_) => ValueKind::Text,
            StyleValue::Markers(_) => ValueKind::Markers,
            StyleValue::LegendPosition(_) => ValueKind::LegendPosition,
            StyleValue::LegendLayout(_) => ValueKind::LegendLayout,
        }
    }
}

/// Value constraint attached to a property on top of its kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Domain {
    Any,
    NonNegative,
    Positive,
    /// `(0, 1]`
    Fraction,
    /// `[-360, 360]`
    Rotation,
    DecimalPattern,
}

pub(crate) fn default_series_colors() -> Vec<Color> {
    vec![
        Color::rgba(0, 55, 255, 180),
        Color::rgba(255, 172, 0, 180),
        Color::rgba(128, 255, 0, 180),
        Color::rgba(255, 0, 243, 180),
        Color::rgba(0, 255, 206, 180),
        Color::rgba(180, 68, 0, 180),
        Color::rgba(112, 0, 0, 180),
        Color::rgba(0, 15, 112, 180),
    ]
}

pub(crate) fn default_series_markers() -> Vec<Marker> {
    vec![Marker::Circle, Marker::Diamond, Marker::Square, Marker::TriangleUp, Marker::TriangleDown]
}

macro_rules! style_properties {
    ($( $variant:ident : $kind:ident, $domain:ident = $default:expr; )*) => {
        /// Identifier of one cascaded style property.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum StyleProperty {
            $( $variant, )*
        }

        impl StyleProperty {
            pub const ALL: &'static [StyleProperty] = &[ $( StyleProperty::$variant, )* ];

            pub fn name(self) -> &'static str {
                match self {
                    $( StyleProperty::$variant => stringify!($variant), )*
                }
            }

            pub fn kind(self) -> ValueKind {
                match self {
                    $( StyleProperty::$variant => ValueKind::$kind, )*
                }
            }

            fn domain(self) -> Domain {
                match self {
                    $( StyleProperty::$variant => Domain::$domain, )*
                }
            }

            /// Hard-coded fallback used when neither an override nor the theme has a value.
            pub fn library_default(self) -> StyleValue {
                match self {
                    $( StyleProperty::$variant => StyleValue::$kind($default), )*
                }
            }
        }
    };
}

style_properties! {
    // chart
    ChartBackgroundColor: Color, Any = Color::WHITE;
    ChartFontColor: Color, Any = Color::BLACK;
    ChartPadding: Int, NonNegative = 10;
    ChartTitleVisible: Bool, Any = true;
    ChartTitleFont: Font, Any = FontSpec::sans(FontStyle::Bold, 14.0);
    ChartTitleBoxVisible: Bool, Any = false;
    ChartTitleBoxBackgroundColor: Color, Any = Color::WHITE;
    ChartTitleBoxBorderColor: Color, Any = Color::WHITE;
    ChartTitlePadding: Int, NonNegative = 5;
    ChartButtonMargin: Int, NonNegative = 6;
    AntiAlias: Bool, Any = true;

    // plot area
    PlotBackgroundColor: Color, Any = Color::WHITE;
    PlotBorderColor: Color, Any = Color::DARK_GREY;
    PlotBorderVisible: Bool, Any = true;
    PlotGridLinesVisible: Bool, Any = true;
    PlotGridHorizontalLinesVisible: Bool, Any = true;
    PlotGridVerticalLinesVisible: Bool, Any = true;
    PlotGridLinesColor: Color, Any = Color::GREY;
    PlotGridLinesStroke: Stroke, Any = Stroke::dashed(1.0, &[3.0, 3.0]);
    PlotTicksMarksVisible: Bool, Any = true;
    PlotMargin: Int, NonNegative = 3;
    PlotContentSize: Float, Fraction = 0.92;

    // legend
    LegendVisible: Bool, Any = true;
    LegendBackgroundColor: Color, Any = Color::WHITE;
    LegendBorderColor: Color, Any = Color::DARK_GREY;
    LegendFont: Font, Any = FontSpec::sans(FontStyle::Plain, 11.0);
    LegendPadding: Int, NonNegative = 10;
    LegendSeriesLineLength: Int, NonNegative = 24;
    LegendPosition: LegendPosition, Any = LegendPosition::OutsideE;
    LegendLayout: LegendLayout, Any = LegendLayout::Vertical;

    // axes
    XAxisTitleVisible: Bool, Any = true;
    YAxisTitleVisible: Bool, Any = true;
    AxisTitleFont: Font, Any = FontSpec::sans(FontStyle::Plain, 12.0);
    AxisTitlePadding: Int, NonNegative = 10;
    XAxisTicksVisible: Bool, Any = true;
    YAxisTicksVisible: Bool, Any = true;
    AxisTickLabelsFont: Font, Any = FontSpec::sans(FontStyle::Plain, 12.0);
    AxisTickLabelsColor: Color, Any = Color::BLACK;
    AxisTickMarkLength: Int, NonNegative = 3;
    AxisTickPadding: Int, NonNegative = 4;
    AxisTickMarksColor: Color, Any = Color::DARK_GREY;
    AxisTickMarksStroke: Stroke, Any = Stroke::solid(1.0);
    AxisTicksLineVisible: Bool, Any = true;
    XAxisTickMarkSpacingHint: Int, Positive = 74;
    YAxisTickMarkSpacingHint: Int, Positive = 44;
    XAxisLabelRotation: Int, Rotation = 0;
    DecimalPattern: Text, DecimalPattern = String::new();
    XAxisDecimalPattern: Text, DecimalPattern = String::new();
    YAxisDecimalPattern: Text, DecimalPattern = String::new();
    DatePattern: Text, Any = String::new();

    // series
    SeriesColors: Colors, Any = default_series_colors();
    SeriesMarkers: Markers, Any = default_series_markers();
    MarkerSize: Int, NonNegative = 8;
    SeriesLineWidth: Float, Positive = 2.0;
    ErrorBarsColor: Color, Any = Color::BLACK;

    // annotations and overlays
    AnnotationsFont: Font, Any = FontSpec::sans(FontStyle::Plain, 12.0);
    AnnotationsFontColor: Color, Any = Color::BLACK;
    AnnotationTextPanelPadding: Int, NonNegative = 10;
    LabelsVisible: Bool, Any = false;
    ToolTipsEnabled: Bool, Any = false;
    ToolTipBackgroundColor: Color, Any = Color::rgb(255, 255, 220);
    ToolTipBorderColor: Color, Any = Color::DARK_GREY;
    ToolTipFont: Font, Any = FontSpec::sans(FontStyle::Plain, 12.0);
    CursorEnabled: Bool, Any = false;
    CursorColor: Color, Any = Color::BLACK;
}

/// Conversion between Rust values and [`StyleValue`].
pub trait StyleType: Sized {
    fn from_style(value: &StyleValue) -> Option<Self>;
    fn into_style(self) -> StyleValue;
}

macro_rules! impl_style_type {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl StyleType for $ty {
                fn from_style(value: &StyleValue) -> Option<Self> {
                    match value {
                        StyleValue::$variant(v) => Some(v.clone()),
                        _ => None,
                    }
                }

                fn into_style(self) -> StyleValue {
                    StyleValue::$variant(self)
                }
            }
        )*
    };
}

impl_style_type!(
    Color => Color,
    Vec<Color> => Colors,
    FontSpec => Font,
    Stroke => Stroke,
    bool => Bool,
    i32 => Int,
    f64 => Float,
    String => Text,
    Vec<Marker> => Markers,
    LegendPosition => LegendPosition,
    LegendLayout => LegendLayout,
);

/// Check a candidate override against the property's kind and domain.
pub fn validate(prop: StyleProperty, value: &StyleValue) -> Result<()> {
    let name = prop.name();
    if value.kind() != prop.kind() {
        return Err(ChartError::style(
            name,
            format!("expected a {:?} value, got {:?}", prop.kind(), value.kind()),
        ));
    }

    match value {
        StyleValue::Font(f) if !(f.size > 0.0) || !f.size.is_finite() => {
            return Err(ChartError::style(name, format!("font size must be > 0, got {}", f.size)));
        }
        StyleValue::Stroke(s) if !(s.width > 0.0) || !s.width.is_finite() => {
            return Err(ChartError::style(name, format!("stroke width must be > 0, got {}", s.width)));
        }
        StyleValue::Stroke(s) if s.dash.iter().any(|d| !(*d >= 0.0)) => {
            return Err(ChartError::style(name, "dash lengths must be >= 0"));
        }
        StyleValue::Colors(c) if c.is_empty() => {
            return Err(ChartError::style(name, "at least one color is required"));
        }
        StyleValue::Markers(m) if m.is_empty() => {
            return Err(ChartError::style(name, "at least one marker is required"));
        }
        _ => {}
    }

    let number = match value {
        StyleValue::Int(v) => Some(f64::from(*v)),
        StyleValue::Float(v) => Some(*v),
        _ => None,
    };

    match (prop.domain(), number) {
        (Domain::NonNegative, Some(v)) if !(v >= 0.0) => {
            Err(ChartError::style(name, format!("must be >= 0, got {v}")))
        }
        (Domain::Positive, Some(v)) if !(v > 0.0) || !v.is_finite() => {
            Err(ChartError::style(name, format!("must be > 0, got {v}")))
        }
        (Domain::Fraction, Some(v)) if !(v > 0.0 && v <= 1.0) => {
            Err(ChartError::style(name, format!("must be in (0, 1], got {v}")))
        }
        (Domain::Rotation, Some(v)) if !(-360.0..=360.0).contains(&v) => {
            Err(ChartError::style(name, format!("must be in [-360, 360], got {v}")))
        }
        (Domain::DecimalPattern, _) => match value {
            StyleValue::Text(p) => check_decimal_pattern(p),
            _ => Ok(()),
        },
        _ => Ok(()),
    }
}

/// Accept `DecimalFormat`-style patterns such as `#,##0.00`, `0.###E0` or `'$'#0.0;(#0.0)`.
/// The empty pattern means "choose automatically".
pub fn check_decimal_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Ok(());
    }
    let malformed = || ChartError::MalformedDecimalPattern(pattern.to_string());
    let subpatterns: Vec<&str> = split_unquoted(pattern, ';');
    if subpatterns.len() > 2 || subpatterns.iter().any(|s| s.is_empty()) {
        return Err(malformed());
    }
    for sub in subpatterns {
        if !subpattern_ok(sub) {
            return Err(malformed());
        }
    }
    Ok(())
}

fn split_unquoted(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quoted = false;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        if c == '\'' {
            quoted = !quoted;
        } else if c == sep && !quoted {
            parts.push(&s[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&s[start..]);
    parts
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Prefix,
    Integer,
    Fraction,
    Exponent,
    Suffix,
}

fn subpattern_ok(sub: &str) -> bool {
    let mut phase = Phase::Prefix;
    let mut quoted = false;
    let mut digits = 0usize;
    let mut int_zero_seen = false;
    let mut frac_hash_seen = false;
    let mut exp_zeros = 0usize;

    for c in sub.chars() {
        if c == '\'' {
            if matches!(phase, Phase::Integer | Phase::Fraction | Phase::Exponent) {
                if phase == Phase::Exponent && exp_zeros == 0 {
                    return false;
                }
                phase = Phase::Suffix;
            }
            quoted = !quoted;
            continue;
        }
        if quoted {
            continue;
        }
        let numeric = matches!(c, '#' | '0' | ',' | '.');
        match phase {
            Phase::Prefix | Phase::Suffix if !numeric => {}
            Phase::Suffix => return false,
            Phase::Prefix | Phase::Integer => {
                phase = Phase::Integer;
                match c {
                    '#' if int_zero_seen => return false,
                    '#' => digits += 1,
                    '0' => {
                        int_zero_seen = true;
                        digits += 1;
                    }
                    ',' => {}
                    '.' => phase = Phase::Fraction,
                    'E' => phase = Phase::Exponent,
                    _ => phase = Phase::Suffix,
                }
            }
            Phase::Fraction => match c {
                '0' if frac_hash_seen => return false,
                '0' => digits += 1,
                '#' => {
                    frac_hash_seen = true;
                    digits += 1;
                }
                'E' => phase = Phase::Exponent,
                ',' | '.' => return false,
                _ => phase = Phase::Suffix,
            },
            Phase::Exponent => match c {
                '0' => exp_zeros += 1,
                _ if exp_zeros == 0 => return false,
                _ if numeric => return false,
                _ => phase = Phase::Suffix,
            },
        }
    }
    !quoted && digits > 0 && (phase != Phase::Exponent || exp_zeros > 0)
}

/// Effective style of one chart: user overrides layered over a theme.
#[derive(Clone, Debug)]
pub struct StyleCascade {
    theme: Theme,
    overrides: HashMap<StyleProperty, StyleValue>,
}

impl StyleCascade {
    pub fn new(theme: Theme) -> Self {
        Self { theme, overrides: HashMap::new() }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Swap the theme. Existing overrides keep winning.
    pub fn set_theme(&mut self, theme: Theme) {
        debug!(theme = theme.name, overrides = self.overrides.len(), "theme changed");
        self.theme = theme;
    }

    pub fn resolve(&self, prop: StyleProperty) -> StyleValue {
        if let Some(v) = self.overrides.get(&prop) {
            return v.clone();
        }
        match self.theme.get(prop) {
            Some(v) => v.clone(),
            None => prop.library_default(),
        }
    }

    pub fn get<T: StyleType>(&self, prop: StyleProperty) -> Option<T> {
        T::from_style(&self.resolve(prop))
    }

    pub fn set_override(&mut self, prop: StyleProperty, value: StyleValue) -> Result<()> {
        validate(prop, &value)?;
        debug!(property = prop.name(), "style override set");
        self.overrides.insert(prop, value);
        Ok(())
    }

    pub fn set<T: StyleType>(&mut self, prop: StyleProperty, value: T) -> Result<()> {
        self.set_override(prop, value.into_style())
    }

    /// Drop an override so the theme value shows through again.
    pub fn clear_override(&mut self, prop: StyleProperty) -> Option<StyleValue> {
        self.overrides.remove(&prop)
    }

    pub fn is_customized(&self, prop: StyleProperty) -> bool {
        self.overrides.contains_key(&prop)
    }

    /// Explicitly set properties, in declaration order.
    pub fn customized(&self) -> Vec<StyleProperty> {
        let mut props: Vec<StyleProperty> = self.overrides.keys().copied().collect();
        props.sort();
        props
    }
}
