// File: crates/chartkit-core/src/theme.rs
// Summary: Named bundles of style defaults (XChart, GGPlot2, Matlab).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::style::{StyleProperty as P, StyleValue as V};
use crate::types::{Color, FontSpec, FontStyle, LegendPosition, Marker, Stroke};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeId {
    #[default]
    XChart,
    GGPlot2,
    Matlab,
}

/// A theme only lists what it changes; anything else falls back to the library default.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub id: ThemeId,
    pub name: &'static str,
    values: HashMap<P, V>,
}

impl Theme {
    fn build(id: ThemeId, name: &'static str, values: Vec<(P, V)>) -> Self {
        Self { id, name, values: values.into_iter().collect() }
    }

    pub fn get(&self, prop: P) -> Option<&V> {
        self.values.get(&prop)
    }

    pub fn from_id(id: ThemeId) -> Self {
        match id {
            ThemeId::XChart => Self::xchart(),
            ThemeId::GGPlot2 => Self::ggplot2(),
            ThemeId::Matlab => Self::matlab(),
        }
    }

    pub fn xchart() -> Self {
        Self::build(
            ThemeId::XChart,
            "xchart",
            vec![
                (P::ChartBackgroundColor, V::Color(Color::WHITE)),
                (P::PlotBackgroundColor, V::Color(Color::rgb(243, 243, 243))),
                (P::PlotBorderColor, V::Color(Color::DARK_GREY)),
                (P::PlotGridLinesColor, V::Color(Color::GREY)),
                (P::LegendPosition, V::LegendPosition(LegendPosition::OutsideE)),
                (P::ChartTitleFont, V::Font(FontSpec::sans(FontStyle::Bold, 14.0))),
            ],
        )
    }

    pub fn ggplot2() -> Self {
        Self::build(
            ThemeId::GGPlot2,
            "ggplot2",
            vec![
                (P::ChartBackgroundColor, V::Color(Color::WHITE)),
                (P::ChartFontColor, V::Color(Color::BLACK)),
                (P::ChartTitleBoxVisible, V::Bool(false)),
                (P::PlotBackgroundColor, V::Color(Color::LIGHT_GREY)),
                (P::PlotBorderColor, V::Color(Color::WHITE)),
                (P::PlotBorderVisible, V::Bool(false)),
                (P::PlotGridLinesColor, V::Color(Color::WHITE)),
                (P::PlotGridLinesStroke, V::Stroke(Stroke::solid(1.0))),
                (P::PlotTicksMarksVisible, V::Bool(true)),
                (P::PlotContentSize, V::Float(0.95)),
                (P::LegendBackgroundColor, V::Color(Color::LIGHT_GREY)),
                (P::LegendBorderColor, V::Color(Color::WHITE)),
                (P::AxisTickLabelsColor, V::Color(Color::DARK_GREY)),
                (P::AxisTickMarksColor, V::Color(Color::DARK_GREY)),
                (P::AxisTickMarkLength, V::Int(8)),
                (
                    P::SeriesColors,
                    V::Colors(vec![
                        Color::rgb(248, 118, 109),
                        Color::rgb(196, 154, 0),
                        Color::rgb(83, 180, 0),
                        Color::rgb(0, 192, 148),
                        Color::rgb(0, 182, 235),
                        Color::rgb(165, 138, 255),
                        Color::rgb(251, 97, 215),
                    ]),
                ),
                (P::SeriesMarkers, V::Markers(vec![Marker::Circle, Marker::TriangleUp, Marker::Square, Marker::Cross])),
                (P::ErrorBarsColor, V::Color(Color::DARK_GREY)),
            ],
        )
    }

    pub fn matlab() -> Self {
        Self::build(
            ThemeId::Matlab,
            "matlab",
            vec![
                (P::ChartBackgroundColor, V::Color(Color::WHITE)),
                (P::PlotBackgroundColor, V::Color(Color::WHITE)),
                (P::PlotBorderColor, V::Color(Color::BLACK)),
                (P::PlotGridLinesColor, V::Color(Color::rgb(200, 200, 200))),
                (P::PlotGridLinesStroke, V::Stroke(Stroke::dashed(0.5, &[1.0, 3.0]))),
                (P::PlotContentSize, V::Float(0.9)),
                (P::LegendPosition, V::LegendPosition(LegendPosition::InsideNE)),
                (P::LegendBorderColor, V::Color(Color::BLACK)),
                (P::AxisTickMarksColor, V::Color(Color::BLACK)),
                (P::AxisTickMarkLength, V::Int(5)),
                (
                    P::SeriesColors,
                    V::Colors(vec![
                        Color::rgb(0, 114, 189),
                        Color::rgb(217, 83, 25),
                        Color::rgb(237, 177, 32),
                        Color::rgb(126, 47, 142),
                        Color::rgb(119, 172, 48),
                        Color::rgb(77, 190, 238),
                        Color::rgb(162, 20, 47),
                    ]),
                ),
                (P::SeriesMarkers, V::Markers(vec![Marker::None])),
                (P::SeriesLineWidth, V::Float(1.0)),
            ],
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::xchart()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::xchart(), Theme::ggplot2(), Theme::matlab()]
}

/// Find a theme by its `name`, falling back to XChart.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
