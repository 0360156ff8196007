// File: crates/chartkit-core/src/types.rs
// Summary: Shared types and constants (sizes, colors, fonts, strokes).

use serde::{Deserialize, Serialize};

/// Default chart width in pixels.
pub const WIDTH: i32 = 800;
/// Default chart height in pixels.
pub const HEIGHT: i32 = 600;

/// Smallest accepted chart edge, in pixels.
pub const MIN_DIMENSION: i32 = 10;
/// Largest accepted chart edge, in pixels.
pub const MAX_DIMENSION: i32 = 32_767;
/// Bytes per pixel of the ARGB buffer the renderer allocates.
pub const BYTES_PER_PIXEL: i64 = 4;

/// Opaque RGBA color. The core stores and compares colors, it never blends them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const LIGHT_GREY: Color = Color::rgb(232, 232, 232);
    pub const GREY: Color = Color::rgb(128, 128, 128);
    pub const DARK_GREY: Color = Color::rgb(64, 64, 64);
    pub const TRANSPARENT: Color = Color::rgba(255, 255, 255, 0);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontStyle {
    #[default]
    Plain,
    Bold,
    Italic,
    BoldItalic,
}

/// Font descriptor handed through to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub style: FontStyle,
    pub size: f32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, style: FontStyle, size: f32) -> Self {
        Self { family: family.into(), style, size }
    }

    pub fn sans(style: FontStyle, size: f32) -> Self {
        Self::new("SansSerif", style, size)
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::sans(FontStyle::Plain, 12.0)
    }
}

/// Stroke descriptor: width in pixels plus an optional dash pattern.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f32,
    pub dash: Vec<f32>,
}

impl Stroke {
    pub fn solid(width: f32) -> Self {
        Self { width, dash: Vec::new() }
    }

    pub fn dashed(width: f32, dash: &[f32]) -> Self {
        Self { width, dash: dash.to_vec() }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::solid(1.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegendPosition {
    #[default]
    OutsideE,
    InsideNW,
    InsideNE,
    InsideSE,
    InsideSW,
    InsideN,
    InsideS,
    OutsideS,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegendLayout {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    #[default]
    Circle,
    Diamond,
    Square,
    TriangleUp,
    TriangleDown,
    Cross,
    Plus,
    Oval,
    Trapezoid,
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
    None,
}
