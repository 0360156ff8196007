// File: crates/chartkit-core/tests/chart_config.rs
// Purpose: Construction-time dimension checks, TOML configuration and title visibility.

use chartkit_core::{Chart, ChartConfig, ChartError, ChartKind, ThemeId};

#[test]
fn defaults_are_valid() {
    let c = Chart::new(ChartKind::Xy, ChartConfig::default()).unwrap();
    assert_eq!((c.width(), c.height()), (800, 600));
    assert_eq!(c.kind(), ChartKind::Xy);
}

#[test]
fn tiny_width_is_rejected() {
    let err = Chart::new(ChartKind::Xy, ChartConfig::new(1, 600)).unwrap_err();
    assert!(matches!(err, ChartError::InvalidDimension { which: "width", value: 1, .. }));

    let err = Chart::new(ChartKind::Pie, ChartConfig::new(400, 0)).unwrap_err();
    assert!(matches!(err, ChartError::InvalidDimension { which: "height", .. }));
}

#[test]
fn huge_dimensions_are_rejected() {
    let err = ChartConfig::new(i32::MAX, 100).validate().unwrap_err();
    assert!(matches!(err, ChartError::InvalidDimension { which: "width", .. }));
    assert!(ChartConfig::new(100, -5).validate().is_err());
}

#[test]
fn pixel_buffer_must_fit_in_i32() {
    // both edges are in range but 32767 * 32767 * 4 overflows
    let err = ChartConfig::new(32_767, 32_767).validate().unwrap_err();
    assert!(matches!(err, ChartError::InvalidDimension { which: "pixel buffer", .. }));

    ChartConfig::new(10, 10).validate().unwrap();
    ChartConfig::new(20_000, 20_000).validate().unwrap();
}

#[test]
fn config_reads_from_toml_with_defaults() {
    let config: ChartConfig = toml::from_str(
        r#"
            width = 1024
            title = "Prices"
            theme = "GGPlot2"
        "#,
    )
    .unwrap();
    assert_eq!(config.width, 1024);
    assert_eq!(config.height, 600);
    assert_eq!(config.title, "Prices");
    assert_eq!(config.theme, ThemeId::GGPlot2);
    assert_eq!(config.x_axis_title, "");

    let empty: ChartConfig = toml::from_str("").unwrap();
    assert_eq!(empty, ChartConfig::default());
}

#[test]
fn builder_methods_fill_the_chart() {
    let config = ChartConfig::new(640, 480).title("T").x_axis_title("time").y_axis_title("value").theme(ThemeId::Matlab);
    let c = Chart::new(ChartKind::Xy, config).unwrap();
    assert_eq!(c.title(), "T");
    assert_eq!(c.x_axis().title, "time");
    assert_eq!(c.y_axis().title, "value");
    assert_eq!(c.styler().theme().id, ThemeId::Matlab);
}

#[test]
fn empty_title_is_never_visible() {
    let mut c = Chart::new(ChartKind::Xy, ChartConfig::default()).unwrap();
    assert!(!c.title_visible());

    c.set_title("Sales");
    assert!(c.title_visible());

    c.styler_mut().set_chart_title_visible(false).unwrap();
    assert!(!c.title_visible());
}
