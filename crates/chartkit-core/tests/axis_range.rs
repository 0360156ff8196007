// File: crates/chartkit-core/tests/axis_range.rs
// Purpose: Auto-range behavior: extents, forced bounds, degenerate padding, log decades, tick steps.

use chartkit_core::axis::nice_step;
use chartkit_core::{AxisId, AxisRange, Chart, ChartConfig, ChartError, ChartKind};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

fn chart(kind: ChartKind) -> Chart {
    Chart::new(kind, ChartConfig::default()).unwrap()
}

#[test]
fn range_covers_data_extents() {
    let mut c = chart(ChartKind::Xy);
    c.add_xy_series("a", &[1.0, 2.0, 3.0], &[-4.0, 10.0, 2.0]).unwrap();
    c.add_xy_series("b", &[0.5, 7.0], &[3.0, 3.0]).unwrap();

    let x = c.axis_range(AxisId::X).unwrap();
    assert_eq!((x.min, x.max), (0.5, 7.0));
    let y = c.axis_range(AxisId::Y(0)).unwrap();
    assert_eq!((y.min, y.max), (-4.0, 10.0));
    assert!(!y.logarithmic);
}

#[test]
fn constant_series_is_padded_symmetrically() {
    let mut c = chart(ChartKind::Xy);
    c.add_xy_series("flat", &[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]).unwrap();
    let y = c.axis_range(AxisId::Y(0)).unwrap();
    assert!(y.min < 5.0 && y.max > 5.0);
    assert!(approx(5.0 - y.min, y.max - 5.0));
    assert!(approx(y.min, 4.5) && approx(y.max, 5.5));
}

#[test]
fn all_zero_series_spans_minus_one_to_one() {
    let mut c = chart(ChartKind::Xy);
    c.add_xy_series("zeros", &[1.0, 2.0], &[0.0, 0.0]).unwrap();
    let y = c.axis_range(AxisId::Y(0)).unwrap();
    assert_eq!((y.min, y.max), (-1.0, 1.0));
}

#[test]
fn empty_chart_gets_a_unit_range() {
    let c = chart(ChartKind::Xy);
    let x = c.axis_range(AxisId::X).unwrap();
    assert_eq!((x.min, x.max), (0.0, 1.0));
}

#[test]
fn non_finite_values_do_not_stretch_the_range() {
    let mut c = chart(ChartKind::Xy);
    c.add_xy_series("odd", &[1.0, 2.0, 3.0], &[f64::NAN, 2.0, f64::INFINITY]).unwrap();
    c.add_xy_series("ok", &[1.0, 2.0], &[1.0, 3.0]).unwrap();
    let y = c.axis_range(AxisId::Y(0)).unwrap();
    assert_eq!((y.min, y.max), (1.0, 3.0));
}

#[test]
fn disabled_series_are_ignored() {
    let mut c = chart(ChartKind::Xy);
    c.add_xy_series("shown", &[1.0, 2.0], &[1.0, 2.0]).unwrap();
    c.add_xy_series("hidden", &[1.0, 2.0], &[100.0, 200.0]).unwrap().set_enabled(false);
    let y = c.axis_range(AxisId::Y(0)).unwrap();
    assert_eq!((y.min, y.max), (1.0, 2.0));
}

#[test]
fn error_bars_widen_the_y_range() {
    let mut c = chart(ChartKind::Xy);
    c.add_xy_series_with_error_bars("e", &[1.0, 2.0], &[1.0, 2.0], Some(&[0.5, 1.0][..])).unwrap();
    let y = c.axis_range(AxisId::Y(0)).unwrap();
    assert_eq!((y.min, y.max), (0.5, 3.0));
}

#[test]
fn forced_bounds_win_over_data() {
    let mut c = chart(ChartKind::Xy);
    c.add_xy_series("a", &[1.0, 2.0], &[5.0, 10.0]).unwrap();
    c.y_axis_mut().set_min(Some(0.0)).set_max(Some(100.0));
    let y = c.axis_range(AxisId::Y(0)).unwrap();
    assert_eq!((y.min, y.max), (0.0, 100.0));
}

#[test]
fn inverted_forced_bounds_are_swapped() {
    let mut c = chart(ChartKind::Xy);
    c.add_xy_series("a", &[1.0, 2.0], &[5.0, 10.0]).unwrap();
    c.y_axis_mut().set_min(Some(10.0)).set_max(Some(0.0));
    let y = c.axis_range(AxisId::Y(0)).unwrap();
    assert_eq!((y.min, y.max), (0.0, 10.0));
}

#[test]
fn single_forced_bound_beyond_data_keeps_a_positive_span() {
    let mut c = chart(ChartKind::Xy);
    c.add_xy_series("a", &[1.0, 2.0], &[5.0, 10.0]).unwrap();
    c.y_axis_mut().set_min(Some(20.0));
    let y = c.axis_range(AxisId::Y(0)).unwrap();
    assert_eq!(y.min, 20.0);
    assert!(y.max > y.min);
}

#[test]
fn log_axis_reports_decades() {
    let mut c = chart(ChartKind::Xy);
    c.y_axis_mut().set_logarithmic(true);
    c.add_xy_series("a", &[1.0, 2.0], &[3.0, 300.0]).unwrap();

    let y = c.axis_range(AxisId::Y(0)).unwrap();
    assert!(y.logarithmic);
    assert_eq!((y.min, y.max), (3.0, 300.0));
    assert_eq!(y.tick_spacing, 1.0);
    assert_eq!(y.ticks(), vec![10.0, 100.0]);
}

#[test]
fn log_axis_pads_a_single_value_by_a_decade() {
    let mut c = chart(ChartKind::Xy);
    c.y_axis_mut().set_logarithmic(true);
    c.add_xy_series("a", &[1.0, 2.0], &[100.0, 100.0]).unwrap();
    let y = c.axis_range(AxisId::Y(0)).unwrap();
    assert!(approx(y.min, 10.0) && approx(y.max, 1000.0));
}

#[test]
fn empty_log_axis_spans_one_decade() {
    let mut c = chart(ChartKind::Xy);
    c.x_axis_mut().set_logarithmic(true);
    let x = c.axis_range(AxisId::X).unwrap();
    assert_eq!((x.min, x.max), (1.0, 10.0));
}

#[test]
fn switching_to_log_after_admission_fails_at_range_time() {
    let mut c = chart(ChartKind::Xy);
    c.add_xy_series("a", &[1.0, 2.0], &[0.0, 5.0]).unwrap();
    c.y_axis_mut().set_logarithmic(true);
    let err = c.axis_range(AxisId::Y(0)).unwrap_err();
    assert_eq!(err, ChartError::NonPositiveLogValue { axis: AxisId::Y(0), value: 0.0 });
}

#[test]
fn forced_non_positive_bound_on_log_axis_fails() {
    let mut c = chart(ChartKind::Xy);
    c.y_axis_mut().set_logarithmic(true).set_min(Some(0.0));
    c.add_xy_series("a", &[1.0, 2.0], &[1.0, 5.0]).unwrap();
    assert!(matches!(c.axis_range(AxisId::Y(0)), Err(ChartError::NonPositiveLogValue { .. })));
}

#[test]
fn y_groups_range_independently() {
    let mut c = chart(ChartKind::Xy);
    c.add_xy_series("left", &[1.0, 2.0], &[1.0, 2.0]).unwrap();
    c.add_xy_series("right", &[1.0, 2.0], &[100.0, 200.0]).unwrap().set_y_axis_group(1);
    c.y_axis_group_mut(1).set_logarithmic(true);

    let left = c.axis_range(AxisId::Y(0)).unwrap();
    assert_eq!((left.min, left.max), (1.0, 2.0));
    assert!(!left.logarithmic);

    let right = c.axis_range(AxisId::Y(1)).unwrap();
    assert_eq!((right.min, right.max), (100.0, 200.0));
    assert!(right.logarithmic);
}

#[test]
fn tick_step_follows_the_spacing_hint() {
    let mut c = chart(ChartKind::Xy);
    c.add_xy_series("a", &[0.0, 100.0], &[0.0, 1.0]).unwrap();

    // 800px wide minus 2 x 10px padding, 74px hint: ten intervals
    assert!(approx(c.axis_range(AxisId::X).unwrap().tick_spacing, 10.0));

    c.styler_mut().set_x_axis_tick_mark_spacing_hint(390).unwrap();
    assert!(approx(c.axis_range(AxisId::X).unwrap().tick_spacing, 50.0));

    assert!(c.styler_mut().set_x_axis_tick_mark_spacing_hint(0).is_err());
}

#[test]
fn stacked_categories_range_over_sums() {
    let mut c = chart(ChartKind::Category);
    c.styler_mut().category_style_mut().unwrap().stacked = true;
    c.add_category_series("a", &["p", "q", "r"], &[1.0, 2.0, 3.0]).unwrap();
    c.add_category_series("b", &["p", "q", "r"], &[4.0, -5.0, 6.0]).unwrap();

    let y = c.axis_range(AxisId::Y(0)).unwrap();
    assert_eq!((y.min, y.max), (-5.0, 9.0));

    c.styler_mut().category_style_mut().unwrap().stacked = false;
    let y = c.axis_range(AxisId::Y(0)).unwrap();
    assert_eq!((y.min, y.max), (-5.0, 6.0));
}

#[test]
fn stacked_positive_categories_on_a_log_axis() {
    let mut c = chart(ChartKind::Category);
    c.styler_mut().category_style_mut().unwrap().stacked = true;
    c.y_axis_mut().set_logarithmic(true);
    c.add_category_series("a", &["p", "q"], &[1.0, 2.0]).unwrap();
    c.add_category_series("b", &["p", "q"], &[3.0, 4.0]).unwrap();

    // no negative side exists, so no zero sum reaches the log check
    let y = c.axis_range(AxisId::Y(0)).unwrap();
    assert!(y.logarithmic);
    assert_eq!((y.min, y.max), (4.0, 6.0));
}

#[test]
fn bars_include_the_zero_baseline() {
    let mut c = chart(ChartKind::Category);
    c.add_category_series("a", &["p", "q"], &[5.0, 8.0]).unwrap();
    let y = c.axis_range(AxisId::Y(0)).unwrap();
    assert_eq!((y.min, y.max), (0.0, 8.0));

    let x = c.axis_range(AxisId::X).unwrap();
    assert_eq!((x.min, x.max), (0.0, 1.0));
}

#[test]
fn box_range_spans_whiskers_and_outliers() {
    let mut c = chart(ChartKind::Box);
    c.add_box_series("a", &[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
    c.add_box_series("b", &[2.0, 3.0, 4.0]).unwrap();

    let y = c.axis_range(AxisId::Y(0)).unwrap();
    assert_eq!((y.min, y.max), (1.0, 100.0));

    let x = c.axis_range(AxisId::X).unwrap();
    assert_eq!((x.min, x.max), (0.0, 1.0));
}

#[test]
fn ohlc_range_spans_every_price() {
    let mut c = chart(ChartKind::Ohlc);
    c.add_ohlc_series("p", &[1.0, 2.0], &[10.0, 11.0], &[12.0, 15.0], &[8.0, 9.5], &[11.0, 10.0]).unwrap();
    let y = c.axis_range(AxisId::Y(0)).unwrap();
    assert_eq!((y.min, y.max), (8.0, 15.0));
}

#[test]
fn axisless_kinds_have_no_ranges() {
    for kind in [ChartKind::Pie, ChartKind::Radar, ChartKind::Dial] {
        let c = chart(kind);
        assert!(matches!(c.axis_range(AxisId::X), Err(ChartError::WrongChartKind { .. })));
    }
}

#[test]
fn nice_step_rounds_up_to_one_two_five() {
    assert_eq!(nice_step(1.0), 1.0);
    assert!(approx(nice_step(0.13), 0.2));
    assert!(approx(nice_step(3.0), 5.0));
    assert!(approx(nice_step(7.0), 10.0));
    assert!(approx(nice_step(1500.0), 2000.0));
    assert_eq!(nice_step(0.0), 1.0);
    assert_eq!(nice_step(f64::NAN), 1.0);
}

#[test]
fn linear_ticks_are_step_multiples() {
    let r = AxisRange { min: -10.0, max: 10.0, tick_spacing: 5.0, logarithmic: false };
    assert_eq!(r.ticks(), vec![-10.0, -5.0, 0.0, 5.0, 10.0]);

    let r = AxisRange { min: 0.3, max: 2.9, tick_spacing: 1.0, logarithmic: false };
    assert_eq!(r.ticks(), vec![1.0, 2.0]);
}

#[test]
fn tick_positions_map_onto_pixels() {
    let r = AxisRange { min: 0.0, max: 10.0, tick_spacing: 5.0, logarithmic: false };
    let pos = r.tick_positions(0.0, 100.0);
    assert_eq!(pos.len(), 3);
    assert!((pos[1].1 - 50.0).abs() < 1e-3);
    assert!((pos[2].1 - 100.0).abs() < 1e-3);
}
