// File: crates/chartkit-core/tests/validation.rs
// Purpose: Admission rules per chart kind; every failure leaves the chart unchanged.

use chartkit_core::error::ErrorKind;
use chartkit_core::series::{OhlcSeriesRenderStyle, RenderStyle};
use chartkit_core::{AxisId, CategoryKey, Chart, ChartConfig, ChartError, ChartKind};
use chrono::NaiveDate;

fn chart(kind: ChartKind) -> Chart {
    Chart::new(kind, ChartConfig::default()).unwrap()
}

#[test]
fn empty_arrays_fail_with_empty_data() {
    let mut c = chart(ChartKind::Xy);
    let err = c.add_xy_series("e", &[], &[]).unwrap_err();
    assert!(matches!(err, ChartError::EmptyData(_)), "{err:?}");
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn mismatched_lengths_fail() {
    let mut c = chart(ChartKind::Xy);
    let err = c.add_xy_series("m", &[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
    assert_eq!(err, ChartError::LengthMismatch { what: "X and Y", expected: 3, actual: 2 });
    assert!(err.to_string().contains("sizes are not the same"));
    assert!(c.series_map().is_empty());
}

#[test]
fn missing_x_is_synthesized() {
    let mut c = chart(ChartKind::Xy);
    c.add_xy_series_auto("auto", &[5.0, 6.0, 7.0]).unwrap();
    assert_eq!(c.series_map().get("auto").unwrap().x_data().unwrap(), &[0.0, 1.0, 2.0]);
}

#[test]
fn null_elements_are_rejected() {
    let mut c = chart(ChartKind::Xy);
    let err = c.add_xy_series_nullable("n", None, &[Some(1.0), None, Some(3.0)]).unwrap_err();
    assert_eq!(err, ChartError::NullElement { what: "Y", index: 1 });

    c.add_xy_series_nullable("ok", Some(&[Some(1.0), Some(2.0)][..]), &[Some(3.0), Some(4.0)]).unwrap();
}

#[test]
fn error_bars_must_match_y() {
    let mut c = chart(ChartKind::Xy);
    let err = c
        .add_xy_series_with_error_bars("eb", &[1.0, 2.0], &[1.0, 2.0], Some(&[0.1][..]))
        .unwrap_err();
    assert!(matches!(err, ChartError::LengthMismatch { expected: 2, actual: 1, .. }));
}

#[test]
fn dates_become_epoch_millis_on_a_date_axis() {
    let mut c = chart(ChartKind::Xy);
    let d0 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap().and_utc();
    let d1 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(0, 0, 0).unwrap().and_utc();
    c.add_xy_series_dates("d", &[d0, d1], &[1.0, 2.0]).unwrap();

    let x = c.series_map().get("d").unwrap().x_data().unwrap();
    assert_eq!(x[1] - x[0], 86_400_000.0);
    assert!(c.x_axis().date);
}

#[test]
fn category_keys_must_be_homogeneous() {
    let mut c = chart(ChartKind::Category);
    let keys = vec![Some(CategoryKey::text("a")), Some(CategoryKey::Number(2.0))];
    let err = c.add_category_series_nullable("mixed", Some(keys.as_slice()), &[1.0, 2.0]).unwrap_err();
    assert_eq!(err, ChartError::HeterogeneousType { expected: "text", found: "number", index: 1 });

    let keys = vec![Some(CategoryKey::text("a")), None];
    let err = c.add_category_series_nullable("null", Some(keys.as_slice()), &[1.0, 2.0]).unwrap_err();
    assert_eq!(err, ChartError::NullElement { what: "category", index: 1 });
    assert!(c.series_map().is_empty());
}

#[test]
fn category_accepts_text_numbers_and_dates() {
    let mut c = chart(ChartKind::Category);
    c.add_category_series("text", &["a", "b", "c"], &[1.0, 2.0, 3.0]).unwrap();
    c.add_category_series("num", &[1i32, 2, 3], &[1.0, 2.0, 3.0]).unwrap();
    let days = [NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()];
    c.add_category_series("date", &days, &[1.0, 2.0]).unwrap();
    assert_eq!(c.series_map().len(), 3);

    let err = c.add_category_series("short", &["a"], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, ChartError::LengthMismatch { .. }));
}

#[test]
fn empty_category_list_is_rejected() {
    let mut c = chart(ChartKind::Category);
    let none: [&str; 0] = [];
    let err = c.add_category_series("e", &none, &[]).unwrap_err();
    assert!(matches!(err, ChartError::EmptyData(_)));
}

#[test]
fn bubble_sizes_must_match() {
    let mut c = chart(ChartKind::Bubble);
    let err = c.add_bubble_series("b", &[1.0, 2.0], &[1.0, 2.0], &[]).unwrap_err();
    assert_eq!(err, ChartError::EmptyData("bubble size"));

    let err = c.add_bubble_series("b", &[1.0, 2.0], &[1.0, 2.0], &[3.0]).unwrap_err();
    assert!(matches!(err, ChartError::LengthMismatch { expected: 2, actual: 1, .. }));

    c.add_bubble_series("b", &[1.0, 2.0], &[1.0, 2.0], &[3.0, 4.0]).unwrap();
}

#[test]
fn pie_negative_policy_is_configurable() {
    let mut c = chart(ChartKind::Pie);
    c.add_pie_series("neg", -5.0).unwrap();

    c.styler_mut().pie_style_mut().unwrap().reject_negative_values = true;
    let err = c.add_pie_series("neg2", -1.0).unwrap_err();
    assert_eq!(err, ChartError::NegativeValue { what: "pie value", value: -1.0 });
    c.add_pie_series("zero", 0.0).unwrap();

    let err = c.add_pie_series("nan", f64::NAN).unwrap_err();
    assert!(matches!(err, ChartError::NonFiniteValue { .. }));
}

#[test]
fn ohlc_arrays_must_line_up() {
    let mut c = chart(ChartKind::Ohlc);
    let err = c
        .add_ohlc_series("o", &[1.0, 2.0], &[1.0, 2.0], &[2.0, 3.0], &[0.5], &[1.5, 2.5])
        .unwrap_err();
    assert_eq!(err, ChartError::LengthMismatch { what: "open and low", expected: 2, actual: 1 });
}

#[test]
fn ohlc_line_style_needs_line_data() {
    let mut c = chart(ChartKind::Ohlc);
    c.add_ohlc_series("bars", &[1.0, 2.0], &[1.0, 2.0], &[2.0, 3.0], &[0.5, 1.5], &[1.5, 2.5]).unwrap();
    c.add_ohlc_line_series("line", &[1.0, 2.0], &[1.0, 2.0]).unwrap();

    let bars = c.series_map_mut().get_mut("bars").unwrap();
    let err = bars.set_ohlc_render_style(OhlcSeriesRenderStyle::Line).unwrap_err();
    assert!(matches!(err, ChartError::IncompatibleRenderStyle { .. }));
    assert_eq!(err.kind(), ErrorKind::IncompatibleState);
    bars.set_ohlc_render_style(OhlcSeriesRenderStyle::HiLo).unwrap();

    let line = c.series_map_mut().get_mut("line").unwrap();
    assert!(line.set_ohlc_render_style(OhlcSeriesRenderStyle::Candle).is_err());
    assert_eq!(line.render_style(), RenderStyle::Ohlc(OhlcSeriesRenderStyle::Line));
}

#[test]
fn heat_map_holds_one_series() {
    let mut c = chart(ChartKind::HeatMap);
    c.add_heat_map_series("h", &[0.0, 1.0], &[0.0, 1.0, 2.0], vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
        .unwrap();
    let err = c.add_heat_map_series("h2", &[0.0], &[0.0], vec![vec![1.0]]).unwrap_err();
    assert_eq!(err, ChartError::DuplicateSeries { kind: "HeatMap", existing: "h".into() });
    assert_eq!(err.kind(), ErrorKind::IncompatibleState);
}

#[test]
fn heat_map_matrix_shape_is_checked() {
    let mut c = chart(ChartKind::HeatMap);
    let err = c.add_heat_map_series("h", &[0.0, 1.0], &[0.0, 1.0], vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert!(matches!(err, ChartError::LengthMismatch { .. }));

    // an empty map is allowed
    c.add_heat_map_series("empty", &[], &[], Vec::new()).unwrap();
}

#[test]
fn heat_range_prefers_forced_bounds() {
    let mut c = chart(ChartKind::HeatMap);
    c.add_heat_map_series("h", &[0.0, 1.0], &[0.0], vec![vec![2.0], vec![f64::NAN]]).unwrap();
    assert_eq!(c.heat_range().unwrap(), Some((2.0, 2.0)));

    c.series_map_mut().get_mut("h").unwrap().set_heat_min(-1.0).unwrap().set_heat_max(10.0).unwrap();
    c.update_heat_map_series("h", &[0.0], &[0.0], vec![vec![3.0]]).unwrap();
    assert_eq!(c.heat_range().unwrap(), Some((-1.0, 10.0)));
}

#[test]
fn heat_bounds_need_a_heat_map_series_and_finite_values() {
    let mut c = chart(ChartKind::Xy);
    c.add_xy_series("s", &[1.0], &[1.0]).unwrap();
    let err = c.series_map_mut().get_mut("s").unwrap().set_heat_min(0.0).unwrap_err();
    assert_eq!(err, ChartError::WrongChartKind { expected: "HeatMap", actual: "XY" });
    assert!(c.series_map_mut().get_mut("s").unwrap().set_heat_max(1.0).is_err());

    let mut h = chart(ChartKind::HeatMap);
    h.add_heat_map_series("h", &[0.0], &[0.0], vec![vec![5.0]]).unwrap();
    let heat = h.series_map_mut().get_mut("h").unwrap();
    assert!(matches!(heat.set_heat_max(f64::NAN), Err(ChartError::NonFiniteValue { .. })));
    assert_eq!(h.heat_range().unwrap(), Some((5.0, 5.0)));
}

#[test]
fn dial_accepts_any_finite_value() {
    let mut c = chart(ChartKind::Dial);
    c.add_dial_series("rate", 100.0, Some("max")).unwrap();
    c.add_dial_series("low", -3.0, None).unwrap();
    assert!(c.add_dial_series("bad", f64::INFINITY, None).is_err());
    assert_eq!(c.series_map().get("rate").unwrap().value(), Some(100.0));
}

#[test]
fn box_data_rejects_null_and_empty() {
    let mut c = chart(ChartKind::Box);
    assert_eq!(c.add_box_series("e", &[]).unwrap_err(), ChartError::EmptyData("box"));
    let err = c.add_box_series_nullable("n", &[Some(1.0), None]).unwrap_err();
    assert_eq!(err, ChartError::NullElement { what: "box", index: 1 });
}

#[test]
fn update_box_series_requires_existing_name() {
    let mut c = chart(ChartKind::Box);
    let err = c.update_box_series("nope", &[1.0]).unwrap_err();
    assert_eq!(err, ChartError::NotFound("nope".into()));
}

#[test]
fn log_axis_rejects_non_positive_at_add_time() {
    let mut c = chart(ChartKind::Xy);
    c.x_axis_mut().set_logarithmic(true);
    let err = c.add_xy_series("z", &[0.0, 1.0], &[1.0, 2.0]).unwrap_err();
    assert_eq!(err, ChartError::NonPositiveLogValue { axis: AxisId::X, value: 0.0 });
    assert!(c.series_map().is_empty());

    c.y_axis_mut().set_logarithmic(true);
    let err = c.add_xy_series("neg", &[1.0, 2.0], &[1.0, -2.0]).unwrap_err();
    assert_eq!(err, ChartError::NonPositiveLogValue { axis: AxisId::Y(0), value: -2.0 });
}

#[test]
fn updates_check_the_log_scale_of_their_own_y_group() {
    let mut c = chart(ChartKind::Xy);
    c.add_xy_series("r", &[1.0, 2.0], &[1.0, 2.0]).unwrap().set_y_axis_group(1);
    c.y_axis_group_mut(1);
    c.y_axis_mut().set_logarithmic(true);

    // group 1 keeps its own linear axis
    c.update_xy_series("r", None, &[-1.0, 3.0], None).unwrap();
    assert_eq!(c.series_map().get("r").unwrap().y_data().unwrap(), &[-1.0, 3.0]);

    c.y_axis_group_mut(1).set_logarithmic(true);
    let err = c.update_xy_series("r", None, &[2.0, -1.0], None).unwrap_err();
    assert_eq!(err, ChartError::NonPositiveLogValue { axis: AxisId::Y(1), value: -1.0 });
    assert_eq!(c.series_map().get("r").unwrap().y_data().unwrap(), &[-1.0, 3.0]);
}

#[test]
fn category_and_box_updates_use_the_group_axis() {
    let mut c = chart(ChartKind::Category);
    c.add_category_series("s", &["a", "b"], &[1.0, 2.0]).unwrap().set_y_axis_group(2);
    c.y_axis_group_mut(2).set_logarithmic(true);
    let err = c.update_category_series("s", None, &[0.0, 1.0], None).unwrap_err();
    assert_eq!(err, ChartError::NonPositiveLogValue { axis: AxisId::Y(2), value: 0.0 });

    let mut b = chart(ChartKind::Box);
    b.add_box_series("s", &[1.0, 2.0]).unwrap().set_y_axis_group(1);
    b.y_axis_group_mut(1);
    b.y_axis_mut().set_logarithmic(true);
    b.update_box_series("s", &[-4.0, 2.0]).unwrap();
}

#[test]
fn methods_of_another_kind_fail() {
    let mut c = chart(ChartKind::Pie);
    let err = c.add_xy_series("x", &[1.0], &[1.0]).unwrap_err();
    assert_eq!(err, ChartError::WrongChartKind { expected: "XY", actual: "Pie" });
    assert!(c.axis_range(AxisId::X).is_err());
}
