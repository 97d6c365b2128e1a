use super::*;
use crate::animation::value::{Length, Rgba};
use crate::foundation::core::{ScrollProgress, Vec2};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn rejects_degenerate_tables() {
    assert!(InterpolationTable::new(vec![0.0], vec![1.0]).is_err());
    assert!(InterpolationTable::<f64>::new(vec![], vec![]).is_err());
    assert!(InterpolationTable::new(vec![0.0, 1.0], vec![1.0]).is_err());
    assert!(InterpolationTable::new(vec![0.0, 0.0], vec![1.0, 2.0]).is_err());
    assert!(InterpolationTable::new(vec![0.5, 0.2], vec![1.0, 2.0]).is_err());
    assert!(InterpolationTable::new(vec![0.0, f64::NAN], vec![1.0, 2.0]).is_err());
}

#[test]
fn rejects_mixed_units() {
    let err = InterpolationTable::new(
        vec![0.0, 1.0],
        vec![Length::Percent(0.0), Length::Px(100.0)],
    )
    .unwrap_err();
    assert!(err.to_string().contains("unit"));
}

#[test]
fn endpoints_clamp() {
    let t = InterpolationTable::new(vec![0.2, 0.8], vec![10.0, 20.0]).unwrap();
    for p in [-3.0, 0.0, 0.1, 0.2] {
        assert_eq!(t.map(p), 10.0);
    }
    for p in [0.8, 0.95, 1.0, 7.0] {
        assert_eq!(t.map(p), 20.0);
    }
    assert_eq!(t.map(f64::NAN), 10.0);
}

#[test]
fn clamped_progress_maps_to_endpoint_values() {
    let t = InterpolationTable::span(200.0, -200.0).unwrap();
    assert_eq!(t.map(ScrollProgress::new(-4.0)), t.map(0.0));
    assert_eq!(t.map(ScrollProgress::new(9.0)), t.map(1.0));
}

#[test]
fn two_point_midpoint_is_arithmetic_mean() {
    for (a, b) in [(0.0, 1.0), (360.0, 0.0), (-200.0, 200.0), (0.3, 0.7)] {
        let t = InterpolationTable::span(a, b).unwrap();
        assert!(approx(t.map(0.5), (a + b) / 2.0));
    }
}

#[test]
fn multi_segment_interpolates_each_segment_independently() {
    let t = InterpolationTable::new(vec![0.0, 0.2, 0.8, 1.0], vec![0.0, 0.5, 1.0, 1.0]).unwrap();
    assert!(approx(t.map(0.1), 0.25));
    assert!(approx(t.map(0.2), 0.5));
    assert!(approx(t.map(0.5), 0.75));
    assert!(approx(t.map(0.9), 1.0));
}

#[test]
fn pairs_build_the_same_table_as_parallel_vectors() {
    let pairs = InterpolationTable::from_pairs([(0.0, 0.3), (0.5, 0.7), (1.0, 1.0)]).unwrap();
    assert_eq!(pairs.inputs(), &[0.0, 0.5, 1.0]);
    assert!(approx(pairs.map(0.25), 0.5));
    assert!(InterpolationTable::from_pairs([(0.0, 1.0)]).is_err());
    assert!(InterpolationTable::from_pairs([(0.5, 1.0), (0.5, 2.0)]).is_err());
}

#[test]
fn reversing_table_changes_direction() {
    let t = InterpolationTable::new(vec![0.0, 0.5, 1.0], vec![0.0, 90.0, -90.0]).unwrap();
    assert!(approx(t.map(0.25), 45.0));
    assert!(approx(t.map(0.75), 0.0));
    assert!(approx(t.map(1.0), -90.0));
}

#[test]
fn vector_outputs_interpolate_per_component() {
    let t = InterpolationTable::span(Vec2::new(-80.0, 40.0), Vec2::new(80.0, -40.0)).unwrap();
    let mid = t.map(0.25);
    assert!(approx(mid.x, -40.0));
    assert!(approx(mid.y, 20.0));
}

#[test]
fn color_and_length_outputs() {
    let colors = InterpolationTable::span(
        Rgba::from_hex("#000000").unwrap(),
        Rgba::from_hex("#ffffff").unwrap(),
    )
    .unwrap();
    assert_eq!(colors.map(1.0).to_string(), "#ffffff");

    let widths = InterpolationTable::new(
        vec![0.5, 1.0],
        vec![Length::Percent(100.0), Length::Percent(0.0)],
    )
    .unwrap();
    assert_eq!(widths.map(0.75), Length::Percent(50.0));
}

#[test]
fn eased_segments_keep_breakpoint_values() {
    let t = InterpolationTable::span(0.0, 10.0)
        .unwrap()
        .with_ease(Ease::InQuad);
    assert!(approx(t.map(0.5), 2.5));
    assert_eq!(t.map(1.0), 10.0);
}
