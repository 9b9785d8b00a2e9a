use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;
use chart_interaction::core::{
    AnyElement, ArcElement, BarElement, ChartElement, PointElement, PointerPosition,
};
use chart_interaction::interaction::nearest_to;

#[test]
fn point_range_is_strictly_inside_radius_plus_hit_radius() {
    let point = PointElement::new(0, 10.0, 10.0)
        .with_radius(3.0)
        .with_hit_radius(2.0);

    assert!(point.in_range(14.9, 10.0));
    assert!(!point.in_range(15.0, 10.0));
    assert!(point.in_range(13.0, 13.0));
    assert!(!point.in_range(14.0, 14.0));
}

#[test]
fn point_label_range_ignores_y() {
    let point = PointElement::new(0, 10.0, 10.0);
    assert!(point.in_label_range(12.0, 500.0));
    assert!(!point.in_label_range(14.0, 10.0));
}

#[test]
fn point_area_and_center() {
    let point = PointElement::new(2, 4.0, 6.0).with_radius(2.0);
    assert_relative_eq!(point.area(), 4.0 * PI);
    assert_eq!(point.center(), PointerPosition::new(4.0, 6.0));
    assert_eq!(point.dataset_index(), 2);
    assert_relative_eq!(
        point.distance_to_center(PointerPosition::new(7.0, 10.0)),
        5.0
    );
}

#[test]
fn skipped_elements_never_hit() {
    let point = PointElement::new(0, 10.0, 10.0).with_skip(true);
    let bar = BarElement::new(0, 10.0, 0.0, 50.0, 10.0).with_skip(true);
    let arc = ArcElement::new(0, 0.0, 0.0, 0.0, PI, 10.0).with_skip(true);

    assert!(point.is_skipped());
    assert!(!point.in_range(10.0, 10.0));
    assert!(!point.in_label_range(10.0, 10.0));
    assert!(!bar.in_range(10.0, 20.0));
    assert!(!bar.in_label_range(10.0, 20.0));
    assert!(!arc.in_range(0.0, 5.0));
}

#[test]
fn bar_range_handles_bars_on_either_side_of_the_base() {
    let positive = BarElement::new(0, 50.0, 20.0, 100.0, 10.0);
    assert!(positive.in_range(45.0, 20.0));
    assert!(positive.in_range(55.0, 100.0));
    assert!(!positive.in_range(56.0, 60.0));
    assert!(!positive.in_range(50.0, 101.0));

    let negative = BarElement::new(0, 50.0, 140.0, 100.0, 10.0);
    assert!(negative.in_range(50.0, 120.0));
    assert!(!negative.in_range(50.0, 90.0));
}

#[test]
fn bar_center_area_and_label_range() {
    let bar = BarElement::new(1, 50.0, 20.0, 100.0, 10.0);
    assert_eq!(bar.center(), PointerPosition::new(50.0, 60.0));
    assert_relative_eq!(bar.area(), 800.0);
    assert!(bar.in_label_range(54.0, -1_000.0));
    assert!(!bar.in_label_range(56.0, 60.0));
    assert_eq!(bar.label_column_x(), 50.0);
}

#[test]
fn arc_range_respects_sweep_and_radii() {
    // Lower half in screen space: from three o'clock clockwise to nine o'clock.
    let slice = ArcElement::new(0, 100.0, 100.0, 0.0, PI, 50.0).with_inner_radius(10.0);

    assert!(slice.in_range(100.0, 130.0));
    assert!(!slice.in_range(100.0, 70.0));
    assert!(!slice.in_range(100.0, 105.0));
    assert!(!slice.in_range(100.0, 151.0));
    assert!(!slice.in_label_range(100.0, 130.0));
}

#[test]
fn arc_range_unwraps_sweeps_crossing_the_start() {
    // Twelve o'clock to three o'clock, expressed past a full turn.
    let slice = ArcElement::new(0, 0.0, 0.0, -FRAC_PI_2, 0.0, 20.0);
    assert!(slice.in_range(5.0, -5.0));
    assert!(!slice.in_range(-5.0, -5.0));
    assert!(!slice.in_range(5.0, 5.0));

    let wrapped = ArcElement::new(0, 0.0, 0.0, 3.0 * FRAC_PI_2, 0.0, 20.0);
    assert!(wrapped.in_range(5.0, -5.0));
    assert!(!wrapped.in_range(-5.0, 5.0));

    let center = wrapped.center();
    assert!(center.x > 0.0 && center.y < 0.0);
    assert!(wrapped.in_range(center.x, center.y));
    assert_relative_eq!(wrapped.area(), PI * 0.25 * 400.0, epsilon = 1e-9);
}

#[test]
fn nearest_ranks_wrapped_slices_by_their_true_center() {
    let wrapped = ArcElement::new(0, 100.0, 100.0, 3.0 * FRAC_PI_2, 0.0, 20.0);
    let neighbour = ArcElement::new(1, 100.0, 100.0, PI, 3.0 * FRAC_PI_2, 20.0);
    let pointer = PointerPosition::new(107.0, 93.0);
    assert!(wrapped.in_range(pointer.x, pointer.y));
    assert!(!neighbour.in_range(pointer.x, pointer.y));

    let slices = [neighbour, wrapped];
    let best = nearest_to(pointer, slices.iter()).expect("nearest");
    assert_eq!(best.dataset_index, 0);
}

#[test]
fn arc_center_and_area() {
    let slice = ArcElement::new(0, 0.0, 0.0, 0.0, FRAC_PI_2, 30.0).with_inner_radius(10.0);
    let center = slice.center();
    let expected = 20.0 * (PI / 4.0).cos();
    assert_relative_eq!(center.x, expected, epsilon = 1e-9);
    assert_relative_eq!(center.y, expected, epsilon = 1e-9);
    assert_relative_eq!(slice.area(), PI * 0.25 * (900.0 - 100.0), epsilon = 1e-9);
    assert_eq!(slice.label_column_x(), 0.0);
}

#[test]
fn any_element_delegates_to_the_wrapped_kind() {
    let elements: Vec<AnyElement> = vec![
        PointElement::new(0, 10.0, 10.0).into(),
        BarElement::new(1, 50.0, 20.0, 100.0, 10.0).into(),
        ArcElement::new(2, 0.0, 0.0, 0.0, PI, 10.0).into(),
    ];

    assert!(elements[0].in_range(10.0, 11.0));
    assert!(elements[1].in_range(50.0, 50.0));
    assert!(elements[2].in_range(0.0, 5.0));
    assert_eq!(
        elements
            .iter()
            .map(ChartElement::dataset_index)
            .collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
    assert_relative_eq!(elements[1].area(), 800.0);
}

#[test]
fn any_element_serializes_with_kind_tag() {
    let element: AnyElement = PointElement::new(0, 1.0, 2.0).into();
    let json = serde_json::to_value(element).expect("serialize");
    assert_eq!(json["kind"], "point");
    let parsed: AnyElement = serde_json::from_value(json).expect("parse");
    assert_eq!(parsed, element);
}
