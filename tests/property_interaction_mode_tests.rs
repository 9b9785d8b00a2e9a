use chart_interaction::core::{
    ChartElement, ChartModel, ChartState, ChartSurface, DatasetMeta, PointElement, RawPointerEvent,
};
use chart_interaction::interaction::SelectionMode;
use chart_interaction::interaction::nearest::rounded_distance;
use proptest::prelude::*;

type RawDataset = (bool, Vec<(u16, u16, bool)>);

fn build_chart(datasets: &[RawDataset]) -> ChartModel<PointElement> {
    let mut model = ChartModel::new(ChartSurface::new(200.0, 200.0).expect("surface"));
    for (dataset_index, (hidden, points)) in datasets.iter().enumerate() {
        let elements = points
            .iter()
            .map(|&(x, y, skip)| {
                PointElement::new(dataset_index, f64::from(x), f64::from(y))
                    .with_radius(6.0)
                    .with_skip(skip)
            })
            .collect();
        model.push_dataset(
            DatasetMeta::new(format!("d{dataset_index}"), elements).with_hidden(*hidden),
        );
    }
    model
}

fn chart_strategy() -> impl Strategy<Value = Vec<RawDataset>> {
    prop::collection::vec(
        (
            any::<bool>(),
            prop::collection::vec((0u16..200, 0u16..200, prop::bool::weighted(0.2)), 0..6),
        ),
        0..4,
    )
}

fn same_identity(left: &[&PointElement], right: &[&PointElement]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(a, b)| std::ptr::eq(*a, *b))
}

proptest! {
    #[test]
    fn single_is_the_head_of_intersect(
        datasets in chart_strategy(),
        px in 0u16..200,
        py in 0u16..200
    ) {
        let model = build_chart(&datasets);
        let event = RawPointerEvent::new(f64::from(px), f64::from(py));

        let single = SelectionMode::Single.resolve(&model, &event);
        let intersect = SelectionMode::Intersect.resolve(&model, &event);

        prop_assert!(single.len() <= 1);
        prop_assert_eq!(single.is_empty(), intersect.is_empty());
        if let (Some(first), Some(head)) = (single.first(), intersect.first()) {
            prop_assert!(std::ptr::eq(*first, *head));
        }
        for element in &intersect {
            prop_assert!(element.in_range(f64::from(px), f64::from(py)));
        }
    }

    #[test]
    fn nearest_picks_a_minimal_rounded_distance(
        datasets in chart_strategy(),
        px in 0u16..200,
        py in 0u16..200
    ) {
        let model = build_chart(&datasets);
        let event = RawPointerEvent::new(f64::from(px), f64::from(py));
        let position = model.event_position(&event);

        let nearest = SelectionMode::Nearest.resolve(&model, &event);
        let visible: Vec<&PointElement> = model
            .visible_datasets()
            .flat_map(|(_, elements)| elements.iter())
            .collect();

        prop_assert!(nearest.len() <= 1);
        prop_assert_eq!(nearest.is_empty(), visible.is_empty());
        if let Some(best) = nearest.first() {
            let best_distance = rounded_distance(*best, position);
            for element in &visible {
                prop_assert!(rounded_distance(*element, position) >= best_distance);
            }
        }
    }

    #[test]
    fn nearest_intersect_is_drawn_from_intersect(
        datasets in chart_strategy(),
        px in 0u16..200,
        py in 0u16..200
    ) {
        let model = build_chart(&datasets);
        let event = RawPointerEvent::new(f64::from(px), f64::from(py));

        let intersect = SelectionMode::Intersect.resolve(&model, &event);
        let nearest_hit = SelectionMode::NearestIntersect.resolve(&model, &event);

        prop_assert!(nearest_hit.len() <= 1);
        prop_assert_eq!(nearest_hit.is_empty(), intersect.is_empty());
        if let Some(best) = nearest_hit.first() {
            prop_assert!(intersect.iter().any(|element| std::ptr::eq(*element, *best)));
        }
    }

    #[test]
    fn hidden_datasets_never_contribute(
        datasets in chart_strategy(),
        px in 0u16..200,
        py in 0u16..200
    ) {
        let model = build_chart(&datasets);
        let event = RawPointerEvent::new(f64::from(px), f64::from(py));

        for mode in SelectionMode::ALL {
            for element in &mode.resolve(&model, &event) {
                prop_assert!(model.is_dataset_visible(element.dataset_index()));
            }
        }
    }

    #[test]
    fn column_modes_take_at_most_one_unskipped_element_per_dataset(
        datasets in chart_strategy(),
        px in 0u16..200,
        py in 0u16..200
    ) {
        let model = build_chart(&datasets);
        let event = RawPointerEvent::new(f64::from(px), f64::from(py));

        for mode in [SelectionMode::Index, SelectionMode::XAxis] {
            let selection = mode.resolve(&model, &event);
            prop_assert!(selection.iter().all(|element| !element.is_skipped()));
            let mut owners: Vec<usize> = selection.iter().map(|element| element.dataset_index).collect();
            let before = owners.len();
            owners.dedup();
            prop_assert_eq!(owners.len(), before);
        }
    }

    #[test]
    fn repeated_resolution_is_identical(
        datasets in chart_strategy(),
        px in 0u16..200,
        py in 0u16..200
    ) {
        let model = build_chart(&datasets);
        let event = RawPointerEvent::new(f64::from(px), f64::from(py));

        for mode in SelectionMode::ALL {
            let first = mode.resolve(&model, &event);
            let second = mode.resolve(&model, &event);
            prop_assert!(same_identity(&first, &second));
        }
    }
}
