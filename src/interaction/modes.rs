//! Selection mode handlers.
//!
//! Every handler scans visible datasets in render order and elements in index
//! order. None of them fail: a pointer that selects nothing yields an empty
//! selection.

use crate::core::{ChartElement, ChartState};

use super::Selection;
use super::nearest::nearest_to;

/// First element whose `hit` predicate matches, with its element index.
fn locate<'a, S, F>(state: &'a S, mut hit: F) -> Option<(usize, &'a S::Element)>
where
    S: ChartState,
    F: FnMut(&S::Element) -> bool,
{
    state
        .visible_datasets()
        .find_map(|(_, elements)| elements.iter().enumerate().find(|&(_, element)| hit(element)))
}

/// Collects one element per visible dataset, dropping misses and skipped elements.
fn collect_column<'a, S, F>(state: &'a S, pick: F) -> Selection<'a, S::Element>
where
    S: ChartState,
    F: Fn(&'a [S::Element]) -> Option<&'a S::Element>,
{
    state
        .visible_datasets()
        .filter_map(|(_, elements)| pick(elements))
        .filter(|element| !element.is_skipped())
        .collect()
}

/// The first element under the pointer.
pub fn single<'a, S: ChartState>(state: &'a S, event: &S::Event) -> Selection<'a, S::Element> {
    let position = state.event_position(event);
    locate(state, |element| element.in_range(position.x, position.y))
        .map(|(_, element)| element)
        .into_iter()
        .collect()
}

/// Every element under the pointer.
pub fn intersect<'a, S: ChartState>(state: &'a S, event: &S::Event) -> Selection<'a, S::Element> {
    let position = state.event_position(event);
    state
        .visible_datasets()
        .flat_map(|(_, elements)| elements.iter())
        .filter(|element| element.in_range(position.x, position.y))
        .collect()
}

/// The element index under the pointer, taken from every visible dataset.
///
/// Also registered as `label`.
pub fn index<'a, S: ChartState>(state: &'a S, event: &S::Event) -> Selection<'a, S::Element> {
    let position = state.event_position(event);
    let Some((column, _)) = locate(state, |element| element.in_range(position.x, position.y))
    else {
        return Selection::new();
    };
    collect_column(state, |elements| elements.get(column))
}

/// The category column under the pointer, matched by column coordinate in
/// every visible dataset.
pub fn x_axis<'a, S: ChartState>(state: &'a S, event: &S::Event) -> Selection<'a, S::Element> {
    let position = state.event_position(event);
    let Some((_, found)) = locate(state, |element| {
        element.in_label_range(position.x, position.y)
    }) else {
        return Selection::new();
    };
    // Columns come out of the same scale for every dataset, so exact equality holds.
    let column_x = found.label_column_x();
    collect_column(state, |elements| {
        elements
            .iter()
            .find(|element| element.label_column_x() == column_x)
    })
}

/// Every element of the dataset owning the chart's default element at the event.
pub fn dataset<'a, S: ChartState>(state: &'a S, event: &S::Event) -> Selection<'a, S::Element> {
    match state.element_at_event(event) {
        Some(found) => state.dataset_elements(found.dataset_index()).iter().collect(),
        None => Selection::new(),
    }
}

/// The element whose center is closest to the pointer, hit or not.
pub fn nearest<'a, S: ChartState>(state: &'a S, event: &S::Event) -> Selection<'a, S::Element> {
    let position = state.event_position(event);
    nearest_to(
        position,
        state
            .visible_datasets()
            .flat_map(|(_, elements)| elements.iter()),
    )
    .into_iter()
    .collect()
}

/// The closest of the elements `intersect` returns for the same event.
pub fn nearest_intersect<'a, S: ChartState>(
    state: &'a S,
    event: &S::Event,
) -> Selection<'a, S::Element> {
    let candidates = intersect(state, event);
    let position = state.event_position(event);
    nearest_to(position, candidates).into_iter().collect()
}
