use crate::core::element::ChartElement;
use crate::core::types::PointerPosition;
use crate::interaction::modes;

/// Read-only view of a laid-out chart, supplied by the host rendering system.
///
/// Datasets are addressed by their position in render order. Selection modes
/// only ever borrow from the state, so one state can serve any number of
/// concurrent queries.
pub trait ChartState {
    type Element: ChartElement;
    /// Raw input event as delivered by the host before normalization.
    type Event;

    /// Maps a raw event to chart-local pixel coordinates.
    fn event_position(&self, event: &Self::Event) -> PointerPosition;

    fn dataset_count(&self) -> usize;

    fn is_dataset_visible(&self, dataset_index: usize) -> bool;

    /// Elements of one dataset in index order. Out-of-range indices yield an
    /// empty slice.
    fn dataset_elements(&self, dataset_index: usize) -> &[Self::Element];

    /// The chart's default single-element lookup, used by dataset selection.
    fn element_at_event(&self, event: &Self::Event) -> Option<&Self::Element>
    where
        Self: Sized,
    {
        modes::single(self, event).into_iter().next()
    }

    /// Visible datasets in render order, paired with their dataset index.
    fn visible_datasets(&self) -> impl Iterator<Item = (usize, &[Self::Element])> {
        (0..self.dataset_count())
            .filter(move |&dataset_index| self.is_dataset_visible(dataset_index))
            .map(move |dataset_index| (dataset_index, self.dataset_elements(dataset_index)))
    }
}
