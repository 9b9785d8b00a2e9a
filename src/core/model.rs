use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::element::ChartElement;
use crate::core::state::ChartState;
use crate::core::surface::{ChartSurface, RawPointerEvent};
use crate::core::types::PointerPosition;
use crate::error::{ChartError, ChartResult};

/// Laid-out elements of one dataset plus its visibility flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMeta<E> {
    pub label: String,
    #[serde(default)]
    pub hidden: bool,
    pub elements: Vec<E>,
}

impl<E> DatasetMeta<E> {
    #[must_use]
    pub fn new(label: impl Into<String>, elements: Vec<E>) -> Self {
        Self {
            label: label.into(),
            hidden: false,
            elements,
        }
    }

    #[must_use]
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// In-memory chart state: datasets in render order on a chart surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel<E> {
    surface: ChartSurface,
    datasets: Vec<DatasetMeta<E>>,
}

impl<E: ChartElement> ChartModel<E> {
    #[must_use]
    pub fn new(surface: ChartSurface) -> Self {
        Self {
            surface,
            datasets: Vec::new(),
        }
    }

    /// Appends a dataset and returns its index.
    pub fn push_dataset(&mut self, dataset: DatasetMeta<E>) -> usize {
        let dataset_index = self.datasets.len();
        let mislabeled = dataset
            .elements
            .iter()
            .filter(|element| element.dataset_index() != dataset_index)
            .count();
        if mislabeled > 0 {
            warn!(
                dataset_index,
                mislabeled, "dataset elements carry a different dataset index"
            );
        }
        debug!(
            dataset_index,
            elements = dataset.elements.len(),
            hidden = dataset.hidden,
            "push dataset"
        );
        self.datasets.push(dataset);
        dataset_index
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: DatasetMeta<E>) -> Self {
        self.push_dataset(dataset);
        self
    }

    #[must_use]
    pub fn datasets(&self) -> &[DatasetMeta<E>] {
        &self.datasets
    }

    #[must_use]
    pub fn dataset(&self, dataset_index: usize) -> Option<&DatasetMeta<E>> {
        self.datasets.get(dataset_index)
    }

    /// Replaces the elements of a dataset after a layout pass.
    pub fn set_dataset_elements(
        &mut self,
        dataset_index: usize,
        elements: Vec<E>,
    ) -> ChartResult<()> {
        let dataset = self.dataset_mut(dataset_index)?;
        dataset.elements = elements;
        Ok(())
    }

    pub fn set_dataset_visible(&mut self, dataset_index: usize, visible: bool) -> ChartResult<()> {
        let dataset = self.dataset_mut(dataset_index)?;
        dataset.hidden = !visible;
        debug!(dataset_index, visible, "set dataset visibility");
        Ok(())
    }

    #[must_use]
    pub fn surface(&self) -> ChartSurface {
        self.surface
    }

    pub fn set_surface(&mut self, surface: ChartSurface) {
        self.surface = surface;
    }

    fn dataset_mut(&mut self, dataset_index: usize) -> ChartResult<&mut DatasetMeta<E>> {
        let count = self.datasets.len();
        self.datasets.get_mut(dataset_index).ok_or_else(|| {
            ChartError::InvalidData(format!(
                "dataset index {dataset_index} out of range for {count} datasets"
            ))
        })
    }
}

impl<E: ChartElement> ChartState for ChartModel<E> {
    type Element = E;
    type Event = RawPointerEvent;

    fn event_position(&self, event: &RawPointerEvent) -> PointerPosition {
        self.surface.relative_position(event)
    }

    fn dataset_count(&self) -> usize {
        self.datasets.len()
    }

    fn is_dataset_visible(&self, dataset_index: usize) -> bool {
        self.datasets
            .get(dataset_index)
            .is_some_and(|dataset| !dataset.hidden)
    }

    fn dataset_elements(&self, dataset_index: usize) -> &[E] {
        self.datasets
            .get(dataset_index)
            .map(|dataset| dataset.elements.as_slice())
            .unwrap_or_default()
    }
}
