use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::ChartState;
use crate::error::{ChartError, ChartResult};

use super::registry::ModeFn;
use super::{Selection, modes};

/// Built-in policies for turning a pointer event into selected elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionMode {
    /// First element under the pointer.
    #[serde(rename = "single")]
    Single,
    /// Same element index across all visible datasets. `label` is the legacy name.
    #[serde(rename = "index", alias = "label")]
    Index,
    /// Same category column across all visible datasets, located by x only.
    #[serde(rename = "x-axis")]
    XAxis,
    /// Whole dataset of the element under the pointer.
    #[serde(rename = "dataset")]
    Dataset,
    /// All elements under the pointer.
    #[serde(rename = "intersect")]
    Intersect,
    /// Closest element, whether or not the pointer is on it.
    #[serde(rename = "nearest")]
    Nearest,
    /// Closest of the elements under the pointer.
    #[serde(rename = "nearestIntersect")]
    NearestIntersect,
}

impl SelectionMode {
    pub const ALL: [SelectionMode; 7] = [
        Self::Single,
        Self::Index,
        Self::XAxis,
        Self::Dataset,
        Self::Intersect,
        Self::Nearest,
        Self::NearestIntersect,
    ];

    /// Legacy name accepted wherever `index` is.
    pub const LABEL_ALIAS: &'static str = "label";

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Index => "index",
            Self::XAxis => "x-axis",
            Self::Dataset => "dataset",
            Self::Intersect => "intersect",
            Self::Nearest => "nearest",
            Self::NearestIntersect => "nearestIntersect",
        }
    }

    /// Handler implementing this mode.
    #[must_use]
    pub fn resolver<S: ChartState>(self) -> ModeFn<S> {
        match self {
            Self::Single => modes::single::<S>,
            Self::Index => modes::index::<S>,
            Self::XAxis => modes::x_axis::<S>,
            Self::Dataset => modes::dataset::<S>,
            Self::Intersect => modes::intersect::<S>,
            Self::Nearest => modes::nearest::<S>,
            Self::NearestIntersect => modes::nearest_intersect::<S>,
        }
    }

    pub fn resolve<'a, S: ChartState>(
        self,
        state: &'a S,
        event: &S::Event,
    ) -> Selection<'a, S::Element> {
        let selection = (self.resolver::<S>())(state, event);
        trace!(mode = self.name(), hits = selection.len(), "resolve selection");
        selection
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SelectionMode {
    type Err = ChartError;

    fn from_str(name: &str) -> ChartResult<Self> {
        if name == Self::LABEL_ALIAS {
            return Ok(Self::Index);
        }
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == name)
            .ok_or_else(|| ChartError::UnknownMode(name.to_owned()))
    }
}
