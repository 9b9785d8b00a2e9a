pub mod element;
pub mod model;
pub mod state;
pub mod surface;
pub mod types;

pub use element::{AnyElement, ArcElement, BarElement, ChartElement, PointElement};
pub use model::{ChartModel, DatasetMeta};
pub use state::ChartState;
pub use surface::{ChartSurface, RawPointerEvent, SurfacePadding};
pub use types::PointerPosition;
