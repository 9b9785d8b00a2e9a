//! chart-interaction: pointer hit-testing and selection modes for chart engines.
//!
//! The host supplies laid-out elements through [`ChartState`]; a
//! [`SelectionMode`] turns one pointer event into the elements it refers to.
//! Resolution is pure: no mode mutates the chart state or keeps anything
//! between calls.

pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use crate::core::{ChartElement, ChartModel, ChartState, PointerPosition};
pub use error::{ChartError, ChartResult};
pub use interaction::{
    InteractionConfig, InteractionResolver, ModeRegistry, Selection, SelectionMode,
};
