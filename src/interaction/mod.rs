//! Pointer hit-testing: turns a pointer event into the chart elements it refers to.

use smallvec::SmallVec;

pub mod config;
pub mod mode;
pub mod modes;
pub mod nearest;
pub mod registry;
pub mod resolver;

pub use config::{INTERACTION_CONFIG_JSON_SCHEMA_V1, InteractionConfig};
pub use mode::SelectionMode;
pub use nearest::nearest_to;
pub use registry::{ModeFn, ModeRegistry};
pub use resolver::InteractionResolver;

/// Elements selected by one query, borrowed from the chart state.
pub type Selection<'a, E> = SmallVec<[&'a E; 4]>;
