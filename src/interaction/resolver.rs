use crate::core::ChartState;
use crate::error::ChartResult;

use super::{InteractionConfig, ModeRegistry, Selection, SelectionMode};

/// Stateless entry point pairing an interaction config with a mode registry.
///
/// All queries take `&self`; the resolver can be shared between threads as
/// long as the chart state can.
#[derive(Debug, Clone)]
pub struct InteractionResolver<S: ChartState> {
    config: InteractionConfig,
    registry: ModeRegistry<S>,
}

impl<S: ChartState> InteractionResolver<S> {
    #[must_use]
    pub fn new(config: InteractionConfig) -> Self {
        Self::with_registry(config, ModeRegistry::with_builtin_modes())
    }

    #[must_use]
    pub fn with_registry(config: InteractionConfig, registry: ModeRegistry<S>) -> Self {
        Self { config, registry }
    }

    #[must_use]
    pub fn config(&self) -> InteractionConfig {
        self.config
    }

    pub fn set_config(&mut self, config: InteractionConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn registry(&self) -> &ModeRegistry<S> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ModeRegistry<S> {
        &mut self.registry
    }

    /// Elements to highlight for a pointer move.
    pub fn hover<'a>(&self, state: &'a S, event: &S::Event) -> Selection<'a, S::Element> {
        self.config.hover_mode.resolve(state, event)
    }

    /// Elements to list in the tooltip for a pointer move.
    pub fn tooltip<'a>(&self, state: &'a S, event: &S::Event) -> Selection<'a, S::Element> {
        self.config.tooltip_mode.resolve(state, event)
    }

    pub fn resolve<'a>(
        &self,
        mode: SelectionMode,
        state: &'a S,
        event: &S::Event,
    ) -> Selection<'a, S::Element> {
        mode.resolve(state, event)
    }

    /// Resolves a mode by registered name, including host-registered ones.
    pub fn resolve_named<'a>(
        &self,
        name: &str,
        state: &'a S,
        event: &S::Event,
    ) -> ChartResult<Selection<'a, S::Element>> {
        self.registry.resolve(name, state, event)
    }
}

impl<S: ChartState> Default for InteractionResolver<S> {
    fn default() -> Self {
        Self::new(InteractionConfig::default())
    }
}
