use std::fmt;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::ChartState;
use crate::error::{ChartError, ChartResult};

use super::{Selection, SelectionMode};

/// Signature shared by every selection handler.
pub type ModeFn<S> = for<'a, 'b> fn(
    &'a S,
    &'b <S as ChartState>::Event,
) -> Selection<'a, <S as ChartState>::Element>;

/// Name-keyed table of selection handlers.
///
/// Seeded with the built-in modes (plus the `label` alias). Hosts may register
/// additional handlers under new names.
pub struct ModeRegistry<S: ChartState> {
    entries: IndexMap<String, ModeFn<S>>,
}

impl<S: ChartState> ModeRegistry<S> {
    /// Registry without any handler.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_builtin_modes() -> Self {
        let mut entries = IndexMap::with_capacity(SelectionMode::ALL.len() + 1);
        for mode in SelectionMode::ALL {
            entries.insert(mode.name().to_owned(), mode.resolver::<S>());
        }
        entries.insert(
            SelectionMode::LABEL_ALIAS.to_owned(),
            SelectionMode::Index.resolver::<S>(),
        );
        Self { entries }
    }

    /// Registers a handler under a unique, non-empty name.
    pub fn register(&mut self, name: impl Into<String>, resolver: ModeFn<S>) -> ChartResult<()> {
        let name = name.into();
        if name.is_empty() {
            warn!("rejected selection mode with empty name");
            return Err(ChartError::InvalidData(
                "selection mode name must not be empty".to_owned(),
            ));
        }
        if self.entries.contains_key(&name) {
            warn!(mode = %name, "rejected duplicate selection mode");
            return Err(ChartError::InvalidData(format!(
                "selection mode `{name}` is already registered"
            )));
        }
        debug!(mode = %name, "register selection mode");
        self.entries.insert(name, resolver);
        Ok(())
    }

    /// Removes a handler by name. Returns `true` when removed.
    pub fn unregister(&mut self, name: &str) -> bool {
        let removed = self.entries.shift_remove(name).is_some();
        if removed {
            debug!(mode = name, "unregister selection mode");
        }
        removed
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<ModeFn<S>> {
        self.entries.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runs the handler registered under `name`.
    pub fn resolve<'a>(
        &self,
        name: &str,
        state: &'a S,
        event: &S::Event,
    ) -> ChartResult<Selection<'a, S::Element>> {
        let Some(resolver) = self.get(name) else {
            warn!(mode = name, "unknown selection mode");
            return Err(ChartError::UnknownMode(name.to_owned()));
        };
        Ok(resolver(state, event))
    }
}

impl<S: ChartState> Default for ModeRegistry<S> {
    fn default() -> Self {
        Self::with_builtin_modes()
    }
}

impl<S: ChartState> Clone for ModeRegistry<S> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<S: ChartState> fmt::Debug for ModeRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeRegistry")
            .field("modes", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
