use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ChartError, ChartResult};

use super::SelectionMode;

pub const INTERACTION_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Which selection mode drives each pointer-facing feature.
///
/// Serializable so hosts can persist interaction setup alongside the rest of
/// their chart options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InteractionConfig {
    #[serde(default = "default_hover_mode")]
    pub hover_mode: SelectionMode,
    #[serde(default = "default_tooltip_mode")]
    pub tooltip_mode: SelectionMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: InteractionConfig,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            hover_mode: default_hover_mode(),
            tooltip_mode: default_tooltip_mode(),
        }
    }
}

impl InteractionConfig {
    #[must_use]
    pub fn with_hover_mode(mut self, mode: SelectionMode) -> Self {
        self.hover_mode = mode;
        self
    }

    #[must_use]
    pub fn with_tooltip_mode(mut self, mode: SelectionMode) -> Self {
        self.tooltip_mode = mode;
        self
    }

    pub fn to_json_contract_v1_pretty(self) -> ChartResult<String> {
        let payload = InteractionConfigJsonContractV1 {
            schema_version: INTERACTION_CONFIG_JSON_SCHEMA_V1,
            config: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize interaction config: {e}"))
        })
    }

    /// Parses either a bare config object or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(config) = serde_json::from_str::<InteractionConfig>(input) {
            return Ok(config);
        }
        let payload: InteractionConfigJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                warn!(error = %e, "failed to parse interaction config");
                ChartError::InvalidConfig(format!("failed to parse interaction config json: {e}"))
            })?;
        if payload.schema_version != INTERACTION_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidConfig(format!(
                "unsupported interaction config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}

fn default_hover_mode() -> SelectionMode {
    SelectionMode::Nearest
}

fn default_tooltip_mode() -> SelectionMode {
    SelectionMode::Nearest
}
