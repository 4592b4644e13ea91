//! Configuration system for the FPU model.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline values for the division pool and tracing.
//! 2. **Structures:** Hierarchical config for general and scheduler settings.
//! 3. **Enums:** The policy applied when a divide finds every slot busy.
//!
//! Configuration is supplied as JSON, either inline with [`Config::from_json`]
//! or from disk with [`Config::from_file`]. Every field has a default, so
//! `{}` is a complete document.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::error::ConfigError;

/// Default configuration constants.
mod defaults {
    /// Number of independent division slots.
    ///
    /// Four slots keep back-to-back divides flowing at one issue per cycle for
    /// a few operations before the pool fills.
    pub const DIV_SLOTS: usize = 4;
}

/// Action taken when a divide is presented and every division slot is busy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum DivFullPolicy {
    /// Hold the request: the scheduler reports it as blocked and the caller
    /// presents it again on a later cycle.
    #[default]
    #[serde(alias = "stall")]
    Stall,
    /// Discard the request and log a warning.
    #[serde(alias = "drop")]
    Drop,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Execution scheduler settings.
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

impl Config {
    /// Parses a JSON configuration document and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and any error
    /// reported by [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks value ranges that the schema cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDivSlots`] when the division pool is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scheduler.div_slots == 0 {
            return Err(ConfigError::InvalidDivSlots(self.scheduler.div_slots));
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Log every committed result at `info` level.
    #[serde(default)]
    pub trace_results: bool,
}

/// Execution scheduler settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SchedulerConfig {
    /// Number of division slots (at least 1).
    #[serde(default = "SchedulerConfig::default_div_slots")]
    pub div_slots: usize,

    /// Behavior when a divide finds no free slot.
    #[serde(default)]
    pub div_full_policy: DivFullPolicy,
}

impl SchedulerConfig {
    fn default_div_slots() -> usize {
        defaults::DIV_SLOTS
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            div_slots: defaults::DIV_SLOTS,
            div_full_policy: DivFullPolicy::default(),
        }
    }
}
