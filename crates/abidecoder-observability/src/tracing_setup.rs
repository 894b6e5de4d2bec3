//! Tracing / logging initialisation helpers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

/// Log level per component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Global default level: "trace" | "debug" | "info" | "warn" | "error"
    #[serde(default = "default_level")]
    pub level: String,
    /// Override per component: component_name → level
    #[serde(default)]
    pub components: BTreeMap<String, String>,
    /// Emit JSON structured logs (true) or human-readable text (false)
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            components: BTreeMap::new(),
            json: false,
        }
    }
}

impl LogConfig {
    /// The `EnvFilter` directive string, e.g. "info,abidecoder_core=debug".
    pub fn directives(&self) -> String {
        let mut directives = self.level.clone();
        for (component, level) in &self.components {
            directives.push_str(&format!(",{}={}", component.replace('-', "_"), level));
        }
        directives
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_new(self.directives()).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialise tracing with the given log config.
/// Should be called once at application startup; panics if a global
/// subscriber is already set.
pub fn init_tracing(config: &LogConfig) {
    if config.json {
        tracing_subscriber::registry()
            .with(config.filter())
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(config.filter())
            .with(fmt::layer())
            .init();
    }
}

/// Like [`init_tracing`], but returns an error instead of panicking when a
/// global subscriber is already installed (test harnesses, embedding hosts).
pub fn try_init_tracing(config: &LogConfig) -> Result<(), TryInitError> {
    if config.json {
        tracing_subscriber::registry()
            .with(config.filter())
            .with(fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(config.filter())
            .with(fmt::layer())
            .try_init()
    }
}
