use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub router: RouterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Capacities of the router's bounded channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Pending push/pop commands before new ones are dropped (default: 1000).
    #[serde(default = "default_command_capacity")]
    pub command_capacity: usize,
    /// Unread events per subscriber, and events replayed to late
    /// subscribers (default: 1000).
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

/// Log output settings. `BACKSTACK_LOG` overrides `level` when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. "info" or "backstack=debug".
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log to this file instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Settings for the bundled demo director.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Simulated loading time before the first screen (default: 1000).
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,
}

fn default_command_capacity() -> usize {
    1000
}

fn default_event_capacity() -> usize {
    1000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_load_delay_ms() -> u64 {
    1000
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            command_capacity: default_command_capacity(),
            event_capacity: default_event_capacity(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: default_load_delay_ms(),
        }
    }
}
