//! Configuration layering
//!
//! Implements the 3-layer configuration merge:
//! 1. Built-in defaults
//! 2. Config file (TOML)
//! 3. CLI flags

mod defaults;
mod effective;

pub use defaults::BuiltinDefaults;
pub use effective::{
    AgentSettings, AppConfig, ConfigError, ConfigOrigin, ConfigSource, EffectiveConfig, ReportSettings,
};
