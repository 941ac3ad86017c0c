//! Configuration management.
//!
//! Supports configuration from:
//! - TOML config files
//! - Environment variables
//! - CLI arguments (for the `gate` binary)

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GateError, Result};

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Gate engine configuration
    #[serde(default)]
    pub gate: GateConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| GateError::Config(format!("Failed to read config file: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| GateError::Config(format!("Failed to parse config: {e}")))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("GATE_SIGNATURE_DB") {
            config.gate.signature_db = Some(PathBuf::from(path));
        }
        if let Ok(mode) = std::env::var("GATE_LOAD_MODE") {
            if let Ok(mode) = mode.parse() {
                config.gate.load_mode = mode;
            }
        }
        if let Ok(val) = std::env::var("GATE_USE_BUILTIN") {
            config.gate.use_builtin = matches!(val.as_str(), "1" | "true" | "yes");
        }

        config
    }

    /// Merge with another config (other takes precedence for set values)
    pub fn merge(self, other: Self) -> Self {
        Self {
            gate: GateConfig {
                signature_db: other.gate.signature_db.or(self.gate.signature_db),
                load_mode: if other.gate.load_mode != GateConfig::default().load_mode {
                    other.gate.load_mode
                } else {
                    self.gate.load_mode
                },
                use_builtin: other.gate.use_builtin || self.gate.use_builtin,
                max_text_bytes: if other.gate.max_text_bytes != GateConfig::default().max_text_bytes
                {
                    other.gate.max_text_bytes
                } else {
                    self.gate.max_text_bytes
                },
            },
        }
    }
}

/// Load discipline for the signature database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LoadMode {
    /// Missing or unparsable database yields an empty store; the gate
    /// allows everything and warns on the log side channel (default,
    /// availability over defense-in-depth).
    #[default]
    FailOpen,
    /// Missing or unparsable database is a startup error.
    FailClosed,
}

impl FromStr for LoadMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail-open" | "open" => Ok(LoadMode::FailOpen),
            "fail-closed" | "closed" | "strict" => Ok(LoadMode::FailClosed),
            other => Err(format!("unknown load mode: {other}. Use: fail-open, fail-closed")),
        }
    }
}

/// Gate engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Path to the signature database JSON file
    pub signature_db: Option<PathBuf>,

    /// What to do when the database cannot be loaded
    pub load_mode: LoadMode,

    /// Use the compiled-in default signature set when no database path
    /// is configured
    pub use_builtin: bool,

    /// Soft input-size cap enforced by the CLI front end only; the
    /// engine itself accepts any text
    pub max_text_bytes: usize,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            signature_db: None,
            load_mode: LoadMode::FailOpen,
            use_builtin: false,
            max_text_bytes: 1024 * 1024, // 1 MB
        }
    }
}
