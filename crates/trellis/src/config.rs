//! TOML configuration: key bindings and log level.
//!
//! ```toml
//! [keys]
//! focus_up = ["up", "k"]
//! quit = ["ctrl-c", "q"]
//!
//! [log]
//! level = "debug"
//! ```
//!
//! Every section and field is optional. Actions listed under `[keys]`
//! replace that action's default bindings; unlisted actions keep theirs.

use std::{collections::BTreeMap, fs, path::Path, str::FromStr};

use serde::Deserialize;
use tracing::{Level, debug, info};

use crate::{
    error::{Error, ParseError, Result},
    inputmap::{InputMap, NavAction},
};

/// Top-level configuration file.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Action name to key specs.
    #[serde(default)]
    pub keys: BTreeMap<String, Vec<String>>,
    /// Logging options.
    #[serde(default)]
    pub log: LogConfig,
}

/// The `[log]` section.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log filter level: one of trace, debug, info, warn, error.
    #[serde(default = "LogConfig::default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LogConfig {
    /// Default filter level.
    fn default_level() -> String {
        "info".into()
    }
}

/// One-based line and column of byte offset `pos` in `src`.
fn position(src: &str, pos: usize) -> (usize, usize) {
    let before = &src[..pos.min(src.len())];
    let line = before.matches('\n').count() + 1;
    let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
    (line, column)
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(src: &str) -> Result<Self> {
        toml::from_str(src).map_err(|e| {
            let (line, column) = match e.span() {
                Some(span) => {
                    let (l, c) = position(src, span.start);
                    (Some(l), Some(c))
                }
                None => (None, None),
            };
            ParseError::with_position(e.message(), line, column).into()
        })
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = fs::read_to_string(path)?;
        let config = Self::from_toml(&src)?;
        info!(
            target: "config",
            path = %path.display(),
            bindings = config.keys.len(),
            "config_loaded"
        );
        Ok(config)
    }

    /// The configured log level.
    pub fn log_level(&self) -> Result<Level> {
        Level::from_str(&self.log.level)
            .map_err(|_| Error::Config(format!("invalid log level: {}", self.log.level)))
    }

    /// Build an input map: the defaults, with each configured action's keys
    /// replaced by the configured list.
    pub fn input_map(&self) -> Result<InputMap> {
        let mut map = InputMap::default();
        for (name, specs) in &self.keys {
            let action: NavAction = name.parse()?;
            map.clear_action(action);
            for spec in specs {
                map.bind_spec(spec, action)?;
            }
            debug!(target: "config", %action, keys = specs.len(), "bindings_replaced");
        }
        Ok(map)
    }
}
