// src/config/model.rs

use serde::Deserialize;

use crate::types::RenderStyle;

/// Configuration as read from `ganttplan.toml`, before validation.
///
/// ```toml
/// [store]
/// dir = ".ganttplan"
///
/// [display]
/// style = "gantt"
/// width = 48
///
/// [log]
/// level = "info"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub store: StoreSection,

    #[serde(default)]
    pub display: DisplaySection,

    #[serde(default)]
    pub log: LogSection,
}

/// Validated configuration. Build it with `ConfigFile::try_from(raw)`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub store: StoreSection,
    pub display: DisplaySection,
    pub log: LogSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        store: StoreSection,
        display: DisplaySection,
        log: LogSection,
    ) -> Self {
        Self {
            store,
            display,
            log,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(
            StoreSection::default(),
            DisplaySection::default(),
            LogSection::default(),
        )
    }
}

/// `[store]` section: where plan history lives.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSection {
    /// Directory holding one JSON file per stored plan.
    #[serde(default = "default_store_dir")]
    pub dir: String,
}

fn default_store_dir() -> String {
    ".ganttplan".to_string()
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            dir: default_store_dir(),
        }
    }
}

/// `[display]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySection {
    /// `"gantt"` (default) or `"table"`.
    #[serde(default)]
    pub style: RenderStyle,

    /// Number of columns the longest bar may occupy.
    #[serde(default = "default_width")]
    pub width: usize,
}

pub const MIN_WIDTH: usize = 10;
pub const MAX_WIDTH: usize = 200;

fn default_width() -> usize {
    48
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            style: RenderStyle::default(),
            width: default_width(),
        }
    }
}

/// `[log]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogSection {
    /// Fallback log level when neither `--log-level` nor `GANTTPLAN_LOG`
    /// is set.
    #[serde(default)]
    pub level: Option<String>,
}
