// src/config/validate.rs

use crate::config::model::{ConfigFile, MAX_WIDTH, MIN_WIDTH, RawConfigFile};
use crate::errors::{PlanError, Result};
use crate::logging::parse_level_str;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = PlanError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.store, raw.display, raw.log))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_store(cfg)?;
    validate_display(cfg)?;
    validate_log(cfg)?;
    Ok(())
}

fn validate_store(cfg: &RawConfigFile) -> Result<()> {
    if cfg.store.dir.trim().is_empty() {
        return Err(PlanError::ConfigError(
            "[store].dir must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_display(cfg: &RawConfigFile) -> Result<()> {
    // `style` is strongly typed and validated during deserialization.
    let width = cfg.display.width;
    if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
        return Err(PlanError::ConfigError(format!(
            "[display].width must be between {MIN_WIDTH} and {MAX_WIDTH} (got {width})"
        )));
    }
    Ok(())
}

fn validate_log(cfg: &RawConfigFile) -> Result<()> {
    if let Some(level) = cfg.log.level.as_deref() {
        if parse_level_str(level).is_none() {
            return Err(PlanError::ConfigError(format!(
                "[log].level '{level}' is not one of error, warn, info, debug, trace"
            )));
        }
    }
    Ok(())
}
