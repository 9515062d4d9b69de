// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! The scheduler itself (`schedule::duration`, `schedule::resolver`,
//! `schedule::order`) never returns these: malformed input degrades to
//! fallback records instead. Everything around it (config, plan documents,
//! the history store, edits addressed by index) reports through
//! [`PlanError`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Task plan not found: {0}")]
    PlanNotFound(String),

    #[error("Task index {index} out of range (plan has {len} tasks)")]
    TaskIndexOutOfRange { index: usize, len: usize },

    #[error("Generated plan is not a JSON array")]
    NotAnArray,

    #[error("Invalid edit: {0}")]
    InvalidEdit(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, PlanError>;
