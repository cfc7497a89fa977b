// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! Only malformed input halts planning. Infeasible placements, missing
//! catalog references and prerequisite cycles are reported through
//! warnings and diagnostics instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlanError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        PlanError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
