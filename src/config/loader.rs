// src/config/loader.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::model::{ProgramFile, RequestFile};
use crate::config::validate::{PlanRequest, Program};
use crate::errors;

/// Load a program file from a given path and return the raw `ProgramFile`.
///
/// This only performs TOML deserialization; it does **not** validate the
/// catalog or the requirements. Use [`load_and_validate`] for that.
///
/// Read and parse failures carry [`errors::PlanError::IoError`] and
/// [`errors::PlanError::TomlError`] under the path context.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ProgramFile> {
    let path = path.as_ref();
    let contents =
        read_file(path).with_context(|| format!("reading program file at {:?}", path))?;

    let file: ProgramFile = parse_toml(&contents)
        .with_context(|| format!("parsing TOML program from {:?}", path))?;

    Ok(file)
}

/// Load a program file and turn it into a validated [`Program`].
///
/// This is the recommended entry point for the rest of the application.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Program> {
    let path = path.as_ref();
    let file = load_from_path(path)?;
    let program = Program::try_from(file)
        .with_context(|| format!("validating program from {:?}", path))?;
    debug!(
        courses = program.catalog.len(),
        requirements = program.requirements.len(),
        "program loaded"
    );
    Ok(program)
}

/// Parse and validate a program from TOML text.
pub fn program_from_str(contents: &str) -> Result<Program> {
    let file: ProgramFile = parse_toml(contents).context("parsing TOML program")?;
    Ok(Program::try_from(file)?)
}

/// Load and validate a planning request.
pub fn load_request(path: impl AsRef<Path>) -> Result<PlanRequest> {
    let path = path.as_ref();
    let contents =
        read_file(path).with_context(|| format!("reading request file at {:?}", path))?;
    request_from_str(&contents).with_context(|| format!("loading request from {:?}", path))
}

/// Parse and validate a planning request from TOML text.
pub fn request_from_str(contents: &str) -> Result<PlanRequest> {
    let file: RequestFile = parse_toml(contents).context("parsing TOML request")?;
    Ok(PlanRequest::try_from(file)?)
}

fn read_file(path: &Path) -> errors::Result<String> {
    Ok(fs::read_to_string(path)?)
}

fn parse_toml<T: DeserializeOwned>(contents: &str) -> errors::Result<T> {
    Ok(toml::from_str(contents)?)
}
