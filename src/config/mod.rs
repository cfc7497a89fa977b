// src/config/mod.rs

//! Program and request loading.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load files from disk (`loader.rs`).
//! - Turn raw files into validated domain types (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_request, program_from_str, request_from_str};
pub use model::{CourseConfig, PrereqNode, ProgramFile, RequestFile, RequirementConfig};
pub use validate::{PlanRequest, Program};
