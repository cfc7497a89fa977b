#[path = "../common/mod.rs"]
mod common;

mod evaluator;
mod scheduler;
