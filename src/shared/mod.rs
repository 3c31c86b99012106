//! Shared components - errors and utilities

pub mod errors;
pub mod utils;
