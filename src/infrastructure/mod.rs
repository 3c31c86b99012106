//! Infrastructure layer - chain clients and metadata sources

pub mod chain;
pub mod pool_data;
