//! Pool registrar - registers liquidity pools and their gauges in the
//! on-chain pool registry
//! Built with Domain-Driven Design principles

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export main types for convenience
pub use application::{GaugeSynchronizer, RegistrationPipeline, Registrar};
pub use domain::encoding::{encode_registration, RegistrationCall};
pub use domain::pool::{PoolDescriptor, PoolVariant};
