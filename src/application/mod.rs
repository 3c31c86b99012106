//! Application layer - registration and gauge synchronisation services

pub mod gauge_sync;
pub mod pipeline;
pub mod registrar;

#[cfg(test)]
pub(crate) mod testing;

pub use gauge_sync::{GaugeSyncStatus, GaugeSynchronizer};
pub use pipeline::{PoolReport, RegistrationPipeline};
pub use registrar::{RegistrationStatus, Registrar};
