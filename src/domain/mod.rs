//! Domain layer - pool metadata, registration encoding and gauge lists

pub mod encoding;
pub mod gas;
pub mod gauge;
pub mod pool;
pub mod traits;

pub use gas::GasStrategy;
pub use traits::{CapabilityProbe, GasPriceOracle, GaugeOracle, PoolDataSource, PoolRegistry, SubmittedTx};
