//! Pool domain - metadata, validation and registration variants

mod descriptor;
mod loader;
mod pool_data;
mod variant;

pub use descriptor::{Coin, PoolDescriptor, PoolTarget, LEGACY_LP_CONTRACT};
pub use loader::{order_for_registration, resolve_pool};
pub use pool_data::{CoinData, PoolData};
pub use variant::{PoolVariant, ResolvedPool, SwapCapabilities};
