use std::collections::BTreeMap;

use tracing::debug;

use super::descriptor::PoolDescriptor;
use super::pool_data::PoolData;
use super::variant::{PoolVariant, ResolvedPool, SwapCapabilities};
use crate::domain::traits::CapabilityProbe;
use crate::shared::errors::AppError;

/// Order pools for registration: base pools first, metapools last.
///
/// Pools keep their name order within each group, so a metapool always comes
/// after the pool it is built on.
pub fn order_for_registration(pools: BTreeMap<String, PoolData>) -> Vec<(String, PoolData)> {
    let mut ordered: Vec<(String, PoolData)> = pools.into_iter().collect();
    ordered.sort_by(|(_, a), (_, b)| {
        let a = a.base_pool.as_deref().unwrap_or("");
        let b = b.base_pool.as_deref().unwrap_or("");
        a.cmp(b)
    });
    ordered
}

/// Validate pool metadata and resolve its registration variant.
///
/// Metapools are never probed; other pools are probed once unless the
/// metadata overrides both capabilities.
pub async fn resolve_pool(
    name: &str,
    data: &PoolData,
    probe: &dyn CapabilityProbe,
) -> Result<ResolvedPool, AppError> {
    let descriptor = PoolDescriptor::from_pool_data(name, data)?;

    if descriptor.is_metapool() {
        return Ok(ResolvedPool::new(descriptor, PoolVariant::MetaPool));
    }

    let capabilities = match (descriptor.exchange_underlying, descriptor.initial_a) {
        (Some(exchange_underlying), Some(initial_a)) => SwapCapabilities {
            exchange_underlying,
            initial_a,
        },
        _ => probe.capabilities(descriptor.swap).await?.with_overrides(&descriptor),
    };

    let variant = PoolVariant::from_capabilities(capabilities);
    debug!("Resolved {} as {:?} ({:?})", name, variant, capabilities);

    Ok(ResolvedPool::new(descriptor, variant))
}
