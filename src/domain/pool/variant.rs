use serde::Serialize;

use super::descriptor::PoolDescriptor;

/// Methods exposed by a swap contract that change how it is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SwapCapabilities {
    pub exchange_underlying: bool,
    pub initial_a: bool,
}

impl SwapCapabilities {
    /// Apply the overrides declared in the pool metadata
    pub fn with_overrides(self, descriptor: &PoolDescriptor) -> Self {
        Self {
            exchange_underlying: descriptor
                .exchange_underlying
                .unwrap_or(self.exchange_underlying),
            initial_a: descriptor.initial_a.unwrap_or(self.initial_a),
        }
    }
}

/// Registration shape of a pool, resolved once before it is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PoolVariant {
    /// Pool built on another pool's LP token
    MetaPool,
    /// Exposes `exchange_underlying` and `initial_A`
    UnderlyingPool,
    /// No `exchange_underlying`, exposes `initial_A`
    StandardPool,
    /// Predates `initial_A`
    LegacyPool { underlying: bool },
}

impl PoolVariant {
    pub fn from_capabilities(capabilities: SwapCapabilities) -> Self {
        match (capabilities.initial_a, capabilities.exchange_underlying) {
            (false, underlying) => PoolVariant::LegacyPool { underlying },
            (true, true) => PoolVariant::UnderlyingPool,
            (true, false) => PoolVariant::StandardPool,
        }
    }

    pub fn has_underlying(&self) -> bool {
        matches!(
            self,
            PoolVariant::UnderlyingPool | PoolVariant::LegacyPool { underlying: true }
        )
    }

    /// True when the swap lacks an `initial_A` accessor
    pub fn is_legacy_a(&self) -> bool {
        matches!(self, PoolVariant::LegacyPool { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            PoolVariant::MetaPool => "metapool",
            PoolVariant::UnderlyingPool => "underlying",
            PoolVariant::StandardPool => "standard",
            PoolVariant::LegacyPool { .. } => "legacy",
        }
    }
}

/// A descriptor together with its resolved variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPool {
    pub descriptor: PoolDescriptor,
    pub variant: PoolVariant,
}

impl ResolvedPool {
    pub fn new(descriptor: PoolDescriptor, variant: PoolVariant) -> Self {
        Self { descriptor, variant }
    }
}
