//! Gauge domain - the fixed-size gauge list stored by the registry

use alloy::primitives::Address;
use serde::Serialize;

/// Number of gauge slots the registry keeps per pool
pub const GAUGE_SLOTS: usize = 10;

/// Gauge addresses padded with the zero address to exactly `GAUGE_SLOTS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GaugeList([Address; GAUGE_SLOTS]);

impl GaugeList {
    /// Pad `gauges` with zero addresses; entries past the last slot are dropped
    pub fn padded(gauges: &[Address]) -> Self {
        let mut slots = [Address::ZERO; GAUGE_SLOTS];
        for (slot, gauge) in slots.iter_mut().zip(gauges) {
            *slot = *gauge;
        }
        Self(slots)
    }

    pub fn as_array(&self) -> &[Address; GAUGE_SLOTS] {
        &self.0
    }

    pub fn into_array(self) -> [Address; GAUGE_SLOTS] {
        self.0
    }

    /// Non-zero slots, in order
    pub fn active(&self) -> impl Iterator<Item = &Address> {
        self.0.iter().filter(|gauge| !gauge.is_zero())
    }
}

impl From<[Address; GAUGE_SLOTS]> for GaugeList {
    fn from(slots: [Address; GAUGE_SLOTS]) -> Self {
        Self(slots)
    }
}

impl Default for GaugeList {
    fn default() -> Self {
        Self([Address::ZERO; GAUGE_SLOTS])
    }
}
