//! Utility functions and helpers

use alloy::primitives::U256;

/// Wei per 0.0001 ether
const WEI_PER_TEN_THOUSANDTH: u64 = 100_000_000_000_000;

/// Format a wei amount as ether with four decimals, rounding half up
pub fn format_eth(wei: U256) -> String {
    let step = U256::from(WEI_PER_TEN_THOUSANDTH);
    let units = wei.saturating_add(step / U256::from(2)) / step;
    let (whole, frac) = (units / U256::from(10_000), units % U256::from(10_000));
    // frac < 10_000 fits the low limb
    format!("{}.{:04}", whole, frac.as_limbs()[0])
}

/// Convert gwei to wei
pub fn gwei_to_wei(gwei: u64) -> u128 {
    gwei as u128 * 1_000_000_000
}
