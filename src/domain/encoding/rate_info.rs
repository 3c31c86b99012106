use std::fmt;

use alloy::primitives::{Address, Selector, B256};

use crate::shared::errors::EncodeError;

/// Rate-fetch method of each known wrapped-asset contract
const RATE_METHOD_IDS: &[(&str, [u8; 4])] = &[
    ("ATokenMock", [0x00, 0x00, 0x00, 0x00]),
    // ratio - requires a rate calculator deployment
    ("aETH", [0x71, 0xca, 0x33, 0x7d]),
    // exchangeRateStored
    ("cERC20", [0x18, 0x2d, 0xf0, 0xf5]),
    // tokenPrice
    ("IdleToken", [0x7f, 0xf9, 0xb5, 0x96]),
    // exchangeRateCurrent
    ("renERC20", [0xbd, 0x6d, 0x89, 0x4d]),
    // getPricePerFullShare
    ("yERC20", [0x77, 0xc7, 0xb8, 0xfc]),
];

/// Look up the rate method of a wrapped-asset contract type
pub fn rate_method_id(wrapped_contract: &str) -> Result<Selector, EncodeError> {
    RATE_METHOD_IDS
        .iter()
        .find(|(name, _)| *name == wrapped_contract)
        .map(|(_, selector)| Selector::new(*selector))
        .ok_or_else(|| EncodeError::UnknownWrappedContract(wrapped_contract.to_string()))
}

/// How the registry fetches a pool's exchange rates: a method selector,
/// optionally called on a separate calculator contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RateInfo {
    pub calculator: Option<Address>,
    pub selector: Selector,
}

impl RateInfo {
    pub fn resolve(
        wrapped_contract: Option<&str>,
        rate_calculator: Option<Address>,
    ) -> Result<Self, EncodeError> {
        let selector = match wrapped_contract {
            Some(name) => rate_method_id(name)?,
            None => Selector::ZERO,
        };
        Ok(Self {
            calculator: rate_calculator,
            selector,
        })
    }

    /// 4 bytes, or 24 bytes when a calculator is set
    pub fn to_vec(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(24);
        if let Some(calculator) = self.calculator {
            bytes.extend_from_slice(calculator.as_slice());
        }
        bytes.extend_from_slice(self.selector.as_slice());
        bytes
    }

    /// Right-aligned in a 32-byte word
    pub fn to_bytes32(&self) -> B256 {
        let bytes = self.to_vec();
        let mut word = [0u8; 32];
        word[32 - bytes.len()..].copy_from_slice(&bytes);
        B256::from(word)
    }
}

impl fmt::Display for RateInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_vec()))
    }
}
