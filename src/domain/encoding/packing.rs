use alloy::primitives::U256;

use crate::shared::errors::EncodeError;

/// Coin slots held by the registry per pool
pub const MAX_COINS: usize = 8;

/// Pack one byte per coin into a word, coin 0 in the least-significant byte
pub fn pack_values(values: &[u8]) -> Result<U256, EncodeError> {
    if values.len() > MAX_COINS {
        return Err(EncodeError::TooManyCoins(values.len(), MAX_COINS));
    }
    Ok(U256::from_le_slice(values))
}

/// Inverse of [`pack_values`] for `count` slots
pub fn unpack_values(packed: U256, count: usize) -> Vec<u8> {
    (0..count.min(MAX_COINS)).map(|i| packed.byte(i)).collect()
}

/// Pack booleans as 0/1 slots
pub fn pack_flags(flags: impl IntoIterator<Item = bool>) -> Result<U256, EncodeError> {
    let values: Vec<u8> = flags.into_iter().map(u8::from).collect();
    pack_values(&values)
}
