//! Encoding of registry registration arguments

mod encoder;
mod packing;
mod rate_info;

pub use encoder::{encode_registration, RegistrationCall};
pub use packing::{pack_flags, pack_values, unpack_values, MAX_COINS};
pub use rate_info::{rate_method_id, RateInfo};
