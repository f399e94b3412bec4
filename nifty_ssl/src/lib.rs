//! Crypto helpers for the SSL session layer: HKDF-SHA256 key derivation and
//! strict hex decoding of externally supplied key material.

#![warn(rust_2018_idioms)]

pub mod crypt;

pub use crate::crypt::error::CryptoError;
pub use crate::crypt::hex::{decode_hex, encode_hex};
pub use crate::crypt::hkdf::{hkdf, Hkdf, MAX_OUTPUT_LEN};
pub use crate::crypt::hmac::{hmac_sha256, KeyedHash, RingHmacSha256, SHA256_OUTPUT_LEN};
