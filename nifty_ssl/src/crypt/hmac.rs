use crate::crypt::error::CryptoError;
use ring::hmac;

/// Length of a SHA-256 output, in bytes.
pub const SHA256_OUTPUT_LEN: usize = 256 / 8;

/// A keyed hash producing a SHA-256 sized tag.
///
/// `message` is fed to the primitive part by part, in order, as one
/// concatenated message. Implementations must build a fresh keyed context
/// for every call.
pub trait KeyedHash {
    fn mac(&self, key: &[u8], message: &[&[u8]]) -> Result<[u8; SHA256_OUTPUT_LEN], CryptoError>;
}

/// HMAC-SHA256 backed by `ring`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RingHmacSha256;

impl KeyedHash for RingHmacSha256 {
    fn mac(&self, key: &[u8], message: &[&[u8]]) -> Result<[u8; SHA256_OUTPUT_LEN], CryptoError> {
        let key = hmac::Key::new(hmac::HMAC_SHA256, key);
        let mut ctx = hmac::Context::with_key(&key);
        for part in message {
            ctx.update(part);
        }
        let tag = ctx.sign();

        let tag = tag.as_ref();
        if tag.len() != SHA256_OUTPUT_LEN {
            return Err(CryptoError::InternalCryptoError(format!(
                "unexpected HMAC tag length {}",
                tag.len()
            )));
        }
        let mut out = [0u8; SHA256_OUTPUT_LEN];
        out.copy_from_slice(tag);
        Ok(out)
    }
}

/// One-shot HMAC-SHA256 over a single message.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> Result<[u8; SHA256_OUTPUT_LEN], CryptoError> {
    RingHmacSha256.mac(key, &[message])
}
