//! HKDF (RFC 5869) over HMAC-SHA256.
//!
//! `hkdf` runs the extract stage on the input keying material and expands the
//! resulting pseudo-random key into exactly `output_len` bytes. The
//! pseudo-random key never leaves this module.

use crate::crypt::error::CryptoError;
use crate::crypt::hmac::{KeyedHash, RingHmacSha256, SHA256_OUTPUT_LEN};
use std::cmp;
use std::convert::TryFrom;
use zeroize::Zeroizing;

/// Maximum value for the `output_len` parameter to `hkdf()`.
///
/// The expand counter is a single byte, so at most 255 blocks can be addressed.
pub const MAX_OUTPUT_LEN: usize = SHA256_OUTPUT_LEN * 255;

/// Salt used by the extract stage when the caller supplies none.
const NULL_SALT: [u8; SHA256_OUTPUT_LEN] = [0u8; SHA256_OUTPUT_LEN];

type Prk = Zeroizing<[u8; SHA256_OUTPUT_LEN]>;

/// HKDF engine over an arbitrary `KeyedHash` capability.
#[derive(Debug, Clone, Default)]
pub struct Hkdf<H> {
    hash: H,
}

impl<H: KeyedHash> Hkdf<H> {
    pub fn new(hash: H) -> Hkdf<H> {
        Hkdf { hash }
    }

    /// Derive `output_len` bytes from `ikm`.
    ///
    /// A missing `salt` is `SHA256_OUTPUT_LEN` zero bytes and a missing `info`
    /// is empty. Fails with `InvalidArgument` when `output_len` exceeds
    /// `MAX_OUTPUT_LEN`, before any HMAC is computed.
    pub fn derive(
        &self,
        ikm: &[u8],
        salt: Option<&[u8]>,
        info: Option<&[u8]>,
        output_len: usize,
    ) -> Result<Vec<u8>, CryptoError> {
        if output_len > MAX_OUTPUT_LEN {
            log::debug!(
                "hkdf rejected: output length {} exceeds {}",
                output_len,
                MAX_OUTPUT_LEN
            );
            return Err(CryptoError::InvalidArgument(format!(
                "output length too large {}",
                output_len
            )));
        }

        let prk = self.extract(salt, ikm)?;
        self.expand(&prk, info.unwrap_or(&[]), output_len)
    }

    /// The salt is the HMAC key and `ikm` the message, never the other way round.
    fn extract(&self, salt: Option<&[u8]>, ikm: &[u8]) -> Result<Prk, CryptoError> {
        let salt = salt.unwrap_or(&NULL_SALT);
        self.hash.mac(salt, &[ikm]).map(Zeroizing::new)
    }

    /// `T(i) = HMAC(prk, T(i-1) || info || i)` for `i` in `1..=ceil(output_len / 32)`.
    ///
    /// Each round copies at most the bytes still missing from the output, so
    /// the last block is truncated in place.
    fn expand(&self, prk: &Prk, info: &[u8], output_len: usize) -> Result<Vec<u8>, CryptoError> {
        let rounds = (output_len + SHA256_OUTPUT_LEN - 1) / SHA256_OUTPUT_LEN;
        let rounds = u8::try_from(rounds)
            .map_err(CryptoError::convert_error_fn("hkdf round count exceeds counter range"))?;
        log::trace!("hkdf expand: {} bytes in {} rounds", output_len, rounds);

        let mut okm = Zeroizing::new(vec![0u8; output_len]);
        let mut current: Prk = Zeroizing::new([0u8; SHA256_OUTPUT_LEN]);
        let mut current_len = 0;
        let mut written = 0;

        for counter in 1..=rounds {
            *current = self
                .hash
                .mac(&prk[..], &[&current[..current_len], info, &[counter][..]])?;
            current_len = SHA256_OUTPUT_LEN;

            let n = cmp::min(SHA256_OUTPUT_LEN, output_len - written);
            okm[written..written + n].copy_from_slice(&current[..n]);
            written += n;
        }
        debug_assert_eq!(written, output_len);

        Ok(std::mem::take(&mut *okm))
    }
}

/// HKDF-SHA256 as defined in RFC 5869.
///
/// `salt` does not need to be secret and may be reused across calls. `info`
/// binds the derived key to a particular context. See the RFC for guidance on
/// choosing either.
pub fn hkdf(
    ikm: &[u8],
    salt: Option<&[u8]>,
    info: Option<&[u8]>,
    output_len: usize,
) -> Result<Vec<u8>, CryptoError> {
    Hkdf::new(RingHmacSha256).derive(ikm, salt, info, output_len)
}
