use crate::crypt::error::CryptoError;

/// Decode a hex string into bytes. Both `a-f` and `A-F` are accepted.
///
/// The input is taken as-is: surrounding whitespace or a `0x` prefix is
/// malformed like any other non-hex character.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, CryptoError> {
    hex::decode(text).map_err(|err| match err {
        hex::FromHexError::OddLength => {
            CryptoError::MalformedInput(format!("odd hex string length {}", text.len()))
        }
        hex::FromHexError::InvalidHexCharacter { c, index } => CryptoError::MalformedInput(
            format!("invalid hex character {:?} at index {}", c, index),
        ),
        other => CryptoError::MalformedInput(other.to_string()),
    })
}

/// Lowercase hex encoding, used for printing derived keys.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
