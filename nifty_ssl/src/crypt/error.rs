use std::fmt;

/// Errors returned by the key derivation and decoding routines.
///
/// A returned error always means no key material was produced.
#[derive(Debug, PartialEq, Clone)]
pub enum CryptoError {
    /// A caller-supplied parameter violates a documented precondition.
    InvalidArgument(String),
    /// Textual key material is not a clean, even-length hex string.
    MalformedInput(String),
    /// The underlying HMAC primitive failed.
    InternalCryptoError(String),
}

impl CryptoError {
    /// `MalformedInput` is the decoding flavour of a bad argument, so both count here.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            CryptoError::InvalidArgument(_) | CryptoError::MalformedInput(_) => true,
            CryptoError::InternalCryptoError(_) => false,
        }
    }

    pub fn convert_error_fn<T>(error_str: &str) -> impl FnOnce(T) -> Self {
        let error_str = error_str.to_string();
        move |_| CryptoError::InternalCryptoError(error_str)
    }
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            CryptoError::MalformedInput(msg) => write!(f, "malformed input: {}", msg),
            CryptoError::InternalCryptoError(msg) => write!(f, "internal crypto error: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}
