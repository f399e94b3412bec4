pub mod error;
pub mod hex;
pub mod hkdf;
pub mod hmac;
