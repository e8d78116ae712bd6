//! Cryptographic primitives for the hash engine.
//!
//! Provides scrypt key derivation, the AES-CTR signer transform, and salt generation.

pub mod kdf;
pub mod stream;

pub use kdf::{ScryptCost, derive_key};
pub use stream::{generate_salt_bytes, sign};

/// Length of the derived key (32 bytes / AES-256).
pub const KEY_LEN: usize = 32;
/// scrypt parallelism, fixed by the legacy scheme.
pub const PARALLELISM: u32 = 1;
/// AES block size, also the length of the all-zero counter block.
pub const BLOCK_LEN: usize = 16;
/// Default length of freshly generated salts (16 bytes).
pub const SALT_LEN: usize = 16;
