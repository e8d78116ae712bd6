//! Firebase-compatible "modified scrypt" password hashing.
//!
//! ```no_run
//! use firescrypt::HashConfig;
//!
//! let config = HashConfig::new("c2ln", "Bw==", 8, 14);
//! let hash = config.encode("secretPass", "c2FsdA==").unwrap();
//! assert!(config.verify("secretPass", &hash, "c2FsdA=="));
//! ```

mod config;
pub mod crypto;
pub mod engine;
mod error;

use base64::{Engine, engine::general_purpose::STANDARD};

pub use crate::config::HashConfig;
pub use crate::crypto::{KEY_LEN, PARALLELISM, SALT_LEN, ScryptCost};
pub use crate::error::HashError;

static DEFAULT_CONFIG: HashConfig = HashConfig::EMPTY;

/// The process-wide default configuration.
///
/// It carries no key material, so [`encode`] and [`verify`] always fail
/// against it. Build a [`HashConfig`] and pass it explicitly instead.
pub fn default_config() -> &'static HashConfig {
    &DEFAULT_CONFIG
}

/// Hash using the default configuration.
pub fn encode(password: &str, salt: &str) -> Result<String, HashError> {
    DEFAULT_CONFIG.encode(password, salt)
}

/// Verify using the default configuration.
pub fn verify(password: &str, password_hash: &str, salt: &str) -> bool {
    DEFAULT_CONFIG.verify(password, password_hash, salt)
}

/// Generate a random base64 encoded salt of `len` bytes.
pub fn generate_salt(len: usize) -> Result<String, HashError> {
    let salt = crypto::generate_salt_bytes(len)?;
    Ok(STANDARD.encode(salt))
}
