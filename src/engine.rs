//! The modified scrypt hash.
//!
//! A password hash is the signer key encrypted with AES-256-CTR (zero IV)
//! under `scrypt(password, salt || salt_separator)`, encoded as base64.

use base64::{Engine, engine::general_purpose::STANDARD};
use subtle::ConstantTimeEq;

use crate::config::HashConfig;
use crate::crypto;
use crate::error::HashError;

/// Hash `password` with the base64 encoded `salt` under `config`.
///
/// # Errors
///
/// - [`HashError::Config`] if the signer key or salt separator is missing
/// - [`HashError::Decoding`] if `salt` is not valid base64
/// - [`HashError::Derivation`] if scrypt rejects the cost parameters
pub fn encode(password: &str, salt: &str, config: &HashConfig) -> Result<String, HashError> {
    if !config.is_configured() {
        return Err(HashError::Config);
    }

    let mut kdf_salt = STANDARD
        .decode(salt)
        .map_err(|e| HashError::decoding("salt", e))?;
    kdf_salt.extend_from_slice(config.salt_separator());

    let key = crypto::derive_key(password.as_bytes(), &kdf_salt, config.cost())?;
    let hash = crypto::sign(key.as_slice(), config.signer_key())?;

    Ok(STANDARD.encode(hash))
}

/// Check `password` against `password_hash`.
///
/// Any failure to recompute the hash counts as a mismatch.
pub fn verify(password: &str, password_hash: &str, salt: &str, config: &HashConfig) -> bool {
    match encode(password, salt, config) {
        Ok(hash) => hash.as_bytes().ct_eq(password_hash.as_bytes()).into(),
        Err(e) => {
            log::debug!("password verification failed: {} error", e.kind());
            false
        }
    }
}
