use std::fmt;

use base64::{DecodeError, Engine, engine::general_purpose::STANDARD};
use zeroize::Zeroize;

use crate::crypto::ScryptCost;
use crate::engine;
use crate::error::HashError;

/// Deployment-wide parameters of the modified scrypt scheme.
///
/// Immutable after construction and safe to share between threads.
#[derive(Clone, PartialEq, Eq)]
pub struct HashConfig {
    signer_key: Vec<u8>,
    salt_separator: Vec<u8>,
    cost: ScryptCost,
}

impl Drop for HashConfig {
    fn drop(&mut self) {
        self.signer_key.zeroize();
        self.salt_separator.zeroize();
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for HashConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashConfig")
            .field("signer_key_len", &self.signer_key.len())
            .field("salt_separator_len", &self.salt_separator.len())
            .field("rounds", &self.cost.rounds())
            .field("mem_cost", &self.cost.mem_cost())
            .finish()
    }
}

impl HashConfig {
    /// Unconfigured instance. Every operation against it fails with [`HashError::Config`].
    pub const EMPTY: Self = Self {
        signer_key: Vec::new(),
        salt_separator: Vec::new(),
        cost: ScryptCost::new(0, 0),
    };

    /// Builds a configuration from base64 encoded key material.
    ///
    /// Malformed base64 is not reported here: the affected field is left
    /// empty and every later `encode` fails with [`HashError::Config`].
    /// Use [`HashConfig::try_new`] to reject bad input up front.
    pub fn new(signer_key: &str, salt_separator: &str, rounds: u32, mem_cost: u32) -> Self {
        Self {
            signer_key: decode_lenient("signer key", signer_key),
            salt_separator: decode_lenient("salt separator", salt_separator),
            cost: ScryptCost::new(rounds, mem_cost),
        }
    }

    /// Like [`HashConfig::new`], but returns [`HashError::Decoding`] on malformed base64.
    pub fn try_new(
        signer_key: &str,
        salt_separator: &str,
        rounds: u32,
        mem_cost: u32,
    ) -> Result<Self, HashError> {
        let signer_key = STANDARD
            .decode(signer_key)
            .map_err(|e| HashError::decoding("signer key", e))?;
        let salt_separator = STANDARD
            .decode(salt_separator)
            .map_err(|e| HashError::decoding("salt separator", e))?;

        Ok(Self {
            signer_key,
            salt_separator,
            cost: ScryptCost::new(rounds, mem_cost),
        })
    }

    pub fn signer_key(&self) -> &[u8] {
        &self.signer_key
    }

    pub fn salt_separator(&self) -> &[u8] {
        &self.salt_separator
    }

    pub fn rounds(&self) -> u32 {
        self.cost.rounds()
    }

    pub fn mem_cost(&self) -> u32 {
        self.cost.mem_cost()
    }

    pub fn cost(&self) -> ScryptCost {
        self.cost
    }

    /// True when both the signer key and the salt separator are present.
    pub fn is_configured(&self) -> bool {
        !self.signer_key.is_empty() && !self.salt_separator.is_empty()
    }

    /// Hash `password` with the base64 encoded `salt`. See [`engine::encode`].
    pub fn encode(&self, password: &str, salt: &str) -> Result<String, HashError> {
        engine::encode(password, salt, self)
    }

    /// Check `password` against a stored hash. See [`engine::verify`].
    pub fn verify(&self, password: &str, password_hash: &str, salt: &str) -> bool {
        engine::verify(password, password_hash, salt, self)
    }
}

fn decode_lenient(field: &str, input: &str) -> Vec<u8> {
    match STANDARD.decode(input) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("ignoring {field}: {}", decode_failure(&e));
            Vec::new()
        }
    }
}

// Never includes the offending byte or its offset.
fn decode_failure(e: &DecodeError) -> &'static str {
    match e {
        DecodeError::InvalidByte(..) => "invalid base64 byte",
        DecodeError::InvalidLength => "invalid base64 length",
        DecodeError::InvalidLastSymbol(..) => "invalid base64 last symbol",
        DecodeError::InvalidPadding => "invalid base64 padding",
    }
}
