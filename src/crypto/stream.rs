use super::BLOCK_LEN;
use crate::error::HashError;
use aes::Aes256;
use ctr::cipher::{KeyIvInit, StreamCipher};
use getrandom::fill;

type Aes256Ctr = ctr::Ctr128BE<Aes256>;

/// Fill buffer with cryptographically secure random bytes
fn secure_random(buf: &mut [u8]) -> Result<(), HashError> {
    fill(buf).map_err(|_| HashError::Random)
}

/// Generate a random salt of `len` bytes
pub fn generate_salt_bytes(len: usize) -> Result<Vec<u8>, HashError> {
    if len == 0 {
        return Err(HashError::SaltLength);
    }
    let mut salt = vec![0u8; len];
    secure_random(&mut salt)?;
    Ok(salt)
}

/// Encrypt the signer key under `key` with AES-CTR starting from an all-zero counter.
///
/// The output has the same length as `signer_key`.
pub fn sign(key: &[u8], signer_key: &[u8]) -> Result<Vec<u8>, HashError> {
    let iv = [0u8; BLOCK_LEN];
    let mut cipher = Aes256Ctr::new_from_slices(key, &iv)
        .map_err(|_| HashError::CipherInit { len: key.len() })?;

    let mut out = signer_key.to_vec();
    cipher.apply_keystream(&mut out);
    Ok(out)
}
