use scrypt::Params;
use zeroize::Zeroizing;

use super::{KEY_LEN, PARALLELISM};
use crate::error::HashError;

// Upper bound on scrypt buffer sizes accepted by the legacy scheme.
const MAX_INT: u64 = i64::MAX as u64;

/// scrypt tuning parameters.
///
/// Memory usage of one derivation is `128 * rounds * 2^mem_cost` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScryptCost {
    rounds: u32,
    mem_cost: u32,
}

impl Default for ScryptCost {
    fn default() -> Self {
        Self {
            // scrypt block size `r`
            rounds: 8,
            // N = 2^14
            mem_cost: 14,
        }
    }
}

impl ScryptCost {
    pub const fn new(rounds: u32, mem_cost: u32) -> Self {
        Self { rounds, mem_cost }
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn mem_cost(&self) -> u32 {
        self.mem_cost
    }

    /// Working memory of a single derivation, `None` if it overflows.
    pub fn memory_bytes(&self) -> Option<u64> {
        if self.mem_cost >= 64 {
            return None;
        }
        128u64
            .checked_mul(u64::from(self.rounds))?
            .checked_mul(1u64 << self.mem_cost)
    }

    pub fn validate(&self) -> Result<(), HashError> {
        if self.mem_cost < 1 || self.mem_cost >= 64 {
            return Err(HashError::Derivation(format!(
                "memory cost exponent must be between 1 and 63, got {}",
                self.mem_cost
            )));
        }
        if self.rounds < 1 {
            return Err(HashError::Derivation("rounds must be >= 1".to_string()));
        }

        let n = 1u64 << self.mem_cost;
        let r = u64::from(self.rounds);
        let p = u64::from(PARALLELISM);
        if r * p >= 1 << 30 || r > MAX_INT / 128 / p || r > MAX_INT / 256 || n > MAX_INT / 128 / r {
            return Err(HashError::Derivation("parameters are too large".to_string()));
        }

        match self.memory_bytes() {
            Some(bytes) if usize::try_from(bytes).is_ok() => Ok(()),
            _ => Err(HashError::Derivation(
                "working memory exceeds the addressable limit".to_string(),
            )),
        }
    }
}

/// Derive the AES key from a password and the full scrypt salt.
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    cost: ScryptCost,
) -> Result<Zeroizing<[u8; KEY_LEN]>, HashError> {
    cost.validate()?;

    log::debug!(
        "deriving scrypt key (log_n={}, r={}, p={PARALLELISM})",
        cost.mem_cost,
        cost.rounds
    );

    // validate() bounds mem_cost below 64
    let log_n = cost.mem_cost as u8;
    let params = Params::new(log_n, cost.rounds, PARALLELISM, KEY_LEN)
        .map_err(|e| HashError::Derivation(format!("invalid scrypt params: {e}")))?;

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    scrypt::scrypt(password, salt, &params, &mut key[..])
        .map_err(|e| HashError::Derivation(e.to_string()))?;

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Cheap parameters so the tests stay fast in debug builds.
    const TEST_COST: ScryptCost = ScryptCost::new(1, 4);

    #[test]
    fn kdf_is_deterministic() {
        let salt = [42u8; 16];

        let k1 = derive_key(b"password", &salt, TEST_COST).unwrap();
        let k2 = derive_key(b"password", &salt, TEST_COST).unwrap();

        assert_eq!(*k1, *k2);
    }

    #[test]
    fn kdf_params_affect_output() {
        let salt = [7u8; 16];

        let k1 = derive_key(b"pw", &salt, ScryptCost::new(1, 4)).unwrap();
        let k2 = derive_key(b"pw", &salt, ScryptCost::new(1, 5)).unwrap();
        let k3 = derive_key(b"pw", &salt, ScryptCost::new(2, 4)).unwrap();

        assert_ne!(*k1, *k2);
        assert_ne!(*k1, *k3);
    }

    #[test]
    fn kdf_salt_affects_output() {
        let k1 = derive_key(b"pw", b"salt\x07", TEST_COST).unwrap();
        let k2 = derive_key(b"pw", b"salt\x08", TEST_COST).unwrap();

        assert_ne!(*k1, *k2);
    }

    #[test]
    fn default_cost_matches_firebase_defaults() {
        let cost = ScryptCost::default();
        assert_eq!(cost.rounds(), 8);
        assert_eq!(cost.mem_cost(), 14);
        assert_eq!(cost.memory_bytes(), Some(16 * 1024 * 1024));
    }

    #[test]
    fn kdf_invalid_params_fail_gracefully() {
        for cost in [
            ScryptCost::new(0, 0),
            ScryptCost::new(8, 0),
            ScryptCost::new(0, 14),
            ScryptCost::new(8, 64),
            ScryptCost::new(1 << 30, 14),
            // rejected by scrypt itself: log_n must stay below 16 * r
            ScryptCost::new(1, 16),
        ] {
            match derive_key(b"pw", b"salt", cost) {
                Err(HashError::Derivation(_)) => {}
                other => panic!("expected Derivation error for {cost:?}, got: {other:?}"),
            }
        }
    }

    #[test]
    fn memory_bytes_overflow_is_none() {
        assert_eq!(ScryptCost::new(u32::MAX, 63).memory_bytes(), None);
        assert_eq!(ScryptCost::new(1, 64).memory_bytes(), None);
    }
}
