use thiserror::Error;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("config error")]
    Config,
    #[error("invalid base64 in {field}: {source}")]
    Decoding {
        field: &'static str,
        #[source]
        source: base64::DecodeError,
    },
    #[error("scrypt key derivation failed: {0}")]
    Derivation(String),
    #[error("invalid AES key length: {len} bytes")]
    CipherInit { len: usize },
    #[error("salt length must be at least 1 byte")]
    SaltLength,
    #[error("OS random generator unavailable")]
    Random,
}

impl HashError {
    /// Short category name, safe to log.
    pub fn kind(&self) -> &'static str {
        match self {
            HashError::Config => "config",
            HashError::Decoding { .. } => "decoding",
            HashError::Derivation(_) => "derivation",
            HashError::CipherInit { .. } => "cipher-init",
            HashError::SaltLength => "salt-length",
            HashError::Random => "random",
        }
    }

    pub(crate) fn decoding(field: &'static str, source: base64::DecodeError) -> Self {
        HashError::Decoding { field, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_message_matches_legacy_text() {
        assert_eq!(HashError::Config.to_string(), "config error");
    }

    #[test]
    fn decoding_error_names_the_field() {
        let err = HashError::decoding("salt", base64::DecodeError::InvalidLength);
        assert_eq!(err.kind(), "decoding");
        assert!(err.to_string().contains("salt"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
