use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use ed25519_dalek::{SigningKey, SECRET_KEY_LENGTH};
use rand_core::OsRng;

use crate::error::{ClawsinoError, Result};

/// Ed25519 identity presented to `device/start`.
///
/// The server only ever sees the public half. Callers that want to reuse an
/// identity across device flows keep the secret via [`secret_key_base64`]
/// and restore it with [`from_secret_base64`].
///
/// [`secret_key_base64`]: DeviceKeyPair::secret_key_base64
/// [`from_secret_base64`]: DeviceKeyPair::from_secret_base64
pub struct DeviceKeyPair {
    signing_key: SigningKey,
}

impl DeviceKeyPair {
    /// Fresh key pair from the OS RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    pub fn from_secret_base64(encoded: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| ClawsinoError::InvalidArgument(format!("secret key is not base64: {e}")))?;
        let secret: [u8; SECRET_KEY_LENGTH] = bytes.try_into().map_err(|_| {
            ClawsinoError::InvalidArgument(format!(
                "secret key must be {SECRET_KEY_LENGTH} bytes"
            ))
        })?;
        Ok(Self {
            signing_key: SigningKey::from_bytes(&secret),
        })
    }

    pub fn public_key_base64(&self) -> String {
        STANDARD.encode(self.signing_key.verifying_key().as_bytes())
    }

    pub fn secret_key_base64(&self) -> String {
        STANDARD.encode(self.signing_key.to_bytes())
    }
}

impl std::fmt::Debug for DeviceKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceKeyPair")
            .field("public_key", &self.public_key_base64())
            .finish()
    }
}

/// Check that a caller-supplied public key is base64 of 32 bytes.
pub fn validate_public_key(encoded: &str) -> Result<String> {
    let trimmed = encoded.trim();
    let bytes = STANDARD
        .decode(trimmed)
        .map_err(|e| ClawsinoError::InvalidArgument(format!("public key is not base64: {e}")))?;
    if bytes.len() != 32 {
        return Err(ClawsinoError::InvalidArgument(format!(
            "public key must be 32 bytes, got {}",
            bytes.len()
        )));
    }
    Ok(trimmed.to_string())
}
