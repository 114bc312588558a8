use anyhow::Result;
use dsa::{Components, KeySize, Signature, SigningKey, VerifyingKey};
use pkcs8::EncodePublicKey;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use signature::{DigestVerifier, RandomizedDigestSigner, SignatureEncoding};

/// Process-lifetime DSA key pair.
///
/// Generated once at startup from the OS CSPRNG — there is no seed,
/// no rotation, and no persistence. A restarted process signs with a
/// new, unrelated key.
pub struct DsaKeyPair {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

/// Outcome of checking a candidate signature.
///
/// The HTTP boundary collapses everything non-`Valid` to `valid: false`;
/// the distinction exists so tests can tell a well-formed-but-wrong
/// signature apart from bytes that never parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    Valid,
    Invalid,
    Malformed,
}

impl VerifyOutcome {
    pub fn is_valid(self) -> bool {
        matches!(self, VerifyOutcome::Valid)
    }
}

impl DsaKeyPair {
    /// Generates a 1024-bit DSA key pair.
    pub fn generate() -> Self {
        let mut rng = OsRng;
        let components = Components::generate(&mut rng, KeySize::DSA_1024_160);
        let signing_key = SigningKey::generate(&mut rng, components);
        let verifying_key = signing_key.verifying_key().clone();
        Self {
            signing_key,
            verifying_key,
        }
    }

    /// Signs the SHA-256 digest of `message` with a fresh random nonce.
    /// Returns DER-encoded signature bytes; repeated calls over the same
    /// message produce different bytes that all verify.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let signature = self
            .signing_key
            .try_sign_digest_with_rng(&mut OsRng, Sha256::new_with_prefix(message))
            .map_err(|e| anyhow::anyhow!("DSA signing failed: {e}"))?;
        Ok(signature.to_vec())
    }

    /// Checks `signature_bytes` (DER) against the SHA-256 digest of `message`.
    pub fn verify(&self, message: &[u8], signature_bytes: &[u8]) -> VerifyOutcome {
        let signature = match Signature::try_from(signature_bytes) {
            Ok(signature) => signature,
            Err(_) => return VerifyOutcome::Malformed,
        };
        match self
            .verifying_key
            .verify_digest(Sha256::new_with_prefix(message), &signature)
        {
            Ok(()) => VerifyOutcome::Valid,
            Err(_) => VerifyOutcome::Invalid,
        }
    }

    /// Hex-decodes `signature_hex` and verifies. Undecodable hex is `Malformed`.
    pub fn verify_hex(&self, message: &[u8], signature_hex: &str) -> VerifyOutcome {
        match hex::decode(signature_hex) {
            Ok(bytes) => self.verify(message, &bytes),
            Err(_) => VerifyOutcome::Malformed,
        }
    }

    pub fn public_key_der(&self) -> Vec<u8> {
        self.verifying_key
            .to_public_key_der()
            .expect("encoding DSA public key to DER")
            .into_vec()
    }

    /// Hex SHA-256 of the SPKI encoding, for startup logging.
    pub fn public_key_fingerprint(&self) -> String {
        hex::encode(Sha256::digest(self.public_key_der()))
    }

    pub fn algorithm(&self) -> &str {
        "dsa-1024-sha256"
    }
}
