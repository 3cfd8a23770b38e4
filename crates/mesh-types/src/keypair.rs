//! # secp256k1 Keypairs
//!
//! Account identity keys. Signing uses RFC 6979 deterministic nonces. The
//! wrapped [`SigningKey`] zeroizes its secret scalar on drop, so no extra
//! cleanup happens here; callers that copy the secret out via
//! [`Keypair::to_bytes`] own that copy's lifecycle.

use k256::ecdsa::{
    signature::{Signer, Verifier},
    Signature, SigningKey, VerifyingKey,
};

use crate::address::Address;
use crate::errors::TypeError;

/// secp256k1 ECDSA keypair.
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a random keypair from the system CSPRNG.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Restore from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, TypeError> {
        let signing_key =
            SigningKey::from_bytes(bytes.into()).map_err(|_| TypeError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Get secret key bytes (for keystore serialization).
    pub fn to_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes().into()
    }

    /// Get the compressed public key (33 bytes).
    pub fn public_key(&self) -> [u8; 33] {
        let verifying_key = self.signing_key.verifying_key();
        let sec1_bytes = verifying_key.to_sec1_bytes();
        // SEC1 compressed public key is always exactly 33 bytes
        let mut bytes = [0u8; 33];
        bytes.copy_from_slice(&sec1_bytes[..33]);
        bytes
    }

    /// Derive the account address for this keypair.
    pub fn address(&self) -> Address {
        Address::from_public_key(&self.public_key())
    }

    /// Sign a message (deterministic RFC 6979). Returns r||s bytes.
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        let sig: Signature = self.signing_key.sign(message);
        sig.to_bytes().into()
    }
}

/// Verify an r||s signature against a compressed public key.
pub fn verify_signature(
    pubkey: &[u8; 33],
    message: &[u8],
    signature: &[u8; 64],
) -> Result<(), TypeError> {
    let verifying_key =
        VerifyingKey::from_sec1_bytes(pubkey).map_err(|_| TypeError::InvalidPublicKey)?;
    let sig = Signature::from_slice(signature).map_err(|_| TypeError::InvalidPublicKey)?;
    verifying_key
        .verify(message, &sig)
        .map_err(|_| TypeError::InvalidPublicKey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_verify() {
        let keypair = Keypair::generate();
        let signature = keypair.sign(b"genesis");
        assert!(verify_signature(&keypair.public_key(), b"genesis", &signature).is_ok());
    }

    #[test]
    fn test_wrong_message_fails() {
        let keypair = Keypair::generate();
        let signature = keypair.sign(b"message1");
        assert!(verify_signature(&keypair.public_key(), b"message2", &signature).is_err());
    }

    #[test]
    fn test_roundtrip_bytes() {
        let original = Keypair::generate();
        let restored = Keypair::from_bytes(&original.to_bytes()).unwrap();
        assert_eq!(original.address(), restored.address());
    }

    #[test]
    fn test_deterministic_signatures() {
        let keypair = Keypair::from_bytes(&[0xABu8; 32]).unwrap();
        assert_eq!(keypair.sign(b"same input"), keypair.sign(b"same input"));
    }
}
