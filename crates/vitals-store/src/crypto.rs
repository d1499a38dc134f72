use crate::{Error, Result};
use chacha20poly1305::aead::{Aead, AeadCore, KeyInit, OsRng};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};

const KEY_LEN: usize = 32;
const NONCE_LEN: usize = 12;

/// Envelope magic + format version. Bump on any layout change.
const MAGIC: &[u8; 4] = b"VDS1";

/// Symmetric authenticated cipher for remote artifacts.
///
/// The key is derived deterministically from the configured secret: its
/// bytes padded with `=` or truncated to 32 bytes, so the same secret on
/// any device opens the same store. Blobs carry a 4-byte magic, a random
/// 12-byte nonce, then the ChaCha20-Poly1305 ciphertext and tag. Any
/// mismatch surfaces as `Error::Integrity`, never as silent garbage.
pub struct Cipher {
    key: [u8; KEY_LEN],
}

impl Cipher {
    pub fn from_secret(secret: &str) -> Self {
        let mut key = [b'='; KEY_LEN];
        let bytes = secret.as_bytes();
        let len = bytes.len().min(KEY_LEN);
        key[..len].copy_from_slice(&bytes[..len]);
        Self { key }
    }

    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let aead = ChaCha20Poly1305::new(Key::from_slice(&self.key));
        let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);
        let ciphertext = aead
            .encrypt(&nonce, plaintext)
            .map_err(|_| Error::Integrity("encryption failed".to_string()))?;

        let mut blob = Vec::with_capacity(MAGIC.len() + NONCE_LEN + ciphertext.len());
        blob.extend_from_slice(MAGIC);
        blob.extend_from_slice(&nonce);
        blob.extend_from_slice(&ciphertext);
        Ok(blob)
    }

    pub fn decrypt(&self, blob: &[u8]) -> Result<Vec<u8>> {
        if blob.len() < MAGIC.len() + NONCE_LEN {
            return Err(Error::Integrity("blob too short for envelope".to_string()));
        }
        let (magic, rest) = blob.split_at(MAGIC.len());
        if magic != MAGIC {
            return Err(Error::Integrity(
                "unrecognized envelope magic (not an encrypted vitals blob?)".to_string(),
            ));
        }
        let (nonce, ciphertext) = rest.split_at(NONCE_LEN);

        let aead = ChaCha20Poly1305::new(Key::from_slice(&self.key));
        aead.decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| Error::Integrity("decryption failed (wrong key or corrupted data)".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let cipher = Cipher::from_secret("correct horse battery staple");
        let plaintext = br#"[{"date":"2024-01-01"}]"#;
        let blob = cipher.encrypt(plaintext).unwrap();
        assert_ne!(&blob[MAGIC.len() + NONCE_LEN..], plaintext.as_slice());
        assert_eq!(cipher.decrypt(&blob).unwrap(), plaintext);
    }

    #[test]
    fn nonces_differ_between_encryptions() {
        let cipher = Cipher::from_secret("secret");
        let a = cipher.encrypt(b"same").unwrap();
        let b = cipher.encrypt(b"same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn wrong_key_is_an_integrity_error() {
        let blob = Cipher::from_secret("key-one").encrypt(b"payload").unwrap();
        let err = Cipher::from_secret("key-two").decrypt(&blob).unwrap_err();
        assert!(matches!(err, Error::Integrity(_)));
    }

    #[test]
    fn tampered_ciphertext_is_rejected() {
        let cipher = Cipher::from_secret("secret");
        let mut blob = cipher.encrypt(b"payload").unwrap();
        let last = blob.len() - 1;
        blob[last] ^= 0x01;
        assert!(matches!(cipher.decrypt(&blob), Err(Error::Integrity(_))));
    }

    #[test]
    fn short_or_unmagic_blobs_are_rejected() {
        let cipher = Cipher::from_secret("secret");
        assert!(matches!(cipher.decrypt(b"x"), Err(Error::Integrity(_))));
        assert!(matches!(
            cipher.decrypt(b"not an envelope at all........"),
            Err(Error::Integrity(_))
        ));
    }

    #[test]
    fn key_derivation_pads_and_truncates() {
        // Short and long secrets both produce working 32-byte keys.
        for secret in ["s", &"x".repeat(100)] {
            let cipher = Cipher::from_secret(secret);
            let blob = cipher.encrypt(b"data").unwrap();
            assert_eq!(cipher.decrypt(&blob).unwrap(), b"data");
        }
    }
}
