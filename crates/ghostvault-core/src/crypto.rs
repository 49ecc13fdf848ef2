//! Password based encryption of the message payload.
//!
//! The key is derived with PBKDF2-HMAC-SHA256 from the password and a fresh
//! random salt, the message is sealed with XChaCha20-Poly1305. The envelope
//! that ends up inside the carrier is `salt(16) || nonce(24) || ciphertext`,
//! where the ciphertext carries the Poly1305 tag.
//!
//! The random source is injected by the caller so that tests can pin the
//! salt and nonce, production code passes `rand::rngs::OsRng`.

use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};
use pbkdf2::pbkdf2_hmac;
use rand::{CryptoRng, RngCore};
use sha2::Sha256;
use zeroize::Zeroize;

use crate::error::GhostError;
use crate::result::Result;

pub const SALT_LEN: usize = 16;
pub const NONCE_LEN: usize = 24;
pub const KEY_LEN: usize = 32;
pub const TAG_LEN: usize = 16;
pub const PBKDF2_ROUNDS: u32 = 100_000;

/// Smallest well-formed envelope: salt, nonce and the tag of an empty message.
pub const MIN_ENVELOPE_LEN: usize = SALT_LEN + NONCE_LEN + TAG_LEN;

pub type Key = [u8; KEY_LEN];

/// Derive the symmetric key from a password and salt. Deterministic: the same
/// `(password, salt)` pair always yields the same key.
pub fn derive_key(password: &str, salt: &[u8; SALT_LEN]) -> Key {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ROUNDS, &mut key);
    key
}

/// Encrypt a message under a password, consuming entropy for salt and nonce
/// from `rng`. Returns the envelope `salt || nonce || ciphertext`.
pub fn encrypt<R>(message: &str, password: &str, rng: &mut R) -> Result<Vec<u8>>
where
    R: RngCore + CryptoRng,
{
    let mut salt = [0u8; SALT_LEN];
    rng.fill_bytes(&mut salt);
    let mut nonce = [0u8; NONCE_LEN];
    rng.fill_bytes(&mut nonce);

    let mut key = derive_key(password, &salt);
    let cipher = XChaCha20Poly1305::new(&key.into());
    let ciphertext = cipher
        .encrypt(XNonce::from_slice(&nonce), message.as_bytes())
        .map_err(|_| GhostError::EncryptionFailed)?;
    key.zeroize();

    let mut envelope = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
    envelope.extend_from_slice(&salt);
    envelope.extend_from_slice(&nonce);
    envelope.extend_from_slice(&ciphertext);

    Ok(envelope)
}

/// Decrypt an envelope back into the message text.
///
/// Fails closed with [`GhostError::DecryptionFailed`] on a short envelope, a
/// bad tag or invalid UTF-8 - the error carries no detail that would tell a
/// wrong password apart from corrupted data.
pub fn decrypt(envelope: &[u8], password: &str) -> Result<String> {
    if envelope.len() < MIN_ENVELOPE_LEN {
        return Err(GhostError::DecryptionFailed);
    }
    let salt: [u8; SALT_LEN] = envelope[..SALT_LEN]
        .try_into()
        .map_err(|_| GhostError::DecryptionFailed)?;
    let nonce = &envelope[SALT_LEN..SALT_LEN + NONCE_LEN];
    let ciphertext = &envelope[SALT_LEN + NONCE_LEN..];

    let mut key = derive_key(password, &salt);
    let cipher = XChaCha20Poly1305::new(&key.into());
    let plaintext = cipher
        .decrypt(XNonce::from_slice(nonce), ciphertext)
        .map_err(|_| GhostError::DecryptionFailed);
    key.zeroize();

    String::from_utf8(plaintext?).map_err(|_| GhostError::DecryptionFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::{OsRng, StdRng};
    use rand::SeedableRng;

    #[test]
    fn should_derive_the_same_key_for_the_same_password_and_salt() {
        let salt = [7u8; SALT_LEN];
        assert_eq!(derive_key("hunter42", &salt), derive_key("hunter42", &salt));
    }

    #[test]
    fn should_derive_different_keys_for_different_salts() {
        assert_ne!(
            derive_key("hunter42", &[1u8; SALT_LEN]),
            derive_key("hunter42", &[2u8; SALT_LEN])
        );
    }

    #[test]
    fn should_round_trip_a_message() {
        let envelope = encrypt("resistance is futile", "borg", &mut OsRng).unwrap();
        let message = decrypt(&envelope, "borg").unwrap();
        assert_eq!(message, "resistance is futile");
    }

    #[test]
    fn should_fail_closed_on_wrong_password() {
        let envelope = encrypt("classified", "right", &mut OsRng).unwrap();
        match decrypt(&envelope, "wrong") {
            Err(GhostError::DecryptionFailed) => (),
            other => panic!("expected opaque decryption failure, got {other:?}"),
        }
    }

    #[test]
    fn should_fail_closed_on_corrupted_envelope() {
        let mut envelope = encrypt("classified", "pw", &mut OsRng).unwrap();
        let last = envelope.len() - 1;
        envelope[last] ^= 0x01;
        assert!(matches!(
            decrypt(&envelope, "pw"),
            Err(GhostError::DecryptionFailed)
        ));
    }

    #[test]
    fn should_reject_a_truncated_envelope() {
        assert!(matches!(
            decrypt(&[0u8; MIN_ENVELOPE_LEN - 1], "pw"),
            Err(GhostError::DecryptionFailed)
        ));
    }

    #[test]
    fn should_place_the_salt_in_the_first_16_bytes() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut expected_salt = [0u8; SALT_LEN];
        StdRng::seed_from_u64(42).fill_bytes(&mut expected_salt);

        let envelope = encrypt("hello", "pw", &mut rng).unwrap();
        assert_eq!(&envelope[..SALT_LEN], &expected_salt);
        assert!(envelope.len() >= MIN_ENVELOPE_LEN + "hello".len());
    }

    #[test]
    fn should_produce_identical_envelopes_for_identical_rng_states() {
        let a = encrypt("hello", "pw", &mut StdRng::seed_from_u64(1)).unwrap();
        let b = encrypt("hello", "pw", &mut StdRng::seed_from_u64(1)).unwrap();
        let c = encrypt("hello", "pw", &mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
