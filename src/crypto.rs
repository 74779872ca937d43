//! Login password encryption.
//!
//! The first authentication round does not send the password in the clear;
//! it sends `email\0password` encrypted with RSA-OAEP(SHA-1) against the
//! backend's published key, prefixed with a key-identifying digest and
//! URL-safe base64 encoded.

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine;
use rsa::{BigUint, Oaep, RsaPublicKey};
use sha1::{Digest, Sha1};

use crate::GpapiError;

/// The backend's login public key: 4-byte modulus length, modulus, 4-byte
/// exponent length, exponent.
const LOGIN_PUBKEY: &str = "AAAAgMom/1a/v0lblO2Ubrt60J2gcuXSljGFQXgcyZWveWLEwo6prwgi3iJIZdodyhKZQrNWp5nKJ3srRXcUW+F1BD3baEVGcmEgqaLZUNBjm057pKRI16kB0YppeGx5qIQ5QjKzsR8ETQbKLNWgRY0QRNVz34kMJR3P/LgHax/6rmf5AAAAAwEAAQ==";

/// Produces the `EncryptedPasswd` form value for `email` and `password`.
pub fn encrypt_password(email: &str, password: &str) -> Result<String, GpapiError> {
    let key = STANDARD.decode(LOGIN_PUBKEY)?;

    let modulus_len = be_u32(&key, 0)?;
    let modulus = key.get(4..4 + modulus_len).ok_or(GpapiError::MalformedKey)?;
    let exponent_off = 4 + modulus_len;
    let exponent_len = be_u32(&key, exponent_off)?;
    let exponent = key
        .get(exponent_off + 4..exponent_off + 4 + exponent_len)
        .ok_or(GpapiError::MalformedKey)?;

    let public_key = RsaPublicKey::new(
        BigUint::from_bytes_be(modulus),
        BigUint::from_bytes_be(exponent),
    )?;

    let mut message = Vec::with_capacity(email.len() + password.len() + 1);
    message.extend_from_slice(email.as_bytes());
    message.push(0);
    message.extend_from_slice(password.as_bytes());

    let ciphertext = public_key.encrypt(&mut rand::thread_rng(), Oaep::new::<Sha1>(), &message)?;

    // 0x00, then the first four bytes of the key digest, then the ciphertext
    let mut out = Vec::with_capacity(5 + ciphertext.len());
    out.push(0);
    out.extend_from_slice(&Sha1::digest(&key)[..4]);
    out.extend_from_slice(&ciphertext);
    Ok(URL_SAFE.encode(out))
}

fn be_u32(bytes: &[u8], at: usize) -> Result<usize, GpapiError> {
    let raw: [u8; 4] = bytes
        .get(at..at + 4)
        .ok_or(GpapiError::MalformedKey)?
        .try_into()
        .map_err(|_| GpapiError::MalformedKey)?;
    Ok(u32::from_be_bytes(raw) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypted_password_has_key_prefix() {
        let encrypted = encrypt_password("user@example.com", "hunter2").unwrap();
        let raw = URL_SAFE.decode(&encrypted).unwrap();

        let key = STANDARD.decode(LOGIN_PUBKEY).unwrap();
        assert_eq!(raw[0], 0);
        assert_eq!(&raw[1..5], &Sha1::digest(&key)[..4]);
        // 1024-bit modulus, so the OAEP block is 128 bytes
        assert_eq!(raw.len(), 5 + 128);
    }

    #[test]
    fn encryption_is_randomized() {
        let a = encrypt_password("user@example.com", "hunter2").unwrap();
        let b = encrypt_password("user@example.com", "hunter2").unwrap();
        assert_ne!(a, b);
    }
}
