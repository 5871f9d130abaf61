//! Vigenère polyalphabetic shift cipher.
//!
//! The key repeats cyclically over the whole input, and the key index
//! advances over non-letter characters as well. Long texts with embedded
//! spaces therefore align the key differently from variants that skip
//! non-letters; changing this would break round-trips with existing
//! ciphertexts, so the behavior is kept.

use crate::errors::ClassicalCryptoError;

const ALPHABET_LEN: u8 = 26;

/// Encrypts `plaintext` with a repeating letter key.
///
/// The output is fully uppercased; non-letter characters pass through
/// unchanged (but still consume a key position).
///
/// # Errors
///
/// Returns `ClassicalCryptoError::InvalidKey` for an empty key or a key
/// containing non-letter characters.
///
/// # Example
///
/// ```
/// # use classical_crypto::vigenere;
/// let cipher = vigenere::encrypt("ATTACKATDAWN", "LEMONLEMONLE").unwrap();
/// assert_eq!(cipher, "LXFOPVEFRNHR");
/// ```
pub fn encrypt(plaintext: &str, key: &str) -> Result<String, ClassicalCryptoError> {
    let key = validate_key(key)?;

    let mut ciphertext = String::with_capacity(plaintext.len());
    for (i, ch) in plaintext.chars().enumerate() {
        let ch = ch.to_ascii_uppercase();
        if ch.is_ascii_uppercase() {
            let p = ch as u8 - b'A';
            let k = key[i % key.len()];
            ciphertext.push((((p + k) % ALPHABET_LEN) + b'A') as char);
        } else {
            ciphertext.push(ch);
        }
    }

    Ok(ciphertext)
}

/// Decrypts `ciphertext` with a repeating letter key.
///
/// Mirrors [`encrypt`]: `decrypt(encrypt(p, k), k)` returns `p` uppercased.
///
/// # Errors
///
/// Returns `ClassicalCryptoError::InvalidKey` for an empty key or a key
/// containing non-letter characters.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String, ClassicalCryptoError> {
    let key = validate_key(key)?;

    let mut plaintext = String::with_capacity(ciphertext.len());
    for (i, ch) in ciphertext.chars().enumerate() {
        let ch = ch.to_ascii_uppercase();
        if ch.is_ascii_uppercase() {
            let c = ch as u8 - b'A';
            let k = key[i % key.len()];
            plaintext.push((((c + ALPHABET_LEN - k) % ALPHABET_LEN) + b'A') as char);
        } else {
            plaintext.push(ch);
        }
    }

    Ok(plaintext)
}

// Uppercases the key and converts it to shift values in [0, 26).
fn validate_key(key: &str) -> Result<Vec<u8>, ClassicalCryptoError> {
    if key.is_empty() {
        return Err(ClassicalCryptoError::InvalidKey(
            "Key must not be empty".into(),
        ));
    }

    key.chars()
        .map(|ch| {
            if ch.is_ascii_alphabetic() {
                Ok(ch.to_ascii_uppercase() as u8 - b'A')
            } else {
                Err(ClassicalCryptoError::InvalidKey(format!(
                    "Key contains non-letter character '{}'",
                    ch
                )))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        assert_eq!(
            encrypt("ATTACKATDAWN", "LEMONLEMONLE").unwrap(),
            "LXFOPVEFRNHR"
        );
        assert_eq!(
            decrypt("LXFOPVEFRNHR", "LEMONLEMONLE").unwrap(),
            "ATTACKATDAWN"
        );
    }

    #[test]
    fn test_lowercase_input_is_uppercased() {
        assert_eq!(
            encrypt("attackatdawn", "lemonlemonle").unwrap(),
            "LXFOPVEFRNHR"
        );
    }

    #[test]
    fn test_key_index_advances_over_non_letters() {
        // The space and comma consume key positions without being shifted.
        assert_eq!(encrypt("HELLO, WORLD!", "KEY").unwrap(), "RIJVS, AMBPB!");
        assert_eq!(decrypt("RIJVS, AMBPB!", "KEY").unwrap(), "HELLO, WORLD!");
    }

    #[test]
    fn test_empty_key_is_rejected() {
        assert!(matches!(
            encrypt("ABC", ""),
            Err(ClassicalCryptoError::InvalidKey(_))
        ));
        assert!(matches!(
            decrypt("ABC", ""),
            Err(ClassicalCryptoError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_non_letter_key_is_rejected() {
        assert!(matches!(
            encrypt("ABC", "K3Y"),
            Err(ClassicalCryptoError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_empty_plaintext() {
        assert_eq!(encrypt("", "KEY").unwrap(), "");
    }
}
