use crate::errors::ClassicalCryptoError;

use lazy_static::lazy_static;
use std::collections::HashMap;

/// The 26-letter cipher alphabet, in order. A maps to 0, Z maps to 25.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The 25-letter Playfair alphabet with J omitted (J is folded into I).
pub const PLAYFAIR_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Size of the letter ring Z_26.
pub const LETTER_MODULUS: u64 = 26;

lazy_static! {
    /// A static HashMap mapping an uppercase letter (A-Z) to its numeric
    /// value in Z_26.
    pub static ref LETTER_TO_INDEX_MAP: HashMap<char, i64> = {
        ALPHABET
            .chars()
            .enumerate()
            .map(|(index, ch)| (ch, index as i64))
            .collect()
    };

    /// A static HashMap mapping a numeric value in Z_26 back to its
    /// uppercase letter (A-Z).
    pub static ref INDEX_TO_LETTER_MAP: HashMap<i64, char> = {
        let mut map = HashMap::new();

        for (&ch, &index) in LETTER_TO_INDEX_MAP.iter() {
            map.insert(index, ch);
        }

        map
    };
}

/// Converts an uppercase letter to its value in Z_26.
///
/// # Errors
///
/// Returns `ClassicalCryptoError::UnsupportedCharacter` for anything outside A-Z.
pub fn letter_to_index(letter: char) -> Result<i64, ClassicalCryptoError> {
    LETTER_TO_INDEX_MAP
        .get(&letter)
        .copied()
        .ok_or(ClassicalCryptoError::UnsupportedCharacter(letter))
}

/// Converts a value in `[0, 26)` back to its uppercase letter.
///
/// # Errors
///
/// Returns `ClassicalCryptoError::InternalError` for values outside the ring,
/// which only happens when a caller skipped normalization.
pub fn index_to_letter(index: i64) -> Result<char, ClassicalCryptoError> {
    INDEX_TO_LETTER_MAP.get(&index).copied().ok_or_else(|| {
        ClassicalCryptoError::InternalError(format!(
            "Index {} is outside the letter ring [0, {})",
            index, LETTER_MODULUS
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck::TestResult;
    use quickcheck::quickcheck;

    #[test]
    fn test_alphabet_endpoints() {
        assert_eq!(letter_to_index('A').unwrap(), 0);
        assert_eq!(letter_to_index('Z').unwrap(), 25);
        assert_eq!(index_to_letter(0).unwrap(), 'A');
        assert_eq!(index_to_letter(25).unwrap(), 'Z');
    }

    #[test]
    fn test_rejects_out_of_alphabet_input() {
        assert!(letter_to_index('a').is_err());
        assert!(letter_to_index('!').is_err());
        assert!(index_to_letter(26).is_err());
        assert!(index_to_letter(-1).is_err());
    }

    #[test]
    fn test_playfair_alphabet_has_no_j() {
        assert_eq!(PLAYFAIR_ALPHABET.len(), 25);
        assert!(!PLAYFAIR_ALPHABET.contains('J'));
    }

    quickcheck! {
        fn prop_letter_index_maps_are_inverse(value: u8) -> TestResult {
            let index = (value % LETTER_MODULUS as u8) as i64;

            let letter = match index_to_letter(index) {
                Ok(ch) => ch,
                Err(e) => return TestResult::error(format!("index {} not mapped: {}", index, e)),
            };

            match letter_to_index(letter) {
                Ok(back) => TestResult::from_bool(back == index),
                Err(e) => TestResult::error(format!("letter '{}' not mapped: {}", letter, e)),
            }
        }
    }
}
