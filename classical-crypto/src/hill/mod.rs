//! Hill matrix cipher over Z_26.
//!
//! The whole input is treated as a single block: its letter count must equal
//! the key matrix dimension. Decryption inverts the key matrix exactly in the
//! ring (determinant, adjugate, modular inverse of the determinant); a key
//! whose determinant shares a factor with 26 has no inverse and is rejected.

use crate::errors::ClassicalCryptoError;
use crate::preset::alphabet::{LETTER_MODULUS, index_to_letter, letter_to_index};
use crate::ring::{Matrix, Ring, Vector, matrix_ops};

/// Encrypts a single block with `key_matrix · v mod 26`.
///
/// # Errors
///
/// - `InvalidBlockLength` when the letter count differs from the matrix
///   dimension.
/// - `DimensionMismatch` for an empty, ragged or non-square matrix.
/// - `UnsupportedCharacter` for non-letter input.
///
/// # Example
///
/// ```
/// # use classical_crypto::hill;
/// let key = vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]];
/// assert_eq!(hill::encrypt("ACT", &key).unwrap(), "POH");
/// ```
pub fn encrypt(plaintext: &str, key_matrix: &Matrix) -> Result<String, ClassicalCryptoError> {
    let ring = Ring::try_with(LETTER_MODULUS)?;
    let block = text_to_block(plaintext, matrix_ops::check_square(key_matrix)?)?;

    let cipher_block = matrix_ops::matrix_vector_mul(key_matrix, &block, &ring)?;

    block_to_text(&cipher_block)
}

/// Decrypts a single block with the modular inverse of `key_matrix`.
///
/// # Errors
///
/// As [`encrypt`], plus `SingularKey` when `gcd(det(key_matrix), 26) != 1`
/// and decryption is therefore impossible.
///
/// # Example
///
/// ```
/// # use classical_crypto::hill;
/// let key = vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]];
/// assert_eq!(hill::decrypt("POH", &key).unwrap(), "ACT");
/// ```
pub fn decrypt(ciphertext: &str, key_matrix: &Matrix) -> Result<String, ClassicalCryptoError> {
    let ring = Ring::try_with(LETTER_MODULUS)?;
    let block = text_to_block(ciphertext, matrix_ops::check_square(key_matrix)?)?;

    let inverse_key = matrix_ops::matrix_inverse(key_matrix, &ring).map_err(|e| match e {
        ClassicalCryptoError::NoInverse(message) => ClassicalCryptoError::SingularKey(message),
        other => other,
    })?;
    let plain_block = matrix_ops::matrix_vector_mul(&inverse_key, &block, &ring)?;

    block_to_text(&plain_block)
}

// Uppercases `text` and converts it to a block vector of exactly `dimension`
// entries in [0, 26).
fn text_to_block(text: &str, dimension: usize) -> Result<Vector, ClassicalCryptoError> {
    let letters: Vec<char> = text.to_ascii_uppercase().chars().collect();
    if letters.len() != dimension {
        return Err(ClassicalCryptoError::InvalidBlockLength(format!(
            "Input has {} letters but the key matrix dimension is {}",
            letters.len(),
            dimension
        )));
    }

    letters.into_iter().map(letter_to_index).collect()
}

fn block_to_text(block: &Vector) -> Result<String, ClassicalCryptoError> {
    block.iter().map(|&value| index_to_letter(value)).collect()
}
