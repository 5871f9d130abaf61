use classical_crypto::errors::ClassicalCryptoError;
use classical_crypto::playfair::KeyTable;
use classical_crypto::preset::PLAYFAIR_ALPHABET;
use classical_crypto::ring::Matrix;
use classical_crypto::{hill, playfair, vigenere};

#[test]
fn vigenere_rejects_empty_key() {
    assert!(matches!(
        vigenere::encrypt("ATTACK AT DAWN", ""),
        Err(ClassicalCryptoError::InvalidKey(_))
    ));
    assert!(matches!(
        vigenere::decrypt("LXFOPVEFRNHR", ""),
        Err(ClassicalCryptoError::InvalidKey(_))
    ));
}

#[test]
fn vigenere_rejects_malformed_key() {
    for key in ["K3Y", "LEMON LEMON", "KEY!"] {
        assert!(matches!(
            vigenere::encrypt("ATTACK", key),
            Err(ClassicalCryptoError::InvalidKey(_))
        ));
    }
}

#[test]
fn playfair_rejects_odd_ciphertext() {
    assert!(matches!(
        playfair::decrypt("CFPPA", "MONARCHY"),
        Err(ClassicalCryptoError::InvalidCiphertext(_))
    ));
    // Spaces are stripped before the length check.
    assert!(matches!(
        playfair::decrypt("CF PPA", "MONARCHY"),
        Err(ClassicalCryptoError::InvalidCiphertext(_))
    ));
}

#[test]
fn playfair_rejects_out_of_alphabet_characters() {
    assert!(matches!(
        playfair::encrypt("HELLO4U2", "MONARCHY"),
        Err(ClassicalCryptoError::UnsupportedCharacter('4'))
    ));
}

#[test]
fn playfair_table_covers_alphabet_for_any_key() {
    for key in ["MONARCHY", "", "AAAA", "THE QUICK BROWN FOX", "JJJ"] {
        let mut letters: Vec<char> = KeyTable::build(key).letters().collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.iter().collect::<String>(), PLAYFAIR_ALPHABET);
    }
}

#[test]
fn hill_rejects_mismatched_block_length() {
    let key: Matrix = vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]];
    assert!(matches!(
        hill::encrypt("ACTNOW", &key),
        Err(ClassicalCryptoError::InvalidBlockLength(_))
    ));
    assert!(matches!(
        hill::decrypt("PO", &key),
        Err(ClassicalCryptoError::InvalidBlockLength(_))
    ));
}

#[test]
fn hill_rejects_singular_key_on_decrypt() {
    // determinant -8 = 18 mod 26 shares the factor 2 with 26
    let singular: Matrix = vec![vec![2, 4], vec![6, 8]];
    let cipher = hill::encrypt("HI", &singular).expect("encrypt works without the inverse");
    assert!(matches!(
        hill::decrypt(&cipher, &singular),
        Err(ClassicalCryptoError::SingularKey(_))
    ));
}

#[test]
fn hill_rejects_non_square_key() {
    let ragged: Matrix = vec![vec![1, 2], vec![3, 4, 5]];
    assert!(matches!(
        hill::encrypt("AB", &ragged),
        Err(ClassicalCryptoError::DimensionMismatch(_))
    ));
}
