//! Playfair digraph substitution cipher over a 5x5 key table.
//!
//! Input is uppercased, J is folded into I, spaces are stripped and the text
//! is padded with a trailing X when its length is odd. Repeated letters
//! inside a digraph ("LL") are substituted as-is; the textbook rule of
//! inserting a filler between them is deliberately not applied, so existing
//! ciphertexts keep round-tripping. Both halves of such a digraph land in
//! the same-row branch, which is its own inverse pair under left/right
//! shifts.

use crate::errors::ClassicalCryptoError;
use crate::preset::alphabet::PLAYFAIR_ALPHABET;

use itertools::Itertools;
use std::collections::HashMap;

/// Side length of the key table.
pub const TABLE_SIZE: usize = 5;

/// The 5x5 Playfair key table with a reverse letter-to-position index.
///
/// Built once per encrypt/decrypt call. Construction guarantees the grid is
/// a permutation of the 25-letter alphabet, so position lookups are
/// unambiguous.
#[derive(Debug, Clone)]
pub struct KeyTable {
    grid: [[char; TABLE_SIZE]; TABLE_SIZE],
    positions: HashMap<char, (usize, usize)>,
}

impl KeyTable {
    /// Derives the table from a key string.
    ///
    /// Key letters are uppercased and filtered to the 25-letter alphabet
    /// (which drops any J), deduplicated preserving first occurrence, and
    /// followed by the remaining alphabet letters in natural order.
    pub fn build(key: &str) -> Self {
        let key_upper = key.to_ascii_uppercase();
        let letters = key_upper
            .chars()
            .filter(|ch| PLAYFAIR_ALPHABET.contains(*ch))
            .chain(PLAYFAIR_ALPHABET.chars())
            .unique();

        let mut grid = [['A'; TABLE_SIZE]; TABLE_SIZE];
        let mut positions = HashMap::with_capacity(TABLE_SIZE * TABLE_SIZE);
        for (i, ch) in letters.enumerate() {
            let (row, col) = (i / TABLE_SIZE, i % TABLE_SIZE);
            grid[row][col] = ch;
            positions.insert(ch, (row, col));
        }

        Self { grid, positions }
    }

    /// Returns the letter at the given grid coordinates.
    pub fn letter_at(&self, row: usize, col: usize) -> char {
        self.grid[row][col]
    }

    /// Looks up the (row, column) of a letter.
    ///
    /// # Errors
    ///
    /// Returns `ClassicalCryptoError::UnsupportedCharacter` for letters
    /// outside the 25-letter alphabet.
    pub fn position(&self, letter: char) -> Result<(usize, usize), ClassicalCryptoError> {
        self.positions
            .get(&letter)
            .copied()
            .ok_or(ClassicalCryptoError::UnsupportedCharacter(letter))
    }

    /// Iterates the grid letters in row-major order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.grid.iter().flatten().copied()
    }
}

/// Encrypts `plaintext` with the table derived from `key`.
///
/// # Errors
///
/// Returns `ClassicalCryptoError::UnsupportedCharacter` if the prepared text
/// contains anything outside the 25-letter alphabet (digits, punctuation).
///
/// # Example
///
/// ```
/// # use classical_crypto::playfair;
/// // "HELLO" prepares to "HELLOX"; digraphs HE LL OX.
/// assert_eq!(playfair::encrypt("HELLO", "MONARCHY").unwrap(), "CFPPAV");
/// ```
pub fn encrypt(plaintext: &str, key: &str) -> Result<String, ClassicalCryptoError> {
    let table = KeyTable::build(key);
    let prepared = prepare(plaintext, true);

    substitute(&table, &prepared, Rule::Forward)
}

/// Decrypts `ciphertext` with the table derived from `key`.
///
/// The rectangle rule is self-inverse; row and column shifts move left and
/// up instead of right and down.
///
/// # Errors
///
/// Returns `ClassicalCryptoError::InvalidCiphertext` when the prepared input
/// has odd length, and `UnsupportedCharacter` for out-of-alphabet letters.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String, ClassicalCryptoError> {
    let table = KeyTable::build(key);
    let prepared = prepare(ciphertext, false);
    let letter_count = prepared.chars().count();
    if letter_count % 2 != 0 {
        return Err(ClassicalCryptoError::InvalidCiphertext(format!(
            "Digraph input must have even length, got {} letters",
            letter_count
        )));
    }

    substitute(&table, &prepared, Rule::Backward)
}

#[derive(Copy, Clone)]
enum Rule {
    Forward,
    Backward,
}

impl Rule {
    fn shift(&self, coordinate: usize) -> usize {
        match self {
            Rule::Forward => (coordinate + 1) % TABLE_SIZE,
            Rule::Backward => (coordinate + TABLE_SIZE - 1) % TABLE_SIZE,
        }
    }
}

// Uppercase, fold J into I, strip spaces; pad a trailing X when `pad` is set
// and the length came out odd.
fn prepare(text: &str, pad: bool) -> String {
    let mut prepared: String = text
        .to_ascii_uppercase()
        .chars()
        .filter(|&ch| ch != ' ')
        .map(|ch| if ch == 'J' { 'I' } else { ch })
        .collect();

    if pad && prepared.chars().count() % 2 != 0 {
        prepared.push('X');
    }

    prepared
}

fn substitute(
    table: &KeyTable,
    prepared: &str,
    rule: Rule,
) -> Result<String, ClassicalCryptoError> {
    let letters: Vec<char> = prepared.chars().collect();
    let mut output = String::with_capacity(letters.len());

    for digraph in letters.chunks(2) {
        let [first, second] = digraph else {
            // encrypt pads to even length and decrypt rejects odd input
            return Err(ClassicalCryptoError::InternalError(
                "Digraph input must have even length".into(),
            ));
        };
        let (row1, col1) = table.position(*first)?;
        let (row2, col2) = table.position(*second)?;

        if row1 == row2 {
            output.push(table.letter_at(row1, rule.shift(col1)));
            output.push(table.letter_at(row2, rule.shift(col2)));
        } else if col1 == col2 {
            output.push(table.letter_at(rule.shift(row1), col1));
            output.push(table.letter_at(rule.shift(row2), col2));
        } else {
            output.push(table.letter_at(row1, col2));
            output.push(table.letter_at(row2, col1));
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monarchy_table_layout() {
        let table = KeyTable::build("MONARCHY");
        let rows: Vec<String> = (0..TABLE_SIZE)
            .map(|r| (0..TABLE_SIZE).map(|c| table.letter_at(r, c)).collect())
            .collect();
        assert_eq!(rows, ["MONAR", "CHYBD", "EFGIK", "LPQST", "UVWXZ"]);
    }

    #[test]
    fn test_table_is_a_permutation() {
        for key in ["", "MONARCHY", "LLLLL", "playfair example", "JJJJ"] {
            let mut letters: Vec<char> = KeyTable::build(key).letters().collect();
            letters.sort_unstable();
            assert_eq!(letters.iter().collect::<String>(), PLAYFAIR_ALPHABET);
        }
    }

    #[test]
    fn test_position_lookup() {
        let table = KeyTable::build("MONARCHY");
        assert_eq!(table.position('M').unwrap(), (0, 0));
        assert_eq!(table.position('Z').unwrap(), (4, 4));
        assert!(table.position('J').is_err());
        assert!(table.position('1').is_err());
    }

    #[test]
    fn test_known_vector() {
        assert_eq!(encrypt("HELLO", "MONARCHY").unwrap(), "CFPPAV");
        assert_eq!(decrypt("CFPPAV", "MONARCHY").unwrap(), "HELLOX");
    }

    #[test]
    fn test_repeated_letter_digraphs_are_not_split() {
        // BALLOON pads to BALLOONX: digraphs BA LL OO NX.
        assert_eq!(encrypt("BALLOON", "MONARCHY").unwrap(), "IBPPNNAW");
        assert_eq!(decrypt("IBPPNNAW", "MONARCHY").unwrap(), "BALLOONX");
    }

    #[test]
    fn test_spaces_are_stripped_and_j_folds_to_i() {
        assert_eq!(
            encrypt("JAM JAR", "MONARCHY").unwrap(),
            encrypt("IAMIAR", "MONARCHY").unwrap()
        );
    }

    #[test]
    fn test_odd_ciphertext_is_rejected() {
        assert!(matches!(
            decrypt("ABC", "MONARCHY"),
            Err(ClassicalCryptoError::InvalidCiphertext(_))
        ));
    }

    #[test]
    fn test_out_of_alphabet_input_is_rejected() {
        assert!(matches!(
            encrypt("HELLO!", "MONARCHY"),
            Err(ClassicalCryptoError::UnsupportedCharacter('!'))
        ));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(encrypt("", "MONARCHY").unwrap(), "");
        assert_eq!(decrypt("", "MONARCHY").unwrap(), "");
    }
}
