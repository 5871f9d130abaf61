pub mod alphabet;

pub use alphabet::{ALPHABET, LETTER_MODULUS, PLAYFAIR_ALPHABET, index_to_letter, letter_to_index};
