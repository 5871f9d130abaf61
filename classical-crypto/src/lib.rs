//! Classical substitution ciphers: Vigenère, Playfair and Hill.
//!
//! Each cipher exposes a pure `encrypt`/`decrypt` pair over uppercase A-Z
//! text and keeps no state between calls. The modules are independent; they
//! share only the alphabet presets and the modular arithmetic in [`ring`].

pub mod errors;
pub mod hill;
pub mod playfair;
pub mod preset;
pub mod ring;
pub mod vigenere;
