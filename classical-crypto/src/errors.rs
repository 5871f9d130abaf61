#[derive(thiserror::Error, Debug)]
pub enum ClassicalCryptoError {
    /// Error for an empty key or a key containing characters outside A-Z.
    #[error("InvalidKey: {0}")]
    InvalidKey(String),
    /// Error for digraph input whose prepared length is odd.
    #[error("InvalidCiphertext: {0}")]
    InvalidCiphertext(String),
    /// Error for Hill input whose letter count does not match the key matrix dimension.
    #[error("InvalidBlockLength: {0}")]
    InvalidBlockLength(String),
    /// Error for a Hill key matrix whose determinant is not coprime with the modulus.
    #[error("SingularKey: {0}")]
    SingularKey(String),
    /// Error for an input character with no slot in the cipher alphabet.
    #[error("UnsupportedCharacter: '{0}' is not part of the cipher alphabet")]
    UnsupportedCharacter(char),

    /// Error when creating a ring with an invalid modulus (k <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, k) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    #[error("InternalError: {0}")]
    InternalError(String),
}
