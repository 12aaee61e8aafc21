//! Field codec: canonical encoding of BN254 scalars.
//!
//! Every value handed to the external prover goes through this module. The
//! circuit reads each input as a `0x`-prefixed, zero-padded, 32-byte big-endian
//! hex string, so the encoding here is fixed rather than left to `Display`.
//!
//! # Format
//!
//! ```text
//! 0x000000000000000000000000000000000000000000000000000000000000007b   (123)
//!   └──────────────────────── 64 hex digits ────────────────────────┘
//! ```
//!
//! Decoding accepts shorter digit strings (e.g. `0x00` as printed by the
//! circuit test runner) and rejects anything wider than 32 bytes, negative, or
//! not below the field modulus.

use ark_ff::{BigInt, BigInteger, PrimeField};

use crate::error::{ErrorSeverity, GameError};

/// Native field element shared with the circuit (BN254 scalar field).
pub type Field = ark_bn254::Fr;

/// Width of an encoded field element in bytes.
pub const FIELD_BYTES: usize = 32;

/// Width of an encoded field element in hex digits (without the `0x` prefix).
pub const FIELD_HEX_DIGITS: usize = FIELD_BYTES * 2;

/// Errors raised while converting to or from the canonical field encoding.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// Value carried a minus sign or a negative integer was supplied.
    #[error("negative values cannot be encoded as field elements")]
    Negative,

    /// Input had more digits than fit in 32 bytes.
    #[error("value is {digits} hex digits wide, maximum is {FIELD_HEX_DIGITS}")]
    TooWide { digits: usize },

    /// Input fit in 32 bytes but is not below the field modulus.
    #[error("value is not below the field modulus")]
    OutOfRange,

    /// Input was empty.
    #[error("empty field encoding")]
    Empty,

    /// Input contained non-hex characters.
    #[error("invalid hex digit in field encoding")]
    InvalidHex,

    /// A serialized record had the wrong number of elements.
    #[error("expected {expected} field elements, got {actual}")]
    Length { expected: usize, actual: usize },

    /// A serialized Froglin referenced a species that is not in the catalog.
    #[error("unknown froglin type id {0}")]
    UnknownSpecies(String),
}

impl GameError for EncodingError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Negative => "ENCODING_NEGATIVE",
            Self::TooWide { .. } => "ENCODING_TOO_WIDE",
            Self::OutOfRange => "ENCODING_OUT_OF_RANGE",
            Self::Empty => "ENCODING_EMPTY",
            Self::InvalidHex => "ENCODING_INVALID_HEX",
            Self::Length { .. } => "ENCODING_LENGTH",
            Self::UnknownSpecies(_) => "ENCODING_UNKNOWN_SPECIES",
        }
    }
}

/// Encodes a field element as `0x` + 64 lowercase hex digits.
pub fn to_hex(value: &Field) -> String {
    format!("0x{}", hex::encode(to_bytes_be(value)))
}

/// Decodes a hex string (with or without `0x`) into a field element.
pub fn from_hex(input: &str) -> Result<Field, EncodingError> {
    let trimmed = input.trim();
    if trimmed.starts_with('-') {
        return Err(EncodingError::Negative);
    }

    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.is_empty() {
        return Err(EncodingError::Empty);
    }

    // Leading zeros never make a value wider.
    let significant = digits.trim_start_matches('0');
    if significant.len() > FIELD_HEX_DIGITS {
        return Err(EncodingError::TooWide {
            digits: significant.len(),
        });
    }

    let padded = format!("{significant:0>width$}", width = FIELD_HEX_DIGITS);
    let mut bytes = [0u8; FIELD_BYTES];
    hex::decode_to_slice(&padded, &mut bytes).map_err(|_| EncodingError::InvalidHex)?;
    from_bytes_be(&bytes)
}

/// Big-endian 32-byte representation of the canonical integer.
pub fn to_bytes_be(value: &Field) -> [u8; FIELD_BYTES] {
    let mut out = [0u8; FIELD_BYTES];
    let bytes = value.into_bigint().to_bytes_be();
    // BigInt<4> is exactly 32 bytes; copy from the right to stay width-exact.
    let offset = FIELD_BYTES.saturating_sub(bytes.len());
    out[offset..].copy_from_slice(&bytes[bytes.len().saturating_sub(FIELD_BYTES)..]);
    out
}

/// Interprets 32 big-endian bytes as a field element, rejecting values that
/// are not below the modulus (no silent reduction).
pub fn from_bytes_be(bytes: &[u8; FIELD_BYTES]) -> Result<Field, EncodingError> {
    let mut limbs = [0u64; 4];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let end = FIELD_BYTES - i * 8;
        let mut word = [0u8; 8];
        word.copy_from_slice(&bytes[end - 8..end]);
        *limb = u64::from_be_bytes(word);
    }
    Field::from_bigint(BigInt::new(limbs)).ok_or(EncodingError::OutOfRange)
}

/// Converts a signed integer, rejecting negatives instead of wrapping.
pub fn from_signed(value: i128) -> Result<Field, EncodingError> {
    u128::try_from(value)
        .map(Field::from)
        .map_err(|_| EncodingError::Negative)
}

/// Returns bit `index` of the canonical integer, least significant first.
#[inline]
pub fn bit(value: &Field, index: usize) -> bool {
    value.into_bigint().get_bit(index)
}
