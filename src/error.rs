use std::{error::Error, fmt};

/// Failure raised by a conversion. On error no partial output is
/// observable; the offsets are byte offsets into the input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A multi-byte sequence, a surrogate pair, or a final code unit is
    /// cut off at the end of the input.
    TruncatedSequence { offset: usize },
    /// A continuation byte appeared where a UTF-8 lead byte was expected.
    InvalidLeadByte { byte: u8, offset: usize },
    /// A high surrogate ended the input with no unit following it.
    UnpairedSurrogate { offset: usize },
    /// The unit following a high surrogate is not a low surrogate.
    InvalidSurrogatePair { low: u16, offset: usize },
    /// A UTF-32 unit exceeds 0x10FFFF.
    CodepointOutOfRange { value: u32, offset: usize },
    /// A marker-bearing call received an empty sequence.
    EmptyInput,
    /// The leading unit matches no known byte order mark pattern.
    UnrecognizedBom,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedSequence { offset } => {
                write!(f, "truncated sequence at byte {offset}")
            }
            Self::InvalidLeadByte { byte, offset } => {
                write!(f, "invalid lead byte {byte:#04X} at byte {offset}")
            }
            Self::UnpairedSurrogate { offset } => {
                write!(f, "unpaired surrogate at byte {offset}")
            }
            Self::InvalidSurrogatePair { low, offset } => {
                write!(f, "invalid surrogate pair, low unit {low:#06X} at byte {offset}")
            }
            Self::CodepointOutOfRange { value, offset } => {
                write!(f, "code point {value:#X} at byte {offset} is outside Unicode range")
            }
            Self::EmptyInput => write!(f, "marker-bearing input must not be empty"),
            Self::UnrecognizedBom => write!(f, "unrecognized byte order mark"),
        }
    }
}

impl Error for ConvertError {}
