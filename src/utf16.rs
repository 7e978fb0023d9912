use itertools::Itertools;

use crate::{bom::detect_utf16_bom, endian::Endianness, error::ConvertError, push_codepoint};

/// Converts a marker-free UTF-16 byte stream to UTF-8.
///
/// The input is consecutive 2-byte code units in the given byte order. A
/// high surrogate must be followed by a low surrogate; the pair folds into
/// one supplementary code point.
pub fn utf16_to_utf8(units: &[u8], endianness: Endianness) -> Result<Vec<u8>, ConvertError> {
    if units.len() % 2 != 0 {
        return Err(ConvertError::TruncatedSequence {
            offset: units.len() - 1,
        });
    }
    let mut target = Vec::with_capacity(units.len() + units.len() / 2);
    let mut pairs = units.iter().copied().tuples();
    let mut offset = 0;
    while let Some((a, b)) = pairs.next() {
        let value = endianness.read_u16([a, b]);
        if matches!(value, 0xD800..=0xDBFF) {
            let (c, d) = match pairs.next() {
                Some(pair) => pair,
                None => return Err(ConvertError::UnpairedSurrogate { offset }),
            };
            let low = endianness.read_u16([c, d]);
            if low < 0xDC00 {
                return Err(ConvertError::InvalidSurrogatePair {
                    low,
                    offset: offset + 2,
                });
            }
            let code_point =
                0x10000 + (((value - 0xD800) as u32) << 10) + (low - 0xDC00) as u32;
            push_codepoint(code_point, offset, &mut target)?;
            offset += 4;
        } else {
            // Lone low surrogates fall through to the 3-byte form, as do
            // all other BMP units.
            push_codepoint(value as u32, offset, &mut target)?;
            offset += 2;
        }
    }
    Ok(target)
}

/// Converts a UTF-16 byte stream whose first unit is a byte order mark.
pub fn utf16_to_utf8_with_bom(units: &[u8]) -> Result<Vec<u8>, ConvertError> {
    if units.is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    if units.len() < 2 {
        return Err(ConvertError::TruncatedSequence { offset: 0 });
    }
    let endianness =
        detect_utf16_bom([units[0], units[1]]).ok_or(ConvertError::UnrecognizedBom)?;
    utf16_to_utf8(&units[2..], endianness)
}
