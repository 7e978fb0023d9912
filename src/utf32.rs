use itertools::Itertools;

use crate::{bom::detect_utf32_bom, endian::Endianness, error::ConvertError, push_codepoint};

/// Converts a marker-free UTF-32 byte stream to UTF-8.
///
/// The input is consecutive 4-byte code units in the given byte order.
pub fn utf32_to_utf8(units: &[u8], endianness: Endianness) -> Result<Vec<u8>, ConvertError> {
    if units.len() % 4 != 0 {
        return Err(ConvertError::TruncatedSequence {
            offset: units.len() - units.len() % 4,
        });
    }
    let mut target = Vec::with_capacity(units.len());
    for (i, (a, b, c, d)) in units.iter().copied().tuples().enumerate() {
        let value = endianness.read_u32([a, b, c, d]);
        push_codepoint(value, i * 4, &mut target)?;
    }
    Ok(target)
}

/// Converts a UTF-32 byte stream whose first unit is a byte order mark.
///
/// The marker declares the byte order of the remainder and is not part of
/// the output.
pub fn utf32_to_utf8_with_bom(units: &[u8]) -> Result<Vec<u8>, ConvertError> {
    if units.is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    if units.len() < 4 {
        return Err(ConvertError::TruncatedSequence { offset: 0 });
    }
    let endianness = detect_utf32_bom([units[0], units[1], units[2], units[3]])
        .ok_or(ConvertError::UnrecognizedBom)?;
    utf32_to_utf8(&units[4..], endianness)
}
