//! Conversion between the UTF-8, UTF-16, and UTF-32 encodings.
//!
//! Every sequence crosses the API as a raw byte slice plus explicit
//! [`Endianness`] metadata: a UTF-32 stream is consecutive 4-byte code
//! units, a UTF-16 stream consecutive 2-byte units. Byte order is never
//! guessed; it is either declared by the caller or read from a leading
//! byte order mark by the `_with_bom` entry points, which strip the
//! marker and convert the remainder.
//!
//! All conversions are pure and stateless. On failure nothing of the
//! output is observable, so an `Err` is a clean no-op for the caller. The
//! UTF-8 decoder checks structure only (lead byte class, continuation
//! count); it does not reject overlong forms or encoded surrogates and is
//! therefore not a validator.

mod bom;
mod endian;
mod error;
mod utf16;
mod utf32;
mod utf8;

pub use bom::{
    detect_utf16_bom, detect_utf32_bom, matches_utf16_bom, matches_utf32_bom, utf16_bom,
    utf32_bom, UTF16_BE_BOM, UTF16_LE_BOM, UTF32_BE_BOM, UTF32_LE_BOM,
};
pub use endian::Endianness;
pub use error::ConvertError;
pub use utf16::{utf16_to_utf8, utf16_to_utf8_with_bom};
pub use utf32::{utf32_to_utf8, utf32_to_utf8_with_bom};
pub use utf8::utf8_to_utf32;

/// Appends the UTF-8 form of one code point, 1 to 4 bytes by magnitude.
pub(crate) fn push_codepoint(
    value: u32,
    offset: usize,
    target: &mut Vec<u8>,
) -> Result<(), ConvertError> {
    match value {
        ..=0x7F => target.push(value as u8),
        0x80..=0x7FF => {
            target.push(((value >> 6) & 0x1F) as u8 | 0xC0);
            target.push((value & 0x3F) as u8 | 0x80);
        }
        0x800..=0xFFFF => {
            target.push(((value >> 12) & 0x0F) as u8 | 0xE0);
            target.push(((value >> 6) & 0x3F) as u8 | 0x80);
            target.push((value & 0x3F) as u8 | 0x80);
        }
        0x10000..=0x10FFFF => {
            target.push(((value >> 18) & 0x07) as u8 | 0xF0);
            target.push(((value >> 12) & 0x3F) as u8 | 0x80);
            target.push(((value >> 6) & 0x3F) as u8 | 0x80);
            target.push((value & 0x3F) as u8 | 0x80);
        }
        _ => return Err(ConvertError::CodepointOutOfRange { value, offset }),
    }
    Ok(())
}
