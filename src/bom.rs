//! Byte order mark generation and recognition.
//!
//! A marker is one code unit wide (two bytes in UTF-16, four in UTF-32)
//! and is metadata, not content: the marker-bearing entry points strip it
//! and dispatch on the endianness it declares.

use crate::endian::Endianness;

/// UTF-32 big-endian byte order mark.
pub const UTF32_BE_BOM: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];
/// UTF-32 little-endian byte order mark.
pub const UTF32_LE_BOM: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];
/// UTF-16 big-endian byte order mark.
pub const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];
/// UTF-16 little-endian byte order mark.
pub const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// Returns the canonical 32-bit marker unit for the given byte order.
#[inline]
pub const fn utf32_bom(endianness: Endianness) -> [u8; 4] {
    match endianness {
        Endianness::BigEndian => UTF32_BE_BOM,
        Endianness::LittleEndian => UTF32_LE_BOM,
    }
}

/// Returns the canonical 16-bit marker unit for the given byte order.
#[inline]
pub const fn utf16_bom(endianness: Endianness) -> [u8; 2] {
    match endianness {
        Endianness::BigEndian => UTF16_BE_BOM,
        Endianness::LittleEndian => UTF16_LE_BOM,
    }
}

/// Whether `unit` is exactly the 32-bit marker for the given byte order.
#[inline]
pub const fn matches_utf32_bom(unit: [u8; 4], endianness: Endianness) -> bool {
    match endianness {
        Endianness::BigEndian => matches!(unit, UTF32_BE_BOM),
        Endianness::LittleEndian => matches!(unit, UTF32_LE_BOM),
    }
}

/// Whether `unit` is exactly the 16-bit marker for the given byte order.
#[inline]
pub const fn matches_utf16_bom(unit: [u8; 2], endianness: Endianness) -> bool {
    match endianness {
        Endianness::BigEndian => matches!(unit, UTF16_BE_BOM),
        Endianness::LittleEndian => matches!(unit, UTF16_LE_BOM),
    }
}

/// Identifies the byte order a leading 32-bit unit declares, if any.
#[inline]
pub const fn detect_utf32_bom(unit: [u8; 4]) -> Option<Endianness> {
    match unit {
        UTF32_BE_BOM => Some(Endianness::BigEndian),
        UTF32_LE_BOM => Some(Endianness::LittleEndian),
        _ => None,
    }
}

/// Identifies the byte order a leading 16-bit unit declares, if any.
#[inline]
pub const fn detect_utf16_bom(unit: [u8; 2]) -> Option<Endianness> {
    match unit {
        UTF16_BE_BOM => Some(Endianness::BigEndian),
        UTF16_LE_BOM => Some(Endianness::LittleEndian),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_matches_recognition() {
        for endianness in [Endianness::BigEndian, Endianness::LittleEndian] {
            assert!(matches_utf32_bom(utf32_bom(endianness), endianness));
            assert!(matches_utf16_bom(utf16_bom(endianness), endianness));
        }
    }

    #[test]
    fn opposite_order_does_not_match() {
        assert!(!matches_utf32_bom(UTF32_BE_BOM, Endianness::LittleEndian));
        assert!(!matches_utf32_bom(UTF32_LE_BOM, Endianness::BigEndian));
        assert!(!matches_utf16_bom(UTF16_BE_BOM, Endianness::LittleEndian));
        assert!(!matches_utf16_bom(UTF16_LE_BOM, Endianness::BigEndian));
    }

    #[test]
    fn detection() {
        assert_eq!(detect_utf32_bom(UTF32_BE_BOM), Some(Endianness::BigEndian));
        assert_eq!(detect_utf32_bom(UTF32_LE_BOM), Some(Endianness::LittleEndian));
        assert_eq!(detect_utf32_bom([0x12, 0x34, 0x56, 0x78]), None);
        assert_eq!(detect_utf16_bom(UTF16_BE_BOM), Some(Endianness::BigEndian));
        assert_eq!(detect_utf16_bom(UTF16_LE_BOM), Some(Endianness::LittleEndian));
        assert_eq!(detect_utf16_bom([0x00, 0x41]), None);
    }
}
