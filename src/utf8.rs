use crate::{bom::utf32_bom, endian::Endianness, error::ConvertError};

/// Converts UTF-8 to a UTF-32 byte stream in the requested byte order.
///
/// When `add_bom` is set the output begins with the canonical marker for
/// `target_endianness`. The decode is structural: lead bytes are
/// classified and continuation counts enforced, but overlong encodings
/// and encoded surrogate values are reassembled as-is rather than
/// rejected, so this function must not be used as a UTF-8 validator.
pub fn utf8_to_utf32(
    bytes: &[u8],
    target_endianness: Endianness,
    add_bom: bool,
) -> Result<Vec<u8>, ConvertError> {
    let mut target = Vec::with_capacity(bytes.len() * 4 + 4);
    if add_bom {
        target.extend_from_slice(&utf32_bom(target_endianness));
    }

    let mut i = 0;
    while i < bytes.len() {
        let lead = bytes[i];
        // Longest class first, so the high distinguishing bits win.
        let (value, length) = if (lead & 0xF0) == 0xF0 {
            if i + 3 >= bytes.len() {
                return Err(ConvertError::TruncatedSequence { offset: i });
            }
            let value = (((lead & 0x07) as u32) << 18)
                | (((bytes[i + 1] & 0x3F) as u32) << 12)
                | (((bytes[i + 2] & 0x3F) as u32) << 6)
                | (bytes[i + 3] & 0x3F) as u32;
            (value, 4)
        } else if (lead & 0xE0) == 0xE0 {
            if i + 2 >= bytes.len() {
                return Err(ConvertError::TruncatedSequence { offset: i });
            }
            let value = (((lead & 0x0F) as u32) << 12)
                | (((bytes[i + 1] & 0x3F) as u32) << 6)
                | (bytes[i + 2] & 0x3F) as u32;
            (value, 3)
        } else if (lead & 0xC0) == 0xC0 {
            if i + 1 >= bytes.len() {
                return Err(ConvertError::TruncatedSequence { offset: i });
            }
            let value = (((lead & 0x1F) as u32) << 6) | (bytes[i + 1] & 0x3F) as u32;
            (value, 2)
        } else if lead < 0x80 {
            (lead as u32, 1)
        } else {
            return Err(ConvertError::InvalidLeadByte {
                byte: lead,
                offset: i,
            });
        };
        target.extend_from_slice(&target_endianness.write_u32(value));
        i += length;
    }
    Ok(target)
}
