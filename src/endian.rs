/// Byte order of a UTF-16 or UTF-32 code unit stream.
///
/// Endianness is metadata supplied by the caller (or derived from a byte
/// order mark); it is never guessed from the data itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Endianness {
    BigEndian,
    LittleEndian,
}

impl Endianness {
    /// Reconstructs a 16-bit code unit from two raw bytes.
    #[inline]
    pub const fn read_u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            Self::BigEndian => ((bytes[0] as u16) << 8) | bytes[1] as u16,
            Self::LittleEndian => ((bytes[1] as u16) << 8) | bytes[0] as u16,
        }
    }

    /// Reconstructs a 32-bit code unit from four raw bytes.
    #[inline]
    pub const fn read_u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::BigEndian => {
                ((bytes[0] as u32) << 24)
                    | ((bytes[1] as u32) << 16)
                    | ((bytes[2] as u32) << 8)
                    | bytes[3] as u32
            }
            Self::LittleEndian => {
                ((bytes[3] as u32) << 24)
                    | ((bytes[2] as u32) << 16)
                    | ((bytes[1] as u32) << 8)
                    | bytes[0] as u32
            }
        }
    }

    /// Decomposes a 32-bit code unit into four raw bytes.
    #[inline]
    pub const fn write_u32(self, value: u32) -> [u8; 4] {
        match self {
            Self::BigEndian => [
                (value >> 24) as u8,
                (value >> 16) as u8,
                (value >> 8) as u8,
                value as u8,
            ],
            Self::LittleEndian => [
                value as u8,
                (value >> 8) as u8,
                (value >> 16) as u8,
                (value >> 24) as u8,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Endianness;

    #[test]
    fn read_u16_both_orders() {
        assert_eq!(Endianness::BigEndian.read_u16([0xFE, 0xFF]), 0xFEFF);
        assert_eq!(Endianness::LittleEndian.read_u16([0xFE, 0xFF]), 0xFFFE);
    }

    #[test]
    fn read_u32_both_orders() {
        let bytes = [0x00, 0x01, 0xF6, 0x00];
        assert_eq!(Endianness::BigEndian.read_u32(bytes), 0x0001_F600);
        assert_eq!(Endianness::LittleEndian.read_u32(bytes), 0x00F6_0100);
    }

    #[test]
    fn write_u32_inverts_read_u32() {
        for endianness in [Endianness::BigEndian, Endianness::LittleEndian] {
            for value in [0u32, 0x7F, 0xFEFF, 0x1F600, 0x10FFFF] {
                assert_eq!(endianness.read_u32(endianness.write_u32(value)), value);
            }
        }
    }
}
