//! Fixed-width hexadecimal fields
//!
//! Legacy strings carry big-endian values as plain ASCII hex digits with
//! no sign, prefix or padding. Anything else is rejected.

/// Hex field parse errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HexError {
    /// Field is shorter or longer than its fixed width
    InvalidLength,
    /// Byte that is not `0-9`, `a-f` or `A-F`
    InvalidDigit,
}

/// Width of a 16-bit field
pub const WORD_DIGITS: usize = 4;

/// Width of an 8-bit field
pub const BYTE_DIGITS: usize = 2;

fn parse_digits(field: &[u8], width: usize) -> Result<u16, HexError> {
    if field.len() != width {
        return Err(HexError::InvalidLength);
    }
    field.iter().try_fold(0u16, |acc, &byte| {
        let digit = char::from(byte).to_digit(16).ok_or(HexError::InvalidDigit)?;
        Ok((acc << 4) | digit as u16)
    })
}

/// Parse four hex digits as a two's-complement 16-bit value
pub fn parse_i16(field: &[u8]) -> Result<i16, HexError> {
    parse_digits(field, WORD_DIGITS).map(|value| value as i16)
}

/// Parse two hex digits as an unsigned byte
pub fn parse_u8(field: &[u8]) -> Result<u8, HexError> {
    parse_digits(field, BYTE_DIGITS).map(|value| value as u8)
}

/// Parse two hex digits as a two's-complement byte
pub fn parse_i8(field: &[u8]) -> Result<i8, HexError> {
    parse_u8(field).map(|value| value as i8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_words() {
        assert_eq!(parse_i16(b"0200"), Ok(0x200));
        assert_eq!(parse_i16(b"7fff"), Ok(i16::MAX));
        assert_eq!(parse_i16(b"FFFF"), Ok(-1));
        assert_eq!(parse_i16(b"8000"), Ok(i16::MIN));
    }

    #[test]
    fn test_parse_bytes() {
        assert_eq!(parse_u8(b"19"), Ok(25));
        assert_eq!(parse_u8(b"ff"), Ok(255));
        assert_eq!(parse_i8(b"FE"), Ok(-2));
    }

    #[test]
    fn test_rejects_non_hex() {
        assert_eq!(parse_i16(b"02 0"), Err(HexError::InvalidDigit));
        assert_eq!(parse_i16(b"-001"), Err(HexError::InvalidDigit));
        assert_eq!(parse_i16(b"0x10"), Err(HexError::InvalidDigit));
        assert_eq!(parse_u8(b"g1"), Err(HexError::InvalidDigit));
    }

    #[test]
    fn test_rejects_wrong_width() {
        assert_eq!(parse_i16(b"123"), Err(HexError::InvalidLength));
        assert_eq!(parse_u8(b""), Err(HexError::InvalidLength));
    }
}
