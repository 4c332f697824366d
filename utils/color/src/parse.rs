use crate::InvalidColorFormat;

const HEX_DIGITS: usize = 6;

const fn hex_digit(b: u8, index: usize) -> Result<u8, InvalidColorFormat> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(InvalidColorFormat::InvalidDigit(index)),
    }
}

fn hex_byte(bytes: &[u8], index: usize) -> Result<u8, InvalidColorFormat> {
    let hi = hex_digit(bytes[index], index)?;
    let lo = hex_digit(bytes[index + 1], index + 1)?;
    Ok((hi << 4) | lo)
}

/// Parses `#RRGGBB` or `RRGGBB` into its three channel bytes.
///
/// Digit errors report the byte index within the original string, so a
/// leading `#` shifts every index by one.
pub fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), InvalidColorFormat> {
    let bytes = s.as_bytes();
    let offset = usize::from(bytes.first() == Some(&b'#'));
    if bytes.len() - offset != HEX_DIGITS {
        return Err(InvalidColorFormat::InvalidLength);
    }

    Ok((
        hex_byte(bytes, offset)?,
        hex_byte(bytes, offset + 2)?,
        hex_byte(bytes, offset + 4)?,
    ))
}
