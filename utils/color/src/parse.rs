use colorup_core::{ColorError, Rgb};

fn parse_prefix(bytes: &[u8]) -> usize {
    usize::from(bytes.first() == Some(&b'#'))
}

const fn parse_hex_digit(b: u8, index: usize) -> Result<u8, ColorError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(ColorError::InvalidHexDigit(index)),
    }
}

// single digit, duplicated (a -> aa)
fn parse_short(bytes: &[u8], index: usize) -> Result<u8, ColorError> {
    let nibble = parse_hex_digit(bytes[index], index)?;
    Ok((nibble << 4) | nibble)
}

fn parse_long(bytes: &[u8], index: usize) -> Result<u8, ColorError> {
    let hi = parse_hex_digit(bytes[index], index)?;
    let lo = parse_hex_digit(bytes[index + 1], index + 1)?;
    Ok((hi << 4) | lo)
}

/// Decodes `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`, with or without the `#`.
///
/// Alpha digits, when present, become `a = byte / 255`. Error indices are byte
/// offsets into `s`, counting the `#`.
pub fn parse_hex_color(s: &str) -> Result<Rgb, ColorError> {
    let bytes = s.as_bytes();
    let offset = parse_prefix(bytes);
    let digits = bytes.len() - offset;

    let (channels, alpha) = match digits {
        3 | 4 => (
            [
                parse_short(bytes, offset)?,
                parse_short(bytes, offset + 1)?,
                parse_short(bytes, offset + 2)?,
            ],
            if digits == 4 {
                Some(parse_short(bytes, offset + 3)?)
            } else {
                None
            },
        ),
        6 | 8 => (
            [
                parse_long(bytes, offset)?,
                parse_long(bytes, offset + 2)?,
                parse_long(bytes, offset + 4)?,
            ],
            if digits == 8 {
                Some(parse_long(bytes, offset + 6)?)
            } else {
                None
            },
        ),
        _ => return Err(ColorError::InvalidHexLength(digits)),
    };

    let [r, g, b] = channels;
    Ok(Rgb {
        r,
        g,
        b,
        a: alpha.map(|byte| f64::from(byte) / 255.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_duplicates_digits() {
        assert_eq!(parse_hex_color("#fff"), Ok(Rgb::new(255, 255, 255)));
        assert_eq!(parse_hex_color("#a1C"), Ok(Rgb::new(0xaa, 0x11, 0xcc)));
    }

    #[test]
    fn prefix_is_optional() {
        assert_eq!(parse_hex_color("ffffff"), parse_hex_color("#ffffff"));
        assert_eq!(parse_hex_color("1A2B3C"), Ok(Rgb::new(0x1a, 0x2b, 0x3c)));
    }

    #[test]
    fn alpha_digits_become_fraction() {
        let color = parse_hex_color("#ff000080").unwrap();
        assert_eq!((color.r, color.g, color.b), (255, 0, 0));
        assert!((color.a.unwrap() - 128.0 / 255.0).abs() < 1e-6);

        let short = parse_hex_color("#f00f").unwrap();
        assert_eq!(short.a, Some(1.0));
    }

    #[test]
    fn reports_errors() {
        assert_eq!(
            parse_hex_color("#GGGGGG"),
            Err(ColorError::InvalidHexDigit(1))
        );
        assert_eq!(
            parse_hex_color("12zz56"),
            Err(ColorError::InvalidHexDigit(2))
        );
        assert_eq!(parse_hex_color("#12345"), Err(ColorError::InvalidHexLength(5)));
        assert_eq!(parse_hex_color(""), Err(ColorError::InvalidHexLength(0)));
        assert_eq!(parse_hex_color("#"), Err(ColorError::InvalidHexLength(0)));
    }
}
