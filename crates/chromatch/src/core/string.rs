//! Parsing and formatting of hexadecimal web colors.

use crate::error::RangeError;

/// Parse a hex color with the historical 3-digit expansion.
///
/// The string may start with an optional `#` and must continue with exactly
/// three or six hexadecimal digits. Six digits parse as one byte per channel.
/// Three digits expand each digit `d` into the channel value `d * 16`, which
/// caps channels at 240.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 3], RangeError> {
    parse(s, |digit| digit << 4)
}

/// Parse a hex color with the CSS 3-digit expansion.
///
/// Like [`parse_hex`], except that three-digit strings expand each digit `d`
/// into `d * 17`, doubling the digit as CSS does and mapping `f` to 255.
pub(crate) fn parse_hex_css(s: &str) -> Result<[u8; 3], RangeError> {
    parse(s, |digit| digit * 17)
}

fn parse<F>(s: &str, expand: F) -> Result<[u8; 3], RangeError>
where
    F: Fn(u8) -> u8,
{
    if s.is_empty() {
        return Err(RangeError::EmptyHexString);
    }

    let digits = s.strip_prefix('#').unwrap_or(s);
    let mut channels = [0_u8; 3];

    match digits.len() {
        6 => {
            for (index, channel) in channels.iter_mut().enumerate() {
                *channel = parse_byte(digits, 2 * index..2 * index + 2)?;
            }
        }
        3 => {
            for (index, channel) in channels.iter_mut().enumerate() {
                *channel = expand(parse_byte(digits, index..index + 1)?);
            }
        }
        length => return Err(RangeError::UnexpectedHexLength(length)),
    }

    Ok(channels)
}

/// Parse the given digit range as a hexadecimal number.
fn parse_byte(digits: &str, range: std::ops::Range<usize>) -> Result<u8, RangeError> {
    digits
        .get(range)
        .filter(|group| group.bytes().all(|digit| digit.is_ascii_hexdigit()))
        .and_then(|group| u8::from_str_radix(group, 16).ok())
        .ok_or_else(|| RangeError::MalformedHexDigits(digits.to_string()))
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the channels as an uppercase, zero-padded `#RRGGBB` string.
pub(crate) fn format(channels: &[u8; 3], f: &mut std::fmt::Formatter) -> std::fmt::Result {
    f.write_fmt(format_args!(
        "#{:02X}{:02X}{:02X}",
        channels[0], channels[1], channels[2]
    ))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse_hex, parse_hex_css};
    use crate::error::RangeError;

    #[test]
    fn test_parse_six_digits() -> Result<(), RangeError> {
        assert_eq!(parse_hex("#FF8000")?, [255, 128, 0]);
        assert_eq!(parse_hex("ff8000")?, [255, 128, 0]);
        assert_eq!(parse_hex("#000000")?, [0, 0, 0]);
        assert_eq!(parse_hex("#ffffff")?, [255, 255, 255]);
        assert_eq!(parse_hex("4080C0")?, [64, 128, 192]);
        Ok(())
    }

    #[test]
    fn test_parse_three_digits() -> Result<(), RangeError> {
        // The historical expansion shifts each digit into the high nibble.
        assert_eq!(parse_hex("#fff")?, [240, 240, 240]);
        assert_eq!(parse_hex("#FFF")?, [240, 240, 240]);
        assert_eq!(parse_hex("123")?, [16, 32, 48]);
        assert_eq!(parse_hex("#000")?, [0, 0, 0]);

        // The CSS expansion doubles each digit instead.
        assert_eq!(parse_hex_css("#fff")?, [255, 255, 255]);
        assert_eq!(parse_hex_css("#123")?, [17, 34, 51]);
        assert_eq!(parse_hex_css("#000")?, [0, 0, 0]);
        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_hex(""), Err(RangeError::EmptyHexString));
        assert_eq!(parse_hex("#"), Err(RangeError::UnexpectedHexLength(0)));
        assert_eq!(parse_hex("#12345"), Err(RangeError::UnexpectedHexLength(5)));
        assert_eq!(
            parse_hex("#1234567"),
            Err(RangeError::UnexpectedHexLength(7))
        );
        assert_eq!(
            parse_hex("#efgefg"),
            Err(RangeError::MalformedHexDigits("efgefg".to_string()))
        );
        assert_eq!(
            parse_hex("#ggg"),
            Err(RangeError::MalformedHexDigits("ggg".to_string()))
        );
        // A sign prefix is not a digit, even though the radix parser would
        // tolerate one.
        assert_eq!(
            parse_hex("+12345"),
            Err(RangeError::MalformedHexDigits("+12345".to_string()))
        );
    }
}
