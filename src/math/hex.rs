use super::color::Color;

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` into a [`Color`].
/// Returns None on malformed input.
pub fn parse_hex(hex: &str) -> Option<Color> {
    let raw = hex.strip_prefix('#')?;
    if !raw.is_ascii() {
        return None;
    }
    let expanded: String = match raw.len() {
        3 | 4 => raw.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => raw.to_string(),
        _ => return None,
    };

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if expanded.len() == 8 {
        channel(6)? as f64 / 255.0
    } else {
        1.0
    };
    Some(Color::rgba(r, g, b, a))
}

/// Format channels as uppercase `#RRGGBB`.
pub fn format_hex_rgb(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_6digit_hex() {
        assert_eq!(parse_hex("#ff0000"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(parse_hex("#1e293b"), Some(Color::rgb(30, 41, 59)));
    }

    #[test]
    fn parse_3digit_hex_expands() {
        assert_eq!(parse_hex("#f00"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(parse_hex("#AbC"), Some(Color::rgb(0xaa, 0xbb, 0xcc)));
    }

    #[test]
    fn parse_8digit_hex_keeps_alpha() {
        let c = parse_hex("#ff000080").unwrap();
        assert_eq!((c.r, c.g, c.b), (255, 0, 0));
        assert!((c.a - 0.502).abs() < 0.01); // 128/255
    }

    #[test]
    fn parse_4digit_hex_transparent() {
        let c = parse_hex("#fff0").unwrap();
        assert!(c.is_transparent());
    }

    #[test]
    fn parse_malformed_returns_none() {
        assert_eq!(parse_hex("not-a-color"), None);
        assert_eq!(parse_hex("#xyz"), None);
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("#ééé"), None);
    }

    #[test]
    fn format_pads_and_uppercases() {
        assert_eq!(format_hex_rgb(0, 10, 255), "#000AFF");
    }
}
