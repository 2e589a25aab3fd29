use super::color::Color;

/// Parse any CSS color value into a [`Color`].
/// Handles: hex, rgb()/rgba(), named colors, hsl, hwb, lab/lch, oklab/oklch.
/// `transparent` yields alpha 0.
/// Returns None for: inherit, currentColor, initial, unset, unrecognized.
pub fn try_parse_color(value: &str) -> Option<Color> {
    let trimmed = value.trim();

    match trimmed.to_ascii_lowercase().as_str() {
        "" | "inherit" | "currentcolor" | "initial" | "unset" | "revert" => return None,
        _ => {}
    }

    if trimmed.starts_with('#') {
        return super::hex::parse_hex(trimmed);
    }

    match trimmed.parse::<csscolorparser::Color>() {
        Ok(parsed) => {
            let [r, g, b, _] = parsed.to_rgba8();
            Some(Color::rgba(r, g, b, f64::from(parsed.a)))
        }
        Err(_) => None,
    }
}

/// Parse a CSS color, substituting opaque black when the value is unusable.
///
/// Computed `color` values always resolve to something on screen, so callers
/// get a color to reason about rather than an error.
pub fn parse_color(value: &str) -> Color {
    try_parse_color(value).unwrap_or_else(|| {
        tracing::trace!(value, "unparsable color, using black");
        Color::BLACK
    })
}
