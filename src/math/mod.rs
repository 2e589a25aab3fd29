pub mod color;
pub mod color_parse;
pub mod hex;
pub mod wcag;

pub use color::Color;
pub use color_parse::{parse_color, try_parse_color};
pub use wcag::{contrast_ratio, is_large_text, minimum_ratio, relative_luminance, TextSize};
