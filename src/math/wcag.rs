use super::color::Color;

/// AA minimum for normal text.
pub const MIN_RATIO_NORMAL: f64 = 4.5;
/// AA minimum for large text.
pub const MIN_RATIO_LARGE: f64 = 3.0;

/// Bold text this size or larger counts as large (~14pt).
pub const LARGE_BOLD_PX: f64 = 18.66;
/// Regular text this size or larger counts as large (18pt).
pub const LARGE_NORMAL_PX: f64 = 24.0;
pub const BOLD_WEIGHT: f64 = 700.0;

/// Convert sRGB channel (0-255) to linear light value.
/// sRGB -> linear: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG 2.1. Alpha is ignored.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(color: &Color) -> f64 {
    0.2126 * srgb_to_linear(color.r)
        + 0.7152 * srgb_to_linear(color.g)
        + 0.0722 * srgb_to_linear(color.b)
}

/// Calculate WCAG 2.1 contrast ratio between two colors.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn contrast_ratio(a: &Color, b: &Color) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Size classification that selects the applicable contrast threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextSize {
    Normal,
    Large,
}

impl TextSize {
    pub fn classify(font_size_px: f64, font_weight: f64) -> Self {
        if is_large_text(font_size_px, font_weight) {
            TextSize::Large
        } else {
            TextSize::Normal
        }
    }

    pub fn is_large(self) -> bool {
        self == TextSize::Large
    }

    pub fn minimum_ratio(self) -> f64 {
        minimum_ratio(self.is_large())
    }
}

/// Large text: >= 18.66px at weight 700+, or >= 24px below weight 700.
pub fn is_large_text(font_size_px: f64, font_weight: f64) -> bool {
    if font_weight >= BOLD_WEIGHT {
        font_size_px >= LARGE_BOLD_PX
    } else {
        font_size_px >= LARGE_NORMAL_PX
    }
}

pub fn minimum_ratio(is_large: bool) -> f64 {
    if is_large {
        MIN_RATIO_LARGE
    } else {
        MIN_RATIO_NORMAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        crate::math::hex::parse_hex(s).unwrap()
    }

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(&Color::BLACK, &Color::WHITE);
        assert!((ratio - 21.0).abs() < 0.01);
    }

    #[test]
    fn white_on_white_is_1() {
        let ratio = contrast_ratio(&Color::WHITE, &Color::WHITE);
        assert!((ratio - 1.0).abs() < 1e-9);
    }

    #[test]
    fn gray_on_white() {
        let ratio = contrast_ratio(&hex("#767676"), &Color::WHITE);
        assert!((ratio - 4.54).abs() < 0.01);
    }

    #[test]
    fn light_gray_on_white() {
        let ratio = contrast_ratio(&Color::rgb(170, 170, 170), &Color::WHITE);
        assert!((ratio - 2.32).abs() < 0.01, "got {ratio}");
    }

    #[test]
    fn red_on_white() {
        let ratio = contrast_ratio(&hex("#ff0000"), &Color::WHITE);
        assert!((ratio - 4.0).abs() < 0.01);
    }

    #[test]
    fn zinc_400_on_zinc_950() {
        let ratio = contrast_ratio(&hex("#a1a1aa"), &hex("#09090b"));
        assert!((ratio - 7.76).abs() < 0.1);
    }

    #[test]
    fn alpha_does_not_affect_luminance() {
        let faded = Color::rgba(0, 0, 0, 0.2);
        assert_eq!(relative_luminance(&faded), relative_luminance(&Color::BLACK));
    }

    #[test]
    fn large_text_boundaries() {
        assert!(is_large_text(24.0, 400.0));
        assert!(!is_large_text(23.9, 400.0));
        assert!(is_large_text(18.66, 700.0));
        assert!(!is_large_text(18.0, 700.0));
        assert!(is_large_text(18.66, 900.0));
        assert!(!is_large_text(20.0, 699.0));
    }

    #[test]
    fn thresholds_are_fixed() {
        assert_eq!(minimum_ratio(true), 3.0);
        assert_eq!(minimum_ratio(false), 4.5);
        assert_eq!(TextSize::classify(16.0, 400.0).minimum_ratio(), 4.5);
        assert_eq!(TextSize::classify(32.0, 400.0), TextSize::Large);
    }

    mod proptests {
        use crate::math::wcag::{contrast_ratio, relative_luminance};
        use crate::math::Color;
        use proptest::prelude::*;

        fn any_color() -> impl Strategy<Value = Color> {
            (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::rgb(r, g, b))
        }

        proptest! {
            #[test]
            fn prop_self_contrast_is_one(c in any_color()) {
                prop_assert!((contrast_ratio(&c, &c) - 1.0).abs() < 1e-12);
            }

            #[test]
            fn prop_symmetric(a in any_color(), b in any_color()) {
                prop_assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
            }

            #[test]
            fn prop_ratio_bounded(a in any_color(), b in any_color()) {
                let r = contrast_ratio(&a, &b);
                prop_assert!(r >= 1.0 && r <= 21.0 + 1e-9);
            }

            #[test]
            fn prop_luminance_unit_interval(c in any_color()) {
                let l = relative_luminance(&c);
                prop_assert!((0.0..=1.0 + 1e-12).contains(&l));
            }
        }
    }
}
