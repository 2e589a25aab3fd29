use serde::Serialize;

use crate::math::{contrast_ratio, Color};

/// Iterations of the bisection over the blend factor. 2^-24 is well below
/// one 8-bit channel step.
pub const SEARCH_STEPS: u32 = 24;

/// How a suggested color relates to the original foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SuggestionKind {
    Black,
    White,
    Darker,
    Lighter,
    /// Target unreachable; black is the best available.
    MaxBlack,
    /// Target unreachable; white is the best available.
    MaxWhite,
}

impl SuggestionKind {
    pub fn label(self) -> &'static str {
        match self {
            SuggestionKind::Black => "black",
            SuggestionKind::White => "white",
            SuggestionKind::Darker => "darker",
            SuggestionKind::Lighter => "lighter",
            SuggestionKind::MaxBlack => "max (black)",
            SuggestionKind::MaxWhite => "max (white)",
        }
    }

    /// True when the suggested color reaches the requested ratio.
    pub fn meets_target(self) -> bool {
        !matches!(self, SuggestionKind::MaxBlack | SuggestionKind::MaxWhite)
    }
}

/// A replacement foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub color: Color,
    pub kind: SuggestionKind,
    /// Contrast of `color` against the background it was computed for.
    pub ratio: f64,
}

impl Suggestion {
    fn new(color: Color, kind: SuggestionKind, background: &Color) -> Self {
        Self {
            color,
            kind,
            ratio: contrast_ratio(&color, background),
        }
    }
}

/// Suggest a foreground for `background` that reaches `target`.
///
/// Tried in order: pure black, pure white, the smallest blend of `foreground`
/// toward black, then toward white. If nothing reaches the target, whichever
/// of black and white contrasts more is returned as a compromise.
pub fn suggest(foreground: &Color, background: &Color, target: f64) -> Suggestion {
    suggest_with_steps(foreground, background, target, SEARCH_STEPS)
}

fn suggest_with_steps(
    foreground: &Color,
    background: &Color,
    target: f64,
    steps: u32,
) -> Suggestion {
    let black_ratio = contrast_ratio(&Color::BLACK, background);
    let white_ratio = contrast_ratio(&Color::WHITE, background);

    if black_ratio >= target {
        return Suggestion::new(Color::BLACK, SuggestionKind::Black, background);
    }
    if white_ratio >= target {
        return Suggestion::new(Color::WHITE, SuggestionKind::White, background);
    }

    if let Some(color) = bisect_blend(foreground, &Color::BLACK, background, target, steps) {
        return Suggestion::new(color, SuggestionKind::Darker, background);
    }
    if let Some(color) = bisect_blend(foreground, &Color::WHITE, background, target, steps) {
        return Suggestion::new(color, SuggestionKind::Lighter, background);
    }

    tracing::debug!(
        background = %background,
        target,
        "contrast target unreachable, suggesting best extreme"
    );
    if black_ratio > white_ratio {
        Suggestion::new(Color::BLACK, SuggestionKind::MaxBlack, background)
    } else {
        Suggestion::new(Color::WHITE, SuggestionKind::MaxWhite, background)
    }
}

/// Bisect t in [0, 1] for the smallest blend `from -> toward` reaching `target`.
/// Only blends that were actually measured as passing are returned.
fn bisect_blend(
    from: &Color,
    toward: &Color,
    background: &Color,
    target: f64,
    steps: u32,
) -> Option<Color> {
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    let mut best = None;

    for _ in 0..steps {
        let t = (lo + hi) / 2.0;
        let candidate = from.mix(toward, t);
        if contrast_ratio(&candidate, background) >= target {
            best = Some(candidate);
            hi = t;
        } else {
            lo = t;
        }
    }

    best
}
