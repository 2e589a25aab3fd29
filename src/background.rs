use serde::Serialize;

use crate::document::{ancestors, Element, NodeId, StyleSource};
use crate::error::AuditResult;
use crate::math::{try_parse_color, Color};

/// The background a sighted user perceives behind a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundResolution {
    /// Never fully transparent.
    pub color: Color,
    /// Element whose background was used; None when the page default applied.
    pub element: Option<NodeId>,
    /// Some visited element declared a background image, so the measured
    /// color may not be what is actually behind the text.
    pub had_image: bool,
}

/// An element's own declared background color.
///
/// A missing value is the CSS initial `transparent`. A value that cannot be
/// parsed is read as opaque white.
pub fn own_background(element: &Element<'_>) -> Color {
    match element.style.background_color.as_deref() {
        None => Color::rgba(0, 0, 0, 0.0),
        Some(raw) => try_parse_color(raw).unwrap_or_else(|| {
            tracing::trace!(
                element = %element.id,
                value = raw,
                "unparsable background, using white"
            );
            Color::WHITE
        }),
    }
}

/// Walk from `element` through its ancestors to the first background with
/// non-zero alpha.
///
/// When every element is transparent the page background is used if it is
/// visible, otherwise opaque white.
pub fn effective_background<S: StyleSource + ?Sized>(
    doc: &S,
    element: &Element<'_>,
) -> AuditResult<BackgroundResolution> {
    let mut had_image = false;

    for node in ancestors(doc, element) {
        let node = node?;
        had_image |= node.style.has_background_image();
        let color = own_background(&node);
        if !color.is_transparent() {
            return Ok(BackgroundResolution {
                color,
                element: Some(node.id),
                had_image,
            });
        }
    }

    let page = doc
        .page_background()
        .and_then(try_parse_color)
        .filter(|c| !c.is_transparent());
    if page.is_none() {
        tracing::trace!(element = %element.id, "no opaque background found, using white");
    }
    Ok(BackgroundResolution {
        color: page.unwrap_or(Color::WHITE),
        element: None,
        had_image,
    })
}
