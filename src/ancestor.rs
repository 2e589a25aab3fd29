use serde::Serialize;

use crate::background::own_background;
use crate::document::{ancestors, Element, NodeId, StyleSource};
use crate::error::AuditResult;
use crate::math::{contrast_ratio, Color};

/// Evidence that an enclosing element already provides a passing background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AncestorPass {
    /// Always a strict ancestor of the evaluated element.
    pub node: NodeId,
    pub background: Color,
    pub ratio: f64,
}

/// Find the nearest strict ancestor whose own background, paired with
/// `foreground`, reaches `target`.
///
/// Only each ancestor's declared background is considered; transparent
/// ancestors are skipped rather than resolved further up.
pub fn find_passing_ancestor<S: StyleSource + ?Sized>(
    doc: &S,
    element: &Element<'_>,
    foreground: &Color,
    target: f64,
) -> AuditResult<Option<AncestorPass>> {
    for node in ancestors(doc, element).skip(1) {
        let node = node?;
        let background = own_background(&node);
        if !background.is_transparent() {
            let ratio = contrast_ratio(foreground, &background);
            if ratio >= target {
                return Ok(Some(AncestorPass {
                    node: node.id,
                    background,
                    ratio,
                }));
            }
        }
    }

    Ok(None)
}
