//! Read-only view of a rendered document: the text tree, computed styles and
//! layout boxes. The audit never touches a live page directly; hosts implement
//! [`StyleSource`] (or serialize a [`snapshot::DocumentSnapshot`]) instead.

pub mod snapshot;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{AuditError, AuditResult};

pub use snapshot::{DocumentSnapshot, ElementNode, SnapshotNode, TextNodeData};

/// Opaque reference to a node. Only meaningful to the document that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Computed style values exactly as the host reported them.
///
/// Every field may be absent or malformed; the accessors below decide how
/// each case is read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComputedStyle {
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub background_image: Option<String>,
    pub font_size: Option<String>,
    pub font_weight: Option<String>,
    pub display: Option<String>,
    pub visibility: Option<String>,
    pub opacity: Option<String>,
}

impl ComputedStyle {
    pub fn with_color(mut self, value: &str) -> Self {
        self.color = Some(value.to_string());
        self
    }

    pub fn with_background(mut self, value: &str) -> Self {
        self.background_color = Some(value.to_string());
        self
    }

    pub fn with_background_image(mut self, value: &str) -> Self {
        self.background_image = Some(value.to_string());
        self
    }

    pub fn with_font(mut self, size: &str, weight: &str) -> Self {
        self.font_size = Some(size.to_string());
        self.font_weight = Some(weight.to_string());
        self
    }

    pub fn with_display(mut self, value: &str) -> Self {
        self.display = Some(value.to_string());
        self
    }

    pub fn with_visibility(mut self, value: &str) -> Self {
        self.visibility = Some(value.to_string());
        self
    }

    pub fn with_opacity(mut self, value: &str) -> Self {
        self.opacity = Some(value.to_string());
        self
    }

    /// Font size in px, read like `parseFloat("16px")`. Missing or malformed is 0.
    pub fn font_size_px(&self) -> f64 {
        self.font_size
            .as_deref()
            .and_then(leading_number)
            .unwrap_or(0.0)
    }

    /// Numeric font weight. Keywords map to their CSS values; anything
    /// unreadable counts as regular (400).
    pub fn font_weight_value(&self) -> f64 {
        let Some(raw) = self.font_weight.as_deref() else {
            return 400.0;
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "normal" => 400.0,
            "bold" | "bolder" => 700.0,
            "lighter" => 100.0,
            other => leading_number(other).unwrap_or(400.0),
        }
    }

    /// True when a `background-image` other than `none` is declared.
    pub fn has_background_image(&self) -> bool {
        self.background_image
            .as_deref()
            .map(str::trim)
            .is_some_and(|v| !v.is_empty() && !v.eq_ignore_ascii_case("none"))
    }

    /// `display: none`, `visibility: hidden` or `opacity: 0`.
    pub fn is_hidden(&self) -> bool {
        let is = |value: &Option<String>, keyword: &str| {
            value
                .as_deref()
                .is_some_and(|v| v.trim().eq_ignore_ascii_case(keyword))
        };
        let transparent = self
            .opacity
            .as_deref()
            .and_then(leading_number)
            .is_some_and(|o| o == 0.0);
        is(&self.display, "none") || is(&self.visibility, "hidden") || transparent
    }
}

/// Leading decimal number of a CSS value (`"18.66px"` -> 18.66).
fn leading_number(value: &str) -> Option<f64> {
    let s = value.trim();
    let end = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map_or(s.len(), |(i, _)| i);
    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Border box of an element in CSS px.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Borrowed view of one element.
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub tag: &'a str,
    pub html_id: Option<&'a str>,
    pub classes: &'a [String],
    pub style: &'a ComputedStyle,
    /// None when the element produced no layout box.
    pub rect: Option<Rect>,
}

/// Borrowed view of one text node.
#[derive(Debug, Clone, Copy)]
pub struct TextNode<'a> {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub text: &'a str,
}

/// Style and layout capability the audit runs against.
pub trait StyleSource {
    /// Every text node, in document order.
    fn text_nodes(&self) -> Box<dyn Iterator<Item = TextNode<'_>> + '_>;

    fn element(&self, id: NodeId) -> Option<Element<'_>>;

    /// Background color of the page canvas, if the host reports one.
    fn page_background(&self) -> Option<&str>;

    /// Resolve an element's parent. A parent id that names no element is an error.
    fn parent_element(&self, element: &Element<'_>) -> AuditResult<Option<Element<'_>>> {
        match element.parent {
            None => Ok(None),
            Some(parent) => self
                .element(parent)
                .map(Some)
                .ok_or(AuditError::DanglingParent {
                    node: element.id,
                    parent,
                }),
        }
    }
}

/// `element` followed by each of its ancestors, innermost first.
///
/// A broken chain ends the walk with one error: `DanglingParent` for a
/// missing parent, `ParentCycle` when a node would be visited twice.
pub fn ancestors<'a, S: StyleSource + ?Sized>(
    doc: &'a S,
    element: &Element<'a>,
) -> Ancestors<'a, S> {
    Ancestors {
        doc,
        next: Some(*element),
        pending: None,
        visited: HashSet::new(),
    }
}

pub struct Ancestors<'a, S: ?Sized> {
    doc: &'a S,
    next: Option<Element<'a>>,
    pending: Option<AuditError>,
    visited: HashSet<NodeId>,
}

impl<'a, S: StyleSource + ?Sized> Iterator for Ancestors<'a, S> {
    type Item = AuditResult<Element<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.pending.take() {
            return Some(Err(err));
        }
        let node = self.next.take()?;
        if !self.visited.insert(node.id) {
            return Some(Err(AuditError::ParentCycle { node: node.id }));
        }
        let doc = self.doc;
        match doc.parent_element(&node) {
            Ok(parent) => self.next = parent,
            Err(err) => self.pending = Some(err),
        }
        Some(Ok(node))
    }
}
