use serde::{Deserialize, Serialize};

use super::{ComputedStyle, Element, NodeId, Rect, StyleSource, TextNode};
use crate::error::AuditResult;

/// A flattened document captured by the host: node `i` has id `NodeId(i)`,
/// nodes are in document order and refer to their parent by id.
///
/// ```json
/// {
///   "pageBackground": "rgb(255, 255, 255)",
///   "nodes": [
///     { "kind": "element", "parent": null, "tag": "body",
///       "style": { "backgroundColor": "rgb(255, 255, 255)" },
///       "rect": { "width": 800, "height": 600 } },
///     { "kind": "text", "parent": 0, "text": "Hello" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSnapshot {
    #[serde(default)]
    pub page_background: Option<String>,
    #[serde(default)]
    pub nodes: Vec<SnapshotNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SnapshotNode {
    Element(ElementNode),
    Text(TextNodeData),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementNode {
    #[serde(default)]
    pub parent: Option<NodeId>,
    pub tag: String,
    #[serde(default, rename = "id")]
    pub html_id: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub style: ComputedStyle,
    #[serde(default)]
    pub rect: Option<Rect>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNodeData {
    #[serde(default)]
    pub parent: Option<NodeId>,
    pub text: String,
}

impl DocumentSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> AuditResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> AuditResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn with_page_background(mut self, color: &str) -> Self {
        self.page_background = Some(color.to_string());
        self
    }

    /// Append an element laid out as a 100x20 box.
    pub fn push_element(
        &mut self,
        parent: Option<NodeId>,
        tag: &str,
        style: ComputedStyle,
    ) -> NodeId {
        self.push(SnapshotNode::Element(ElementNode {
            parent,
            tag: tag.to_string(),
            html_id: None,
            classes: Vec::new(),
            style,
            rect: Some(Rect::new(0.0, 0.0, 100.0, 20.0)),
        }))
    }

    pub fn push_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push(SnapshotNode::Text(TextNodeData {
            parent: Some(parent),
            text: text.to_string(),
        }))
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementNode> {
        match self.nodes.get_mut(id.0 as usize)? {
            SnapshotNode::Element(el) => Some(el),
            SnapshotNode::Text(_) => None,
        }
    }

    fn push(&mut self, node: SnapshotNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }
}

impl StyleSource for DocumentSnapshot {
    fn text_nodes(&self) -> Box<dyn Iterator<Item = TextNode<'_>> + '_> {
        Box::new(self.nodes.iter().enumerate().filter_map(|(i, node)| match node {
            SnapshotNode::Text(t) => Some(TextNode {
                id: NodeId(i as u32),
                parent: t.parent,
                text: &t.text,
            }),
            SnapshotNode::Element(_) => None,
        }))
    }

    fn element(&self, id: NodeId) -> Option<Element<'_>> {
        match self.nodes.get(id.0 as usize)? {
            SnapshotNode::Element(el) => Some(Element {
                id,
                parent: el.parent,
                tag: &el.tag,
                html_id: el.html_id.as_deref(),
                classes: &el.classes,
                style: &el.style,
                rect: el.rect,
            }),
            SnapshotNode::Text(_) => None,
        }
    }

    fn page_background(&self) -> Option<&str> {
        self.page_background.as_deref()
    }
}
