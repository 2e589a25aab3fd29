use crate::document::{ancestors, Element, NodeId, StyleSource, TextNode};

/// A visible, non-empty text node and the element that styles it.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub text_node: NodeId,
    pub element: Element<'a>,
    pub text: &'a str,
}

/// One-shot iterator over the text worth evaluating, in document order.
pub struct Candidates<'a, S: ?Sized> {
    doc: &'a S,
    text_nodes: Box<dyn Iterator<Item = TextNode<'a>> + 'a>,
}

pub fn candidates<S: StyleSource + ?Sized>(doc: &S) -> Candidates<'_, S> {
    Candidates {
        doc,
        text_nodes: doc.text_nodes(),
    }
}

impl<'a, S: StyleSource + ?Sized> Iterator for Candidates<'a, S> {
    type Item = Candidate<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let doc = self.doc;
        for node in self.text_nodes.by_ref() {
            if node.text.trim().is_empty() {
                continue;
            }
            let Some(element) = node.parent.and_then(|p| doc.element(p)) else {
                continue;
            };
            if !is_visible(&element) {
                continue;
            }
            return Some(Candidate {
                text_node: node.id,
                element,
                text: node.text,
            });
        }
        None
    }
}

/// Rendered with a non-empty box and not hidden by display, visibility or opacity.
pub fn is_visible(element: &Element<'_>) -> bool {
    !element.style.is_hidden() && element.rect.is_some_and(|r| r.has_area())
}

/// Whitespace-collapsed text, cut to `max_chars` characters.
pub fn snippet(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().take(max_chars).collect()
}

/// Human-readable location like `main#content > div.card.wide > p`.
///
/// Elements with an id show only the id; otherwise up to two classes are
/// shown. At most `max_depth` levels are listed, innermost last.
pub fn element_path<S: StyleSource + ?Sized>(
    doc: &S,
    element: &Element<'_>,
    max_depth: usize,
) -> String {
    // A broken chain just ends the path.
    let mut parts: Vec<String> = ancestors(doc, element)
        .map_while(Result::ok)
        .take(max_depth)
        .map(|node| path_segment(&node))
        .collect();
    parts.reverse();
    parts.join(" > ")
}

fn path_segment(element: &Element<'_>) -> String {
    let mut segment = element.tag.to_ascii_lowercase();
    match element.html_id.filter(|id| !id.is_empty()) {
        Some(id) => {
            segment.push('#');
            segment.push_str(id);
        }
        None => {
            for class in element.classes.iter().filter(|c| !c.trim().is_empty()).take(2) {
                segment.push('.');
                segment.push_str(class.trim());
            }
        }
    }
    segment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ComputedStyle, DocumentSnapshot};
    use pretty_assertions::assert_eq;

    fn texts(doc: &DocumentSnapshot) -> Vec<&str> {
        candidates(doc).map(|c| c.text).collect()
    }

    #[test]
    fn yields_visible_text_in_document_order() {
        let mut doc = DocumentSnapshot::new();
        let body = doc.push_element(None, "body", ComputedStyle::default());
        let p = doc.push_element(Some(body), "p", ComputedStyle::default());
        doc.push_text(p, "first");
        doc.push_text(body, "second");
        assert_eq!(texts(&doc), vec!["first", "second"]);
    }

    #[test]
    fn skips_whitespace_only_text() {
        let mut doc = DocumentSnapshot::new();
        let body = doc.push_element(None, "body", ComputedStyle::default());
        doc.push_text(body, "  \n\t ");
        doc.push_text(body, "");
        assert!(texts(&doc).is_empty());
    }

    #[test]
    fn skips_hidden_owners() {
        let mut doc = DocumentSnapshot::new();
        let body = doc.push_element(None, "body", ComputedStyle::default());
        let none = doc.push_element(
            Some(body),
            "div",
            ComputedStyle::default().with_display("none"),
        );
        let hidden = doc.push_element(
            Some(body),
            "div",
            ComputedStyle::default().with_visibility("hidden"),
        );
        let clear = doc.push_element(Some(body), "div", ComputedStyle::default().with_opacity("0"));
        let collapsed = doc.push_element(Some(body), "div", ComputedStyle::default());
        doc.element_mut(collapsed).unwrap().rect =
            Some(crate::document::Rect::new(0.0, 0.0, 0.0, 12.0));
        let unrendered = doc.push_element(Some(body), "div", ComputedStyle::default());
        doc.element_mut(unrendered).unwrap().rect = None;
        for el in [none, hidden, clear, collapsed, unrendered] {
            doc.push_text(el, "invisible");
        }
        doc.push_text(body, "visible");
        assert_eq!(texts(&doc), vec!["visible"]);
    }

    #[test]
    fn skips_text_without_owner() {
        let mut doc = DocumentSnapshot::new();
        let body = doc.push_element(None, "body", ComputedStyle::default());
        let orphan = doc.push_text(body, "orphan");
        if let crate::document::SnapshotNode::Text(t) = &mut doc.nodes[orphan.0 as usize] {
            t.parent = None;
        }
        doc.push_text(NodeId(404), "dangling");
        assert!(texts(&doc).is_empty());
    }

    #[test]
    fn snippet_collapses_and_truncates() {
        assert_eq!(snippet("  Hello \n   world  ", 140), "Hello world");
        assert_eq!(snippet("äöüäöü", 3), "äöü");
    }

    #[test]
    fn path_uses_id_or_two_classes() {
        let mut doc = DocumentSnapshot::new();
        let body = doc.push_element(None, "BODY", ComputedStyle::default());
        let main = doc.push_element(Some(body), "main", ComputedStyle::default());
        doc.element_mut(main).unwrap().html_id = Some("content".into());
        let div = doc.push_element(Some(main), "div", ComputedStyle::default());
        doc.element_mut(div).unwrap().classes = vec!["card".into(), "wide".into(), "shadow".into()];
        let p = doc.push_element(Some(div), "p", ComputedStyle::default());

        let el = doc.element(p).unwrap();
        assert_eq!(element_path(&doc, &el, 10), "body > main#content > div.card.wide > p");
        assert_eq!(element_path(&doc, &el, 2), "div.card.wide > p");
    }

    #[test]
    fn path_stops_at_a_parent_cycle() {
        let mut doc = DocumentSnapshot::new();
        let list = doc.push_element(Some(NodeId(1)), "ul", ComputedStyle::default());
        let item = doc.push_element(Some(list), "li", ComputedStyle::default());
        let el = doc.element(item).unwrap();
        assert_eq!(element_path(&doc, &el, 10), "ul > li");

        let own = doc.push_element(Some(NodeId(2)), "p", ComputedStyle::default());
        assert_eq!(element_path(&doc, &doc.element(own).unwrap(), 10), "p");
    }
}
