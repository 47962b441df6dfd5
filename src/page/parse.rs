// src/page/parse.rs
//! HTML parsing into the page model, on top of `scraper`'s html5ever tree.

use scraper::{Html, Node as HtmlNode};

use super::{ElementData, NodeId, NodeKind, Page};

impl Page {
    /// Parses a full document. html5ever recovers from malformed markup, so
    /// this never fails; a page without the expected regions simply renders
    /// nothing into them.
    pub fn parse(html: &str) -> Page {
        let doc = Html::parse_document(html);
        let mut page = Page::empty();
        let root = page.root();
        adopt(&doc, &mut page, root, false);
        page
    }

    /// Replaces the subtree under `node` with the parsed `fragment`.
    pub fn set_inner_html(&mut self, node: NodeId, fragment: &str) {
        let doc = Html::parse_fragment(fragment);
        self.detach_children(node);
        adopt(&doc, self, node, true);
    }
}

/// Walks the scraper tree and appends converted nodes under `into`.
///
/// Fragment trees wrap their content in a synthetic `<html>` element; with
/// `unwrap_fragment` the wrapper is skipped and only its children adopted.
fn adopt(doc: &Html, page: &mut Page, into: NodeId, unwrap_fragment: bool) {
    let root = doc.tree.root();
    let mut pending = Vec::new();
    if unwrap_fragment {
        for child in root.children() {
            if child.value().is_element() {
                for inner in child.children() {
                    pending.push((inner, into));
                }
            }
        }
    } else {
        for child in root.children() {
            pending.push((child, into));
        }
    }

    // Processed as a queue: children enqueue behind pending siblings, which
    // keeps every child list in document order.
    let mut next = 0;
    while next < pending.len() {
        let (source, parent) = pending[next];
        next += 1;
        if let Some(ours) = convert(page, parent, source.value()) {
            for child in source.children() {
                pending.push((child, ours));
            }
        }
    }
}

/// Converts one scraper node and appends it under `parent`. Returns the new
/// node when the subtree below it should be walked too.
fn convert(page: &mut Page, parent: NodeId, source: &HtmlNode) -> Option<NodeId> {
    let kind = match source {
        HtmlNode::Element(el) => {
            let mut data = ElementData::new(el.name());
            for (name, value) in el.attrs() {
                match name {
                    "id" => data.id = Some(value.to_string()),
                    "class" => {
                        data.classes = value.split_whitespace().map(str::to_string).collect();
                    }
                    "style" => data.styles = parse_inline_style(value),
                    _ => data.attrs.push((name.to_string(), value.to_string())),
                }
            }
            NodeKind::Element(data)
        }
        HtmlNode::Text(text) => NodeKind::Text(text.to_string()),
        HtmlNode::Comment(comment) => NodeKind::Comment(comment.to_string()),
        HtmlNode::Doctype(doctype) => {
            page.doctype = Some(doctype.name().to_string());
            return None;
        }
        _ => return None,
    };
    let id = page.push_node(kind);
    page.nodes[id.0].parent = Some(parent);
    page.nodes[parent.0].children.push(id);
    Some(id)
}

fn parse_inline_style(raw: &str) -> Vec<(String, String)> {
    raw.split(';')
        .filter_map(|decl| {
            let (prop, value) = decl.split_once(':')?;
            let prop = prop.trim();
            let value = value.trim();
            if prop.is_empty() || value.is_empty() {
                return None;
            }
            Some((prop.to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::Page;

    #[test]
    fn test_parses_ids_classes_and_inline_styles() {
        let page = Page::parse(
            r#"<html><body><div id="x" class="a b" style="opacity: 0; color: red" data-k="v"></div></body></html>"#,
        );
        let div = page.element_by_id("x").unwrap();
        assert!(page.has_class(div, "a"));
        assert!(page.has_class(div, "b"));
        assert_eq!(page.style(div, "opacity"), Some("0"));
        assert_eq!(page.style(div, "color"), Some("red"));
        assert_eq!(page.attr(div, "data-k"), Some("v"));
    }

    #[test]
    fn test_script_contents_stay_raw() {
        let page = Page::parse(
            r#"<html><body><script id="resume-config" type="application/json">{"basic": {"name": "A < B"}}</script></body></html>"#,
        );
        let script = page.element_by_id("resume-config").unwrap();
        assert_eq!(
            page.text_content(script),
            r#"{"basic": {"name": "A < B"}}"#
        );
    }

    #[test]
    fn test_inner_html_accepts_multiple_top_level_nodes() {
        let mut page = Page::parse(r#"<html><body><div id="slot">old</div></body></html>"#);
        let slot = page.element_by_id("slot").unwrap();
        page.set_inner_html(slot, r#"<h4>one</h4><p class="note">two</p>"#);
        let children = page.children(slot);
        assert_eq!(children.len(), 2);
        assert_eq!(page.tag(children[0]), Some("h4"));
        assert_eq!(page.tag(children[1]), Some("p"));
        assert_eq!(page.text_content(slot), "onetwo");
    }

    #[test]
    fn test_inner_html_replaces_previous_content() {
        let mut page = Page::parse(r#"<html><body><div id="slot"><span class="old">x</span></div></body></html>"#);
        let slot = page.element_by_id("slot").unwrap();
        page.set_inner_html(slot, "<em>y</em>");
        assert!(page.elements_with_class("old").is_empty());
        assert_eq!(page.text_content(slot), "y");
    }

    #[test]
    fn test_malformed_markup_still_yields_a_body() {
        let page = Page::parse("<div>unclosed");
        assert!(page.body().is_some());
    }

    #[test]
    fn test_empty_fragment_clears_the_region() {
        let mut page = Page::parse(r#"<html><body><div id="slot">old</div></body></html>"#);
        let slot = page.element_by_id("slot").unwrap();
        page.set_inner_html(slot, "");
        assert!(page.children(slot).is_empty());
        assert_eq!(page.text_content(slot), "");
    }
}
