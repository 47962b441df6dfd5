// src/page/serialize.rs
//! Page serialization back to HTML text.
//!
//! Output is deterministic: attributes keep their stored order (`id`,
//! `class`, plain attributes, `style` last) and styles keep first-write
//! order, so rendering the same configuration twice yields byte-identical
//! documents.

use super::{NodeId, NodeKind, Page};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements whose text children are written verbatim, matching how the
/// parser reads them.
const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

impl Page {
    /// Serializes the whole document, doctype included.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        if let Some(doctype) = &self.doctype {
            out.push_str("<!DOCTYPE ");
            out.push_str(doctype);
            out.push_str(">\n");
        }
        for &child in self.children(self.root()) {
            self.write_node(child, &mut out, false);
        }
        out
    }

    /// Serializes the children of `node`, the counterpart of
    /// [`Page::set_inner_html`].
    pub fn inner_html(&self, node: NodeId) -> String {
        let raw = self
            .tag(node)
            .map(|t| RAW_TEXT_ELEMENTS.contains(&t))
            .unwrap_or(false);
        let mut out = String::new();
        for &child in self.children(node) {
            self.write_node(child, &mut out, raw);
        }
        out
    }

    fn write_node(&self, node: NodeId, out: &mut String, raw: bool) {
        match self.kind(node) {
            NodeKind::Document => {
                for &child in self.children(node) {
                    self.write_node(child, out, false);
                }
            }
            NodeKind::Text(text) => {
                if raw {
                    out.push_str(text);
                } else {
                    out.push_str(&escape_text(text));
                }
            }
            NodeKind::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
            NodeKind::Element(data) => {
                out.push('<');
                out.push_str(&data.tag);
                if let Some(id) = &data.id {
                    push_attr(out, "id", id);
                }
                if !data.classes.is_empty() {
                    push_attr(out, "class", &data.classes.join(" "));
                }
                for (name, value) in &data.attrs {
                    push_attr(out, name, value);
                }
                if !data.styles.is_empty() {
                    let style = data
                        .styles
                        .iter()
                        .map(|(prop, value)| format!("{prop}: {value}"))
                        .collect::<Vec<_>>()
                        .join("; ");
                    push_attr(out, "style", &style);
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&data.tag.as_str()) {
                    return;
                }
                let raw_children = RAW_TEXT_ELEMENTS.contains(&data.tag.as_str());
                for &child in self.children(node) {
                    self.write_node(child, out, raw_children);
                }
                out.push_str("</");
                out.push_str(&data.tag);
                out.push('>');
            }
        }
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

/// Escapes text-node content.
pub fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes attribute values, which additionally need quotes handled.
pub fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
