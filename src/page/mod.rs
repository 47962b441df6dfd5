// src/page/mod.rs
//! In-memory page model.
//!
//! A small arena-backed node tree standing in for the browser document:
//! enough structure to locate target regions by id, replace their content
//! wholesale, and let the interaction behaviors flip inline styles. Parsing
//! sits in [`parse`], serialization in [`serialize`].

mod parse;
mod serialize;

pub use serialize::{escape_attr, escape_text};

/// Viewport width assumed until a resize event reports a real one.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1024.0;

/// Handle to a node in a [`Page`] arena. Only valid for the page that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Synthetic tree root.
    Document,
    Element(ElementData),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct ElementData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    /// Attributes other than `id`, `class` and `style`, in parse order.
    attrs: Vec<(String, String)>,
    /// Inline styles in first-write order; later writes update in place so
    /// repeated renders serialize identically.
    styles: Vec<(String, String)>,
}

impl ElementData {
    fn new(tag: &str) -> Self {
        ElementData {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            styles: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

#[derive(Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A parsed page: the node arena plus the page-level signals the
/// interaction behaviors read.
#[derive(Debug)]
pub struct Page {
    nodes: Vec<Node>,
    root: NodeId,
    doctype: Option<String>,
    viewport_width: f64,
}

impl Page {
    fn empty() -> Self {
        let root_node = Node {
            kind: NodeKind::Document,
            parent: None,
            children: Vec::new(),
        };
        Page {
            nodes: vec![root_node],
            root: NodeId(0),
            doctype: None,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
        }
    }

    fn push_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn kind(&self, node: NodeId) -> &NodeKind {
        &self.nodes[node.0].kind
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    pub fn element(&self, node: NodeId) -> Option<&ElementData> {
        match &self.nodes[node.0].kind {
            NodeKind::Element(data) => Some(data),
            _ => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut ElementData> {
        match &mut self.nodes[node.0].kind {
            NodeKind::Element(data) => Some(data),
            _ => None,
        }
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(ElementData::tag)
    }

    /// Creates a detached element; attach it with [`Page::append_child`].
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push_node(NodeKind::Element(ElementData::new(tag)))
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != node);
        }
    }

    /// Unlinks every child of `node`. Detached subtrees stay in the arena
    /// but no longer serialize or answer queries.
    fn detach_children(&mut self, node: NodeId) {
        let children = std::mem::take(&mut self.nodes[node.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
    }

    /// Nodes under `scope` in document order, `scope` excluded.
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> =
            self.nodes[scope.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    /// First element whose `id` attribute equals `id`, in document order.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|&n| self.element(n).and_then(ElementData::id) == Some(id))
    }

    pub fn body(&self) -> Option<NodeId> {
        self.elements_by_tag("body").into_iter().next()
    }

    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|&n| self.tag(n) == Some(tag))
            .collect()
    }

    pub fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|&n| self.has_class(n, class))
            .collect()
    }

    /// Elements carrying at least one of `classes`, each listed once, in
    /// document order.
    pub fn elements_with_any_class(&self, classes: &[&str]) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|&n| classes.iter().any(|c| self.has_class(n, c)))
            .collect()
    }

    pub fn descendants_with_class(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&n| self.has_class(n, class))
            .collect()
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node)
            .map(|data| data.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if self.has_class(node, class) {
            return;
        }
        if let Some(data) = self.element_mut(node) {
            data.classes.push(class.to_string());
        }
    }

    /// Attribute lookup for attributes other than `id`, `class` and `style`;
    /// those are modeled as structured fields instead.
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?
            .attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn style(&self, node: NodeId, prop: &str) -> Option<&str> {
        self.element(node)?
            .styles
            .iter()
            .find(|(p, _)| p == prop)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_style(&mut self, node: NodeId, prop: &str, value: &str) {
        let Some(data) = self.element_mut(node) else {
            return;
        };
        match data.styles.iter_mut().find(|(p, _)| p == prop) {
            Some(pair) => pair.1 = value.to_string(),
            None => data.styles.push((prop.to_string(), value.to_string())),
        }
    }

    /// Concatenated text of `node`'s subtree, in document order.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        for id in self.descendants(node) {
            if let NodeKind::Text(text) = self.kind(id) {
                out.push_str(text);
            }
        }
        out
    }

    /// Replaces the whole subtree under `node` with a single text node.
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        self.detach_children(node);
        let child = self.push_node(NodeKind::Text(text.to_string()));
        self.nodes[child.0].parent = Some(node);
        self.nodes[node.0].children.push(child);
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }
}
