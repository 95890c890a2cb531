//! Arena-backed reference implementation of [`Surface`].
//!
//! Used by the demo binary and the test suite. Nodes live in an append-only
//! arena; removal only unlinks, so every minted `NodeId` stays valid.

use std::collections::{HashMap, VecDeque};

use crate::surface::{NodeId, Surface};
use crate::text::{self, TextOptions};

/// Height assigned to a node that was never given one explicitly.
const DEFAULT_NODE_HEIGHT: f32 = 24.0;

#[derive(Debug, Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attrs: HashMap<String, String>,
    text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    height: Option<f32>,
    scroll_offset: f32,
}

/// In-memory surface with deterministic measurement and a synthesized-click
/// log, so scroll arithmetic and affordance behavior are observable.
#[derive(Default)]
pub struct MemorySurface {
    nodes: Vec<Node>,
    queued_heights: VecDeque<f32>,
    clipboard: Option<String>,
    legacy_clipboard: Option<String>,
    clicks: Vec<NodeId>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Heights handed out, in order, to nodes measured for the first time.
    /// Once the queue drains, measurement falls back to a fixed default.
    pub fn queue_heights(&mut self, heights: &[f32]) {
        self.queued_heights.extend(heights.iter().copied());
    }

    /// Pin a node's measured height explicitly.
    pub fn set_measured_height(&mut self, node: NodeId, height: f32) {
        self.nodes[node].height = Some(height);
    }

    pub fn set_clipboard(&mut self, content: Option<&str>) {
        self.clipboard = content.map(str::to_string);
    }

    pub fn set_legacy_clipboard(&mut self, content: Option<&str>) {
        self.legacy_clipboard = content.map(str::to_string);
    }

    /// Nodes that received a synthetic click, in dispatch order.
    pub fn clicks(&self) -> &[NodeId] {
        &self.clicks
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node].tag
    }

    pub fn classes(&self, node: NodeId) -> &[String] {
        &self.nodes[node].classes
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node].children
    }

    /// Maximum scroll offset of a container: the summed heights of its
    /// children. Unmeasured children count at the default height.
    pub fn max_scroll_offset(&mut self, node: NodeId) -> f32 {
        let children = self.nodes[node].children.clone();
        children.into_iter().map(|c| self.measured_height(c)).sum()
    }

    /// Indented tree dump for demos and debugging.
    pub fn dump(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.dump_into(node, 0, &mut out);
        out
    }

    fn dump_into(&self, node: NodeId, depth: usize, out: &mut String) {
        let n = &self.nodes[node];
        out.push_str(&"  ".repeat(depth));
        out.push('<');
        out.push_str(&n.tag);
        if !n.classes.is_empty() {
            out.push_str(&format!(" class=\"{}\"", n.classes.join(" ")));
        }
        let mut attrs: Vec<_> = n.attrs.iter().collect();
        attrs.sort();
        for (name, value) in attrs {
            out.push_str(&format!(" {name}=\"{value}\""));
        }
        out.push('>');
        if !n.text.is_empty() {
            out.push_str(&format!(" \"{}\"", n.text));
        }
        out.push('\n');
        for child in &n.children {
            self.dump_into(*child, depth + 1, out);
        }
    }

    fn unlink(&mut self, child: NodeId) {
        if let Some(old_parent) = self.nodes[child].parent.take() {
            self.nodes[old_parent].children.retain(|&c| c != child);
        }
    }
}

impl Surface for MemorySurface {
    fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Node {
            tag: tag.to_string(),
            ..Node::default()
        });
        self.nodes.len() - 1
    }

    fn set_classes(&mut self, node: NodeId, classes: &[&str]) {
        self.nodes[node].classes = classes.iter().map(|c| c.to_string()).collect();
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        let classes = &mut self.nodes[node].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        self.nodes[node].classes.retain(|c| c != class);
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes[node].classes.iter().any(|c| c == class)
    }

    fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        self.nodes[node]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    fn attr(&self, node: NodeId, name: &str) -> Option<String> {
        self.nodes[node].attrs.get(name).cloned()
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.unlink(child);
        self.nodes[parent].children.push(child);
        self.nodes[child].parent = Some(parent);
    }

    fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: Option<NodeId>) {
        self.unlink(child);
        let position = reference
            .and_then(|r| self.nodes[parent].children.iter().position(|&c| c == r));
        match position {
            Some(index) => self.nodes[parent].children.insert(index, child),
            None => self.nodes[parent].children.push(child),
        }
        self.nodes[child].parent = Some(parent);
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        if self.nodes[child].parent == Some(parent) {
            self.unlink(child);
        }
    }

    fn first_child(&self, parent: NodeId) -> Option<NodeId> {
        self.nodes[parent].children.first().copied()
    }

    fn children_with_tag(&self, parent: NodeId, tag: &str) -> Vec<NodeId> {
        self.nodes[parent]
            .children
            .iter()
            .copied()
            .filter(|&c| self.nodes[c].tag == tag)
            .collect()
    }

    fn set_text(&mut self, node: NodeId, text: &str, options: &TextOptions) {
        self.nodes[node].text = text::prepare(text, options);
    }

    fn text(&self, node: NodeId) -> String {
        self.nodes[node].text.clone()
    }

    fn measured_height(&mut self, node: NodeId) -> f32 {
        if let Some(height) = self.nodes[node].height {
            return height;
        }
        let height = self.queued_heights.pop_front().unwrap_or(DEFAULT_NODE_HEIGHT);
        self.nodes[node].height = Some(height);
        height
    }

    fn scroll_offset(&self, node: NodeId) -> f32 {
        self.nodes[node].scroll_offset
    }

    fn set_scroll_offset(&mut self, node: NodeId, offset: f32) {
        self.nodes[node].scroll_offset = offset;
    }

    fn scroll_to_bottom(&mut self, node: NodeId) {
        let max = self.max_scroll_offset(node);
        self.nodes[node].scroll_offset = max;
    }

    fn synthesize_click(&mut self, node: NodeId) {
        self.clicks.push(node);
    }

    fn clipboard_text(&self) -> Option<String> {
        self.clipboard.clone()
    }

    fn clipboard_text_legacy(&self) -> Option<String> {
        self.legacy_clipboard.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_linking() {
        let mut surface = MemorySurface::new();
        let parent = surface.create_element("div");
        let a = surface.create_element("span");
        let b = surface.create_element("span");
        surface.append_child(parent, a);
        surface.append_child(parent, b);
        assert_eq!(surface.children(parent), &[a, b]);
        assert_eq!(surface.first_child(parent), Some(a));

        surface.remove_child(parent, a);
        assert_eq!(surface.children(parent), &[b]);
    }

    #[test]
    fn test_insert_before_reference() {
        let mut surface = MemorySurface::new();
        let parent = surface.create_element("div");
        let a = surface.create_element("span");
        let b = surface.create_element("span");
        let c = surface.create_element("span");
        surface.append_child(parent, a);
        surface.insert_before(parent, b, Some(a));
        assert_eq!(surface.children(parent), &[b, a]);
        // No reference appends.
        surface.insert_before(parent, c, None);
        assert_eq!(surface.children(parent), &[b, a, c]);
    }

    #[test]
    fn test_reparenting_unlinks_from_old_parent() {
        let mut surface = MemorySurface::new();
        let p1 = surface.create_element("div");
        let p2 = surface.create_element("div");
        let child = surface.create_element("span");
        surface.append_child(p1, child);
        surface.append_child(p2, child);
        assert!(surface.children(p1).is_empty());
        assert_eq!(surface.children(p2), &[child]);
    }

    #[test]
    fn test_class_operations() {
        let mut surface = MemorySurface::new();
        let node = surface.create_element("div");
        surface.set_classes(node, &["icon"]);
        surface.add_class(node, "active");
        surface.add_class(node, "active");
        assert_eq!(surface.classes(node), &["icon", "active"]);
        assert!(surface.has_class(node, "active"));
        surface.remove_class(node, "active");
        assert!(!surface.has_class(node, "active"));
    }

    #[test]
    fn test_queued_heights_then_default() {
        let mut surface = MemorySurface::new();
        let a = surface.create_element("div");
        let b = surface.create_element("div");
        surface.queue_heights(&[40.0]);
        assert_eq!(surface.measured_height(a), 40.0);
        // Height is memoized on the node.
        assert_eq!(surface.measured_height(a), 40.0);
        assert_eq!(surface.measured_height(b), DEFAULT_NODE_HEIGHT);
    }

    #[test]
    fn test_scroll_to_bottom_uses_child_heights() {
        let mut surface = MemorySurface::new();
        let container = surface.create_element("div");
        let a = surface.create_element("div");
        let b = surface.create_element("div");
        surface.append_child(container, a);
        surface.append_child(container, b);
        surface.set_measured_height(a, 100.0);
        surface.set_measured_height(b, 50.0);
        surface.scroll_to_bottom(container);
        assert_eq!(surface.scroll_offset(container), 150.0);
    }

    #[test]
    fn test_clipboard_fallback_order() {
        let mut surface = MemorySurface::new();
        assert_eq!(surface.read_clipboard(), None);
        surface.set_legacy_clipboard(Some("legacy"));
        assert_eq!(surface.read_clipboard().as_deref(), Some("legacy"));
        surface.set_clipboard(Some("primary"));
        assert_eq!(surface.read_clipboard().as_deref(), Some("primary"));
    }

    #[test]
    fn test_set_text_applies_options() {
        let mut surface = MemorySurface::new();
        let node = surface.create_element("span");
        let options = TextOptions {
            escape_markup: true,
            preserve_line_breaks: true,
        };
        surface.set_text(node, "<b>\nhi", &options);
        assert_eq!(surface.text(node), "&lt;b&gt;<br>hi");
    }
}
