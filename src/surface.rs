//! The rendering capability the board consumes.
//!
//! The board never touches a concrete element hierarchy; it drives a
//! `Surface` through opaque node handles. Hosts back the trait with a real
//! toolkit; tests and the demo use [`crate::memory::MemorySurface`].

use crate::text::TextOptions;

/// Opaque handle to a surface node. Handles are only ever minted by
/// `create_element` and stay valid for the surface's lifetime.
pub type NodeId = usize;

/// Narrow rendering interface the panel is composed against.
pub trait Surface {
    /// Create a detached element with the given tag.
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Replace the node's class list.
    fn set_classes(&mut self, node: NodeId, classes: &[&str]);
    fn add_class(&mut self, node: NodeId, class: &str);
    fn remove_class(&mut self, node: NodeId, class: &str);
    fn has_class(&self, node: NodeId, class: &str) -> bool;

    fn set_attr(&mut self, node: NodeId, name: &str, value: &str);
    fn attr(&self, node: NodeId, name: &str) -> Option<String>;

    fn append_child(&mut self, parent: NodeId, child: NodeId);
    /// Insert `child` before `reference`; with no reference (or a reference
    /// that is not a child of `parent`) this appends.
    fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: Option<NodeId>);
    fn remove_child(&mut self, parent: NodeId, child: NodeId);
    fn first_child(&self, parent: NodeId) -> Option<NodeId>;
    /// Direct children carrying the given tag, in order.
    fn children_with_tag(&self, parent: NodeId, tag: &str) -> Vec<NodeId>;

    /// Write text content, applying the given preparation options.
    fn set_text(&mut self, node: NodeId, text: &str, options: &TextOptions);
    fn text(&self, node: NodeId) -> String;

    /// Rendered height of a node. Takes `&mut self` since measurement may
    /// force layout on real surfaces.
    fn measured_height(&mut self, node: NodeId) -> f32;

    fn scroll_offset(&self, node: NodeId) -> f32;
    fn set_scroll_offset(&mut self, node: NodeId, offset: f32);
    /// Scroll a container to its maximum offset.
    fn scroll_to_bottom(&mut self, node: NodeId);

    /// Dispatch a synthetic click on a node, as if the user had clicked it.
    fn synthesize_click(&mut self, node: NodeId);

    /// Primary clipboard accessor. `None` when unavailable.
    fn clipboard_text(&self) -> Option<String>;
    /// Legacy clipboard accessor, tried when the primary one is absent.
    fn clipboard_text_legacy(&self) -> Option<String>;

    /// Plain-text clipboard content, primary accessor first, then the
    /// legacy fallback. `None` means paste becomes a no-op.
    fn read_clipboard(&self) -> Option<String> {
        self.clipboard_text().or_else(|| self.clipboard_text_legacy())
    }
}
