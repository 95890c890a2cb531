//! Input gate: the state machine attached to the text-entry control.
//!
//! The gate owns no surface of its own; every transition mutates the
//! surface passed in, following the pattern of keeping UI state operations
//! separate from the state they act on.

use crate::surface::{NodeId, Surface};
use crate::text::TextOptions;

/// Class toggled on the wrapper (focus state) and the send icon
/// (affordance state).
const ACTIVE_CLASS: &str = "active";

/// Gate over the input wrapper, the text input, and the send icon.
pub struct InputGate {
    wrapper: NodeId,
    input: NodeId,
    icon: NodeId,
}

impl InputGate {
    pub fn new(wrapper: NodeId, input: NodeId, icon: NodeId) -> Self {
        Self {
            wrapper,
            input,
            icon,
        }
    }

    pub fn wrapper(&self) -> NodeId {
        self.wrapper
    }

    pub fn input(&self) -> NodeId {
        self.input
    }

    pub fn icon(&self) -> NodeId {
        self.icon
    }

    /// Focus marks the wrapper active; visual state only.
    pub fn on_focus<S: Surface>(&self, surface: &mut S) {
        if !surface.has_class(self.wrapper, ACTIVE_CLASS) {
            surface.add_class(self.wrapper, ACTIVE_CLASS);
        }
    }

    pub fn on_blur<S: Surface>(&self, surface: &mut S) {
        if surface.has_class(self.wrapper, ACTIVE_CLASS) {
            surface.remove_class(self.wrapper, ACTIVE_CLASS);
        }
    }

    /// Recompute the send affordance from the trimmed input content.
    /// Called on every keystroke, down and up.
    pub fn refresh<S: Surface>(&self, surface: &mut S) {
        let has_content = !surface.text(self.input).trim().is_empty();
        if has_content {
            if !surface.has_class(self.icon, ACTIVE_CLASS) {
                surface.add_class(self.icon, ACTIVE_CLASS);
            }
        } else {
            surface.remove_class(self.icon, ACTIVE_CLASS);
        }
    }

    /// Whether the send affordance is currently lit.
    pub fn is_active<S: Surface>(&self, surface: &S) -> bool {
        surface.has_class(self.icon, ACTIVE_CLASS)
    }

    /// Paste handler: plain-text clipboard content only, appended to the
    /// current value. Falls back to the legacy accessor; with neither
    /// available this is a no-op.
    pub fn on_paste<S: Surface>(&self, surface: &mut S) {
        let Some(pasted) = surface.read_clipboard() else {
            return;
        };
        let mut value = surface.text(self.input);
        value.push_str(&pasted);
        surface.set_text(self.input, &value, &TextOptions::plain());
    }

    /// Post-send cleanup: drop block-level children left behind by rich
    /// paste artifacts, empty the value, and recompute the affordance.
    pub fn clear<S: Surface>(&self, surface: &mut S) {
        for stray in surface.children_with_tag(self.input, "div") {
            surface.remove_child(self.input, stray);
        }
        surface.set_text(self.input, "", &TextOptions::plain());
        self.refresh(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySurface;

    fn build(surface: &mut MemorySurface) -> InputGate {
        let wrapper = surface.create_element("div");
        let input = surface.create_element("input");
        let icon = surface.create_element("div");
        surface.append_child(wrapper, input);
        surface.append_child(wrapper, icon);
        InputGate::new(wrapper, input, icon)
    }

    #[test]
    fn test_focus_and_blur_toggle_wrapper() {
        let mut surface = MemorySurface::new();
        let gate = build(&mut surface);
        gate.on_focus(&mut surface);
        assert!(surface.has_class(gate.wrapper(), ACTIVE_CLASS));
        // A second focus does not duplicate the class.
        gate.on_focus(&mut surface);
        let wrapper = gate.wrapper();
        assert_eq!(
            surface.classes(wrapper).iter().filter(|c| *c == ACTIVE_CLASS).count(),
            1
        );
        gate.on_blur(&mut surface);
        assert!(!surface.has_class(wrapper, ACTIVE_CLASS));
    }

    #[test]
    fn test_refresh_follows_trimmed_content() {
        let mut surface = MemorySurface::new();
        let gate = build(&mut surface);
        assert!(!gate.is_active(&surface));

        surface.set_text(gate.input(), "hello", &TextOptions::plain());
        gate.refresh(&mut surface);
        assert!(gate.is_active(&surface));

        // Whitespace-only content does not light the affordance.
        surface.set_text(gate.input(), "   ", &TextOptions::plain());
        gate.refresh(&mut surface);
        assert!(!gate.is_active(&surface));
    }

    #[test]
    fn test_paste_appends_plain_text() {
        let mut surface = MemorySurface::new();
        let gate = build(&mut surface);
        surface.set_text(gate.input(), "hi ", &TextOptions::plain());
        surface.set_clipboard(Some("there"));
        gate.on_paste(&mut surface);
        assert_eq!(surface.text(gate.input()), "hi there");
    }

    #[test]
    fn test_paste_falls_back_to_legacy_accessor() {
        let mut surface = MemorySurface::new();
        let gate = build(&mut surface);
        surface.set_legacy_clipboard(Some("old api"));
        gate.on_paste(&mut surface);
        assert_eq!(surface.text(gate.input()), "old api");
    }

    #[test]
    fn test_paste_without_clipboard_is_noop() {
        let mut surface = MemorySurface::new();
        let gate = build(&mut surface);
        surface.set_text(gate.input(), "keep", &TextOptions::plain());
        gate.on_paste(&mut surface);
        assert_eq!(surface.text(gate.input()), "keep");
    }

    #[test]
    fn test_clear_removes_rich_paste_leftovers() {
        let mut surface = MemorySurface::new();
        let gate = build(&mut surface);
        surface.set_text(gate.input(), "draft", &TextOptions::plain());
        gate.refresh(&mut surface);
        let stray = surface.create_element("div");
        surface.append_child(gate.input(), stray);
        let span = surface.create_element("span");
        surface.append_child(gate.input(), span);

        gate.clear(&mut surface);
        assert_eq!(surface.text(gate.input()), "");
        assert!(!gate.is_active(&surface));
        // Only div children are purged.
        assert_eq!(surface.children(gate.input()), &[span]);
    }
}
