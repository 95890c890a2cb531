//! Event types crossing the panel boundary in both directions.

/// Keys the input gate distinguishes. Anything else arrives as `Other`
/// with its raw key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Enter,
    Other(u16),
}

/// Input events routed from the host into the panel, in dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The text input gained focus.
    Focus,
    /// The text input lost focus.
    Blur,
    /// A key went down while the input had focus.
    KeyDown(KeyCode),
    /// A key came up while the input had focus.
    KeyUp(KeyCode),
    /// The user pasted into the input; content is read from the surface
    /// clipboard accessors.
    Paste,
    /// The file-attach affordance was clicked.
    AttachClicked,
    /// The "more messages below" bar was clicked.
    BarClicked,
}

/// Events emitted by the panel for the host to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// The user asked to send the current input text. May carry an empty
    /// string; downstream send logic is expected to no-op on it.
    Submitted { text: String },
    /// The user asked to attach a file.
    AttachRequested,
}
