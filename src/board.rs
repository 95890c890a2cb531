//! The message board: list-merge rendering, input wiring, and the
//! "more messages below" bar, all driven through a [`Surface`].

use chrono::Local;
use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::config::BoardConfig;
use crate::events::{BoardEvent, InputEvent, KeyCode};
use crate::gate::InputGate;
use crate::message::{Message, MessageKind};
use crate::palette::SenderPalette;
use crate::surface::{NodeId, Surface};
use crate::text::TextOptions;
use crate::timefmt;

/// Separator rendered between the nickname and the message body.
const NICK_SEPARATOR: &str = " : ";
/// Label on the notification bar.
const MORE_MESSAGES_BELOW: &str = "More message below.";
/// Id shared by the attach label and its hidden file input.
const FILE_INPUT_ID: &str = "chat_file_attach";

/// A chat message panel over an abstract rendering surface.
///
/// One instance exclusively owns its surface, sender-color map, and gate
/// state. `render` and `handle_event` run to completion on the caller's
/// thread and must not be invoked reentrantly.
pub struct MessageBoard<S: Surface> {
    surface: S,
    root: NodeId,
    content: NodeId,
    gate: InputGate,
    palette: SenderPalette,
    config: BoardConfig,
    bottom_bar: Option<NodeId>,
    events_tx: Sender<BoardEvent>,
    events_rx: Receiver<BoardEvent>,
}

impl<S: Surface> MessageBoard<S> {
    /// Build the panel scaffold on the given surface: the scrollable
    /// content container, then the input row with its text input, send
    /// icon, and attach affordance.
    pub fn new(mut surface: S, config: BoardConfig) -> Self {
        let root = surface.create_element("div");
        surface.set_classes(root, &["message-board"]);

        let content = surface.create_element("div");
        surface.set_classes(content, &["content"]);
        surface.append_child(root, content);

        let content_input = surface.create_element("div");
        surface.set_classes(content_input, &["content-input"]);

        let input = surface.create_element("input");
        surface.set_classes(input, &["input"]);
        surface.set_attr(input, "contenteditable", "true");
        surface.append_child(content_input, input);

        let icon = surface.create_element("div");
        surface.set_classes(icon, &["icon"]);
        surface.append_child(content_input, icon);

        let file = surface.create_element("label");
        surface.set_classes(file, &["file"]);
        surface.set_attr(file, "for", FILE_INPUT_ID);
        let file_input = surface.create_element("input");
        surface.set_attr(file_input, "id", FILE_INPUT_ID);
        surface.set_attr(file_input, "type", "file");
        surface.set_attr(file_input, "accept", "image/*");
        surface.set_attr(file_input, "hidden", "true");
        surface.append_child(file, file_input);
        surface.append_child(content_input, file);

        surface.append_child(root, content_input);

        let (events_tx, events_rx) = unbounded();

        Self {
            surface,
            root,
            content,
            gate: InputGate::new(content_input, input, icon),
            palette: SenderPalette::new(),
            config,
            bottom_bar: None,
            events_tx,
            events_rx,
        }
    }

    /// Replace the sender palette, e.g. with one seeded for tests.
    pub fn with_palette(mut self, palette: SenderPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Receiver for the panel's outbound events. The channel is unbounded;
    /// drain it with `try_recv` after dispatching input.
    pub fn events(&self) -> Receiver<BoardEvent> {
        self.events_rx.clone()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn content(&self) -> NodeId {
        self.content
    }

    pub fn input(&self) -> NodeId {
        self.gate.input()
    }

    pub fn icon(&self) -> NodeId {
        self.gate.icon()
    }

    /// Trimmed current input text.
    pub fn message(&self) -> String {
        self.surface.text(self.gate.input()).trim().to_string()
    }

    /// Forget all sender color assignments; used when the panel is reused
    /// for a different conversation.
    pub fn reset(&mut self) {
        self.palette.reset();
    }

    /// Merge a batch of messages into the content container.
    ///
    /// With `loading_more` the batch is history backfill: items land ahead
    /// of existing content, keeping the input order, and the scroll offset
    /// is shifted by their summed heights so nothing visibly moves.
    /// Otherwise items append at the tail. With `scroll_to_bottom` the
    /// container ends scrolled to its maximum offset.
    pub fn render(&mut self, messages: &[Message], scroll_to_bottom: bool, loading_more: bool) {
        let anchor = self.surface.first_child(self.content);
        let mut shifted = 0.0f32;
        let mut inserted = 0usize;

        for message in messages {
            if !message.is_allowed() {
                tracing::trace!(id = %message.id, "skipping message with unsupported media type");
                continue;
            }
            let item = self.build_item(message);
            if loading_more {
                self.surface.insert_before(self.content, item, anchor);
                shifted += self.surface.measured_height(item);
            } else {
                self.surface.append_child(self.content, item);
            }
            inserted += 1;
        }

        if loading_more {
            let offset = self.surface.scroll_offset(self.content);
            self.surface.set_scroll_offset(self.content, offset + shifted);
        }
        if scroll_to_bottom {
            self.surface.scroll_to_bottom(self.content);
        }
        tracing::debug!(inserted, loading_more, scroll_to_bottom, "rendered message batch");
    }

    /// Build one render item: avatar, colored nickname, body (escaped text
    /// or media container), and timestamp label.
    fn build_item(&mut self, message: &Message) -> NodeId {
        let item = self.surface.create_element("div");
        self.surface.set_classes(item, &["message-item"]);
        self.surface.set_attr(item, "id", &message.id);

        let text = self.surface.create_element("div");
        self.surface.set_classes(text, &["message-text"]);

        let avatar = self.surface.create_element("img");
        self.surface.set_classes(avatar, &["avatar"]);
        self.surface.set_attr(avatar, "src", &message.sender.avatar_url);
        self.surface.append_child(text, avatar);

        let nickname = self.surface.create_element("label");
        let color = self.palette.color_of(&message.sender.user_id);
        let color_class = format!("nickname-color-{color}");
        self.surface.set_classes(nickname, &["nickname", color_class.as_str()]);
        self.surface.set_text(
            nickname,
            &format!("{}{}", message.sender.nickname, NICK_SEPARATOR),
            &TextOptions::plain(),
        );
        self.surface.append_child(text, nickname);

        match &message.kind {
            MessageKind::UserText { body } => {
                let body_node = self.surface.create_element("span");
                self.surface.set_classes(body_node, &["body"]);
                let options = TextOptions {
                    escape_markup: self.config.escape_markup,
                    preserve_line_breaks: self.config.preserve_line_breaks,
                };
                self.surface.set_text(body_node, body, &options);
                self.surface.append_child(text, body_node);
            }
            MessageKind::FileMedia { url, .. } => {
                let media = self.surface.create_element("img");
                self.surface.set_attr(media, "src", url);
                let container = self.surface.create_element("div");
                self.surface.set_classes(container, &["media-container"]);
                self.surface.append_child(container, media);
                self.surface.append_child(text, container);
            }
        }
        self.surface.append_child(item, text);

        let time = self.surface.create_element("div");
        self.surface.set_classes(time, &["time"]);
        let stamp = timefmt::format_timestamp(
            &message.created_at.with_timezone(&Local),
            &Local::now(),
        );
        self.surface.set_text(time, &stamp, &TextOptions::plain());
        self.surface.append_child(item, time);

        item
    }

    /// Dispatch one input event. Events must arrive in the order the host
    /// observed them; each handler runs to completion before the next.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Focus => self.gate.on_focus(&mut self.surface),
            InputEvent::Blur => self.gate.on_blur(&mut self.surface),
            InputEvent::KeyDown(key) => {
                self.gate.refresh(&mut self.surface);
                if key == KeyCode::Enter {
                    self.submit();
                }
            }
            InputEvent::KeyUp(_) => self.gate.refresh(&mut self.surface),
            InputEvent::Paste => self.gate.on_paste(&mut self.surface),
            InputEvent::AttachClicked => {
                let _ = self.events_tx.send(BoardEvent::AttachRequested);
            }
            InputEvent::BarClicked => self.dismiss_bottom_bar(),
        }
    }

    /// Enter path: synthesize the affordance click, hand the trimmed text
    /// to the host, then clear the input. Fires even on empty input; the
    /// host's send logic no-ops there.
    fn submit(&mut self) {
        self.surface.synthesize_click(self.gate.icon());
        let text = self.message();
        let _ = self.events_tx.send(BoardEvent::Submitted { text });
        self.gate.clear(&mut self.surface);
    }

    /// Show the "more messages below" bar. A second request while one is
    /// visible is a no-op.
    pub fn show_bottom_bar(&mut self) {
        if self.bottom_bar.is_some() {
            return;
        }
        let bar = self.surface.create_element("div");
        self.surface.set_classes(bar, &["btn"]);
        self.surface.set_text(bar, MORE_MESSAGES_BELOW, &TextOptions::plain());
        self.surface.append_child(self.root, bar);
        self.bottom_bar = Some(bar);
    }

    /// Hide the bar if present, clearing the slot so a later show request
    /// is honored.
    pub fn remove_bottom_bar(&mut self) {
        if let Some(bar) = self.bottom_bar.take() {
            self.surface.remove_child(self.root, bar);
        }
    }

    pub fn bottom_bar(&self) -> Option<NodeId> {
        self.bottom_bar
    }

    fn dismiss_bottom_bar(&mut self) {
        if self.bottom_bar.is_some() {
            self.surface.scroll_to_bottom(self.content);
            self.remove_bottom_bar();
        }
    }
}
