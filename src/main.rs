//! chatboard demo - drives the message panel against the in-memory surface
//!
//! Renders a scripted conversation (append, then history backfill), types a
//! message and presses Enter, drains the panel's outbound events, and dumps
//! the resulting node tree.

use chrono::{Duration, Utc};

use chatboard::board::MessageBoard;
use chatboard::config;
use chatboard::events::{BoardEvent, InputEvent, KeyCode};
use chatboard::memory::MemorySurface;
use chatboard::message::{Message, Sender};
use chatboard::surface::Surface;
use chatboard::text::TextOptions;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = config::load_config().unwrap_or_default();
    let mut board = MessageBoard::new(MemorySurface::new(), config);
    let events = board.events();

    let alice = Sender::new("u-alice", "alice", "https://cdn.example/alice.png");
    let bob = Sender::new("u-bob", "bob", "https://cdn.example/bob.png");

    let now = Utc::now();
    let fresh = vec![
        Message::user_text("m3", alice.clone(), "morning!", now - Duration::minutes(5)),
        Message::file_media(
            "m4",
            bob.clone(),
            "https://cdn.example/sunrise.jpg",
            "image/jpeg",
            now - Duration::minutes(3),
        ),
        // Dropped silently: not on the media whitelist.
        Message::file_media(
            "m5",
            bob.clone(),
            "https://cdn.example/notes.pdf",
            "application/pdf",
            now - Duration::minutes(2),
        ),
    ];
    board.render(&fresh, true, false);

    // History backfill: older messages land above without moving the view.
    let history = vec![
        Message::user_text("m1", bob, "anyone around?", now - Duration::days(40)),
        Message::user_text("m2", alice, "see you\ntomorrow", now - Duration::days(1)),
    ];
    board.render(&history, false, true);

    // The user types and presses Enter.
    let input = board.input();
    board.handle_event(InputEvent::Focus);
    board
        .surface_mut()
        .set_text(input, "hello <world>", &TextOptions::plain());
    board.handle_event(InputEvent::KeyUp(KeyCode::Other(68)));
    board.handle_event(InputEvent::KeyDown(KeyCode::Enter));

    while let Ok(event) = events.try_recv() {
        match event {
            BoardEvent::Submitted { text } => println!("host received submit: {text:?}"),
            BoardEvent::AttachRequested => println!("host received attach request"),
        }
    }

    board.show_bottom_bar();
    println!("{}", board.surface().dump(board.root()));
}
