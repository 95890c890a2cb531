//! Message records consumed by the board and the render whitelist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Media types the board renders inline. Everything else is dropped.
pub const ALLOWED_MEDIA_TYPES: [&str; 4] =
    ["image/jpeg", "image/jpg", "image/png", "image/gif"];

/// Originating identity of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    pub user_id: String,
    pub nickname: String,
    /// Avatar image reference rendered next to the nickname.
    pub avatar_url: String,
}

impl Sender {
    pub fn new(
        user_id: impl Into<String>,
        nickname: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            nickname: nickname.into(),
            avatar_url: avatar_url.into(),
        }
    }
}

/// Discriminator between plain-text and media messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// Text typed by a user.
    UserText { body: String },
    /// An uploaded file referenced by URL with its declared MIME type.
    FileMedia { url: String, media_type: String },
}

/// A single immutable message record. The board borrows these during
/// `render` and retains nothing afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub kind: MessageKind,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn user_text(
        id: impl Into<String>,
        sender: Sender,
        body: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            sender,
            kind: MessageKind::UserText { body: body.into() },
            created_at,
        }
    }

    pub fn file_media(
        id: impl Into<String>,
        sender: Sender,
        url: impl Into<String>,
        media_type: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            sender,
            kind: MessageKind::FileMedia {
                url: url.into(),
                media_type: media_type.into(),
            },
            created_at,
        }
    }

    pub fn is_user_text(&self) -> bool {
        matches!(self.kind, MessageKind::UserText { .. })
    }

    pub fn is_file_media(&self) -> bool {
        matches!(self.kind, MessageKind::FileMedia { .. })
    }

    /// Whether the board renders this message at all. Text is always
    /// allowed; media must carry a whitelisted MIME type. Disallowed
    /// messages are skipped without any signal to the caller.
    pub fn is_allowed(&self) -> bool {
        match &self.kind {
            MessageKind::UserText { .. } => true,
            MessageKind::FileMedia { media_type, .. } => {
                ALLOWED_MEDIA_TYPES.contains(&media_type.as_str())
            }
        }
    }
}
