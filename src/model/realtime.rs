//! Wire format for the realtime WebSocket channel.
//!
//! Events use the original socket naming convention (`domain:action`) in an
//! adjacently tagged envelope: `{"event": "photo:new", "data": {...}}`.
//! Delivery is best effort: events are held only in the in-memory presence
//! registry and are lost when the receiving connection is gone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::user::UserSummaryDto;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PresenceStatus {
    Online,
    Offline,
    Away,
}

/// Events the server pushes to connected clients.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "event", content = "data")]
pub enum ServerEvent {
    #[serde(rename = "user:status")]
    UserStatus {
        user_id: i64,
        status: PresenceStatus,
    },
    #[serde(rename = "photo:new")]
    PhotoNew {
        photo_id: i64,
        sender: UserSummaryDto,
        caption: Option<String>,
    },
    #[serde(rename = "photo:viewed")]
    PhotoViewed {
        photo_id: i64,
        recipient_id: i64,
        viewed_at: DateTime<Utc>,
    },
    #[serde(rename = "friend:request")]
    FriendRequest {
        friendship_id: i64,
        user: UserSummaryDto,
    },
    #[serde(rename = "friend:accepted")]
    FriendAccepted {
        friendship_id: i64,
        user: UserSummaryDto,
    },
    #[serde(rename = "typing:start")]
    TypingStart { user_id: i64 },
    #[serde(rename = "typing:stop")]
    TypingStop { user_id: i64 },
    #[serde(rename = "error")]
    Error { message: String },
}

/// Events clients may send over the socket. These are ephemeral relays; all
/// state changes go through the REST API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "event", content = "data")]
pub enum ClientEvent {
    #[serde(rename = "user:status")]
    UserStatus { status: PresenceStatus },
    #[serde(rename = "photo:view")]
    PhotoView { sender_id: i64, photo_id: i64 },
    #[serde(rename = "friend:request")]
    FriendRequest { recipient_id: i64 },
    #[serde(rename = "friend:accept")]
    FriendAccept { recipient_id: i64 },
    #[serde(rename = "typing:start")]
    TypingStart { recipient_id: i64 },
    #[serde(rename = "typing:stop")]
    TypingStop { recipient_id: i64 },
}
