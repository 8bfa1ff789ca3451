use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::user::UserSummaryDto;

/// Lifecycle of a friendship row. A single row represents the pair; the
/// `user_id` side is whoever sent the request.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FriendStatus {
    Pending,
    Accepted,
    Rejected,
    Blocked,
}

impl FriendStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Blocked => "blocked",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            "blocked" => Some(Self::Blocked),
            _ => None,
        }
    }
}

/// An accepted friendship as seen from one side: the counterpart user plus
/// when the friendship was established.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FriendDto {
    pub id: i64,
    pub user: UserSummaryDto,
    pub since: DateTime<Utc>,
}

/// An incoming pending request with the sender's summary.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FriendRequestDto {
    pub id: i64,
    pub user: UserSummaryDto,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SendFriendRequestDto {
    pub friend_id: i64,
}
