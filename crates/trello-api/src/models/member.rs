//! Member model for the Trello API.

use serde::{Deserialize, Serialize};

use super::{non_empty_id, Decode};

/// A Trello user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// The unique identifier for the member.
    #[serde(deserialize_with = "non_empty_id")]
    pub id: String,

    /// Hash used to build the avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_hash: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Whether the member has confirmed their email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Only returned for the authenticated member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Member {
    /// Returns the full name if set, otherwise the username.
    pub fn display_name(&self) -> Option<&str> {
        self.full_name.as_deref().or(self.username.as_deref())
    }
}

impl Decode for Member {
    const KIND: &'static str = "member";
}
