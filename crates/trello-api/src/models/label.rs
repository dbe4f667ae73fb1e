//! Label model for the Trello API.

use serde::{Deserialize, Serialize};

use super::{non_empty_id, Decode};

/// A colored label defined on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// The unique identifier for the label.
    #[serde(deserialize_with = "non_empty_id")]
    pub id: String,

    /// The label text. Trello allows color-only labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The label color (e.g. "green", "red").
    pub color: String,

    /// The ID of the board the label belongs to.
    #[serde(
        rename = "idBoard",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub board_id: Option<String>,

    /// How many cards carry this label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses: Option<u64>,
}

impl Decode for Label {
    const KIND: &'static str = "label";
}
