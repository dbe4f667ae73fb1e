//! Search results for the Trello API.

use serde::{Deserialize, Serialize};

use super::{Board, Card, Decode, Member};

/// Records matching a search query.
///
/// Each collection is absent when the response did not include that model
/// type. Actions and organizations in the response are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boards: Option<Vec<Board>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<Card>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Member>>,
}

impl SearchResults {
    /// Returns true if no board, card or member matched.
    pub fn is_empty(&self) -> bool {
        self.boards.as_ref().map_or(true, Vec::is_empty)
            && self.cards.as_ref().map_or(true, Vec::is_empty)
            && self.members.as_ref().map_or(true, Vec::is_empty)
    }
}

impl Decode for SearchResults {
    const KIND: &'static str = "search results";
}
