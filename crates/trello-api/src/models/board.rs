//! Board model for the Trello API.

use serde::{Deserialize, Serialize};

use super::{non_empty_id, Card, CardList, Decode, Member};

/// A Trello board.
///
/// `lists`, `cards` and `members` are only present when the request asked the
/// server to embed them (see [`BoardQuery`](crate::filter::BoardQuery)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// The unique identifier for the board.
    #[serde(deserialize_with = "non_empty_id")]
    pub id: String,

    /// The board title.
    pub name: String,

    /// The board description.
    #[serde(rename = "desc", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The URL to view the board in Trello.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Whether the board is closed (archived).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,

    /// The ID of the workspace (organization) that owns the board.
    #[serde(
        rename = "idOrganization",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub organization_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lists: Option<Vec<CardList>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<Card>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Member>>,
}

impl Board {
    /// Returns the embedded list with the given ID, if lists were requested.
    pub fn list(&self, list_id: &str) -> Option<&CardList> {
        self.lists.as_ref()?.iter().find(|list| list.id == list_id)
    }

    /// Returns the embedded cards on the given list.
    ///
    /// Empty when cards were not requested.
    pub fn cards_on_list<'a>(&'a self, list_id: &'a str) -> impl Iterator<Item = &'a Card> + 'a {
        self.cards
            .iter()
            .flatten()
            .filter(move |card| card.list_id.as_deref() == Some(list_id))
    }
}

impl Decode for Board {
    const KIND: &'static str = "board";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_board_minimal() {
        let board = Board::decode(json!({"id": "1", "name": "A"})).unwrap();

        assert_eq!(board.id, "1");
        assert_eq!(board.name, "A");
        assert!(board.description.is_none());
        assert!(board.url.is_none());
        assert!(board.closed.is_none());
        assert!(board.organization_id.is_none());
        assert!(board.lists.is_none());
        assert!(board.cards.is_none());
        assert!(board.members.is_none());
    }

    #[test]
    fn test_board_renamed_keys() {
        let board = Board::decode(json!({
            "id": "1",
            "name": "A",
            "desc": "Roadmap",
            "idOrganization": "org-9",
            "url": "https://trello.com/b/1",
            "closed": true
        }))
        .unwrap();

        assert_eq!(board.description.as_deref(), Some("Roadmap"));
        assert_eq!(board.organization_id.as_deref(), Some("org-9"));
        assert_eq!(board.url.as_deref(), Some("https://trello.com/b/1"));
        assert_eq!(board.closed, Some(true));
    }

    #[test]
    fn test_board_ignores_unrenamed_keys() {
        // The record attribute names are not wire keys.
        let board = Board::decode(json!({
            "id": "1",
            "name": "A",
            "description": "ignored",
            "organizationId": "ignored"
        }))
        .unwrap();
        assert!(board.description.is_none());
        assert!(board.organization_id.is_none());
    }

    #[test]
    fn test_board_requires_name() {
        let err = Board::decode(json!({"id": "1"})).unwrap_err();
        assert_eq!(err.missing_field(), Some("name".to_string()));
    }

    #[test]
    fn test_board_requires_id() {
        let err = Board::decode(json!({"name": "A"})).unwrap_err();
        assert_eq!(err.missing_field(), Some("id".to_string()));
    }

    #[test]
    fn test_board_wrong_typed_name_fails() {
        assert!(Board::decode(json!({"id": "1", "name": 7})).is_err());
    }

    #[test]
    fn test_board_with_nested_resources() {
        let board = Board::decode(json!({
            "id": "1",
            "name": "A",
            "lists": [
                {"id": "l1", "name": "To Do", "idBoard": "1"},
                {"id": "l2", "name": "Done", "idBoard": "1"}
            ],
            "cards": [
                {"id": "c1", "name": "One", "idList": "l1"},
                {"id": "c2", "name": "Two", "idList": "l2"},
                {"id": "c3", "name": "Three", "idList": "l1"}
            ],
            "members": []
        }))
        .unwrap();

        assert_eq!(board.lists.as_ref().map(Vec::len), Some(2));
        assert_eq!(board.members, Some(vec![]));
        assert_eq!(board.list("l2").map(|l| l.name.as_str()), Some("Done"));
        assert!(board.list("missing").is_none());

        let todo: Vec<&str> = board.cards_on_list("l1").map(|c| c.id.as_str()).collect();
        assert_eq!(todo, vec!["c1", "c3"]);
    }

    #[test]
    fn test_board_invalid_nested_card_fails_board() {
        let result = Board::decode(json!({
            "id": "1",
            "name": "A",
            "cards": [{"id": "c1"}]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_board_cards_on_list_without_cards() {
        let board = Board::decode(json!({"id": "1", "name": "A"})).unwrap();
        assert_eq!(board.cards_on_list("l1").count(), 0);
    }

    #[test]
    fn test_board_round_trip() {
        let board = Board::decode(json!({
            "id": "1",
            "name": "A",
            "desc": "Roadmap",
            "idOrganization": "org-9",
            "lists": [{"id": "l1", "name": "To Do", "pos": 1.5}],
            "members": [{"id": "m1", "fullName": "Ada"}]
        }))
        .unwrap();

        let encoded = serde_json::to_value(&board).unwrap();
        assert_eq!(encoded["desc"], "Roadmap");
        assert_eq!(encoded["idOrganization"], "org-9");
        assert!(encoded.get("cards").is_none());

        assert_eq!(Board::decode(encoded).unwrap(), board);
    }
}
