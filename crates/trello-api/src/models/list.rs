//! List model for the Trello API.
//!
//! Named `CardList` to avoid clashing with the many other things called
//! "list".

use serde::{Deserialize, Serialize};

use super::{non_empty_id, Decode};

/// A column of cards on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardList {
    /// The unique identifier for the list.
    #[serde(deserialize_with = "non_empty_id")]
    pub id: String,

    /// The list title.
    pub name: String,

    /// The ID of the board the list belongs to.
    #[serde(
        rename = "idBoard",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub board_id: Option<String>,

    /// Sort position on the board. Trello uses fractional positions.
    #[serde(rename = "pos", default, skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,

    /// Whether the authenticated member is subscribed to the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribed: Option<bool>,

    /// Whether the list is archived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
}

impl Decode for CardList {
    const KIND: &'static str = "list";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_full_deserialization() {
        let list = CardList::decode(json!({
            "id": "list-1",
            "name": "To Do",
            "idBoard": "board-1",
            "pos": 16384,
            "subscribed": false,
            "closed": false
        }))
        .unwrap();

        assert_eq!(list.id, "list-1");
        assert_eq!(list.name, "To Do");
        assert_eq!(list.board_id.as_deref(), Some("board-1"));
        assert_eq!(list.position, Some(16384.0));
        assert_eq!(list.subscribed, Some(false));
        assert_eq!(list.closed, Some(false));
    }

    #[test]
    fn test_list_fractional_position() {
        let list = CardList::decode(json!({"id": "l", "name": "n", "pos": 8192.5})).unwrap();
        assert_eq!(list.position, Some(8192.5));
    }

    #[test]
    fn test_list_requires_name() {
        let err = CardList::decode(json!({"id": "list-1"})).unwrap_err();
        assert_eq!(err.missing_field(), Some("name".to_string()));
        assert_eq!(err.target(), "list");
    }

    #[test]
    fn test_list_null_optionals_are_absent() {
        let list = CardList::decode(json!({
            "id": "list-1",
            "name": "Done",
            "idBoard": null,
            "closed": null
        }))
        .unwrap();
        assert!(list.board_id.is_none());
        assert!(list.closed.is_none());
    }
}
