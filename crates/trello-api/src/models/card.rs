//! Card model for the Trello API.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::{due_date, non_empty_id, Decode, Label};

/// A card on a list.
///
/// The `due` value is parsed with [`DueDateFormat::TRELLO`](super::DueDateFormat).
/// A due date string that cannot be parsed decodes to `None` rather than
/// failing the card; a non-string `due` is a decode failure.
///
/// # Examples
///
/// ```
/// use trello_api_rs::models::{Card, Decode};
///
/// let card = Card::decode(serde_json::json!({
///     "id": "c1",
///     "name": "Card",
///     "due": "not-a-date"
/// }))
/// .unwrap();
/// assert!(card.due_date.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// The unique identifier for the card.
    #[serde(deserialize_with = "non_empty_id")]
    pub id: String,

    /// The card title.
    pub name: String,

    /// The card description (Markdown).
    #[serde(rename = "desc", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the card is archived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,

    /// Sort position within the list.
    #[serde(rename = "pos", default, skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,

    /// When the card is due.
    #[serde(
        rename = "due",
        default,
        with = "due_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<DateTime<Utc>>,

    /// The ID of the list the card is on.
    #[serde(rename = "idList", default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,

    /// IDs of the members assigned to the card.
    #[serde(
        rename = "idMembers",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub member_ids: Option<Vec<String>>,

    /// The ID of the board the card is on.
    #[serde(
        rename = "idBoard",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub board_id: Option<String>,

    /// Short link to the card in the web UI.
    #[serde(
        rename = "shortUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub short_url: Option<String>,

    /// Labels attached to the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Label>>,
}

impl Card {
    /// Returns the due date in the local time zone.
    pub fn due_date_local(&self) -> Option<DateTime<Local>> {
        self.due_date.map(|due| due.with_timezone(&Local))
    }

    /// Returns the due date in the given time zone.
    pub fn due_date_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        self.due_date.map(|due| due.with_timezone(tz))
    }

    /// Returns true if the given member is assigned to the card.
    pub fn has_member(&self, member_id: &str) -> bool {
        self.member_ids
            .as_ref()
            .is_some_and(|ids| ids.iter().any(|id| id == member_id))
    }
}

impl Decode for Card {
    const KIND: &'static str = "card";
}
