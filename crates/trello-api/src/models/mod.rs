//! API data types for the Trello API.
//!
//! Each record decodes from the JSON the API returns, applying the key
//! renames the API uses (`desc`, `idBoard`, `idList`, ...). Decoding is pure:
//! it either yields a complete record or a [`DecodeError`].

mod board;
mod card;
mod due_date;
mod label;
mod list;
mod member;
mod search;

pub use board::*;
pub use card::*;
pub use due_date::DueDateFormat;
pub use label::*;
pub use list::*;
pub use member::*;
pub use search::*;

use serde::de::{self, DeserializeOwned, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::DecodeError;

/// A record that can be decoded from an API payload.
///
/// # Examples
///
/// ```
/// use trello_api_rs::models::{Board, Decode};
///
/// let board = Board::decode(serde_json::json!({"id": "1", "name": "A"})).unwrap();
/// assert_eq!(board.name, "A");
/// assert!(board.description.is_none());
/// ```
pub trait Decode: DeserializeOwned {
    /// Name used in decode errors.
    const KIND: &'static str;

    /// Decodes a record from an untyped JSON value.
    fn decode(value: Value) -> Result<Self, DecodeError> {
        serde_path_to_error::deserialize(value)
            .map_err(|e| DecodeError::from_path_error(Self::KIND, e))
    }

    /// Decodes a record from a raw response body.
    fn decode_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        from_slice(Self::KIND, bytes)
    }
}

/// Decodes a JSON array of records from a raw response body.
///
/// Fails as a whole if any element fails.
pub fn decode_many<T: Decode>(bytes: &[u8]) -> Result<Vec<T>, DecodeError> {
    from_slice(T::KIND, bytes)
}

fn from_slice<T: DeserializeOwned>(kind: &'static str, bytes: &[u8]) -> Result<T, DecodeError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| DecodeError::from_path_error(kind, e))?;
    deserializer
        .end()
        .map_err(|e| DecodeError::new(kind, ".", e))?;
    Ok(value)
}

/// Deserializes a required identifier, rejecting the empty string.
pub(crate) fn non_empty_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let id = String::deserialize(deserializer)?;
    if id.is_empty() {
        return Err(de::Error::invalid_value(
            Unexpected::Str(&id),
            &"a non-empty id",
        ));
    }
    Ok(id)
}
