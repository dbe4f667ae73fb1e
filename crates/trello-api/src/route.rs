//! URL construction for Trello API endpoints.

use std::collections::BTreeMap;
use std::fmt;

/// Base URL for the Trello API v1.
pub const BASE_URL: &str = "https://api.trello.com/1/";

/// Query parameters for a request, keyed by parameter name.
pub type Params = BTreeMap<&'static str, String>;

/// An API endpoint together with its path parameters.
///
/// # Examples
///
/// ```
/// use trello_api_rs::route::Route;
///
/// let route = Route::Lists("42".to_string());
/// assert_eq!(route.as_url(), "https://api.trello.com/1/boards/42/lists/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Boards of the authenticated member.
    AllBoards,
    /// A single board.
    Board(String),
    /// Lists on a board.
    Lists(String),
    /// Cards on a list.
    CardsForList(String),
    /// A single member.
    Member(String),
    /// Members assigned to a card.
    MembersForCard(String),
    /// Search across boards, cards and members.
    Search,
}

impl Route {
    /// Returns the path relative to the API base URL.
    pub fn path(&self) -> String {
        match self {
            Route::AllBoards => "members/me/boards/".to_string(),
            Route::Board(board_id) => format!("boards/{board_id}/"),
            Route::Lists(board_id) => format!("boards/{board_id}/lists/"),
            Route::CardsForList(list_id) => format!("lists/{list_id}/cards/"),
            Route::Member(member_id) => format!("members/{member_id}/"),
            Route::MembersForCard(card_id) => format!("cards/{card_id}/members/"),
            Route::Search => "search/".to_string(),
        }
    }

    /// Returns the full URL under the given base.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path())
    }

    /// Returns the full URL under [`BASE_URL`].
    pub fn as_url(&self) -> String {
        self.url(BASE_URL)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Combines two parameter sets. Keys in `right` replace keys in `left`.
pub fn merge_params(left: &Params, right: &Params) -> Params {
    let mut merged = left.clone();
    merged.extend(right.iter().map(|(k, v)| (*k, v.clone())));
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::AllBoards.path(), "members/me/boards/");
        assert_eq!(Route::Board("b1".into()).path(), "boards/b1/");
        assert_eq!(Route::Lists("b1".into()).path(), "boards/b1/lists/");
        assert_eq!(Route::CardsForList("l1".into()).path(), "lists/l1/cards/");
        assert_eq!(Route::Member("me".into()).path(), "members/me/");
        assert_eq!(Route::MembersForCard("c1".into()).path(), "cards/c1/members/");
        assert_eq!(Route::Search.path(), "search/");
    }

    #[test]
    fn test_route_as_url_uses_fixed_base() {
        assert_eq!(
            Route::AllBoards.as_url(),
            "https://api.trello.com/1/members/me/boards/"
        );
        assert_eq!(
            Route::MembersForCard("c1".into()).as_url(),
            "https://api.trello.com/1/cards/c1/members/"
        );
    }

    #[test]
    fn test_route_url_with_custom_base() {
        let route = Route::Board("b1".into());
        assert_eq!(route.url("http://127.0.0.1:8080"), "http://127.0.0.1:8080/boards/b1/");
        assert_eq!(route.url("http://127.0.0.1:8080/"), "http://127.0.0.1:8080/boards/b1/");
    }

    #[test]
    fn test_route_display_is_path() {
        assert_eq!(Route::Lists("b1".into()).to_string(), "boards/b1/lists/");
    }

    #[test]
    fn test_merge_params_right_wins() {
        let left = Params::from([("key", "k".to_string()), ("filter", "open".to_string())]);
        let right = Params::from([("filter", "all".to_string())]);

        let merged = merge_params(&left, &right);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged["key"], "k");
        assert_eq!(merged["filter"], "all");
    }

    #[test]
    fn test_merge_params_leaves_inputs_untouched() {
        let left = Params::from([("key", "k".to_string())]);
        let right = Params::new();
        let merged = merge_params(&left, &right);
        assert_eq!(merged, left);
    }
}
