//! HTTP client wrapper for the Trello API.

use std::fmt;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::Result;
use crate::filter::{AvatarSize, BoardQuery, ListFilter};
use crate::models::{decode_many, Board, Card, CardList, Decode, Member, SearchResults};
use crate::route::{merge_params, Params, Route, BASE_URL};

/// Base URL of the host serving member avatars.
pub const AVATAR_BASE_URL: &str = "https://trello-avatars.s3.amazonaws.com/";

/// API key and token appended to every API request.
#[derive(Clone)]
struct Credentials {
    api_key: String,
    token: String,
}

impl Credentials {
    fn params(&self) -> Params {
        Params::from([
            ("key", self.api_key.clone()),
            ("token", self.token.clone()),
        ])
    }
}

/// Client for interacting with the Trello API.
///
/// Every operation sends exactly one GET request. There is no retry and no
/// pagination.
///
/// # Examples
///
/// ```no_run
/// use trello_api_rs::prelude::*;
///
/// # async fn run() -> trello_api_rs::error::Result<()> {
/// let client = TrelloClient::new("api-key", "token");
/// for board in client.all_boards().await? {
///     let lists = client.lists_for_board(&board.id, ListFilter::Open).await?;
///     println!("{}: {} lists", board.name, lists.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TrelloClient {
    credentials: Credentials,
    http_client: reqwest::Client,
    base_url: String,
    avatar_base_url: String,
}

impl TrelloClient {
    /// Creates a new TrelloClient with the given API key and auth token.
    pub fn new(api_key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            credentials: Credentials {
                api_key: api_key.into(),
                token: token.into(),
            },
            http_client: reqwest::Client::new(),
            base_url: BASE_URL.to_string(),
            avatar_base_url: AVATAR_BASE_URL.to_string(),
        }
    }

    /// Returns a builder for configuring the client.
    pub fn builder(api_key: impl Into<String>, token: impl Into<String>) -> TrelloClientBuilder {
        TrelloClientBuilder::new(api_key, token)
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &str {
        &self.credentials.api_key
    }

    /// Returns the auth token.
    pub fn token(&self) -> &str {
        &self.credentials.token
    }

    /// Returns a reference to the underlying HTTP client.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Returns the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the avatar host base URL.
    pub fn avatar_base_url(&self) -> &str {
        &self.avatar_base_url
    }

    /// Fetches all boards of the authenticated member.
    pub async fn all_boards(&self) -> Result<Vec<Board>> {
        self.get_many(Route::AllBoards, Params::new()).await
    }

    /// Fetches a board, embedding the nested resources selected by `query`.
    pub async fn board(&self, board_id: &str, query: BoardQuery) -> Result<Board> {
        let params = Params::from([
            ("cards", query.cards.as_str().to_string()),
            ("lists", query.lists.as_str().to_string()),
            ("members", query.members.as_str().to_string()),
        ]);
        self.get_one(Route::Board(board_id.to_string()), params).await
    }

    /// Fetches the lists on a board.
    ///
    /// The API itself defaults to [`ListFilter::Open`].
    pub async fn lists_for_board(&self, board_id: &str, filter: ListFilter) -> Result<Vec<CardList>> {
        let params = Params::from([("filter", filter.as_str().to_string())]);
        self.get_many(Route::Lists(board_id.to_string()), params).await
    }

    /// Fetches the cards on a list.
    pub async fn cards_for_list(&self, list_id: &str, with_members: bool) -> Result<Vec<Card>> {
        let params = Params::from([("members", with_members.to_string())]);
        self.get_many(Route::CardsForList(list_id.to_string()), params)
            .await
    }

    /// Fetches a member. Pass `"me"` for the authenticated member.
    pub async fn member(&self, member_id: &str) -> Result<Member> {
        self.get_one(Route::Member(member_id.to_string()), Params::new())
            .await
    }

    /// Fetches the members assigned to a card.
    pub async fn members_for_card(&self, card_id: &str) -> Result<Vec<Member>> {
        self.get_many(Route::MembersForCard(card_id.to_string()), Params::new())
            .await
    }

    /// Searches boards, cards and members.
    ///
    /// With `partial` set, the last word of the query matches as a prefix.
    pub async fn search(&self, query: &str, partial: bool) -> Result<SearchResults> {
        let params = Params::from([
            ("query", query.to_string()),
            ("partial", partial.to_string()),
        ]);
        self.get_one(Route::Search, params).await
    }

    /// Fetches the raw PNG bytes of a member avatar.
    ///
    /// The avatar host is public, so no credentials are sent.
    pub async fn avatar_image(&self, avatar_hash: &str, size: AvatarSize) -> Result<Vec<u8>> {
        let url = self.avatar_url(avatar_hash, size);
        debug!(%url, "fetching avatar");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await?
            .error_for_status()?;

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// Builds the avatar URL for a hash and size.
    pub fn avatar_url(&self, avatar_hash: &str, size: AvatarSize) -> String {
        format!(
            "{}/{}/{}.png",
            self.avatar_base_url.trim_end_matches('/'),
            avatar_hash,
            size.pixels()
        )
    }

    async fn get_one<T: Decode>(&self, route: Route, params: Params) -> Result<T> {
        let body = self.fetch(&route, &params).await?;
        T::decode_slice(&body).map_err(|e| {
            warn!(%route, error = %e, "failed to decode response");
            e.into()
        })
    }

    async fn get_many<T: Decode>(&self, route: Route, params: Params) -> Result<Vec<T>> {
        let body = self.fetch(&route, &params).await?;
        decode_many(&body).map_err(|e| {
            warn!(%route, error = %e, "failed to decode response");
            e.into()
        })
    }

    /// Performs a GET request, returning the body of a successful response.
    async fn fetch(&self, route: &Route, params: &Params) -> Result<Vec<u8>> {
        let url = route.url(&self.base_url);
        let query = merge_params(&self.credentials.params(), params);

        // Only the route is logged; the query holds the credentials.
        debug!(%route, "sending request");

        let response = self
            .http_client
            .get(&url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        debug!(%route, bytes = body.len(), "received response");
        Ok(body.to_vec())
    }
}

impl fmt::Debug for TrelloClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrelloClient")
            .field("api_key", &"[REDACTED]")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("http_client", &self.http_client)
            .finish()
    }
}

/// Builder for [`TrelloClient`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use trello_api_rs::client::TrelloClientBuilder;
///
/// let client = TrelloClientBuilder::new("api-key", "token")
///     .request_timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// assert_eq!(client.base_url(), "https://api.trello.com/1/");
/// ```
pub struct TrelloClientBuilder {
    api_key: String,
    token: String,
    base_url: String,
    avatar_base_url: String,
    request_timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
}

impl TrelloClientBuilder {
    /// Creates a builder with the default endpoints and no request timeout.
    pub fn new(api_key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            token: token.into(),
            base_url: BASE_URL.to_string(),
            avatar_base_url: AVATAR_BASE_URL.to_string(),
            request_timeout: None,
            http_client: None,
        }
    }

    /// Overrides the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the avatar host base URL.
    pub fn avatar_base_url(mut self, avatar_base_url: impl Into<String>) -> Self {
        self.avatar_base_url = avatar_base_url.into();
        self
    }

    /// Sets a total timeout per request. Unset by default.
    ///
    /// Ignored when a custom HTTP client is supplied.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Uses a pre-configured reqwest client.
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Builds the client.
    ///
    /// Fails only if the underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<TrelloClient> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.request_timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(TrelloClient {
            credentials: Credentials {
                api_key: self.api_key,
                token: self.token,
            },
            http_client,
            base_url: self.base_url,
            avatar_base_url: self.avatar_base_url,
        })
    }
}

impl fmt::Debug for TrelloClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrelloClientBuilder")
            .field("api_key", &"[REDACTED]")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("avatar_base_url", &self.avatar_base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
