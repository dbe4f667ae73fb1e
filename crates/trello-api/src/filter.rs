//! Query filters accepted by the Trello API.

use std::fmt;

/// Which lists to return or embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    All,
    Closed,
    None,
    Open,
}

impl ListFilter {
    /// Returns the query string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListFilter::All => "all",
            ListFilter::Closed => "closed",
            ListFilter::None => "none",
            ListFilter::Open => "open",
        }
    }
}

/// Which cards to embed in a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFilter {
    All,
    Closed,
    None,
    Open,
    /// Open cards on open lists.
    Visible,
}

impl CardFilter {
    /// Returns the query string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardFilter::All => "all",
            CardFilter::Closed => "closed",
            CardFilter::None => "none",
            CardFilter::Open => "open",
            CardFilter::Visible => "visible",
        }
    }
}

/// Which board members to embed in a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberFilter {
    Admins,
    All,
    None,
    Normal,
    Owners,
}

impl MemberFilter {
    /// Returns the query string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberFilter::Admins => "admins",
            MemberFilter::All => "all",
            MemberFilter::None => "none",
            MemberFilter::Normal => "normal",
            MemberFilter::Owners => "owners",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(ListFilter, CardFilter, MemberFilter);

/// Avatar image sizes served by the avatar host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarSize {
    /// 30x30 pixels.
    Small,
    /// 170x170 pixels.
    Large,
}

impl AvatarSize {
    /// Returns the edge length in pixels.
    pub fn pixels(&self) -> u32 {
        match self {
            AvatarSize::Small => 30,
            AvatarSize::Large => 170,
        }
    }
}

/// Which nested resources to embed when fetching a board.
///
/// Defaults to embedding nothing.
///
/// # Examples
///
/// ```
/// use trello_api_rs::filter::{BoardQuery, CardFilter, ListFilter, MemberFilter};
///
/// let query = BoardQuery::new().lists(ListFilter::Open).cards(CardFilter::Open);
/// assert_eq!(query.members, MemberFilter::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardQuery {
    pub lists: ListFilter,
    pub cards: CardFilter,
    pub members: MemberFilter,
}

impl Default for BoardQuery {
    fn default() -> Self {
        Self {
            lists: ListFilter::None,
            cards: CardFilter::None,
            members: MemberFilter::None,
        }
    }
}

impl BoardQuery {
    /// Creates a query that embeds nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets which lists to embed.
    pub fn lists(mut self, filter: ListFilter) -> Self {
        self.lists = filter;
        self
    }

    /// Sets which cards to embed.
    pub fn cards(mut self, filter: CardFilter) -> Self {
        self.cards = filter;
        self
    }

    /// Sets which members to embed.
    pub fn members(mut self, filter: MemberFilter) -> Self {
        self.members = filter;
        self
    }
}
