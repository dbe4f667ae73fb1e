//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```
//! use trello_api_rs::prelude::*;
//!
//! // Now you have access to:
//! // - TrelloClient, TrelloClientBuilder (API client)
//! // - Error, DecodeError, Result (error handling)
//! // - ListFilter, CardFilter, MemberFilter, BoardQuery, AvatarSize (query options)
//! // - Board, CardList, Card, Label, Member, SearchResults (data models)
//! ```

// Client types
pub use crate::client::{TrelloClient, TrelloClientBuilder};

// Error types
pub use crate::error::{DecodeError, Error, Result};

// Query options
pub use crate::filter::{AvatarSize, BoardQuery, CardFilter, ListFilter, MemberFilter};

// Data models
pub use crate::models::{
    Board, Card, CardList, Decode, DueDateFormat, Label, Member, SearchResults,
};
