//! Trello API client library
//!
//! Maps the boards, lists, cards, labels and members returned by the Trello
//! REST API onto typed records, and exposes one async operation per endpoint.
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use trello_api_rs::prelude::*;
//! ```
//!
//! This re-exports [`TrelloClient`](client::TrelloClient), the error types,
//! the query filters and the data models.

pub mod client;
pub mod error;
pub mod filter;
pub mod models;
pub mod prelude;
pub mod route;
