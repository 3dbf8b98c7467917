//! Published-spreadsheet feed integration
//!
//! Fetches the gviz JSON-in-text payload, deserializes the row/cell table,
//! and maps positional cells into domain [`ProcessData`] rows.

mod client;
mod mapper;
mod table;

pub use client::{default_feed_url, extract_json, FeedClient, FeedError};
pub use mapper::{map_rows, valid_rows};
pub use table::{FeedCell, FeedRow, FeedTable};
