//! Category Feed
//!
//! Parses category snapshots pushed by the data source.

use serde::Deserialize;
use thiserror::Error;

use crate::category::Category;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("malformed category snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Accepts either a bare array or an object with a `categories` array
#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    List(Vec<Category>),
    Wrapped { categories: Vec<Category> },
}

pub fn parse_snapshot(json: &str) -> Result<Vec<Category>, FeedError> {
    let snapshot: Snapshot = serde_json::from_str(json)?;
    Ok(match snapshot {
        Snapshot::List(categories) | Snapshot::Wrapped { categories } => categories,
    })
}
