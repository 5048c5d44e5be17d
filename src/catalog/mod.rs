/// Data structures and traits for TV catalog lookups.
///
/// This module provides the normalized `Show` and `Episode` records that the
/// rest of the crate works with, the error taxonomy for catalog requests, and
/// the `CatalogClient` trait implemented by concrete catalog backends.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::TvMazeCatalog;

use std::fmt;
use thiserror::Error;

/// Errors that can occur while talking to the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not be completed or returned a non-success status
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// The response body did not have the expected JSON shape
    #[error("Invalid response shape: {0}")]
    InvalidResponseShape(String),

    /// The requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

/// A television series as returned by a show search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    /// Catalog-assigned identifier
    pub id: u64,
    /// The show's title
    pub name: String,
    /// Summary text, possibly containing markup
    pub summary: String,
    /// Poster URL, never empty
    pub image: String,
}

/// A season or episode label.
///
/// TVMaze returns numbers here, but specials come back with a null episode
/// number and some third-party data carries text labels.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(untagged)]
pub enum Label {
    Number(u64),
    Text(String),
    Missing,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Number(n) => write!(f, "{}", n),
            Label::Text(s) => f.write_str(s),
            Label::Missing => f.write_str("special"),
        }
    }
}

/// A single episode belonging to a show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    /// Catalog-assigned identifier
    pub id: u64,
    /// The episode title
    pub name: String,
    /// The season this episode belongs to
    pub season: Label,
    /// Position within the season
    pub number: Label,
}

/// Trait for catalog backends that can search shows and list episodes.
///
/// Both operations return records in the order the backend provides them;
/// implementors must not re-sort.
pub trait CatalogClient {
    /// Searches for shows whose name matches `term`.
    ///
    /// The term is passed through as-is; URL encoding is left to the
    /// transport.
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, CatalogError>;

    /// Lists all episodes of the show with the given id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` when the catalog has no such show.
    fn get_episodes(&self, show_id: u64) -> Result<Vec<Episode>, CatalogError>;
}

impl<C: CatalogClient + ?Sized> CatalogClient for &C {
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, CatalogError> {
        (**self).search_shows(term)
    }

    fn get_episodes(&self, show_id: u64) -> Result<Vec<Episode>, CatalogError> {
        (**self).get_episodes(show_id)
    }
}
