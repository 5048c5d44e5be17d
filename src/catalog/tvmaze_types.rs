/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
use super::Label;
use serde::Deserialize;

/// One entry of the `/search/shows` response array.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchResult {
    /// The matched show, wrapped alongside a relevance score we ignore
    pub show: TvMazeShow,
}

/// A show object as embedded in search results.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    pub id: u64,
    pub name: String,
    /// Summary in HTML format (may be null)
    pub summary: Option<String>,
    /// Poster image set (null for shows without artwork)
    pub image: Option<TvMazeImage>,
}

/// Image URLs in the sizes TVMaze provides.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    pub medium: Option<String>,
}

/// A single episode from the `/shows/<id>/episodes` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    pub id: u64,
    /// Episode title (may be null for episodes without a title)
    pub name: Option<String>,
    pub season: Option<Label>,
    /// Episode number within the season (null for specials)
    pub number: Option<Label>,
}
