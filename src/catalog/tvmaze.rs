/// TVMaze catalog client implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeSearchResult, TvMazeShow};
use super::{CatalogClient, CatalogError, Episode, Label, Show};
use crate::config::CatalogConfig;
use log::debug;
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Catalog client for the TVMaze API.
///
/// Issues blocking GET requests against `/search/shows` and
/// `/shows/<id>/episodes` and normalizes the responses.
pub struct TvMazeCatalog {
    client: reqwest::blocking::Client,
    base_url: String,
    placeholder_image: String,
}

impl TvMazeCatalog {
    /// Creates a client against the public TVMaze API.
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_config(CatalogConfig::default())
    }

    /// Creates a client with custom configuration.
    pub fn with_config(config: CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CatalogError::NetworkFailure(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            placeholder_image: config.placeholder_image,
        })
    }

    /// Converts a TVMaze show to our internal Show structure.
    ///
    /// Missing or empty artwork resolves to `placeholder_image`.
    fn convert_show(tvmaze_show: TvMazeShow, placeholder_image: &str) -> Show {
        let image = tvmaze_show
            .image
            .and_then(|image| image.medium)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| placeholder_image.to_string());

        Show {
            id: tvmaze_show.id,
            name: tvmaze_show.name,
            summary: tvmaze_show.summary.unwrap_or_default(),
            image,
        }
    }

    /// Converts a TVMaze episode to our internal Episode structure.
    fn convert_episode(tvmaze_episode: TvMazeEpisode) -> Episode {
        Episode {
            id: tvmaze_episode.id,
            name: tvmaze_episode.name.unwrap_or_else(|| "Unknown".to_string()),
            season: tvmaze_episode.season.unwrap_or(Label::Missing),
            number: tvmaze_episode.number.unwrap_or(Label::Missing),
        }
    }

    /// Performs a GET request and decodes the JSON body.
    ///
    /// `resource` names what was requested and ends up in `NotFound` errors.
    fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        resource: &str,
    ) -> Result<T, CatalogError> {
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| CatalogError::NetworkFailure(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(resource.to_string()));
        }

        if !status.is_success() {
            return Err(CatalogError::NetworkFailure(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .text()
            .map_err(|e| CatalogError::NetworkFailure(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| CatalogError::InvalidResponseShape(e.to_string()))
    }
}

impl CatalogClient for TvMazeCatalog {
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, CatalogError> {
        let url = format!("{}/search/shows", self.base_url);
        let results: Vec<TvMazeSearchResult> =
            self.fetch(&url, &[("q", term)], &format!("shows matching '{}'", term))?;

        debug!("search for '{}' returned {} show(s)", term, results.len());

        Ok(results
            .into_iter()
            .map(|result| Self::convert_show(result.show, &self.placeholder_image))
            .collect())
    }

    fn get_episodes(&self, show_id: u64) -> Result<Vec<Episode>, CatalogError> {
        let url = format!("{}/shows/{}/episodes", self.base_url, show_id);
        let episodes: Vec<TvMazeEpisode> = self.fetch(&url, &[], &format!("show {}", show_id))?;

        debug!("show {} has {} episode(s)", show_id, episodes.len());

        Ok(episodes.into_iter().map(Self::convert_episode).collect())
    }
}
