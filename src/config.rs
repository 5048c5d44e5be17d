//! Catalog client configuration

/// Base URL of the public TVMaze API.
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Poster shown for shows the catalog has no artwork for.
pub const PLACEHOLDER_IMAGE: &str =
    "https://innovating.capital/wp-content/uploads/2021/05/vertical-placeholder-image.jpg";

/// Configuration for the catalog client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base URL requests are issued against (default: TVMaze)
    pub base_url: String,
    /// Image URL substituted when a show has no poster
    pub placeholder_image: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            timeout_secs: 30,
        }
    }
}
