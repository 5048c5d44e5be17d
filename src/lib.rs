//! Show Scout - Search TV shows and browse their episodes
//!
//! This library provides a client for the TVMaze catalog, a renderer that
//! turns catalog records into page markup, and a controller that connects
//! user events to both.

mod catalog;
mod config;
mod controller;
mod page;
mod render;

pub use catalog::{CatalogClient, CatalogError, Episode, Label, Show, TvMazeCatalog};
pub use config::{CatalogConfig, DEFAULT_BASE_URL, PLACEHOLDER_IMAGE};
pub use controller::{ClickEvent, Controller, ScreenMode, SubmitEvent};
pub use page::{Container, Fragment, Page, PageError, SearchForm, default_output_path};
pub use render::{
    RenderContext, episode_label, escape_html, render_episode_list, render_show_list,
};

use thiserror::Error;

/// Top-level error type for Show Scout operations
#[derive(Debug, Error)]
pub enum ShowScoutError {
    /// Error setting up or talking to the catalog
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Error publishing the page
    #[error("Page error: {0}")]
    Page(#[from] PageError),
}
