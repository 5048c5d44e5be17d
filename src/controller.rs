//! Interaction controller module
//!
//! This module wires the two user events of the front end, submitting the
//! search form and clicking a show's "Episodes" trigger, to a catalog
//! request followed by a render. Catalog failures are recovered here: the
//! page keeps its previous contents and shows a notice instead.

use crate::catalog::{CatalogClient, Episode, Show};
use crate::page::{Fragment, Page};
use crate::render::{render_episode_list, render_show_list};
use log::{info, warn};

/// Which list the page is currently presenting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenMode {
    ShowList,
    EpisodeList,
}

/// Submission of the search form
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Click on an "Episodes" trigger
///
/// The target is the position of the show fragment containing the clicked
/// trigger within the show list.
#[derive(Debug)]
pub struct ClickEvent {
    target: usize,
    default_prevented: bool,
}

impl ClickEvent {
    /// Creates a click on the trigger inside the show fragment at `index`.
    pub fn on_trigger(index: usize) -> Self {
        Self {
            target: index,
            default_prevented: false,
        }
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Owns the page and drives it in response to user events
pub struct Controller<C> {
    catalog: C,
    page: Page,
    mode: ScreenMode,
    shows: Vec<Show>,
    episodes: Vec<Episode>,
}

impl<C: CatalogClient> Controller<C> {
    /// Creates a controller over an empty page in `ShowList` mode.
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            page: Page::new(),
            mode: ScreenMode::ShowList,
            shows: Vec::new(),
            episodes: Vec::new(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn mode(&self) -> ScreenMode {
        self.mode
    }

    /// Shows from the most recent successful search
    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    /// Episodes from the most recent successful episode request
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// Handles submission of the search form.
    ///
    /// Hides the episode area before the request goes out. On failure the
    /// page and screen mode are restored and a notice is set.
    pub fn on_search_submit(&mut self, event: &mut SubmitEvent) {
        event.prevent_default();

        let term = self.page.form().term().to_string();
        let episodes_visible = self.page.episodes().is_visible();
        let previous_mode = self.mode;
        self.page.episodes_mut().hide();
        self.mode = ScreenMode::ShowList;

        match self.catalog.search_shows(&term) {
            Ok(shows) => {
                info!("search for '{}' found {} show(s)", term, shows.len());
                render_show_list(&mut self.page.render_context(), &shows);
                self.page.clear_notice();
                self.shows = shows;
            }
            Err(e) => {
                warn!("search for '{}' failed: {}", term, e);
                if episodes_visible {
                    self.page.episodes_mut().show();
                }
                self.mode = previous_mode;
                self.page
                    .set_notice(format!("Could not search for shows: {}", e));
            }
        }
    }

    /// Handles a click on a show's "Episodes" trigger.
    ///
    /// The show id is read from the fragment the trigger belongs to. On
    /// failure the episode area and screen mode are left untouched and a
    /// notice is set.
    pub fn on_episodes_click(&mut self, event: &mut ClickEvent) {
        event.prevent_default();

        let Some(show_id) = self
            .page
            .shows()
            .fragment(event.target())
            .and_then(Fragment::show_id)
        else {
            warn!("no show fragment at position {}", event.target());
            self.page
                .set_notice("That show is no longer on the page. Search again.");
            return;
        };

        match self.catalog.get_episodes(show_id) {
            Ok(episodes) => {
                info!("show {} has {} episode(s)", show_id, episodes.len());
                render_episode_list(&mut self.page.render_context(), &episodes);
                self.page.clear_notice();
                self.episodes = episodes;
                self.mode = ScreenMode::EpisodeList;
            }
            Err(e) => {
                warn!("episodes for show {} failed: {}", show_id, e);
                self.page
                    .set_notice(format!("Could not load episodes: {}", e));
            }
        }
    }
}
