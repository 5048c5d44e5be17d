//! Page model module
//!
//! This module models the page the front end renders into: a search form
//! with a term input, a show-list container, an episode container that can
//! be hidden, and a notice area for recovered errors. The page can be
//! serialized to a complete HTML document and written to disk.

use crate::render::{RenderContext, escape_html};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while publishing the page
#[derive(Debug, Error)]
pub enum PageError {
    /// Failed to determine a default output location
    #[error("Failed to determine output directory location")]
    OutputDirectoryNotFound,

    /// Failed to create the directory the page is written into
    #[error("Failed to create output directory at {path}: {source}")]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },

    /// Failed to write the page document
    #[error("Failed to write page to {path}: {source}")]
    WriteFailed { path: PathBuf, source: io::Error },
}

/// A markup fragment inside a container.
///
/// Show fragments carry the id of the show they display so that trigger
/// elements inside them can be resolved back to a show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    show_id: Option<u64>,
    markup: String,
}

impl Fragment {
    /// Creates a fragment with no show association.
    pub fn new(markup: String) -> Self {
        Self {
            show_id: None,
            markup,
        }
    }

    /// Creates a fragment tagged with a show id.
    pub fn for_show(show_id: u64, markup: String) -> Self {
        Self {
            show_id: Some(show_id),
            markup,
        }
    }

    /// The show this fragment displays, if any
    pub fn show_id(&self) -> Option<u64> {
        self.show_id
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }
}

/// A page region whose contents are replaced wholesale on each render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: &'static str,
    tag: &'static str,
    fragments: Vec<Fragment>,
    visible: bool,
}

impl Container {
    /// Creates an empty, visible container rendered as `<tag id="id">`.
    pub fn new(id: &'static str, tag: &'static str) -> Self {
        Self {
            id,
            tag,
            fragments: Vec::new(),
            visible: true,
        }
    }

    /// Removes all fragments.
    pub fn clear(&mut self) {
        self.fragments.clear();
    }

    pub fn append(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Returns the fragment at `index`, in append order.
    pub fn fragment(&self, index: usize) -> Option<&Fragment> {
        self.fragments.get(index)
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Serializes the container and its fragments to HTML.
    pub fn to_html(&self) -> String {
        let hidden = if self.visible { "" } else { " hidden" };
        let inner: String = self
            .fragments
            .iter()
            .map(|f| f.markup.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "<{tag} id=\"{id}\"{hidden}>\n{inner}\n</{tag}>",
            tag = self.tag,
            id = self.id,
            hidden = hidden,
            inner = inner
        )
    }
}

/// The search form and its term input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    term: String,
}

impl SearchForm {
    /// Current value of the term input
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }
}

/// The complete page: form, containers and notice area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    form: SearchForm,
    shows: Container,
    episodes: Container,
    notice: Option<String>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// Creates an empty page with the episode area hidden.
    pub fn new() -> Self {
        let mut episodes = Container::new("episodesArea", "ul");
        episodes.hide();

        Self {
            form: SearchForm::default(),
            shows: Container::new("showsList", "div"),
            episodes,
            notice: None,
        }
    }

    pub fn form(&self) -> &SearchForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SearchForm {
        &mut self.form
    }

    pub fn shows(&self) -> &Container {
        &self.shows
    }

    pub fn episodes(&self) -> &Container {
        &self.episodes
    }

    pub(crate) fn episodes_mut(&mut self) -> &mut Container {
        &mut self.episodes
    }

    /// Borrows both containers for a renderer call.
    pub fn render_context(&mut self) -> RenderContext<'_> {
        RenderContext::new(&mut self.shows, &mut self.episodes)
    }

    /// The last recovered error message, if any
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Serializes the page to a standalone HTML document.
    pub fn to_html(&self) -> String {
        let notice = match &self.notice {
            Some(message) => format!(
                "<div id=\"notice\" class=\"alert alert-warning\">{}</div>",
                escape_html(message)
            ),
            None => "<div id=\"notice\" hidden></div>".to_string(),
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Show Scout</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
</head>
<body class="bg-dark text-light">
<main class="container">
  <h1>Show Scout</h1>
  <form id="searchForm" class="form-inline">
    <input id="searchForm-term" class="form-control" value="{term}">
  </form>
  {notice}
  <div class="row mt-3">
{shows}
  </div>
{episodes}
</main>
</body>
</html>
"#,
            term = escape_html(self.form.term()),
            notice = notice,
            shows = self.shows.to_html(),
            episodes = self.episodes.to_html(),
        )
    }

    /// Writes the page document to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<(), PageError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PageError::DirectoryCreationFailed {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(path, self.to_html()).map_err(|e| PageError::WriteFailed {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Default location of the published page
///
/// Uses the system's standard cache directory for the application.
pub fn default_output_path() -> Result<PathBuf, PageError> {
    let proj_dirs = directories::ProjectDirs::from("org", "showscout", "show_scout")
        .ok_or(PageError::OutputDirectoryNotFound)?;

    Ok(proj_dirs.cache_dir().join("index.html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page_hides_episodes() {
        let page = Page::new();
        assert!(page.shows().is_visible());
        assert!(!page.episodes().is_visible());
        assert!(page.shows().is_empty());
        assert_eq!(page.notice(), None);
    }

    #[test]
    fn test_container_html_reflects_visibility() {
        let mut container = Container::new("episodesArea", "ul");
        container.append(Fragment::new("<li>One</li>".to_string()));
        assert_eq!(
            container.to_html(),
            "<ul id=\"episodesArea\">\n<li>One</li>\n</ul>"
        );

        container.hide();
        assert!(container.to_html().starts_with("<ul id=\"episodesArea\" hidden>"));
    }

    #[test]
    fn test_fragment_lookup() {
        let mut container = Container::new("showsList", "div");
        container.append(Fragment::for_show(7, "<div></div>".to_string()));
        container.append(Fragment::new("<p></p>".to_string()));

        assert_eq!(container.fragment(0).and_then(Fragment::show_id), Some(7));
        assert_eq!(container.fragment(1).and_then(Fragment::show_id), None);
        assert!(container.fragment(2).is_none());
    }

    #[test]
    fn test_page_html_escapes_term_and_notice() {
        let mut page = Page::new();
        page.form_mut().set_term("\"><script>");
        page.set_notice("<b>oops</b>");

        let html = page.to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
        assert!(html.contains("&lt;b&gt;oops&lt;/b&gt;"));
    }

    #[test]
    fn test_write_to_creates_parent_directories() {
        let dir = std::env::temp_dir().join(format!("show_scout_page_test_{}", std::process::id()));
        let path = dir.join("nested").join("index.html");
        let _ = fs::remove_dir_all(&dir);

        Page::new().write_to(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));

        // Cleanup
        fs::remove_dir_all(&dir).ok();
    }
}
