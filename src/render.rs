//! View rendering module
//!
//! This module turns normalized catalog records into markup fragments and
//! writes them into the page containers handed over in a `RenderContext`.
//! All text coming from the catalog is treated as untrusted: names and
//! labels are escaped, summaries are reduced to plain text first.

use crate::catalog::{Episode, Show};
use crate::page::{Container, Fragment};

/// Mutable access to the containers a render call writes into
pub struct RenderContext<'a> {
    shows: &'a mut Container,
    episodes: &'a mut Container,
}

impl<'a> RenderContext<'a> {
    pub fn new(shows: &'a mut Container, episodes: &'a mut Container) -> Self {
        Self { shows, episodes }
    }
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Reduces a catalog summary to escaped plain text.
fn sanitize_summary(summary: &str) -> String {
    escape_html(nanohtml2text::html2text(summary).trim())
}

/// Plain-text line describing an episode
///
/// Reads `"<name> (season <season>, episode <number>)"`.
pub fn episode_label(episode: &Episode) -> String {
    format!(
        "{} (season {}, episode {})",
        episode.name, episode.season, episode.number
    )
}

/// Builds the fragment for a single show, tagged with its id.
fn show_fragment(show: &Show) -> Fragment {
    let name = escape_html(&show.name);
    let markup = format!(
        r#"<div data-show-id="{id}" class="Show col-md-12 col-lg-6 mb-4">
  <div class="media">
    <img src="{image}" alt="{name}" class="w-25 me-3">
    <div class="media-body">
      <h5 class="text-primary">{name}</h5>
      <div><small>{summary}</small></div>
      <button class="btn btn-outline-light btn-sm Show-getEpisodes" data-show-id="{id}">Episodes</button>
    </div>
  </div>
</div>"#,
        id = show.id,
        image = escape_html(&show.image),
        name = name,
        summary = sanitize_summary(&show.summary),
    );

    Fragment::for_show(show.id, markup)
}

/// Replaces the show list with one fragment per show, in input order.
pub fn render_show_list(ctx: &mut RenderContext<'_>, shows: &[Show]) {
    ctx.shows.clear();

    for show in shows {
        ctx.shows.append(show_fragment(show));
    }
}

/// Replaces the episode list with one item per episode and reveals it.
pub fn render_episode_list(ctx: &mut RenderContext<'_>, episodes: &[Episode]) {
    ctx.episodes.clear();

    for episode in episodes {
        ctx.episodes.append(Fragment::new(format!(
            "<li>{}</li>",
            escape_html(&episode_label(episode))
        )));
    }

    ctx.episodes.show();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Label;
    use crate::config::PLACEHOLDER_IMAGE;
    use crate::page::Page;

    fn batman_results() -> Vec<Show> {
        vec![
            Show {
                id: 1,
                name: "Batman".to_string(),
                summary: "<p>The <b>Caped</b> Crusader.</p>".to_string(),
                image: PLACEHOLDER_IMAGE.to_string(),
            },
            Show {
                id: 2,
                name: "Batman Beyond".to_string(),
                summary: "<p>Future Gotham.</p>".to_string(),
                image: "https://img/2.jpg".to_string(),
            },
        ]
    }

    fn pilot() -> Episode {
        Episode {
            id: 10,
            name: "Pilot".to_string(),
            season: Label::Number(1),
            number: Label::Number(1),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_episode_label() {
        assert_eq!(episode_label(&pilot()), "Pilot (season 1, episode 1)");

        let special = Episode {
            number: Label::Missing,
            ..pilot()
        };
        assert_eq!(episode_label(&special), "Pilot (season 1, episode special)");
    }

    #[test]
    fn test_render_show_list_preserves_order_and_ids() {
        let mut page = Page::new();
        render_show_list(&mut page.render_context(), &batman_results());

        let fragments = page.shows().fragments();
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].show_id(), Some(1));
        assert_eq!(fragments[1].show_id(), Some(2));

        let first = fragments[0].markup();
        assert!(first.contains(&format!("src=\"{}\"", PLACEHOLDER_IMAGE)));
        assert!(first.contains("alt=\"Batman\""));
        assert!(first.contains("<h5 class=\"text-primary\">Batman</h5>"));
        assert!(first.contains("Caped"));
        assert!(!first.contains("<b>"));
        assert!(first.contains("data-show-id=\"1\""));
        assert!(first.contains("Show-getEpisodes"));

        assert!(fragments[1].markup().contains("src=\"https://img/2.jpg\""));
    }

    #[test]
    fn test_render_show_list_replaces_previous_contents() {
        let mut page = Page::new();
        render_show_list(&mut page.render_context(), &batman_results());
        render_show_list(&mut page.render_context(), &batman_results()[1..]);

        assert_eq!(page.shows().len(), 1);
        assert_eq!(page.shows().fragments()[0].show_id(), Some(2));
    }

    #[test]
    fn test_render_show_list_empty() {
        let mut page = Page::new();
        render_show_list(&mut page.render_context(), &batman_results());
        render_show_list(&mut page.render_context(), &[]);

        assert!(page.shows().is_empty());
    }

    #[test]
    fn test_render_show_list_escapes_remote_text() {
        let hostile = Show {
            id: 3,
            name: "<script>alert(1)</script>".to_string(),
            summary: "<p>Fine</p><img src=x onerror=alert(1)>".to_string(),
            image: "\" onload=\"alert(1)".to_string(),
        };

        let mut page = Page::new();
        render_show_list(&mut page.render_context(), &[hostile]);

        let markup = page.shows().fragments()[0].markup();
        assert!(!markup.contains("<script>"));
        assert!(!markup.contains("<img src=x"));
        assert!(!markup.contains("\" onload=\""));
        assert!(markup.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_episode_list_reveals_container() {
        let mut page = Page::new();
        assert!(!page.episodes().is_visible());

        render_episode_list(&mut page.render_context(), &[pilot()]);

        assert!(page.episodes().is_visible());
        assert_eq!(page.episodes().len(), 1);
        assert_eq!(
            page.episodes().fragments()[0].markup(),
            "<li>Pilot (season 1, episode 1)</li>"
        );
    }

    #[test]
    fn test_render_episode_list_idempotent() {
        let episodes = vec![
            pilot(),
            Episode {
                id: 11,
                name: "Second".to_string(),
                season: Label::Number(1),
                number: Label::Number(2),
            },
        ];

        let mut page = Page::new();
        render_episode_list(&mut page.render_context(), &episodes);
        let once = page.clone();
        render_episode_list(&mut page.render_context(), &episodes);

        assert_eq!(page, once);
    }
}
