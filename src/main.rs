use clap::Parser;
use dialoguer::{Input, Select};
use env_logger::Env;
use log::{info, warn};
use show_scout::{
    CatalogConfig, ClickEvent, Controller, DEFAULT_BASE_URL, PLACEHOLDER_IMAGE, ScreenMode,
    ShowScoutError, SubmitEvent, TvMazeCatalog, default_output_path, episode_label,
};
use std::path::{Path, PathBuf};
use std::process;
use thiserror::Error;

/// Search TV shows and browse their episodes
#[derive(Parser, Debug)]
#[command(name = "show_scout", version, about)]
struct Args {
    /// Search term to submit right away
    term: Option<String>,

    /// Base URL of the catalog API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Image used for shows without artwork
    #[arg(long, default_value = PLACEHOLDER_IMAGE)]
    placeholder_image: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Where to write the rendered page (defaults to the user cache directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Open the rendered page in the default browser
    #[arg(long)]
    open: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    ShowScout(#[from] ShowScoutError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl From<show_scout::CatalogError> for CliError {
    fn from(e: show_scout::CatalogError) -> Self {
        CliError::ShowScout(e.into())
    }
}

impl From<show_scout::PageError> for CliError {
    fn from(e: show_scout::PageError) -> Self {
        CliError::ShowScout(e.into())
    }
}

/// What the user picked below the show list
enum Choice {
    Episodes(usize),
    NewSearch,
    Quit,
}

/// Writes the page and echoes the current screen to the terminal.
fn publish(controller: &Controller<TvMazeCatalog>, output: &Path) -> Result<(), CliError> {
    controller.page().write_to(output)?;
    info!("page written to {}", output.display());

    if let Some(notice) = controller.page().notice() {
        eprintln!("\n! {}", notice);
        return Ok(());
    }

    match controller.mode() {
        ScreenMode::ShowList => {
            println!("\n=== Shows ===");
            if controller.shows().is_empty() {
                println!("No shows found.");
            }
            for show in controller.shows() {
                println!("  {} (#{})", show.name, show.id);
            }
        }
        ScreenMode::EpisodeList => {
            println!("\n=== Episodes ===");
            for episode in controller.episodes() {
                println!("  {}", episode_label(episode));
            }
        }
    }

    Ok(())
}

fn pick(controller: &Controller<TvMazeCatalog>) -> Result<Choice, CliError> {
    let shows = controller.shows();
    let mut items: Vec<String> = shows
        .iter()
        .map(|show| format!("Episodes of {}", show.name))
        .collect();
    items.push("New search".to_string());
    items.push("Quit".to_string());

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(match selection {
        i if i < shows.len() => Choice::Episodes(i),
        i if i == shows.len() => Choice::NewSearch,
        _ => Choice::Quit,
    })
}

fn run(args: Args) -> Result<(), CliError> {
    let output = match args.output {
        Some(path) => path,
        None => default_output_path()?,
    };

    let config = CatalogConfig {
        base_url: args.base_url,
        placeholder_image: args.placeholder_image,
        timeout_secs: args.timeout,
    };
    let catalog = if config == CatalogConfig::default() {
        TvMazeCatalog::new()?
    } else {
        TvMazeCatalog::with_config(config)?
    };
    let mut controller = Controller::new(catalog);

    controller.page().write_to(&output)?;
    println!("Rendering to {}", output.display());

    if args.open
        && let Err(e) = webbrowser::open(&output.to_string_lossy())
    {
        warn!("could not open browser: {}", e);
    }

    let mut pending_term = args.term;

    loop {
        let term = match pending_term.take() {
            Some(term) => term,
            None => Input::<String>::new()
                .with_prompt("Search shows")
                .interact_text()?,
        };

        controller.page_mut().form_mut().set_term(term);
        controller.on_search_submit(&mut SubmitEvent::new());
        publish(&controller, &output)?;

        loop {
            match pick(&controller)? {
                Choice::Episodes(index) => {
                    controller.on_episodes_click(&mut ClickEvent::on_trigger(index));
                    publish(&controller, &output)?;
                }
                Choice::NewSearch => break,
                Choice::Quit => return Ok(()),
            }
        }
    }
}

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("\nError: {}", e);
        process::exit(1);
    }
}
