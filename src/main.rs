use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture,
};
use ratatui::crossterm::execute;

use typeahead::app::App;
use typeahead::catalog::{Catalog, Suggestion, load_catalog_from_path, sample_catalog};
use typeahead::config::{TypeaheadConfig, load_config, load_config_from_path};
use typeahead::matcher::SuggestionMatcher;

/// Search typeahead over a catalog of suggestions
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Catalog JSON file with `suggestions` and `categories` (built-in book list if omitted)
    catalog: Option<PathBuf>,

    /// Maximum number of suggestions in the dropdown (overrides the config file)
    #[arg(long, value_name = "N")]
    max_results: Option<NonZeroUsize>,

    /// Config file to use instead of ~/.config/typeahead/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the matches for this query and exit without starting the UI
    #[arg(long, value_name = "TEXT")]
    query: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logging();

    let config_result = match &args.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    let config = match args.max_results {
        Some(max_results) => TypeaheadConfig::with_max_results(max_results),
        None => config_result.config.typeahead,
    };

    let catalog = match &args.catalog {
        Some(path) => load_catalog_from_path(path)
            .wrap_err_with(|| format!("failed to load catalog {}", path.display()))?,
        None => sample_catalog(),
    };

    if let Some(query) = &args.query {
        return print_matches(&catalog, query, config, args.json);
    }

    let app = App::new(catalog, config, config_result.warning);
    if let Some(selection) = run_tui(app)? {
        print_suggestion(&selection, args.json)?;
    }

    Ok(())
}

/// Run the interactive UI and return the chosen suggestion
fn run_tui(mut app: App) -> Result<Option<Suggestion>> {
    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    execute!(
        io::stdout(),
        EnableMouseCapture,
        EnableBracketedPaste,
        EnableFocusChange
    )?;

    let result = run(&mut terminal, &mut app);

    let _ = execute!(
        io::stdout(),
        DisableMouseCapture,
        DisableBracketedPaste,
        DisableFocusChange
    );
    ratatui::restore();

    result?;
    Ok(app.into_selection())
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

fn print_matches(
    catalog: &Catalog,
    query: &str,
    config: TypeaheadConfig,
    json: bool,
) -> Result<()> {
    let matches = SuggestionMatcher::filter(&catalog.suggestions, query, config.max_results.get());

    let mut stdout = io::stdout().lock();
    if json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&matches)?)?;
    } else {
        for suggestion in matches {
            writeln!(stdout, "{}", suggestion.title)?;
        }
    }
    Ok(())
}

fn print_suggestion(suggestion: &Suggestion, json: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if json {
        writeln!(stdout, "{}", serde_json::to_string(suggestion)?)?;
    } else {
        writeln!(stdout, "{}", suggestion.title)?;
    }
    Ok(())
}

/// Debug builds log to a file in the temp dir; stderr belongs to the terminal UI
#[cfg(debug_assertions)]
fn init_logging() {
    let path = std::env::temp_dir().join("typeahead.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .try_init();
}
