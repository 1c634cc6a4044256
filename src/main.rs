//! # PS1 Studio CLI Entry Point
//!
//! This is the main entry point for the PS1 Studio TUI application.
//!
//! ## Overview
//!
//! PS1 Studio lets you assemble a bash prompt from reusable segments
//! (username, host, path, git branch, separators), style each one, watch an
//! animated preview and copy the resulting `PS1="..."` line.
//!
//! ## Usage
//!
//! ```bash
//! # Start with the default user@host dir $ prompt
//! ps1-studio
//!
//! # Start from your own segment list
//! ps1-studio --segments user,colon,path-full,space,git,space,char-arrow
//!
//! # Print the PS1 line for a segment list and exit
//! ps1-studio --segments user,at-symbol,host-short --print
//!
//! # List every available segment and exit
//! ps1-studio --list
//! ```
//!
//! ## Key Bindings
//!
//! ### Segments (left panel)
//! - `j` / `Down`, `k` / `Up` - Move the cursor
//! - `Enter` / `a` - Add the highlighted segment to the prompt
//!
//! ### Your prompt (right panel)
//! - `j` / `k` - Select an entry
//! - `J` / `K` - Move the entry down / up
//! - `b` `d` `i` `u` - Toggle bold / dim / italic / underline
//! - `0`-`7` - Pick a preset color (`0` clears)
//! - `c` - Enter a custom `#rrggbb` color
//! - `x` / `Del` - Remove the entry
//!
//! ### Anywhere
//! - `Tab` - Switch panel
//! - `y` - Copy the `PS1="..."` line to the clipboard
//! - `t` - Next theme
//! - `?` - Help
//! - `q` - Quit

use ps1_studio::debug;
use ps1_studio::prompt::{self, export_line, generate, Selection};
use ps1_studio::ui::{self, config::Config, theme::Theme, App};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::Duration;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read terminal event")?))
        } else {
            Ok(None)
        }
    }
}

/// PS1 Studio - compose, style and preview bash prompts
#[derive(Parser, Debug)]
#[command(name = "ps1-studio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compose, style and preview bash PS1 prompts", long_about = None)]
struct Args {
    /// Comma-separated segment ids to start from (see --list)
    #[arg(short, long, value_name = "IDS", value_delimiter = ',')]
    segments: Option<Vec<String>>,

    /// Print the PS1 line for the starting composition and exit
    #[arg(long)]
    print: bool,

    /// List available segments and exit
    #[arg(long, conflicts_with = "print")]
    list: bool,

    /// Theme to start with, overriding the config file (`t` still cycles and saves)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Path to a config file instead of the default location
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level for the debug log file (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    debug::init(debug::resolve_level(args.log_level.as_deref()))?;

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

fn initial_selection(args: &Args) -> Selection {
    match &args.segments {
        Some(ids) => {
            for id in ids {
                if prompt::catalog::find(id).is_none() {
                    log::warn!("Ignoring unknown segment id: {id}");
                }
            }
            Selection::from_ids(ids)
        }
        None => Selection::seeded(),
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    if let Some(name) = &args.theme {
        let Some(theme) = Theme::by_name(name) else {
            let names: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
            bail!("Unknown theme: {name} (available: {})", names.join(", "));
        };
        config.theme = theme.name.to_string();
    }
    Ok(config)
}

fn print_catalog() {
    for group in prompt::palette_groups() {
        println!("{}:", group.category);
        for definition in group.entries {
            println!(
                "  {:<18} {:<16} {}",
                definition.id,
                definition.label,
                definition.code.escape_debug()
            );
        }
        println!();
    }
}

async fn run_application(args: Args) -> Result<()> {
    if args.list {
        print_catalog();
        return Ok(());
    }

    let selection = initial_selection(&args);

    if args.print {
        println!("{}", export_line(&generate(selection.segments())));
        return Ok(());
    }

    let config = load_config(&args)?;
    let mut app = App::new(selection, config);
    app.config_path = args.config.clone();

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut event_reader = CrosstermEventReader;
    let result = run_app(&mut terminal, &mut app, &mut event_reader).await;

    cleanup_terminal(&mut terminal)?;

    result
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        // Redraw quickly while the preview is typing or the copy button is lit
        let poll_timeout = if app.animator.is_animating() || app.copy_active() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        let Some(event) = event_reader.read_event(poll_timeout)? else {
            continue;
        };

        match event {
            Event::Key(key) => app.handle_key(key, &mut io::stdout()),
            Event::Mouse(mouse) => {
                let size = terminal.size().context("Failed to read terminal size")?;
                let area = Rect::new(0, 0, size.width, size.height);
                app.handle_mouse(mouse, area, &mut io::stdout());
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
