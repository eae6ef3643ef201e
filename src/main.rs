use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{ConfigBuilder, WriteLogger};

use connect_four::config::{AppConfig, Frontend, UiConfig};
use connect_four::console::Console;
use connect_four::ui::App;

/// Play two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Front-end to play with (overrides the config file)
    #[arg(long, value_enum)]
    frontend: Option<Frontend>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Write the log here instead of the configured file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(frontend) = cli.frontend {
        app_config.ui.frontend = frontend;
    }
    if let Some(log_file) = cli.log_file {
        app_config.logging.file = log_file;
    }

    // Both front-ends own the terminal, so the log goes to a file
    let level = app_config.logging.level_filter()?;
    if let Some(log_file) = app_config.logging.open_log_file()? {
        let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
        let _ = WriteLogger::init(level, log_config, log_file);
    }
    log::info!("starting with frontend {:?}", app_config.ui.frontend);

    match app_config.ui.frontend {
        Frontend::Console => {
            let mut console = Console::new(io::stdin().lock(), io::stdout());
            console.run().context("console game failed")?;
        }
        Frontend::Tui => run_tui(&app_config.ui).context("terminal UI failed")?,
    }
    Ok(())
}

fn run_tui(config: &UiConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
