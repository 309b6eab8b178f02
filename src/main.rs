use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use four_in_a_row::config::AppConfig;
use four_in_a_row::game::{Controller, GameMode};
use four_in_a_row::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play four in a row in the terminal.
#[derive(Parser)]
#[command(name = "four-in-a-row", about = "Four in a row against a friend or the computer")]
struct Cli {
    /// Number of board rows (4-8)
    #[arg(long)]
    rows: Option<usize>,

    /// Number of board columns (4-8)
    #[arg(long)]
    columns: Option<usize>,

    /// Game mode: SinglePlayer or Multiplayer
    #[arg(long)]
    mode: Option<GameMode>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "four-in-a-row.toml")]
    config: PathBuf,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // The TUI owns stdout, so logs only go to a file when asked for
    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.board.columns = columns;
    }
    if let Some(mode) = cli.mode {
        config.game.mode = mode;
    }
    config.validate().context("invalid settings")?;

    let controller = Controller::new(config.board.rows, config.board.columns, config.game.mode)?
        .with_agent(Box::new(config.ai.build_agent()))
        .with_names(
            config.game.player_one.clone(),
            config.game.player_two_name().to_string(),
        );

    run(App::new(controller))?;
    Ok(())
}

fn run(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
