use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use kalah::config::{AppConfig, GameSettings, Interface};
use kalah::game::Player;
use kalah::play::TextSession;
use kalah::ui::App;

/// Play Kalah (Mancala) for two players at one terminal.
#[derive(Parser)]
#[command(name = "kalah", about = "Play Kalah (Mancala) in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "kalah.toml")]
    config: PathBuf,

    /// Override stones per pocket
    #[arg(long)]
    stones: Option<u32>,

    /// Override pockets per side
    #[arg(long)]
    pockets: Option<usize>,

    /// Player to move first: 1 or 2
    #[arg(long)]
    first: Option<u8>,

    /// Use the full-screen terminal UI instead of the text prompt
    #[arg(long)]
    tui: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(stones) = cli.stones {
        app_config.game.stones_per_pocket = stones;
    }
    if let Some(pockets) = cli.pockets {
        app_config.game.pockets_per_side = pockets;
    }
    if let Some(first) = cli.first {
        app_config.game.first_player = Player::from_number(first);
    }
    if cli.tui {
        app_config.display.interface = Interface::Tui;
    }
    app_config.validate().context("invalid game settings")?;

    tracing::info!(?app_config, "starting game");

    match app_config.display.interface {
        Interface::Text => run_text(&app_config.game),
        Interface::Tui => run_tui(app_config.game),
    }
}

fn run_text(settings: &GameSettings) -> Result<()> {
    let game = settings.build()?;
    let stdin = io::stdin();
    let mut session = TextSession::new(game, stdin.lock(), io::stdout());
    session.run().context("text session failed")?;
    Ok(())
}

fn run_tui(settings: GameSettings) -> Result<()> {
    let mut app = App::new(settings)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal UI failed")
}
