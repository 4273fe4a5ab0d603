use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use drop_four::bot::BotPolicy;
use drop_four::config::{GameConfig, PlayerConfig};
use drop_four::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play four-in-a-row in the terminal.
#[derive(Parser)]
#[command(name = "drop_four", about = "A drop-piece four-in-a-row game")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Play solo against the automated opponent
    #[arg(long)]
    bot: bool,

    /// Bot column policy: uniform or nearby (implies --bot)
    #[arg(long)]
    bot_policy: Option<BotPolicy>,

    /// Player piece color as '#rrggbb'; repeat to define the player list
    #[arg(long = "color")]
    colors: Vec<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if cli.bot {
        config.bot.enabled = true;
    }
    if let Some(policy) = cli.bot_policy {
        config.bot.enabled = true;
        config.bot.policy = policy;
    }
    if !cli.colors.is_empty() {
        config.players = cli
            .colors
            .into_iter()
            .map(|color| PlayerConfig { color, label: None })
            .collect();
    }
    config.validate().context("invalid configuration")?;

    // Build the app before touching the terminal so configuration errors
    // print cleanly.
    let mut app = App::new(config)?;

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

    Ok(res?)
}
