use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use stepdeck::authoring::load_deck;
use stepdeck::config::Config;
use stepdeck::inspect::{outline, step_report};
use stepdeck::logging::init_tracing;
use stepdeck::ui::{self, App};

/// Step through a deck in the terminal.
#[derive(Debug, Parser)]
#[command(name = "stepdeck", version, about)]
struct Cli {
    /// Deck file (TOML).
    deck: PathBuf,

    /// Global step to start at.
    #[arg(long, default_value_t = 0)]
    step: usize,

    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the deck tree with step lengths and exit.
    #[arg(long, conflicts_with = "dump")]
    outline: bool,

    /// Print the leaves visible at `--step` and exit.
    #[arg(long)]
    dump: bool,

    /// Print the dump as JSON.
    #[arg(long, requires = "dump")]
    json: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "stepdeck failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load config")?;

    let deck = load_deck(&cli.deck).context("failed to load deck")?;

    if cli.outline {
        println!("{} ({} steps)", deck.title(), deck.length());
        for line in outline(deck.root()) {
            println!("{line}");
        }
        return Ok(());
    }

    if cli.dump {
        let report = step_report(&deck, cli.step);
        if cli.json {
            let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
            println!("{json}");
        } else {
            print!("{report}");
        }
        return Ok(());
    }

    let app = App::new(deck, config.presenter).starting_at(cli.step);
    ui::run(app).context("presenter failed")?;
    Ok(())
}
