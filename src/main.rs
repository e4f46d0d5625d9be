mod app;
mod cli;

use anyhow::Context;
use clap::Parser;
use flashdeck::logging::{LogConfig, LogFormat, init_logging};
use flashdeck::{DataPaths, DeckManager, Storage};

use app::App;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let format = if cli.compact_logs {
        LogFormat::Compact
    } else {
        LogFormat::Pretty
    };
    if let Err(error) = init_logging(&LogConfig::from_verbosity(cli.verbose).with_format(format)) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    if let Err(error) = run(cli) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let storage = Storage::new(DataPaths::new(&cli.data_dir));
    storage
        .ensure_directories()
        .context("failed to prepare data directory")?;

    let mut manager = DeckManager::new(storage);
    manager.load_all_decks().context("failed to load decks")?;

    let mut app = App::new(manager);
    let stdout = std::io::stdout();
    app.run(cli.command, &mut stdout.lock())
}
