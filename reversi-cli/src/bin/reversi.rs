use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use reversi_cli::config::CliConfig;
use reversi_cli::render::Renderer;
use reversi_cli::session::Session;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reversi", about = "Play Reversi for two players in the terminal")]
struct Args {
    /// TOML configuration file
    #[arg(long, default_value = "reversi.toml")]
    config: PathBuf,

    /// Mark the cells where the active player may place
    #[arg(long, overrides_with = "no_hints")]
    hints: bool,

    /// Do not mark legal cells, even if the config file enables it
    #[arg(long)]
    no_hints: bool,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// `-v` flags take precedence over `RUST_LOG`.
fn verbosity_override(verbose: u8) -> Option<LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = verbosity_override(args.verbose) {
        logger.filter_level(level);
    }
    logger.init();

    if args.print_config {
        print!("{}", CliConfig::default_toml());
        return Ok(());
    }

    let mut config = CliConfig::load_or_default(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if args.hints {
        config.hints = true;
    } else if args.no_hints {
        config.hints = false;
    }
    info!("starting with {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(Renderer::new(&config), stdin.lock(), stdout.lock());
    session.run().context("terminal I/O failed")?;

    Ok(())
}
