//! Binary entrypoint for the GridHunt CLI.
//!
//! Commands:
//! - `play [--grid-size <n>] [--seed <n>]` - start an interactive game session
//! - `init` - create a starter `config.toml`
//!
//! See the library crate docs for module-level details: `gridhunt::`.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::path::Path;

use gridhunt::config::Config;
use gridhunt::console;

#[derive(Parser)]
#[command(name = "gridhunt")]
#[command(about = "A turn-based treasure-hunt adventure for the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive game session
    Play {
        /// Board side length (overrides the config file)
        #[arg(short, long)]
        grid_size: Option<i32>,

        /// Fix the board layout for a reproducible session
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Initialize a new configuration file
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config early to configure logging (except for Init which writes it)
    let pre_config = match cli.command {
        Commands::Init => None,
        _ => Config::load(&cli.config).await.ok(),
    };
    init_logging(&pre_config, cli.verbose);

    match cli.command {
        Commands::Play { grid_size, seed } => {
            let mut config = match pre_config {
                Some(config) => config,
                // Playable out of the box: a missing file means defaults, but a
                // present-and-broken file must surface its parse error.
                None if !Path::new(&cli.config).exists() => Config::default(),
                None => Config::load(&cli.config).await?,
            };
            if let Some(size) = grid_size {
                config.game.grid_size = size;
                // A CLI override can shrink the board under the treasure list.
                config.validate()?;
            }
            info!("Starting GridHunt v{}", env!("CARGO_PKG_VERSION"));
            console::run(&config.game, seed).await?;
        }
        Commands::Init => {
            info!("Initializing new configuration");
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
            println!("Wrote {}. Edit it, then run: gridhunt play", cli.config);
        }
    }

    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // Base level from CLI verbosity overrides config
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .and_then(|c| c.logging.level.parse().ok())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    let log_file = config.as_ref().and_then(|c| c.logging.file.clone());
    match log_file
        .and_then(|file| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
                .ok()
        }) {
        Some(f) => {
            let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
            // Logs also land on stderr when it is a terminal; when redirected,
            // the file alone gets them to avoid duplicates.
            let is_tty = atty::is(atty::Stream::Stderr);
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        }
        None => {
            builder.format(|fmt, record| {
                writeln!(
                    fmt,
                    "{} [{}] {}",
                    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                    record.level(),
                    record.args()
                )
            });
        }
    }
    let _ = builder.try_init();
}
