// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use shutter::app::AppModel;
use shutter::i18n;

mod cli;

#[derive(Parser)]
#[command(name = "shutter")]
#[command(about = "Press-and-hold shutter control for the COSMIC desktop")]
#[command(version = env!("GIT_VERSION"))]
#[command(subcommand_required = false)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Press the shutter without a window and print the resulting intents
    Simulate {
        /// How long to hold the shutter, in milliseconds
        #[arg(long, default_value = "1500")]
        hold: u64,

        /// Maximum recording length in seconds (default: 15)
        #[arg(short, long)]
        max_seconds: Option<u32>,

        /// Disk diameter in logical pixels (default: 80)
        #[arg(short, long)]
        diameter: Option<f32>,
    },

    /// Print the default configuration as JSON
    Config,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=shutter=trace, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Simulate {
            hold,
            max_seconds,
            diameter,
        }) => Ok(cli::simulate(hold, max_seconds, diameter)?),
        Some(Commands::Config) => Ok(cli::print_default_config()?),
        None => run_gui(),
    }
}

fn run_gui() -> Result<(), Box<dyn std::error::Error>> {
    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(360.0)
            .min_height(420.0),
    );

    cosmic::app::run::<AppModel>(settings, ())?;

    Ok(())
}
