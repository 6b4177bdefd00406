use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use smartspend_widgets::{
    InteractiveRegion, Variant, WidgetSnapshotRenderer, config::AppConfig,
    constants::DEFAULT_PREVIEW_WIDTH, input::RenderInput, tui,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// SmartSpend widgets - render home-screen widget snapshots
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved display fields of a snapshot
    Render {
        #[command(flatten)]
        input: RenderInput,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Draw the widget in the terminal
    Preview {
        #[command(flatten)]
        input: RenderInput,

        /// Widget width in columns
        #[arg(short, long, default_value_t = DEFAULT_PREVIEW_WIDTH)]
        width: u16,
    },
    /// List the tappable regions and their deep links
    Links,
    /// Show or change the stored defaults
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Store new defaults
    Set {
        /// Default widget layout
        #[arg(long, value_enum)]
        variant: Option<Variant>,

        /// Default snapshot file
        #[arg(short, long)]
        snapshot: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::load(cli.config.as_deref());
    let renderer = WidgetSnapshotRenderer::new();

    match cli.command {
        Commands::Render { input, format } => {
            let (snapshot, variant) = input.resolve(&config, io::stdin().lock())?;
            let fields = renderer.render(&snapshot, variant);
            match format {
                OutputFormat::Text => print!("{fields}"),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&fields)?),
            }
        }
        Commands::Preview { input, width } => {
            let (snapshot, variant) = input.resolve(&config, io::stdin().lock())?;
            let fields = renderer.render(&snapshot, variant);
            tui::draw_preview(&fields, width)?;
        }
        Commands::Links => {
            for region in InteractiveRegion::ALL {
                let target = region.target();
                println!(
                    "{:<12} {} (request code {})",
                    region.as_str(),
                    target,
                    target.request_code()
                );
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => println!("{}", serde_json::to_string_pretty(&config)?),
            ConfigAction::Set { variant, snapshot } => {
                let path = AppConfig::resolve_path(cli.config.as_deref())?;
                config.updated(variant, snapshot).save(&path)?;
                println!("Saved {}", path.display());
            }
        },
    }
    Ok(())
}

/// Logs go to stderr so `render --format json` stays pipeable.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
