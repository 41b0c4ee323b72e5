use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sprite_indexer::models::{AppConfig, Report};
use sprite_indexer::services::SpriteService;

#[derive(Parser)]
#[command(name = "sprite-indexer")]
#[command(about = "Validate 16-color battle spritesheets and write indexed sprites")]
struct Cli {
    /// Config file (YAML); falls back to CONFIG_FILE
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a 256x64 spritesheet and write sprites and palettes
    Sheet {
        /// Spritesheet PNG (normal front, shiny front, normal back, shiny back)
        #[arg(short, long)]
        input: PathBuf,

        /// Directory for the written files
        #[arg(short, long)]
        out_dir: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check that an icon only uses colors of a reference sprite
    Icon {
        /// Icon PNG
        #[arg(long)]
        icon: PathBuf,

        /// Reference PNG, usually a previously written front sprite
        #[arg(long)]
        reference: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        run_status_command(cli.config.as_deref());
        return ExitCode::SUCCESS;
    };

    init_logging();

    match run(command, cli.config.as_deref()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Minimal logging for CLI
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sprite_indexer=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

fn run(command: Commands, config_path: Option<&Path>) -> anyhow::Result<ExitCode> {
    let config = AppConfig::load(AppConfig::locate(config_path).as_deref());
    let service = SpriteService::new(config);

    let (report, json) = match command {
        Commands::Sheet {
            input,
            out_dir,
            json,
        } => (service.process_sheet(&input, &out_dir)?, json),
        Commands::Icon {
            icon,
            reference,
            json,
        } => (service.check_icon_file(&icon, &reference)?, json),
    };

    print_report(&report, json)?;
    Ok(ExitCode::from(report.exit_code()))
}

fn print_report(report: &Report, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }
    Ok(())
}

/// Show configuration sources and available commands
fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_env = std::env::var("CONFIG_FILE").ok();
    let located = AppConfig::locate(config_path);

    println!("Sprite Indexer v{VERSION}");
    println!("Validates 16-color battle spritesheets\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_env.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG    = {}",
        std::env::var("RUST_LOG")
            .ok()
            .as_deref()
            .unwrap_or("sprite_indexer=warn (default)")
    );

    let config_source = match &located {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("defaults ({} not found)", path.display()),
        None => "defaults".to_string(),
    };
    let config = AppConfig::load(located.as_deref());

    println!("\nConfiguration:");
    println!("  Source:         {config_source}");
    println!("  Front sprite:   {}", config.outputs.front);
    println!("  Back sprite:    {}", config.outputs.back);
    println!("  Normal palette: {}", config.outputs.normal_palette);
    println!("  Shiny palette:  {}", config.outputs.shiny_palette);
    println!(
        "  Diff:           {} / {}",
        config.outputs.diff,
        config.outputs.scaled_diff(config.diff_scale)
    );

    println!("\nCommands:");
    println!("  sprite-indexer sheet   Validate a spritesheet and write indexed sprites");
    println!("  sprite-indexer icon    Check an icon against a sprite palette");
    println!("\nRun 'sprite-indexer --help' for more details.");
}
