use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use futures::StreamExt;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use podium::render::render_all;
use podium::{CockpitXpParser, Config, DirectorySink, FileSource, OutputFormat, Watcher};

#[derive(Parser)]
#[command(name = "podium", about = "Championship standings from timing exports")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the export once and render all pages
    Render(RunArgs),
    /// Re-render every time the export changes
    Watch(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Timing export to read
    input: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Championship name
    #[arg(long)]
    name: Option<String>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Poll interval in milliseconds
    #[arg(long)]
    interval: Option<u64>,
}

impl RunArgs {
    fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(input) = self.input {
            config.input = Some(input);
        }
        if let Some(name) = self.name {
            config.championship = name;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(interval) = self.interval {
            config.poll_interval_ms = interval;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Render(args) => render_once(args.into_config()?),
        Commands::Watch(args) => watch(args.into_config()?).await,
    }
}

fn parser(config: &Config) -> CockpitXpParser {
    CockpitXpParser::new(config.championship.clone(), Local::now().date_naive())
}

fn render_once(config: Config) -> Result<()> {
    let input = config.validate()?;
    let championship = parser(&config)
        .parse_file(input)
        .with_context(|| format!("failed to parse {}", input.display()))?;

    let mut sink = DirectorySink::new(&config.output_dir, config.format)?;
    render_all(&championship, &mut sink)?;
    info!(output = %config.output_dir.display(), "Done");
    Ok(())
}

async fn watch(config: Config) -> Result<()> {
    let input = config.validate()?.to_path_buf();
    let mut sink = DirectorySink::new(&config.output_dir, config.format)?;

    let source = FileSource::open(&input).await?;
    let channels = Watcher::spawn(source, parser(&config), config.poll_interval());
    let cancel = channels.cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl-C received, shutting down");
                cancel.cancel();
            }
            Err(e) => warn!(error = %e, "Unable to listen for Ctrl-C"),
        }
    });

    let mut updates = channels.updates();
    while let Some(championship) = updates.next().await {
        if let Err(e) = render_all(&championship, &mut sink) {
            warn!(error = %e, "Rendering failed");
        }
    }

    channels.handle.await.context("watch loop panicked")?;
    Ok(())
}
