use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use portfolio_api::{start_web_server, Catalog, EnvironmentConfig};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "portfolio-api")]
#[command(about = "Serve portfolio content over a REST API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Validate the portfolio content and configuration, then exit
    Check,
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let json_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true) // Clear file on startup
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(Mutex::new(file))
                    .with_current_span(false)
                    .with_span_list(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(json_layer)
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portfolio_api=info,rocket::server=off")),
        )
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = EnvironmentConfig::load_from(&cli.config)?;
    init_logging(config.log_file.as_deref())?;

    info!("Environment: {}", EnvironmentConfig::get_environment());

    let catalog = Catalog::load().context("Portfolio content failed validation")?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => start_web_server(config, catalog).await,
        Command::Check => {
            let cv = catalog.cv();
            println!("✓ Portfolio content is valid");
            println!("  Profile: {}", catalog.profile().name);
            println!("  Blog posts: {}", catalog.blog_posts().len());
            println!(
                "  CV: {} education, {} experience, {} certificates, {} badges",
                cv.education.len(),
                cv.experience.len(),
                cv.certificates.len(),
                cv.badges.len()
            );
            println!(
                "  CV PDF: {} ({})",
                config.cv_pdf_path.display(),
                if config.cv_pdf_path.exists() {
                    "present"
                } else {
                    "missing"
                }
            );
            Ok(())
        }
    }
}
