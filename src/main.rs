use anyhow::Context;
use clap::{Parser, Subcommand};
use senior_connect::app::ports::TableSource;
use senior_connect::config::SiteConfig;
use senior_connect::infra::{ReqwestTableSource, StaticTableSource};
use senior_connect::logging;
use senior_connect::pipeline::DatasetPipeline;
use senior_connect::server::start_server;
use senior_connect::static_site::{build_site, BuildOptions};
use senior_connect::web::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "senior_connect")]
#[command(about = "Community stories and talk-to-a-senior introductions")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Read the sheet from a local CSV export instead of fetching it
    #[arg(long, global = true)]
    csv_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the site, fetching the sheet on every request
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// Pre-render the site into a static output directory
    Build {
        #[arg(long)]
        output_dir: Option<PathBuf>,
        #[arg(long)]
        template_dir: Option<PathBuf>,
        #[arg(long)]
        static_dir: Option<PathBuf>,
        /// Embed a random sample of seniors instead of the full list
        #[arg(long)]
        presample: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let _log_guard = logging::init_logging();

    let cli = Cli::parse();
    let mut config = SiteConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    let source: Arc<dyn TableSource> = match &cli.csv_file {
        Some(path) => {
            info!(path = %path.display(), "reading sheet from local file");
            Arc::new(StaticTableSource::from_file(path).context("failed to read CSV file")?)
        }
        None => Arc::new(ReqwestTableSource::new(Duration::from_secs(config.sheet.fetch_timeout_seconds))?),
    };
    let pipeline = DatasetPipeline::new(source, &config);

    match cli.command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            let state = AppState::new(pipeline, &config);
            start_server(state, &config).await?;
        }
        Commands::Build { output_dir, template_dir, static_dir, presample } => {
            let options = BuildOptions {
                template_dir: template_dir.unwrap_or_else(|| config.build.template_dir.clone()),
                static_dir: static_dir.unwrap_or_else(|| config.build.static_dir.clone()),
                output_dir: output_dir.unwrap_or_else(|| config.build.output_dir.clone()),
                sign_up_link: config.links.sign_up_form_url.clone(),
                mail_subject: config.mail.subject.clone(),
                sample_size: config.mail.sample_size,
                presample,
            };

            match build_site(&pipeline, &options).await {
                Ok(report) => {
                    println!("Static site generation complete.");
                    println!("   Pages written: {}", report.pages_written.len());
                    for skipped in &report.pages_skipped {
                        println!("   Skipped: {}", skipped);
                    }
                    println!("   Static files copied: {}", report.assets_copied);
                    println!("   Output directory: {}", options.output_dir.display());
                }
                Err(e) => {
                    error!(error = %e, "static build failed");
                    return Err(e.into());
                }
            }
        }
    }
    Ok(())
}
