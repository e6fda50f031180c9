mod loader;
mod page;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use verdict_core::{ReportConfig, TreeCompiler};

#[derive(Parser)]
#[command(name = "verdict")]
#[command(about = "Render nested test execution records as HTML reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a test file (JSON or YAML) into an HTML report
    Render {
        /// Test file to render
        input: PathBuf,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Config file to use instead of the default locations
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Report title
        #[arg(short, long)]
        title: Option<String>,
    },
    /// Print the default configuration as TOML
    Config,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            config,
            title,
        } => render(&input, output.as_deref(), config.as_deref(), title),
        Commands::Config => {
            print!("{}", ReportConfig::default_config_string());
            Ok(())
        }
    }
}

fn render(
    input: &Path,
    output: Option<&Path>,
    config_path: Option<&Path>,
    title: Option<String>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => ReportConfig::from_file(path)
            .wrap_err_with(|| format!("Failed to load config {}", path.display()))?,
        None => ReportConfig::load().wrap_err("Failed to load config")?,
    };

    let tests = loader::load_tests(input)?;
    let compiler = TreeCompiler::from_config(&config)?;
    let fragments = compiler
        .compile_all(&tests)
        .wrap_err_with(|| format!("Failed to compile {}", input.display()))?;

    let title = title.unwrap_or_else(|| config.report.title.clone());
    let html = page::render_page(&title, &fragments);

    match output {
        Some(path) => {
            std::fs::write(path, html)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            info!(tests = fragments.len(), output = %path.display(), "Report written");
        }
        None => print!("{html}"),
    }

    Ok(())
}
