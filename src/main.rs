//! tf-docs CLI - Terraform documentation lookup.
//!
//! Standalone CLI for fetching rendered provider documentation.
//!
//! # Usage
//!
//! ```bash
//! # Rendered HTML for a resource
//! tf-docs aws_instance
//!
//! # Documentation URL only (no network access)
//! tf-docs aws_instance --format url
//!
//! # Resolve against a dependency lock file
//! tf-docs aws_instance --lock-file ./.terraform.lock.hcl
//!
//! # Local descriptions only
//! tf-docs aws_instance --offline
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tf_docs::{DocsConfig, DocsProvider, LockFile, ResourceKind, Workspace, LOCK_FILE_NAME};

#[derive(Parser)]
#[command(name = "tf-docs")]
#[command(about = "Terraform registry documentation lookup")]
#[command(version)]
struct Cli {
    /// Block identifier (e.g., aws_instance)
    identifier: String,

    /// What kind of block the identifier names
    #[arg(long, value_enum, default_value = "resource")]
    kind: KindArg,

    /// Attribute name appended as a #anchor to URLs
    #[arg(long)]
    parameter: Option<String>,

    /// Path to a dependency lock file (default: ./.terraform.lock.hcl if present)
    #[arg(long)]
    lock_file: Option<PathBuf>,

    /// Path to a configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Connect/read timeout in milliseconds (overrides configuration)
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value = "html")]
    format: OutputFormat,

    /// Skip remote fetching and use local descriptions only
    #[arg(long)]
    offline: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Resource,
    DataSource,
    Provider,
    Function,
}

impl From<KindArg> for ResourceKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Resource => ResourceKind::Resource,
            KindArg::DataSource => ResourceKind::DataSource,
            KindArg::Provider => ResourceKind::Provider,
            KindArg::Function => ResourceKind::Function,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Html,
    Url,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let mut config = if let Some(ref path) = cli.config {
        DocsConfig::load(path)?
    } else {
        let cwd = std::env::current_dir()?;
        DocsConfig::load_default(&cwd)
    };

    if cli.offline {
        config.remote.enabled = false;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.remote.timeout_ms = timeout_ms;
    }

    // Build the workspace snapshot
    let workspace = match &cli.lock_file {
        Some(path) => {
            let lock = LockFile::load(path)
                .map_err(|e| format!("Failed to load lock file: {}", e))?;
            if cli.verbose {
                eprintln!(
                    "Loaded lock file {} ({} providers)",
                    path.display(),
                    lock.providers.len()
                );
            }
            Workspace::with_lock(lock)
        }
        None => {
            let default_path = PathBuf::from(LOCK_FILE_NAME);
            if default_path.exists() {
                match LockFile::load(&default_path) {
                    Ok(lock) => {
                        if cli.verbose {
                            eprintln!("Using {} from the current directory", LOCK_FILE_NAME);
                        }
                        Workspace::with_lock(lock)
                    }
                    Err(_) => Workspace::empty(),
                }
            } else {
                Workspace::empty()
            }
        }
    };

    let kind = ResourceKind::from(cli.kind);
    let provider = DocsProvider::new(config)?;

    match cli.format {
        OutputFormat::Url => {
            match provider.web_url(&cli.identifier, kind, cli.parameter.as_deref(), &workspace) {
                Some(url) => println!("{}", url),
                None => {
                    if cli.verbose {
                        eprintln!("No documentation URL for {}", cli.identifier);
                    }
                    // Exit with success but no output
                }
            }
        }
        OutputFormat::Html => {
            let html = provider.documentation(&cli.identifier, kind, &workspace).await;
            println!("{}", html);
        }
    }

    Ok(())
}
