mod generator;
mod props;
mod views;
mod watch;

use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
    sync::Mutex,
};

use abysslab_core::{
    check::check_dataset, config::LOCAL_CONFIG_FILE, scaffold, Dataset, EntityKind, FileStore,
    SiteConfig,
};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::generator::SiteGenerator;

#[derive(Debug, Parser)]
#[command(name = "abysslab", version, about = "Static site generator for the Abyss Lab wiki")]
struct Cli {
    /// Config file to use instead of the default locations
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Dataset root, overriding the configured one
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output directory, overriding the configured one
    #[arg(long, global = true, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Also append logs to this file
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate the site
    Build {
        /// Write each page's props as props.json next to it
        #[arg(long)]
        emit_props: bool,
    },
    /// Validate the dataset without writing anything
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Build, then rebuild whenever the dataset changes
    Watch,
    /// Create a sample dataset and config in a directory
    Init {
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// Overwrite an existing dataset
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let load_config = || -> Result<SiteConfig> {
        let mut config = SiteConfig::load_from(cli.config.as_deref())?;
        if let Some(data_dir) = &cli.data_dir {
            config.data_dir = data_dir.clone();
        }
        if let Some(out_dir) = &cli.out_dir {
            config.out_dir = out_dir.clone();
        }
        Ok(config)
    };

    match &cli.command {
        Command::Build { emit_props } => {
            let mut config = load_config()?;
            config.emit_props |= *emit_props;
            SiteGenerator::new(config).build()?;
            Ok(())
        }
        Command::Check { strict } => check(&load_config()?, *strict),
        Command::Watch => watch::watch(&SiteGenerator::new(load_config()?)),
        Command::Init { dir, force } => init(dir, *force),
    }
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stdout);

    let file_layer = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .compact()
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    Ok(())
}

fn check(config: &SiteConfig, strict: bool) -> Result<()> {
    let dataset = Dataset::from_config(config);
    let report = check_dataset(&dataset, &config.locales);

    for finding in &report.warnings {
        warn!("{} '{}': {}", finding.kind, finding.id, finding.message);
    }
    for finding in &report.errors {
        error!("{} '{}': {}", finding.kind, finding.id, finding.message);
    }
    info!(
        records = report.loaded,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "checked {}",
        config.data_dir.display()
    );

    if !report.errors.is_empty() || (strict && !report.warnings.is_empty()) {
        bail!("dataset check failed");
    }
    Ok(())
}

fn init(dir: &Path, force: bool) -> Result<()> {
    let data_dir = dir.join("data");
    let store = FileStore::new(&data_dir);
    let existing = store.catalog_path(EntityKind::Battlesuit, None)?;
    if existing.exists() && !force {
        bail!(
            "{} already holds a dataset, pass --force to overwrite it",
            data_dir.display()
        );
    }
    scaffold::write_sample_dataset(&store)?;

    let config_path = dir.join(LOCAL_CONFIG_FILE);
    if config_path.exists() {
        info!("keeping existing {}", config_path.display());
    } else {
        fs::write(&config_path, "data_dir = \"data\"\nout_dir = \"public\"\n")
            .with_context(|| format!("failed to write {}", config_path.display()))?;
        info!("wrote {}", config_path.display());
    }
    Ok(())
}
