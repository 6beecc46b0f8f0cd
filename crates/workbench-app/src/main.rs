mod boot;
mod cli;
mod error;
mod panes;

use std::process::ExitCode;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use workbench_config::{toml_loader, validation, WorkbenchConfig};
use workbench_hub::HubSettings;

use crate::error::AppError;

const FALLBACK_DIRECTIVE: &str = "workbench=info";

/// Config from `--config`, else the platform default; defaults on failure.
fn load_config(args: &cli::Args) -> WorkbenchConfig {
    let loaded = match &args.config {
        Some(path) => toml_loader::load_from_path(path),
        None => workbench_config::load_config(),
    };
    match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("config load failed, using defaults: {e}");
            WorkbenchConfig::default()
        }
    }
}

fn init_tracing(directive: &str) {
    let directive: Result<Directive, _> = directive
        .parse()
        .or_else(|_| FALLBACK_DIRECTIVE.parse());
    let filter = match directive {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(args: &cli::Args, config: &WorkbenchConfig) -> Result<(), AppError> {
    validation::validate(config)?;

    if args.print_config {
        println!("{}", workbench_config::config_to_json(config));
        return Ok(());
    }

    let items = match &args.layout {
        Some(path) => boot::load_layout(path)?,
        None => boot::default_layout(),
    };

    let hub = boot::run(&items, HubSettings::from(config))?;

    if args.dump {
        let layout = hub.layout().to_config();
        match serde_json::to_string_pretty(&layout) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::warn!("failed to serialize layout: {e}"),
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();
    let config = load_config(&args);

    let directive = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.as_str());
    init_tracing(directive);

    tracing::info!("Workbench v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &args.config {
        tracing::info!("using config override: {}", path.display());
    }

    match run(&args, &config) {
        Ok(()) => {
            tracing::info!("shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
