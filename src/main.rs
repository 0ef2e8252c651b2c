mod config;
mod holder;
mod pages;

use config::AppConfig;
use std::env;
use std::path::Path;
use std::process;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_PATH: &str = "configs/store.yaml";
const DEFAULT_EMIT_PATH: &str = "config.js";

/// Value of a `--name=value` argument, if present.
fn parse_arg(prefix: &str) -> Option<String> {
    for arg in env::args().skip(1) {
        if let Some(value) = arg.strip_prefix(prefix) {
            return Some(value.to_string());
        }
    }
    None
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Load the configuration from `--config=`, the default path, or fall back
/// to the built-in record when no file exists.
fn load_config() -> Result<AppConfig, config::ConfigError> {
    if let Some(path) = parse_arg("--config=") {
        return AppConfig::load(&path);
    }

    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        return AppConfig::load(DEFAULT_CONFIG_PATH);
    }

    warn!(
        path = DEFAULT_CONFIG_PATH,
        "config file not found, using built-in defaults"
    );
    Ok(AppConfig::builtin())
}

fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            process::exit(1);
        }
    };

    // Deployment-readiness check: fails while the placeholder backend
    // address is still configured.
    if env::args().any(|arg| arg == "--check") {
        run_check(&config);
        return;
    }

    let config = match holder::install(config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to install config: {}", e);
            process::exit(1);
        }
    };

    info!(
        store = %config.store_name,
        backend = %config.backend_url,
        delivery_fee = %config.delivery_fee,
        free_delivery_threshold = %config.free_delivery_threshold,
        "Configuration installed"
    );

    if config.has_placeholder_backend() {
        warn!("backend_url still points at the placeholder, run --check before deploying");
    }

    // --emit and --update-pages combine into one deploy pass.
    if env::args().any(|arg| arg == "--emit" || arg.starts_with("--emit=")) {
        let path = parse_arg("--emit=").unwrap_or_else(|| DEFAULT_EMIT_PATH.to_string());
        run_emit(config, &path);
    }

    if let Some(site_root) = parse_arg("--update-pages=") {
        run_update_pages(&site_root);
    }
}

fn run_check(config: &AppConfig) {
    match config.deploy_check() {
        Ok(()) => info!("Deployment check passed"),
        Err(e) => {
            error!(error = %e, "Deployment check failed");
            process::exit(1);
        }
    }
}

fn run_emit(config: &AppConfig, path: &str) {
    if let Err(e) = pages::write_config_js(config, Path::new(path)) {
        error!(error = %e, "Failed to emit config.js");
        process::exit(1);
    }
}

fn run_update_pages(site_root: &str) {
    match pages::update_pages(Path::new(site_root)) {
        Ok(summary) => {
            for page in &summary.updated {
                info!(page = %page, "updated");
            }
            for page in &summary.unchanged {
                info!(page = %page, "already up to date");
            }
        }
        Err(e) => {
            error!(error = %e, "Failed to update pages");
            process::exit(1);
        }
    }
}
