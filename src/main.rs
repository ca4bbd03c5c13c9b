mod config;

use config::{Config, ConfigError};
use std::{env, process};
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

fn parse_env_file() -> Option<String> {
    for arg in env::args().skip(1) {
        if let Some(path) = arg.strip_prefix("--env-file=") {
            return Some(path.to_string());
        }
    }
    None
}

fn init_tracing(level: Level) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn load_config() -> Result<Config, ConfigError> {
    match parse_env_file() {
        Some(path) => Config::load_with_overlay(path),
        None => Config::load(),
    }
}

fn main() {
    init_tracing(Level::INFO);

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            process::exit(1);
        }
    };

    if env::args().any(|arg| arg == "--check") {
        match serde_json::to_string_pretty(&config) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!(error = %e, "Failed to render configuration");
                process::exit(1);
            }
        }
        return;
    }

    info!(
        port = %config.app.port,
        env = %config.app.env,
        database = %config.database.name,
        redis = %config.redis.address(),
        smtp = %config.smtp.address(),
        context_timeout = ?config.app.context_timeout(),
        access_ttl = ?config.tokens.access_ttl(),
        refresh_ttl = ?config.tokens.refresh_ttl(),
        "Configuration loaded"
    );
    info!(
        page = config.pagination.page,
        page_size = config.pagination.page_size,
        otp_ttl = ?config.otp.ttl(),
        otp_attempts = config.otp.maximum_attempts,
        password_reset_ttl = ?config.password_reset.ttl(),
        cache_expiration = ?config.cache.expiration(),
        gemini_model = %config.gemini.model_name,
        "Runtime limits"
    );
}
