//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `ecosmart_core` linkage and report store reachability.
//! - Read store settings from `ECOSMART_DB_PATH` / `ECOSMART_DB_BUSY_TIMEOUT_MS`.
//! - Optionally start file logging when `ECOSMART_LOG_DIR` is set.

use ecosmart_core::{check_health, default_log_level, ConnectionProvider, DbConfig};
use log::info;
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "ECOSMART_LOG_DIR";
const LOG_LEVEL_ENV: &str = "ECOSMART_LOG_LEVEL";

fn main() -> ExitCode {
    println!("ecosmart_core ping={}", ecosmart_core::ping());
    println!("ecosmart_core version={}", ecosmart_core::core_version());

    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().into());
        if let Err(err) = ecosmart_core::init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!("event=cli_start module=cli status=ok mode={}", config.mode());
    println!("ecosmart_core store={}", config.mode());

    let provider = ConnectionProvider::new(config);
    let health = check_health(&provider);
    println!("ecosmart_core database={health:?}");

    if health.is_up() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
