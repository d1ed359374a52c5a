//! Logger setup shared by the demo binaries.

/// Installs the global `env_logger` logger, filtered by `RUST_LOG` or
/// `info` when unset. Later calls are no-ops.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    if env_logger::Builder::from_env(env).try_init().is_ok() {
        log::debug!("logging initialized");
    }
}
