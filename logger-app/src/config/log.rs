use env_logger::{Builder, Env};

const DEFAULT_FILTER: &str = "error";

/// Installs the global logger, filtered by `RUST_LOG`.
///
/// Records go to standard error next to the fatal error lines, so only errors
/// are shown unless asked otherwise.
pub fn init() {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_target(false)
        .init();
}
