//! Logger setup for the `softgl` binary.
//!
//! The library logs through the `log` facade only. `RUST_LOG` always wins
//! over the filter passed in here.

use env_logger::Env;

/// Filter used when `RUST_LOG` is unset: render progress, load warnings.
pub const DEFAULT_FILTER: &str = "info";

/// Install `env_logger` as the global logger.
///
/// Returns `false` if a logger was already installed; the existing one is
/// left in place.
pub fn init_logging(default_filter: &str) -> bool {
    let installed = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .try_init()
        .is_ok();
    if installed {
        log::debug!("logger installed, default filter {default_filter:?}");
    }
    installed
}
