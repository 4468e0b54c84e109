//! Runtime logging bootstrap and safety policy.
//!
//! # Responsibility
//! - Initialize the `env_logger` backend exactly once per process.
//! - Emit stable `event=... module=... status=...` lines.
//!
//! # Invariants
//! - Initialization is idempotent for the same level and never panics.
//! - Re-initialization with a different level is rejected.
//! - Names, birth dates and intentions are never logged verbatim; use
//!   `fingerprint` to correlate lines for the same input.

use env_logger::Env;
use log::info;
use once_cell::sync::OnceCell;
use sha2::{Digest, Sha256};

const FINGERPRINT_HEX_CHARS: usize = 8;

static LOGGING_LEVEL: OnceCell<&'static str> = OnceCell::new();

/// Initializes runtime logging at `level`.
///
/// `RUST_LOG`, when set, takes precedence over `level` for filtering.
///
/// # Errors
/// - Returns an error when `level` is unsupported.
/// - Returns an error when logging is already active at another level.
/// - Returns an error when another logger was installed by someone else.
pub fn init_logging(level: &str) -> Result<(), String> {
    let normalized = normalize_level(level)?;

    let active = LOGGING_LEVEL.get_or_try_init(|| -> Result<&'static str, String> {
        env_logger::Builder::from_env(Env::default().default_filter_or(normalized))
            .format_timestamp_micros()
            .try_init()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        info!(
            "event=runtime_init module=logging status=ok level={} platform={} version={}",
            normalized,
            std::env::consts::OS,
            env!("CARGO_PKG_VERSION")
        );
        Ok(normalized)
    })?;

    if *active != normalized {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            active, normalized
        ));
    }
    Ok(())
}

/// Active level, or `None` before `init_logging` succeeded.
pub fn logging_status() -> Option<&'static str> {
    LOGGING_LEVEL.get().copied()
}

/// `debug` in debug builds, `info` in release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

pub fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

/// Short stable digest of user text, safe to log.
pub fn fingerprint(text: &str) -> String {
    let mut hex = hex::encode(Sha256::digest(text.as_bytes()));
    hex.truncate(FINGERPRINT_HEX_CHARS);
    hex
}
