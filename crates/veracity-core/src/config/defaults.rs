// Single source of truth for all default values.

// --- Scoring ---
pub const DEFAULT_JITTER_ENABLED: bool = true;

// --- Probe ---
pub const DEFAULT_PROBE_ENABLED: bool = true;
pub const DEFAULT_PROBE_MAX_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_PROBE_MAX_REDIRECTS: usize = 10;
pub const DEFAULT_PROBE_USE_SYSTEM_PROXY: bool = true;
pub const DEFAULT_PROBE_USER_AGENT: &str = concat!("veracity/", env!("CARGO_PKG_VERSION"));

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "veracity.db";
pub const DEFAULT_INPUT_TRUNCATE_CHARS: usize = crate::constants::INPUT_TRUNCATE_CHARS;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Server ---
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
