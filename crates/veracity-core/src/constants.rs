use std::time::Duration;

/// Veracity system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Starting score for text inputs.
pub const TEXT_BASELINE: f64 = 70.0;

/// Starting score for image, video, and generic URL inputs.
pub const MEDIA_BASELINE: f64 = 50.0;

/// Upper bound of the jitter draw for text, image, and video inputs.
pub const TEXT_JITTER_MAX: f64 = 10.0;
pub const IMAGE_JITTER_MAX: f64 = 10.0;
pub const VIDEO_JITTER_MAX: f64 = 10.0;

/// Upper bound of the jitter draw for generic URL inputs.
pub const URL_JITTER_MAX: f64 = 5.0;

/// Reported scores are clamped into this range.
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// A score strictly above this is `Authentic`; at or below is `Fake`.
pub const VERDICT_THRESHOLD: f64 = 50.0;

/// Decimal places kept in reported scores.
pub const SCORE_DECIMALS: i32 = 2;

/// Hard timeout for the generic URL liveness probe.
pub const URL_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum characters of raw input handed to the persistence collaborator.
pub const INPUT_TRUNCATE_CHARS: usize = 500;
