/// Source of the bounded random addition applied before clamping.
pub trait IJitterSource: Send + Sync {
    /// Draw a value uniformly from `[0, max]`.
    fn sample(&self, max: f64) -> f64;
}
