//! Jitter sources.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use veracity_core::config::ScoringConfig;
use veracity_core::traits::IJitterSource;

/// Uniform draw from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformJitter;

impl IJitterSource for UniformJitter {
    fn sample(&self, max: f64) -> f64 {
        if !max.is_finite() || max <= 0.0 {
            return 0.0;
        }
        rand::thread_rng().gen_range(0.0..=max)
    }
}

/// Reproducible sequence from a fixed seed.
#[derive(Debug)]
pub struct SeededJitter {
    rng: Mutex<StdRng>,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl IJitterSource for SeededJitter {
    fn sample(&self, max: f64) -> f64 {
        if !max.is_finite() || max <= 0.0 {
            return 0.0;
        }
        match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(0.0..=max),
            Err(poisoned) => poisoned.into_inner().gen_range(0.0..=max),
        }
    }
}

/// Always returns the same value; the aggregator bounds it.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl IJitterSource for FixedJitter {
    fn sample(&self, _max: f64) -> f64 {
        self.0
    }
}

/// No jitter at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoJitter;

impl IJitterSource for NoJitter {
    fn sample(&self, _max: f64) -> f64 {
        0.0
    }
}

/// Jitter source selected by `config`.
pub fn from_config(config: &ScoringConfig) -> Arc<dyn IJitterSource> {
    match (config.jitter_enabled, config.jitter_seed) {
        (false, _) => Arc::new(NoJitter),
        (true, Some(seed)) => Arc::new(SeededJitter::new(seed)),
        (true, None) => Arc::new(UniformJitter),
    }
}
