use std::borrow::Cow;

use crate::constants::export::DEFAULT_LINK_PREFIX;
use crate::constants::sampler::{DEFAULT_BATCH_SIZE, DEFAULT_SEED};

/// Top-level session configuration.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// RNG seed that controls deterministic sampling order.
    pub seed: u64,
    /// Number of records drawn when a batch draw does not specify a count.
    pub batch_size: usize,
    /// Host prefix prepended to handles when building shareable links.
    pub link_prefix: Cow<'static, str>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            batch_size: DEFAULT_BATCH_SIZE,
            link_prefix: Cow::Borrowed(DEFAULT_LINK_PREFIX),
        }
    }
}

impl SessionConfig {
    /// Override the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Override the default batch-draw size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Override the link host prefix.
    pub fn with_link_prefix(mut self, link_prefix: impl Into<Cow<'static, str>>) -> Self {
        self.link_prefix = link_prefix.into();
        self
    }
}

/// Seed drawn from OS entropy, for sessions that should not repeat draws
/// across runs. Deterministic seeding stays the default so tests and repeated
/// reviews are reproducible.
pub fn entropy_seed() -> u64 {
    rand::random()
}
