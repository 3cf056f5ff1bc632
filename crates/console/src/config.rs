//! Runtime configuration read from the environment.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Optional `u64` seed for reproducible sessions.
pub const SEED_VAR: &str = "QVAULT_SEED";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub seed: Option<u64>,
}

impl ConsoleConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values are logged and
    /// ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(SEED_VAR).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(err) => {
                tracing::warn!(var = SEED_VAR, value = %raw, error = %err, "ignoring invalid seed");
                None
            }
        });
        Self { seed }
    }

    /// Seeded generator when configured, otherwise OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
