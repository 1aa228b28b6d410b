//! Process settings
//!
//! There are no flags or config files; the defaults are what the binary runs
//! with. Embedders and tests can pin the RNG seed for reproducible sessions.

use rand::SeedableRng;
use rand_pcg::Pcg32;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Fixed RNG seed; `None` draws one from the OS-backed thread RNG
    pub seed: Option<u64>,
}

impl Settings {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Seed that will actually be used
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Build the session RNG
    pub fn rng(&self) -> Pcg32 {
        let seed = self.resolve_seed();
        log::debug!("rng seed {seed}");
        Pcg32::seed_from_u64(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_default_is_unseeded() {
        assert_eq!(Settings::default().seed, None);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let settings = Settings::seeded(12345);
        let mut a = settings.rng();
        let mut b = settings.rng();
        for _ in 0..10 {
            assert_eq!(a.random_range(1..=100u32), b.random_range(1..=100u32));
        }
    }
}
