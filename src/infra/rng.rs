use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

use crate::engine::RandomSource;

/// RNG на основе системного генератора `rand`.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn next_below(&mut self, bound: usize) -> usize {
        thread_rng().gen_range(0..bound)
    }

    fn next_unit(&mut self) -> f64 {
        thread_rng().gen::<f64>()
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Одинаковый seed даёт одинаковые шу и одинаковые множители.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_bytes(bytes: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(bytes),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn next_below(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}
