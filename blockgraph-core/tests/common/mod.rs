use std::collections::VecDeque;

use rand::{RngCore, SeedableRng, rngs::SmallRng};

/// Wraps a seeded [`SmallRng`] and counts 64-bit draws.
pub struct CountingRng {
    inner: SmallRng,
    draws: usize,
}

impl CountingRng {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
            draws: 0,
        }
    }

    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        panic!("generator must only draw 64-bit values")
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("generator must only draw 64-bit values")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        panic!("generator must only draw 64-bit values")
    }
}

/// Replays a fixed sequence of uniform draws in `[0, 1)`.
///
/// Each value must be a multiple of `2^-53` so it survives the
/// `u64 -> f64` conversion performed by `rand`'s `Standard` distribution.
pub struct ScriptedRng {
    draws: VecDeque<u64>,
}

impl ScriptedRng {
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        let scale = (1_u64 << 53) as f64;
        let draws = values
            .iter()
            .map(|value| ((value * scale) as u64) << 11)
            .collect();
        Self { draws }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        panic!("generator must only draw 64-bit values")
    }

    fn next_u64(&mut self) -> u64 {
        self.draws
            .pop_front()
            .unwrap_or_else(|| panic!("scripted draws exhausted"))
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("generator must only draw 64-bit values")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        panic!("generator must only draw 64-bit values")
    }
}

/// Names every node `"node <n>"` in call order.
pub fn sequential_names() -> impl FnMut() -> String {
    let mut next = 0_usize;
    move || {
        let name = format!("node {next}");
        next += 1;
        name
    }
}
