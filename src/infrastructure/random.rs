//! Thread-local random source

use rand::Rng;

use crate::domain::ports::RandomSource;

/// `RandomSource` drawing from `rand::thread_rng()`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}
