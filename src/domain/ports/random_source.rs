//! RandomSource port - the only non-deterministic input of the builder
//!
//! Production code draws from the thread RNG; tests plug in a fixed
//! sequence.

pub trait RandomSource {
    /// Pick an index uniformly from `0..len`. `len` is never zero.
    fn pick_index(&self, len: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &T {
    fn pick_index(&self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}
