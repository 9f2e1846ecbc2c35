//! Cache replacement policies.

/// Round-robin victim pointer per set.
pub mod round_robin;

pub use round_robin::RoundRobinPolicy;

/// Interface for choosing which way of a set to evict.
pub trait ReplacementPolicy {
    /// Records that a processor access resolved to `way` of `set`.
    fn update(&mut self, set: usize, way: usize);

    /// Returns the way to fill on the next miss in `set`.
    fn get_victim(&mut self, set: usize) -> usize;
}
