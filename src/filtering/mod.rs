/*! Filtering utilities

Filters operate on count-table keys after aggregation.

A [Filter] is pure: two successive equal inputs give two equal outputs, and
detection never depends on counts. `detect` returns `true` when the item
should be kept.
! */
mod noise;

pub use noise::NoiseFilter;

/// immutable, pure filter (2 successive equal inputs -> 2 equal outputs)
pub trait Filter<T> {
    fn detect(&self, item: T) -> bool;
}
