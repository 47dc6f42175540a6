/*! Reading facilities

[chunk::ChunkReader] implements [Iterator] to properly iterate on bounded
batches of corpus lines. [exclusions] loads the per-language exclusion
lists consumed by the ranker.
!*/
pub mod chunk;
pub mod exclusions;

pub use chunk::ChunkReader;
