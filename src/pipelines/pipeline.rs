//! Pipeline trait.
use crate::error::Error;

/// Implemented by each pipeline. Generic over the return type so that a
/// pipeline producing a value can use the trait as well.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
