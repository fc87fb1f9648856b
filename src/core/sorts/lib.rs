mod error;
mod keyed;
mod mergesort;
mod pivot;
mod quicksort;

pub use error::*;
pub use keyed::*;
pub use mergesort::*;
pub use pivot::*;
pub use quicksort::*;
