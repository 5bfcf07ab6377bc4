mod edges;
mod owned_iter;
mod ref_iter;

pub use edges::*;
pub use owned_iter::*;
pub use ref_iter::*;
