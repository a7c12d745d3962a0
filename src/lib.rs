pub mod error;
pub mod stats;

mod deque;
mod percolation;
mod union_find;

pub use deque::{Deque, IntoIter, Iter};
pub use error::{Error, Result};
pub use percolation::Percolation;
pub use stats::PercolationStats;
pub use union_find::UnionFind;
