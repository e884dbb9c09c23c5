//! kmer shingling and jaccard index computations

pub mod compare;
pub mod pairs;
pub mod score;
pub mod shingle;

pub use compare::*;
pub use pairs::*;
pub use score::*;
pub use shingle::*;
