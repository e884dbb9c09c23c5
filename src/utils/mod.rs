//! contains utils used in reading fasta files and run parameters

pub mod files;
pub mod idseq;
pub mod parameters;

pub use files::*;
pub use idseq::*;
pub use parameters::*;
