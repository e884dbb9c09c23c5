//! seqjaccard : pairwise similarity of sequences of a fasta file.
//!
//! Each sequence is cut into its set of unique kmers (n-grams of unicode code points, no alignment,
//! no multiplicity) and each pair of sequences gets the jaccard index of the two sets.
//!
//! - [utils] : reading of the fasta file into a [SequenceCollection](utils::SequenceCollection) and run parameters.
//! - [jaccard] : shingling, union, jaccard index, pair enumeration and the comparison driver.
//! - [answer] : comparison results and the sinks they are streamed to (tsv or json lines).

pub mod errors;
pub mod utils;
pub mod jaccard;
pub mod answer;

pub use errors::SeqJaccardError;
