//! all pairs comparison of a collection of sequences.
//!
//! Pairs (i,j) are processed in the order of [pairs](super::pairs::pairs). Before a pair is dumped, each of its sequences
//! whose content was never seen is compared with itself, so a self comparison row is written once by distinct content,
//! for the first sequence having this content.

use fxhash::FxHashSet;
use rayon::prelude::*;

use super::pairs::{nb_pairs, pairs};
use super::score::jaccard_from_shingles;
use super::shingle::shingle;
use crate::answer::{ComparisonResult, ResultSink};
use crate::errors::SeqJaccardError;
use crate::utils::{JaccardParams, SequenceCollection};

/// Contents that already got their self comparison row. Keyed by content, not by id.
/// It only grows during a run.
#[derive(Default, Debug)]
pub struct SeenContent<'a>(FxHashSet<&'a str>);

impl<'a> SeenContent<'a> {
    pub fn new() -> Self {
        SeenContent(FxHashSet::default())
    }

    /// returns true if content had not been seen before, and records it
    pub fn first_sight(&mut self, content: &'a str) -> bool {
        self.0.insert(content)
    }

    /// number of distinct contents seen
    pub fn nb_contents(&self) -> usize {
        self.0.len()
    }
} // end of impl SeenContent

/// counts of rows emitted by [compare_collection]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ComparisonStats {
    /// comparisons between 2 different sequences
    pub nb_cross: usize,
    /// comparisons of a sequence with itself
    pub nb_self: usize,
}

/// Compares all pairs of sequences of collection and streams results to sink.
///
/// The header is written first, then rows in enumeration order, then the sink is flushed.
/// Kmer sets are computed once by sequence (in parallel) and shared by all the pairs a sequence is in,
/// scores are the same as [jaccard](super::score::jaccard) on the sequences.
/// The first error of the sink stops the run.
pub fn compare_collection<'a>(
    collection: &'a SequenceCollection,
    params: &JaccardParams,
    seen: &mut SeenContent<'a>,
    sink: &mut dyn ResultSink,
) -> Result<ComparisonStats, SeqJaccardError> {
    let ngram = params.get_ngram();
    let sequences = collection.sequences();
    log::info!(
        "compare_collection nb sequences {}, nb pairs {}, ngram {}",
        sequences.len(),
        nb_pairs(sequences.len()),
        ngram
    );
    //
    let kmers: Vec<Vec<&str>> = sequences
        .par_iter()
        .map(|seq| shingle(seq.get_content(), ngram))
        .collect();
    log::debug!(
        "kmer sets computed, total nb kmers {}",
        kmers.iter().map(|k| k.len()).sum::<usize>()
    );
    //
    let mut stats = ComparisonStats::default();
    sink.write_header()?;
    for (i, j) in pairs(sequences.len()) {
        for rank in [i, j] {
            let content = sequences[rank].get_content();
            if seen.first_sight(content) {
                let id = sequences[rank].get_id();
                let score = jaccard_from_shingles(&kmers[rank], &kmers[rank]);
                sink.write_result(&ComparisonResult::new(id, id, score))?;
                stats.nb_self += 1;
            }
        }
        let score = jaccard_from_shingles(&kmers[i], &kmers[j]);
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("pair ({}, {}) jaccard {}", i, j, score);
        }
        let (id_i, id_j) = (sequences[i].get_id(), sequences[j].get_id());
        sink.write_result(&ComparisonResult::new(id_i, id_j, score))?;
        stats.nb_cross += 1;
    }
    sink.flush()?;
    //
    log::info!(
        "compare_collection done, nb cross rows {}, nb self rows {}",
        stats.nb_cross,
        stats.nb_self
    );
    Ok(stats)
} // end of compare_collection

/// runs [compare_collection] with a fresh SeenContent and keeps results in memory
pub fn compare_to_vec(
    collection: &SequenceCollection,
    params: &JaccardParams,
) -> Result<Vec<ComparisonResult>, SeqJaccardError> {
    let mut sink = crate::answer::VecSink::new();
    let mut seen = SeenContent::new();
    compare_collection(collection, params, &mut seen, &mut sink)?;
    Ok(sink.results)
}

//=========================================================

// end of mod tests
