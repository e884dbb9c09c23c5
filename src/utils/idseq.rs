//! The module gathers structures used to identify sequences read in a fasta file.
//!
//! A [SequenceCollection] keeps sequences in the order they were read, this order is the order
//! in which pairs are compared and results are dumped, so a run is reproducible.

use fxhash::FxHashMap;

use crate::errors::SeqJaccardError;

/// A sequence as read in a record of a fasta file
#[derive(Clone, Debug, PartialEq)]
pub struct IdSeq {
    /// id as read in head of fasta record (without '>')
    id: String,
    /// concatenated sequence lines. May be empty.
    content: String,
} // end of IdSeq

impl IdSeq {
    ///
    pub fn new(id: String, content: String) -> Self {
        IdSeq { id, content }
    }

    /// get fasta id
    pub fn get_id(&self) -> &str {
        &self.id
    }

    /// get sequence
    pub fn get_content(&self) -> &str {
        &self.content
    }

    /// length in unicode code points (not bytes)
    pub fn get_len(&self) -> usize {
        self.content.chars().count()
    }
} // end of impl IdSeq

/// Sequences in reading order, with unique identifiers.
#[derive(Default, Debug)]
pub struct SequenceCollection {
    sequences: Vec<IdSeq>,
    /// id to rank
    ranks: FxHashMap<String, usize>,
}

impl SequenceCollection {
    pub fn new() -> Self {
        SequenceCollection::default()
    }

    pub fn with_capacity(size: usize) -> Self {
        SequenceCollection {
            sequences: Vec::with_capacity(size),
            ranks: FxHashMap::default(),
        }
    }

    /// appends a sequence and returns its rank. Fails if its id is already present.
    pub fn push(&mut self, seq: IdSeq) -> Result<usize, SeqJaccardError> {
        if self.ranks.contains_key(seq.get_id()) {
            log::error!("SequenceCollection::push got twice id {}", seq.get_id());
            return Err(SeqJaccardError::DuplicateId(seq.id));
        }
        let rank = self.sequences.len();
        self.ranks.insert(seq.id.clone(), rank);
        self.sequences.push(seq);
        Ok(rank)
    } // end of push

    /// number of sequences
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// sequences in reading order
    pub fn sequences(&self) -> &[IdSeq] {
        &self.sequences
    }

    /// retrieve a sequence by its fasta id
    pub fn get_by_id(&self, id: &str) -> Option<&IdSeq> {
        self.ranks.get(id).map(|&rank| &self.sequences[rank])
    }

    /// total number of code points stored
    pub fn total_len(&self) -> usize {
        self.sequences.iter().map(|s| s.get_len()).sum()
    }
} // end of impl SequenceCollection

impl TryFrom<Vec<(String, String)>> for SequenceCollection {
    type Error = SeqJaccardError;

    /// builds a collection from (id, content) pairs, keeping the order of the vector
    fn try_from(pairs: Vec<(String, String)>) -> Result<Self, Self::Error> {
        let mut collection = SequenceCollection::with_capacity(pairs.len());
        for (id, content) in pairs {
            collection.push(IdSeq::new(id, content))?;
        }
        Ok(collection)
    }
}

//=========================================================

// end of mod tests
