//! enumeration of unordered pairs (i, j), 0 <= i < j < n in lexicographic order:
//! (0,1), (0,2) ... (0,n-1), (1,2) ... (n-2,n-1)

use std::iter::FusedIterator;

/// Iterator on the n*(n-1)/2 pairs of indexes of a collection of size n.
/// State is only the next pair, so it can be regenerated from n at any time.
#[derive(Clone, Debug)]
pub struct PairIter {
    n: usize,
    /// next pair to return
    i: usize,
    j: usize,
}

impl PairIter {
    pub fn new(n: usize) -> Self {
        PairIter { n, i: 0, j: 1 }
    }

    /// total number of pairs, C(n,2)
    pub fn nb_pairs(&self) -> usize {
        nb_pairs(self.n)
    }

    fn remaining(&self) -> usize {
        if self.j >= self.n {
            return 0;
        }
        // end of row i plus all pairs among indexes after i
        (self.n - self.j) + nb_pairs(self.n - self.i - 1)
    }
} // end of impl PairIter

impl Iterator for PairIter {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.j >= self.n {
            return None;
        }
        let pair = (self.i, self.j);
        self.j += 1;
        if self.j == self.n {
            self.i += 1;
            self.j = self.i + 1;
        }
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
} // end of impl Iterator for PairIter

impl ExactSizeIterator for PairIter {}

impl FusedIterator for PairIter {}

/// pairs of indexes of a collection of size n
pub fn pairs(n: usize) -> PairIter {
    PairIter::new(n)
}

/// C(n,2)
pub fn nb_pairs(n: usize) -> usize {
    if n < 2 {
        0
    } else {
        n * (n - 1) / 2
    }
}

//=========================================================

// end of mod tests
