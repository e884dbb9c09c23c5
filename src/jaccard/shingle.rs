//! shingling : a sequence is cut in its set of unique kmers.
//!
//! Kmers are windows of unicode code points, not bytes, so that a multi-byte symbol of an alphabet
//! is never split. Kmers are slices of the sequence, nothing is copied.

use fxhash::FxHashSet;

/// returns the unique kmers of size k of s, in order of first occurrence.
///
/// The window slides by one code point over start positions 0..=len-k.
/// The result is empty if k is 0 or if k is greater than the number of code points of s.
pub fn shingle(s: &str, k: usize) -> Vec<&str> {
    if k == 0 {
        return Vec::new();
    }
    // byte offset of each code point, plus end of string
    let bounds: Vec<usize> = s
        .char_indices()
        .map(|(pos, _)| pos)
        .chain(std::iter::once(s.len()))
        .collect();
    let nb_chars = bounds.len() - 1;
    if k > nb_chars {
        return Vec::new();
    }
    let nb_windows = nb_chars - k + 1;
    let mut seen = FxHashSet::<&str>::default();
    seen.reserve(nb_windows);
    let mut kmers = Vec::<&str>::with_capacity(nb_windows);
    for start in 0..nb_windows {
        let kmer = &s[bounds[start]..bounds[start + k]];
        if seen.insert(kmer) {
            kmers.push(kmer);
        }
    }
    if log::log_enabled!(log::Level::Trace) {
        log::trace!("shingle nb windows {}, nb unique kmers {}", nb_windows, kmers.len());
    }
    kmers
} // end of shingle

/// union of 2 shingles : a in its order, then elements of b not in a in b's order.
///
/// a and b must be without duplicates (as returned by [shingle]), so is the result.
pub fn union<'a>(a: &[&'a str], b: &[&'a str]) -> Vec<&'a str> {
    let in_a: FxHashSet<&str> = a.iter().copied().collect();
    let mut united = Vec::<&'a str>::with_capacity(a.len() + b.len());
    united.extend_from_slice(a);
    united.extend(b.iter().copied().filter(|kmer| !in_a.contains(kmer)));
    united
} // end of union

//=========================================================

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_shingle_order_and_uniqueness() {
        log_init_test();
        assert_eq!(shingle("abcde", 2), vec!["ab", "bc", "cd", "de"]);
        assert_eq!(shingle("abdcde", 2), vec!["ab", "bd", "dc", "cd", "de"]);
        // repeated kmers kept once
        assert_eq!(shingle("aaaa", 2), vec!["aa"]);
        assert_eq!(shingle("ACGACG", 3), vec!["ACG", "CGA", "GAC"]);
    }

    #[test]
    fn test_shingle_degenerate() {
        log_init_test();
        assert!(shingle("abc", 0).is_empty());
        assert!(shingle("abc", 4).is_empty());
        assert!(shingle("", 1).is_empty());
        // whole string
        assert_eq!(shingle("abc", 3), vec!["abc"]);
    }

    #[test]
    fn test_shingle_multibyte() {
        log_init_test();
        // 4 code points, 8 bytes
        let s = "αβγα";
        assert_eq!(shingle(s, 2), vec!["αβ", "βγ", "γα"]);
        assert_eq!(shingle(s, 4), vec!["αβγα"]);
        assert!(shingle(s, 5).is_empty());
        assert_eq!(shingle("a→b→", 1), vec!["a", "→", "b"]);
    }

    #[test]
    fn test_shingle_bounded() {
        log_init_test();
        let seqs = ["ACGTACGTTTGA", "AAAAAAA", "ab", "x", "", "αβαβαβγ"];
        for s in seqs {
            let len = s.chars().count();
            for k in 0..10usize {
                let kmers = shingle(s, k);
                let unique: FxHashSet<&str> = kmers.iter().copied().collect();
                assert_eq!(unique.len(), kmers.len());
                let max_nb = if k == 0 { 0 } else { (len + 1).saturating_sub(k) };
                assert!(kmers.len() <= max_nb, "s {} k {}", s, k);
                assert!(kmers.iter().all(|kmer| kmer.chars().count() == k));
            }
        }
    }

    #[test]
    fn test_union() {
        log_init_test();
        let a = shingle("abcde", 2);
        let b = shingle("abdcde", 2);
        let united = union(&a, &b);
        assert_eq!(united, vec!["ab", "bc", "cd", "de", "bd", "dc"]);
        //
        let set_a: FxHashSet<&str> = a.iter().copied().collect();
        let set_b: FxHashSet<&str> = b.iter().copied().collect();
        assert_eq!(united.len(), set_a.union(&set_b).count());
        // union with empty
        assert_eq!(union(&a, &[]), a);
        assert_eq!(union(&[], &b), b);
        assert!(union(&[], &[]).is_empty());
    }
} // end of mod tests
