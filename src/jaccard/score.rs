//! jaccard index between 2 sequences

use super::shingle::{shingle, union};

/// Computes the jaccard index of the kmer sets of s1 and s2.
///
/// Returns 0 if s1 or s2 is empty, or nmer is 0. Returns also 0 if no sequence has a kmer (both shorter than nmer).
/// Comparison of a non empty sequence with itself gives exactly 1.
pub fn jaccard(s1: &str, s2: &str, nmer: usize) -> f64 {
    if s1.is_empty() || s2.is_empty() || nmer < 1 {
        return 0.;
    }
    let kmers1 = shingle(s1, nmer);
    let kmers2 = shingle(s2, nmer);
    jaccard_from_shingles(&kmers1, &kmers2)
} // end of jaccard

/// Jaccard index of 2 kmer sets without duplicates (see [shingle]).
///
/// As sets have no duplicates the intersection size is |a| + |b| - |a U b|.
/// Two empty sets give 0.
pub fn jaccard_from_shingles(a: &[&str], b: &[&str]) -> f64 {
    let nb_union = union(a, b).len();
    if nb_union == 0 {
        return 0.;
    }
    let nb_inter = a.len() + b.len() - nb_union;
    nb_inter as f64 / nb_union as f64
} // end of jaccard_from_shingles

//=========================================================

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_jaccard_small_case() {
        log_init_test();
        // {ab,bc,cd,de} and {ab,bd,dc,cd,de} : 3 common, union 6
        assert_eq!(jaccard("abcde", "abdcde", 2), 0.5);
        // {AC,CG,GT} and {CG,GT,TT} : 2 common, union 4
        assert_eq!(jaccard("ACGT", "CGTT", 2), 0.5);
        assert_eq!(jaccard("ACGT", "TTTT", 2), 0.);
    }

    #[test]
    fn test_jaccard_degenerate() {
        log_init_test();
        assert_eq!(jaccard("", "ACGT", 2), 0.);
        assert_eq!(jaccard("ACGT", "", 2), 0.);
        assert_eq!(jaccard("", "", 2), 0.);
        assert_eq!(jaccard("ACGT", "ACGT", 0), 0.);
        // both shorter than nmer : no kmer at all
        assert_eq!(jaccard("AC", "GT", 3), 0.);
        assert_eq!(jaccard("AC", "AC", 3), 0.);
        // one shorter than nmer
        assert_eq!(jaccard("AC", "ACGT", 3), 0.);
        assert!(jaccard_from_shingles(&[], &[]).is_finite());
    }

    #[test]
    fn test_jaccard_self_is_one() {
        log_init_test();
        let seqs = ["ACGT", "AAAA", "abdcde", "αβγδαβ", "x"];
        for s in seqs {
            let len = s.chars().count();
            for k in 1..=len {
                assert_eq!(jaccard(s, s, k), 1.0, "s {} k {}", s, k);
            }
        }
    }

    #[test]
    fn test_jaccard_symmetric() {
        log_init_test();
        let seqs = ["ACGTACGT", "TTGACA", "", "ACG", "αβγ", "GGGGGG", "ACGTTGCA"];
        for s1 in seqs {
            for s2 in seqs {
                for k in 0..6usize {
                    let j12 = jaccard(s1, s2, k);
                    assert_eq!(j12, jaccard(s2, s1, k));
                    assert!((0. ..=1.).contains(&j12));
                }
            }
        }
    }

    #[test]
    fn test_jaccard_multibyte() {
        log_init_test();
        // {αβ,βγ} and {αβ,βδ} : 1 common, union 3
        let j = jaccard("αβγ", "αβδ", 2);
        assert!((j - 1. / 3.).abs() < 1.0e-12);
    }
} // end of mod tests
