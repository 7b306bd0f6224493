//! Suffix array builder
//!
//! Sorts all suffixes of the input by prefix doubling:
//! 1. Rank every position by its single symbol
//! 2. Each round, re-sort positions by (rank, rank at offset `gap`) and
//!    collapse ties into shared ranks, doubling `gap` until all ranks are
//!    distinct
//!
//! Collapsing ties is what bounds the loop to O(log n) rounds: once a
//! suffix's rank is unique its order can never change again, and the
//! round that makes the last tie distinct terminates the loop.

use super::lcp::lcp_array;
use super::types::{BuildConfig, SuffixLcpArray};
use rayon::prelude::*;

impl SuffixLcpArray {
    /// Build the suffix array and LCP array for `text` with the default
    /// configuration.
    ///
    /// Works over any totally ordered symbol type. Total over all finite
    /// inputs, including the empty one.
    pub fn build<T: Ord + Sync>(text: &[T]) -> Self {
        Self::build_with_config(text, &BuildConfig::default())
    }

    /// Build with an explicit configuration.
    pub fn build_with_config<T: Ord + Sync>(text: &[T], config: &BuildConfig) -> Self {
        let (sa, rank) = sort_suffixes(text, config);
        let lcp = lcp_array(text, &sa, &rank);
        Self { sa, lcp }
    }

    /// Build over the UTF-8 bytes of `text`.
    ///
    /// Offsets in the result are byte offsets, so multi-byte characters
    /// contribute one suffix per byte.
    pub fn from_text(text: &str) -> Self {
        Self::build(text.as_bytes())
    }
}

/// Sort all suffixes of `text` by prefix doubling.
///
/// Returns the suffix array and its inverse: `rank[sa[k]] == k` for every
/// k. After round r, two positions share a rank iff their suffixes agree
/// on the first 2^r symbols; the loop exits once every rank is unique,
/// which is exactly when the order is fully resolved.
///
/// Time: O(n log^2 n) worst case (log n rounds of an O(n log n) sort)
/// Space: O(n) for sa and the two rank buffers
fn sort_suffixes<T: Ord + Sync>(text: &[T], config: &BuildConfig) -> (Vec<usize>, Vec<usize>) {
    let n = text.len();
    if n == 0 {
        return (Vec::new(), Vec::new());
    }

    let parallel = n >= config.parallel_threshold;
    let mut sa: Vec<usize> = (0..n).collect();

    // Round zero: order by the single symbol at each position, then
    // collapse equal symbols into shared ranks. Sorting gives dense ranks
    // for any Ord alphabet without assuming symbols convert to integers.
    sort_positions(&mut sa, |&i| &text[i], parallel);
    let mut rank = vec![0usize; n];
    for k in 1..n {
        let bump = usize::from(text[sa[k - 1]] != text[sa[k]]);
        rank[sa[k]] = rank[sa[k - 1]] + bump;
    }

    let mut next_rank = vec![0usize; n];
    let mut gap = 1;
    while rank[sa[n - 1]] < n - 1 {
        // Key for position i: ranks of the two gap-length halves of its
        // first 2*gap symbols. A suffix too short to have a second half
        // gets `None`, which sorts below every real rank.
        let key = |i: usize| (rank[i], rank.get(i + gap).copied());

        sort_positions(&mut sa, |&i| key(i), parallel);

        next_rank[sa[0]] = 0;
        for k in 1..n {
            let bump = usize::from(key(sa[k - 1]) != key(sa[k]));
            next_rank[sa[k]] = next_rank[sa[k - 1]] + bump;
        }
        std::mem::swap(&mut rank, &mut next_rank);
        gap *= 2;
    }

    (sa, rank)
}

/// Sort positions by a key, in parallel for large inputs.
///
/// Each round's key is a total order over distinct positions, so an
/// unstable sort yields the same result on both paths.
fn sort_positions<K, F>(sa: &mut [usize], key: F, parallel: bool)
where
    K: Ord + Send,
    F: Fn(&usize) -> K + Sync,
{
    if parallel {
        sa.par_sort_unstable_by_key(key);
    } else {
        sa.sort_unstable_by_key(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_is_permutation(sa: &[usize]) {
        let mut seen = vec![false; sa.len()];
        for &p in sa {
            assert!(p < sa.len(), "offset {} out of range", p);
            assert!(!seen[p], "offset {} appears twice", p);
            seen[p] = true;
        }
    }

    #[test]
    fn test_known_vectors() {
        let cases: &[(&str, &[usize], &[usize])] = &[
            ("banana", &[5, 3, 1, 0, 4, 2], &[0, 1, 3, 0, 0, 2]),
            ("ababa", &[4, 2, 0, 3, 1], &[0, 1, 3, 0, 2]),
            ("aaaaa", &[4, 3, 2, 1, 0], &[0, 1, 2, 3, 4]),
            ("abcde", &[0, 1, 2, 3, 4], &[0, 0, 0, 0, 0]),
            (
                "mississippi",
                &[10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2],
                &[0, 1, 1, 4, 0, 0, 1, 0, 2, 1, 3],
            ),
        ];

        for &(text, sa, lcp) in cases {
            let built = SuffixLcpArray::from_text(text);
            assert_eq!(built.sa(), sa, "sa mismatch for {:?}", text);
            assert_eq!(built.lcp(), lcp, "lcp mismatch for {:?}", text);
        }
    }

    #[test]
    fn test_empty_input() {
        let built = SuffixLcpArray::from_text("");
        assert!(built.is_empty());
        assert_eq!(built.sa(), &[] as &[usize]);
        assert_eq!(built.lcp(), &[] as &[usize]);
    }

    #[test]
    fn test_single_symbol() {
        let built = SuffixLcpArray::from_text("a");
        assert_eq!(built.sa(), [0]);
        assert_eq!(built.lcp(), [0]);
    }

    #[test]
    fn test_suffixes_are_sorted() {
        let texts = ["banana", "mississippi", "abracadabra", "zyxwv", "aabaaab"];
        for text in texts {
            let bytes = text.as_bytes();
            let built = SuffixLcpArray::build(bytes);
            assert_is_permutation(built.sa());
            for k in 1..built.len() {
                let prev = &bytes[built.sa()[k - 1]..];
                let curr = &bytes[built.sa()[k]..];
                assert!(prev < curr, "{:?}: suffixes out of order at {}", text, k);
            }
        }
    }

    #[test]
    fn test_all_identical_symbols_terminates() {
        // Every comparison ties until the boundary sentinel resolves it;
        // suffixes end up ordered shortest-first.
        let text = vec![b'x'; 300];
        let built = SuffixLcpArray::build(&text);
        let expected: Vec<usize> = (0..300).rev().collect();
        assert_eq!(built.sa(), expected.as_slice());
        assert_eq!(built.lcp()[0], 0);
        for k in 1..300 {
            // adjacent suffixes have lengths k and k + 1, all symbols equal
            assert_eq!(built.lcp()[k], k);
        }
    }

    #[test]
    fn test_non_byte_alphabet() {
        // Same structure as "banana" over a u32 alphabet
        let text: &[u32] = &[700, 100, 500, 100, 500, 100];
        let built = SuffixLcpArray::build(text);
        assert_eq!(built.sa(), [5, 3, 1, 0, 4, 2]);
        assert_eq!(built.lcp(), [0, 1, 3, 0, 0, 2]);
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        let text: Vec<u8> = (0..2000u32).map(|i| (i * 31 % 7) as u8 + b'a').collect();
        let sequential = SuffixLcpArray::build(&text);
        let parallel = SuffixLcpArray::build_with_config(
            &text,
            &BuildConfig {
                parallel_threshold: 0,
            },
        );
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_rank_is_inverse_of_sa() {
        let text = b"abracadabra";
        let (sa, rank) = sort_suffixes(text, &BuildConfig::default());
        for (k, &p) in sa.iter().enumerate() {
            assert_eq!(rank[p], k);
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let built = SuffixLcpArray::from_text("banana");
        let json = serde_json::to_string(&built).unwrap();
        let back: SuffixLcpArray = serde_json::from_str(&json).unwrap();
        assert_eq!(built, back);
    }
}
