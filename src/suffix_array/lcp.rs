//! LCP array construction via Kasai's algorithm.
//!
//! Walks positions in original text order, not rank order, carrying a
//! running overlap `h`: dropping the first symbol of two suffixes with a
//! common prefix of length h leaves a common prefix of at least h - 1, so
//! each position starts its comparison where the previous one left off.
//! `h` falls by at most one per position and its total growth is bounded
//! by n, making the whole pass O(n).

/// Compute the LCP array for `text` given its suffix array and the rank
/// table (inverse permutation) produced alongside it.
///
/// `lcp[0]` is 0 by convention; for k >= 1, `lcp[k]` is the length of the
/// longest common prefix of the suffixes starting at `sa[k - 1]` and
/// `sa[k]`.
pub(crate) fn lcp_array<T: Eq>(text: &[T], sa: &[usize], rank: &[usize]) -> Vec<usize> {
    let n = text.len();
    let mut lcp = vec![0usize; n];

    let mut h = 0usize;
    for i in 0..n {
        if rank[i] == 0 {
            // Smallest suffix, no predecessor. h is already 0 here: a
            // carried overlap would imply a lexicographic predecessor.
            continue;
        }
        let prev = sa[rank[i] - 1];
        while i + h < n && prev + h < n && text[i + h] == text[prev + h] {
            h += 1;
        }
        lcp[rank[i]] = h;
        h = h.saturating_sub(1);
    }

    lcp
}
