//! Types for suffix array construction.

use serde::{Deserialize, Serialize};

/// Suffix array and LCP array for a single input, computed as one
/// immutable snapshot.
///
/// Instances only come out of [`SuffixLcpArray::build`] (or its
/// variants), which guarantees the two arrays were derived from the same
/// text in the same call. Fields are private for that reason: an LCP
/// array is only meaningful next to the exact suffix array it was
/// computed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixLcpArray {
    pub(crate) sa: Vec<usize>,
    pub(crate) lcp: Vec<usize>,
}

impl SuffixLcpArray {
    /// The suffix array: `sa()[k]` is the start offset of the k-th
    /// smallest suffix.
    pub fn sa(&self) -> &[usize] {
        &self.sa
    }

    /// The LCP array: `lcp()[k]` is the longest-common-prefix length of
    /// the suffixes at `sa()[k - 1]` and `sa()[k]`; `lcp()[0]` is 0.
    pub fn lcp(&self) -> &[usize] {
        &self.lcp
    }

    /// Length of the input the arrays were built from.
    pub fn len(&self) -> usize {
        self.sa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sa.is_empty()
    }

    /// Consume the bundle, yielding `(sa, lcp)`.
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>) {
        (self.sa, self.lcp)
    }
}

/// Configuration for suffix array building
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Inputs at least this long use rayon's parallel sort inside each
    /// doubling round (default: 100k). Shorter inputs sort sequentially,
    /// where thread fan-out costs more than it saves.
    pub parallel_threshold: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 100_000,
        }
    }
}
