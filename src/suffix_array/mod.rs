//! Suffix array and LCP array construction.
//!
//! Construction runs in two strictly ordered stages: the rank-doubling
//! sorter produces the suffix array together with its inverse rank table,
//! then Kasai's algorithm turns (text, sa, rank) into the LCP array in a
//! single linear pass. The rank table is internal handoff state between
//! the stages and is not part of the public result.
//!
//! ## Architecture
//!
//! - `builder`: rank-doubling suffix sort and the public entry points
//! - `lcp`: Kasai's linear-time LCP derivation
//! - `types`: result bundle and build configuration
//!
//! ## Conventions
//!
//! `sa` is a permutation of `0..n` with `sa[k]` the start offset of the
//! k-th smallest suffix. `lcp[0]` is 0 (the smallest suffix has no
//! predecessor); `lcp[k]` is the common-prefix length of the suffixes at
//! `sa[k - 1]` and `sa[k]`. Empty input yields two empty arrays.

pub mod builder;
pub mod lcp;
pub mod types;

// Re-exports for convenience
pub use types::{BuildConfig, SuffixLcpArray};
