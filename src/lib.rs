//! # salcp - Suffix Array + LCP Construction
//!
//! salcp builds the two companion artifacts that power substring search,
//! longest-repeated-substring queries, and text indexing: the suffix array
//! (all suffixes of a text, sorted lexicographically and represented by
//! their starting offsets) and the LCP array (prefix overlap between
//! lexicographically adjacent suffixes).
//!
//! ## Architecture
//!
//! The crate is a single pipeline of two stages:
//!
//! 1. **Rank-doubling sort** ([`suffix_array::builder`]) - sorts all
//!    suffixes by repeatedly refining per-position ranks over prefixes of
//!    doubling length, O(n log n) comparisons total.
//! 2. **Kasai's pass** ([`suffix_array::lcp`]) - derives the LCP array
//!    from the finished suffix array and rank table in one linear sweep.
//!
//! Both stages are bundled behind [`SuffixLcpArray::build`]; the
//! intermediate rank table never escapes, so the LCP pass can never be fed
//! a mismatched suffix array.
//!
//! ## Quick Start
//!
//! ```
//! use salcp::SuffixLcpArray;
//!
//! let built = SuffixLcpArray::from_text("banana");
//! assert_eq!(built.sa(), [5, 3, 1, 0, 4, 2]);
//! assert_eq!(built.lcp(), [0, 1, 3, 0, 0, 2]);
//! ```
//!
//! ## Performance
//!
//! Construction is O(n log n) time and O(n) space. Inputs above a
//! configurable length threshold use rayon's parallel sort inside each
//! doubling round; sequential and parallel paths produce identical output.

pub mod suffix_array;

pub use suffix_array::{BuildConfig, SuffixLcpArray};
