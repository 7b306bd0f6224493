#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Build on arbitrary bytes and check the structural invariants:
    // permutation, strict suffix order, exact LCP values.
    let built = salcp::SuffixLcpArray::build(data);
    let (sa, lcp) = (built.sa(), built.lcp());
    assert_eq!(sa.len(), data.len());
    assert_eq!(lcp.len(), data.len());

    if let Some(&first) = lcp.first() {
        assert_eq!(first, 0);
    }

    let mut seen = vec![false; sa.len()];
    for &p in sa {
        assert!(!seen[p]);
        seen[p] = true;
    }

    for k in 1..sa.len() {
        let prev = &data[sa[k - 1]..];
        let curr = &data[sa[k]..];
        assert!(prev < curr);

        let h = lcp[k];
        assert_eq!(&prev[..h], &curr[..h]);
        if h < prev.len() && h < curr.len() {
            assert_ne!(prev[h], curr[h]);
        }
    }
});
