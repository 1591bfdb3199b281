//! Run-length simplicity detection
//!
//! Flags maximal same-character runs of at least `cutoff` symbols. Every
//! window of `cutoff` equal symbols is flagged whole, and overlapping
//! windows union, so a run of length `L >= cutoff` is masked across its
//! full extent.
//!
//! # Examples
//!
//! ```
//! use seqmask::mask_runlength;
//!
//! # fn main() -> seqmask::Result<()> {
//! // Runs of 3+ identical residues are lowercased
//! let masked = mask_runlength(b"AAABBBAAA", 3)?;
//! assert_eq!(masked, b"aaabbbaaa");
//!
//! // No run reaches length 5: nothing masked
//! let masked = mask_runlength(b"AAAABBBB", 5)?;
//! assert_eq!(masked, b"AAAABBBB");
//! # Ok(())
//! # }
//! ```

use crate::error::{Result, SeqmaskError};
use crate::operations::canonical::{apply_mask, canonical};

/// Detect run-length simplicity positions in a canonical sequence
///
/// For every start index `i`, tests whether the `cutoff` consecutive
/// symbols beginning at `i` are all equal; if so, the whole window
/// `[i, i + cutoff)` is flagged. Returns the union of all flagged
/// windows as ascending indices.
///
/// `canonical_seq` must already be case-normalized (see
/// [`canonical`](crate::canonical)); this function compares bytes as-is.
/// A sequence shorter than `cutoff` yields no positions, as does
/// `cutoff == 0`.
pub fn runlength_positions(canonical_seq: &[u8], cutoff: usize) -> Vec<usize> {
    if cutoff == 0 || canonical_seq.len() < cutoff {
        return Vec::new();
    }
    let mut flagged = vec![false; canonical_seq.len()];
    for start in 0..=canonical_seq.len() - cutoff {
        let first = canonical_seq[start];
        if canonical_seq[start..start + cutoff].iter().all(|&b| b == first) {
            for slot in &mut flagged[start..start + cutoff] {
                *slot = true;
            }
        }
    }
    flagged
        .iter()
        .enumerate()
        .filter_map(|(pos, &hit)| hit.then_some(pos))
        .collect()
}

/// Mask run-length simplicity by lowercasing flagged positions
///
/// Detection runs on the uppercase canonical form of `seq`; the mask is
/// then applied to a copy that keeps the original casing elsewhere.
///
/// # Errors
///
/// Returns [`SeqmaskError::InvalidParameter`] if `cutoff < 1`.
pub fn mask_runlength(seq: &[u8], cutoff: usize) -> Result<Vec<u8>> {
    if cutoff < 1 {
        return Err(SeqmaskError::InvalidParameter(format!(
            "cutoff must be >= 1, got {cutoff}"
        )));
    }
    let canon = canonical(seq);
    let positions = runlength_positions(&canon, cutoff);
    let mut out = seq.to_vec();
    apply_mask(&mut out, &positions);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Detection Tests =====

    #[test]
    fn test_detect_exact_run() {
        assert_eq!(runlength_positions(b"AAA", 3), vec![0, 1, 2]);
    }

    #[test]
    fn test_detect_long_run_covered_whole() {
        // Every interior start also satisfies the window test, so the
        // union covers the full run, not just the first window.
        assert_eq!(runlength_positions(b"BAAAAAB", 3), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_detect_no_run() {
        assert!(runlength_positions(b"ABABAB", 3).is_empty());
    }

    #[test]
    fn test_detect_short_sequence() {
        assert!(runlength_positions(b"AA", 3).is_empty());
        assert!(runlength_positions(b"", 3).is_empty());
    }

    #[test]
    fn test_detect_cutoff_one_flags_everything() {
        assert_eq!(runlength_positions(b"ABC", 1), vec![0, 1, 2]);
    }

    #[test]
    fn test_detect_positions_ascending() {
        let positions = runlength_positions(b"AAABBBCCC", 3);
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    // ===== Masking Tests =====

    #[test]
    fn test_mask_adjacent_runs() {
        let masked = mask_runlength(b"AAABBBAAA", 3).unwrap();
        assert_eq!(masked, b"aaabbbaaa");
    }

    #[test]
    fn test_mask_below_cutoff_unchanged() {
        let masked = mask_runlength(b"AAAABBBB", 5).unwrap();
        assert_eq!(masked, b"AAAABBBB");
    }

    #[test]
    fn test_mask_partial() {
        let masked = mask_runlength(b"ACGTTTTACG", 4).unwrap();
        assert_eq!(masked, b"ACGttttACG");
    }

    #[test]
    fn test_mask_detects_through_existing_lowercase() {
        // Detection is case-blind: a half-masked run still counts as a run.
        let masked = mask_runlength(b"AaAGCT", 3).unwrap();
        assert_eq!(masked, b"aaaGCT");
    }

    #[test]
    fn test_mask_rejects_zero_cutoff() {
        assert!(mask_runlength(b"AAAA", 0).is_err());
    }

    #[test]
    fn test_mask_empty_sequence() {
        assert_eq!(mask_runlength(b"", 3).unwrap(), b"");
    }

    // ===== Property-Based Tests =====

    mod properties {
        use super::*;
        use crate::operations::canonical::canonical;
        use proptest::prelude::*;

        proptest! {
            /// Property: masking preserves sequence length
            #[test]
            fn prop_mask_preserves_length(seq in "[A-Z]{0,64}", cutoff in 1usize..8) {
                let masked = mask_runlength(seq.as_bytes(), cutoff).unwrap();
                prop_assert_eq!(masked.len(), seq.len());
            }

            /// Property: masking changes case only, never symbol values
            #[test]
            fn prop_mask_preserves_alphabet(seq in "[A-Z]{0,64}", cutoff in 1usize..8) {
                let masked = mask_runlength(seq.as_bytes(), cutoff).unwrap();
                prop_assert_eq!(canonical(&masked), canonical(seq.as_bytes()));
            }

            /// Property: masking twice is a fixed point
            #[test]
            fn prop_mask_idempotent(seq in "[A-Z]{0,64}", cutoff in 1usize..8) {
                let once = mask_runlength(seq.as_bytes(), cutoff).unwrap();
                let twice = mask_runlength(&once, cutoff).unwrap();
                prop_assert_eq!(twice, once);
            }

            /// Property: every masked position sits inside a run of >= cutoff
            #[test]
            fn prop_masked_positions_are_in_runs(seq in "[AB]{0,48}", cutoff in 2usize..5) {
                let masked = mask_runlength(seq.as_bytes(), cutoff).unwrap();
                let bytes = seq.as_bytes();
                for (pos, &symbol) in masked.iter().enumerate() {
                    if symbol.is_ascii_lowercase() {
                        // walk out to the maximal run containing pos
                        let mut lo = pos;
                        while lo > 0 && bytes[lo - 1] == bytes[pos] {
                            lo -= 1;
                        }
                        let mut hi = pos;
                        while hi + 1 < bytes.len() && bytes[hi + 1] == bytes[pos] {
                            hi += 1;
                        }
                        prop_assert!(hi - lo + 1 >= cutoff);
                    }
                }
            }
        }
    }
}
