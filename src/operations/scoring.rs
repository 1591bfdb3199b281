//! Per-position simplicity scoring seam
//!
//! Reporting and demo collaborators consume a numeric score per
//! position. The real scoring formula is owned by those consumers, not
//! by this crate, so the seam is a trait: downstream code supplies an
//! implementation, and [`MaskedIndicator`] ships as the placeholder
//! default (1 for masked, 0 for unmasked).

/// A per-position simplicity score over a (possibly masked) sequence
///
/// Implementations must return exactly one value per input position.
pub trait SimplicityScore {
    /// Score each position of `seq`
    fn score(&self, seq: &[u8]) -> Vec<u32>;
}

/// Placeholder scorer: 1 for masked (lowercase) positions, 0 otherwise
///
/// # Examples
///
/// ```
/// use seqmask::{MaskedIndicator, SimplicityScore};
///
/// let scores = MaskedIndicator.score(b"AAcgAA");
/// assert_eq!(scores, vec![0, 0, 1, 1, 0, 0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MaskedIndicator;

impl SimplicityScore for MaskedIndicator {
    fn score(&self, seq: &[u8]) -> Vec<u32> {
        seq.iter()
            .map(|b| u32::from(b.is_ascii_lowercase()))
            .collect()
    }
}
