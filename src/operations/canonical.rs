//! Canonical-form helpers shared by every detector
//!
//! Case carries meaning throughout seqmask: uppercase = unmasked,
//! lowercase = masked. Detection decisions are always made against the
//! uppercase canonical form of a sequence, never against a buffer that
//! the same pass has already partially lowercased. These helpers keep
//! that snapshot-then-apply discipline in one place.

/// Uppercase canonical form of a sequence, used purely for detection
///
/// # Examples
///
/// ```
/// use seqmask::canonical;
///
/// assert_eq!(canonical(b"acgTT"), b"ACGTT");
/// ```
pub fn canonical(seq: &[u8]) -> Vec<u8> {
    seq.to_ascii_uppercase()
}

/// Lowercase the given positions of `seq`, in ascending order
///
/// Positions past the end of the buffer are ignored. Lowercasing an
/// already-lowercase (or caseless) byte is a no-op, so applying the same
/// mask twice is idempotent.
pub fn apply_mask(seq: &mut [u8], positions: &[usize]) {
    for &pos in positions {
        if let Some(symbol) = seq.get_mut(pos) {
            symbol.make_ascii_lowercase();
        }
    }
}

/// Count masked (lowercase) positions in a sequence
///
/// Useful for QC metrics after masking operations.
///
/// # Examples
///
/// ```
/// use seqmask::count_masked;
///
/// assert_eq!(count_masked(b"ACGT"), 0);
/// assert_eq!(count_masked(b"aaaBBBaaa"), 6);
/// ```
pub fn count_masked(seq: &[u8]) -> usize {
    seq.iter().filter(|b| b.is_ascii_lowercase()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_uppercases() {
        assert_eq!(canonical(b"aCgT"), b"ACGT");
    }

    #[test]
    fn test_canonical_preserves_caseless_symbols() {
        assert_eq!(canonical(b"ac-gt$"), b"AC-GT$");
    }

    #[test]
    fn test_apply_mask_single_positions() {
        let mut seq = b"ACGTACGT".to_vec();
        apply_mask(&mut seq, &[0, 4]);
        assert_eq!(seq, b"aCGTaCGT");
    }

    #[test]
    fn test_apply_mask_idempotent() {
        let mut seq = b"ACGT".to_vec();
        apply_mask(&mut seq, &[1, 2]);
        let once = seq.clone();
        apply_mask(&mut seq, &[1, 2]);
        assert_eq!(seq, once);
    }

    #[test]
    fn test_apply_mask_out_of_range_ignored() {
        let mut seq = b"AC".to_vec();
        apply_mask(&mut seq, &[0, 99]);
        assert_eq!(seq, b"aC");
    }

    #[test]
    fn test_count_masked_mixed() {
        assert_eq!(count_masked(b"AcGt"), 2);
        assert_eq!(count_masked(b""), 0);
    }
}
