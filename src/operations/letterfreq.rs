//! Letter-frequency simplicity detection
//!
//! Flags any symbol that recurs at least `cutoff` times within a bounded
//! positional span (`window_span`). Unlike the run-length detector this
//! masks single positions, not blocks, so isolated members of a cluster
//! are lowercased individually.
//!
//! The grouping is greedy and leftmost: occurrences of a symbol are
//! walked in ascending order, each one serving as a window start exactly
//! once. Inspected follow-up occurrences stay eligible as later starts.
//! Clusters that only overlap in complicated ways can therefore go
//! under-detected; that is long-standing behavior and callers rely on it.
//!
//! # Examples
//!
//! ```
//! use seqmask::mask_letterfreq;
//!
//! # fn main() -> seqmask::Result<()> {
//! // 'A' occurs 3 times within a span of 4 (< 5): all three masked.
//! let masked = mask_letterfreq(b"AXAXABCDEF", 3, 5)?;
//! assert_eq!(masked, b"aXaXaBCDEF");
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

use crate::error::{Result, SeqmaskError};
use crate::operations::canonical::{apply_mask, canonical};

/// Detect letter-frequency simplicity positions in a canonical sequence
///
/// For each distinct symbol, occurrence positions are collected in
/// ascending order. Repeatedly, the smallest remaining position starts a
/// group; the next `cutoff - 1` occurrences are inspected (not consumed),
/// and if the last of them falls within `window_span` of the start, the
/// start and all inspected positions are flagged. A symbol is done once
/// fewer than `cutoff` occurrences remain unconsumed.
///
/// With `cutoff == 1` the inspection slice is empty and a group is just
/// its start with span 0, so every occurrence is flagged.
///
/// Returns flagged indices in ascending order.
pub fn letterfreq_positions(
    canonical_seq: &[u8],
    cutoff: usize,
    window_span: usize,
) -> Vec<usize> {
    if cutoff == 0 {
        return Vec::new();
    }
    let mut occurrences: BTreeMap<u8, Vec<usize>> = BTreeMap::new();
    for (pos, &symbol) in canonical_seq.iter().enumerate() {
        occurrences.entry(symbol).or_default().push(pos);
    }

    let mut flagged = vec![false; canonical_seq.len()];
    for positions in occurrences.values() {
        let mut next = 0;
        while positions.len() - next >= cutoff {
            let start = positions[next];
            next += 1;
            let inspected = &positions[next..next + cutoff - 1];
            let span_end = inspected.last().copied().unwrap_or(start);
            if span_end - start < window_span {
                flagged[start] = true;
                for &pos in inspected {
                    flagged[pos] = true;
                }
            }
        }
    }
    flagged
        .iter()
        .enumerate()
        .filter_map(|(pos, &hit)| hit.then_some(pos))
        .collect()
}

/// Mask letter-frequency simplicity by lowercasing flagged positions
///
/// Detection runs on the uppercase canonical form of `seq`; each flagged
/// position is lowercased individually in a copy that keeps the original
/// casing elsewhere.
///
/// # Errors
///
/// Returns [`SeqmaskError::InvalidParameter`] if `cutoff < 1` or
/// `window_span < 3`.
pub fn mask_letterfreq(seq: &[u8], cutoff: usize, window_span: usize) -> Result<Vec<u8>> {
    if cutoff < 1 {
        return Err(SeqmaskError::InvalidParameter(format!(
            "cutoff must be >= 1, got {cutoff}"
        )));
    }
    if window_span < 3 {
        return Err(SeqmaskError::InvalidParameter(format!(
            "window span must be >= 3, got {window_span}"
        )));
    }
    let canon = canonical(seq);
    let positions = letterfreq_positions(&canon, cutoff, window_span);
    let mut out = seq.to_vec();
    apply_mask(&mut out, &positions);
    Ok(out)
}
