//! Pattern-level simplicity via the Burrows-Wheeler transform
//!
//! Combines run-length detection in the original symbol order with
//! run-length detection in transform space. Repeats that are periodic
//! rather than contiguous (`ABCABCABC...`) produce no direct runs but
//! cluster into plain runs after the transform; masking those runs and
//! inverting maps the findings back to the original positions.
//!
//! # Examples
//!
//! ```
//! use seqmask::{mask_pattern, mask_runlength};
//!
//! # fn main() -> seqmask::Result<()> {
//! // No contiguous run of 3, so the direct detector finds nothing...
//! assert_eq!(mask_runlength(b"ABCABCABCABC", 3)?, b"ABCABCABCABC");
//!
//! // ...but the periodic repeat is fully visible in transform space.
//! assert_eq!(mask_pattern(b"ABCABCABCABC", 3)?, b"abcabcabcabc");
//! # Ok(())
//! # }
//! ```

use crate::error::{Result, SeqmaskError};
use crate::operations::bwt::{invert, transform};
use crate::operations::canonical::{apply_mask, canonical};
use crate::operations::runlength::runlength_positions;

/// Mask simplicity found in both direct and Burrows-Wheeler space
///
/// Runs the run-length detector twice: once over the canonical input,
/// and once over its transform (where the terminator participates as an
/// ordinary symbol; being unique it can only join a run at cutoff 1, and
/// it has no lowercase form). Transform-space findings are lowercased
/// within the transformed string, carried through the inverse transform,
/// and unioned with the direct findings.
///
/// # Errors
///
/// Returns [`SeqmaskError::InvalidParameter`] if `cutoff < 1`, and
/// [`SeqmaskError::AlphabetViolation`] if `seq` contains the terminator
/// symbol.
pub fn mask_pattern(seq: &[u8], cutoff: usize) -> Result<Vec<u8>> {
    if cutoff < 1 {
        return Err(SeqmaskError::InvalidParameter(format!(
            "cutoff must be >= 1, got {cutoff}"
        )));
    }
    let canon = canonical(seq);
    let mut out = seq.to_vec();

    // direct space
    apply_mask(&mut out, &runlength_positions(&canon, cutoff));

    // transform space
    let mut transformed = transform(&canon)?;
    let transform_hits = runlength_positions(&transformed, cutoff);
    apply_mask(&mut transformed, &transform_hits);

    // map transform-space findings back to original order
    let restored = invert(&transformed)?;
    debug_assert_eq!(restored.len(), out.len());
    for (slot, &symbol) in out.iter_mut().zip(&restored) {
        if symbol.is_ascii_lowercase() {
            slot.make_ascii_lowercase();
        }
    }
    Ok(out)
}
