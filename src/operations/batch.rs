//! Batch masking across independent sequences
//!
//! Each masking call is synchronous and single-threaded; the transform
//! path is deliberately superlinear. Callers with many sequences get
//! their parallelism here instead: sequences share no state, so the
//! batch is embarrassingly parallel under rayon.

use rayon::prelude::*;

use crate::error::Result;
use crate::types::{MaskParams, Masker};

/// Mask a batch of sequences in parallel
///
/// Applies the same masker and parameters to every sequence, preserving
/// input order in the output. Fails fast on the first error.
///
/// # Examples
///
/// ```
/// use seqmask::{mask_batch, MaskParams, Masker};
///
/// # fn main() -> seqmask::Result<()> {
/// let seqs: Vec<&[u8]> = vec![b"AAABBBAAA", b"ACGTACGT"];
/// let masked = mask_batch(Masker::Runlength, &MaskParams::default(), &seqs)?;
/// assert_eq!(masked[0], b"aaabbbaaa");
/// assert_eq!(masked[1], b"ACGTACGT");
/// # Ok(())
/// # }
/// ```
pub fn mask_batch<S>(masker: Masker, params: &MaskParams, seqs: &[S]) -> Result<Vec<Vec<u8>>>
where
    S: AsRef<[u8]> + Sync,
{
    params.validate()?;
    seqs.par_iter()
        .map(|seq| masker.mask(seq.as_ref(), params))
        .collect()
}
