//! Burrows-Wheeler transform for pattern-level simplicity detection
//!
//! The transform sorts all cyclic rotations of `sequence + terminator`
//! and keeps the last column. Symbols that share right-hand context in
//! the original order end up adjacent in the transformed string, so
//! periodic repeats that are invisible to a direct run scan become plain
//! runs in transform space.
//!
//! Both directions deliberately use the naive rotation sort: at
//! single-sequence scale exactness of the round-trip matters and the
//! O(n^2 log n) cost does not. Callers processing many sequences should
//! parallelize across sequences instead (see
//! [`mask_batch`](crate::mask_batch)).
//!
//! The inverse tolerates mixed-case input: its sort key is computed on
//! the case-folded form, so lowercase mask annotations ride through the
//! reconstruction as plain data.
//!
//! # Examples
//!
//! ```
//! use seqmask::{invert, transform};
//!
//! # fn main() -> seqmask::Result<()> {
//! let transformed = transform(b"BANANA")?;
//! assert_eq!(transformed, b"ANNB$AA");
//! assert_eq!(invert(&transformed)?, b"BANANA");
//! # Ok(())
//! # }
//! ```

use std::cmp::Ordering;

use crate::error::{Result, SeqmaskError};

/// Sentinel appended to anchor rotations; must not occur in the input
pub const TERMINATOR: u8 = b'$';

/// Comparison rank treating the terminator as strictly lowest
///
/// Raw byte order would put printable symbols like '!' below '$'; the
/// explicit rank keeps the terminator first for any working alphabet.
#[inline]
fn symbol_rank(symbol: u8) -> u16 {
    if symbol == TERMINATOR {
        0
    } else {
        u16::from(symbol) + 1
    }
}

/// Case-folded comparison rank, terminator still lowest
///
/// Used by the inverse so that mask annotations (lowercase) never affect
/// row ordering.
#[inline]
fn folded_rank(symbol: u8) -> u16 {
    if symbol == TERMINATOR {
        0
    } else {
        u16::from(symbol.to_ascii_uppercase()) + 1
    }
}

fn cmp_rotations(a: &[u8], b: &[u8]) -> Ordering {
    a.iter().map(|&x| symbol_rank(x)).cmp(b.iter().map(|&x| symbol_rank(x)))
}

fn cmp_folded(a: &[u8], b: &[u8]) -> Ordering {
    a.iter().map(|&x| folded_rank(x)).cmp(b.iter().map(|&x| folded_rank(x)))
}

/// Forward Burrows-Wheeler transform
///
/// Appends the terminator, sorts all `n + 1` cyclic rotations, and
/// returns the last column (length `n + 1`).
///
/// Detection callers pass the canonical (uppercase) form; the forward
/// sort compares symbols as-is.
///
/// # Errors
///
/// Returns [`SeqmaskError::AlphabetViolation`] if `seq` contains the
/// terminator symbol.
pub fn transform(seq: &[u8]) -> Result<Vec<u8>> {
    if let Some(position) = seq.iter().position(|&b| b == TERMINATOR) {
        return Err(SeqmaskError::AlphabetViolation { position, symbol: TERMINATOR });
    }
    let mut anchored = Vec::with_capacity(seq.len() + 1);
    anchored.extend_from_slice(seq);
    anchored.push(TERMINATOR);
    let n = anchored.len();

    let mut rotations: Vec<Vec<u8>> = (0..n)
        .map(|start| {
            let mut rotation = Vec::with_capacity(n);
            rotation.extend_from_slice(&anchored[start..]);
            rotation.extend_from_slice(&anchored[..start]);
            rotation
        })
        .collect();
    rotations.sort_by(|a, b| cmp_rotations(a, b));

    Ok(rotations.iter().map(|rotation| rotation[n - 1]).collect())
}

/// Inverse Burrows-Wheeler transform, tolerant of case annotations
///
/// Reconstructs by iterative column accumulation: `n` rounds of
/// prepending the transformed string column-wise to every row, then
/// re-sorting rows on their case-folded form. After the final round the
/// row ending in the terminator is the original sequence (terminator
/// stripped), with any lowercase annotations carried through at their
/// original positions.
///
/// # Errors
///
/// Returns [`SeqmaskError::InvalidTransform`] if `transformed` is empty
/// or no reconstructed rotation ends with the terminator (i.e. the input
/// was not produced by [`transform`]).
pub fn invert(transformed: &[u8]) -> Result<Vec<u8>> {
    let n = transformed.len();
    if n == 0 {
        return Err(SeqmaskError::InvalidTransform(
            "empty transformed string".to_string(),
        ));
    }

    let mut rows: Vec<Vec<u8>> = vec![Vec::new(); n];
    for _ in 0..n {
        for (row, &symbol) in rows.iter_mut().zip(transformed) {
            row.insert(0, symbol);
        }
        rows.sort_by(|a, b| cmp_folded(a, b));
    }

    let mut original = rows
        .into_iter()
        .find(|row| row.last() == Some(&TERMINATOR))
        .ok_or_else(|| {
            SeqmaskError::InvalidTransform(
                "no reconstructed rotation ends with the terminator".to_string(),
            )
        })?;
    original.pop();
    Ok(original)
}
