//! seqmask: low-complexity masking for biological sequences
//!
//! # Overview
//!
//! seqmask detects and marks ("masks") low-complexity, highly repetitive
//! stretches of residue sequences so that downstream comparison and
//! indexing can down-weight uninformative repeats. Masked positions are
//! lowercased; sequence length and (case-folded) alphabet are never
//! changed.
//!
//! ## Algorithms
//!
//! - **Run-length**: maximal same-character runs of at least `cutoff`
//! - **Letter frequency**: symbols recurring at least `cutoff` times
//!   within a bounded window
//! - **Pattern by Burrows-Wheeler transform**: run-length simplicity in
//!   both the original order and the transform's reordered space, where
//!   periodic repeats cluster into plain runs
//!
//! ## Quick Start
//!
//! ```
//! use seqmask::{MaskParams, Masker};
//!
//! # fn main() -> seqmask::Result<()> {
//! let params = MaskParams::default();
//!
//! // Contiguous repeats
//! let masked = Masker::Runlength.mask(b"AAABBBAAA", &params)?;
//! assert_eq!(masked, b"aaabbbaaa");
//!
//! // Periodic repeats, invisible to a direct scan
//! let masked = Masker::PatternByTransform.mask(b"ABCABCABCABC", &params)?;
//! assert_eq!(masked, b"abcabcabcabc");
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`operations`]: detectors, the Burrows-Wheeler transform pair,
//!   scoring seam, and batch helper
//! - [`types`]: [`Masker`] algorithm selection and [`MaskParams`]
//! - [`error`]: error types
//!
//! Every call is synchronous and pure over its inputs; there is no
//! global configuration and no I/O in the core. Use
//! [`mask_batch`] to parallelize across many sequences.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod operations;
pub mod types;

// Re-export commonly used items
pub use error::{Result, SeqmaskError};
pub use operations::{
    apply_mask, canonical, count_masked, invert, letterfreq_positions, mask_batch,
    mask_letterfreq, mask_pattern, mask_runlength, runlength_positions, transform,
    MaskedIndicator, SimplicityScore, TERMINATOR,
};
pub use types::{MaskParams, Masker, DEFAULT_CUTOFF, DEFAULT_WINDOW_SPAN};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
