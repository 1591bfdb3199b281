//! Masking algorithms and sequence primitives
//!
//! This module provides:
//! - Canonical-form helpers shared by every detector
//! - Run-length and letter-frequency simplicity detection
//! - The Burrows-Wheeler transform pair and composite pattern masking
//! - The per-position scoring seam and the rayon batch helper
//!
//! # Organization
//!
//! - `canonical`: case normalization, mask application, mask counting
//! - `runlength`, `letterfreq`: direct-space detectors
//! - `bwt`, `pattern`: transform pair and transform-space masking
//! - `scoring`: score trait consumed by reporting collaborators
//! - `batch`: parallel masking across independent sequences

pub mod batch;
pub mod bwt;
pub mod canonical;
pub mod letterfreq;
pub mod pattern;
pub mod runlength;
pub mod scoring;

pub use batch::mask_batch;
pub use bwt::{invert, transform, TERMINATOR};
pub use canonical::{apply_mask, canonical, count_masked};
pub use letterfreq::{letterfreq_positions, mask_letterfreq};
pub use pattern::mask_pattern;
pub use runlength::{mask_runlength, runlength_positions};
pub use scoring::{MaskedIndicator, SimplicityScore};
