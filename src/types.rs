//! Common types used throughout seqmask

use crate::error::{Result, SeqmaskError};
use crate::operations::{mask_letterfreq, mask_pattern, mask_runlength};

/// Default minimum run length / recurrence count that triggers masking
pub const DEFAULT_CUTOFF: usize = 3;

/// Default maximum positional span for the letter-frequency detector
pub const DEFAULT_WINDOW_SPAN: usize = 10;

/// Masking parameters, constructed once by the caller and passed per call
///
/// There is deliberately no global or persisted configuration inside the
/// core: collaborators (CLI, config files) resolve their settings into a
/// `MaskParams` value and hand it in.
///
/// # Examples
///
/// ```
/// use seqmask::MaskParams;
///
/// let params = MaskParams::default();
/// assert_eq!(params.cutoff, 3);
/// assert_eq!(params.window_span, 10);
///
/// // Out-of-range values are rejected up front
/// assert!(MaskParams::new(0, 10).is_err());
/// assert!(MaskParams::new(3, 2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskParams {
    /// Minimum run length (run-length detector) or minimum recurrence
    /// count (letter-frequency detector) that qualifies as simplicity
    pub cutoff: usize,
    /// Maximum positional distance within which `cutoff` occurrences must
    /// fall (letter-frequency detector only)
    pub window_span: usize,
}

impl Default for MaskParams {
    fn default() -> Self {
        Self { cutoff: DEFAULT_CUTOFF, window_span: DEFAULT_WINDOW_SPAN }
    }
}

impl MaskParams {
    /// Create validated parameters
    ///
    /// # Errors
    ///
    /// Returns [`SeqmaskError::InvalidParameter`] if `cutoff < 1` or
    /// `window_span < 3`.
    pub fn new(cutoff: usize, window_span: usize) -> Result<Self> {
        let params = Self { cutoff, window_span };
        params.validate()?;
        Ok(params)
    }

    /// Create validated parameters with the default window span
    pub fn with_cutoff(cutoff: usize) -> Result<Self> {
        Self::new(cutoff, DEFAULT_WINDOW_SPAN)
    }

    /// Check parameter ranges (`cutoff >= 1`, `window_span >= 3`)
    pub fn validate(&self) -> Result<()> {
        if self.cutoff < 1 {
            return Err(SeqmaskError::InvalidParameter(format!(
                "cutoff must be >= 1, got {}",
                self.cutoff
            )));
        }
        if self.window_span < 3 {
            return Err(SeqmaskError::InvalidParameter(format!(
                "window span must be >= 3, got {}",
                self.window_span
            )));
        }
        Ok(())
    }
}

/// Selectable masking algorithm
///
/// Callers pick a variant value; all variants share the same contract:
/// same-length output, same alphabet up to case, masked positions
/// lowercased.
///
/// # Examples
///
/// ```
/// use seqmask::{MaskParams, Masker};
///
/// let params = MaskParams::default();
/// let masked = Masker::Runlength.mask(b"AAABBBAAA", &params)?;
/// assert_eq!(masked, b"aaabbbaaa");
///
/// // The null masker leaves input untouched
/// let same = Masker::Null.mask(b"AAABBBAAA", &params)?;
/// assert_eq!(same, b"AAABBBAAA");
/// # Ok::<(), seqmask::SeqmaskError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Masker {
    /// Identity: masks nothing
    Null,
    /// Maximal same-character runs of at least `cutoff` symbols
    Runlength,
    /// Symbols recurring at least `cutoff` times within `window_span`
    LetterFrequency,
    /// Run-length simplicity in both direct and Burrows-Wheeler space
    PatternByTransform,
}

impl Masker {
    /// Mask low-complexity positions in `seq` by lowercasing them
    ///
    /// Detection always runs against the uppercase canonical form of the
    /// input; pre-existing lowercase (already masked) positions neither
    /// hide nor create simplicity.
    ///
    /// # Errors
    ///
    /// Returns [`SeqmaskError::InvalidParameter`] on out-of-range
    /// parameters, and [`SeqmaskError::AlphabetViolation`] if the
    /// transform-based masker is given a sequence containing the
    /// terminator symbol.
    pub fn mask(&self, seq: &[u8], params: &MaskParams) -> Result<Vec<u8>> {
        params.validate()?;
        match self {
            Masker::Null => Ok(seq.to_vec()),
            Masker::Runlength => mask_runlength(seq, params.cutoff),
            Masker::LetterFrequency => {
                mask_letterfreq(seq, params.cutoff, params.window_span)
            }
            Masker::PatternByTransform => mask_pattern(seq, params.cutoff),
        }
    }

    /// Short machine-friendly name
    pub fn label(&self) -> &'static str {
        match self {
            Masker::Null => "null",
            Masker::Runlength => "runlength",
            Masker::LetterFrequency => "letterfreq",
            Masker::PatternByTransform => "bwt",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Masker::Null => "no masking",
            Masker::Runlength => "runlength (repeated characters)",
            Masker::LetterFrequency => "letter frequency in window",
            Masker::PatternByTransform => "pattern by Burrows-Wheeler transform",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = MaskParams::default();
        assert_eq!(params.cutoff, DEFAULT_CUTOFF);
        assert_eq!(params.window_span, DEFAULT_WINDOW_SPAN);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_params_rejects_zero_cutoff() {
        assert!(MaskParams::new(0, 10).is_err());
    }

    #[test]
    fn test_params_rejects_narrow_window() {
        assert!(MaskParams::new(3, 2).is_err());
        assert!(MaskParams::new(3, 3).is_ok());
    }

    #[test]
    fn test_null_masker_is_identity() {
        let masked = Masker::Null.mask(b"AAAAAA", &MaskParams::default()).unwrap();
        assert_eq!(masked, b"AAAAAA");
    }

    #[test]
    fn test_mask_validates_params() {
        let bad = MaskParams { cutoff: 0, window_span: 10 };
        assert!(Masker::Runlength.mask(b"AAAA", &bad).is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Masker::Runlength.label(), "runlength");
        assert_eq!(Masker::LetterFrequency.label(), "letterfreq");
        assert_eq!(Masker::PatternByTransform.label(), "bwt");
    }
}
