use std::error;
use std::fmt;

use crate::utils;

#[derive(Debug, Clone, PartialEq)]
pub struct InvalidRangeError {
    pub min_db: f64,
    pub max_db: f64,
}

impl fmt::Display for InvalidRangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid decibel range: {} dB must be below {} dB and both must map to finite, non zero gains",
               self.min_db, self.max_db)
    }
}

impl error::Error for InvalidRangeError {}

#[derive(Debug, Clone, PartialEq)]
pub struct InvalidSizeError {
    pub size: usize,
}

impl fmt::Display for InvalidSizeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid table size {}: need at least 2 entries", self.size)
    }
}

impl error::Error for InvalidSizeError {}

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationError {
    InvalidRange(InvalidRangeError),
    InvalidSize(InvalidSizeError),
}

impl GenerationError {
    pub fn invalid_range(min_db: f64, max_db: f64) -> GenerationError {
        GenerationError::InvalidRange(InvalidRangeError { min_db, max_db })
    }
    pub fn invalid_size(size: usize) -> GenerationError {
        GenerationError::InvalidSize(InvalidSizeError { size })
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &*self {
            GenerationError::InvalidRange(ir) => ir.fmt(f),
            GenerationError::InvalidSize(is) => is.fmt(f),
        }
    }
}

impl error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            GenerationError::InvalidRange(ir) => Some(ir),
            GenerationError::InvalidSize(is) => Some(is),
        }
    }
}

impl From<InvalidRangeError> for GenerationError {
    fn from(e: InvalidRangeError) -> Self {
        GenerationError::InvalidRange(e)
    }
}

impl From<InvalidSizeError> for GenerationError {
    fn from(e: InvalidSizeError) -> Self {
        GenerationError::InvalidSize(e)
    }
}

// The table is stored and sampled in single precision, so the bounds and
// their gains have to survive the conversion to f32.
pub fn range_check(min_db: f64, max_db: f64) -> Result<(), InvalidRangeError> {
    let (lo, hi) = (min_db as f32, max_db as f32);
    match (lo, hi) {
        (lo, hi) if lo.is_finite() && hi.is_finite() && lo < hi
            && utils::dB_to_gain(min_db) as f32 > 0.0
            && (utils::dB_to_gain(max_db) as f32).is_finite() => Ok(()),
        _ => Err(InvalidRangeError { min_db, max_db }),
    }
}

pub fn size_check(size: usize) -> Result<usize, InvalidSizeError> {
    match size {
        s if s >= 2 => Ok(s),
        _ => Err(InvalidSizeError { size }),
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn accept_valid_range() {
        assert!(range_check(-96.0, 12.0).is_ok());
        assert!(range_check(-1e-9, 0.0).is_ok());
    }

    #[test]
    fn reject_flipped_or_empty_range() {
        assert_eq!(range_check(12.0, -96.0), Err(InvalidRangeError { min_db: 12.0, max_db: -96.0 }));
        assert!(range_check(0.0, 0.0).is_err());
    }

    #[test]
    fn reject_non_finite_range() {
        assert!(range_check(f64::NAN, 0.0).is_err());
        assert!(range_check(-96.0, f64::INFINITY).is_err());
        assert!(range_check(f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn reject_unrepresentable_range() {
        assert!(range_check(-1000.0, 0.0).is_err());
        assert!(range_check(0.0, 800.0).is_err());
        assert!(range_check(1.0, 1.0 + 1e-12).is_err());
        assert!(range_check(-700.0, 700.0).is_ok());
    }

    #[test]
    fn check_size() {
        assert_eq!(size_check(0), Err(InvalidSizeError { size: 0 }));
        assert_eq!(size_check(1), Err(InvalidSizeError { size: 1 }));
        assert_eq!(size_check(2), Ok(2));
    }

    #[test]
    fn error_messages() {
        assert_eq!(GenerationError::invalid_size(1).to_string(), "Invalid table size 1: need at least 2 entries");
        assert_eq!(GenerationError::invalid_range(3.0, 1.0).to_string(),
                   "Invalid decibel range: 3 dB must be below 1 dB and both must map to finite, non zero gains");
    }
}
