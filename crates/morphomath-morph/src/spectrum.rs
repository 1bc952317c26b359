//! Spectral peak extraction
//!
//! Bridges a decibel power spectrum to the morphology engine: the spectrum
//! is quantized to non-negative integers, its h-domes are extracted, and the
//! most prominent dome locates the dominant spectral peak. Mapping a bin
//! index back to a frequency is left to the caller.

use crate::MorphResult;
use crate::reconstruct::h_dome;
use morphomath_core::Function;

/// Quantize a decibel spectrum into a function over `[0, N - 1]`
///
/// Values are truncated toward zero; negative and non-finite values
/// become 0.
pub fn quantize_decibels(decibels: &[f64]) -> MorphResult<Function> {
    let values = decibels
        .iter()
        .map(|&db| {
            if db.is_finite() && db > 0.0 {
                db.trunc() as i64
            } else {
                0
            }
        })
        .collect();
    Ok(Function::from_vec(values)?)
}

/// h-domes of a decibel spectrum, one value per bin
///
/// `height` is the minimal prominence of the peaks, in dB.
pub fn spectrum_h_dome(decibels: &[f64], height: i64) -> MorphResult<Vec<i64>> {
    let spectrum = quantize_decibels(decibels)?;
    Ok(h_dome(&spectrum, height)?.into_vec())
}

/// Bin index of the most prominent spectral peak
///
/// Ties go to the lowest bin.
pub fn prominent_peak(decibels: &[f64], height: i64) -> MorphResult<usize> {
    let spectrum = quantize_decibels(decibels)?;
    let domes = h_dome(&spectrum, height)?;
    Ok(domes.argmax() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MorphError;

    #[test]
    fn test_quantize_truncates_and_clamps() {
        let f = quantize_decibels(&[12.9, -3.5, 0.4, f64::NAN, f64::INFINITY, 7.0]).unwrap();
        assert_eq!(f.as_slice(), &[12, 0, 0, 0, 0, 7]);
    }

    #[test]
    fn test_quantize_empty_error() {
        assert!(matches!(
            quantize_decibels(&[]),
            Err(MorphError::Core(morphomath_core::Error::EmptyInput))
        ));
    }

    #[test]
    fn test_spectrum_h_dome() {
        let db = [1.0, 2.5, 30.2, 3.0, 1.0, 12.8, 1.0];
        assert_eq!(
            spectrum_h_dome(&db, 10).unwrap(),
            vec![0, 0, 10, 0, 0, 10, 0]
        );
    }

    #[test]
    fn test_prominent_peak() {
        let db = [3.0, 4.0, 3.0, 2.0, 1.0, 18.0, 1.0];
        assert_eq!(spectrum_h_dome(&db, 8).unwrap(), vec![2, 3, 2, 1, 0, 8, 0]);
        assert_eq!(prominent_peak(&db, 8).unwrap(), 5);
    }

    #[test]
    fn test_prominent_peak_ties_go_to_lowest_bin() {
        // Every dome is cut to the requested height, so equally prominent
        // peaks tie.
        let db = [30.0, 31.0, 30.0, 29.0, 2.0, 12.0, 1.0];
        assert_eq!(spectrum_h_dome(&db, 8).unwrap(), vec![7, 8, 7, 6, 0, 8, 0]);
        assert_eq!(prominent_peak(&db, 8).unwrap(), 1);
    }

    #[test]
    fn test_prominent_peak_invalid_height() {
        assert!(prominent_peak(&[1.0, 2.0], 0).is_err());
    }
}
