//! Shift recovery by circular cross-correlation
//!
//! For an observed profile `F` and a reference profile `R` of length `d`, the
//! correlation at shift `s` is `Σ F[i] · R[(i - s) mod d]`. The shift with the
//! largest correlation is the additive key symbol that best explains `F`.
//!
//! Two equivalent evaluations are provided:
//!
//! - [`CorrelationMethod::Direct`] sums the products for every shift, O(d²)
//! - [`CorrelationMethod::Spectral`] takes the inverse transform of
//!   `DFT(F) · conj(DFT(R))` and reads the real part
//!
//! Alphabets are tens of symbols, so the transform is a plain DFT and the
//! direct form is the default.

use std::f64::consts::PI;

use crate::error::{AttackError, Result};

/// Spectral scores within this distance of the maximum count as ties; the
/// transform's rounding error is orders of magnitude smaller.
const SPECTRAL_TIE_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CorrelationMethod {
    #[default]
    Direct,
    Spectral,
}

/// Returns the shift in `0..d` that maximizes the correlation of `observed`
/// against `reference`. Ties resolve to the lowest shift.
///
/// # Errors
///
/// [`AttackError::IncompatibleProfile`] if the vectors differ in length.
pub fn best_shift(observed: &[f64], reference: &[f64], method: CorrelationMethod) -> Result<usize> {
    if observed.len() != reference.len() {
        return Err(AttackError::IncompatibleProfile {
            observed: observed.len(),
            reference: reference.len(),
        });
    }

    let (scores, tolerance) = match method {
        CorrelationMethod::Direct => (cross_correlation(observed, reference), 0.0),
        CorrelationMethod::Spectral => (
            spectral_cross_correlation(observed, reference),
            SPECTRAL_TIE_TOLERANCE,
        ),
    };

    Ok(argmax(&scores, tolerance))
}

/// Correlation at every shift, evaluated term by term.
pub fn cross_correlation(observed: &[f64], reference: &[f64]) -> Vec<f64> {
    let d = observed.len();
    (0..d)
        .map(|shift| {
            observed
                .iter()
                .enumerate()
                .map(|(i, f)| f * reference[(i + d - shift) % d])
                .sum()
        })
        .collect()
}

/// Correlation at every shift, evaluated in the frequency domain.
pub fn spectral_cross_correlation(observed: &[f64], reference: &[f64]) -> Vec<f64> {
    let d = observed.len();
    if d == 0 {
        return Vec::new();
    }

    let observed = dft(&to_complex(observed), Direction::Forward);
    let reference = dft(&to_complex(reference), Direction::Forward);

    let product: Vec<Complex> = observed
        .iter()
        .zip(&reference)
        .map(|(f, r)| f.mul(r.conj()))
        .collect();

    dft(&product, Direction::Inverse)
        .into_iter()
        .map(|value| value.re / d as f64)
        .collect()
}

/// Index of the first score within `tolerance` of the maximum; 0 for an
/// empty slice.
fn argmax(scores: &[f64], tolerance: f64) -> usize {
    let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    scores
        .iter()
        .position(|&score| score >= best - tolerance)
        .unwrap_or(0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    fn mul(self, other: Complex) -> Complex {
        Complex {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    fn conj(self) -> Complex {
        Complex {
            re: self.re,
            im: -self.im,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Inverse,
}

fn to_complex(values: &[f64]) -> Vec<Complex> {
    values.iter().map(|&re| Complex { re, im: 0.0 }).collect()
}

/// Unnormalized DFT; the inverse direction leaves the 1/n scaling to the caller.
fn dft(input: &[Complex], direction: Direction) -> Vec<Complex> {
    let n = input.len();
    let sign = match direction {
        Direction::Forward => -1.0,
        Direction::Inverse => 1.0,
    };

    (0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .fold(Complex::default(), |acc, (t, x)| {
                    // k * t reduced mod n keeps the angle small and exact
                    let angle = sign * 2.0 * PI * ((k * t) % n) as f64 / n as f64;
                    let (sin, cos) = angle.sin_cos();
                    Complex {
                        re: acc.re + x.re * cos - x.im * sin,
                        im: acc.im + x.re * sin + x.im * cos,
                    }
                })
        })
        .collect()
}
