//! NFW enclosed-mass fitting function and its semi-analytic inverse.
//!
//! For an NFW halo with normalization ρ_s and scale radius r_s, the mass
//! enclosed within a radius r is
//!
//! `M = 4π ρ_s r³ f(r_s / r)`, with
//!
//! `f(x) = x³ (ln(1 + 1/x) − 1/(1 + x))`
//!
//! Hu & Kravtsov (2002, ApJ 584, 702, appendix C) give a closed-form
//! approximation to the inverse `x(f)`:
//!
//! `x(f) = [a1 f^(2p) + (3/4)²]^(−1/2) + 2f`,
//! `p = a2 + a3 ln f + a4 (ln f)²`
//!
//! with `a1 = 0.5116`, `a2 = −0.4283`, `a3 = −3.13e−3`, `a4 = −3.52e−5`.
//!
//! The inverse is a fit, not an exact inversion; its residual is a few
//! tenths of a percent on concentration. Conversions built on it inherit
//! that error, including the nominally-identity case (same definition in
//! and out).

use crate::error::ConvertError;

const A1: f64 = 0.5116;
const A2: f64 = -0.4283;
const A3: f64 = -3.13e-3;
const A4: f64 = -3.52e-5;

/// Forward fitting function `f(x)`.
///
/// Monotonically increasing from 0 for x > 0. No domain check is performed;
/// callers must supply positive x (equivalently, positive concentration).
pub fn fhalo_ffunc(x: f64) -> f64 {
    x * x * x * ((1.0 + 1.0 / x).ln() - 1.0 / (1.0 + x))
}

/// Hu & Kravtsov (2002) approximation to the inverse `x(f)`.
///
/// Fails with `Domain` when `f <= 0` (the logarithm is undefined there; the
/// reference implementation silently produced NaN instead).
pub fn inv_fhalo_ffunc(f: f64) -> Result<f64, ConvertError> {
    if !(f > 0.0) {
        return Err(ConvertError::domain(format!(
            "inverse NFW fitting function requires f > 0, got {f}"
        )));
    }
    let lnf = f.ln();
    let p = A2 + A3 * lnf + A4 * (lnf * lnf);
    Ok((A1 * f.powf(2.0 * p) + 0.5625).powf(-0.5) + 2.0 * f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_at_one() {
        // f(1) = ln 2 - 1/2.
        let expected = std::f64::consts::LN_2 - 0.5;
        let got = fhalo_ffunc(1.0);
        assert!((got - expected).abs() < 1e-15, "f(1) = {got}");
    }

    #[test]
    fn forward_is_monotone_increasing() {
        let mut prev = 0.0;
        for i in 1..200 {
            let x = i as f64 * 0.05;
            let v = fhalo_ffunc(x);
            assert!(v > prev, "f not increasing at x={x}");
            prev = v;
        }
    }

    #[test]
    fn inverse_residual_within_half_percent() {
        // x = 1/c over the concentration range the fit was calibrated for.
        for i in 0..50 {
            let c = 2.0 + 0.16 * i as f64;
            let x = 1.0 / c;
            let back = inv_fhalo_ffunc(fhalo_ffunc(x)).unwrap();
            let rel = (back - x).abs() / x;
            assert!(rel < 5e-3, "round-trip at c={c}: rel err {rel}");
        }
    }

    #[test]
    fn inverse_rejects_nonpositive() {
        assert!(matches!(
            inv_fhalo_ffunc(0.0),
            Err(ConvertError::Domain { .. })
        ));
        assert!(matches!(
            inv_fhalo_ffunc(-1.0),
            Err(ConvertError::Domain { .. })
        ));
        assert!(matches!(
            inv_fhalo_ffunc(f64::NAN),
            Err(ConvertError::Domain { .. })
        ));
    }
}
