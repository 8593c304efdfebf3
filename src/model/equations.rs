//! Closed-form model equations

use crate::error::{ensure_non_negative, ensure_positive, InhibkinError};

/// Inhibitor concentration after first-order decay
///
/// `C0·e^(−(ka+ke)·t)`. With `ka = ke = 0` the concentration stays at `C0`.
#[inline]
pub fn concentration(t: f64, c0: f64, ka: f64, ke: f64) -> f64 {
    let k_total = ka + ke;
    c0 * (-k_total * t).exp()
}

/// Specific growth rate under competitive inhibition
///
/// `μmax / (1 + C/Ki)`. Fails when `Ki` is not strictly positive, so a zero
/// divisor never turns into infinity or NaN downstream.
#[inline]
pub fn growth_rate(c: f64, mu_max: f64, ki: f64) -> Result<f64, InhibkinError> {
    ensure_positive("ki", ki)?;
    ensure_non_negative("concentration", c)?;
    ensure_non_negative("mu_max", mu_max)?;
    Ok(mu_max / (1.0 + c / ki))
}

/// Logistic biomass at time `t` for a constant specific growth rate `mu`
///
/// `Kmax·N0 / (N0 + (Kmax − N0)·e^(−μ·t))`, evaluated as
/// `Kmax / (1 + (Kmax/N0 − 1)·e^(−μ·t))` so the product `Kmax·N0` is never
/// formed. A result that still leaves the f64 range is an error.
///
/// Two degenerate cases are returned exactly instead of relying on
/// floating-point cancellation: `N0 == Kmax` gives `Kmax` for every t, and
/// `μ·t == 0` gives `N0`.
pub fn biomass(t: f64, n0: f64, k_max: f64, mu: f64) -> Result<f64, InhibkinError> {
    ensure_positive("n0", n0)?;
    ensure_positive("k_max", k_max)?;
    ensure_non_negative("mu", mu)?;
    ensure_non_negative("t", t)?;

    if n0 == k_max {
        return Ok(k_max);
    }
    let exponent = mu * t;
    if exponent == 0.0 {
        return Ok(n0);
    }
    let ratio = k_max / n0;
    let n = k_max / (1.0 + (ratio - 1.0) * (-exponent).exp());
    if !ratio.is_finite() || !n.is_finite() {
        return Err(InhibkinError::invalid(
            "biomass",
            n,
            "not representable for the given n0 and k_max",
        ));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_concentration_at_zero_is_c0() {
        assert_eq!(concentration(0.0, 10.0, 0.1, 0.2), 10.0);
    }

    #[test]
    fn test_concentration_decay() {
        let c = concentration(10.0, 10.0, 0.1, 0.2);
        assert_relative_eq!(c, 10.0 * (-3.0_f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(c, 0.4979, epsilon = 1e-4);
    }

    #[test]
    fn test_concentration_without_kinetics_is_constant() {
        for t in [0.0, 1.0, 100.0] {
            assert_eq!(concentration(t, 0.2, 0.0, 0.0), 0.2);
        }
    }

    #[test]
    fn test_growth_rate_half_at_ki() {
        assert_eq!(growth_rate(2.0, 1.0, 2.0).unwrap(), 0.5);
        assert_eq!(growth_rate(0.0, 0.95, 0.12).unwrap(), 0.95);
    }

    #[test]
    fn test_growth_rate_rejects_zero_ki() {
        let err = growth_rate(1.0, 1.0, 0.0).unwrap_err();
        assert!(matches!(err, InhibkinError::InvalidParameter { .. }));
        assert!(growth_rate(-0.1, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_biomass_initial_value() {
        assert_eq!(biomass(0.0, 1.0, 100.0, 0.5).unwrap(), 1.0);
        assert_eq!(biomass(0.0, 1e6, 1e9, 0.95).unwrap(), 1e6);
    }

    #[test]
    fn test_biomass_reaches_capacity() {
        let n = biomass(100.0, 1.0, 100.0, 0.5).unwrap();
        assert_relative_eq!(n, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_biomass_at_capacity_is_constant() {
        for t in [0.0, 0.5, 3.0, 1e4] {
            assert_eq!(biomass(t, 50.0, 50.0, 0.7).unwrap(), 50.0);
        }
    }

    #[test]
    fn test_biomass_without_growth_stays_at_n0() {
        assert_eq!(biomass(12.0, 3.0, 100.0, 0.0).unwrap(), 3.0);
    }

    #[test]
    fn test_biomass_above_capacity_declines() {
        let n = biomass(1.0, 200.0, 100.0, 0.5).unwrap();
        assert!(n < 200.0 && n > 100.0);
    }

    #[test]
    fn test_biomass_preconditions() {
        assert!(biomass(1.0, 0.0, 100.0, 0.5).is_err());
        assert!(biomass(1.0, 1.0, 0.0, 0.5).is_err());
        assert!(biomass(1.0, 1.0, 100.0, -0.5).is_err());
    }

    #[test]
    fn test_biomass_large_populations_stay_finite() {
        let n = biomass(1.0, 1e200, 1e250, 0.5).unwrap();
        assert!(n.is_finite());
        assert!(n > 1e200 && n < 1e250);
    }

    #[test]
    fn test_biomass_out_of_range_is_rejected() {
        let err = biomass(1.0, 1e-300, 1e300, 0.5).unwrap_err();
        assert!(matches!(err, InhibkinError::InvalidParameter { .. }));
    }
}
