use crate::constants::WEIGHT_ADJUSTMENT_PER_TONNE;
use crate::error::{AppError, Result};
use crate::models::{DieselParameters, ElectricParameters, HybridParameters};

/// Weight multiplier shared by every propulsion mode: +5% per tonne of cargo
pub fn adjustment_factor(weight_tonnes: f64) -> f64 {
    1.0 + weight_tonnes * WEIGHT_ADJUSTMENT_PER_TONNE
}

/// Round to 2 decimal places on the exact binary value (0.10499.. is 0.10,
/// even though 0.10499.. * 100 evaluates to 10.5)
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::InvalidInput(format!(
            "{} must be a non-negative number, got {}",
            name, value
        )));
    }
    Ok(())
}

fn ensure_positive_rate(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::InvalidInput(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Liters of diesel: `(distance / km_per_liter) * adjustment`
pub fn diesel_consumption(
    distance_km: f64,
    weight_tonnes: f64,
    params: &DieselParameters,
) -> Result<f64> {
    ensure_non_negative("distance_km", distance_km)?;
    ensure_non_negative("weight_tonnes", weight_tonnes)?;
    ensure_positive_rate(
        "diesel base consumption",
        params.base_consumption_km_per_liter,
    )?;

    let liters =
        (distance_km / params.base_consumption_km_per_liter) * adjustment_factor(weight_tonnes);
    Ok(round2(liters))
}

/// Liters burned by the hybrid. The electric offset scales the usable rate
/// down, so with the defaults the effective rate is 6 * 0.8 = 4.8 km/l.
pub fn hybrid_consumption(
    distance_km: f64,
    weight_tonnes: f64,
    params: &HybridParameters,
) -> Result<f64> {
    ensure_non_negative("distance_km", distance_km)?;
    ensure_non_negative("weight_tonnes", weight_tonnes)?;
    ensure_positive_rate("hybrid effective consumption", params.effective_km_per_liter())?;

    let liters = (distance_km / params.effective_km_per_liter()) * adjustment_factor(weight_tonnes);
    Ok(round2(liters))
}

/// kWh drawn by the electric truck. Linear in distance, no rate division.
pub fn electric_consumption(
    distance_km: f64,
    weight_tonnes: f64,
    params: &ElectricParameters,
) -> Result<f64> {
    ensure_non_negative("distance_km", distance_km)?;
    ensure_non_negative("weight_tonnes", weight_tonnes)?;
    ensure_non_negative(
        "electric base consumption",
        params.base_consumption_kwh_per_km,
    )?;

    let kwh = distance_km * params.base_consumption_kwh_per_km * adjustment_factor(weight_tonnes);
    Ok(round2(kwh))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjustment_factor() {
        assert_eq!(adjustment_factor(0.0), 1.0);
        assert!((adjustment_factor(2.0) - 1.1).abs() < 1e-12);
        assert!((adjustment_factor(20.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(110.00000000000001), 110.0);
        assert_eq!(round2(3.333333), 3.33);
        assert_eq!(round2(2.6666), 2.67);
        assert_eq!(round2(0.315 / 3.0), 0.1);
        assert_eq!(round2(-1.004), -1.0);
    }

    #[test]
    fn test_diesel_consumption_defaults() {
        let params = DieselParameters::default();
        assert_eq!(diesel_consumption(300.0, 0.0, &params).unwrap(), 100.0);
        assert_eq!(diesel_consumption(300.0, 2.0, &params).unwrap(), 110.0);
        assert_eq!(diesel_consumption(100.0, 0.0, &params).unwrap(), 33.33);
        assert_eq!(diesel_consumption(0.0, 10.0, &params).unwrap(), 0.0);
    }

    #[test]
    fn test_diesel_consumption_rounds_below_half() {
        // 0.315 / 3 is 0.10499.. in binary, 0.735 / 3 is 0.24499..
        let params = DieselParameters::default();
        assert_eq!(diesel_consumption(0.315, 0.0, &params).unwrap(), 0.1);
        assert_eq!(diesel_consumption(0.735, 0.0, &params).unwrap(), 0.24);
    }

    #[test]
    fn test_diesel_consumption_matches_formula() {
        let params = DieselParameters::default();
        for &(d, w) in &[(12.345, 0.5), (250.0, 7.0), (1234.5, 12.0), (0.8, 0.0)] {
            let expected = round2((d / 3.0) * (1.0 + w * 0.05));
            assert_eq!(diesel_consumption(d, w, &params).unwrap(), expected);
        }
    }

    #[test]
    fn test_hybrid_uses_offset_reduced_rate() {
        let params = HybridParameters::default();
        assert_eq!(hybrid_consumption(480.0, 0.0, &params).unwrap(), 100.0);
        assert_eq!(hybrid_consumption(96.0, 0.0, &params).unwrap(), 20.0);

        for &(d, w) in &[(100.0, 2.0), (333.0, 5.5), (42.0, 0.0)] {
            let expected = round2((d / (6.0 * (1.0 - 0.2))) * (1.0 + w * 0.05));
            assert_eq!(hybrid_consumption(d, w, &params).unwrap(), expected);
        }
    }

    #[test]
    fn test_hybrid_burns_more_than_naive_baseline() {
        let params = HybridParameters::default();
        let naive = HybridParameters {
            electric_offset_fraction: 0.0,
            ..params
        };
        let with_offset = hybrid_consumption(600.0, 0.0, &params).unwrap();
        let without_offset = hybrid_consumption(600.0, 0.0, &naive).unwrap();
        assert_eq!(without_offset, 100.0);
        assert_eq!(with_offset, 125.0);
    }

    #[test]
    fn test_electric_consumption_is_linear() {
        let params = ElectricParameters::default();
        assert_eq!(electric_consumption(300.0, 0.0, &params).unwrap(), 300.0);
        assert_eq!(electric_consumption(300.0, 2.0, &params).unwrap(), 330.0);

        let heavier = ElectricParameters {
            base_consumption_kwh_per_km: 1.5,
            ..params
        };
        assert_eq!(electric_consumption(100.0, 0.0, &heavier).unwrap(), 150.0);
    }

    #[test]
    fn test_negative_inputs_rejected() {
        let diesel = DieselParameters::default();
        let hybrid = HybridParameters::default();
        let electric = ElectricParameters::default();

        assert!(matches!(
            diesel_consumption(-1.0, 0.0, &diesel),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            hybrid_consumption(10.0, -0.5, &hybrid),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            electric_consumption(f64::NAN, 0.0, &electric),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_rate_rejected() {
        let diesel = DieselParameters {
            base_consumption_km_per_liter: 0.0,
            ..DieselParameters::default()
        };
        assert!(diesel_consumption(10.0, 0.0, &diesel).is_err());

        let hybrid = HybridParameters {
            electric_offset_fraction: 1.0,
            ..HybridParameters::default()
        };
        assert!(hybrid_consumption(10.0, 0.0, &hybrid).is_err());
    }
}
