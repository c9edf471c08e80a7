//! Closed-form physics of the SFM interferometer.
//!
//! Frequencies are in hertz and lengths in metres throughout.

use std::f64::consts::{PI, SQRT_2};

use crate::error::{DesignError, Result};
use crate::model::Configuration;

/// Speed of light in vacuum (m/s).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Band-separation coefficient `w`.
pub const BAND_SEPARATION: f64 = 2.5;

/// Window width `sigma`.
pub const WINDOW_WIDTH: f64 = 0.0225;

/// Divisor turning the usable axis separation into a maximum stroke.
pub const STROKE_DIVISOR: f64 = 4.0;

/// Hz → kHz.
pub const HZ_TO_KHZ: f64 = 1e-3;
/// Hz → MHz.
pub const HZ_TO_MHZ: f64 = 1e-6;
/// Hz → GHz.
pub const HZ_TO_GHZ: f64 = 1e-9;
/// kHz → Hz.
pub const KHZ_TO_HZ: f64 = 1e3;
/// MHz → Hz.
pub const MHZ_TO_HZ: f64 = 1e6;
/// GHz → Hz.
pub const GHZ_TO_HZ: f64 = 1e9;

/// Number of reflections needed for `num_measurements` under `configuration`.
///
/// # Errors
///
/// Returns [`DesignError::DegenerateInput`] when `num_measurements` is zero
/// or so large that the reflection count does not fit in a `usize`.
pub fn reflection_count(configuration: Configuration, num_measurements: usize) -> Result<usize> {
    if num_measurements < 1 {
        return Err(DesignError::DegenerateInput(
            "number of measurements must be at least 1".to_string(),
        ));
    }
    match configuration {
        Configuration::SharedReference => num_measurements.checked_add(1),
        Configuration::UniqueReferences => num_measurements.checked_mul(2),
    }
    .ok_or_else(|| {
        DesignError::DegenerateInput(format!(
            "{num_measurements} measurements under {configuration} overflow the reflection count"
        ))
    })
}

/// Smallest axis separation (m) that keeps neighbouring beat bands apart:
///
/// `sep = 0.5 * (w * c) / (2 * sqrt(2) * pi^2 * nuA * sigma)`
///
/// # Errors
///
/// Returns [`DesignError::DegenerateInput`] unless `nu_a` is finite and positive.
pub fn recommended_axis_separation(nu_a: f64) -> Result<f64> {
    if !(nu_a.is_finite() && nu_a > 0.0) {
        return Err(DesignError::DegenerateInput(format!(
            "optical modulation amplitude must be positive, got {nu_a}"
        )));
    }
    Ok(0.5 * (BAND_SEPARATION * SPEED_OF_LIGHT)
        / (2.0 * SQRT_2 * PI * PI * nu_a * WINDOW_WIDTH))
}

/// Beat-frequency bandwidth (Hz) of an axis with optical path difference
/// `opd` (m): `fBeat = 2 * pi * nuA * fM * opd / c`.
#[must_use]
pub fn beat_frequency_bandwidth(nu_a: f64, f_m: f64, opd: f64) -> f64 {
    2.0 * PI * nu_a * f_m * opd / SPEED_OF_LIGHT
}

/// Round-trip optical path difference of a mechanical length.
#[must_use]
pub fn optical_path_difference(mechanical_length: f64) -> f64 {
    2.0 * mechanical_length
}

/// Largest stroke (m) a target should travel without leaving its band.
#[must_use]
pub fn recommended_max_stroke(axis_separation: f64, recommended_separation: f64) -> f64 {
    axis_separation.min(recommended_separation) / STROKE_DIVISOR
}

/// Rounds `x` to `places` decimal places.
#[must_use]
pub fn round_to(x: f64, places: i32) -> f64 {
    let d = 10f64.powi(places);
    (d * x).round() / d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflection_count_closed_form() {
        assert_eq!(reflection_count(Configuration::SharedReference, 2), Ok(3));
        assert_eq!(reflection_count(Configuration::UniqueReferences, 2), Ok(4));
        assert_eq!(reflection_count(Configuration::SharedReference, 1), Ok(2));
        assert_eq!(reflection_count(Configuration::UniqueReferences, 1), Ok(2));
    }

    #[test]
    fn reflection_count_rejects_zero_measurements() {
        assert!(reflection_count(Configuration::SharedReference, 0).is_err());
    }

    #[test]
    fn reflection_count_rejects_overflowing_measurements() {
        for configuration in Configuration::ALL {
            assert!(matches!(
                reflection_count(configuration, usize::MAX),
                Err(DesignError::DegenerateInput(_))
            ));
        }
        assert_eq!(
            reflection_count(Configuration::UniqueReferences, usize::MAX / 2),
            Ok(usize::MAX - 1)
        );
    }

    #[test]
    fn recommended_separation_at_one_gigahertz() -> Result<()> {
        let sep = recommended_axis_separation(1e9)?;
        assert!((sep - 0.596_627_763_455).abs() < 1e-9, "got {sep}");
        assert_eq!(round_to(sep, 2), 0.6);
        Ok(())
    }

    #[test]
    fn recommended_separation_rejects_non_positive() {
        assert!(recommended_axis_separation(0.0).is_err());
        assert!(recommended_axis_separation(-1e9).is_err());
    }

    #[test]
    fn bandwidth_of_one_metre_opd() {
        // 2 pi * 1 GHz * 10 kHz * 1 m / c
        let f = beat_frequency_bandwidth(1e9, 1e4, 1.0);
        assert!((f - 209_584.502_195).abs() < 1e-3, "got {f}");
    }

    #[test]
    fn max_stroke_uses_the_smaller_separation() {
        assert_eq!(recommended_max_stroke(2.0, 0.8), 0.2);
        assert_eq!(recommended_max_stroke(0.4, 0.8), 0.1);
    }

    #[test]
    fn round_to_places() {
        assert_eq!(round_to(2.134_56, 2), 2.13);
        assert_eq!(round_to(1.000_000_4, 6), 1.0);
    }
}
