//! Core request types for the designer.
//!
//! These are plain values rebuilt on every computation. The presentation
//! layer owns whatever mutable session state it needs and hands the core a
//! fresh [`LayoutRequest`] and [`ModulationParameters`] each time a
//! parameter changes.

use std::fmt;
use std::str::FromStr;

use crate::error::{DesignError, Result};

/// How the reflections of the interferometer partition into measurement axes.
///
/// - `SharedReference`: one common reference reflection (index 0) interferes
///   with every target, giving `numMeasurements + 1` reflections.
/// - `UniqueReferences`: every target carries its own reference reflection,
///   giving `2 * numMeasurements` reflections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")
)]
pub enum Configuration {
    /// A single reference reflection shared by all measurements.
    SharedReference,
    /// One reference reflection per measurement.
    UniqueReferences,
}

impl Configuration {
    /// Both configurations, in presentation order.
    pub const ALL: [Configuration; 2] = [
        Configuration::SharedReference,
        Configuration::UniqueReferences,
    ];

    /// Returns the canonical tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Configuration::SharedReference => "SHARED_REFERENCE",
            Configuration::UniqueReferences => "UNIQUE_REFERENCES",
        }
    }

    /// Returns a human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Configuration::SharedReference => "Shared reference",
            Configuration::UniqueReferences => "Unique references",
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Configuration {
    type Err = DesignError;

    /// Parses a configuration tag. Matching ignores case and treats `-` and
    /// `_` alike, so `shared-reference` and `SHARED_REFERENCE` are the same.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        match normalized.as_str() {
            "SHARED_REFERENCE" => Ok(Configuration::SharedReference),
            "UNIQUE_REFERENCES" => Ok(Configuration::UniqueReferences),
            _ => Err(DesignError::InvalidConfiguration(s.to_string())),
        }
    }
}

impl TryFrom<String> for Configuration {
    type Error = DesignError;

    fn try_from(tag: String) -> Result<Self> {
        tag.parse()
    }
}

/// Laser modulation parameters, both in hertz.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModulationParameters {
    optical_modulation_amplitude: f64,
    modulation_frequency: f64,
}

impl ModulationParameters {
    /// Creates modulation parameters from the optical modulation amplitude
    /// `nu_a` and the modulation frequency `f_m`, both in Hz.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::DegenerateInput`] unless both values are finite
    /// and strictly positive.
    pub fn new(nu_a: f64, f_m: f64) -> Result<Self> {
        require_positive("optical modulation amplitude", nu_a)?;
        require_positive("modulation frequency", f_m)?;
        Ok(Self {
            optical_modulation_amplitude: nu_a,
            modulation_frequency: f_m,
        })
    }

    /// Optical modulation amplitude (Hz).
    #[must_use]
    pub fn nu_a(&self) -> f64 {
        self.optical_modulation_amplitude
    }

    /// Modulation frequency (Hz).
    #[must_use]
    pub fn f_m(&self) -> f64 {
        self.modulation_frequency
    }
}

/// A fully resolved layout request.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutRequest {
    /// Reference configuration.
    pub configuration: Configuration,
    /// Number of simultaneous measurements (at least 1).
    pub num_measurements: usize,
    /// Mechanical length of one normalized axis unit (m).
    pub axis_separation: f64,
    /// Index into the catalog list for the derived reflection count.
    pub solution_index: usize,
}

impl LayoutRequest {
    /// Checks the invariants that do not need the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::DegenerateInput`] when `num_measurements` is zero
    /// or `axis_separation` is not a finite positive length.
    pub fn validate(&self) -> Result<()> {
        if self.num_measurements < 1 {
            return Err(DesignError::DegenerateInput(
                "number of measurements must be at least 1".to_string(),
            ));
        }
        require_positive("axis separation", self.axis_separation)
    }
}

/// A value that is either computed from other parameters or pinned by the user.
///
/// The core never sees this type's variants, only [`Resolved::value`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "source", content = "value", rename_all = "snake_case"))]
pub enum Resolved<T> {
    /// Computed from other parameters.
    Derived(T),
    /// Frozen at a user-supplied value.
    UserOverridden(T),
}

impl<T: Copy> Resolved<T> {
    /// Picks the user's value when present, otherwise the derived one.
    pub fn resolve(derived: T, user: Option<T>) -> Self {
        match user {
            Some(value) => Resolved::UserOverridden(value),
            None => Resolved::Derived(derived),
        }
    }

    /// The resolved scalar.
    pub fn value(&self) -> T {
        match *self {
            Resolved::Derived(v) | Resolved::UserOverridden(v) => v,
        }
    }

    /// Whether the user pinned this value.
    pub fn is_overridden(&self) -> bool {
        matches!(self, Resolved::UserOverridden(_))
    }
}

fn require_positive(what: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DesignError::DegenerateInput(format!(
            "{what} must be a finite positive number, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_parses_canonical_tags() {
        assert_eq!(
            "SHARED_REFERENCE".parse::<Configuration>(),
            Ok(Configuration::SharedReference)
        );
        assert_eq!(
            "unique-references".parse::<Configuration>(),
            Ok(Configuration::UniqueReferences)
        );
    }

    #[test]
    fn unknown_configuration_is_rejected() {
        assert_eq!(
            "UNKNOWN".parse::<Configuration>(),
            Err(DesignError::InvalidConfiguration("UNKNOWN".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for configuration in Configuration::ALL {
            assert_eq!(
                configuration.to_string().parse::<Configuration>(),
                Ok(configuration)
            );
        }
    }

    #[cfg(feature = "serializers")]
    #[test]
    fn deserialization_goes_through_the_tag_parser() {
        let parsed: std::result::Result<Configuration, _> =
            serde_json::from_str("\"unique-references\"");
        assert_eq!(parsed.ok(), Some(Configuration::UniqueReferences));

        let err = serde_json::from_str::<Configuration>("\"UNKNOWN\"")
            .err()
            .map(|e| e.to_string());
        let expected = DesignError::InvalidConfiguration("UNKNOWN".to_string()).to_string();
        assert!(err.is_some_and(|e| e.contains(&expected)), "{expected}");

        let tag = serde_json::to_string(&Configuration::SharedReference).ok();
        assert_eq!(tag.as_deref(), Some("\"SHARED_REFERENCE\""));
    }

    #[test]
    fn modulation_rejects_non_positive() {
        assert!(ModulationParameters::new(1e9, 1e4).is_ok());
        assert!(ModulationParameters::new(0.0, 1e4).is_err());
        assert!(ModulationParameters::new(1e9, -1.0).is_err());
        assert!(ModulationParameters::new(f64::NAN, 1e4).is_err());
    }

    #[test]
    fn request_requires_a_measurement() {
        let request = LayoutRequest {
            configuration: Configuration::SharedReference,
            num_measurements: 0,
            axis_separation: 1.0,
            solution_index: 0,
        };
        assert!(matches!(
            request.validate(),
            Err(DesignError::DegenerateInput(_))
        ));
    }

    #[test]
    fn resolved_prefers_user_value() {
        let derived = Resolved::resolve(0.6, None);
        assert_eq!(derived.value(), 0.6);
        assert!(!derived.is_overridden());

        let pinned = Resolved::resolve(0.6, Some(1.5));
        assert_eq!(pinned.value(), 1.5);
        assert!(pinned.is_overridden());
    }
}
