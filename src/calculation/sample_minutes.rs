//! Minutes-per-sample configuration for the HRS calculator.
//!
//! Defaults live in one named table that is injected into the calculation
//! rather than hard-coded at call sites, so tests and alternate deployments
//! can supply their own values. Per-category overrides apply only when
//! present and greater than zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sampling category with its own minutes-per-sample rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleCategory {
    /// Asbestos bulk sampling.
    Asbestos,
    /// Lead XRF field analysis.
    Xrf,
    /// Lead chip/wipe sampling.
    Lead,
    /// Mold sampling.
    Mold,
}

/// The minutes-per-sample defaults table.
///
/// # Example
///
/// ```
/// use fieldcost_engine::calculation::{SampleCategory, SampleMinutes};
/// use rust_decimal::Decimal;
///
/// let defaults = SampleMinutes::default();
/// assert_eq!(defaults.minutes_for(SampleCategory::Asbestos), Decimal::from(15));
/// assert_eq!(defaults.minutes_for(SampleCategory::Xrf), Decimal::from(3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleMinutes {
    /// Minutes per asbestos bulk sample.
    pub asbestos: Decimal,
    /// Minutes per XRF shot.
    pub xrf: Decimal,
    /// Minutes per lead chip/wipe sample.
    pub lead: Decimal,
    /// Minutes per mold sample.
    pub mold: Decimal,
}

impl Default for SampleMinutes {
    fn default() -> Self {
        Self {
            asbestos: Decimal::from(15),
            xrf: Decimal::from(3),
            lead: Decimal::from(10),
            mold: Decimal::from(20),
        }
    }
}

impl SampleMinutes {
    /// The minutes-per-sample value for a category.
    pub fn minutes_for(&self, category: SampleCategory) -> Decimal {
        match category {
            SampleCategory::Asbestos => self.asbestos,
            SampleCategory::Xrf => self.xrf,
            SampleCategory::Lead => self.lead,
            SampleCategory::Mold => self.mold,
        }
    }
}

/// Optional per-category overrides of the defaults table.
///
/// An absent entry, or an entry of zero or less, falls back to the default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideMinutes {
    /// Override for asbestos minutes per sample.
    #[serde(default)]
    pub asbestos: Option<Decimal>,
    /// Override for XRF minutes per shot.
    #[serde(default)]
    pub xrf: Option<Decimal>,
    /// Override for lead chip/wipe minutes per sample.
    #[serde(default)]
    pub lead: Option<Decimal>,
    /// Override for mold minutes per sample.
    #[serde(default)]
    pub mold: Option<Decimal>,
}

impl OverrideMinutes {
    /// Resolves the minutes to use for a category.
    ///
    /// The override applies only when present and strictly positive.
    pub fn resolve(&self, category: SampleCategory, defaults: &SampleMinutes) -> Decimal {
        let override_value = match category {
            SampleCategory::Asbestos => self.asbestos,
            SampleCategory::Xrf => self.xrf,
            SampleCategory::Lead => self.lead,
            SampleCategory::Mold => self.mold,
        };

        match override_value {
            Some(minutes) if minutes > Decimal::ZERO => minutes,
            _ => defaults.minutes_for(category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_minutes_table() {
        let defaults = SampleMinutes::default();
        assert_eq!(defaults.minutes_for(SampleCategory::Asbestos), dec("15"));
        assert_eq!(defaults.minutes_for(SampleCategory::Xrf), dec("3"));
        assert_eq!(defaults.minutes_for(SampleCategory::Lead), dec("10"));
        assert_eq!(defaults.minutes_for(SampleCategory::Mold), dec("20"));
    }

    #[test]
    fn test_override_applies_when_positive() {
        let overrides = OverrideMinutes {
            asbestos: Some(dec("12.5")),
            ..Default::default()
        };
        let defaults = SampleMinutes::default();

        assert_eq!(overrides.resolve(SampleCategory::Asbestos, &defaults), dec("12.5"));
        assert_eq!(overrides.resolve(SampleCategory::Mold, &defaults), dec("20"));
    }

    #[test]
    fn test_zero_override_falls_back_to_default() {
        let overrides = OverrideMinutes {
            lead: Some(Decimal::ZERO),
            ..Default::default()
        };
        let defaults = SampleMinutes::default();

        assert_eq!(overrides.resolve(SampleCategory::Lead, &defaults), dec("10"));
    }

    #[test]
    fn test_negative_override_falls_back_to_default() {
        let overrides = OverrideMinutes {
            xrf: Some(dec("-1")),
            ..Default::default()
        };
        let defaults = SampleMinutes::default();

        assert_eq!(overrides.resolve(SampleCategory::Xrf, &defaults), dec("3"));
    }

    #[test]
    fn test_alternate_defaults_are_injectable() {
        let defaults = SampleMinutes {
            asbestos: dec("30"),
            xrf: dec("5"),
            lead: dec("12"),
            mold: dec("25"),
        };
        let overrides = OverrideMinutes::default();

        assert_eq!(overrides.resolve(SampleCategory::Asbestos, &defaults), dec("30"));
    }

    #[test]
    fn test_override_minutes_deserializes_sparse_payload() {
        let overrides: OverrideMinutes = serde_json::from_str(r#"{"mold": "18"}"#).unwrap();
        assert_eq!(overrides.mold, Some(dec("18")));
        assert_eq!(overrides.asbestos, None);
    }
}
