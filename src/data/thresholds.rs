//! Impairment classification of BAC values
//!
//! Thresholds follow the commonly cited bands: impairment of reaction time
//! and judgment from 0.03, the 0.08 U.S. legal driving limit, blackout risk
//! from 0.15, serious alcohol poisoning from 0.30, and life-threatening
//! suppression of breathing from 0.40.

use serde::{Deserialize, Serialize};

/// BAC at which impairment of reaction time and judgment starts
pub const IMPAIRMENT_STARTS: f64 = 0.03;
/// U.S. legal limit for driving (some countries use 0.05)
pub const LEGAL_LIMIT: f64 = 0.08;
/// BAC at which alcohol-induced blackout and memory loss begins
pub const BLACKOUT: f64 = 0.15;
/// BAC at which serious alcohol poisoning begins
pub const POISONING: f64 = 0.30;
/// Life-threatening BAC: suppressed breathing, reduced gag reflex
pub const LIFE_THREATENING: f64 = 0.40;

/// Impairment band for a BAC value.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum BacLevel {
    Sober,
    Impaired,
    LegallyImpaired,
    BlackoutRisk,
    Poisoning,
    LifeThreatening,
}

impl BacLevel {
    /// Classify a BAC value (fraction, e.g. 0.08) into its band.
    pub fn classify(bac: f64) -> Self {
        if bac >= LIFE_THREATENING {
            BacLevel::LifeThreatening
        } else if bac >= POISONING {
            BacLevel::Poisoning
        } else if bac >= BLACKOUT {
            BacLevel::BlackoutRisk
        } else if bac >= LEGAL_LIMIT {
            BacLevel::LegallyImpaired
        } else if bac >= IMPAIRMENT_STARTS {
            BacLevel::Impaired
        } else {
            BacLevel::Sober
        }
    }

    /// Get a human-readable description of the band
    pub fn description(&self) -> &'static str {
        match self {
            BacLevel::Sober => "Little to no measurable impairment",
            BacLevel::Impaired => "Impaired reaction time and judgment",
            BacLevel::LegallyImpaired => "Over the legal limit for driving",
            BacLevel::BlackoutRisk => "Risk of blackout and memory loss",
            BacLevel::Poisoning => "Serious alcohol poisoning",
            BacLevel::LifeThreatening => "Life-threatening: seek medical help",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(BacLevel::classify(0.0), BacLevel::Sober);
        assert_eq!(BacLevel::classify(0.029), BacLevel::Sober);
        assert_eq!(BacLevel::classify(0.03), BacLevel::Impaired);
        assert_eq!(BacLevel::classify(0.08), BacLevel::LegallyImpaired);
        assert_eq!(BacLevel::classify(0.15), BacLevel::BlackoutRisk);
        assert_eq!(BacLevel::classify(0.30), BacLevel::Poisoning);
        assert_eq!(BacLevel::classify(0.40), BacLevel::LifeThreatening);
        assert_eq!(BacLevel::classify(0.75), BacLevel::LifeThreatening);
    }

    #[test]
    fn test_bands_are_ordered() {
        assert!(BacLevel::Sober < BacLevel::Impaired);
        assert!(BacLevel::LegallyImpaired < BacLevel::BlackoutRisk);
        assert!(BacLevel::Poisoning < BacLevel::LifeThreatening);
    }
}
