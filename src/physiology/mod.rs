//! Physiological constants for the pharmacokinetic model
//!
//! Derives a person's fixed pharmacokinetic constants from static body
//! attributes:
//!
//! | Constant | Description |
//! |----------|-------------|
//! | TBW | Total body water (L), Watson regression over height/weight/age |
//! | Vd | Volume of distribution (dL), `10 × TBW` |
//! | β | Zero-order elimination rate (g/dL/hr) |
//!
//! Resolution is a pure function of the inputs and never fails; callers are
//! responsible for rejecting physiologically nonsensical values before
//! resolving.

use serde::{Deserialize, Serialize};

/// Biological sex, as used by the Watson total-body-water regressions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// A person's derived pharmacokinetic constants.
///
/// All derived values are computed once at construction and never mutated.
/// Units: height in cm, weight in kg, age in years, TBW in liters, Vd in
/// deciliters, elimination rate in grams ethanol per deciliter per hour.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PersonConstants {
    height_cm: f64,
    weight_kg: f64,
    age_years: f64,
    sex: Sex,
    total_body_water: f64,
    volume_of_distribution: f64,
    elimination_rate: f64,
}

impl PersonConstants {
    /// Resolve the derived constants from static body attributes.
    ///
    /// # Arguments
    ///
    /// * `height_cm` - Height in centimeters
    /// * `weight_kg` - Weight in kilograms
    /// * `age_years` - Age in years
    /// * `sex` - Biological sex
    pub fn resolve(height_cm: f64, weight_kg: f64, age_years: f64, sex: Sex) -> Self {
        let total_body_water = match sex {
            Sex::Male => 2.447 - 0.09156 * age_years + 0.1074 * height_cm + 0.3362 * weight_kg,
            Sex::Female => -2.097 + 0.1069 * height_cm + 0.2466 * weight_kg,
        };
        let volume_of_distribution = 10.0 * total_body_water;

        // Mass clearance (g/hr), then converted to a BAC slope (g/dL/hr)
        let mass_clearance = match sex {
            Sex::Male => 0.0170 * weight_kg,
            Sex::Female => 0.0200 * weight_kg,
        };
        let elimination_rate = mass_clearance / volume_of_distribution;

        PersonConstants {
            height_cm,
            weight_kg,
            age_years,
            sex,
            total_body_water,
            volume_of_distribution,
            elimination_rate,
        }
    }

    /// Get the height in centimeters
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Get the weight in kilograms
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Get the age in years
    pub fn age_years(&self) -> f64 {
        self.age_years
    }

    /// Get the biological sex
    pub fn sex(&self) -> Sex {
        self.sex
    }

    /// Get the total body water in liters
    pub fn total_body_water(&self) -> f64 {
        self.total_body_water
    }

    /// Get the volume of distribution in deciliters
    pub fn volume_of_distribution(&self) -> f64 {
        self.volume_of_distribution
    }

    /// Get the zero-order elimination rate in g/dL/hr
    pub fn elimination_rate(&self) -> f64 {
        self.elimination_rate
    }
}
