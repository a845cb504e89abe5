//! Built-in drink presets

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;

use crate::error::BacSimError;

/// A drink preset with a typical serving volume and strength.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DrinkType {
    /// Stable identifier, used as the kind in session logs
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Typical serving volume in milliliters
    pub default_volume_ml: f64,
    /// Typical alcohol by volume as a fraction in [0, 1]
    pub default_abv: f64,
}

lazy_static! {
    /// The built-in drink presets, keyed by id.
    pub static ref DRINK_TYPES: HashMap<&'static str, DrinkType> = {
        let mut types = HashMap::new();
        for preset in [
            DrinkType {
                id: "beer",
                name: "Beer",
                default_volume_ml: 355.0, // 12 oz
                default_abv: 0.05,
            },
            DrinkType {
                id: "shot",
                name: "Shot",
                default_volume_ml: 44.0, // 1.5 oz
                default_abv: 0.40,
            },
            DrinkType {
                id: "wine",
                name: "Wine",
                default_volume_ml: 148.0, // 5 oz
                default_abv: 0.12,
            },
            DrinkType {
                id: "cocktail",
                name: "Cocktail",
                default_volume_ml: 120.0, // 4 oz
                default_abv: 0.15,
            },
        ] {
            types.insert(preset.id, preset);
        }
        types
    };
}

/// Look up a drink preset by id.
///
/// # Errors
/// Returns [`BacSimError::UnknownDrinkType`] if no preset carries the id.
pub fn drink_type(id: &str) -> Result<&'static DrinkType, BacSimError> {
    DRINK_TYPES
        .get(id)
        .ok_or_else(|| BacSimError::UnknownDrinkType(id.to_string()))
}
