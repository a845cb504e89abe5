//! Serializable session records
//!
//! A [`Session`] captures one drinking session as its caller-facing record:
//! the drinks logged (by preset kind, session-relative hours, volume, and
//! ABV), the accumulated BAC history, and the running maximum BAC. Wall-clock
//! timestamps are left to the persisting application; session time is
//! relative hours throughout.
//!
//! Because the simulator keeps every drink for the life of a session, a
//! record can be replayed into a fresh [`BacSimulator`] to reproduce the
//! full curve ([`Session::resimulate`]).

use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};

use crate::data::drink_type::drink_type;
use crate::error::BacSimError;
use crate::physiology::PersonConstants;
use crate::simulator::{BacCurve, BacSimulator, MealState};

/// One drink as recorded in a session log.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoggedDrink {
    /// Drink preset id, or a free-form kind for custom drinks
    pub kind: String,
    /// Session-relative time of consumption in hours
    pub time_hr: f64,
    /// Volume in milliliters
    pub volume_ml: f64,
    /// Alcohol by volume as a fraction in [0, 1]
    pub abv: f64,
}

/// A serializable record of one drinking session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Session {
    id: String,
    meal_state: MealState,
    drinks: Vec<LoggedDrink>,
    history: BacCurve,
    max_bac: f64,
    notes: Option<String>,
}

impl Session {
    /// Create a session builder with a random 5-character alphanumeric id.
    pub fn builder() -> SessionBuilder {
        let rndu8: Vec<u8> = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(5)
            .collect();
        let id = String::from_utf8(rndu8).unwrap();

        SessionBuilder {
            id,
            meal_state: MealState::default(),
            drinks: Vec::new(),
            notes: None,
        }
    }

    /// Get the session id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the meal state the session was started with
    pub fn meal_state(&self) -> MealState {
        self.meal_state
    }

    /// Get the logged drinks, in insertion order
    pub fn drinks(&self) -> &[LoggedDrink] {
        &self.drinks
    }

    /// Get the accumulated BAC history
    pub fn history(&self) -> &BacCurve {
        &self.history
    }

    /// Get the largest BAC recorded so far
    pub fn max_bac(&self) -> f64 {
        self.max_bac
    }

    /// Get the session notes, if any
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Record a drink in the session log.
    pub fn log_drink(
        &mut self,
        kind: impl Into<String>,
        time_hr: f64,
        volume_ml: f64,
        abv: f64,
    ) {
        self.drinks.push(LoggedDrink {
            kind: kind.into(),
            time_hr,
            volume_ml,
            abv,
        });
    }

    /// Append a BAC reading to the history, updating the running maximum.
    pub fn push_reading(&mut self, time_hr: f64, bac: f64) {
        self.history.push(time_hr, bac);
        if bac > self.max_bac {
            self.max_bac = bac;
        }
    }

    /// Rebuild a simulator from the logged drinks.
    ///
    /// Stepping the result reproduces the session curve, since drink events
    /// are pure functions of the log and the meal state.
    pub fn resimulate(&self, person: PersonConstants) -> BacSimulator {
        let mut simulator = BacSimulator::new(person, self.meal_state);
        for drink in &self.drinks {
            simulator.log_drink(drink.time_hr, drink.volume_ml, drink.abv);
        }
        simulator
    }

    /// Serialize the record to JSON.
    pub fn to_json(&self) -> Result<String, BacSimError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a record from JSON.
    pub fn from_json(json: &str) -> Result<Self, BacSimError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Builder for [`Session`] records.
pub struct SessionBuilder {
    id: String,
    meal_state: MealState,
    drinks: Vec<LoggedDrink>,
    notes: Option<String>,
}

impl SessionBuilder {
    /// Override the generated session id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the meal state for the session
    pub fn meal_state(mut self, meal_state: MealState) -> Self {
        self.meal_state = meal_state;
        self
    }

    /// Log a drink with explicit volume and strength
    pub fn drink(
        mut self,
        kind: impl Into<String>,
        time_hr: f64,
        volume_ml: f64,
        abv: f64,
    ) -> Self {
        self.drinks.push(LoggedDrink {
            kind: kind.into(),
            time_hr,
            volume_ml,
            abv,
        });
        self
    }

    /// Log a drink from a built-in preset, using its default volume and ABV.
    ///
    /// # Errors
    /// Returns [`BacSimError::UnknownDrinkType`] for an unrecognized kind.
    pub fn preset_drink(self, kind: &str, time_hr: f64) -> Result<Self, BacSimError> {
        let preset = drink_type(kind)?;
        Ok(self.drink(
            preset.id,
            time_hr,
            preset.default_volume_ml,
            preset.default_abv,
        ))
    }

    /// Attach free-form notes
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn build(self) -> Session {
        Session {
            id: self.id,
            meal_state: self.meal_state,
            drinks: self.drinks,
            history: BacCurve::new(),
            max_bac: 0.0,
            notes: self.notes,
        }
    }
}
