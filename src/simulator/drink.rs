use serde::{Deserialize, Serialize};

/// Ethanol density in g/mL
pub(crate) const ETHANOL_DENSITY: f64 = 0.789;

/// A single logged drink and the state of its gut compartment.
///
/// The ethanol dose is fixed at creation; the gut compartment depletes
/// toward zero as absorption proceeds. A drink is inactive until simulated
/// time reaches its logged time, and past `absorption_end` any remaining
/// gut mass is absorbed in one step so drinks clear the gut in finite time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DrinkEvent {
    logged_at: f64,
    volume_ml: f64,
    abv: f64,
    dose_grams: f64,
    gut_remaining_grams: f64,
    active: bool,
    absorption_end: f64,
}

impl DrinkEvent {
    /// Create a new drink event
    ///
    /// # Arguments
    ///
    /// * `logged_at` - Session-relative time of consumption (hours)
    /// * `volume_ml` - Volume of the drink in milliliters
    /// * `abv` - Alcohol by volume as a fraction in [0, 1]
    /// * `ka` - First-order absorption rate constant (per hour), captured at
    ///   log time to fix the absorption cutoff
    pub(crate) fn new(logged_at: f64, volume_ml: f64, abv: f64, ka: f64) -> Self {
        let dose_grams = ETHANOL_DENSITY * volume_ml * abv;
        DrinkEvent {
            logged_at,
            volume_ml,
            abv,
            dose_grams,
            gut_remaining_grams: dose_grams,
            active: false,
            absorption_end: logged_at + 5.0 / ka,
        }
    }

    /// Get the session-relative time the drink was consumed (hours)
    pub fn logged_at(&self) -> f64 {
        self.logged_at
    }

    /// Get the volume of the drink in milliliters
    pub fn volume_ml(&self) -> f64 {
        self.volume_ml
    }

    /// Get the alcohol by volume as a fraction in [0, 1]
    pub fn abv(&self) -> f64 {
        self.abv
    }

    /// Get the total ethanol dose in grams
    pub fn dose_grams(&self) -> f64 {
        self.dose_grams
    }

    /// Get the unabsorbed ethanol remaining in the gut compartment (grams)
    pub fn gut_remaining_grams(&self) -> f64 {
        self.gut_remaining_grams
    }

    /// Check whether simulated time has reached the drink's logged time
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Get the time past which remaining gut mass is absorbed in one step
    pub fn absorption_end(&self) -> f64 {
        self.absorption_end
    }

    pub(crate) fn activate(&mut self) {
        self.active = true;
    }

    /// Move gut mass into blood for one step and return the grams absorbed.
    ///
    /// Inactive or empty drinks absorb nothing. Past the absorption cutoff
    /// the whole remaining gut mass is transferred, otherwise the gut depletes
    /// by the first-order factor `1 − e^(−ka·dt)`.
    pub(crate) fn absorb(&mut self, time: f64, ka: f64, dt: f64) -> f64 {
        if !self.active || self.gut_remaining_grams <= 0.0 {
            return 0.0;
        }
        let delta;
        if time >= self.absorption_end {
            delta = self.gut_remaining_grams;
            self.gut_remaining_grams = 0.0;
        } else {
            delta = self.gut_remaining_grams * (1.0 - (-ka * dt).exp());
            self.gut_remaining_grams -= delta;
        }
        delta
    }
}
