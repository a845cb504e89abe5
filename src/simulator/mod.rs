//! Fixed-step pharmacokinetic BAC simulation
//!
//! The simulator advances a two-compartment model in fixed time increments:
//!
//! - **Absorption** is first-order: each active drink's gut compartment
//!   depletes by `1 − e^(−ka·dt)` per step, modeling saturable gut transit.
//!   A per-drink cutoff at `5/ka` hours after logging (five time constants,
//!   >99% absorbed) forces the remainder across in one step so drinks clear
//!   the gut in finite time.
//! - **Elimination** is zero-order: a constant `β·Vd·dt` grams per step,
//!   independent of concentration, floored at zero blood mass.
//!
//! Blood alcohol concentration is always derived as blood ethanol mass over
//! the volume of distribution and never stored separately.
//!
//! The integration step (default 5 minutes of simulated time) is decoupled
//! from how often the host application calls [`BacSimulator::step`] in wall
//! clock time; the step size affects the accuracy of the exponential decay
//! and must not be conflated with a UI refresh interval.
//!
//! # Usage
//!
//! ```rust
//! use bacsim::{BacSimulator, MealState, PersonConstants, Sex};
//!
//! let person = PersonConstants::resolve(178.0, 75.0, 28.0, Sex::Male);
//! let mut sim = BacSimulator::new(person, MealState::Light);
//!
//! // One beer at session start
//! sim.log_drink(0.0, 355.0, 0.05);
//!
//! // Advance one hour of simulated time
//! for _ in 0..12 {
//!     sim.step();
//! }
//!
//! // Project four hours ahead without disturbing the live state
//! let projection = sim.predict_future_bac(4.0);
//! assert!(!projection.is_empty());
//! assert!(sim.bac() > 0.0);
//! ```

mod curve;
mod drink;

pub use curve::{BacCurve, BacReading};
pub use drink::DrinkEvent;

use serde::{Deserialize, Serialize};

use crate::physiology::PersonConstants;

/// BAC below which the projection and until-zero loops stop.
pub const BAC_FLOOR: f64 = 0.001;

/// Hard cap on simulated hours for unbounded runs.
pub const MAX_SIMULATION_HOURS: f64 = 24.0;

/// Default integration step in minutes of simulated time.
pub const DEFAULT_TIME_STEP_MINUTES: f64 = 5.0;

/// Stomach contents at the start of a session, a coarse proxy for gastric
/// emptying speed. Determines the first-order absorption rate constant.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MealState {
    Fasted,
    #[default]
    Light,
    Heavy,
}

impl MealState {
    /// Get the first-order absorption rate constant ka (per hour)
    pub fn absorption_rate(&self) -> f64 {
        match self {
            MealState::Fasted => 2.0,
            MealState::Light => 1.0,
            MealState::Heavy => 0.5,
        }
    }
}

/// The BAC state machine: owns simulated time, blood ethanol mass, and the
/// logged drinks.
///
/// Single-threaded and synchronous; each session owns exactly one live
/// instance, and the derived [`Clone`] produces a fully independent copy
/// (drinks included) for forward projection.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BacSimulator {
    person: PersonConstants,
    meal_state: MealState,
    ka: f64,
    /// Integration step in hours
    dt: f64,
    /// Current simulated time in hours
    time: f64,
    /// Blood ethanol mass in grams, clamped at zero
    blood_grams: f64,
    drinks: Vec<DrinkEvent>,
}

impl BacSimulator {
    /// Create a simulator at time zero with no drinks and the default
    /// 5-minute integration step.
    pub fn new(person: PersonConstants, meal_state: MealState) -> Self {
        BacSimulator {
            person,
            meal_state,
            ka: meal_state.absorption_rate(),
            dt: DEFAULT_TIME_STEP_MINUTES / 60.0,
            time: 0.0,
            blood_grams: 0.0,
            drinks: Vec::new(),
        }
    }

    /// Set the integration step in minutes of simulated time.
    ///
    /// Intended to be chained at construction, before any stepping.
    pub fn with_time_step_minutes(mut self, minutes: f64) -> Self {
        self.dt = minutes / 60.0;
        self
    }

    /// Log a drink at a session-relative time.
    ///
    /// Valid at any simulation time: a drink logged in the future stays
    /// inactive until simulated time reaches it, and a drink logged in the
    /// past activates on the next step. Drinks are kept for the life of the
    /// simulator, which keeps re-simulation and cloning exact.
    pub fn log_drink(&mut self, time_hr: f64, volume_ml: f64, abv: f64) {
        self.drinks.push(DrinkEvent::new(time_hr, volume_ml, abv, self.ka));
    }

    /// Advance the simulation by one time step and return the new BAC.
    pub fn step(&mut self) -> f64 {
        // Activate drinks whose time has come
        for drink in &mut self.drinks {
            if !drink.is_active() && self.time >= drink.logged_at() {
                drink.activate();
            }
        }

        // Absorption phase
        let mut absorbed = 0.0;
        for drink in &mut self.drinks {
            absorbed += drink.absorb(self.time, self.ka, self.dt);
        }
        self.blood_grams += absorbed;

        // Zero-order elimination, floored at empty blood
        let eliminated =
            self.person.elimination_rate() * self.person.volume_of_distribution() * self.dt;
        self.blood_grams = (self.blood_grams - eliminated).max(0.0);

        self.time += self.dt;

        self.bac()
    }

    /// Get the current blood alcohol concentration as a fraction (e.g. 0.08).
    pub fn bac(&self) -> f64 {
        self.blood_grams / self.person.volume_of_distribution()
    }

    /// Get the current simulated time in hours
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Get the blood ethanol mass in grams
    pub fn blood_ethanol_grams(&self) -> f64 {
        self.blood_grams
    }

    /// Get the integration step in hours
    pub fn time_step_hours(&self) -> f64 {
        self.dt
    }

    /// Get the meal state the session was started with
    pub fn meal_state(&self) -> MealState {
        self.meal_state
    }

    /// Get the first-order absorption rate constant ka (per hour)
    pub fn absorption_rate(&self) -> f64 {
        self.ka
    }

    /// Get the person's derived pharmacokinetic constants
    pub fn person(&self) -> &PersonConstants {
        &self.person
    }

    /// Get the logged drinks, in insertion order
    pub fn drinks(&self) -> &[DrinkEvent] {
        &self.drinks
    }

    /// Step the live state until BAC falls below [`BAC_FLOOR`] or simulated
    /// time passes [`MAX_SIMULATION_HOURS`], collecting each post-step sample.
    ///
    /// Mutates the instance it is called on; intended for exhaustive
    /// projection on a fresh or cloned simulator, not a live session.
    pub fn simulate_until_zero(&mut self) -> BacCurve {
        let mut curve = BacCurve::new();
        while self.bac() > BAC_FLOOR {
            let bac = self.step();
            curve.push(self.time, bac);
            if self.time > MAX_SIMULATION_HOURS {
                break;
            }
        }
        curve
    }

    /// Project the BAC curve `hours_ahead` hours forward from the current
    /// state, without mutating the live instance.
    ///
    /// Samples are taken before each step, so the first sample equals the
    /// current BAC at the current time.
    pub fn current_curve(&self, hours_ahead: f64) -> BacCurve {
        let mut curve = BacCurve::new();
        let mut clone = self.clone();
        let end = self.time + hours_ahead;
        let horizon = self.time + MAX_SIMULATION_HOURS;

        while clone.time < end && clone.bac() > BAC_FLOOR {
            curve.push(clone.time, clone.bac());
            clone.step();
            if clone.time > horizon {
                break;
            }
        }
        curve
    }

    /// Predict future BAC assuming no further drinks, without mutating the
    /// live instance.
    ///
    /// Alcohol still in any drink's gut compartment at call time continues to
    /// absorb over the projection. Stops once the projected BAC falls below
    /// [`BAC_FLOOR`], the requested span is covered, or 24 projected hours
    /// have elapsed.
    pub fn predict_future_bac(&self, hours_ahead: f64) -> BacCurve {
        let mut curve = BacCurve::new();
        let mut clone = self.clone();
        let start = clone.time;
        let end = start + hours_ahead;

        while clone.time < end && clone.bac() > BAC_FLOOR {
            let bac = clone.step();
            curve.push(clone.time, bac);
            if clone.time > start + MAX_SIMULATION_HOURS {
                break;
            }
        }
        curve
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physiology::Sex;
    use approx::assert_relative_eq;

    fn test_person() -> PersonConstants {
        PersonConstants::resolve(178.0, 75.0, 28.0, Sex::Male)
    }

    #[test]
    fn test_meal_state_absorption_rates() {
        assert_eq!(MealState::Fasted.absorption_rate(), 2.0);
        assert_eq!(MealState::Light.absorption_rate(), 1.0);
        assert_eq!(MealState::Heavy.absorption_rate(), 0.5);
        assert_eq!(MealState::default(), MealState::Light);
    }

    #[test]
    fn test_fresh_simulator_is_sober() {
        let sim = BacSimulator::new(test_person(), MealState::Light);
        assert_eq!(sim.bac(), 0.0);
        assert_eq!(sim.time(), 0.0);
        assert_eq!(sim.blood_ethanol_grams(), 0.0);
        assert!(sim.drinks().is_empty());
    }

    #[test]
    fn test_default_time_step_is_five_minutes() {
        let sim = BacSimulator::new(test_person(), MealState::Light);
        assert_relative_eq!(sim.time_step_hours(), 5.0 / 60.0, epsilon = 1e-12);

        let sim = BacSimulator::new(test_person(), MealState::Light).with_time_step_minutes(1.0);
        assert_relative_eq!(sim.time_step_hours(), 1.0 / 60.0, epsilon = 1e-12);
    }

    #[test]
    fn test_step_advances_time_by_exactly_dt() {
        let mut sim = BacSimulator::new(test_person(), MealState::Light);
        sim.step();
        assert_relative_eq!(sim.time(), 1.0 / 12.0, epsilon = 1e-12);
        sim.step();
        assert_relative_eq!(sim.time(), 2.0 / 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_stepping_without_drinks_stays_sober() {
        let mut sim = BacSimulator::new(test_person(), MealState::Light);
        for _ in 0..24 {
            assert_eq!(sim.step(), 0.0);
        }
        assert_eq!(sim.blood_ethanol_grams(), 0.0);
    }

    #[test]
    fn test_drink_absorption_captures_ka_at_log_time() {
        let mut sim = BacSimulator::new(test_person(), MealState::Fasted);
        sim.log_drink(1.0, 355.0, 0.05);
        let drink = &sim.drinks()[0];
        assert_relative_eq!(drink.absorption_end(), 1.0 + 5.0 / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_future_drink_stays_inactive() {
        let mut sim = BacSimulator::new(test_person(), MealState::Light);
        sim.log_drink(2.0, 355.0, 0.05);

        // One hour of stepping, all before the drink's logged time
        for _ in 0..12 {
            sim.step();
        }
        let drink = &sim.drinks()[0];
        assert!(!drink.is_active());
        assert_eq!(drink.gut_remaining_grams(), drink.dose_grams());
        assert_eq!(sim.bac(), 0.0);
    }

    #[test]
    fn test_past_drink_activates_on_next_step() {
        let mut sim = BacSimulator::new(test_person(), MealState::Light);
        for _ in 0..12 {
            sim.step();
        }
        // Logged half an hour in the past relative to current time
        sim.log_drink(0.5, 355.0, 0.05);
        sim.step();
        assert!(sim.drinks()[0].is_active());
        assert!(sim.bac() > 0.0);
    }

    #[test]
    fn test_bac_is_blood_mass_over_vd() {
        let mut sim = BacSimulator::new(test_person(), MealState::Light);
        sim.log_drink(0.0, 355.0, 0.05);
        sim.step();
        assert_relative_eq!(
            sim.bac(),
            sim.blood_ethanol_grams() / sim.person().volume_of_distribution(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let mut sim = BacSimulator::new(test_person(), MealState::Light);
        sim.log_drink(0.0, 355.0, 0.05);
        for _ in 0..6 {
            sim.step();
        }

        let clone = sim.clone();
        assert_eq!(clone.time(), sim.time());
        assert_eq!(clone.blood_ethanol_grams(), sim.blood_ethanol_grams());
        assert_eq!(clone.meal_state(), sim.meal_state());
        assert_eq!(clone.drinks(), sim.drinks());

        // Stepping the clone leaves the original untouched
        let mut stepped = clone.clone();
        let time_before = sim.time();
        let blood_before = sim.blood_ethanol_grams();
        let drinks_before = sim.drinks().to_vec();
        for _ in 0..12 {
            stepped.step();
        }
        assert_eq!(sim.time(), time_before);
        assert_eq!(sim.blood_ethanol_grams(), blood_before);
        assert_eq!(sim.drinks(), &drinks_before[..]);

        // And stepping the original leaves the clone untouched
        let clone_blood = clone.blood_ethanol_grams();
        sim.step();
        assert_eq!(clone.blood_ethanol_grams(), clone_blood);
    }

    #[test]
    fn test_current_curve_starts_at_current_state() {
        let mut sim = BacSimulator::new(test_person(), MealState::Light);
        sim.log_drink(0.0, 355.0, 0.05);
        for _ in 0..6 {
            sim.step();
        }

        let curve = sim.current_curve(2.0);
        assert!(!curve.is_empty());
        assert_relative_eq!(curve.times()[0], sim.time(), epsilon = 1e-12);
        assert_relative_eq!(curve.bacs()[0], sim.bac(), epsilon = 1e-15);
    }

    #[test]
    fn test_projections_do_not_mutate() {
        let mut sim = BacSimulator::new(test_person(), MealState::Light);
        sim.log_drink(0.0, 355.0, 0.05);
        for _ in 0..6 {
            sim.step();
        }

        let time = sim.time();
        let blood = sim.blood_ethanol_grams();
        let drinks = sim.drinks().to_vec();

        let a = sim.predict_future_bac(4.0);
        let b = sim.current_curve(4.0);
        assert!(!a.is_empty());
        assert!(!b.is_empty());

        assert_eq!(sim.time(), time);
        assert_eq!(sim.blood_ethanol_grams(), blood);
        assert_eq!(sim.drinks(), &drinks[..]);

        // Repeated projections from unchanged state are identical
        assert_eq!(sim.predict_future_bac(4.0), a);
        assert_eq!(sim.current_curve(4.0), b);
    }

    #[test]
    fn test_projection_on_sober_simulator_is_empty() {
        let sim = BacSimulator::new(test_person(), MealState::Light);
        assert!(sim.predict_future_bac(4.0).is_empty());
        assert!(sim.current_curve(4.0).is_empty());
    }
}
