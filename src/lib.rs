//! # bacsim
//!
//! Pharmacokinetic blood alcohol concentration (BAC) estimation from a
//! physiological profile and a sequence of logged drinks, with forward
//! projection assuming no further consumption.
//!
//! The model is Widmark-style with an absorption lag: first-order absorption
//! out of a per-drink gut compartment, zero-order elimination from blood,
//! advanced in fixed time steps. Drinks can be logged at any point during a
//! live session, and projections run on an independent clone of the live
//! state.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`PersonConstants`] | Total body water, volume of distribution, and elimination rate from height/weight/age/sex |
//! | [`BacSimulator`] | The fixed-step state machine: drink logging, stepping, projection, cloning |
//! | [`Session`] | Serializable session record: drink log, BAC history, max BAC |
//! | [`BacLevel`] | Impairment classification of a BAC value |
//!
//! Units throughout: height cm, weight kg, age years, volume mL, ABV as a
//! fraction in [0, 1], time in hours, BAC as a fraction (0.08 ≡ "0.08%").
//!
//! # Example
//!
//! ```rust
//! use bacsim::{BacLevel, BacSimulator, MealState, PersonConstants, Sex};
//!
//! let person = PersonConstants::resolve(178.0, 75.0, 28.0, Sex::Male);
//! let mut sim = BacSimulator::new(person, MealState::Light);
//!
//! sim.log_drink(0.0, 355.0, 0.05); // one beer at session start
//! let bac = sim.step();
//! assert!(bac > 0.0);
//! assert_eq!(BacLevel::classify(bac), BacLevel::Sober);
//! ```

pub mod data;
pub mod error;
pub mod physiology;
pub mod simulator;

pub use crate::data::{drink_type, BacLevel, DrinkType, LoggedDrink, Session, SessionBuilder};
pub use crate::error::BacSimError;
pub use crate::physiology::{PersonConstants, Sex};
pub use crate::simulator::{
    BacCurve, BacReading, BacSimulator, DrinkEvent, MealState, BAC_FLOOR,
    DEFAULT_TIME_STEP_MINUTES, MAX_SIMULATION_HOURS,
};

pub mod prelude {
    pub use crate::data::{drink_type, BacLevel, DrinkType, LoggedDrink, Session, SessionBuilder};
    pub use crate::error::BacSimError;
    pub use crate::physiology::{PersonConstants, Sex};
    pub use crate::simulator::{BacCurve, BacReading, BacSimulator, DrinkEvent, MealState};
}
