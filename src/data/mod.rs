pub mod drink_type;
pub mod session;
pub mod thresholds;

pub use drink_type::{drink_type, DrinkType, DRINK_TYPES};
pub use session::{LoggedDrink, Session, SessionBuilder};
pub use thresholds::BacLevel;
