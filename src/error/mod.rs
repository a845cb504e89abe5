use thiserror::Error;

/// Errors from the data layer.
///
/// The simulation core itself is total: stepping, logging, and projection
/// accept all numeric inputs and never fail.
#[derive(Error, Debug)]
pub enum BacSimError {
    #[error("Unknown drink type: {0}")]
    UnknownDrinkType(String),
    #[error("Session serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
