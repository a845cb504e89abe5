use serde::{Deserialize, Serialize};

/// A single (time, BAC) sample.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BacReading {
    /// Session-relative time in hours
    pub time: f64,
    /// Blood alcohol concentration as a fraction (e.g. 0.08)
    pub bac: f64,
}

/// A BAC time series, stored as parallel time/value vectors.
///
/// Produced by the projection methods on [`crate::BacSimulator`] and
/// accumulated by callers as a live session history for charting.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BacCurve {
    times: Vec<f64>,
    bacs: Vec<f64>,
}

impl BacCurve {
    /// Create an empty curve
    pub fn new() -> Self {
        BacCurve::default()
    }

    /// Append a sample to the curve
    pub fn push(&mut self, time: f64, bac: f64) {
        self.times.push(time);
        self.bacs.push(bac);
    }

    /// Get the time points in hours
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Get the BAC values, parallel to [`Self::times`]
    pub fn bacs(&self) -> &[f64] {
        &self.bacs
    }

    /// Number of samples in the curve
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Check whether the curve holds no samples
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Get the last sample, if any
    pub fn last(&self) -> Option<BacReading> {
        match (self.times.last(), self.bacs.last()) {
            (Some(&time), Some(&bac)) => Some(BacReading { time, bac }),
            _ => None,
        }
    }

    /// Get the largest BAC value in the curve, if any
    pub fn max_bac(&self) -> Option<f64> {
        self.bacs.iter().copied().fold(None, |acc, bac| match acc {
            Some(max) if max >= bac => Some(max),
            _ => Some(bac),
        })
    }

    /// Iterate over the samples as [`BacReading`]s
    pub fn readings(&self) -> impl Iterator<Item = BacReading> + '_ {
        self.times
            .iter()
            .zip(self.bacs.iter())
            .map(|(&time, &bac)| BacReading { time, bac })
    }
}
