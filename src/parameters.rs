use serde::{Deserialize, Serialize};
use snafu::ensure;

use crate::error::{InvalidParametersSnafu, Result};

/// The weight vector is always 17 long.
pub type Weights = [f32; 17];

pub static DEFAULT_WEIGHTS: Weights = [
    0.4, 0.6, 2.4, 5.8, 4.93, 0.94, 0.86, 0.01, 1.49, 0.14, 0.94, 2.18, 0.05, 0.34, 1.26, 0.29,
    2.61,
];

pub const DEFAULT_REQUEST_RETENTION: f32 = 0.9;
pub const DEFAULT_MAXIMUM_INTERVAL: u32 = 36500;

pub(crate) const S_MIN: f32 = 0.001;
pub(crate) const S_MAX: f32 = 36500.0;
pub(crate) const D_MIN: f32 = 1.0;
pub(crate) const D_MAX: f32 = 5.0;
pub(crate) const D_NEUTRAL: f32 = 3.0;

/// Retention the exponential stability proxy is anchored to. Unlike
/// `request_retention` this is not tunable.
pub(crate) const TARGET_RETENTION: f32 = 0.9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    pub w: Weights,
    /// Probability of recall the scheduler aims for at the due date.
    pub request_retention: f32,
    /// Upper bound on any scheduled delay, in days.
    pub maximum_interval: u32,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            w: DEFAULT_WEIGHTS,
            request_retention: DEFAULT_REQUEST_RETENTION,
            maximum_interval: DEFAULT_MAXIMUM_INTERVAL,
        }
    }
}

impl Parameters {
    /// - An empty slice selects the default weights.
    /// - Otherwise exactly 17 finite weights are required.
    pub fn from_weights(weights: &[f32]) -> Result<Self> {
        let w = match weights.len() {
            0 => DEFAULT_WEIGHTS,
            17 => weights.try_into().map_err(|_| InvalidParametersSnafu.build())?,
            _ => return InvalidParametersSnafu.fail(),
        };
        let parameters = Self {
            w,
            ..Default::default()
        };
        parameters.validate()?;
        Ok(parameters)
    }

    pub fn with_request_retention(mut self, request_retention: f32) -> Result<Self> {
        self.request_retention = request_retention;
        self.validate()?;
        Ok(self)
    }

    pub fn with_maximum_interval(mut self, maximum_interval: u32) -> Result<Self> {
        self.maximum_interval = maximum_interval;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.w.iter().all(|w| w.is_finite()), InvalidParametersSnafu);
        ensure!(
            self.request_retention > 0.0 && self.request_retention < 1.0,
            InvalidParametersSnafu
        );
        ensure!(self.maximum_interval >= 1, InvalidParametersSnafu);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchedulerError;

    #[test]
    fn test_from_weights() {
        assert_eq!(Parameters::from_weights(&[]).unwrap(), Parameters::default());
        assert!(Parameters::from_weights(&[1.0]).is_err());
        assert!(Parameters::from_weights(&[0.5; 21]).is_err());

        let custom = Parameters::from_weights(&[0.5; 17]).unwrap();
        assert_eq!(custom.w, [0.5; 17]);
        assert_eq!(custom.request_retention, DEFAULT_REQUEST_RETENTION);
        assert_eq!(custom.maximum_interval, DEFAULT_MAXIMUM_INTERVAL);
    }

    #[test]
    fn test_non_finite_weights() {
        let mut weights = DEFAULT_WEIGHTS;
        weights[3] = f32::NAN;
        assert_eq!(
            Parameters::from_weights(&weights),
            Err(SchedulerError::InvalidParameters)
        );
        weights[3] = f32::INFINITY;
        assert!(Parameters::from_weights(&weights).is_err());
    }

    #[test]
    fn test_retention_and_interval_bounds() {
        let parameters = Parameters::default();
        assert!(parameters.clone().with_request_retention(0.0).is_err());
        assert!(parameters.clone().with_request_retention(1.0).is_err());
        assert!(parameters.clone().with_request_retention(0.85).is_ok());
        assert!(parameters.clone().with_maximum_interval(0).is_err());
        assert_eq!(
            parameters.with_maximum_interval(365).unwrap().maximum_interval,
            365
        );
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let parameters: Parameters =
            serde_json::from_str(r#"{"request_retention": 0.8}"#).unwrap();
        assert_eq!(parameters.w, DEFAULT_WEIGHTS);
        assert_eq!(parameters.request_retention, 0.8);
        assert_eq!(parameters.maximum_interval, DEFAULT_MAXIMUM_INTERVAL);
    }
}
