use crate::prelude::{BuildError, BuildResult};
use serde::{Deserialize, Serialize};

/// Parameters for one waveform build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveformRequest {
    pub sample_count: usize,
    pub frequency_factors: Vec<f64>,
    pub amplitude: i32,
    pub normalize: bool,
    pub dc_mode: bool,
}

impl Default for WaveformRequest {
    fn default() -> Self {
        Self {
            sample_count: 1024,
            frequency_factors: Vec::new(),
            amplitude: 32767,
            normalize: false,
            dc_mode: false,
        }
    }
}

impl WaveformRequest {
    /// Checks the request before any sample buffer is allocated.
    pub fn validate(&self) -> BuildResult<()> {
        if self.sample_count == 0 {
            return Err(BuildError::Domain(
                "sample count must be positive".to_string(),
            ));
        }
        if self.amplitude <= 0 {
            return Err(BuildError::Domain(format!(
                "amplitude must be positive, got {}",
                self.amplitude
            )));
        }
        for &factor in &self.frequency_factors {
            if !factor.is_finite() {
                return Err(BuildError::InvalidInput(format!(
                    "frequency factor {} is not a finite number",
                    factor
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sample_count_is_rejected() {
        let request = WaveformRequest {
            sample_count: 0,
            ..Default::default()
        };
        assert!(matches!(request.validate(), Err(BuildError::Domain(_))));
    }

    #[test]
    fn non_positive_amplitude_is_rejected() {
        let request = WaveformRequest {
            amplitude: 0,
            ..Default::default()
        };
        assert!(matches!(request.validate(), Err(BuildError::Domain(_))));
    }

    #[test]
    fn non_finite_factor_is_rejected() {
        let request = WaveformRequest {
            frequency_factors: vec![2.0, f64::NAN],
            ..Default::default()
        };
        assert!(matches!(
            request.validate(),
            Err(BuildError::InvalidInput(_))
        ));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let request: WaveformRequest =
            serde_json::from_str(r#"{"sample_count": 8, "frequency_factors": [2.0]}"#).unwrap();
        assert_eq!(request.sample_count, 8);
        assert_eq!(request.amplitude, 32767);
        assert!(!request.normalize);
        assert!(request.validate().is_ok());
    }
}
