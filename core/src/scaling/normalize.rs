use crate::math::stats::StatsHelper;
use crate::prelude::{
    BuildError, BuildResult, ScalingStage, StageInput, StageMetadata, StageOutput,
};
use crate::telemetry::log::LogManager;
use crate::waveform::WaveformRequest;

/// Scaling stage that linearly remaps the observed range onto the full
/// requested amplitude span.
pub struct NormalizeStage {
    request: Option<WaveformRequest>,
    logger: LogManager,
}

impl NormalizeStage {
    pub fn new() -> Self {
        Self {
            request: None,
            logger: LogManager::new("normalize"),
        }
    }
}

impl Default for NormalizeStage {
    fn default() -> Self {
        Self::new()
    }
}

impl ScalingStage for NormalizeStage {
    fn initialize(&mut self, request: &WaveformRequest) -> BuildResult<()> {
        request.validate()?;
        self.request = Some(request.clone());
        Ok(())
    }

    fn execute(&mut self, input: StageInput) -> BuildResult<StageOutput> {
        let request = self
            .request
            .as_ref()
            .ok_or_else(|| BuildError::Internal("stage not initialized".into()))?;

        if input.samples.is_empty() {
            return Err(BuildError::InvalidInput("no samples to scale".into()));
        }

        let (min, max) = StatsHelper::extrema(&input.samples)
            .ok_or_else(|| BuildError::InvalidInput("no samples to scale".into()))?;
        // A flat waveform has no span to remap onto the amplitude range.
        if max == min {
            return Err(BuildError::Domain(format!(
                "cannot normalize a zero-variance waveform (all samples equal {})",
                min
            )));
        }

        let amplitude = request.amplitude as f64;
        let span = max - min;
        let scaled: Vec<f64> = input
            .samples
            .iter()
            .map(|&value| (value - min) / span * (2.0 * amplitude) - amplitude)
            .collect();

        let rms = StatsHelper::rms(&scaled);
        self.logger.record(&format!("NormalizeStage RMS {:.4}", rms));

        let metadata = StageMetadata {
            observed_min: Some(min),
            observed_max: Some(max),
            notes: vec![format!("normalized span [{:.4}, {:.4}]", min, max)],
        };

        Ok(StageOutput {
            samples: scaled,
            metadata,
        })
    }

    fn cleanup(&mut self) {
        self.request = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const EPSILON: f64 = 1e-9;

    fn stage_for(amplitude: i32) -> NormalizeStage {
        let request = WaveformRequest {
            sample_count: 4,
            amplitude,
            normalize: true,
            ..Default::default()
        };
        let mut stage = NormalizeStage::new();
        stage.initialize(&request).unwrap();
        stage
    }

    #[test]
    fn normalized_output_spans_the_full_amplitude() {
        let mut rng = StdRng::seed_from_u64(7);
        let raw: Vec<f64> = (0..256).map(|_| rng.gen_range(-3.0..3.0)).collect();

        let mut stage = stage_for(32767);
        let output = stage.execute(StageInput { samples: raw }).unwrap();
        let (min, max) = StatsHelper::extrema(&output.samples).unwrap();
        assert!((min + 32767.0).abs() < EPSILON);
        assert!((max - 32767.0).abs() < EPSILON);
        stage.cleanup();
    }

    #[test]
    fn metadata_reports_the_observed_range() {
        let mut stage = stage_for(100);
        let output = stage
            .execute(StageInput {
                samples: vec![-2.0, 0.0, 6.0],
            })
            .unwrap();
        assert_eq!(output.metadata.observed_min, Some(-2.0));
        assert_eq!(output.metadata.observed_max, Some(6.0));
    }

    #[test]
    fn zero_variance_input_is_a_domain_error() {
        let mut stage = stage_for(32767);
        let result = stage.execute(StageInput {
            samples: vec![0.5; 8],
        });
        assert!(matches!(result, Err(BuildError::Domain(_))));
    }

    #[test]
    fn execute_before_initialize_fails() {
        let mut stage = NormalizeStage::new();
        let result = stage.execute(StageInput {
            samples: vec![1.0, 2.0],
        });
        assert!(matches!(result, Err(BuildError::Internal(_))));
    }
}
