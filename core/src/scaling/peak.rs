use crate::math::stats::StatsHelper;
use crate::prelude::{
    BuildError, BuildResult, ScalingStage, StageInput, StageMetadata, StageOutput,
};
use crate::telemetry::log::LogManager;
use crate::waveform::WaveformRequest;

/// Scaling stage that divides by the larger-magnitude peak so the waveform
/// fits within the requested amplitude without shifting its offset.
pub struct PeakScaleStage {
    request: Option<WaveformRequest>,
    logger: LogManager,
}

impl PeakScaleStage {
    pub fn new() -> Self {
        Self {
            request: None,
            logger: LogManager::new("peak-scale"),
        }
    }
}

impl Default for PeakScaleStage {
    fn default() -> Self {
        Self::new()
    }
}

impl ScalingStage for PeakScaleStage {
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
        let peak = StatsHelper::peak_magnitude(&input.samples);
        if peak == 0.0 {
            return Err(BuildError::Domain(
                "cannot scale a waveform with zero peak magnitude".to_string(),
            ));
        }

        let amplitude = request.amplitude as f64;
        let scaled: Vec<f64> = input
            .samples
            .iter()
            .map(|&value| value * amplitude / peak)
            .collect();

        let rms = StatsHelper::rms(&scaled);
        self.logger.record(&format!("PeakScaleStage RMS {:.4}", rms));

        let metadata = StageMetadata {
            observed_min: Some(min),
            observed_max: Some(max),
            notes: vec![format!("peak magnitude {:.4}", peak)],
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
