use crate::workflow::plan::BuildPlan;
use anyhow::Context;
use log::info;
use std::path::PathBuf;
use wavecore::encode::{write_waveform, OutputFormat};
use wavecore::prelude::{ScalingStage, StageInput};
use wavecore::scaling::{NormalizeStage, PeakScaleStage};
use wavecore::synthesis::{build_dc_waveform, build_tone_waveform};
use wavecore::telemetry::MetricsRecorder;
use wavecore::waveform::Waveform;

pub struct RunSummary {
    pub sample_count: usize,
    pub bytes_written: usize,
    pub destination: PathBuf,
    pub format: OutputFormat,
}

pub struct Runner {
    plan: BuildPlan,
    metrics: MetricsRecorder,
}

impl Runner {
    pub fn new(plan: BuildPlan) -> Self {
        Self {
            plan,
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn execute(&self) -> anyhow::Result<RunSummary> {
        let request = &self.plan.request;

        let waveform = if request.dc_mode {
            let raw = build_dc_waveform(request).context("synthesizing DC waveform")?;
            Waveform::quantize(&raw)
        } else {
            let raw = build_tone_waveform(request).context("synthesizing tonal waveform")?;

            let mut stage: Box<dyn ScalingStage> = if request.normalize {
                Box::new(NormalizeStage::new())
            } else {
                Box::new(PeakScaleStage::new())
            };
            stage
                .initialize(request)
                .context("initializing scaling stage")?;
            let output = stage
                .execute(StageInput { samples: raw })
                .context("executing scaling stage")?;
            stage.cleanup();

            for note in &output.metadata.notes {
                info!("{}", note);
            }
            Waveform::quantize(&output.samples)
        };

        let bytes_written = write_waveform(&waveform, &self.plan.destination)
            .with_context(|| format!("writing {}", self.plan.destination.display()))?;

        self.metrics.record_samples(waveform.len());
        self.metrics.record_bytes(bytes_written);
        info!(
            "run complete: {} samples, {} bytes -> {}",
            waveform.len(),
            bytes_written,
            self.plan.destination.display()
        );

        Ok(RunSummary {
            sample_count: waveform.len(),
            bytes_written,
            destination: self.plan.destination.clone(),
            format: self.plan.format(),
        })
    }

    #[cfg(test)]
    pub fn metrics_snapshot(&self) -> (usize, usize, usize) {
        self.metrics.snapshot()
    }
}
