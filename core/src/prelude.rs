use crate::waveform::WaveformRequest;

/// Input payload for a scaling stage.
#[derive(Debug, Clone)]
pub struct StageInput {
    pub samples: Vec<f64>,
}

/// Output produced by each stage.
#[derive(Debug, Clone)]
pub struct StageOutput {
    pub samples: Vec<f64>,
    pub metadata: StageMetadata,
}

/// Metadata used for chaining stages and telemetry.
#[derive(Debug, Clone, Default)]
pub struct StageMetadata {
    pub observed_min: Option<f64>,
    pub observed_max: Option<f64>,
    pub notes: Vec<String>,
}

/// Common error type for waveform construction.
#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("domain error: {0}")]
    Domain(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("internal failure: {0}")]
    Internal(String),
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

pub type BuildResult<T> = Result<T, BuildError>;

/// Trait describing the scaling stages that fit a raw waveform into its
/// requested peak range.
pub trait ScalingStage {
    fn initialize(&mut self, request: &WaveformRequest) -> BuildResult<()>;
    fn execute(&mut self, input: StageInput) -> BuildResult<StageOutput>;
    fn cleanup(&mut self);
}
