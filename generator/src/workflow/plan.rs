use std::path::PathBuf;
use wavecore::encode::OutputFormat;
use wavecore::waveform::WaveformRequest;

/// A fully resolved build: the request plus where to write the result.
#[derive(Debug, Clone)]
pub struct BuildPlan {
    pub request: WaveformRequest,
    pub destination: PathBuf,
}

impl BuildPlan {
    /// Resolves the destination, deriving a file name from the request when
    /// none was given explicitly.
    pub fn new(request: WaveformRequest, destination: Option<PathBuf>) -> Self {
        let destination = destination.unwrap_or_else(|| derived_filename(&request).into());
        Self {
            request,
            destination,
        }
    }

    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_path(&self.destination)
    }
}

fn derived_filename(request: &WaveformRequest) -> String {
    if request.dc_mode {
        return format!("dc_waveform_{}.awg", request.sample_count);
    }
    if request.frequency_factors.is_empty() {
        return format!("waveform_{}.awg", request.sample_count);
    }
    let factors = request
        .frequency_factors
        .iter()
        .map(|factor| factor.to_string())
        .collect::<Vec<_>>()
        .join("_");
    format!("waveform_{}_{}.awg", request.sample_count, factors)
}
