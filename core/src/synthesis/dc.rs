use crate::prelude::BuildResult;
use crate::waveform::WaveformRequest;

/// Builds a constant waveform at the requested amplitude.
///
/// The output is already in its final integer range and bypasses scaling.
pub fn build_dc_waveform(request: &WaveformRequest) -> BuildResult<Vec<f64>> {
    request.validate()?;
    Ok(vec![request.amplitude as f64; request.sample_count])
}
