use crate::prelude::BuildResult;
use crate::waveform::WaveformRequest;
use ndarray::Array1;
use std::f64::consts::PI;

/// Builds the raw tonal waveform: one base cycle across the full buffer plus
/// one sinusoid per frequency factor, summed elementwise.
///
/// Factors are applied exactly as given, without flooring; a factor of 0 is
/// skipped since its term is identically zero.
pub fn build_tone_waveform(request: &WaveformRequest) -> BuildResult<Vec<f64>> {
    request.validate()?;

    let sample_count = request.sample_count;
    let base_frequency = 1.0 / sample_count as f64;
    let time_points: Array1<f64> = (0..sample_count).map(|i| i as f64).collect();

    let mut waveform = time_points.mapv(|t| (2.0 * PI * base_frequency * t).sin());

    for &factor in &request.frequency_factors {
        if factor == 0.0 {
            continue;
        }
        let modulated_frequency = factor / sample_count as f64;
        let modulated = time_points.mapv(|t| (2.0 * PI * modulated_frequency * t).sin());
        waveform += &modulated;
    }

    Ok(waveform.to_vec())
}
