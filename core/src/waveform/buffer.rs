/// Quantized waveform, produced once and written once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waveform {
    samples: Vec<i16>,
}

impl Waveform {
    pub fn new(samples: Vec<i16>) -> Self {
        Self { samples }
    }

    /// Quantizes real-valued samples to 16-bit integers.
    ///
    /// Values are truncated toward zero; out-of-range values wrap modulo
    /// 2^16 rather than saturate.
    pub fn quantize(raw: &[f64]) -> Self {
        let samples = raw.iter().map(|&value| value as i64 as i16).collect();
        Self { samples }
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_truncates_toward_zero() {
        let waveform = Waveform::quantize(&[1.9, -1.9, 0.4, -0.4]);
        assert_eq!(waveform.samples(), &[1, -1, 0, 0]);
    }

    #[test]
    fn quantize_wraps_out_of_range_values() {
        let waveform = Waveform::quantize(&[40_000.0, -40_000.0, 32_767.0, -32_768.0]);
        assert_eq!(waveform.samples(), &[-25_536, 25_536, 32_767, -32_768]);
    }

    #[test]
    fn length_matches_input() {
        let waveform = Waveform::quantize(&[0.0; 16]);
        assert_eq!(waveform.len(), 16);
        assert!(!waveform.is_empty());
    }
}
