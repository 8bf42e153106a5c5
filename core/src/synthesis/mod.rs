pub mod dc;
pub mod tone;

pub use dc::build_dc_waveform;
pub use tone::build_tone_waveform;
