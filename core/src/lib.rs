//! Waveform-synthesis core for the Rust AWG test-signal toolkit.
//!
//! Requests are validated, synthesized as real-valued sample buffers, fitted
//! to their peak range by a scaling stage, then quantized to 16-bit samples
//! and serialized in text or binary form.

pub mod encode;
pub mod math;
pub mod prelude;
pub mod scaling;
pub mod synthesis;
pub mod telemetry;
pub mod waveform;

pub use prelude::{ScalingStage, StageInput, StageOutput};
