pub mod normalize;
pub mod peak;

pub use normalize::NormalizeStage;
pub use peak::PeakScaleStage;
