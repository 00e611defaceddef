//! Radial sampling: the radii at which head is evaluated.
//!
//! Two policies are supported. `TwoTier` (the default) places samples every
//! 0.15 m up to 30 m where head varies fastest, then every 10 m out to the
//! boundary. `Uniform` spreads a fixed count of samples over
//! `[rw + r2/1000, r2]`. Both end exactly on `r2`.

pub mod calculations;
pub mod types;

pub use calculations::sample_radii;
pub use types::SamplingPolicy;
