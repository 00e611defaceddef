//! Physical defaults, slider bounds, and sampling constants.

/// Fixed radius of the pumping well (m).
pub const WELL_RADIUS: f64 = 0.15;

/// Hydraulic head at the outer boundary used by the interactive viewer (m).
pub const REFERENCE_HEAD: f64 = 0.0;

/// Default well discharge (m³/d).
pub const DEFAULT_DISCHARGE: f64 = 272.83;

/// Default transmissivity of the confined aquifer (m²/d).
pub const DEFAULT_TRANSMISSIVITY: f64 = 8.0;

/// Default hydraulic conductivity of the unconfined aquifer (m/d).
pub const DEFAULT_CONDUCTIVITY: f64 = 8.0;

/// Default outer radius of the plotted domain (m).
pub const DEFAULT_OUTER_RADIUS: f64 = 1000.0;

// -----------------------------------------------------------------------------
// Slider bounds
// -----------------------------------------------------------------------------

/// Discharge slider range (m³/d).
pub const DISCHARGE_RANGE: (f64, f64) = (0.0, 500.0);

/// Transmissivity slider range as log10 exponents (10⁻² .. 10³ m²/d).
pub const TRANSMISSIVITY_EXPONENT_RANGE: (f64, f64) = (-2.0, 3.0);

/// Conductivity slider range as log10 exponents (10⁻³ .. 10³ m/d).
pub const CONDUCTIVITY_EXPONENT_RANGE: (f64, f64) = (-3.0, 3.0);

/// Outer radius slider range (m).
pub const OUTER_RADIUS_RANGE: (f64, f64) = (10.0, 1000.0);

/// Outer radius slider step (m).
pub const OUTER_RADIUS_STEP: f64 = 10.0;

// -----------------------------------------------------------------------------
// Sampling
// -----------------------------------------------------------------------------

/// Fine radial step used close to the well (m).
pub const FINE_STEP: f64 = 0.15;

/// Radius at which two-tier sampling switches from the fine to the coarse step (m).
pub const TRANSITION_RADIUS: f64 = 30.0;

/// Coarse radial step used far from the well (m).
pub const COARSE_STEP: f64 = 10.0;

/// Sample count for uniform sampling.
pub const UNIFORM_SAMPLE_COUNT: usize = 1000;

/// Uniform sampling starts at `rw + r2 / UNIFORM_START_DIVISOR`.
pub const UNIFORM_START_DIVISOR: f64 = 1000.0;

/// Upper bound on the number of radii any sampling policy may produce.
pub const MAX_SAMPLES: usize = 100_000;

/// Fraction of a step under which a sample is treated as coinciding with the
/// next tier boundary.
pub(crate) const BOUNDARY_TOLERANCE: f64 = 1e-9;
