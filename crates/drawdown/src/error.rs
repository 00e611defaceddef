// ---------------------------------------------------------------------------
// ParameterError / ConfigError: rejected inputs and unreadable configs
// ---------------------------------------------------------------------------

use std::fmt;

/// Reasons a set of well/aquifer parameters is rejected before reaching the
/// math core.
///
/// The formulas themselves never fail; these are boundary checks performed by
/// whoever collects the parameters (UI sliders, config files, protocol input).
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter was NaN or infinite.
    NonFinite { name: &'static str },
    /// Discharge must be >= 0.
    NegativeDischarge(f64),
    /// Well radius must be > 0.
    NonPositiveWellRadius(f64),
    /// The outer radius must lie strictly beyond the well radius.
    OuterRadiusNotBeyondWell { well_radius: f64, outer_radius: f64 },
    /// Transmissivity must be > 0 for a physical confined curve.
    NonPositiveTransmissivity(f64),
    /// Conductivity must be > 0; the Dupuit-Forchheimer term divides by it.
    NonPositiveConductivity(f64),
    /// A sampling policy that cannot produce any radius (zero count or step).
    EmptySampling,
    /// A sampling policy that would produce more than `max` radii.
    TooManySamples { estimated: f64, max: usize },
    /// An evaluation radius was zero or negative.
    NonPositiveRadius(f64),
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::NonFinite { name } => write!(f, "{name} must be a finite number"),
            ParameterError::NegativeDischarge(q) => {
                write!(f, "Discharge must not be negative (got {q})")
            }
            ParameterError::NonPositiveWellRadius(rw) => {
                write!(f, "Well radius must be positive (got {rw})")
            }
            ParameterError::OuterRadiusNotBeyondWell {
                well_radius,
                outer_radius,
            } => write!(
                f,
                "Outer radius {outer_radius} must be greater than well radius {well_radius}"
            ),
            ParameterError::NonPositiveTransmissivity(t) => {
                write!(f, "Transmissivity must be positive (got {t})")
            }
            ParameterError::NonPositiveConductivity(k) => {
                write!(f, "Hydraulic conductivity must be positive (got {k})")
            }
            ParameterError::EmptySampling => {
                write!(f, "Sampling policy needs a positive count and positive steps")
            }
            ParameterError::TooManySamples { estimated, max } => write!(
                f,
                "Sampling policy would produce about {estimated:.0} radii (limit {max})"
            ),
            ParameterError::NonPositiveRadius(r) => {
                write!(f, "Evaluation radius must be positive (got {r})")
            }
        }
    }
}

impl std::error::Error for ParameterError {}

/// Errors raised while loading a [`crate::config::ViewerConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io(std::io::Error),
    /// The file was read but is not valid config JSON.
    Parse(serde_json::Error),
    /// The config parsed but holds parameters the core would reject.
    Invalid(ParameterError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "Config parse error: {e}"),
            ConfigError::Invalid(e) => write!(f, "Invalid config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<ParameterError> for ConfigError {
    fn from(e: ParameterError) -> Self {
        ConfigError::Invalid(e)
    }
}
