use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CONDUCTIVITY, DEFAULT_TRANSMISSIVITY};

/// Aquifer type together with the one hydraulic property its equation needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AquiferModel {
    /// Confined aquifer (Thiem). Transmissivity in m²/d.
    Confined { transmissivity: f64 },
    /// Unconfined aquifer (Dupuit-Forchheimer). Hydraulic conductivity in m/d.
    Unconfined { conductivity: f64 },
}

impl Default for AquiferModel {
    fn default() -> Self {
        AquiferModel::Confined {
            transmissivity: DEFAULT_TRANSMISSIVITY,
        }
    }
}

impl AquiferModel {
    pub fn confined(transmissivity: f64) -> Self {
        AquiferModel::Confined { transmissivity }
    }

    pub fn unconfined(conductivity: f64) -> Self {
        AquiferModel::Unconfined { conductivity }
    }

    /// Default unconfined model (K = 8 m/d).
    pub fn default_unconfined() -> Self {
        AquiferModel::Unconfined {
            conductivity: DEFAULT_CONDUCTIVITY,
        }
    }

    pub fn is_confined(&self) -> bool {
        matches!(self, AquiferModel::Confined { .. })
    }
}

/// How the plotted drawdown is derived from head.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawdownMode {
    /// `s(r) = |h(r)|`.
    Raw,
    /// `s(r) = |h(r)| - |h(r2)|`, zero at the outer boundary.
    #[default]
    Normalized,
}

impl DrawdownMode {
    pub fn label(self) -> &'static str {
        match self {
            DrawdownMode::Raw => "Raw |h|",
            DrawdownMode::Normalized => "Relative to r2",
        }
    }
}

/// Head value that distinguishes a computed result from a degenerate input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum HeadEstimate {
    Defined(f64),
    /// Zero transmissivity or conductivity; the sentinel form returns `0.0`.
    Undefined,
}

impl HeadEstimate {
    pub fn value(self) -> Option<f64> {
        match self {
            HeadEstimate::Defined(v) => Some(v),
            HeadEstimate::Undefined => None,
        }
    }

    /// Collapse to the sentinel convention used on the interactive path.
    pub fn or_sentinel(self) -> f64 {
        self.value().unwrap_or(0.0)
    }
}
