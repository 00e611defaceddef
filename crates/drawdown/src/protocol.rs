//! Text protocol types for the `--headless` mode.
//!
//! External programs (scripts, notebooks, test harnesses) drive the core over
//! newline-delimited JSON on stdin/stdout. The I/O loop lives in
//! `crates/app/src/headless.rs`; the types and the stateless command handlers
//! live here so they can be unit-tested without the binary.

use serde::{Deserialize, Serialize};

use crate::constants::WELL_RADIUS;
use crate::curve::{DrawdownCurve, DrawdownInputs};
use crate::model::{evaluate, thiem_discharge, thiem_outer_head, thiem_transmissivity, AquiferModel};
use crate::params::{finite, validate_model, validate_radii, RadialDomain, WellParameters};
use crate::sampling::{sample_radii, SamplingPolicy};

// ---------------------------------------------------------------------------
// Commands (stdin → core)
// ---------------------------------------------------------------------------

/// A single command read from one line of stdin. `cmd` is the discriminator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum WellCommand {
    /// Replace the inputs of the live curve.
    SetInputs { inputs: DrawdownInputs },

    /// Return the curve built from the current inputs.
    Curve,

    /// Sample radii for an arbitrary domain.
    Sample {
        #[serde(default = "default_well_radius")]
        well_radius: f64,
        outer_radius: f64,
        #[serde(default)]
        policy: SamplingPolicy,
    },

    /// Evaluate head at caller-supplied radii.
    Evaluate {
        model: AquiferModel,
        discharge: f64,
        #[serde(default)]
        reference_head: f64,
        #[serde(default = "default_well_radius")]
        well_radius: f64,
        radii: Vec<f64>,
    },

    /// Back-solve the Thiem relation for discharge.
    InvertDischarge {
        transmissivity: f64,
        h1: f64,
        h2: f64,
        r1: f64,
        r2: f64,
    },

    /// Back-solve the Thiem relation for transmissivity.
    InvertTransmissivity {
        discharge: f64,
        h1: f64,
        h2: f64,
        r1: f64,
        r2: f64,
    },

    /// Head at `r2` given the head `h1` at `r1`.
    OuterHead {
        discharge: f64,
        transmissivity: f64,
        h1: f64,
        r1: f64,
        r2: f64,
    },

    /// End the session.
    Quit,
}

fn default_well_radius() -> f64 {
    WELL_RADIUS
}

// ---------------------------------------------------------------------------
// Responses (core → stdout)
// ---------------------------------------------------------------------------

/// Every response carries the protocol version and a tagged payload.
#[derive(Debug, Serialize)]
pub struct WellResponse {
    pub protocol_version: u32,
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponsePayload {
    /// Session is live and accepting commands.
    Ready,
    Curve { curve: DrawdownCurve },
    Radii { radii: Vec<f64> },
    Heads { heads: Vec<f64> },
    /// Scalar result of an inverse relation.
    Value { value: f64 },
    Ok,
    Error { message: String },
    /// Response to `quit`.
    Goodbye,
}

/// Bump when the command/response schema changes.
pub const PROTOCOL_VERSION: u32 = 1;

pub fn make_response(payload: ResponsePayload) -> WellResponse {
    WellResponse {
        protocol_version: PROTOCOL_VERSION,
        payload,
    }
}

/// Handle commands that need no session state.
///
/// Returns `None` for `SetInputs`, `Curve`, and `Quit`, which the session
/// loop handles itself.
pub fn process_stateless(cmd: &WellCommand) -> Option<ResponsePayload> {
    let payload = match cmd {
        WellCommand::Sample {
            well_radius,
            outer_radius,
            policy,
        } => {
            let checked = RadialDomain::new(*well_radius, *outer_radius).and_then(|domain| {
                policy.validate_for(domain.well_radius, domain.outer_radius)?;
                Ok(domain)
            });
            match checked {
                Ok(domain) => ResponsePayload::Radii {
                    radii: sample_radii(domain.well_radius, domain.outer_radius, *policy),
                },
                Err(e) => error_payload(e),
            }
        }

        WellCommand::Evaluate {
            model,
            discharge,
            reference_head,
            well_radius,
            radii,
        } => {
            let checked = WellParameters::new(*discharge, *well_radius)
                .and_then(|_| validate_model(model))
                .and_then(|()| finite("reference head", *reference_head))
                .and_then(|()| validate_radii(radii));
            match checked {
                Ok(()) => ResponsePayload::Heads {
                    heads: evaluate(model, *discharge, *reference_head, *well_radius, radii),
                },
                Err(e) => error_payload(e),
            }
        }

        WellCommand::InvertDischarge {
            transmissivity,
            h1,
            h2,
            r1,
            r2,
        } => ResponsePayload::Value {
            value: thiem_discharge(*transmissivity, *h1, *h2, *r1, *r2),
        },

        WellCommand::InvertTransmissivity {
            discharge,
            h1,
            h2,
            r1,
            r2,
        } => ResponsePayload::Value {
            value: thiem_transmissivity(*discharge, *h1, *h2, *r1, *r2),
        },

        WellCommand::OuterHead {
            discharge,
            transmissivity,
            h1,
            r1,
            r2,
        } => ResponsePayload::Value {
            value: thiem_outer_head(*discharge, *transmissivity, *h1, *r1, *r2),
        },

        WellCommand::SetInputs { .. } | WellCommand::Curve | WellCommand::Quit => return None,
    };
    Some(payload)
}

pub fn error_payload(e: impl std::fmt::Display) -> ResponsePayload {
    ResponsePayload::Error {
        message: e.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> WellCommand {
        serde_json::from_str(line).unwrap()
    }

    #[test]
    fn test_parse_curve_and_quit() {
        assert_eq!(parse(r#"{"cmd":"curve"}"#), WellCommand::Curve);
        assert_eq!(parse(r#"{"cmd":"quit"}"#), WellCommand::Quit);
    }

    #[test]
    fn test_parse_set_inputs_with_defaults() {
        let cmd = parse(r#"{"cmd":"set_inputs","inputs":{"outer_radius":300.0}}"#);
        let WellCommand::SetInputs { inputs } = cmd else {
            panic!("expected set_inputs");
        };
        assert_eq!(inputs.outer_radius, 300.0);
        assert_eq!(inputs.well_radius, WELL_RADIUS);
    }

    #[test]
    fn test_parse_unknown_command_fails() {
        assert!(serde_json::from_str::<WellCommand>(r#"{"cmd":"explode"}"#).is_err());
    }

    #[test]
    fn test_sample_command() {
        let cmd = parse(r#"{"cmd":"sample","outer_radius":1000.0}"#);
        let Some(ResponsePayload::Radii { radii }) = process_stateless(&cmd) else {
            panic!("expected radii");
        };
        assert_eq!(radii[0], WELL_RADIUS);
        assert_eq!(*radii.last().unwrap(), 1000.0);
    }

    #[test]
    fn test_sample_command_rejects_bad_domain() {
        let cmd = parse(r#"{"cmd":"sample","well_radius":5.0,"outer_radius":1.0}"#);
        assert!(matches!(
            process_stateless(&cmd),
            Some(ResponsePayload::Error { .. })
        ));
    }

    #[test]
    fn test_sample_command_rejects_huge_uniform_count() {
        let cmd = parse(
            r#"{"cmd":"sample","outer_radius":1000.0,
                "policy":{"kind":"uniform","count":18446744073709551615}}"#,
        );
        let Some(ResponsePayload::Error { message }) = process_stateless(&cmd) else {
            panic!("expected error");
        };
        assert!(message.contains("limit"), "got: {message}");
    }

    #[test]
    fn test_sample_command_rejects_tiny_step() {
        let cmd = parse(
            r#"{"cmd":"sample","outer_radius":1000.0,
                "policy":{"kind":"two_tier","fine_step":1e-12,"transition_radius":30.0,"coarse_step":10.0}}"#,
        );
        assert!(matches!(
            process_stateless(&cmd),
            Some(ResponsePayload::Error { .. })
        ));
    }

    #[test]
    fn test_evaluate_command_rejects_bad_geometry() {
        let cmd = parse(
            r#"{"cmd":"evaluate","model":{"kind":"confined","transmissivity":8.0},
                "discharge":272.83,"well_radius":-1.0,"radii":[-5.0,10.0]}"#,
        );
        assert!(matches!(
            process_stateless(&cmd),
            Some(ResponsePayload::Error { .. })
        ));

        let cmd = WellCommand::Evaluate {
            model: AquiferModel::confined(8.0),
            discharge: 272.83,
            reference_head: 0.0,
            well_radius: WELL_RADIUS,
            radii: vec![10.0, -5.0],
        };
        let Some(ResponsePayload::Error { message }) = process_stateless(&cmd) else {
            panic!("expected error");
        };
        assert!(message.contains("-5"), "got: {message}");

        let cmd = WellCommand::Evaluate {
            model: AquiferModel::confined(8.0),
            discharge: -1.0,
            reference_head: 0.0,
            well_radius: WELL_RADIUS,
            radii: vec![10.0],
        };
        assert!(matches!(
            process_stateless(&cmd),
            Some(ResponsePayload::Error { .. })
        ));
    }

    #[test]
    fn test_evaluate_command() {
        let cmd = parse(
            r#"{"cmd":"evaluate","model":{"kind":"confined","transmissivity":8.0},
                "discharge":272.83,"radii":[0.15,1000.0]}"#,
        );
        let Some(ResponsePayload::Heads { heads }) = process_stateless(&cmd) else {
            panic!("expected heads");
        };
        assert_eq!(heads.len(), 2);
        assert_eq!(heads[0], 0.0);
        assert!(heads[1] < 0.0);
    }

    #[test]
    fn test_evaluate_command_rejects_zero_conductivity() {
        let cmd = WellCommand::Evaluate {
            model: AquiferModel::unconfined(0.0),
            discharge: 10.0,
            reference_head: 0.0,
            well_radius: WELL_RADIUS,
            radii: vec![1.0],
        };
        let Some(ResponsePayload::Error { message }) = process_stateless(&cmd) else {
            panic!("expected error");
        };
        assert!(message.contains("conductivity"), "got: {message}");
    }

    #[test]
    fn test_inverse_commands() {
        let cmd = WellCommand::InvertTransmissivity {
            discharge: 100.0,
            h1: 3.0,
            h2: 3.0,
            r1: 1.0,
            r2: 10.0,
        };
        assert_eq!(
            process_stateless(&cmd),
            Some(ResponsePayload::Value { value: 0.0 })
        );

        let cmd = WellCommand::InvertDischarge {
            transmissivity: 8.0,
            h1: -1.0,
            h2: 0.0,
            r1: 1.0,
            r2: std::f64::consts::E,
        };
        let Some(ResponsePayload::Value { value }) = process_stateless(&cmd) else {
            panic!("expected value");
        };
        assert!((value - 16.0 * std::f64::consts::PI).abs() < 1e-9);
    }

    #[test]
    fn test_stateful_commands_not_handled() {
        assert_eq!(process_stateless(&WellCommand::Curve), None);
        assert_eq!(process_stateless(&WellCommand::Quit), None);
    }

    #[test]
    fn test_response_envelope_json() {
        let json = serde_json::to_value(make_response(ResponsePayload::Value { value: 2.5 }))
            .unwrap();
        assert_eq!(json["protocol_version"], PROTOCOL_VERSION);
        assert_eq!(json["type"], "value");
        assert_eq!(json["value"], 2.5);

        let json = serde_json::to_value(make_response(ResponsePayload::Goodbye)).unwrap();
        assert_eq!(json["type"], "goodbye");
    }
}
