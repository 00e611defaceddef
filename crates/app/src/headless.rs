//! Headless `--headless` mode: a blocking loop that reads JSON commands from
//! stdin and writes JSON responses to stdout.
//!
//! Each line of stdin is one `WellCommand`; each line of stdout is one
//! `WellResponse`. See [`drawdown::protocol`] for the schema. Diagnostics go
//! to stderr so stdout stays machine-readable.

use std::io::{self, BufRead, Write};
use std::path::Path;

use bevy::prelude::*;

use drawdown::config::{ViewerConfig, CONFIG_ENV_VAR};
use drawdown::protocol::{
    error_payload, make_response, process_stateless, ResponsePayload, WellCommand, WellResponse,
    PROTOCOL_VERSION,
};
use drawdown::{DrawdownCurveState, DrawdownInputs, DrawdownPlugin};

/// Run the session on stdin/stdout. Returns the process exit code.
pub fn run_headless_mode(config_path: Option<&Path>) -> i32 {
    let env_path = std::env::var_os(CONFIG_ENV_VAR);
    let config = match config_path.or(env_path.as_deref().map(Path::new)) {
        Some(path) => match ViewerConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("config {}: {e}", path.display());
                return 2;
            }
        },
        None => ViewerConfig::default(),
    };

    let mut app = build_app(config.inputs);

    eprintln!(
        "wellview headless mode v{} ready, waiting for commands on stdin",
        PROTOCOL_VERSION
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = run_session(stdin.lock(), stdout.lock(), &mut app);

    eprintln!("wellview headless mode shutting down");
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("headless session I/O error: {e}");
            1
        }
    }
}

/// Minimal app with only the drawdown plugin; no window, no UI.
pub(crate) fn build_app(inputs: DrawdownInputs) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(inputs)
        .add_plugins(DrawdownPlugin);
    // Initial update so the first curve exists before any command arrives.
    app.update();
    app
}

/// Read commands until `quit` or end of input.
pub(crate) fn run_session<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    app: &mut App,
) -> io::Result<()> {
    write_response(&mut output, &make_response(ResponsePayload::Ready))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<WellCommand>(&line) {
            Ok(cmd) => process_command(cmd, app),
            Err(e) => make_response(ResponsePayload::Error {
                message: format!("Parse error: {e}"),
            }),
        };
        let is_goodbye = matches!(response.payload, ResponsePayload::Goodbye);

        write_response(&mut output, &response)?;

        if is_goodbye {
            break;
        }
    }
    Ok(())
}

fn write_response<W: Write>(output: &mut W, response: &WellResponse) -> io::Result<()> {
    serde_json::to_writer(&mut *output, response)?;
    writeln!(output)?;
    output.flush()
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

pub(crate) fn process_command(cmd: WellCommand, app: &mut App) -> WellResponse {
    if let Some(payload) = process_stateless(&cmd) {
        return make_response(payload);
    }

    match cmd {
        WellCommand::SetInputs { inputs } => {
            if let Err(e) = inputs.validate() {
                return make_response(error_payload(e));
            }
            *app.world_mut().resource_mut::<DrawdownInputs>() = inputs;
            // Run one frame so the plugin rebuilds the curve.
            app.update();
            make_response(ResponsePayload::Ok)
        }

        WellCommand::Curve => {
            let state = app.world().resource::<DrawdownCurveState>();
            match (&state.curve, &state.error) {
                (_, Some(e)) => make_response(error_payload(e)),
                (Some(curve), None) => make_response(ResponsePayload::Curve {
                    curve: curve.clone(),
                }),
                (None, None) => make_response(ResponsePayload::Error {
                    message: "No curve has been built yet".to_string(),
                }),
            }
        }

        WellCommand::Quit => make_response(ResponsePayload::Goodbye),

        other => make_response(ResponsePayload::Error {
            message: format!("Unhandled command: {other:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> Vec<serde_json::Value> {
        let mut app = build_app(DrawdownInputs::default());
        let mut out = Vec::new();
        run_session(script.as_bytes(), &mut out, &mut app).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_session_starts_with_ready() {
        let responses = run("");
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["type"], "ready");
        assert_eq!(responses[0]["protocol_version"], PROTOCOL_VERSION);
    }

    #[test]
    fn test_curve_after_set_inputs() {
        let responses = run(concat!(
            r#"{"cmd":"set_inputs","inputs":{"outer_radius":120.0,"mode":"raw"}}"#,
            "\n",
            r#"{"cmd":"curve"}"#,
            "\n",
        ));
        assert_eq!(responses[1]["type"], "ok");
        assert_eq!(responses[2]["type"], "curve");
        let radii = responses[2]["curve"]["radii"].as_array().unwrap();
        assert_eq!(radii.last().unwrap().as_f64(), Some(120.0));
        assert_eq!(responses[2]["curve"]["mode"], "raw");
    }

    #[test]
    fn test_invalid_inputs_leave_curve_untouched() {
        let responses = run(concat!(
            r#"{"cmd":"set_inputs","inputs":{"outer_radius":0.05}}"#,
            "\n",
            r#"{"cmd":"curve"}"#,
            "\n",
        ));
        assert_eq!(responses[1]["type"], "error");
        assert_eq!(responses[2]["type"], "curve");
        let radii = responses[2]["curve"]["radii"].as_array().unwrap();
        assert_eq!(radii.last().unwrap().as_f64(), Some(1000.0));
    }

    #[test]
    fn test_oversized_sampling_is_an_error_not_a_crash() {
        let responses = run(concat!(
            r#"{"cmd":"set_inputs","inputs":{"sampling":{"kind":"uniform","count":18446744073709551615}}}"#,
            "\n",
            r#"{"cmd":"curve"}"#,
            "\n",
        ));
        assert_eq!(responses.len(), 3);
        assert_eq!(responses[1]["type"], "error");
        assert_eq!(responses[2]["type"], "curve");
    }

    #[test]
    fn test_parse_error_then_quit_stops_reading() {
        let responses = run(concat!(
            "not json\n",
            "\n",
            r#"{"cmd":"quit"}"#,
            "\n",
            r#"{"cmd":"curve"}"#,
            "\n",
        ));
        assert_eq!(responses.len(), 3);
        assert_eq!(responses[1]["type"], "error");
        assert!(responses[1]["message"]
            .as_str()
            .unwrap()
            .starts_with("Parse error"));
        assert_eq!(responses[2]["type"], "goodbye");
    }

    #[test]
    fn test_stateless_command_through_session() {
        let responses = run(concat!(
            r#"{"cmd":"invert_transmissivity","discharge":50.0,"h1":2.0,"h2":2.0,"r1":1.0,"r2":9.0}"#,
            "\n",
        ));
        assert_eq!(responses[1]["type"], "value");
        assert_eq!(responses[1]["value"].as_f64(), Some(0.0));
    }
}
