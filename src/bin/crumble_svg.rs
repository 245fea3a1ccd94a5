//! Renders chart options JSON to SVG on stdout.
//!
//! Usage: `crumble-svg [OPTIONS_JSON_PATH]` (reads stdin when no path is given).

use std::io::{self, Read, Write};
use std::process::ExitCode;

use crumble_chart::render::Scene;
use crumble_chart::{ChartError, ChartOptions, ChartResult, create, telemetry};

fn main() -> ExitCode {
    let _ = telemetry::init_default_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("crumble-svg: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> ChartResult<()> {
    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|e| ChartError::InvalidData(format!("failed to read `{path}`: {e}")))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| ChartError::InvalidData(format!("failed to read stdin: {e}")))?;
            buffer
        }
    };

    let options = ChartOptions::from_json_str(&input)?;
    let chart = create::<Scene>(&options)?;
    io::stdout()
        .write_all(chart.surface.to_svg_string().as_bytes())
        .map_err(|e| ChartError::Surface(format!("failed to write svg: {e}")))
}
