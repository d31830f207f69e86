//! Driver script handed to the interpreter.

use crate::error::RunnerResult;
use crate::params::AlgorithmParams;

/// Prefix of generated driver script file names.
pub const SCRIPT_PREFIX: &str = "run_dpp_";

/// Renders a driver script that imports the algorithm entry point, calls it
/// with the embedded parameters, and prints its summary as JSON on stdout.
pub fn render_driver_script(params: &AlgorithmParams) -> RunnerResult<String> {
    // Parameters are numbers and nested arrays only, so the JSON text never
    // contains a triple quote.
    let json = params.to_json()?;
    Ok(format!(
        r#""""Temporary script to execute the DPP algorithm."""

import json
import sys

from dppv2.main import execute

params = json.loads(r'''{json}''')

OUTPUT_FIELDS = (
    "result_1",
    "result_2",
    "result_3",
    "result_4",
    "coverage_area_acres",
    "field_area",
    "obstacles_area",
    "flight_angle_degrees",
)

try:
    dpp_out = execute(area_threshold=None, settings=None, **params)
    output = {{name: getattr(dpp_out, name, None) for name in OUTPUT_FIELDS}}
    print(json.dumps(output, indent=2))
    print("\nExecution completed successfully", file=sys.stderr)
except Exception as e:
    print(f"Error: {{e}}", file=sys.stderr)
    import traceback
    traceback.print_exc()
    sys.exit(1)
"#
    ))
}
