//! Route command implementation

use crate::cli::RouteArgs;
use crate::output::OutputWriter;
use crate::output_types::RouteOutput;
use anyhow::Result;
use overwatch_sync::resolve_targets;

pub fn execute(args: RouteArgs, output: &OutputWriter) -> Result<()> {
    let targets = resolve_targets(args.mode, &args.maps, args.active.as_deref());
    tracing::debug!(
        mode = %args.mode,
        layout = args.maps.len(),
        targets = targets.len(),
        "Resolved targets"
    );

    if output.is_json() {
        output.result(RouteOutput {
            mode: args.mode.to_string(),
            active: args.active,
            targets,
        })?;
        return Ok(());
    }

    output.kv("Mode", args.mode);
    output.kv("Layout", args.maps.join(", "));
    output.kv("Active", args.active.as_deref().unwrap_or("(none)"));

    if targets.is_empty() {
        output.warning("No viewport selected");
    } else {
        output.success(format!("Targets: {}", targets.join(", ")));
    }

    Ok(())
}
