use anyhow::Result;

use super::super::{
    args::{CheckCommand, OutputFormat},
    exit_status::ExitStatus,
    report,
};
use crate::core::CheckContext;

/// Run a full check and print the report.
///
/// Fails (exit 1) when the overall score is below the threshold.
pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = CheckContext::new(&cmd.common)?;
    if let Some(path) = &ctx.config_path {
        tracing::debug!(config = %path.display(), "loaded configuration");
    }
    tracing::debug!(files = ctx.files.len(), "starting check");

    let result = ctx.run()?;

    match cmd.format {
        OutputFormat::Text => report::print_text(&result, cmd.common.verbose),
        OutputFormat::Json => report::print_json(&result)?,
    }

    Ok(if result.score.passed {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    })
}
