use anyhow::Context;
use std::process::Output;
use tokio::process::Command;

/// How much of a failing tool's stderr is carried into the error message.
const DIAGNOSTIC_TAIL_LINES: usize = 20;

/// Render an invocation the way it would be typed in a shell, for echo lines.
pub(crate) fn render(command: &Command) -> String {
    let std_command = command.as_std();
    let mut line = std_command.get_program().to_string_lossy().into_owned();

    for arg in std_command.get_args() {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }

    line
}

/// Run one external tool to completion, capturing its output.
///
/// Any non-zero exit aborts the caller: the returned error carries the exit
/// status and the tail of the tool's stderr so the failing step is
/// diagnosable without re-running it.
pub(crate) async fn run_tool(mut command: Command, label: &str) -> anyhow::Result<Output> {
    let output = command
        .output()
        .await
        .with_context(|| format!("failed to spawn {label}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "{label} exited with {}:\n{}",
            output.status,
            diagnostic_tail(&stderr)
        );
    }

    Ok(output)
}

fn diagnostic_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.lines().collect();
    let skipped = lines.len().saturating_sub(DIAGNOSTIC_TAIL_LINES);

    if skipped == 0 {
        lines.join("\n")
    } else {
        format!(
            "[... {} earlier lines omitted]\n{}",
            skipped,
            lines[skipped..].join("\n")
        )
    }
}
