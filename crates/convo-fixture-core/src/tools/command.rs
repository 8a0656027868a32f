//! Blocking subprocess execution shared by the command-backed tools

use std::ffi::OsStr;
use std::process::{Command, Stdio};
use tracing::debug;

use crate::error::{Error, Result};

/// Run `command` to completion, mapping a non-zero exit to `Error::ToolFailed`.
///
/// Stdout is passed through; stderr is captured so it can be attached to the error.
pub fn run_tool(tool: &str, command: &mut Command) -> Result<()> {
    let rendered = render_command(command);
    debug!("Running {}: {}", tool, rendered);

    let output = command
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| Error::ToolSpawn {
            tool: tool.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(Error::ToolFailed {
            tool: tool.to_string(),
            command: rendered,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}

/// Render a command line for logs and error messages
pub fn render_command(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(quote_arg)
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote_arg(arg: &OsStr) -> String {
    let arg = arg.to_string_lossy();
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c));

    if plain {
        arg.into_owned()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
