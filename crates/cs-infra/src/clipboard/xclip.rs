//! Clipboard adapter shelling out to xclip.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use cs_core::errors::ClipboardError;
use cs_core::ports::ClipboardPort;

/// Program plus arguments for one direction of clipboard access.
#[derive(Debug, Clone)]
pub struct ClipboardCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ClipboardCommand {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Clipboard access through the xclip CLI.
///
/// Both directions run an external program with a hard timeout, so a
/// clipboard provider that stops responding surfaces as
/// [`ClipboardError::Timeout`] instead of hanging the caller. The
/// commands are injectable; tests substitute plain shell utilities.
pub struct XclipClipboard {
    read_command: ClipboardCommand,
    write_command: ClipboardCommand,
    timeout: Duration,
}

impl XclipClipboard {
    /// Standard xclip invocations against the CLIPBOARD selection.
    pub fn new(timeout: Duration) -> Self {
        Self::with_commands(
            ClipboardCommand::new("xclip", &["-o", "-selection", "clipboard"]),
            ClipboardCommand::new("xclip", &["-selection", "clipboard"]),
            timeout,
        )
    }

    pub fn with_commands(
        read_command: ClipboardCommand,
        write_command: ClipboardCommand,
        timeout: Duration,
    ) -> Self {
        Self {
            read_command,
            write_command,
            timeout,
        }
    }

    fn command_failed(
        command: &ClipboardCommand,
        reason: impl Into<String>,
    ) -> ClipboardError {
        ClipboardError::CommandFailed {
            command: command.display(),
            reason: reason.into(),
        }
    }

    fn check_status(
        command: &ClipboardCommand,
        output: &std::process::Output,
    ) -> Result<(), ClipboardError> {
        if output.status.success() {
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = if stderr.trim().is_empty() {
            output.status.to_string()
        } else {
            format!("{} ({})", output.status, stderr.trim())
        };
        Err(Self::command_failed(command, reason))
    }
}

#[async_trait]
impl ClipboardPort for XclipClipboard {
    async fn read(&self) -> Result<String, ClipboardError> {
        let mut cmd = Command::new(&self.read_command.program);
        cmd.args(&self.read_command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd
            .spawn()
            .map_err(|err| Self::command_failed(&self.read_command, err.to_string()))?;
        debug!(command = %self.read_command.display(), "reading clipboard");

        let output = match timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result
                .map_err(|err| Self::command_failed(&self.read_command, err.to_string()))?,
            // kill_on_drop reaps the abandoned child
            Err(_) => {
                return Err(ClipboardError::Timeout {
                    timeout: self.timeout,
                })
            }
        };

        Self::check_status(&self.read_command, &output)?;
        String::from_utf8(output.stdout).map_err(|_| ClipboardError::InvalidData)
    }

    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let mut cmd = Command::new(&self.write_command.program);
        cmd.args(&self.write_command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = cmd
            .spawn()
            .map_err(|err| Self::command_failed(&self.write_command, err.to_string()))?;
        debug!(command = %self.write_command.display(), "writing clipboard");

        let text = text.to_owned();
        let result = timeout(self.timeout, async move {
            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(text.as_bytes()).await?;
                stdin.shutdown().await?;
            }
            child.wait_with_output().await
        })
        .await;

        let output = match result {
            Ok(io_result) => io_result
                .map_err(|err| Self::command_failed(&self.write_command, err.to_string()))?,
            Err(_) => {
                return Err(ClipboardError::Timeout {
                    timeout: self.timeout,
                })
            }
        };

        Self::check_status(&self.write_command, &output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(read: ClipboardCommand, write: ClipboardCommand) -> XclipClipboard {
        XclipClipboard::with_commands(read, write, Duration::from_secs(2))
    }

    fn unused() -> ClipboardCommand {
        ClipboardCommand::new("true", &[])
    }

    #[tokio::test]
    async fn read_returns_command_stdout() {
        let clipboard = adapter(ClipboardCommand::new("echo", &["hello"]), unused());
        assert_eq!(clipboard.read().await.unwrap(), "hello\n");
    }

    #[tokio::test]
    async fn read_maps_nonzero_exit_to_command_failed() {
        let clipboard = adapter(ClipboardCommand::new("false", &[]), unused());
        let err = clipboard.read().await.unwrap_err();
        assert!(matches!(err, ClipboardError::CommandFailed { .. }), "{err}");
    }

    #[tokio::test]
    async fn read_maps_missing_program_to_command_failed() {
        let clipboard = adapter(
            ClipboardCommand::new("clipstash-no-such-program", &[]),
            unused(),
        );
        let err = clipboard.read().await.unwrap_err();
        assert!(matches!(err, ClipboardError::CommandFailed { .. }), "{err}");
    }

    #[tokio::test]
    async fn read_times_out_on_hung_command() {
        let clipboard = XclipClipboard::with_commands(
            ClipboardCommand::new("sleep", &["5"]),
            unused(),
            Duration::from_millis(50),
        );
        let err = clipboard.read().await.unwrap_err();
        assert!(matches!(err, ClipboardError::Timeout { .. }), "{err}");
    }

    #[tokio::test]
    async fn read_rejects_non_utf8_output() {
        let clipboard = adapter(ClipboardCommand::new("printf", &["\\xff\\xfe"]), unused());
        let err = clipboard.read().await.unwrap_err();
        assert!(matches!(err, ClipboardError::InvalidData), "{err}");
    }

    #[tokio::test]
    async fn write_pipes_text_to_command_stdin() {
        // cat drains stdin and exits 0 once the pipe closes
        let clipboard = adapter(unused(), ClipboardCommand::new("cat", &[]));
        clipboard.write("some text\nwith lines").await.unwrap();
    }

    #[tokio::test]
    async fn write_maps_failing_command_to_command_failed() {
        let clipboard = adapter(unused(), ClipboardCommand::new("false", &[]));
        let err = clipboard.write("ignored").await.unwrap_err();
        assert!(matches!(err, ClipboardError::CommandFailed { .. }), "{err}");
    }
}
