use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Builds the command that opens `path`, in `app` if given, otherwise in the
/// platform's default handler for GIFs.
pub fn open_command(path: &Path, app: Option<&str>) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        if let Some(app) = app {
            cmd.arg("-a").arg(app);
        }
        cmd.arg(path);
        cmd
    } else if let Some(app) = app {
        let mut cmd = Command::new(app);
        cmd.arg(path);
        cmd
    } else if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        // `start` treats its first quoted argument as a window title
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

/// Opens `path`. A named app outside macOS is started and left running;
/// the platform openers return at once, so their exit status is checked.
pub fn launch(path: &Path, app: Option<&str>) -> Result<()> {
    let mut cmd = open_command(path, app);
    let program = cmd.get_program().to_string_lossy().into_owned();

    if app.is_some() && !cfg!(target_os = "macos") {
        cmd.spawn()
            .with_context(|| format!("failed to start viewer {program}"))?;
        return Ok(());
    }

    let output = cmd
        .output()
        .with_context(|| format!("failed to start viewer {program}"))?;

    if output.status.success() {
        Ok(())
    } else {
        let err = String::from_utf8_lossy(&output.stderr).trim().to_string();
        anyhow::bail!("viewer exited with {}: {err}", output.status);
    }
}
