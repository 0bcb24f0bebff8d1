use std::path::Path;
use std::process::Command;

use log::info;

use crate::error::{Result, TraceError};

/// Platform launcher for an image file.
pub fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "/WAIT", ""]).arg(path);
        cmd
    } else if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg("-W").arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

/// Opens the written figure and waits for the launcher.
/// `open -W` and `start /WAIT` block until the viewer is closed;
/// `xdg-open` returns as soon as the viewer is spawned.
pub fn show_image(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TraceError::Display(format!("{} does not exist", path.display())));
    }

    let mut cmd = viewer_command(path);
    info!("Opening {} with {:?}", path.display(), cmd.get_program());
    let status = cmd
        .status()
        .map_err(|e| TraceError::Display(format!("could not launch viewer: {e}")))?;
    if !status.success() {
        return Err(TraceError::Display(format!("viewer exited with {status}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_gets_the_image_path() {
        let cmd = viewer_command(Path::new("altitude.png"));
        assert!(cmd.get_args().any(|a| a == "altitude.png"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_uses_xdg_open() {
        let cmd = viewer_command(Path::new("altitude.png"));
        assert_eq!(cmd.get_program(), "xdg-open");
    }

    #[test]
    fn missing_image_is_reported() {
        let err = show_image("does/not/exist.png").unwrap_err();
        assert!(matches!(err, TraceError::Display(_)));
    }
}
