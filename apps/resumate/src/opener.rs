use std::process::{Command, Stdio};

use tracing::{info, warn};

/// Hands a URL to whatever displays it. Fire-and-forget: failures are logged,
/// never returned.
pub trait ResourceOpener: Send + Sync {
    fn open(&self, url: &str);
}

/// Opens URLs with the platform's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    fn command(url: &str) -> Command {
        if cfg!(target_os = "windows") {
            let mut command = Command::new("cmd");
            command.args(["/C", "start", "", url]);
            command
        } else if cfg!(target_os = "macos") {
            let mut command = Command::new("open");
            command.arg(url);
            command
        } else {
            let mut command = Command::new("xdg-open");
            command.arg(url);
            command
        }
    }
}

impl ResourceOpener for SystemOpener {
    fn open(&self, url: &str) {
        info!(url, "Opening resource");
        let spawned = Self::command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        if let Err(e) = spawned {
            warn!(url, "Failed to open resource: {e}");
        }
    }
}
