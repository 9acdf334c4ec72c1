//! # frost-power
//!
//! Suspend control for frost, driving the kernel power-state file under
//! sysfs. Writing a recognized keyword to that file starts the transition
//! immediately, so a successful [`PowerSwitch::suspend`] usually returns
//! only after the machine resumes.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

/// The power-state control file exposed by sysfs.
pub const POWER_STATE_FILE: &str = "/sys/power/state";

/// Upper bound on the bytes written per request, derived from the longest
/// valid mode payload.
const MAX_MODE_LEN: usize = SuspendMode::Disk.as_str().len();

#[derive(Error, Debug)]
pub enum SuspendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SuspendError>;

/// The two power states a suspend request can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspendMode {
    /// Suspend to RAM.
    Memory,
    /// Suspend to disk (hibernate to a swap partition).
    Disk,
}

impl SuspendMode {
    /// The exact payload the kernel expects for this mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            SuspendMode::Memory => "mem",
            SuspendMode::Disk => "disk",
        }
    }
}

/// Handle on the power-state control file.
#[derive(Debug, Clone)]
pub struct PowerSwitch {
    path: PathBuf,
}

impl PowerSwitch {
    /// A switch driving the real sysfs control file.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(POWER_STATE_FILE),
        }
    }

    /// A switch driving an alternate control file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Request a suspend by writing `mode`'s payload to the control file.
    ///
    /// A single attempt: open write-only, write the payload, done. The file
    /// handle is released on every return path. Open and write failures
    /// both surface as [`SuspendError`]; nothing is retried.
    pub fn suspend(&self, mode: SuspendMode) -> Result<()> {
        debug!("writing {:?} to {:?}", mode.as_str(), self.path);
        let mut file = OpenOptions::new().write(true).open(&self.path)?;
        let payload = mode.as_str().as_bytes();
        file.write_all(&payload[..payload.len().min(MAX_MODE_LEN)])?;
        Ok(())
    }
}

impl Default for PowerSwitch {
    fn default() -> Self {
        Self::new()
    }
}
