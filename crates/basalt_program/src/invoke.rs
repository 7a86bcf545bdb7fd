//! Blocking invocation of `openFPGALoader`.

use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::Command;

/// Environment variable overriding the flashing-tool executable.
pub const LOADER_ENV: &str = "OPENFPGALOADER";

/// Default flashing-tool executable name, looked up on `PATH`.
pub const DEFAULT_LOADER: &str = "openFPGALoader";

/// The fixed arguments a board contributes ahead of the bitstream path.
///
/// Trellis boards program over SPI (`-m`); the Xilinx boards select the
/// FT232 cable and verbose output (`-v -c ft232`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramOptions {
    args: Vec<String>,
}

impl ProgramOptions {
    /// Creates an argument template from a list of flags.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the arguments inserted before the bitstream path.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Errors from invoking the flashing tool.
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// The tool process could not be started at all.
    #[error("failed to launch '{tool}': {source}")]
    Launch {
        /// The executable that was invoked.
        tool: String,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// The tool ran but exited with a nonzero status.
    #[error("'{tool}' exited with status {code:?}")]
    Failed {
        /// The executable that was invoked.
        tool: String,
        /// The exit code, if the process exited normally.
        code: Option<i32>,
    },
}

/// Resolves and invokes the external flashing tool.
#[derive(Debug, Clone)]
pub struct Flasher {
    tool: OsString,
}

impl Flasher {
    /// Creates a flasher using the `OPENFPGALOADER` environment override,
    /// falling back to `openFPGALoader` on `PATH`.
    pub fn from_env() -> Self {
        let tool = std::env::var_os(LOADER_ENV).unwrap_or_else(|| OsString::from(DEFAULT_LOADER));
        Self { tool }
    }

    /// Creates a flasher invoking a specific executable.
    pub fn with_tool(tool: impl Into<OsString>) -> Self {
        Self { tool: tool.into() }
    }

    /// Returns the executable this flasher will invoke.
    pub fn tool(&self) -> &OsStr {
        &self.tool
    }

    /// Flashes a bitstream: runs `<tool> <options…> <bitstream>` and waits
    /// for it to exit.
    ///
    /// The child inherits stdio so the tool's progress output reaches the
    /// terminal. Returns `Ok(())` only on exit status zero.
    pub fn program(&self, options: &ProgramOptions, bitstream: &Path) -> Result<(), ProgramError> {
        let status = Command::new(&self.tool)
            .args(options.args())
            .arg(bitstream)
            .status()
            .map_err(|source| ProgramError::Launch {
                tool: self.tool.to_string_lossy().into_owned(),
                source,
            })?;

        if !status.success() {
            return Err(ProgramError::Failed {
                tool: self.tool.to_string_lossy().into_owned(),
                code: status.code(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_hold_args() {
        let opts = ProgramOptions::new(["-v", "-c", "ft232"]);
        assert_eq!(opts.args(), &["-v", "-c", "ft232"]);
        assert_eq!(ProgramOptions::default().args().len(), 0);
    }

    #[test]
    fn options_serde_roundtrip() {
        let opts = ProgramOptions::new(["-m"]);
        let json = serde_json::to_string(&opts).unwrap();
        let restored: ProgramOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(opts, restored);
    }

    #[test]
    fn zero_exit_is_ok() {
        let flasher = Flasher::with_tool("true");
        let result = flasher.program(&ProgramOptions::default(), Path::new("design.bit"));
        assert!(result.is_ok());
    }

    #[test]
    fn nonzero_exit_surfaces_as_failure() {
        let flasher = Flasher::with_tool("false");
        let err = flasher
            .program(&ProgramOptions::default(), Path::new("design.bit"))
            .unwrap_err();
        match err {
            ProgramError::Failed { tool, code } => {
                assert_eq!(tool, "false");
                assert_eq!(code, Some(1));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn missing_tool_is_launch_error() {
        let flasher = Flasher::with_tool("/nonexistent/openFPGALoader");
        let err = flasher
            .program(&ProgramOptions::default(), Path::new("design.bit"))
            .unwrap_err();
        assert!(matches!(err, ProgramError::Launch { .. }));
    }

    #[test]
    fn env_override_resolution() {
        // set_var/remove_var are process-global; keep both cases in one
        // test to avoid racing a parallel test over the same variable.
        std::env::remove_var(LOADER_ENV);
        assert_eq!(Flasher::from_env().tool(), DEFAULT_LOADER);

        std::env::set_var(LOADER_ENV, "/opt/bin/custom-loader");
        assert_eq!(Flasher::from_env().tool(), "/opt/bin/custom-loader");
        std::env::remove_var(LOADER_ENV);
    }

    #[test]
    fn failure_display() {
        let err = ProgramError::Failed {
            tool: "openFPGALoader".to_string(),
            code: Some(2),
        };
        assert_eq!(
            format!("{err}"),
            "'openFPGALoader' exited with status Some(2)"
        );
    }
}
