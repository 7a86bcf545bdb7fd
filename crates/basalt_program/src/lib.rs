//! Invocation of the external bitstream-flashing tool.
//!
//! Boards contribute a fixed argument template ([`ProgramOptions`]); the
//! [`Flasher`] resolves the `openFPGALoader` executable (honoring the
//! `OPENFPGALOADER` environment override) and runs it against a bitstream
//! file as a single blocking child process. There is no retry, timeout, or
//! cancellation; a nonzero exit status is surfaced to the caller.

#![warn(missing_docs)]

pub mod invoke;

pub use invoke::{Flasher, ProgramError, ProgramOptions, DEFAULT_LOADER, LOADER_ENV};
