//! BMF font CLI library.
//!
//! Command implementations behind the `bmfont` binary. Each command returns an
//! [`std::process::ExitCode`] so it can be driven from tests without spawning
//! a process.

pub mod commands;
