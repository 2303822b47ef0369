//! # signet-cli: Command Handlers
//!
//! Subcommand implementations for the `signet` binary. Each module exposes a
//! clap `Args` struct and a `run_*` function returning the process exit code.
//!
//! The handlers are the outer shell around `signet-license`: they load keys
//! from files, move license bytes in and out of the filesystem, and print
//! verdicts. No licensing logic lives here.

pub mod demo;
pub mod issue;
pub mod keygen;
pub mod validate;
