//! # flaskcli
//!
//! Command-line tool for scaffolding and managing Flask projects.
//!
//! This crate provides the `flaskcli` binary with the following commands:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `flaskcli init` | Create a project from the bundled template and provision its virtualenv |
//! | `flaskcli install <deps>` | Install comma-separated packages into the project's virtualenv |
//! | `flaskcli route <method> <path>` | Insert a route handler into `app.py` |
//! | `flaskcli run` | Start `app.py` with the project's interpreter |
//! | `flaskcli doctor` | Run project health diagnostics |
//! | `flaskcli help` | Print usage |
//!
//! ## Architecture
//!
//! - [`cli`]: argument model and help pre-dispatch
//! - [`commands`]: one module per command, plus [`commands::provision`] and
//!   [`commands::templates`]
//! - [`process`]: the [`process::ProcessRunner`] seam every `python`/`pip`
//!   call goes through
//! - [`prompt`]: interactive questions for `init`
//! - [`platform`]: venv executable layout per operating system
//! - [`config`]: optional `flaskcli.yaml` overrides
//! - [`error`]: [`error::CliError`] and its exit codes
//! - [`logging`]: `tracing` subscriber setup

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod process;
pub mod prompt;
