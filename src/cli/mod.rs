//! Interactive numbered-menu front end over [`LedgerManager`].
//!
//! [`LedgerManager`]: crate::core::ledger_manager::LedgerManager

pub mod commands;
pub mod io;
pub mod menus;
pub mod output;
pub mod shell_context;
pub mod ui;

use thiserror::Error;

use crate::errors::LedgerError;

pub use shell_context::{CliMode, ShellContext};

/// Environment variable switching the shell to line-by-line script mode.
pub const SCRIPT_ENV: &str = "POCKET_LEDGER_CLI_SCRIPT";

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("input ended")]
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    context.run()
}
