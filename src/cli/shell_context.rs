use std::io::{self, BufReader};
use std::path::PathBuf;

use tracing::warn;

use crate::cli::commands;
use crate::cli::io::{InteractivePrompter, Prompter, ScriptPrompter};
use crate::cli::menus::{main_menu, MenuItem};
use crate::cli::{output, CliError, LoopControl};
use crate::config::{Config, ConfigManager};
use crate::core::ledger_manager::LedgerManager;
use crate::storage::JsonStorage;
use crate::utils::build_info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Session state shared by every menu handler.
pub struct ShellContext {
    pub mode: CliMode,
    pub manager: LedgerManager,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub prompter: Box<dyn Prompter>,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let prompter: Box<dyn Prompter> = match mode {
            CliMode::Interactive => Box::new(InteractivePrompter::new()),
            CliMode::Script => {
                colored::control::set_override(false);
                Box::new(ScriptPrompter::new(BufReader::new(io::stdin())))
            }
        };
        let config_manager = ConfigManager::new()?;
        Self::with_parts(mode, config_manager, prompter)
    }

    /// Builds a session over an explicit data directory and answer source.
    pub fn with_parts(
        mode: CliMode,
        config_manager: ConfigManager,
        prompter: Box<dyn Prompter>,
    ) -> Result<Self, CliError> {
        let config = config_manager.load();
        if !config_manager.path().exists() {
            if let Err(err) = config_manager.save(&config) {
                warn!(
                    path = %config_manager.path().display(),
                    error = %err,
                    "could not write default config"
                );
            }
        }
        let storage = JsonStorage::new(config_manager.resolve(&config.snapshot_file));
        let manager = LedgerManager::open(Box::new(storage));
        Ok(Self {
            mode,
            manager,
            config,
            config_manager,
            prompter,
        })
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<(), CliError> {
        let meta = build_info::current();
        output::info(format!(
            "Pocket Ledger {} ({}, built {}) - data in {}",
            meta.version,
            meta.git_hash,
            meta.timestamp,
            self.config_manager.base_dir().display()
        ));

        loop {
            main_menu::render();
            let choice = match self.prompter.text("Choose a menu item") {
                Ok(choice) => choice,
                Err(CliError::EndOfInput) => break,
                Err(err) => return Err(err),
            };
            let Some(item) = MenuItem::from_choice(&choice) else {
                output::warning("Invalid choice");
                continue;
            };
            match self.handle(item) {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Exit) => break,
                Err(CliError::EndOfInput) => break,
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Runs one menu item, reporting recoverable failures to the user.
    pub(crate) fn handle(&mut self, item: MenuItem) -> Result<LoopControl, CliError> {
        match commands::dispatch(self, item) {
            Ok(control) => Ok(control),
            Err(err @ (CliError::Core(_) | CliError::Input(_))) => {
                self.report_error(&err);
                Ok(LoopControl::Continue)
            }
            Err(err) => Err(err),
        }
    }

    pub fn report_error(&self, err: &CliError) {
        output::error(err);
    }

    /// Warns when the most recent save did not reach disk.
    pub fn report_save_status(&self) {
        if let Some(message) = self.manager.last_save_error() {
            output::warning(format!(
                "Could not save data ({message}); changes are kept for this session only."
            ));
        }
    }

    pub fn export_path(&self) -> PathBuf {
        self.config_manager.resolve(&self.config.export_file)
    }

    pub fn format_amount(&self, value: f64) -> String {
        self.config.currency.format_amount(value)
    }
}
