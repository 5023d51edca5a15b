//! Shell context, dispatch, and error reporting for the console front end.

use dialoguer::theme::ColorfulTheme;
use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;

use crate::cli::{commands, output};
use crate::config::{Config, ConfigError, ConfigManager};
use crate::errors::BankError;
use crate::ledger::Ledger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failure of a single command; the loop reports it and keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("Invalid input: {0}")]
    InvalidArguments(String),
    #[error("exit requested")]
    ExitRequested,
}

/// Fatal shell failure that terminates the process.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

/// Holds the ledger, configuration, and mode for one shell session.
pub struct ShellContext {
    mode: CliMode,
    pub(crate) ledger: Ledger,
    pub(crate) config: Config,
    config_manager: ConfigManager,
    pub(crate) theme: ColorfulTheme,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_manager(mode, ConfigManager::new()?)
    }

    /// Builds a context whose configuration lives under `base`. Used by the
    /// test suites to keep the platform config directory untouched.
    pub fn with_config_dir(mode: CliMode, base: std::path::PathBuf) -> Result<Self, CliError> {
        Self::with_manager(mode, ConfigManager::with_base_dir(base)?)
    }

    fn with_manager(mode: CliMode, config_manager: ConfigManager) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        output::apply_config(&config);

        Ok(Self {
            mode,
            ledger: Ledger::new(),
            config,
            config_manager,
            theme: ColorfulTheme::default(),
            running: true,
        })
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn prompt(&self) -> String {
        format!("bank ({} accounts)> ", self.ledger.len())
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        output::apply_config(&self.config);
        Ok(())
    }

    /// Renders an amount for account displays: one fractional digit plus
    /// the configured currency code.
    pub(crate) fn format_balance(&self, amount: f64) -> String {
        format!("{:.1} {}", amount, self.config.currency)
    }

    /// Renders a projected interest amount with two fractional digits.
    pub(crate) fn format_interest(&self, amount: f64) -> String {
        format!("{:.2} {}", amount, self.config.currency)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = commands::handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = commands::names()
            .iter()
            .map(|name| (levenshtein(name, input), *name))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                output::info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        let confirmed = dialoguer::Confirm::with_theme(&self.theme)
            .with_prompt("Exit shell?")
            .default(true)
            .interact()?;
        Ok(confirmed)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Use `help` for usage details.");
                Ok(())
            }
            other => {
                output::error(other.to_string());
                Ok(())
            }
        }
    }
}
