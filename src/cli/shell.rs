use std::{
    env,
    io::{self, IsTerminal},
};

use crate::cli::io::{MenuInput, Prompter, ScriptPrompter, TerminalPrompter};
use crate::cli::menu::MenuChoice;
use crate::cli::{output, CliError};
use crate::config::{Config, ConfigManager};
use crate::core::services::{ReportService, ServiceError, TransactionService};
use crate::core::LedgerManager;
use crate::errors::LedgerError;
use crate::storage::open_backend;

pub const SCRIPT_ENV: &str = "FINANCE_CORE_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Opens the configured ledger and runs the menu until the user exits.
pub fn run_cli() -> Result<(), CliError> {
    let config_manager = ConfigManager::new()?;
    let config = config_manager.load()?;
    let path = config_manager.ledger_path(&config);
    let manager = LedgerManager::open(open_backend(config.storage_format, path));

    let scripted = env::var(SCRIPT_ENV).map(|value| value == "1").unwrap_or(false)
        || !io::stdin().is_terminal();
    if scripted {
        colored::control::set_override(false);
        Shell::new(manager, config, ScriptPrompter::stdio()).run()
    } else {
        Shell::new(manager, config, TerminalPrompter::new()).run()
    }
}

/// Menu loop over one open ledger.
pub struct Shell<P: Prompter> {
    manager: LedgerManager,
    config: Config,
    prompter: P,
}

impl<P: Prompter> Shell<P> {
    pub fn new(manager: LedgerManager, config: Config, prompter: P) -> Self {
        Self {
            manager,
            config,
            prompter,
        }
    }

    /// Runs until exit or end of input, then saves the ledger.
    pub fn run(mut self) -> Result<(), CliError> {
        loop {
            let flow = match self.prompter.choose()? {
                MenuInput::Choice(MenuChoice::Exit) | MenuInput::Closed => Flow::Stop,
                MenuInput::Invalid(raw) => {
                    tracing::debug!(input = %raw, "unrecognized menu choice");
                    output::warning("Invalid choice! Please try again.");
                    Flow::Continue
                }
                MenuInput::Choice(choice) => self.dispatch(choice)?,
            };
            if flow == Flow::Stop {
                break;
            }
        }
        output::info("Exiting...");
        let Shell { manager, .. } = self;
        let path = manager.path().to_path_buf();
        manager.close()?;
        output::success(format!("Ledger saved to {}", path.display()));
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow, CliError> {
        match choice {
            MenuChoice::Add => self.add_transaction(),
            MenuChoice::View => {
                self.view_transactions();
                Ok(Flow::Continue)
            }
            MenuChoice::Delete => self.delete_transactions(),
            MenuChoice::Report => {
                let report = ReportService::totals(self.manager.ledger());
                output::section("Report");
                output::info(output::totals_summary(&report));
                Ok(Flow::Continue)
            }
            MenuChoice::Sort => {
                self.manager.ledger_mut().sort_by_date();
                output::success("Transactions sorted by date.");
                Ok(Flow::Continue)
            }
            MenuChoice::Filter => self.filter_transactions(),
            MenuChoice::Monthly => {
                self.monthly_report();
                Ok(Flow::Continue)
            }
            MenuChoice::ShowByType => self.show_by_type(),
            MenuChoice::Exit => Ok(Flow::Stop),
        }
    }

    fn add_transaction(&mut self) -> Result<Flow, CliError> {
        let Some(date) = self.prompter.text("Enter date (YYYY-MM-DD)")? else {
            return Ok(Flow::Stop);
        };
        let Some(description) = self.prompter.text("Enter description")? else {
            return Ok(Flow::Stop);
        };
        let Some(amount) = self.prompter.text("Enter amount")? else {
            return Ok(Flow::Stop);
        };
        let Some(kind) = self.prompter.text("Enter type (income/expense)")? else {
            return Ok(Flow::Stop);
        };

        match TransactionService::add(
            self.manager.ledger_mut(),
            &date,
            &description,
            &amount,
            &kind,
        ) {
            Ok(()) => output::success("Transaction added successfully!"),
            Err(ServiceError::Ledger(LedgerError::InvalidType(_))) => {
                output::warning("Invalid type! Transaction not added.")
            }
            Err(ServiceError::Invalid(message)) => {
                output::warning(format!("{message} Transaction not added."))
            }
            Err(err) => return Err(err.into()),
        }
        Ok(Flow::Continue)
    }

    fn view_transactions(&self) {
        let transactions = TransactionService::list(self.manager.ledger());
        if transactions.is_empty() {
            output::info("No transactions recorded.");
            return;
        }
        output::info(output::transactions_table(transactions));
    }

    fn delete_transactions(&mut self) -> Result<Flow, CliError> {
        let Some(date) = self
            .prompter
            .text("Enter the date of the transaction to delete (YYYY-MM-DD)")?
        else {
            return Ok(Flow::Stop);
        };
        match TransactionService::remove_on(self.manager.ledger_mut(), &date) {
            Ok(removed) => output::success(format!(
                "Transaction deleted successfully! ({removed} removed)"
            )),
            Err(ServiceError::Ledger(LedgerError::NotFound(_))) => {
                output::warning("Transaction not found!")
            }
            Err(err) => return Err(err.into()),
        }
        Ok(Flow::Continue)
    }

    fn filter_transactions(&mut self) -> Result<Flow, CliError> {
        let Some(kind) = self.prompter.text("Enter type to filter (income/expense)")? else {
            return Ok(Flow::Stop);
        };
        if self.prompter.is_interactive()
            && self.config.confirm_destructive
            && !self.prompter.confirm(
                "This permanently removes every transaction of another type. Continue?",
                false,
            )?
        {
            output::info("Filter cancelled.");
            return Ok(Flow::Continue);
        }
        match TransactionService::retain_only(self.manager.ledger_mut(), &kind) {
            Ok(kept) => output::success(format!(
                "Filtered transactions by type: {} ({kept} kept)",
                kind.trim()
            )),
            Err(ServiceError::Ledger(LedgerError::NoMatch(_))) => output::warning(
                "No transactions found for the specified type! The ledger is now empty.",
            ),
            Err(err) => return Err(err.into()),
        }
        Ok(Flow::Continue)
    }

    fn monthly_report(&self) {
        let report = ReportService::monthly(self.manager.ledger(), self.config.month_selection);
        if report.is_empty() {
            output::info("No transactions to report.");
            return;
        }
        output::section("Monthly Report");
        output::info(output::monthly_table(&report));
    }

    fn show_by_type(&mut self) -> Result<Flow, CliError> {
        let Some(kind) = self.prompter.text("Enter type to show (income/expense)")? else {
            return Ok(Flow::Stop);
        };
        let matches = TransactionService::of_type(self.manager.ledger(), &kind);
        if matches.is_empty() {
            output::warning(format!("No transactions found for type: {}", kind.trim()));
        } else {
            output::info(output::transactions_table(matches));
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::text_backend::TextStorage;
    use std::{fs, io::Cursor};
    use tempfile::tempdir;

    fn run_script(path: std::path::PathBuf, script: &str) {
        let manager = LedgerManager::open(Box::new(TextStorage::new(path)));
        let prompter = ScriptPrompter::new(Cursor::new(script.to_string()), Vec::new());
        Shell::new(manager, Config::default(), prompter)
            .run()
            .expect("shell run");
    }

    #[test]
    fn add_then_exit_persists_ledger() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("transactions.txt");
        run_script(path.clone(), "1\n2024-01-05\nSalary\n3000\nincome\n8\n");
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "2024-01-05 Salary 3000 income\n"
        );
    }

    #[test]
    fn invalid_type_is_not_added() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("transactions.txt");
        run_script(path.clone(), "1\n2024-01-05\nGift\n10\nbonus\n8\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn blank_description_is_rejected_and_later_records_survive() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("transactions.txt");
        run_script(
            path.clone(),
            "1\n2024-01-05\n\n3000\nincome\n1\n2024-01-10\nRent\n1200\nexpense\n8\n",
        );
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "2024-01-10 Rent 1200 expense\n"
        );
        let reopened = LedgerManager::open(Box::new(TextStorage::new(path)));
        assert_eq!(reopened.ledger().len(), 1);
    }

    #[test]
    fn end_of_input_mid_command_still_saves() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("transactions.txt");
        run_script(path.clone(), "1\n2024-01-05\nSalary\n3000\nincome\n1\n2024-02-01\n");
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "2024-01-05 Salary 3000 income\n"
        );
    }

    #[test]
    fn scripted_filter_skips_confirmation() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("transactions.txt");
        fs::write(
            &path,
            "2024-01-05 Salary 3000 income\n2024-01-10 Rent 1200 expense\n",
        )
        .unwrap();
        run_script(path.clone(), "6\nexpense\n8\n");
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "2024-01-10 Rent 1200 expense\n"
        );
    }

    #[test]
    fn sort_and_delete_flow() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("transactions.txt");
        fs::write(
            &path,
            "2024-02-01 Bonus 500 income\n2024-01-10 Rent 1200 expense\n2024-01-05 Salary 3000 income\n",
        )
        .unwrap();
        run_script(path.clone(), "5\n3\n2024-01-10\n3\n1999-01-01\n8\n");
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "2024-01-05 Salary 3000 income\n2024-02-01 Bonus 500 income\n"
        );
    }
}
