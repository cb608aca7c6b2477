use std::io::{self, BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::menu::MenuChoice;
use crate::cli::CliError;

/// Result of asking for the next menu action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuInput {
    Choice(MenuChoice),
    Invalid(String),
    /// Input ended or the user backed out of the menu.
    Closed,
}

/// Source of user answers for the dispatcher.
pub trait Prompter {
    fn choose(&mut self) -> Result<MenuInput, CliError>;

    /// `Ok(None)` when the input has ended.
    fn text(&mut self, prompt: &str) -> Result<Option<String>, CliError>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, CliError>;

    /// Whether a person is answering; scripted runs skip confirmations.
    fn is_interactive(&self) -> bool;
}

/// Terminal prompts backed by `dialoguer`.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn choose(&mut self) -> Result<MenuInput, CliError> {
        let labels: Vec<&str> = MenuChoice::ALL.iter().map(|choice| choice.label()).collect();
        let picked = Select::with_theme(&self.theme)
            .with_prompt("Personal Finance Manager")
            .items(&labels)
            .default(0)
            .interact_opt()?;
        Ok(match picked {
            Some(idx) => MenuInput::Choice(MenuChoice::ALL[idx]),
            None => MenuInput::Closed,
        })
    }

    fn text(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(value))
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, CliError> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Line-driven prompts for piped input and tests.
pub struct ScriptPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ScriptPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> Result<Option<String>, CliError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl ScriptPrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for ScriptPrompter<R, W> {
    fn choose(&mut self) -> Result<MenuInput, CliError> {
        writeln!(self.output)?;
        writeln!(self.output, "Personal Finance Manager")?;
        for (idx, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", idx + 1, choice.label())?;
        }
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;
        Ok(match self.read_line()? {
            None => MenuInput::Closed,
            Some(raw) => match MenuChoice::parse(&raw) {
                Some(choice) => MenuInput::Choice(choice),
                None => MenuInput::Invalid(raw),
            },
        })
    }

    fn text(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;
        self.read_line()
    }

    fn confirm(&mut self, _prompt: &str, default: bool) -> Result<bool, CliError> {
        Ok(default)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
