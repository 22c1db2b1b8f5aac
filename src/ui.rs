// UI layer: the read-render-dispatch loop.
// `MenuLoop` is generic over `Console` so the same state machine runs on a
// real terminal and on scripted input.

use crate::console::Console;
use crate::error::{MenuError, Result};
use crate::menu::{Command, CommandTable, Selection};
use tracing::{debug, info};

pub const HEADER: &str = "Please choose an action:";
pub const PROMPT: &str = "Enter your selection: ";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const CONFIRM_EXIT: &str = "Are you sure you want to exit the application? (Y/N): ";
pub const GOODBYE: &str = "Exiting the application...";
pub const PRESS_ANY_KEY: &str = "Press any key to continue...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    AwaitingExitConfirmation,
    Terminated,
}

/// Outcome of dispatching one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopSignal {
    Continue,
    ExitConfirmed,
    ExitDeclined,
}

/// Hook run for every non-terminal command the user picks.
pub trait Actions {
    fn perform(&mut self, command: &Command);
}

/// Default hooks: the sample actions do nothing beyond a log line.
#[derive(Debug, Default)]
pub struct NoopActions;

impl Actions for NoopActions {
    fn perform(&mut self, command: &Command) {
        debug!(token = command.token, "no action attached");
    }
}

pub struct MenuLoop<'t, C, A = NoopActions> {
    table: &'t CommandTable,
    console: C,
    actions: A,
    state: LoopState,
}

impl<'t, C: Console> MenuLoop<'t, C, NoopActions> {
    pub fn new(table: &'t CommandTable, console: C) -> Self {
        Self::with_actions(table, console, NoopActions)
    }
}

impl<'t, C: Console, A: Actions> MenuLoop<'t, C, A> {
    pub fn with_actions(table: &'t CommandTable, console: C, actions: A) -> Self {
        Self {
            table,
            console,
            actions,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    #[cfg(test)]
    pub fn console(&self) -> &C {
        &self.console
    }

    #[cfg(test)]
    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    #[cfg(test)]
    pub fn actions(&self) -> &A {
        &self.actions
    }

    /// Run until the user confirms exit. Only console failures end the
    /// loop early.
    pub fn run(&mut self) -> Result<()> {
        info!(commands = self.table.len(), "menu started");
        while self.state != LoopState::Terminated {
            self.render_menu()?;
            let selection = self.read_selection()?;
            match self.dispatch(selection, selection.number())? {
                LoopSignal::Continue => {
                    writeln!(self.console, "{PRESS_ANY_KEY}")?;
                    self.console.wait_for_key()?;
                    self.console.clear()?;
                }
                LoopSignal::ExitDeclined => {
                    self.console.clear()?;
                }
                LoopSignal::ExitConfirmed => {}
            }
        }
        info!("menu terminated by user");
        Ok(())
    }

    /// Write the header, one numbered line per command, and the prompt.
    pub fn render_menu(&mut self) -> Result<()> {
        writeln!(self.console, "{HEADER}")?;
        writeln!(self.console)?;
        for command in self.table.commands() {
            writeln!(self.console, "[{}]:    {}", command.number(), command.label)?;
        }
        write!(self.console, "\n{PROMPT}")?;
        self.console.flush()?;
        Ok(())
    }

    /// Read one line and resolve it by canonical token. Anything that does
    /// not match yields `Selection::Unknown`.
    pub fn read_selection(&mut self) -> Result<Selection<'static>> {
        let input = self.console.read_line()?;
        let selection = self.table.resolve(&input);
        debug!(input = %input, ?selection, "resolved input");
        Ok(selection)
    }

    /// Perform the selected command. `number` is the 1-based menu number
    /// of the selection and must agree with the table.
    pub fn dispatch(
        &mut self,
        selection: Selection<'_>,
        number: Option<usize>,
    ) -> Result<LoopSignal> {
        let command = match self.reconcile(selection, number) {
            Ok(command) => command,
            Err(err) if err.is_recoverable() => {
                debug!(error = %err, "selection rejected");
                writeln!(self.console, "{INVALID_CHOICE}")?;
                self.state = LoopState::Running;
                return Ok(LoopSignal::Continue);
            }
            Err(err) => return Err(err),
        };

        if command.terminal {
            return self.confirm_exit();
        }

        self.actions.perform(command);
        writeln!(self.console, "You chose to {}.", command.label)?;
        self.state = LoopState::Running;
        Ok(LoopSignal::Continue)
    }

    fn reconcile(&self, selection: Selection<'_>, number: Option<usize>) -> Result<&'t Command> {
        let unresolved = || {
            MenuError::unresolved(selection.command().map_or("<unknown>", |c| c.token))
        };
        let index = number
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(unresolved)?;
        let command = self.table.get(index).ok_or_else(unresolved)?;
        match selection.command() {
            Some(selected) if selected == command => Ok(command),
            _ => Err(unresolved()),
        }
    }

    fn confirm_exit(&mut self) -> Result<LoopSignal> {
        self.state = LoopState::AwaitingExitConfirmation;
        write!(self.console, "{CONFIRM_EXIT}")?;
        self.console.flush()?;
        let answer = self.console.read_line()?;
        writeln!(self.console)?;

        if answer.starts_with(['Y', 'y']) {
            writeln!(self.console, "{GOODBYE}")?;
            self.state = LoopState::Terminated;
            Ok(LoopSignal::ExitConfirmed)
        } else {
            debug!(answer = %answer, "exit declined");
            self.state = LoopState::Running;
            Ok(LoopSignal::ExitDeclined)
        }
    }
}
