// Error types for the menu loop.
// Bad input is never fatal: `UnresolvedSelection` is recovered inside the
// loop. Only console failures escape to the binary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    /// Input did not name a known command, or named one outside the table.
    #[error("unresolved selection: {input:?}")]
    UnresolvedSelection { input: String },

    /// Reading from or writing to the console failed.
    #[error("console I/O failed")]
    Console(#[from] std::io::Error),
}

impl MenuError {
    pub fn unresolved(input: impl Into<String>) -> Self {
        Self::UnresolvedSelection {
            input: input.into(),
        }
    }

    /// Whether the loop can carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnresolvedSelection { .. })
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
