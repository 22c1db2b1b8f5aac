// Command table: the fixed, ordered list of menu entries.
// Each entry pairs the symbolic token the user types with the label shown
// in the menu. Order defines numbering, starting at 1.

use std::fmt;

/// One selectable menu entry.
#[derive(Debug, PartialEq, Eq)]
pub struct Command {
    pub ordinal: usize,
    pub token: &'static str,
    pub label: &'static str,
    pub terminal: bool,
}

impl Command {
    /// 1-based number shown next to the entry in the menu.
    pub fn number(&self) -> usize {
        self.ordinal + 1
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

static STANDARD: [Command; 4] = [
    Command {
        ordinal: 0,
        token: "EatCandy",
        label: "Eat Candy",
        terminal: false,
    },
    Command {
        ordinal: 1,
        token: "GoFishing",
        label: "Go Fishing",
        terminal: false,
    },
    Command {
        ordinal: 2,
        token: "PlayBasketball",
        label: "Play Basketball",
        terminal: false,
    },
    Command {
        ordinal: 3,
        token: "Exit",
        label: "Exit",
        terminal: true,
    },
];

/// Result of parsing a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Known(&'a Command),
    /// Input that names no command. Never displayed, never dispatched.
    Unknown,
}

impl<'a> Selection<'a> {
    pub fn command(&self) -> Option<&'a Command> {
        match *self {
            Selection::Known(cmd) => Some(cmd),
            Selection::Unknown => None,
        }
    }

    /// Menu number of the selected command, absent for `Unknown`.
    pub fn number(&self) -> Option<usize> {
        self.command().map(Command::number)
    }
}

/// Read-only view over the command list, built once at startup and
/// passed by reference to the loop.
#[derive(Debug, Clone, Copy)]
pub struct CommandTable {
    commands: &'static [Command],
}

impl CommandTable {
    /// The built-in menu: three sample actions followed by Exit.
    pub fn standard() -> Self {
        Self { commands: &STANDARD }
    }

    pub fn commands(&self) -> &'static [Command] {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static Command> {
        self.commands.get(index)
    }

    /// Exact, case-sensitive match on the canonical token. The displayed
    /// numeral is not accepted.
    pub fn resolve(&self, input: &str) -> Selection<'static> {
        self.commands
            .iter()
            .find(|cmd| cmd.token == input)
            .map_or(Selection::Unknown, Selection::Known)
    }
}
