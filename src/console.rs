// Console layer: everything the menu loop needs from a terminal.
// `Terminal` talks to the real stdin/stdout. Unit tests run the same loop
// against `Buffered`, an in-memory console.

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};
use std::io::{self, BufRead, IsTerminal, Write};

/// Line-oriented console used by `MenuLoop`. Output goes through `Write`.
pub trait Console: Write {
    /// Read one line without its terminator. End of input is an
    /// `UnexpectedEof` error.
    fn read_line(&mut self) -> io::Result<String>;

    /// Block until a key is pressed. The key itself is ignored.
    fn wait_for_key(&mut self) -> io::Result<()>;

    /// Clear the screen before the next menu render.
    fn clear(&mut self) -> io::Result<()>;
}

fn strip_terminator(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}

fn read_from<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a selection was made",
        ));
    }
    Ok(strip_terminator(line))
}

/// Keeps the terminal in raw mode while alive.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::warn!(error = %e, "failed to leave raw mode");
        }
    }
}

/// Only presses count; releases and repeats would end the wait twice.
fn is_key_press(event: &Event) -> bool {
    matches!(event, Event::Key(key) if key.kind == KeyEventKind::Press)
}

/// Process stdin/stdout. Key waits and screen clears only happen when the
/// corresponding stream is a terminal, so piped runs stay plain text.
/// The key wait depends on stdin alone: redirecting stdout still pauses.
pub struct Terminal {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for Terminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl Console for Terminal {
    fn read_line(&mut self) -> io::Result<String> {
        // prompts are written without a newline
        self.stdout.flush()?;
        read_from(&mut self.stdin.lock())
    }

    fn wait_for_key(&mut self) -> io::Result<()> {
        self.stdout.flush()?;
        if !self.stdin.is_terminal() {
            tracing::debug!("stdin is not a terminal, skipping key wait");
            return Ok(());
        }
        let _raw = RawMode::enable()?;
        while !is_key_press(&event::read()?) {}
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        if !self.stdout.is_terminal() {
            return Ok(());
        }
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))
    }
}

/// In-memory console: reads lines from any `BufRead`, captures output,
/// and counts key waits and clears.
#[cfg(test)]
pub struct Buffered<R> {
    input: R,
    output: Vec<u8>,
    key_waits: usize,
    clears: usize,
}

#[cfg(test)]
impl<R: BufRead> Buffered<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            output: Vec::new(),
            key_waits: 0,
            clears: 0,
        }
    }

    /// Everything written so far, lossily decoded.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Drop captured output, keeping the counters.
    pub fn take_output(&mut self) -> String {
        let out = self.output();
        self.output.clear();
        out
    }

    pub fn key_waits(&self) -> usize {
        self.key_waits
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

#[cfg(test)]
impl Buffered<io::Cursor<Vec<u8>>> {
    /// Console fed from a fixed script of input text.
    pub fn scripted(script: &str) -> Self {
        Self::new(io::Cursor::new(script.as_bytes().to_vec()))
    }
}

#[cfg(test)]
impl<R> Write for Buffered<R> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
impl<R: BufRead> Console for Buffered<R> {
    fn read_line(&mut self) -> io::Result<String> {
        read_from(&mut self.input)
    }

    fn wait_for_key(&mut self) -> io::Result<()> {
        self.key_waits += 1;
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines_without_terminators() {
        let mut console = Buffered::scripted("EatCandy\r\nExit\n\nlast");
        assert_eq!(console.read_line().unwrap(), "EatCandy");
        assert_eq!(console.read_line().unwrap(), "Exit");
        assert_eq!(console.read_line().unwrap(), "");
        assert_eq!(console.read_line().unwrap(), "last");
    }

    #[test]
    fn end_of_input_is_unexpected_eof() {
        let mut console = Buffered::scripted("");
        let err = console.read_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn only_key_presses_end_the_wait() {
        use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

        let key = |kind| {
            Event::Key(KeyEvent {
                code: KeyCode::Char('x'),
                modifiers: KeyModifiers::NONE,
                kind,
                state: KeyEventState::NONE,
            })
        };
        assert!(is_key_press(&key(KeyEventKind::Press)));
        assert!(!is_key_press(&key(KeyEventKind::Release)));
        assert!(!is_key_press(&key(KeyEventKind::Repeat)));
        assert!(!is_key_press(&Event::Resize(80, 24)));
        assert!(!is_key_press(&Event::FocusGained));
    }

    #[test]
    fn counts_waits_and_clears() {
        let mut console = Buffered::scripted("");
        console.wait_for_key().unwrap();
        console.clear().unwrap();
        console.clear().unwrap();
        write!(console, "hello").unwrap();
        assert_eq!(console.key_waits(), 1);
        assert_eq!(console.clears(), 2);
        assert_eq!(console.take_output(), "hello");
        assert_eq!(console.output(), "");
    }
}
