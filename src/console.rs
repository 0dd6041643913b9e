//! The I/O collaborator seam.
//!
//! The engine never touches stdin/stdout directly; it talks to a
//! [`Console`], which supplies raw input lines and consumes display text.
//! [`StdioConsole`] is the interactive glue; [`ScriptedConsole`] feeds a
//! fixed input sequence and records output, for tests and programmatic
//! drivers.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Blocking line-oriented text exchange with whoever is playing.
pub trait Console {
    /// Display a block of text (a board, a prompt, a message).
    fn show(&mut self, text: &str) -> io::Result<()>;

    /// Block until the next input line is available and return it without
    /// the trailing newline.
    fn read_line(&mut self) -> io::Result<String>;
}

/// Interactive console over stdin/stdout.
#[derive(Debug, Default)]
pub struct StdioConsole;

impl StdioConsole {
    pub fn new() -> Self {
        StdioConsole
    }
}

impl Console for StdioConsole {
    fn show(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", text.trim_end_matches('\n'))?;
        stdout.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed",
            ));
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

/// A console that replays a fixed sequence of input lines and keeps a
/// transcript of everything shown.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedConsole {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Everything shown so far, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn show(&mut self, text: &str) -> io::Result<()> {
        self.transcript.push(text.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.inputs.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "scripted input exhausted")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_console_replays_in_order() {
        let mut console = ScriptedConsole::new(["1, 1", "back"]);
        assert_eq!(console.read_line().unwrap(), "1, 1");
        assert_eq!(console.read_line().unwrap(), "back");
        assert_eq!(
            console.read_line().unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn test_scripted_console_records_transcript() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        console.show("hello").unwrap();
        console.show("world").unwrap();
        assert_eq!(console.transcript(), ["hello", "world"]);
    }
}
