//! Player-facing input and output.
//!
//! The game talks to people only through `Terminal`. `ConsoleTerminal`
//! uses stdin/stdout; `ScriptedTerminal` replays canned answers and records
//! everything shown, for tests and demos.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::core::GameError;

/// Blocking question/answer channel to the players.
pub trait Terminal {
    /// Show a line of text.
    fn show(&mut self, text: &str) -> Result<(), GameError>;

    /// Ask a question and wait for one line of answer, without its line
    /// terminator. Other whitespace is preserved.
    fn ask(&mut self, question: &str) -> Result<String, GameError>;
}

/// Interactive stdin/stdout terminal.
pub struct ConsoleTerminal<R, W> {
    input: R,
    output: W,
}

impl ConsoleTerminal<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Terminal over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Terminal for ConsoleTerminal<R, W> {
    fn show(&mut self, text: &str) -> Result<(), GameError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<String, GameError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        // Invalid UTF-8 is replaced with U+FFFD.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(strip_line_ending(String::from_utf8_lossy(&line).into_owned()))
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Terminal that answers from a queue and records what it was shown.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTerminal {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedTerminal {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Queue more answers.
    pub fn push_answers<I, S>(&mut self, answers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answers.extend(answers.into_iter().map(Into::into));
    }

    /// Everything shown or asked so far, in order.
    #[must_use]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Whether any transcript line contains `needle`.
    #[must_use]
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    #[must_use]
    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Terminal for ScriptedTerminal {
    fn show(&mut self, text: &str) -> Result<(), GameError> {
        self.transcript.push(text.to_string());
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<String, GameError> {
        self.transcript.push(question.to_string());
        self.answers.pop_front().ok_or(GameError::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_reads_lines() {
        let input = "ACGT\r\nMercury \n".as_bytes();
        let mut output = Vec::new();
        let mut terminal = ConsoleTerminal::new(input, &mut output);

        assert_eq!(terminal.ask("strand: ").unwrap(), "ACGT");
        assert_eq!(terminal.ask("answer: ").unwrap(), "Mercury ");
        assert!(matches!(terminal.ask("more: "), Err(GameError::InputClosed)));
        terminal.show("bye").unwrap();

        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed, "strand: answer: more: bye\n");
    }

    #[test]
    fn test_console_invalid_utf8_is_not_fatal() {
        let input: &[u8] = &[0xFF, b'\n', b'1', b'\n'];
        let mut terminal = ConsoleTerminal::new(input, Vec::new());

        let garbled = terminal.ask("> ").unwrap();
        assert_eq!(garbled, "\u{FFFD}");
        assert_eq!(terminal.ask("> ").unwrap(), "1");
    }

    #[test]
    fn test_console_last_line_without_newline() {
        let mut terminal = ConsoleTerminal::new("1".as_bytes(), Vec::new());
        assert_eq!(terminal.ask("> ").unwrap(), "1");
    }

    #[test]
    fn test_scripted_terminal() {
        let mut terminal = ScriptedTerminal::new(["1", "2"]);
        terminal.show("hello").unwrap();
        assert_eq!(terminal.ask("first? ").unwrap(), "1");
        terminal.push_answers(["3"]);
        assert_eq!(terminal.remaining_answers(), 2);
        assert_eq!(terminal.ask("second? ").unwrap(), "2");
        assert_eq!(terminal.ask("third? ").unwrap(), "3");
        assert!(matches!(terminal.ask("fourth? "), Err(GameError::InputClosed)));

        assert!(terminal.saw("hello"));
        assert!(terminal.saw("third?"));
        assert_eq!(terminal.transcript().len(), 5);
    }
}
