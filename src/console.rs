//! Line-oriented console I/O
//!
//! Every prompt in the program goes through [`Console::read_input`], which
//! normalizes the line, recognizes the exit sentinel and (optionally)
//! re-prompts until the answer is one of a fixed set of options.

use std::io::{self, BufRead, Write};

use crate::consts::EXIT_SENTINEL;
use crate::error::{GameError, Result};

/// A normalized answer to a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The user typed the exit sentinel
    Exit,
    /// Trimmed, lowercased text
    Line(String),
}

impl Reply {
    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit)
    }

    /// Text of the reply; the sentinel itself for `Exit`
    pub fn as_str(&self) -> &str {
        match self {
            Reply::Exit => EXIT_SENTINEL,
            Reply::Line(s) => s,
        }
    }
}

/// Trim surrounding whitespace and lowercase
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Console bound to an input reader and an output writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

/// Console over the process's standard streams
pub type StdConsole = Console<io::StdinLock<'static>, io::Stdout>;

impl StdConsole {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line
    pub fn say(&mut self, line: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Print a titled banner framed by `=` rules of the given width
    pub fn banner(&mut self, title: &str, width: usize) -> Result<()> {
        let rule = "=".repeat(width);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "{title}")?;
        writeln!(self.output, "{rule}")?;
        Ok(())
    }

    /// Show `prompt` and read one raw line
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line)
    }

    /// Prompt until the user gives an acceptable answer.
    ///
    /// The exit sentinel is always accepted. With `allowed` set, anything
    /// outside the list is rejected with a message naming the options and the
    /// prompt is shown again; there is no retry limit.
    pub fn read_input(&mut self, prompt: &str, allowed: Option<&[&str]>) -> Result<Reply> {
        loop {
            let answer = normalize(&self.read_line(prompt)?);

            if answer == EXIT_SENTINEL {
                return Ok(Reply::Exit);
            }

            match allowed {
                None => return Ok(Reply::Line(answer)),
                Some(options) if options.contains(&answer.as_str()) => {
                    return Ok(Reply::Line(answer));
                }
                Some(options) => {
                    log::debug!("rejected input {answer:?}");
                    self.say(format!(
                        "Invalid input. Please choose from: {}",
                        options.join(", ")
                    ))?;
                }
            }
        }
    }

    /// Block until the user presses Enter
    pub fn pause(&mut self) -> Result<()> {
        self.read_line("\nPress Enter to continue...")?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(c: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(c.into_output()).unwrap()
    }

    #[test]
    fn test_normalizes_free_text() {
        let mut c = console("  HeLLo World \n");
        let reply = c.read_input("> ", None).unwrap();
        assert_eq!(reply, Reply::Line("hello world".to_string()));
    }

    #[test]
    fn test_exit_sentinel_any_case_and_padding() {
        let mut c = console("  ExIt \n");
        assert_eq!(c.read_input("> ", None).unwrap(), Reply::Exit);

        // Accepted even when not in the allowed set
        let mut c = console("EXIT\n");
        assert_eq!(c.read_input("> ", Some(&["a", "b"][..])).unwrap(), Reply::Exit);
    }

    #[test]
    fn test_reprompts_until_allowed() {
        let mut c = console("5\n\nTWO\n2\n");
        let reply = c.read_input("Pick: ", Some(&["1", "2"][..])).unwrap();
        assert_eq!(reply.as_str(), "2");

        let out = printed(c);
        assert_eq!(out.matches("Invalid input. Please choose from: 1, 2").count(), 3);
        assert_eq!(out.matches("Pick: ").count(), 4);
    }

    #[test]
    fn test_options_listed_in_given_order() {
        let mut c = console("maybe\ny\n");
        c.read_input("? ", Some(&["yes", "y", "no", "n"][..])).unwrap();
        assert!(printed(c).contains("Please choose from: yes, y, no, n"));
    }

    #[test]
    fn test_eof_is_input_closed() {
        let mut c = console("");
        assert!(matches!(c.read_input("> ", None), Err(GameError::InputClosed)));

        let mut c = console("nope\n");
        assert!(matches!(
            c.read_input("> ", Some(&["yes"][..])),
            Err(GameError::InputClosed)
        ));
    }

    #[test]
    fn test_pause_consumes_one_line() {
        let mut c = console("\nnext\n");
        c.pause().unwrap();
        assert_eq!(c.read_input("> ", None).unwrap().as_str(), "next");
    }
}
