//! Line-based prompting
//!
//! The generator asks its questions through the [`Prompter`] trait so the
//! question flow can be driven from tests with in-memory input.

use anyhow::{Result, bail};
use std::io::{BufRead, Stdout, StdinLock, Write};

/// Asks the operator a question and returns the answer
pub trait Prompter {
    /// Ask `question`; a blank answer yields `default` when one is given
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String>;
}

/// Prompter reading answers line by line
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompter<StdinLock<'static>, Stdout> {
    /// Prompter over the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String> {
        let suffix = if default.is_some() {
            " (optional): "
        } else {
            ": "
        };
        write!(self.output, "{}{}", question, suffix)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("Input ended while waiting for: {}", question);
        }

        let answer = line.trim();
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_trims_answer() {
        let mut output = Vec::new();
        let mut prompter = LinePrompter::new(Cursor::new("  orders \n"), &mut output);

        assert_eq!(prompter.ask("Pipeline name", None).unwrap(), "orders");
        assert_eq!(String::from_utf8(output).unwrap(), "Pipeline name: ");
    }

    #[test]
    fn test_optional_uses_default() {
        let mut output = Vec::new();
        let mut prompter = LinePrompter::new(Cursor::new("\n"), &mut output);

        assert_eq!(prompter.ask("Schedule", Some("@daily")).unwrap(), "@daily");
        assert_eq!(String::from_utf8(output).unwrap(), "Schedule (optional): ");
    }

    #[test]
    fn test_required_blank_stays_blank() {
        let mut prompter = LinePrompter::new(Cursor::new("\n"), Vec::new());
        assert_eq!(prompter.ask("Table", None).unwrap(), "");
    }

    #[test]
    fn test_end_of_input() {
        let mut prompter = LinePrompter::new(Cursor::new(""), Vec::new());
        assert!(prompter.ask("Table", None).is_err());
    }
}
