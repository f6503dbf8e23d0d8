//! Line-oriented terminal I/O.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

/// Failure to talk to the terminal at all.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Input reached end-of-file.
    #[error("input closed")]
    Closed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A line was read but could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
}

/// Parse a trimmed number.
pub fn parse_number<T: FromStr>(raw: &str) -> Result<T, InputError> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

/// Parse a number, treating a blank line as "skip".
pub fn parse_optional_number<T: FromStr>(raw: &str) -> Result<Option<T>, InputError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_number(raw).map(Some)
}

/// Prompts on `W`, reads answers from `R`.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` without a newline and read one line (line ending stripped).
    pub fn prompt(&mut self, label: impl Display) -> Result<String, ConsoleError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Write `text` as-is (no newline added).
    pub fn print(&mut self, text: impl Display) -> Result<(), ConsoleError> {
        write!(self.output, "{text}")?;
        Ok(())
    }

    pub fn say(&mut self, line: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{line}")?;
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

    #[test]
    fn prompt_writes_label_and_strips_line_ending() {
        let mut console = console("A1\r\nnext\n");
        assert_eq!(console.prompt("Enter SKU: ").unwrap(), "A1");
        assert_eq!(console.read_line().unwrap(), "next");
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "Enter SKU: ");
    }

    #[test]
    fn last_line_without_newline_is_still_read() {
        let mut console = console("done");
        assert_eq!(console.read_line().unwrap(), "done");
        assert!(matches!(console.read_line(), Err(ConsoleError::Closed)));
    }

    #[test]
    fn blank_line_is_not_eof() {
        let mut console = console("\n");
        assert_eq!(console.read_line().unwrap(), "");
    }

    #[test]
    fn numbers_are_trimmed_before_parsing() {
        assert_eq!(parse_number::<i32>(" 42 "), Ok(42));
        assert_eq!(parse_number::<f64>("2.5"), Ok(2.5));
        assert_eq!(
            parse_number::<i32>("ten"),
            Err(InputError::NotANumber("ten".to_string()))
        );
    }

    #[test]
    fn optional_number_skips_blank() {
        assert_eq!(parse_optional_number::<i32>("   "), Ok(None));
        assert_eq!(parse_optional_number::<i32>("7"), Ok(Some(7)));
        assert!(parse_optional_number::<f64>("x").is_err());
    }
}
