//! Line-oriented questions over any reader/writer pair.
//!
//! Invalid answers are never errors: the question is repeated until a valid
//! answer arrives. End of input ends the conversation instead (`Ok(None)`).

mod validate;

pub use validate::{
    CITY_QUESTION, DAY_QUESTION, INVALID_CITY, INVALID_DAY, INVALID_MONTH, MONTH_QUESTION,
    Validation, is_yes, validate_city, validate_day, validate_month,
};

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::Result;
use crate::filter::Filters;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one line, without its line ending.
    ///
    /// # Errors
    /// Returns an error if writing the question or reading the answer fails.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed");
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Repeat `question` until `validate` accepts the answer.
    ///
    /// # Errors
    /// Returns an error on I/O failure.
    pub fn ask_until_valid<T>(
        &mut self,
        question: &str,
        validate: impl Fn(&str) -> Validation<T>,
    ) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            match validate(&answer) {
                Validation::Valid(value) => return Ok(Some(value)),
                Validation::Retry(message) => self.say(message)?,
            }
        }
    }

    /// Ask a yes/no question; anything but "yes" (or end of input) is no.
    ///
    /// # Errors
    /// Returns an error on I/O failure.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(self.ask(question)?.is_some_and(|answer| is_yes(&answer)))
    }

    /// Write one line to the output.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Write pre-formatted text to the output as is.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_raw(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Ask for city, month and day in that order.
    ///
    /// # Errors
    /// Returns an error on I/O failure.
    pub fn collect_filters(&mut self) -> Result<Option<Filters>> {
        let Some(city) = self.ask_until_valid(CITY_QUESTION, validate_city)? else {
            return Ok(None);
        };
        let Some(month) = self.ask_until_valid(MONTH_QUESTION, validate_month)? else {
            return Ok(None);
        };
        let Some(day) = self.ask_until_valid(DAY_QUESTION, validate_day)? else {
            return Ok(None);
        };

        let filters = Filters::new(city, month, day);
        debug!(%filters, "collected filters");
        Ok(Some(filters))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
