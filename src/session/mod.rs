//! The interactive explore loop and its one-shot counterpart.

use std::io::{BufRead, Write};

use tracing::info;

use crate::dataset::{TripLoader, TripTable};
use crate::error::Result;
use crate::filter::Filters;
use crate::output::{PageFormatter, ReportFormatter, SEPARATOR};
use crate::pager::Pager;
use crate::prompt::{Prompter, is_yes};
use crate::stats::TripReport;

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const VIEW_QUESTION: &str =
    "\nWould you like to view 5 rows of individual trip data? Enter yes or no\n";
pub const RESTART_QUESTION: &str = "\nWould you like to restart? Enter yes or no.\n";

pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    loader: TripLoader,
    formatter: Box<dyn ReportFormatter>,
    quiet: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        input: R,
        output: W,
        loader: TripLoader,
        formatter: Box<dyn ReportFormatter>,
    ) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            loader,
            formatter,
            quiet: false,
        }
    }

    /// Skip the greeting printed before each round of questions.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Ask, report, page, and repeat until the user declines to restart or
    /// input ends.
    ///
    /// # Errors
    /// Returns an error if a dataset cannot be loaded or the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        let mut rounds = 0_u32;
        loop {
            if !self.quiet {
                self.prompter.say(GREETING)?;
            }
            let Some(filters) = self.prompter.collect_filters()? else {
                break;
            };
            self.prompter.say(SEPARATOR)?;

            let table = self.report(filters)?;
            rounds += 1;

            if !self.page(&table)? {
                break;
            }
            if !self.prompter.confirm(RESTART_QUESTION)? {
                break;
            }
        }

        info!(rounds, "session finished");
        Ok(())
    }

    /// Print a single report without prompting.
    ///
    /// # Errors
    /// Returns an error if the dataset cannot be loaded or writing fails.
    pub fn run_once(&mut self, filters: Filters) -> Result<()> {
        self.report(filters).map(|_| ())
    }

    fn report(&mut self, filters: Filters) -> Result<TripTable> {
        let table = self.loader.load_data(&filters)?;
        let report = TripReport::compute(filters, &table);
        let text = self.formatter.format(&report)?;
        self.prompter.write_raw(&text)?;
        if !text.ends_with('\n') {
            self.prompter.say("")?;
        }
        Ok(table)
    }

    /// Show pages of raw trips while the user answers "yes".
    /// Returns `false` when input ended, so the caller stops asking.
    fn page(&mut self, table: &TripTable) -> Result<bool> {
        let formatter = PageFormatter::new(table.columns());
        let mut pager = Pager::new();
        loop {
            let Some(answer) = self.prompter.ask(VIEW_QUESTION)? else {
                return Ok(false);
            };
            if !is_yes(&answer) {
                return Ok(true);
            }
            let page = pager.next_page(table);
            self.prompter.write_raw(&formatter.format(&page))?;
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
