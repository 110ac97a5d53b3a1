pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod logging;
pub mod output;
pub mod pager;
pub mod prompt;
pub mod session;
pub mod stats;

pub use error::{BikeshareError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_DATA_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Process exit code for a failed run.
#[must_use]
pub const fn exit_code_for(error: &BikeshareError) -> i32 {
    if error.is_data_error() {
        EXIT_DATA_ERROR
    } else {
        EXIT_CONFIG_ERROR
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
