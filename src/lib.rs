pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod digest;
pub mod error;
pub mod files;
pub mod fixer;
pub mod git;
pub mod output;
pub mod policy;
pub mod process;
pub mod tag;
pub mod task;

#[cfg(test)]
mod test_support;

pub use error::{FormatGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VERDICT_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
