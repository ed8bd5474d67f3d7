//! # fibseq-cli
//!
//! Input prompting, output formatting, result presentation, and shell
//! completion for the fibseq command-line tool.

pub mod completion;
pub mod input;
pub mod output;
pub mod presenter;
pub mod ui;

pub use input::{parse_count, prompt_count, InputError};
pub use output::{OutputFormat, SequenceReport};
pub use presenter::CLIResultPresenter;
