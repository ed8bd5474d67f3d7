//! Application configuration from CLI flags and environment.

use clap::Parser;

use fibseq_cli::OutputFormat;
use fibseq_core::{Options, OverflowMode, DEFAULT_MAX_N};

/// What to compute for the requested N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    /// The first N terms.
    #[default]
    Sequence,
    /// Only the Nth term.
    Nth,
    /// The first N terms followed by the Nth term.
    Both,
}

impl Mode {
    #[must_use]
    pub fn wants_sequence(self) -> bool {
        matches!(self, Self::Sequence | Self::Both)
    }

    #[must_use]
    pub fn wants_nth(self) -> bool {
        matches!(self, Self::Nth | Self::Both)
    }
}

/// fibseq — print the first N Fibonacci numbers.
#[derive(Parser, Debug)]
#[command(name = "fibseq", version, about)]
pub struct AppConfig {
    /// Number of Fibonacci numbers (prompted for when omitted).
    #[arg(short, long, env = "FIBSEQ_N", allow_negative_numbers = true)]
    pub n: Option<String>,

    /// What to print: the sequence, the Nth term, or both.
    #[arg(long, value_enum, default_value_t = Mode::Sequence)]
    pub mode: Mode,

    /// Generator to use: iterative or naive.
    #[arg(long, default_value = "iterative")]
    pub algo: String,

    /// Overflow policy past F(93): wrap or checked.
    #[arg(long, default_value = "wrap")]
    pub overflow: OverflowMode,

    /// Reject N above this value (0 = unlimited).
    #[arg(long, default_value_t = DEFAULT_MAX_N)]
    pub max_n: u64,

    /// Also print the sum of the sequence.
    #[arg(long)]
    pub sum: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Quiet mode (only output the values).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Generation options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            overflow: self.overflow,
            max_n: self.max_n,
        }
    }
}
