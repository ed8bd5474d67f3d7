//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::Result;
use tracing::debug;

use fibseq_cli::presenter::CLIResultPresenter;
use fibseq_cli::{parse_count, prompt_count, SequenceReport};
use fibseq_core::{sum_sequence, DefaultFactory, GeneratorFactory};

use crate::config::AppConfig;

/// Prompt shown when N is not given on the command line.
pub const PROMPT: &str = "Number of Fibonacci numbers: ";

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibseq_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let n = read_n(config)?;
    let report = compute(config, n)?;

    let presenter = CLIResultPresenter::new(config.quiet, config.format);
    let mut stdout = io::stdout().lock();
    presenter.present(&mut stdout, &report)?;
    stdout.flush()?;
    Ok(())
}

/// Take N from the flag/environment value, or prompt for it on stdin.
fn read_n(config: &AppConfig) -> Result<i64> {
    if let Some(raw) = &config.n {
        return Ok(parse_count(raw)?);
    }

    let prompt = if config.quiet { "" } else { PROMPT };
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout();
    let n = prompt_count(&mut stdin, &mut stdout, prompt)?;
    Ok(n)
}

/// Compute everything the configuration asks for.
pub fn compute(config: &AppConfig, n: i64) -> Result<SequenceReport> {
    let factory = DefaultFactory::new();
    let generator = factory.get(&config.algo)?;
    let opts = config.options();
    debug!(
        n,
        generator = generator.name(),
        overflow = %opts.overflow,
        max_n = opts.max_n,
        "computing"
    );

    let mut report = SequenceReport::new(n, generator.name(), opts.overflow);

    if config.mode.wants_sequence() || config.sum {
        let terms = generator.generate(n, &opts)?;
        if config.sum {
            report.sum = Some(sum_sequence(&terms, opts.overflow)?);
        }
        if config.mode.wants_sequence() {
            report.terms = Some(terms);
        }
    }

    if config.mode.wants_nth() {
        report.nth = Some(generator.nth(n, &opts)?);
    }

    Ok(report)
}
