//! Error handling and exit codes.

use std::io::Write;

use fibseq_cli::presenter::CLIResultPresenter;
use fibseq_cli::InputError;
use fibseq_core::{exit_codes, SeqError};

use crate::config::AppConfig;

/// Map an application error to its process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<SeqError>() {
        Some(SeqError::Config(_)) => exit_codes::ERROR_CONFIG,
        _ => exit_codes::ERROR_GENERIC,
    }
}

/// Whether the error means the user did not supply a positive integer.
pub fn is_invalid_input(err: &anyhow::Error) -> bool {
    if let Some(SeqError::InvalidInput(_)) = err.downcast_ref::<SeqError>() {
        return true;
    }
    err.downcast_ref::<InputError>()
        .is_some_and(InputError::is_user_error)
}

/// Print the error and return the exit code.
///
/// Invalid input gets the plain prompt-style message on stdout; every other
/// failure is tagged on stderr.
pub fn report(err: &anyhow::Error, config: &AppConfig) -> i32 {
    tracing::debug!(error = %err, "run failed");
    let presenter = CLIResultPresenter::new(config.quiet, config.format);
    if is_invalid_input(err) {
        let mut stdout = std::io::stdout().lock();
        if let Err(write_err) = presenter
            .present_invalid_input(&mut stdout)
            .and_then(|()| stdout.flush())
        {
            tracing::warn!(error = %write_err, "failed to write message");
        }
    } else {
        presenter.present_error(&format!("{err:#}"));
    }
    exit_code(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        let invalid = anyhow::Error::new(SeqError::InvalidInput(0));
        assert_eq!(exit_code(&invalid), 1);

        let overflow = anyhow::Error::new(SeqError::Overflow { index: 95 });
        assert_eq!(exit_code(&overflow), 1);

        let config = anyhow::Error::new(SeqError::Config("bad".into()));
        assert_eq!(exit_code(&config), 4);

        let other = anyhow::anyhow!("io failure");
        assert_eq!(exit_code(&other), 1);
    }

    #[test]
    fn invalid_input_detection() {
        assert!(is_invalid_input(&anyhow::Error::new(SeqError::InvalidInput(-5))));
        assert!(is_invalid_input(&anyhow::Error::new(InputError::NotANumber(
            "abc".into()
        ))));
        assert!(is_invalid_input(&anyhow::Error::new(InputError::Empty)));
        assert!(is_invalid_input(&anyhow::Error::new(InputError::NotANumber(
            "\u{fffd}".into()
        ))));
        assert!(!is_invalid_input(&anyhow::Error::new(SeqError::Overflow {
            index: 95
        })));
        assert!(!is_invalid_input(&anyhow::Error::new(InputError::Io(
            std::io::Error::other("closed")
        ))));
    }
}
