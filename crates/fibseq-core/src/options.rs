//! Generation options: overflow policy and the optional size guard.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeqError;

/// How terms beyond the `u64` range are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowMode {
    /// Standard unsigned wraparound modulo 2^64.
    #[default]
    Wrapping,
    /// Reject any request whose result does not fit in `u64`.
    Checked,
}

impl fmt::Display for OverflowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wrapping => f.write_str("wrapping"),
            Self::Checked => f.write_str("checked"),
        }
    }
}

impl FromStr for OverflowMode {
    type Err = SeqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrap" | "wrapping" => Ok(Self::Wrapping),
            "checked" | "check" => Ok(Self::Checked),
            other => Err(SeqError::Config(format!("unknown overflow mode: {other}"))),
        }
    }
}

/// Options for sequence generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Overflow policy for terms that exceed `u64`.
    pub overflow: OverflowMode,
    /// Upper bound on N (0 = unlimited).
    pub max_n: u64,
}

impl Options {
    /// Options with the given overflow mode and no size guard.
    #[must_use]
    pub fn with_overflow(overflow: OverflowMode) -> Self {
        Self {
            overflow,
            ..Default::default()
        }
    }

    /// Whether a size guard is in effect.
    #[must_use]
    pub fn is_limited(&self) -> bool {
        self.max_n > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.overflow, OverflowMode::Wrapping);
        assert_eq!(opts.max_n, 0);
        assert!(!opts.is_limited());
    }

    #[test]
    fn parse_overflow_mode() {
        assert_eq!("wrap".parse::<OverflowMode>().unwrap(), OverflowMode::Wrapping);
        assert_eq!(" Checked ".parse::<OverflowMode>().unwrap(), OverflowMode::Checked);
        assert!(matches!(
            "saturate".parse::<OverflowMode>(),
            Err(SeqError::Config(_))
        ));
    }

    #[test]
    fn overflow_mode_display_round_trips() {
        for mode in [OverflowMode::Wrapping, OverflowMode::Checked] {
            assert_eq!(mode.to_string().parse::<OverflowMode>().unwrap(), mode);
        }
    }

    #[test]
    fn overflow_mode_serializes_lowercase() {
        let json = serde_json::to_string(&OverflowMode::Checked).unwrap();
        assert_eq!(json, "\"checked\"");
    }
}
