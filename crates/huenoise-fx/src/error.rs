//! Sequencer construction errors.

use core::fmt;

use crate::config::ConfigError;

/// Why a [`FrameSequencer`](crate::FrameSequencer) could not be built.
///
/// Construction validates everything up front, so frame production itself
/// never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum SequencerError {
    /// One or more configuration violations, in validation order.
    Config(Vec<ConfigError>),
}

impl SequencerError {
    /// The individual configuration violations.
    #[must_use]
    pub fn config_errors(&self) -> &[ConfigError] {
        match self {
            Self::Config(errors) => errors,
        }
    }
}

impl From<Vec<ConfigError>> for SequencerError {
    fn from(errors: Vec<ConfigError>) -> Self {
        Self::Config(errors)
    }
}

impl From<ConfigError> for SequencerError {
    fn from(error: ConfigError) -> Self {
        Self::Config(vec![error])
    }
}

impl fmt::Display for SequencerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(errors) => {
                write!(f, "invalid sequencer configuration")?;
                for (i, error) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{error}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SequencerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(errors) => errors
                .first()
                .map(|e| e as &(dyn std::error::Error + 'static)),
        }
    }
}
