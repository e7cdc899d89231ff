//! Terminal failures of a retried operation

use thiserror::Error;

/// Why a retried operation gave up
///
/// Both variants carry the error of the final attempt.
#[derive(Error, Debug)]
pub enum RetryError<E> {
    /// Every permitted attempt failed
    #[error("gave up after {attempts} attempt(s): {source}")]
    Exhausted {
        attempts: u32,
        #[source]
        source: E,
    },

    /// The error was classified as not worth another attempt
    #[error("non-retryable failure on attempt {attempt}: {source}")]
    NonRetryable {
        attempt: u32,
        #[source]
        source: E,
    },
}

impl<E> RetryError<E> {
    /// Number of attempts made, including the one that failed last
    pub fn attempts(&self) -> u32 {
        match self {
            RetryError::Exhausted { attempts, .. } => *attempts,
            RetryError::NonRetryable { attempt, .. } => *attempt,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, RetryError::Exhausted { .. })
    }

    /// The error of the final attempt
    pub fn into_source(self) -> E {
        match self {
            RetryError::Exhausted { source, .. } | RetryError::NonRetryable { source, .. } => source,
        }
    }
}
