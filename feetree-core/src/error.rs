use std::fmt::{Display, Formatter};

use crate::{avl, ledger};

/// A `Result` type that all fallible API calls in feetree will return.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible error cases that can be return by API calls in feetree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The input (e.g., fee amount, paid amount) is invalid.
    InputInvalid,
    /// A record with the same key already exists and duplicates are rejected.
    DuplicateKey,
    /// No record exists for the given key.
    NotFound,
    /// The index violates one of its structural invariants.
    IndexCorrupted,
}

#[derive(Debug)]
pub struct Error {
    code: ErrorCode,
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl Display for ErrorCode {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::InputInvalid => "invalid input argument",
            Self::DuplicateKey => "duplicate key",
            Self::NotFound => "record not found",
            Self::IndexCorrupted => "index is corrupted",
        })
    }
}

impl Error {
    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

impl Display for Error {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.source)
    }
}

impl std::error::Error for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<ledger::InputInvalid> for Error {
    #[inline]
    fn from(value: ledger::InputInvalid) -> Self {
        Self {
            code: ErrorCode::InputInvalid,
            source: Box::new(value),
        }
    }
}

impl From<ledger::DuplicateFee> for Error {
    #[inline]
    fn from(value: ledger::DuplicateFee) -> Self {
        Self {
            code: ErrorCode::DuplicateKey,
            source: Box::new(value),
        }
    }
}

impl From<ledger::FeeNotFound> for Error {
    #[inline]
    fn from(value: ledger::FeeNotFound) -> Self {
        Self {
            code: ErrorCode::NotFound,
            source: Box::new(value),
        }
    }
}

impl From<avl::InvariantViolation> for Error {
    #[inline]
    fn from(value: avl::InvariantViolation) -> Self {
        Self {
            code: ErrorCode::IndexCorrupted,
            source: Box::new(value),
        }
    }
}
