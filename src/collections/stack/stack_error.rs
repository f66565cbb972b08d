use core::fmt;

use super::StackStatus;

#[cfg(test)]
mod tests;

/// Errors that may arise while operating on a bounded stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackError {
  /// The handle no longer refers to a live stack.
  NullHandle,
  /// The stack is at capacity and cannot accept new elements.
  Full,
  /// The stack contains no elements.
  Empty,
  /// The slot buffer could not be allocated.
  AllocError,
  /// A zero capacity was requested while the configuration rejects it.
  ZeroCapacity,
}

impl StackError {
  /// Returns the status code reported for this error.
  #[must_use]
  pub const fn status(self) -> StackStatus {
    match self {
      | StackError::NullHandle => StackStatus::NullPointer,
      | StackError::Full => StackStatus::Full,
      | StackError::Empty => StackStatus::Empty,
      | StackError::AllocError | StackError::ZeroCapacity => StackStatus::NotOk,
    }
  }
}

impl fmt::Display for StackError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | StackError::NullHandle => write!(f, "stack handle is null"),
      | StackError::Full => write!(f, "stack is full"),
      | StackError::Empty => write!(f, "stack is empty"),
      | StackError::AllocError => write!(f, "failed to allocate stack slots"),
      | StackError::ZeroCapacity => write!(f, "stack capacity must be greater than zero"),
    }
  }
}

impl core::error::Error for StackError {}
