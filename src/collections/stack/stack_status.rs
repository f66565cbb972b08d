use core::fmt;

use super::{PushError, StackError};


/// Status codes shared by every stack operation.
///
/// Operations return `Result`s; this enum collapses a result into the five-valued status domain
/// for callers that report or log outcomes uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackStatus {
  /// The operation succeeded.
  Ok,
  /// Generic failure, including allocation failure during creation.
  NotOk,
  /// A required handle was null.
  NullPointer,
  /// Push rejected because the stack reached its capacity.
  Full,
  /// Pop, peek or count on a stack without elements.
  Empty,
}

impl StackStatus {
  /// Derives the status of an operation result.
  #[must_use]
  pub fn of<R>(result: &Result<R, StackError>) -> Self {
    match result {
      | Ok(_) => StackStatus::Ok,
      | Err(err) => err.status(),
    }
  }

  /// Derives the status of a push result.
  #[must_use]
  pub const fn of_push<T>(result: &Result<(), PushError<T>>) -> Self {
    match result {
      | Ok(()) => StackStatus::Ok,
      | Err(err) => err.error().status(),
    }
  }

  /// Returns `true` for [`StackStatus::Ok`].
  #[must_use]
  pub const fn is_ok(self) -> bool {
    matches!(self, StackStatus::Ok)
  }

  /// Returns the conventional upper-case name of the status.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      | StackStatus::Ok => "STACK_OK",
      | StackStatus::NotOk => "STACK_NOK",
      | StackStatus::NullPointer => "STACK_NULL_POINTER",
      | StackStatus::Full => "STACK_FULL",
      | StackStatus::Empty => "STACK_EMPTY",
    }
  }
}

impl From<StackError> for StackStatus {
  fn from(err: StackError) -> Self {
    err.status()
  }
}

impl fmt::Display for StackStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
