use core::fmt;

use super::StackError;


/// Rejected push, handing the element back to the caller.
///
/// A failed push never stores or drops the element, so ownership returns through this error.
#[derive(Clone, PartialEq, Eq)]
pub struct PushError<T> {
  error: StackError,
  item:  T,
}

impl<T> PushError<T> {
  /// Creates a rejection for `item` with the given reason.
  #[must_use]
  pub const fn new(error: StackError, item: T) -> Self {
    Self { error, item }
  }

  /// Returns the reason the push was rejected.
  #[must_use]
  pub const fn error(&self) -> StackError {
    self.error
  }

  /// Returns a reference to the rejected element.
  #[must_use]
  pub const fn item(&self) -> &T {
    &self.item
  }

  /// Consumes the error and returns the rejected element.
  #[must_use]
  pub fn into_item(self) -> T {
    self.item
  }

  /// Splits the error into its reason and the rejected element.
  #[must_use]
  pub fn into_parts(self) -> (StackError, T) {
    (self.error, self.item)
  }
}

impl<T> From<PushError<T>> for StackError {
  fn from(err: PushError<T>) -> Self {
    err.error
  }
}

impl<T> fmt::Debug for PushError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("PushError").field("error", &self.error).finish_non_exhaustive()
  }
}

impl<T> fmt::Display for PushError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "push rejected: {}", self.error)
  }
}
