use alloc::sync::Arc;
use core::{fmt, ops::Deref};

#[cfg(test)]
mod tests;

/// Shared handle backed by [`alloc::sync::Arc`]; clones point at the same value.
#[repr(transparent)]
pub struct ArcShared<T: ?Sized>(Arc<T>);

impl<T> ArcShared<T> {
  /// Creates a new `ArcShared` by wrapping the provided value.
  #[must_use]
  pub fn new(value: T) -> Self {
    Self(Arc::new(value))
  }

  /// Returns the value when this is the last handle to it.
  ///
  /// # Errors
  ///
  /// Returns `self` unchanged while other handles are alive.
  pub fn try_unwrap(self) -> Result<T, Self> {
    Arc::try_unwrap(self.0).map_err(ArcShared)
  }
}

impl<T: ?Sized> Deref for ArcShared<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for ArcShared<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("ArcShared").field(&&*self.0).finish()
  }
}

impl<T: ?Sized> PartialEq for ArcShared<T> {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }
}

impl<T: ?Sized> Eq for ArcShared<T> {}

impl<T: ?Sized> Clone for ArcShared<T> {
  fn clone(&self) -> Self {
    Self(Arc::clone(&self.0))
  }
}
