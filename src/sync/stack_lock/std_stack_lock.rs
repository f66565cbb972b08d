use std::sync::{Mutex, PoisonError};

use super::StackLock;


/// [`StackLock`] built on `std::sync::Mutex`.
///
/// Poisoning is ignored: stack operations cannot be interrupted half way, so the next locker
/// takes over a consistent value.
#[derive(Debug)]
pub struct StdStackLock<T>(Mutex<T>);

impl<T> StackLock<T> for StdStackLock<T> {
  fn new(value: T) -> Self {
    Self(Mutex::new(value))
  }

  fn into_inner(self) -> T {
    self.0.into_inner().unwrap_or_else(PoisonError::into_inner)
  }

  fn with_locked<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
    let mut guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
  }
}
