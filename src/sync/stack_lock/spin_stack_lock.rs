use super::StackLock;

#[cfg(test)]
mod tests;

/// [`StackLock`] built on a [`spin::Mutex`]; usable without `std`.
#[derive(Debug)]
pub struct SpinStackLock<T>(spin::Mutex<T>);

impl<T> StackLock<T> for SpinStackLock<T> {
  fn new(value: T) -> Self {
    Self(spin::Mutex::new(value))
  }

  fn into_inner(self) -> T {
    self.0.into_inner()
  }

  fn with_locked<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
    let mut guard = self.0.lock();
    f(&mut guard)
  }
}
