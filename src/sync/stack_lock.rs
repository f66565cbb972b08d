mod spin_stack_lock;
#[cfg(feature = "std")]
mod std_stack_lock;

pub use spin_stack_lock::SpinStackLock;
#[cfg(feature = "std")]
pub use std_stack_lock::StdStackLock;

/// Mutual exclusion around one stack instance.
///
/// Every access runs inside [`with_locked`](StackLock::with_locked), so a whole
/// read-modify-write of the element count happens under a single acquisition.
pub trait StackLock<T> {
  /// Wraps `value` in a new lock.
  fn new(value: T) -> Self;

  /// Consumes the lock and returns the protected value.
  #[must_use]
  fn into_inner(self) -> T;

  /// Runs `f` with exclusive access to the protected value.
  fn with_locked<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;
}
