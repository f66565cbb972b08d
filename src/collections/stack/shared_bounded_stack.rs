use core::{fmt, marker::PhantomData};

use super::{BoundedStack, PushError, StackConfig, StackError};
use crate::sync::{ArcShared, StackLock, stack_lock::SpinStackLock};

#[cfg(test)]
mod tests;

/// Bounded stack shared between execution contexts behind one lock per instance.
///
/// Each operation holds the lock for its whole read-modify-write of the element count, so
/// concurrent callers observe the same invariants as a single-threaded [`BoundedStack`]. Clones
/// refer to the same stack.
pub struct SharedBoundedStack<T, L = SpinStackLock<BoundedStack<T>>>
where
  L: StackLock<BoundedStack<T>>, {
  inner: ArcShared<L>,
  _pd:   PhantomData<T>,
}

impl<T, L> SharedBoundedStack<T, L>
where
  L: StackLock<BoundedStack<T>>,
{
  /// Creates a shared stack holding at most `capacity` elements.
  ///
  /// # Errors
  ///
  /// Propagates the errors of [`BoundedStack::new`].
  pub fn new(capacity: usize) -> Result<Self, StackError> {
    Ok(Self::from_stack(BoundedStack::new(capacity)?))
  }

  /// Creates a shared stack from an explicit configuration.
  ///
  /// # Errors
  ///
  /// Propagates the errors of [`BoundedStack::with_config`].
  pub fn with_config(config: StackConfig) -> Result<Self, StackError> {
    Ok(Self::from_stack(BoundedStack::with_config(config)?))
  }

  /// Wraps an existing stack.
  #[must_use]
  pub fn from_stack(stack: BoundedStack<T>) -> Self {
    Self { inner: ArcShared::new(L::new(stack)), _pd: PhantomData }
  }

  /// Pushes an item onto the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Full`] together with `item` when the stack is at capacity.
  pub fn push(&self, item: T) -> Result<(), PushError<T>> {
    self.inner.with_locked(|stack| stack.push(item))
  }

  /// Pops the top item from the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn pop(&self) -> Result<T, StackError> {
    self.inner.with_locked(BoundedStack::pop)
  }

  /// Returns a clone of the top item without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn peek_top(&self) -> Result<T, StackError>
  where
    T: Clone, {
    self.inner.with_locked(|stack| stack.peek_top().cloned())
  }

  /// Returns the number of stored elements.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn count(&self) -> Result<usize, StackError> {
    self.inner.with_locked(|stack| stack.count())
  }

  /// Runs `f` with exclusive access, for compound operations that must not interleave.
  pub fn with_stack<R>(&self, f: impl FnOnce(&mut BoundedStack<T>) -> R) -> R {
    self.inner.with_locked(f)
  }

  /// Drops every stored element.
  pub fn clear(&self) {
    self.inner.with_locked(BoundedStack::clear);
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.inner.with_locked(|stack| stack.len())
  }

  /// Returns the fixed capacity.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.inner.with_locked(|stack| stack.capacity())
  }

  /// Indicates whether the stack is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Indicates whether the stack is full.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.inner.with_locked(|stack| stack.is_full())
  }

  /// Provides access to the underlying shared lock.
  #[must_use]
  pub const fn shared(&self) -> &ArcShared<L> {
    &self.inner
  }

  /// Returns the stack when this is the last handle to it.
  ///
  /// # Errors
  ///
  /// Returns `self` unchanged while other clones are alive.
  pub fn try_into_stack(self) -> Result<BoundedStack<T>, Self> {
    let Self { inner, _pd } = self;
    match inner.try_unwrap() {
      | Ok(lock) => Ok(lock.into_inner()),
      | Err(inner) => Err(Self { inner, _pd }),
    }
  }
}

impl<T, L> Clone for SharedBoundedStack<T, L>
where
  L: StackLock<BoundedStack<T>>,
{
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone(), _pd: PhantomData }
  }
}

impl<T, L> fmt::Debug for SharedBoundedStack<T, L>
where
  L: StackLock<BoundedStack<T>> + fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SharedBoundedStack").field("inner", &self.inner).finish()
  }
}
