use tracing::{debug, trace};

use super::{BoundedStack, LOG_TARGET, PushError, StackConfig, StackError};


/// Nullable handle over a [`BoundedStack`] with an explicit create/destroy lifecycle.
///
/// The handle is either live or null. [`destroy`](Self::destroy) releases the slot buffer
/// deterministically and nulls the handle; every later operation fails with
/// [`StackError::NullHandle`] instead of touching released memory. Dropping a live handle releases
/// it as well.
#[derive(Debug)]
pub struct StackHandle<T> {
  stack: Option<BoundedStack<T>>,
}

impl<T> StackHandle<T> {
  /// Creates a live handle over a new stack with the given capacity.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::ZeroCapacity`] for a zero capacity and [`StackError::AllocError`] when
  /// the slot buffer cannot be allocated.
  pub fn create(capacity: usize) -> Result<Self, StackError> {
    Self::with_config(StackConfig::new(capacity))
  }

  /// Creates a live handle over a new stack built from `config`.
  ///
  /// # Errors
  ///
  /// Propagates the errors of [`BoundedStack::with_config`].
  pub fn with_config(config: StackConfig) -> Result<Self, StackError> {
    let stack = BoundedStack::with_config(config)?;
    Ok(Self { stack: Some(stack) })
  }

  /// Returns a handle that refers to no stack.
  #[must_use]
  pub const fn null() -> Self {
    Self { stack: None }
  }

  /// Indicates whether the handle refers to no stack.
  #[must_use]
  pub const fn is_null(&self) -> bool {
    self.stack.is_none()
  }

  /// Releases the stack and nulls the handle.
  ///
  /// Elements still stored are dropped; for borrowed element types only the references go away.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::NullHandle`] when the handle is already null.
  pub fn destroy(&mut self) -> Result<(), StackError> {
    let Some(stack) = self.stack.take() else {
      trace!(target: LOG_TARGET, operation = "destroy", "operation on null stack handle");
      return Err(StackError::NullHandle);
    };
    let released = stack.len();
    let capacity = stack.capacity();
    drop(stack);
    debug!(target: LOG_TARGET, capacity, released, "stack destroyed");
    Ok(())
  }

  /// Pushes `item` onto the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::NullHandle`] for a null handle and [`StackError::Full`] when the stack is
  /// at capacity; `item` is handed back in both cases.
  pub fn push(&mut self, item: T) -> Result<(), PushError<T>> {
    match self.stack.as_mut() {
      | Some(stack) => stack.push(item),
      | None => Err(PushError::new(null_handle("push"), item)),
    }
  }

  /// Removes and returns the top element.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::NullHandle`] for a null handle and [`StackError::Empty`] when the stack
  /// holds no elements.
  pub fn pop(&mut self) -> Result<T, StackError> {
    self.live_mut("pop")?.pop()
  }

  /// Returns the top element without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::NullHandle`] for a null handle and [`StackError::Empty`] when the stack
  /// holds no elements.
  pub fn peek_top(&self) -> Result<&T, StackError> {
    self.live("peek_top")?.peek_top()
  }

  /// Returns the number of stored elements.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::NullHandle`] for a null handle and [`StackError::Empty`] when the stack
  /// holds no elements.
  pub fn count(&self) -> Result<usize, StackError> {
    self.live("count")?.count()
  }

  /// Returns the live stack, if any.
  #[must_use]
  pub const fn as_stack(&self) -> Option<&BoundedStack<T>> {
    self.stack.as_ref()
  }

  /// Returns the live stack mutably, if any.
  pub const fn as_stack_mut(&mut self) -> Option<&mut BoundedStack<T>> {
    self.stack.as_mut()
  }

  /// Consumes the handle and returns the live stack, if any.
  #[must_use]
  pub fn into_stack(self) -> Option<BoundedStack<T>> {
    self.stack
  }

  fn live(&self, operation: &'static str) -> Result<&BoundedStack<T>, StackError> {
    self.stack.as_ref().ok_or_else(|| null_handle(operation))
  }

  fn live_mut(&mut self, operation: &'static str) -> Result<&mut BoundedStack<T>, StackError> {
    self.stack.as_mut().ok_or_else(|| null_handle(operation))
  }
}

impl<T> Default for StackHandle<T> {
  fn default() -> Self {
    Self::null()
  }
}

impl<T> From<BoundedStack<T>> for StackHandle<T> {
  fn from(stack: BoundedStack<T>) -> Self {
    Self { stack: Some(stack) }
  }
}

fn null_handle(operation: &'static str) -> StackError {
  trace!(target: LOG_TARGET, operation, "operation on null stack handle");
  StackError::NullHandle
}
