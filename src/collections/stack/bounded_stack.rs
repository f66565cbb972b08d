use core::{iter::Rev, slice};

use tracing::{debug, trace};

use super::{LOG_TARGET, PushError, SlotStorage, StackConfig, StackError};


/// Fixed-capacity LIFO stack backed by a preallocated slot buffer.
///
/// The element type decides ownership: a stack of references (`BoundedStack<&U>`) never owns the
/// pointees, while a stack of owned values drops whatever it still holds when it is dropped.
///
/// Every rejected operation leaves the stack untouched and usable.
#[derive(Debug)]
pub struct BoundedStack<T> {
  slots: SlotStorage<T>,
}

impl<T> BoundedStack<T> {
  /// Creates an empty stack holding at most `capacity` elements.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::ZeroCapacity`] for a zero capacity and [`StackError::AllocError`] when
  /// the slot buffer cannot be allocated.
  pub fn new(capacity: usize) -> Result<Self, StackError> {
    Self::with_config(StackConfig::new(capacity))
  }

  /// Creates an empty stack from an explicit configuration.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::ZeroCapacity`] when the configuration rejects its capacity and
  /// [`StackError::AllocError`] when the slot buffer cannot be allocated.
  pub fn with_config(config: StackConfig) -> Result<Self, StackError> {
    let capacity = config.capacity();
    let created = config.validate().and_then(|()| SlotStorage::try_with_capacity(capacity));
    match created {
      | Ok(slots) => {
        debug!(target: LOG_TARGET, capacity, "stack created");
        Ok(Self { slots })
      },
      | Err(error) => {
        debug!(target: LOG_TARGET, capacity, ?error, "stack creation failed");
        Err(error)
      },
    }
  }

  /// Pushes `item` onto the top of the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Full`] together with `item` when the stack is at capacity.
  pub fn push(&mut self, item: T) -> Result<(), PushError<T>> {
    self.slots.push(item).map_err(|item| PushError::new(self.rejected("push", StackError::Full), item))
  }

  /// Removes and returns the most recently pushed element.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn pop(&mut self) -> Result<T, StackError> {
    match self.slots.pop() {
      | Some(item) => Ok(item),
      | None => Err(self.rejected("pop", StackError::Empty)),
    }
  }

  /// Returns the most recently pushed element without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn peek_top(&self) -> Result<&T, StackError> {
    self.slots.peek().ok_or_else(|| self.rejected("peek_top", StackError::Empty))
  }

  /// Returns the number of stored elements.
  ///
  /// Unlike [`len`](Self::len), an empty stack is reported as an error; its count is zero.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn count(&self) -> Result<usize, StackError> {
    if self.slots.is_empty() {
      return Err(self.rejected("count", StackError::Empty));
    }
    Ok(self.slots.len())
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.slots.len()
  }

  /// Returns the fixed maximum number of elements.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.slots.capacity()
  }

  /// Returns the index of the top element, or `None` when the stack is empty.
  #[must_use]
  pub fn top_index(&self) -> Option<usize> {
    self.slots.len().checked_sub(1)
  }

  /// Indicates whether the stack is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.slots.is_empty()
  }

  /// Indicates whether the stack is at capacity.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.slots.is_full()
  }

  /// Drops every stored element, keeping the slot buffer.
  pub fn clear(&mut self) {
    self.slots.clear();
  }

  /// Iterates the stored elements from top to bottom.
  #[must_use]
  pub fn iter(&self) -> Rev<slice::Iter<'_, T>> {
    self.slots.iter().rev()
  }

  fn rejected(&self, operation: &'static str, error: StackError) -> StackError {
    trace!(
      target: LOG_TARGET,
      operation,
      ?error,
      len = self.slots.len(),
      capacity = self.slots.capacity(),
      "stack operation rejected"
    );
    error
  }
}

impl<'a, T> IntoIterator for &'a BoundedStack<T> {
  type IntoIter = Rev<slice::Iter<'a, T>>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
