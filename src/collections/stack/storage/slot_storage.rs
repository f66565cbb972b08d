use alloc::vec::Vec;
use core::slice;

use crate::collections::stack::StackError;


/// Contiguous slot buffer with a capacity fixed at allocation time.
///
/// Every slot is reserved up front, so pushes below the limit never reallocate and never move
/// stored elements. Slots `[0, len)` are initialized; the rest are reserved but never exposed.
#[derive(Debug)]
pub struct SlotStorage<T> {
  slots: Vec<T>,
  limit: usize,
}

impl<T> SlotStorage<T> {
  /// Allocates a buffer holding exactly `capacity` slots.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::AllocError`] when the allocator cannot provide the buffer or the
  /// requested size overflows.
  pub fn try_with_capacity(capacity: usize) -> Result<Self, StackError> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(capacity).map_err(|_| StackError::AllocError)?;
    Ok(Self { slots, limit: capacity })
  }

  /// Returns the number of initialized slots.
  #[must_use]
  pub fn len(&self) -> usize {
    self.slots.len()
  }

  /// Returns whether no slot is initialized.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.slots.is_empty()
  }

  /// Returns the fixed number of slots.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.limit
  }

  /// Returns whether every slot is initialized.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.slots.len() >= self.limit
  }

  /// Writes `value` into the next free slot, handing it back when none is left.
  ///
  /// # Errors
  ///
  /// Returns the value unchanged when the buffer is full.
  pub fn push(&mut self, value: T) -> Result<(), T> {
    if self.is_full() {
      return Err(value);
    }
    debug_assert!(self.slots.len() < self.slots.capacity());
    self.slots.push(value);
    Ok(())
  }

  /// Takes the value out of the highest initialized slot.
  pub fn pop(&mut self) -> Option<T> {
    self.slots.pop()
  }

  /// Returns a reference to the value in the highest initialized slot.
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    self.slots.last()
  }

  /// Drops every stored value, keeping the allocation.
  pub fn clear(&mut self) {
    self.slots.clear();
  }

  /// Iterates the initialized slots from bottom to top.
  #[must_use]
  pub fn iter(&self) -> slice::Iter<'_, T> {
    self.slots.iter()
  }
}
