use alloc::format;

use super::SharedBoundedStack;
use crate::collections::stack::{BoundedStack, SpinSharedStack, StackError};

#[test]
fn push_pop_maintains_lifo() {
  let stack: SpinSharedStack<u32> = SharedBoundedStack::new(2).unwrap();

  stack.push(1).unwrap();
  stack.push(2).unwrap();
  assert_eq!(stack.pop(), Ok(2));
  assert_eq!(stack.pop(), Ok(1));
  assert_eq!(stack.pop(), Err(StackError::Empty));
}

#[test]
fn full_stack_reports_full() {
  let stack: SpinSharedStack<u32> = SharedBoundedStack::new(1).unwrap();

  stack.push(10).unwrap();
  let err = stack.push(20).unwrap_err();
  assert_eq!(err.error(), StackError::Full);
  assert_eq!(err.into_item(), 20);
  assert!(stack.is_full());
  assert_eq!(stack.count(), Ok(1));
}

#[test]
fn peek_top_returns_clone_of_top() {
  let stack: SpinSharedStack<u32> = SharedBoundedStack::new(3).unwrap();

  assert_eq!(stack.peek_top(), Err(StackError::Empty));
  stack.push(5).unwrap();
  stack.push(7).unwrap();
  assert_eq!(stack.peek_top(), Ok(7));
  assert_eq!(stack.len(), 2);
}

#[test]
fn clones_share_one_stack() {
  let stack: SpinSharedStack<u32> = SharedBoundedStack::new(2).unwrap();
  let other = stack.clone();

  other.push(3).unwrap();
  assert_eq!(stack.len(), 1);
  assert!(stack.shared() == other.shared());

  stack.clear();
  assert!(other.is_empty());
  assert_eq!(other.capacity(), 2);
}

#[test]
fn with_stack_runs_compound_operation_atomically() {
  let stack: SpinSharedStack<u32> = SharedBoundedStack::new(2).unwrap();
  stack.push(4).unwrap();

  let doubled = stack.with_stack(|inner| -> Result<u32, StackError> {
    let top = inner.pop()?;
    inner.push(top * 2).map_err(StackError::from)?;
    inner.peek_top().copied()
  });
  assert_eq!(doubled, Ok(8));
}

#[test]
fn try_into_stack_requires_sole_owner() {
  let stack: SpinSharedStack<u32> = SharedBoundedStack::from_stack(BoundedStack::new(1).unwrap());
  let other = stack.clone();

  let stack = stack.try_into_stack().err().unwrap();
  drop(other);
  let inner = stack.try_into_stack().ok().unwrap();
  assert_eq!(inner.capacity(), 1);
}

#[test]
fn zero_capacity_is_rejected() {
  let result = SpinSharedStack::<u8>::new(0);
  assert!(matches!(result, Err(StackError::ZeroCapacity)));
}

#[test]
fn debug_shows_guarded_stack() {
  let stack: SpinSharedStack<u32> = SharedBoundedStack::new(2).unwrap();
  stack.push(9).unwrap();

  let rendered = format!("{stack:?}");
  assert!(rendered.starts_with("SharedBoundedStack"));
  assert!(rendered.contains("BoundedStack"));
  assert!(rendered.contains('9'));
}
