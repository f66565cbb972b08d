use alloc::{format, string::ToString};

use super::StackError;
use crate::collections::stack::StackStatus;

#[test]
fn status_mapping_covers_taxonomy() {
  assert_eq!(StackError::NullHandle.status(), StackStatus::NullPointer);
  assert_eq!(StackError::Full.status(), StackStatus::Full);
  assert_eq!(StackError::Empty.status(), StackStatus::Empty);
  assert_eq!(StackError::AllocError.status(), StackStatus::NotOk);
  assert_eq!(StackError::ZeroCapacity.status(), StackStatus::NotOk);
}

#[test]
fn display_describes_condition() {
  assert_eq!(StackError::Full.to_string(), "stack is full");
  assert_eq!(StackError::Empty.to_string(), "stack is empty");
  assert!(StackError::NullHandle.to_string().contains("null"));
  assert!(StackError::ZeroCapacity.to_string().contains("zero"));
}

#[test]
fn stack_error_is_debug() {
  let debug_str = format!("{:?}", StackError::Empty);
  assert!(debug_str.contains("Empty"));
}

#[test]
fn stack_error_is_copy() {
  let err1 = StackError::Full;
  let err2 = err1;
  assert_eq!(err1, err2);
}

#[test]
fn stack_error_partial_eq() {
  assert_eq!(StackError::Empty, StackError::Empty);
  assert_ne!(StackError::Empty, StackError::Full);
}
