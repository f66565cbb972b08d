use alloc::format;

use super::SpinStackLock;
use crate::sync::StackLock;

#[test]
fn with_locked_allows_read_write() {
  let lock = SpinStackLock::new(0);
  lock.with_locked(|value| *value = 123);
  assert_eq!(lock.with_locked(|value| *value), 123);
}

#[test]
fn into_inner_unwraps_value() {
  let lock = SpinStackLock::new(999);
  assert_eq!(lock.into_inner(), 999);
}

#[test]
fn debug_reports_unlocked_value() {
  let lock = SpinStackLock::new(7_u8);
  assert!(format!("{lock:?}").contains('7'));
}
