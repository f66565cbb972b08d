use alloc::format;

use super::ArcShared;

#[test]
fn clones_share_the_value() {
  let shared = ArcShared::new(5_u32);
  let clone = shared.clone();

  assert_eq!(*clone, 5);
  assert_eq!(shared, clone);
}

#[test]
fn distinct_allocations_are_not_equal() {
  assert_ne!(ArcShared::new(1_u8), ArcShared::new(1_u8));
}

#[test]
fn try_unwrap_succeeds_for_last_owner() {
  let shared = ArcShared::new(7_u32);
  let clone = shared.clone();

  let shared = shared.try_unwrap().unwrap_err();
  drop(clone);
  assert_eq!(shared.try_unwrap().ok(), Some(7));
}

#[test]
fn debug_shows_inner_value() {
  let shared = ArcShared::new(42_u16);
  assert_eq!(format!("{shared:?}"), "ArcShared(42)");
}
