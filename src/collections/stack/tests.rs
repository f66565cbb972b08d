use super::{BoundedStack, StackError, StackHandle, StackStatus};

#[test]
fn count_equals_pushes_minus_pops() {
  let capacity = 6;
  for pushes in 0..=capacity {
    for pops in 0..=pushes {
      let mut stack = BoundedStack::new(capacity).unwrap();
      for value in 0..pushes {
        stack.push(value).unwrap();
      }
      for _ in 0..pops {
        stack.pop().unwrap();
      }
      assert_eq!(stack.len(), pushes - pops);
      if pushes > pops {
        assert_eq!(stack.count(), Ok(pushes - pops));
      } else {
        assert_eq!(stack.count(), Err(StackError::Empty));
      }
      assert_eq!(stack.top_index(), (pushes - pops).checked_sub(1));
    }
  }
}

#[test]
fn filling_then_draining_reports_bounds() {
  for capacity in 1..=5 {
    let mut stack = BoundedStack::new(capacity).unwrap();
    for value in 0..capacity {
      stack.push(value).unwrap();
    }
    assert_eq!(stack.push(capacity).unwrap_err().error(), StackError::Full);
    assert_eq!(stack.count(), Ok(capacity));

    for expected in (0..capacity).rev() {
      assert_eq!(stack.pop(), Ok(expected));
    }
    assert_eq!(stack.pop(), Err(StackError::Empty));
    assert_eq!(stack.count(), Err(StackError::Empty));
  }
}

#[test]
fn repeated_peeks_agree() {
  let mut handle = StackHandle::create(2).unwrap();
  handle.push("top").unwrap();

  let first = handle.peek_top().copied();
  let second = handle.peek_top().copied();
  assert_eq!(first, second);
  assert_eq!(StackStatus::of(&first), StackStatus::Ok);
  assert_eq!(handle.count(), Ok(1));
}
