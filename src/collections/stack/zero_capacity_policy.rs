/// Policy describing how a stack treats a requested capacity of zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ZeroCapacityPolicy {
  /// Creation fails with [`StackError::ZeroCapacity`](super::StackError::ZeroCapacity).
  #[default]
  Reject,
  /// The stack is created and is permanently both full and empty.
  Degenerate,
}
