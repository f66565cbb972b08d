use super::{StackError, ZeroCapacityPolicy};


/// Construction-time configuration of a bounded stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackConfig {
  capacity:      usize,
  zero_capacity: ZeroCapacityPolicy,
}

impl StackConfig {
  /// Creates a configuration for the given capacity using the default zero-capacity policy.
  #[must_use]
  pub const fn new(capacity: usize) -> Self {
    Self { capacity, zero_capacity: ZeroCapacityPolicy::Reject }
  }

  /// Returns a copy of this configuration with the given zero-capacity policy.
  #[must_use]
  pub const fn with_zero_capacity_policy(mut self, policy: ZeroCapacityPolicy) -> Self {
    self.zero_capacity = policy;
    self
  }

  /// Returns the configured capacity.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Returns the configured zero-capacity policy.
  #[must_use]
  pub const fn zero_capacity_policy(&self) -> ZeroCapacityPolicy {
    self.zero_capacity
  }

  /// Checks that the configuration can produce a stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::ZeroCapacity`] when the capacity is zero and the policy rejects it.
  pub const fn validate(&self) -> Result<(), StackError> {
    match (self.capacity, self.zero_capacity) {
      | (0, ZeroCapacityPolicy::Reject) => Err(StackError::ZeroCapacity),
      | _ => Ok(()),
    }
  }
}

impl From<usize> for StackConfig {
  fn from(capacity: usize) -> Self {
    Self::new(capacity)
  }
}
