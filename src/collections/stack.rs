//! Bounded stack built on a fixed-capacity slot buffer.

mod bounded_stack;
mod push_error;
mod shared_bounded_stack;
mod stack_config;
mod stack_error;
mod stack_handle;
mod stack_status;
pub mod storage;
#[cfg(test)]
mod tests;
mod zero_capacity_policy;

pub use bounded_stack::BoundedStack;
pub use push_error::PushError;
pub use shared_bounded_stack::SharedBoundedStack;
pub use stack_config::StackConfig;
pub use stack_error::StackError;
pub use stack_handle::StackHandle;
pub use stack_status::StackStatus;
pub use storage::SlotStorage;
pub use zero_capacity_policy::ZeroCapacityPolicy;

use crate::sync::stack_lock::SpinStackLock;

/// Target used by every `tracing` event emitted from the stack collection.
pub const LOG_TARGET: &str = "fraktor::collections::stack";

/// Default shared stack alias guarded by a spin lock.
pub type SpinSharedStack<T> = SharedBoundedStack<T, SpinStackLock<BoundedStack<T>>>;

/// Shared stack alias guarded by `std::sync::Mutex`.
#[cfg(feature = "std")]
pub type StdSharedStack<T> = SharedBoundedStack<T, crate::sync::stack_lock::StdStackLock<BoundedStack<T>>>;
