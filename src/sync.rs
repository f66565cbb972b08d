#[allow(clippy::disallowed_types)]
mod arc_shared;
/// Locks that serialize access to a single stack instance.
pub mod stack_lock;

pub use arc_shared::ArcShared;
pub use stack_lock::StackLock;
