/// Fixed-capacity LIFO stack and its supporting types.
pub mod stack;
