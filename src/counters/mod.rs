//! Counting rules for the [`RangeEngine`](crate::engine::RangeEngine).
//!
//! - [`exact_double`] : a block repeated exactly twice (`5252`, `123123`).
//! - [`repeated`]     : a block repeated two or more times (`111`, `898898898`),
//!   each integer counted once across all of its decompositions.

pub mod exact_double;
pub mod repeated;

pub use exact_double::ExactDouble;
pub use repeated::RepeatedBlock;
