//! Core trait abstractions for pool quoting.
//!
//! [`SwapQuoter`] is implemented by every pool model in
//! [`pools`](crate::pools).

mod swap_quoter;

pub use swap_quoter::SwapQuoter;
