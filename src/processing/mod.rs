//! Operations over collections of networks.
//!
//! - [`aggregate`] - summarization into a minimal covering list
//! - `dns` - reverse DNS names, as methods on [`crate::models::Address`]

mod aggregate;
mod dns;

// Re-export public functions
pub use aggregate::{aggregate, sum_first_found, summarize, summarize_str};
