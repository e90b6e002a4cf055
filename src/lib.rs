//! IPv4 and IPv6 addresses as integers bound to a subnet prefix.
//!
//! Prefix arithmetic, canonical text forms (including the `::` compressed
//! IPv6 form), reverse DNS names and network summarization.
//!
//! ```
//! use ipaddress::summarize_str;
//! let nets = summarize_str(&["10.0.0.1/24", "10.0.1.1/24"]).unwrap();
//! assert_eq!(nets[0].to_string(), "10.0.0.0/23");
//! ```

pub mod cli;
pub mod error;
pub mod models;
pub mod output;
pub mod parse;
pub mod processing;
pub mod rle;

pub use error::AddressError;
pub use models::{Address, Family, Prefix};
pub use parse::parse;
pub use processing::{aggregate, summarize, summarize_str};
