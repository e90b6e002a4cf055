//! Address value model.
//!
//! This module contains the core data structures:
//! - [`Family`] and [`IpBits`] - per-family widths and DNS layout
//! - [`Prefix`] - prefix length with its netmask
//! - [`Address`] - host value bound to a prefix

mod address;
mod family;
mod prefix;

// Re-export public types
pub use address::Address;
pub use family::{clear_low_bits, ones, Family, IpBits, IPV4_BITS, IPV6_BITS};
pub use prefix::{new_netmask, Prefix};
