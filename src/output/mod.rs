//! Output formatting for addresses.
//!
//! - [`text`] - compressed and uncompressed address text
//! - [`terminal`] - command-line output, plain or JSON

mod terminal;
mod text;

pub use terminal::{format_field, format_info, format_networks, AddressInfo};
pub use text::{as_compressed_string, as_uncompressed_string};
