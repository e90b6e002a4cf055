//! Text parsing of IPv4, IPv6 and IPv4-mapped IPv6 literals.
//!
//! [`parse`] sniffs the literal and hands it to the matching grammar.

mod ipv4;
mod ipv6;
mod netmask;

pub use ipv4::{
    is_class_a, is_class_b, is_class_c, is_valid_ipv4, parse_classful, parse_ipv4, split_to_u32,
};
pub use ipv6::{is_valid_ipv6, parse_ipv6, parse_mapped, split_on_colon, split_to_num};
pub use netmask::{is_valid_netmask, netmask_to_prefix, parse_netmask_to_prefix};

use crate::error::AddressError;
use crate::models::Address;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_MAPPED: Regex = Regex::new(r":.+\.").expect("Invalid Regex?");
    static ref RE_IPV4: Regex = Regex::new(r"\.").expect("Invalid Regex?");
    static ref RE_IPV6: Regex = Regex::new(r":").expect("Invalid Regex?");
    static ref RE_DEC: Regex = Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
    static ref RE_HEX: Regex = Regex::new(r"^[0-9a-fA-F]+$").expect("Invalid Regex?");
}

/// Parse an address literal with optional `/prefix`.
///
/// # Arguments
/// * `text` - IPv4 (`10.0.0.1/24`, `10.0.0.1/255.255.255.0`), IPv6
///   (`2001:db8::1/64`) or mapped (`::ffff:10.0.0.1/24`) literal
///
/// # Returns
/// The parsed [`Address`], or a [`AddressError::Format`] when no grammar matches
///
/// # Examples
/// ```
/// use ipaddress::parse;
/// assert_eq!(parse("10.0.0.1/255.255.255.0").unwrap().to_string(), "10.0.0.1/24");
/// assert!(parse("dd").is_err());
/// ```
pub fn parse(text: &str) -> Result<Address, AddressError> {
    let result = if RE_MAPPED.is_match(text) {
        parse_mapped(text)
    } else if RE_IPV4.is_match(text) {
        parse_ipv4(text)
    } else if RE_IPV6.is_match(text) {
        parse_ipv6(text)
    } else {
        Err(format_error(text, "neither IPv4 nor IPv6"))
    };
    if let Err(e) = &result {
        log::debug!("parse({text:?}) failed: {e}");
    }
    result
}

/// Bare address text (no prefix) is a valid IPv4 or IPv6 address.
pub fn is_valid(addr: &str) -> bool {
    is_valid_ipv4(addr) || is_valid_ipv6(addr)
}

/// Split `addr/prefix` into its trimmed halves.
///
/// More than one `/` or an empty prefix is a format error.
pub fn split_at_slash(text: &str) -> Result<(&str, Option<&str>), AddressError> {
    let mut halves = text.trim().splitn(3, '/');
    let addr = halves.next().unwrap_or_default().trim();
    let prefix = halves.next().map(str::trim);
    if halves.next().is_some() {
        return Err(format_error(text, "more than one '/'"));
    }
    match prefix {
        Some("") => Err(format_error(text, "empty prefix")),
        _ => Ok((addr, prefix)),
    }
}

pub(crate) fn parse_dec_str(text: &str) -> Option<u128> {
    if !RE_DEC.is_match(text) {
        return None;
    }
    text.parse().ok()
}

pub(crate) fn parse_hex_str(text: &str) -> Option<u128> {
    if !RE_HEX.is_match(text) {
        return None;
    }
    u128::from_str_radix(text, 16).ok()
}

/// Decimal prefix length, range checked later by the prefix itself.
pub(crate) fn parse_prefix_num(text: &str) -> Result<u8, AddressError> {
    let num = parse_dec_str(text).ok_or_else(|| format_error(text, "prefix is not a number"))?;
    u8::try_from(num).map_err(|_| AddressError::Range(format!("Prefix {num} is too large")))
}

pub(crate) fn format_error(text: &str, reason: &str) -> AddressError {
    AddressError::Format(format!("{text:?}: {reason}"))
}
