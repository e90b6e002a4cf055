//! Netmask decoding.

use super::{parse, parse_dec_str};
use crate::error::AddressError;
use crate::models::new_netmask;

/// Prefix length of a contiguous netmask value `1^k 0^(bits-k)`.
///
/// # Examples
/// ```
/// use ipaddress::parse::netmask_to_prefix;
/// assert_eq!(netmask_to_prefix(0xffff_ff00, 32).unwrap(), 24);
/// assert!(netmask_to_prefix(0xff00_ff00, 32).is_err());
/// ```
pub fn netmask_to_prefix(netmask: u128, bits: u8) -> Result<u8, AddressError> {
    let host_bits = netmask.trailing_zeros().min(bits as u32) as u8;
    let num = bits - host_bits;
    if netmask == new_netmask(num, bits) {
        Ok(num)
    } else {
        Err(AddressError::NotANetmask(format!(
            "{netmask:#x} is not a {bits} bit netmask"
        )))
    }
}

/// Prefix length from a decimal length or a netmask literal.
pub fn parse_netmask_to_prefix(text: &str) -> Result<u8, AddressError> {
    let text = text.trim();
    if let Some(num) = parse_dec_str(text) {
        return u8::try_from(num)
            .map_err(|_| AddressError::Range(format!("Prefix {num} is too large")));
    }
    let mask = parse(text)?;
    netmask_to_prefix(mask.host(), mask.family().bits())
}

pub fn is_valid_netmask(text: &str) -> bool {
    parse_netmask_to_prefix(text).is_ok()
}
