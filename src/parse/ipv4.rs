//! Dotted decimal IPv4 grammar and classful helpers.

use super::{format_error, parse_dec_str, parse_netmask_to_prefix, split_at_slash};
use crate::error::AddressError;
use crate::models::{Address, Family};

const CLASS_B_START: u128 = 0x8000_0000;
const CLASS_C_START: u128 = 0xc000_0000;
const CLASS_D_START: u128 = 0xe000_0000;

fn parse_ipv4_part(text: &str) -> Option<u32> {
    parse_dec_str(text)
        .filter(|part| *part < 256)
        .map(|part| part as u32)
}

/// Dotted decimal with one to four parts to a 32 bit value.
///
/// With fewer than four parts the last one is the low octet and the others
/// fill from the top: `10.1` is `10.0.0.1`.
pub fn split_to_u32(addr: &str) -> Option<u32> {
    let parts: Vec<&str> = addr.split('.').collect();
    if parts.len() > 4 {
        return None;
    }
    let (mut ip, head) = if parts.len() < 4 {
        let (last, head) = parts.split_last()?;
        (parse_ipv4_part(last)?, head)
    } else {
        (0, parts.as_slice())
    };
    let mut shift = 24;
    for part in head {
        ip |= parse_ipv4_part(part)? << shift;
        shift -= 8;
    }
    Some(ip)
}

pub fn is_valid_ipv4(addr: &str) -> bool {
    split_to_u32(addr).is_some()
}

/// Parse `a.b.c.d[/prefix]`, where prefix is a length or a dotted netmask.
pub fn parse_ipv4(text: &str) -> Result<Address, AddressError> {
    let (addr, netmask) = split_at_slash(text)?;
    let host = split_to_u32(addr).ok_or_else(|| format_error(text, "not a dotted decimal IPv4 address"))?;
    let num = match netmask {
        Some(netmask) => parse_netmask_to_prefix(netmask)?,
        None => Family::V4.bits(),
    };
    Address::ipv4(host, num)
}

pub fn is_class_a(addr: &Address) -> bool {
    addr.is_ipv4() && addr.host() < CLASS_B_START
}

pub fn is_class_b(addr: &Address) -> bool {
    addr.is_ipv4() && (CLASS_B_START..CLASS_C_START).contains(&addr.host())
}

pub fn is_class_c(addr: &Address) -> bool {
    addr.is_ipv4() && (CLASS_C_START..CLASS_D_START).contains(&addr.host())
}

/// Parse a bare IPv4 address and give it its classful prefix.
///
/// Class D and E addresses keep /32.
pub fn parse_classful(text: &str) -> Result<Address, AddressError> {
    if !is_valid_ipv4(text.trim()) {
        return Err(format_error(text, "not a bare IPv4 address"));
    }
    let ip = parse_ipv4(text)?;
    let num = if is_class_a(&ip) {
        8
    } else if is_class_b(&ip) {
        16
    } else if is_class_c(&ip) {
        24
    } else {
        return Ok(ip);
    };
    ip.change_prefix(num)
}
