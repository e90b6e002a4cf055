//! Colon hex IPv6 grammar, including the `…:a.b.c.d` mapped form.

use super::{format_error, parse_hex_str, parse_ipv4, parse_prefix_num, split_at_slash};
use crate::error::AddressError;
use crate::models::{Address, Family};

const GROUPS: usize = 8;

/// Colon separated hextets to a value, with the number of groups read.
///
/// An empty string is zero groups.
pub fn split_on_colon(addr: &str) -> Option<(u128, usize)> {
    let addr = addr.trim();
    if addr.is_empty() {
        return Some((0, 0));
    }
    let parts: Vec<&str> = addr.split(':').collect();
    if parts.len() > GROUPS {
        return None;
    }
    let mut ip = 0u128;
    for part in &parts {
        let group = parse_hex_str(part).filter(|group| *group < 0x10000)?;
        ip = (ip << 16) | group;
    }
    Some((ip, parts.len()))
}

/// Full IPv6 address text (no prefix) to its 128 bit value.
pub fn split_to_num(addr: &str) -> Option<u128> {
    let halves: Vec<&str> = addr.trim().split("::").collect();
    match halves.as_slice() {
        [whole] => {
            let (ip, groups) = split_on_colon(whole)?;
            (groups == GROUPS).then_some(ip)
        }
        [pre, post] => {
            let (pre_ip, pre_groups) = split_on_colon(pre)?;
            let (post_ip, post_groups) = split_on_colon(post)?;
            // `::` stands for at least one zero group
            if pre_groups + post_groups >= GROUPS {
                return None;
            }
            let pre_ip = match pre_groups {
                0 => 0,
                n => pre_ip << (128 - n * 16),
            };
            Some(pre_ip | post_ip)
        }
        _ => None,
    }
}

pub fn is_valid_ipv6(addr: &str) -> bool {
    split_to_num(addr).is_some()
}

/// Parse `x:x:…:x[/prefix]` with a decimal prefix.
pub fn parse_ipv6(text: &str) -> Result<Address, AddressError> {
    let (addr, netmask) = split_at_slash(text)?;
    let host = split_to_num(addr).ok_or_else(|| format_error(text, "not a colon hex IPv6 address"))?;
    let num = match netmask {
        Some(netmask) => parse_prefix_num(netmask)?,
        None => Family::V6.bits(),
    };
    Address::ipv6(host, num)
}

/// Parse `…:a.b.c.d[/n]`, where `n` is the IPv4 prefix length.
///
/// The IPv4 tail becomes the low two hextets and the prefix is rebased to
/// 128 - (32 - n). `::a.b.c.d` is read as `::ffff:a.b.c.d`.
pub fn parse_mapped(text: &str) -> Result<Address, AddressError> {
    let (addr, netmask) = split_at_slash(text)?;
    let (head, tail) = addr
        .rsplit_once(':')
        .ok_or_else(|| format_error(text, "no IPv6 head before the IPv4 tail"))?;
    let ipv4 = match netmask {
        Some(netmask) => parse_ipv4(&format!("{tail}/{netmask}"))?,
        None => parse_ipv4(tail)?,
    };
    let v4_host = ipv4.host();
    let low_groups = format!("{:x}:{:x}", v4_host >> 16, v4_host & 0xffff);
    let num = Family::V6.bits() - ipv4.prefix().host_prefix();

    let host = split_to_num(&format!("{head}:{low_groups}"))
        .ok_or_else(|| format_error(text, "not a mapped IPv6 address"))?;
    let ipv6 = Address::ipv6(host, num)?;
    if ipv6.is_mapped() || host >> 32 == 0xffff {
        return Ok(ipv6);
    }
    if host >> 32 != 0 {
        return Err(format_error(text, "IPv4 tail on a non-mapped IPv6 address"));
    }
    Address::ipv6((0xffff << 32) | host, num)
}
