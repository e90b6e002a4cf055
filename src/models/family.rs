//! Address family constants.
//!
//! [`Family`] is the closed set of supported families; each one maps to an
//! immutable [`IpBits`] bundle describing its widths and DNS layout.

use serde::{Deserialize, Serialize};
use std::fmt;

/// IPv4 or IPv6.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum Family {
    V4,
    V6,
}

/// Per-family constants.
#[derive(Debug, PartialEq, Eq)]
pub struct IpBits {
    /// Total address width in bits.
    pub bits: u8,
    /// Width of one text group (octet or hextet).
    pub part_bits: u8,
    /// Width of one reverse-DNS label.
    pub dns_bits: u8,
    /// Reverse-DNS zone suffix.
    pub rev_domain: &'static str,
    /// `2^part_bits`.
    pub part_mod: u32,
    /// Offset from the network address to the first usable host.
    pub host_ofs: u128,
}

pub static IPV4_BITS: IpBits = IpBits {
    bits: 32,
    part_bits: 8,
    dns_bits: 8,
    rev_domain: "in-addr.arpa",
    part_mod: 1 << 8,
    host_ofs: 1,
};

pub static IPV6_BITS: IpBits = IpBits {
    bits: 128,
    part_bits: 16,
    dns_bits: 4,
    rev_domain: "ip6.arpa",
    part_mod: 1 << 16,
    host_ofs: 0,
};

impl Family {
    pub fn ip_bits(&self) -> &'static IpBits {
        match self {
            Family::V4 => &IPV4_BITS,
            Family::V6 => &IPV6_BITS,
        }
    }

    pub fn bits(&self) -> u8 {
        self.ip_bits().bits
    }

    /// Mask with all `bits` set, i.e. the largest valid host value.
    pub fn all_ones(&self) -> u128 {
        ones(self.bits())
    }

    /// Split `value` into groups, most significant group first.
    pub fn parts(&self, value: u128) -> Vec<u16> {
        let ip_bits = self.ip_bits();
        let count = ip_bits.bits / ip_bits.part_bits;
        let mask = (ip_bits.part_mod - 1) as u128;
        (0..count)
            .rev()
            .map(|i| ((value >> (i as u32 * ip_bits.part_bits as u32)) & mask) as u16)
            .collect()
    }

    /// Format a single reverse-DNS label.
    pub fn dns_part_format(&self, part: u8) -> String {
        match self {
            Family::V4 => format!("{part}"),
            Family::V6 => format!("{part:x}"),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// `2^n - 1` for `n` in `0..=128`.
pub fn ones(n: u8) -> u128 {
    if n >= 128 {
        u128::MAX
    } else {
        (1u128 << n) - 1
    }
}

/// Clear the low `n` bits of `value`.
pub fn clear_low_bits(value: u128, n: u8) -> u128 {
    value & !ones(n)
}
