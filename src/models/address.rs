//! IPv4/IPv6 address bound to a prefix.
//!
//! [`Address`] is an immutable value: every transform returns a new
//! instance. Host values are held as `u128`, wide enough for both families.

use super::family::{clear_low_bits, Family};
use super::prefix::Prefix;
use crate::error::AddressError;
use crate::output::{as_compressed_string, as_uncompressed_string};
use crate::parse;
use crate::processing::{aggregate, sum_first_found};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Upper 96 bits of an IPv4-mapped IPv6 address.
const MAPPED_MARKER: u128 = 0xffff;

/// (network, prefix length) pairs for the private IPv4 ranges.
const IPV4_PRIVATE: [(u128, u8); 3] = [(0x0a00_0000, 8), (0xac10_0000, 12), (0xc0a8_0000, 16)];
const IPV4_LOOPBACK: (u128, u8) = (0x7f00_0000, 8);
const IPV6_PRIVATE: (u128, u8) = (0xfd00 << 112, 8);

/// IP address with prefix and, for IPv4-mapped IPv6, the embedded IPv4 address.
#[derive(Debug, Clone)]
pub struct Address {
    host: u128,
    prefix: Prefix,
    mapped: Option<Box<Address>>,
}

/// Build the IPv4 shadow of an IPv6 `::ffff:a.b.c.d` address.
///
/// `::ffff:0:0/n` has no shadow.
fn mapped_shadow(host: u128, prefix: &Prefix) -> Result<Option<Box<Address>>, AddressError> {
    if prefix.family() != Family::V6 || host >> 32 != MAPPED_MARKER {
        return Ok(None);
    }
    let low = host & 0xffff_ffff;
    if low == 0 {
        return Ok(None);
    }
    let v4_bits = Family::V4.bits();
    if prefix.host_prefix() > v4_bits {
        return Err(AddressError::IncompatibleFamily(format!(
            "Mapped IPv4 address needs {} host bits, only {} available",
            prefix.host_prefix(),
            v4_bits
        )));
    }
    let v4_prefix = Prefix::new(v4_bits - prefix.host_prefix(), Family::V4)?;
    Ok(Some(Box::new(Address {
        host: low,
        prefix: v4_prefix,
        mapped: None,
    })))
}

fn in_range(host: u128, (net, num): (u128, u8), bits: u8) -> bool {
    clear_low_bits(host, bits - num) == net
}

impl Address {
    /// Create an address from its host value and prefix.
    ///
    /// IPv6 values of the form `::ffff:a.b.c.d` get their IPv4 shadow.
    pub fn from_number(host: u128, prefix: Prefix) -> Result<Address, AddressError> {
        let family = prefix.family();
        if host > family.all_ones() {
            return Err(AddressError::Range(format!(
                "Host value {host:#x} does not fit in {family}"
            )));
        }
        let mapped = mapped_shadow(host, &prefix)?;
        Ok(Address {
            host,
            prefix,
            mapped,
        })
    }

    /// IPv4 address from a 32 bit value and prefix length.
    ///
    /// # Examples
    /// ```
    /// use ipaddress::models::Address;
    /// let ip = Address::ipv4(0xac100a01, 24).unwrap();
    /// assert_eq!(ip.to_string(), "172.16.10.1/24");
    /// ```
    pub fn ipv4(host: u32, num: u8) -> Result<Address, AddressError> {
        Address::from_number(host as u128, Prefix::new(num, Family::V4)?)
    }

    /// IPv6 address from a 128 bit value and prefix length.
    pub fn ipv6(host: u128, num: u8) -> Result<Address, AddressError> {
        Address::from_number(host, Prefix::new(num, Family::V6)?)
    }

    /// Same family, new host value and prefix. The mapped shadow is rebuilt
    /// and dropped when the new prefix leaves no room for it.
    pub(crate) fn from(&self, host: u128, prefix: Prefix) -> Address {
        let host = host & prefix.family().all_ones();
        Address {
            host,
            prefix,
            mapped: mapped_shadow(host, &prefix).ok().flatten(),
        }
    }

    pub fn family(&self) -> Family {
        self.prefix.family()
    }

    pub fn host(&self) -> u128 {
        self.host
    }

    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    pub fn mapped(&self) -> Option<&Address> {
        self.mapped.as_deref()
    }

    pub fn is_ipv4(&self) -> bool {
        self.family() == Family::V4
    }

    pub fn is_ipv6(&self) -> bool {
        self.family() == Family::V6
    }

    pub fn is_same_kind(&self, other: &Address) -> bool {
        self.family() == other.family()
    }

    /// Groups of the host value, most significant first.
    pub fn parts(&self) -> Vec<u16> {
        self.family().parts(self.host)
    }

    /// Groups as zero padded hex strings.
    pub fn parts_hex_str(&self) -> Vec<String> {
        let width = (self.family().ip_bits().part_bits / 4) as usize;
        self.parts()
            .iter()
            .map(|part| format!("{part:0width$x}"))
            .collect()
    }

    /// Compressed text without the prefix.
    pub fn to_s(&self) -> String {
        as_compressed_string(self.family(), self.host)
    }

    pub fn to_s_uncompressed(&self) -> String {
        as_uncompressed_string(self.family(), self.host)
    }

    pub fn to_string_uncompressed(&self) -> String {
        format!("{}/{}", self.to_s_uncompressed(), self.prefix)
    }

    /// `::ffff:a.b.c.d` for mapped addresses, [`Address::to_s`] otherwise.
    pub fn to_s_mapped(&self) -> String {
        match self.mapped_if_marked() {
            Some(mapped) => format!("::ffff:{}", mapped.to_s()),
            None => self.to_s(),
        }
    }

    /// Mapped form with the IPv4 prefix length.
    pub fn to_string_mapped(&self) -> String {
        match self.mapped_if_marked() {
            Some(mapped) => format!("{}/{}", self.to_s_mapped(), mapped.prefix),
            None => self.to_string(),
        }
    }

    /// Host value as a zero padded binary string.
    pub fn bits(&self) -> String {
        format!("{:0width$b}", self.host, width = self.family().bits() as usize)
    }

    pub fn to_hex(&self) -> String {
        format!("{:x}", self.host)
    }

    fn mapped_if_marked(&self) -> Option<&Address> {
        if self.host >> 32 == MAPPED_MARKER {
            self.mapped.as_deref()
        } else {
            None
        }
    }

    pub fn is_mapped(&self) -> bool {
        self.mapped_if_marked().is_some()
    }

    pub fn is_unspecified(&self) -> bool {
        self.host == 0
    }

    pub fn is_loopback(&self) -> bool {
        match self.family() {
            Family::V4 => self.in_constant_range(IPV4_LOOPBACK),
            Family::V6 => self.host == 1,
        }
    }

    pub fn is_private(&self) -> bool {
        match self.family() {
            Family::V4 => IPV4_PRIVATE
                .iter()
                .any(|range| self.in_constant_range(*range)),
            Family::V6 => self.in_constant_range(IPV6_PRIVATE),
        }
    }

    fn in_constant_range(&self, range: (u128, u8)) -> bool {
        range.1 <= self.prefix.num() && in_range(self.host, range, self.family().bits())
    }

    /// IPv4 host value re-homed into the IPv6 family; IPv6 is returned as is.
    pub fn to_ipv6(&self) -> Result<Address, AddressError> {
        match self.family() {
            Family::V4 => Address::ipv6(self.host, self.prefix.num()),
            Family::V6 => Ok(self.clone()),
        }
    }

    /// Netmask as an address with the same prefix.
    pub fn netmask(&self) -> Address {
        self.from(self.prefix.netmask(), self.prefix)
    }

    /// Hostmask as an address with the same prefix.
    pub fn hostmask(&self) -> Address {
        self.from(self.prefix.hostmask(), self.prefix)
    }

    /// Address with all host bits cleared.
    pub fn network(&self) -> Address {
        self.from(
            clear_low_bits(self.host, self.prefix.host_prefix()),
            self.prefix,
        )
    }

    /// Address with all host bits set.
    pub fn broadcast(&self) -> Address {
        self.from(self.network().host + self.prefix.hostmask(), self.prefix)
    }

    pub fn is_network(&self) -> bool {
        self.prefix.num() != self.family().bits() && self.host == self.network().host
    }

    /// First usable host: the network address for IPv6, one above it for IPv4.
    pub fn first(&self) -> Address {
        let ofs = self.family().ip_bits().host_ofs;
        self.from(self.network().host.wrapping_add(ofs), self.prefix)
    }

    /// Last usable host: the broadcast address for IPv6, one below it for IPv4.
    pub fn last(&self) -> Address {
        let ofs = self.family().ip_bits().host_ofs;
        self.from(self.broadcast().host.wrapping_sub(ofs), self.prefix)
    }

    /// Iterate the usable hosts `first()..=last()`.
    pub fn hosts(&self) -> impl Iterator<Item = Address> + '_ {
        let first = self.network().host + self.family().ip_bits().host_ofs;
        let last = self
            .broadcast()
            .host
            .checked_sub(self.family().ip_bits().host_ofs);
        let range = match last {
            Some(last) if first <= last => first..=last,
            _ => 1..=0,
        };
        range.map(move |host| self.from(host, self.prefix))
    }

    /// Number of addresses in the network.
    pub fn size(&self) -> Result<u128, AddressError> {
        self.prefix.size()
    }

    /// `other` lies within this network.
    pub fn includes(&self, other: &Address) -> bool {
        self.is_same_kind(other)
            && self.prefix.num() <= other.prefix.num()
            && self.network().host == clear_low_bits(other.host, self.prefix.host_prefix())
    }

    pub fn includes_all(&self, others: &[Address]) -> bool {
        others.iter().all(|other| self.includes(other))
    }

    /// Absolute distance between two host values.
    pub fn sub(&self, other: &Address) -> u128 {
        self.host.abs_diff(other.host)
    }

    /// Aggregate of this network and `other`.
    pub fn add(&self, other: &Address) -> Vec<Address> {
        aggregate(&[self.clone(), other.clone()])
    }

    /// Address `num` above this one, same prefix.
    pub fn add_num(&self, num: u128) -> Result<Address, AddressError> {
        match self.host.checked_add(num) {
            Some(host) if host <= self.family().all_ones() => Ok(self.from(host, self.prefix)),
            _ => Err(AddressError::Range(format!(
                "{} + {num} overflows {}",
                self,
                self.family()
            ))),
        }
    }

    /// Next host, if it is still within the network.
    pub fn inc(&self) -> Option<Address> {
        let host = self.host.checked_add(1)?;
        (host <= self.last().host).then(|| self.from(host, self.prefix))
    }

    /// Previous host, if it is still within the network.
    pub fn dec(&self) -> Option<Address> {
        let host = self.host.checked_sub(1)?;
        (host >= self.first().host).then(|| self.from(host, self.prefix))
    }

    pub fn change_prefix(&self, num: u8) -> Result<Address, AddressError> {
        let prefix = self.prefix.from(num)?;
        Ok(self.from(self.host, prefix))
    }

    /// Change the prefix from a decimal length or a netmask literal.
    pub fn change_netmask(&self, netmask: &str) -> Result<Address, AddressError> {
        let num = parse::parse_netmask_to_prefix(netmask)?;
        self.change_prefix(num)
    }

    /// All networks of length `subprefix` inside this one, in order.
    pub fn subnet(&self, subprefix: u8) -> Result<Vec<Address>, AddressError> {
        let num = self.prefix.num();
        let bits = self.family().bits();
        if subprefix < num || bits < subprefix {
            return Err(AddressError::Range(format!(
                "New prefix must be between {num} and {bits}, got {subprefix}"
            )));
        }
        let too_many =
            || AddressError::Range(format!("Too many subnets: /{num} into /{subprefix}"));
        let count = 1usize
            .checked_shl((subprefix - num) as u32)
            .filter(|count| *count <= isize::MAX as usize)
            .ok_or_else(too_many)?;
        let mut networks = Vec::new();
        networks.try_reserve_exact(count).map_err(|_| too_many())?;
        let prefix = self.prefix.from(subprefix)?;
        let step = prefix.hostmask() + 1;
        let start = self.network().host;
        log::trace!("subnet({}, /{subprefix}) -> {count} networks", self);
        networks.extend((0..count as u128).map(|i| self.from(start + i * step, prefix)));
        Ok(networks)
    }

    /// Enclosing network with the shorter prefix `new_prefix`.
    pub fn supernet(&self, new_prefix: u8) -> Result<Address, AddressError> {
        if new_prefix >= self.prefix.num() {
            return Err(AddressError::Range(format!(
                "New prefix must be smaller than existing prefix: {} >= {}",
                new_prefix,
                self.prefix.num()
            )));
        }
        let prefix = self.prefix.from(new_prefix)?;
        Ok(self.from(self.host, prefix).network())
    }

    /// Divide the network into exactly `subnets` pieces.
    ///
    /// Subnets to the next power of two and merges neighbours from the end
    /// until the count matches.
    pub fn split(&self, subnets: usize) -> Result<Vec<Address>, AddressError> {
        let too_many = self
            .size()
            .map(|size| subnets as u128 >= size)
            .unwrap_or(false);
        if subnets == 0 || too_many {
            return Err(AddressError::Range(format!(
                "Value {subnets} out of range for {self}"
            )));
        }
        let extra = subnets
            .checked_next_power_of_two()
            .ok_or_else(|| AddressError::Range(format!("Value {subnets} out of range for {self}")))?
            .trailing_zeros() as u8;
        let mut networks = self.subnet(self.prefix.add(extra)?.num())?;
        while networks.len() != subnets {
            let merged = sum_first_found(&networks);
            if merged.len() == networks.len() {
                return Err(AddressError::Range(format!(
                    "Cannot split {self} into {subnets} networks"
                )));
            }
            networks = merged;
        }
        Ok(networks)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.to_s(), self.prefix)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Address, AddressError> {
        parse::parse(s)
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Address) -> bool {
        self.host == other.host && self.prefix == other.prefix
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.host.hash(state);
        self.prefix.hash(state);
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Address) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Address) -> Ordering {
        self.family()
            .cmp(&other.family())
            .then(self.host.cmp(&other.host))
            .then(self.prefix.num().cmp(&other.prefix.num()))
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse::parse(&s).map_err(|e| de::Error::custom(format!("invalid address {s}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> Address {
        parse::parse(s).unwrap_or_else(|e| panic!("parse {s}: {e}"))
    }

    #[test]
    fn test_network_and_broadcast() {
        let a = ip("172.16.10.1/24");
        assert_eq!(a.network().to_string(), "172.16.10.0/24");
        assert_eq!(a.broadcast().to_string(), "172.16.10.255/24");
        assert_eq!(a.network().network(), a.network());
        let b = ip("2001:db8::8:800:200c:417a/64");
        assert_eq!(b.network().to_string(), "2001:db8::/64");
        assert_eq!(b.broadcast().to_s(), "2001:db8::ffff:ffff:ffff:ffff");
        let all = ip("::/0");
        assert_eq!(all.broadcast().host(), u128::MAX);
    }

    #[test]
    fn test_is_network() {
        assert!(ip("172.16.10.0/24").is_network());
        assert!(!ip("172.16.10.1/24").is_network());
        assert!(!ip("172.16.10.0/32").is_network());
        assert!(ip("2001:db8::/64").is_network());
        assert!(!ip("2001:db8::/128").is_network());
    }

    #[test]
    fn test_includes() {
        let net = ip("172.16.10.0/24");
        assert!(net.includes(&ip("172.16.10.10/32")));
        assert!(net.includes(&ip("172.16.10.128/25")));
        assert!(!net.includes(&ip("172.16.11.0/24")));
        assert!(!net.includes(&ip("172.16.0.0/16")));
        assert!(!net.includes(&ip("::ac10:a01/120")));
        assert!(net.includes_all(&[ip("172.16.10.1"), ip("172.16.10.254")]));
        assert!(!net.includes_all(&[ip("172.16.10.1"), ip("172.16.11.1")]));
    }

    #[test]
    fn test_includes_same_length_means_same_network() {
        let a = ip("10.0.0.0/24");
        let b = ip("10.0.0.77/24");
        assert!(a.includes(&b));
        assert_eq!(a.network().host(), b.network().host());
    }

    #[test]
    fn test_first_last() {
        let a = ip("172.16.10.100/24");
        assert_eq!(a.first().to_s(), "172.16.10.1");
        assert_eq!(a.last().to_s(), "172.16.10.254");
        let b = ip("2001:db8::1/64");
        assert_eq!(b.first().to_s(), "2001:db8::");
        assert_eq!(b.last().to_s(), "2001:db8::ffff:ffff:ffff:ffff");
    }

    #[test]
    fn test_hosts() {
        let hosts: Vec<String> = ip("10.0.0.0/30").hosts().map(|h| h.to_s()).collect();
        assert_eq!(hosts, vec!["10.0.0.1", "10.0.0.2"]);
        assert_eq!(ip("10.0.0.1/32").hosts().count(), 0);
        assert_eq!(ip("2001:db8::/126").hosts().count(), 4);
    }

    #[test]
    fn test_change_prefix_and_netmask() {
        let a = ip("172.16.10.1/24");
        assert_eq!(a.change_prefix(16).unwrap().to_string(), "172.16.10.1/16");
        assert!(matches!(a.change_prefix(33), Err(AddressError::Range(_))));
        assert_eq!(a.change_netmask("255.255.0.0").unwrap().prefix().num(), 16);
        assert_eq!(a.change_netmask("30").unwrap().prefix().num(), 30);
        assert!(matches!(
            a.change_netmask("255.0.255.0"),
            Err(AddressError::NotANetmask(_))
        ));
    }

    #[test]
    fn test_subnet() {
        let net = ip("172.16.10.0/24");
        let subnets: Vec<String> = net.subnet(26).unwrap().iter().map(|s| s.to_string()).collect();
        assert_eq!(
            subnets,
            vec!["172.16.10.0/26", "172.16.10.64/26", "172.16.10.128/26", "172.16.10.192/26"]
        );
        assert_eq!(net.subnet(24).unwrap(), vec![net.clone()]);
        assert!(matches!(net.subnet(23), Err(AddressError::Range(_))));
        assert!(net.subnet(33).is_err());
        let v6: Vec<String> = ip("2001:db8::/32").subnet(34).unwrap().iter().map(|s| s.to_string()).collect();
        assert_eq!(
            v6,
            vec!["2001:db8::/34", "2001:db8:4000::/34", "2001:db8:8000::/34", "2001:db8:c000::/34"]
        );
    }

    #[test]
    fn test_supernet() {
        let net = ip("172.16.10.0/24");
        assert_eq!(net.supernet(23).unwrap().to_string(), "172.16.10.0/23");
        assert_eq!(net.supernet(22).unwrap().to_string(), "172.16.8.0/22");
        assert_eq!(net.supernet(0).unwrap().to_string(), "0.0.0.0/0");
        assert!(matches!(net.supernet(24), Err(AddressError::Range(_))));
        assert!(net.supernet(25).is_err());
    }

    #[test]
    fn test_split() {
        let net = ip("172.16.10.0/24");
        let split = |n: usize| -> Vec<String> {
            net.split(n).unwrap().iter().map(|s| s.to_string()).collect()
        };
        assert_eq!(split(1), vec!["172.16.10.0/24"]);
        assert_eq!(split(2), vec!["172.16.10.0/25", "172.16.10.128/25"]);
        assert_eq!(split(3), vec!["172.16.10.0/26", "172.16.10.64/26", "172.16.10.128/25"]);
        assert_eq!(
            split(5),
            vec![
                "172.16.10.0/27",
                "172.16.10.32/27",
                "172.16.10.64/27",
                "172.16.10.96/27",
                "172.16.10.128/25"
            ]
        );
        assert_eq!(
            split(7),
            vec![
                "172.16.10.0/27",
                "172.16.10.32/27",
                "172.16.10.64/27",
                "172.16.10.96/27",
                "172.16.10.128/27",
                "172.16.10.160/27",
                "172.16.10.192/26"
            ]
        );
        assert_eq!(split(8).len(), 8);
        assert!(matches!(net.split(0), Err(AddressError::Range(_))));
        assert!(net.split(256).is_err());
        assert_eq!(net.split(255).unwrap().len(), 255);
    }

    #[test]
    fn test_split_count_overflow() {
        let net = ip("8000::/1");
        assert!(matches!(net.split(usize::MAX), Err(AddressError::Range(_))));
        assert!(matches!(net.split(usize::MAX / 2 + 2), Err(AddressError::Range(_))));
    }

    #[test]
    fn test_subnet_too_many() {
        let all = ip("::/0");
        assert!(matches!(all.subnet(60), Err(AddressError::Range(_))));
        assert!(matches!(all.subnet(64), Err(AddressError::Range(_))));
        assert!(matches!(all.subnet(128), Err(AddressError::Range(_))));
        assert_eq!(all.subnet(2).unwrap().len(), 4);
    }

    #[test]
    fn test_mapped() {
        let a = ip("::ffff:172.16.10.1");
        assert!(a.is_mapped());
        assert_eq!(a.prefix().num(), 128);
        assert_eq!(a.mapped().unwrap().to_string(), "172.16.10.1/32");
        assert_eq!(a.to_s_mapped(), "::ffff:172.16.10.1");
        assert_eq!(a.to_string_mapped(), "::ffff:172.16.10.1/32");
        let b = ip("::ffff:0:0/96");
        assert!(!b.is_mapped());
        assert!(b.mapped().is_none());
        assert!(matches!(
            Address::ipv6(0xffff_0a01_0101, 64),
            Err(AddressError::IncompatibleFamily(_))
        ));
        let c = Address::ipv6(0xffff_0a01_0101, 120).unwrap();
        assert_eq!(c.mapped().unwrap().to_string(), "10.1.1.1/24");
        assert_eq!(c.to_string_mapped(), "::ffff:10.1.1.1/24");
        assert_eq!(c.network().mapped().unwrap().to_string(), "10.1.1.0/24");
        assert!(c.change_prefix(64).unwrap().mapped().is_none());
    }

    #[test]
    fn test_ordering() {
        let mut list = vec![
            ip("2001:db8::/32"),
            ip("10.0.0.0/16"),
            ip("10.0.0.0/8"),
            ip("9.0.0.0/8"),
        ];
        list.sort();
        let sorted: Vec<String> = list.iter().map(|a| a.to_string()).collect();
        assert_eq!(sorted, vec!["9.0.0.0/8", "10.0.0.0/8", "10.0.0.0/16", "2001:db8::/32"]);
        assert!(ip("10.1.1.1/8") < ip("10.1.1.1/16"));
    }

    #[test]
    fn test_predicates() {
        assert!(ip("192.168.10.50/24").is_private());
        assert!(ip("172.16.10.50/14").is_private());
        assert!(ip("10.0.0.0/8").is_private());
        assert!(!ip("192.168.10.50/12").is_private());
        assert!(!ip("10.0.0.0/7").is_private());
        assert!(!ip("172.32.0.0/12").is_private());
        assert!(!ip("3.3.3.3").is_private());
        assert!(ip("fd00::1/64").is_private());
        assert!(!ip("2001:db8::1/64").is_private());
        assert!(ip("127.0.0.1").is_loopback());
        assert!(ip("::1").is_loopback());
        assert!(!ip("::2").is_loopback());
        assert!(ip("::").is_unspecified());
        assert!(ip("0.0.0.0/0").is_unspecified());
    }

    #[test]
    fn test_text_forms() {
        let a = ip("172.16.10.1/24");
        assert_eq!(a.bits(), "10101100000100000000101000000001");
        assert_eq!(a.to_hex(), "ac100a01");
        assert_eq!(a.netmask().to_s(), "255.255.255.0");
        assert_eq!(a.hostmask().to_s(), "0.0.0.255");
        assert_eq!(a.parts_hex_str(), vec!["ac", "10", "0a", "01"]);
        let b = ip("2001:db8::8:800:200c:417a/64");
        assert_eq!(b.to_string_uncompressed(), "2001:0db8:0000:0000:0008:0800:200c:417a/64");
        assert_eq!(b.parts(), vec![8193, 3512, 0, 0, 8, 2048, 8204, 16762]);
    }

    #[test]
    fn test_arithmetic_helpers() {
        let a = ip("10.0.0.1/24");
        let b = ip("10.0.0.9/24");
        assert_eq!(a.sub(&b), 8);
        assert_eq!(b.sub(&a), 8);
        assert_eq!(a.add_num(9).unwrap().to_s(), "10.0.0.10");
        assert!(ip("255.255.255.255/32").add_num(1).is_err());
        assert_eq!(a.inc().unwrap().to_s(), "10.0.0.2");
        assert!(ip("10.0.0.254/24").inc().is_none());
        assert_eq!(b.dec().unwrap().to_s(), "10.0.0.8");
        assert!(a.dec().is_none());
        assert_eq!(a.size().unwrap(), 256);
        let sum: Vec<String> = ip("10.0.0.0/24").add(&ip("10.0.1.0/24")).iter().map(|s| s.to_string()).collect();
        assert_eq!(sum, vec!["10.0.0.0/23"]);
    }

    #[test]
    fn test_to_ipv6() {
        let a = ip("172.16.10.1/24").to_ipv6().unwrap();
        assert!(a.is_ipv6());
        assert_eq!(a.to_string(), "::ac10:a01/24");
        assert!(a.mapped().is_none());
        let b = ip("2001:db8::1/64");
        assert_eq!(b.to_ipv6().unwrap(), b);
    }

    #[test]
    fn test_serde_round_trip() {
        let a = ip("172.16.10.1/24");
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "\"172.16.10.1/24\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
        assert!(serde_json::from_str::<Address>("\"10.0.0.300/24\"").is_err());
    }

    #[test]
    fn test_from_number_out_of_range() {
        assert!(Address::from_number(1 << 32, Prefix::new(32, Family::V4).unwrap()).is_err());
        assert!(Address::ipv4(u32::MAX, 32).is_ok());
    }
}
