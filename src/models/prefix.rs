//! Subnet prefix bound to an address family.

use super::family::{ones, Family};
use crate::error::AddressError;
use crate::output::as_compressed_string;
use std::fmt;

/// A prefix length with its cached netmask.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Prefix {
    // field order drives the derived ordering: family first, then length
    family: Family,
    num: u8,
    netmask: u128,
}

/// Netmask with `num` contiguous set bits at the top of a `bits` wide value.
pub fn new_netmask(num: u8, bits: u8) -> u128 {
    ones(bits) & !ones(bits - num)
}

impl Prefix {
    /// Create a prefix of length `num` for `family`.
    ///
    /// # Examples
    /// ```
    /// use ipaddress::models::{Family, Prefix};
    /// assert_eq!(Prefix::new(24, Family::V4).unwrap().netmask(), 0xFFFFFF00);
    /// assert!(Prefix::new(33, Family::V4).is_err());
    /// ```
    pub fn new(num: u8, family: Family) -> Result<Prefix, AddressError> {
        let bits = family.bits();
        if num > bits {
            return Err(AddressError::Range(format!(
                "Prefix must be in range 0..={bits}, got {num}"
            )));
        }
        Ok(Prefix {
            family,
            num,
            netmask: new_netmask(num, bits),
        })
    }

    /// Build a prefix of the same family with another length.
    pub fn from(&self, num: u8) -> Result<Prefix, AddressError> {
        Prefix::new(num, self.family)
    }

    pub fn num(&self) -> u8 {
        self.num
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn netmask(&self) -> u128 {
        self.netmask
    }

    /// The bits that can change within the hosts.
    pub fn hostmask(&self) -> u128 {
        ones(self.host_prefix())
    }

    /// Length of the host portion.
    pub fn host_prefix(&self) -> u8 {
        self.family.bits() - self.num
    }

    /// Number of addresses covered, `2^host_prefix`.
    pub fn size(&self) -> Result<u128, AddressError> {
        1u128.checked_shl(self.host_prefix() as u32).ok_or_else(|| {
            AddressError::Range(format!("Size of /{} does not fit in 128 bits", self.num))
        })
    }

    pub fn add(&self, other: u8) -> Result<Prefix, AddressError> {
        match self.num.checked_add(other) {
            Some(num) if num <= self.family.bits() => self.from(num),
            _ => Err(AddressError::Range(format!(
                "Prefix {} + {} is out of range 0..={}",
                self.num,
                other,
                self.family.bits()
            ))),
        }
    }

    pub fn sub(&self, other: u8) -> Result<Prefix, AddressError> {
        match self.num.checked_sub(other) {
            Some(num) => self.from(num),
            None => Err(AddressError::Range(format!(
                "Prefix {} - {} is out of range 0..={}",
                self.num,
                other,
                self.family.bits()
            ))),
        }
    }

    pub fn add_prefix(&self, other: &Prefix) -> Result<Prefix, AddressError> {
        self.add(other.num)
    }

    pub fn sub_prefix(&self, other: &Prefix) -> Result<Prefix, AddressError> {
        self.sub(other.num)
    }

    /// Netmask rendered in the family's compressed text form.
    pub fn to_ip_str(&self) -> String {
        as_compressed_string(self.family, self.netmask)
    }

    /// Netmask as a zero padded binary string.
    pub fn bits(&self) -> String {
        format!("{:0width$b}", self.netmask, width = self.family.bits() as usize)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_netmask_v4() {
        let cases = [
            (0, 0x0000_0000u128),
            (8, 0xff00_0000),
            (16, 0xffff_0000),
            (24, 0xffff_ff00),
            (30, 0xffff_fffc),
            (32, 0xffff_ffff),
        ];
        for (num, mask) in cases {
            let prefix = Prefix::new(num, Family::V4).unwrap();
            assert_eq!(prefix.netmask(), mask, "netmask of /{num}");
        }
    }

    #[test]
    fn test_netmask_v6() {
        let prefix = Prefix::new(64, Family::V6).unwrap();
        assert_eq!(prefix.netmask(), 0xffff_ffff_ffff_ffff_0000_0000_0000_0000);
        assert_eq!(Prefix::new(128, Family::V6).unwrap().netmask(), u128::MAX);
        assert_eq!(Prefix::new(0, Family::V6).unwrap().netmask(), 0);
    }

    #[test]
    fn test_new_out_of_range() {
        assert!(matches!(
            Prefix::new(33, Family::V4),
            Err(AddressError::Range(_))
        ));
        assert!(Prefix::new(129, Family::V6).is_err());
        assert!(Prefix::new(128, Family::V6).is_ok());
    }

    #[test]
    fn test_to_ip_str() {
        assert_eq!(Prefix::new(24, Family::V4).unwrap().to_ip_str(), "255.255.255.0");
        assert_eq!(Prefix::new(8, Family::V4).unwrap().to_ip_str(), "255.0.0.0");
        assert_eq!(Prefix::new(64, Family::V6).unwrap().to_ip_str(), "ffff:ffff:ffff:ffff::");
    }

    #[test]
    fn test_hostmask_and_host_prefix() {
        let prefix = Prefix::new(24, Family::V4).unwrap();
        assert_eq!(prefix.hostmask(), 0xff);
        assert_eq!(prefix.host_prefix(), 8);
        let prefix = Prefix::new(96, Family::V6).unwrap();
        assert_eq!(prefix.host_prefix(), 32);
    }

    #[test]
    fn test_size() {
        assert_eq!(Prefix::new(24, Family::V4).unwrap().size().unwrap(), 256);
        assert_eq!(Prefix::new(0, Family::V4).unwrap().size().unwrap(), 1 << 32);
        assert_eq!(Prefix::new(1, Family::V6).unwrap().size().unwrap(), 1 << 127);
        assert!(Prefix::new(0, Family::V6).unwrap().size().is_err());
    }

    #[test]
    fn test_add_sub() {
        let prefix = Prefix::new(24, Family::V4).unwrap();
        assert_eq!(prefix.add(8).unwrap().num(), 32);
        assert_eq!(prefix.sub(24).unwrap().num(), 0);
        let err = prefix.add(9).unwrap_err();
        assert_eq!(err.to_string(), "Value out of range: Prefix 24 + 9 is out of range 0..=32");
        assert!(prefix.sub(25).is_err());
        let other = Prefix::new(4, Family::V4).unwrap();
        assert_eq!(prefix.add_prefix(&other).unwrap().num(), 28);
        assert_eq!(prefix.sub_prefix(&other).unwrap().num(), 20);
    }

    #[test]
    fn test_bits_and_display() {
        let prefix = Prefix::new(24, Family::V4).unwrap();
        assert_eq!(prefix.bits(), "11111111111111111111111100000000");
        assert_eq!(prefix.to_string(), "24");
    }

    #[test]
    fn test_ordering() {
        let a = Prefix::new(24, Family::V4).unwrap();
        let b = Prefix::new(25, Family::V4).unwrap();
        let c = Prefix::new(1, Family::V6).unwrap();
        assert!(a < b);
        assert!(b < c);
    }
}
