//! Reverse DNS names for addresses and networks.

use crate::error::AddressError;
use crate::models::Address;
use itertools::Itertools;

impl Address {
    /// Host value split into reverse-DNS labels, least significant first.
    pub fn dns_parts(&self) -> Vec<u8> {
        let ip_bits = self.family().ip_bits();
        let mask = (1u128 << ip_bits.dns_bits) - 1;
        (0..ip_bits.bits / ip_bits.dns_bits)
            .map(|i| ((self.host() >> (i as u32 * ip_bits.dns_bits as u32)) & mask) as u8)
            .collect()
    }

    /// Reverse zone name, skipping the labels covered by host bits.
    ///
    /// # Examples
    /// ```
    /// use ipaddress::parse;
    /// let ip = parse("172.16.10.1/24").unwrap();
    /// assert_eq!(ip.dns_reverse(), "10.16.172.in-addr.arpa");
    /// ```
    pub fn dns_reverse(&self) -> String {
        let family = self.family();
        let ip_bits = family.ip_bits();
        let dns_bits = ip_bits.dns_bits;
        let skip = self.prefix().host_prefix().div_ceil(dns_bits) as usize;
        let labels = self
            .dns_parts()
            .into_iter()
            .skip(skip)
            .map(|part| family.dns_part_format(part))
            .join(".");
        if labels.is_empty() {
            ip_bits.rev_domain.to_string()
        } else {
            format!("{labels}.{}", ip_bits.rev_domain)
        }
    }

    /// The network cut on reverse-DNS label boundaries.
    ///
    /// A /23 yields its two /24 halves, a /24 yields itself.
    pub fn dns_networks(&self) -> Result<Vec<Address>, AddressError> {
        let ip_bits = self.family().ip_bits();
        let dns_bits = ip_bits.dns_bits;
        let next_bit_mask = ip_bits.bits - (self.prefix().host_prefix() / dns_bits) * dns_bits;
        if next_bit_mask == 0 {
            return Ok(vec![self.network()]);
        }
        let prefix = self.prefix().from(next_bit_mask)?;
        let step = 1u128 << (ip_bits.bits - next_bit_mask);
        let last = self.broadcast().host();
        let mut host = self.network().host();
        let mut ret = Vec::new();
        loop {
            ret.push(Address::from_number(host, prefix)?);
            match host.checked_add(step) {
                Some(next) if next <= last => host = next,
                _ => break,
            }
        }
        log::trace!("dns_networks({self}) -> {} networks", ret.len());
        Ok(ret)
    }

    /// [`Address::dns_reverse`] of every network in [`Address::dns_networks`].
    pub fn dns_rev_domains(&self) -> Result<Vec<String>, AddressError> {
        Ok(self
            .dns_networks()?
            .iter()
            .map(Address::dns_reverse)
            .collect())
    }
}
