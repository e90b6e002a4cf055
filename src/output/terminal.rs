//! Terminal output for the command-line front end.
//!
//! Networks print one per line, `info` prints a labelled block per address.
//! Both switch to pretty JSON on request.

use crate::models::{Address, Family};
use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;

/// Everything `info` reports about one address.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AddressInfo {
    pub address: Address,
    pub family: Family,
    pub uncompressed: String,
    pub network: Address,
    pub broadcast: Address,
    pub netmask: String,
    pub first: String,
    pub last: String,
    /// `None` when the count does not fit in 128 bits (`::/0`).
    pub size: Option<u128>,
    pub mapped: Option<Address>,
    pub private: bool,
    pub loopback: bool,
    pub dns_reverse: String,
}

impl AddressInfo {
    pub fn new(addr: &Address) -> AddressInfo {
        AddressInfo {
            address: addr.clone(),
            family: addr.family(),
            uncompressed: addr.to_s_uncompressed(),
            network: addr.network(),
            broadcast: addr.broadcast(),
            netmask: addr.prefix().to_ip_str(),
            first: addr.first().to_s(),
            last: addr.last().to_s(),
            size: addr.size().ok(),
            mapped: addr.mapped().cloned(),
            private: addr.is_private(),
            loopback: addr.is_loopback(),
            dns_reverse: addr.dns_reverse(),
        }
    }

    fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("address", self.address.to_string()),
            ("family", self.family.to_string()),
            ("uncompressed", self.uncompressed.clone()),
            ("network", self.network.to_string()),
            ("broadcast", self.broadcast.to_string()),
            ("netmask", self.netmask.clone()),
            ("first", self.first.clone()),
            ("last", self.last.clone()),
            (
                "size",
                self.size
                    .map(|size| size.to_string())
                    .unwrap_or_else(|| "2^128".to_string()),
            ),
        ];
        if let Some(mapped) = &self.mapped {
            rows.push(("mapped", mapped.to_string()));
        }
        rows.push(("private", self.private.to_string()));
        rows.push(("loopback", self.loopback.to_string()));
        rows.push(("dns_reverse", self.dns_reverse.clone()));
        rows
    }
}

/// Format a label right-aligned to `width`, followed by a colon.
///
/// # Arguments
/// * `label` - The label to format
/// * `width` - The minimum width of the label
///
/// # Returns
/// The padded label with a trailing colon
pub fn format_field<T: ToString>(label: T, width: usize) -> String {
    let label = label.to_string();
    format!("{label:>width$}:")
}

/// One network per line, or a JSON array of network strings.
pub fn format_networks(networks: &[Address], json: bool) -> serde_json::Result<String> {
    if json {
        return serde_json::to_string_pretty(networks);
    }
    Ok(networks.iter().map(|net| net.to_string().green().to_string()).join("\n"))
}

/// Labelled blocks separated by a blank line, or a JSON array of objects.
pub fn format_info(infos: &[AddressInfo], json: bool) -> serde_json::Result<String> {
    if json {
        return serde_json::to_string_pretty(infos);
    }
    Ok(infos
        .iter()
        .map(|info| {
            info.rows()
                .into_iter()
                .map(|(label, value)| format!("{} {value}", format_field(label, 12).bold()))
                .join("\n")
        })
        .join("\n\n"))
}
