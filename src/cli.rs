//! Command-line front end.
//!
//! `ipaddress [summarize|split N|info] [CIDR...]`. Without CIDR arguments
//! the literals are read from stdin, one per line; blank lines and `#`
//! comments are skipped.

use crate::models::Address;
use crate::output::{format_info, format_networks, AddressInfo};
use crate::parse;
use crate::processing::summarize_str;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::BufRead;

/// IPv4/IPv6 prefix arithmetic and network summarization
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Aggregate networks into the smallest covering list
    Summarize {
        /// Networks in CIDR notation
        cidrs: Vec<String>,
    },

    /// Split each network into COUNT pieces
    Split {
        /// Number of pieces
        count: usize,

        /// Networks in CIDR notation
        cidrs: Vec<String>,
    },

    /// Show network, broadcast, netmask and reverse DNS of each address
    Info {
        /// Addresses in CIDR notation
        cidrs: Vec<String>,
    },
}

/// The CIDR arguments, or the literals read from `input` when there are none.
pub fn collect_cidrs<R: BufRead>(args: &[String], input: R) -> std::io::Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }
    let mut cidrs = Vec::new();
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        cidrs.push(line.to_string());
    }
    log::debug!("read {} literals from input", cidrs.len());
    Ok(cidrs)
}

/// Run one command and return what should be printed.
pub fn run<R: BufRead>(cli: &Cli, input: R) -> Result<String, Box<dyn Error>> {
    match &cli.command {
        Command::Summarize { cidrs } => {
            let cidrs = collect_cidrs(cidrs, input)?;
            log::info!("#Start summarize() of {} networks", cidrs.len());
            let networks = summarize_str(&cidrs)?;
            log::info!("# Summarized to {} networks", networks.len());
            Ok(format_networks(&networks, cli.json)?)
        }
        Command::Split { count, cidrs } => {
            let mut networks: Vec<Address> = Vec::new();
            for cidr in collect_cidrs(cidrs, input)? {
                let network = parse(&cidr)?;
                log::info!("#Start split() of {network} into {count}");
                networks.extend(network.split(*count)?);
            }
            Ok(format_networks(&networks, cli.json)?)
        }
        Command::Info { cidrs } => {
            let infos = collect_cidrs(cidrs, input)?
                .iter()
                .map(|cidr| parse(cidr).map(|addr| AddressInfo::new(&addr)))
                .collect::<Result<Vec<AddressInfo>, _>>()?;
            Ok(format_info(&infos, cli.json)?)
        }
    }
}
