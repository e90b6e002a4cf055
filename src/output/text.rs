//! Text forms of host values.

use crate::models::Family;
use crate::rle;
use itertools::Itertools;

/// Compressed text: dotted decimal for IPv4, `::` elided hex for IPv6.
pub fn as_compressed_string(family: Family, value: u128) -> String {
    match family {
        Family::V4 => ipv4_as_string(value),
        Family::V6 => ipv6_as_compressed(value),
    }
}

/// Uncompressed text: dotted decimal for IPv4, zero padded hex groups for IPv6.
pub fn as_uncompressed_string(family: Family, value: u128) -> String {
    match family {
        Family::V4 => ipv4_as_string(value),
        Family::V6 => ipv6_as_uncompressed(value),
    }
}

fn ipv4_as_string(value: u128) -> String {
    Family::V4.parts(value).iter().join(".")
}

fn ipv6_as_uncompressed(value: u128) -> String {
    Family::V6
        .parts(value)
        .iter()
        .map(|part| format!("{part:04x}"))
        .join(":")
}

/// The first zero run flagged as longest becomes `::`, once. Every other
/// group, including later zero runs, is written as plain hex.
fn ipv6_as_compressed(value: u128) -> String {
    let runs = rle::code(&Family::V6.parts(value));
    let mut ret = String::new();
    let mut colon = "";
    let mut done = false;
    for run in &runs {
        if run.part == 0 && run.max && !done {
            ret.push_str("::");
            colon = "";
            done = true;
            continue;
        }
        for _ in 0..run.cnt {
            ret.push_str(colon);
            ret.push_str(&format!("{:x}", run.part));
            colon = ":";
        }
    }
    ret
}
