//! Network aggregation (summarization).
//!
//! Merges a list of networks into the smallest list of networks that
//! covers exactly the same addresses.

use crate::error::AddressError;
use crate::models::Address;
use crate::parse;

/// Project a cursor that may run past either end onto `0..len`.
fn pos_to_idx(pos: isize, len: usize) -> usize {
    let len = len as isize;
    (((pos % len) + len) % len) as usize
}

/// Copy of `net` with a prefix one bit shorter, `None` at /0.
fn widen(net: &Address) -> Option<Address> {
    let num = net.prefix().num().checked_sub(1)?;
    net.change_prefix(num).ok()
}

/// Aggregate `networks` into the minimal ordered list of covering networks.
///
/// # Examples
/// ```
/// use ipaddress::parse;
/// use ipaddress::processing::aggregate;
/// let nets = vec![
///     parse("172.16.10.0/24").unwrap(),
///     parse("172.16.11.0/24").unwrap(),
/// ];
/// assert_eq!(aggregate(&nets)[0].to_string(), "172.16.10.0/23");
/// ```
pub fn aggregate(networks: &[Address]) -> Vec<Address> {
    aggregate_steps(networks).0
}

/// [`aggregate`] plus the number of pair comparisons it took.
pub(crate) fn aggregate_steps(networks: &[Address]) -> (Vec<Address>, usize) {
    match networks {
        [] => return (Vec::new(), 0),
        [single] => return (vec![single.network()], 0),
        _ => {}
    }
    let mut stack: Vec<Address> = networks.iter().map(Address::network).collect();
    stack.sort();

    let mut steps = 0;
    let mut pos: isize = 0;
    loop {
        if pos < 0 {
            pos = 0;
        }
        let len = stack.len();
        if pos >= len as isize {
            break;
        }
        let first = pos_to_idx(pos, len);
        pos += 1;
        if pos >= len as isize {
            break;
        }
        let second = pos_to_idx(pos, len);
        pos += 1;
        steps += 1;

        if stack[first].includes(&stack[second]) {
            log::trace!("aggregate: {} includes {}", stack[first], stack[second]);
            pos -= 2;
            stack.remove(pos_to_idx(pos + 1, len));
            continue;
        }
        let merged = widen(&stack[first]).filter(|wide| {
            wide.prefix().num() + 1 == stack[second].prefix().num() && wide.includes(&stack[second])
        });
        match merged {
            Some(wide) => {
                log::trace!(
                    "aggregate: {} + {} -> {}",
                    stack[first],
                    stack[second],
                    wide
                );
                pos -= 2;
                let idx = pos_to_idx(pos, len);
                stack[idx] = wide;
                stack.remove(pos_to_idx(pos + 1, len));
                // step back so the merged network meets its left neighbour
                pos -= 1;
            }
            None => pos -= 1,
        }
    }
    log::debug!(
        "aggregate: {} networks -> {} in {} steps",
        networks.len(),
        stack.len(),
        steps
    );
    (stack.iter().map(Address::network).collect(), steps)
}

/// Alias of [`aggregate`].
pub fn summarize(networks: &[Address]) -> Vec<Address> {
    aggregate(networks)
}

/// Parse every literal, then aggregate. Fails on the first bad literal.
pub fn summarize_str<S: AsRef<str>>(networks: &[S]) -> Result<Vec<Address>, AddressError> {
    let parsed = networks
        .iter()
        .map(|s| parse::parse(s.as_ref()))
        .collect::<Result<Vec<Address>, AddressError>>()?;
    Ok(aggregate(&parsed))
}

/// Merge the last neighbouring pair that aggregates to a single network.
///
/// Returns the input unchanged when no pair merges.
pub fn sum_first_found(networks: &[Address]) -> Vec<Address> {
    let mut dup = networks.to_vec();
    if dup.len() < 2 {
        return dup;
    }
    for i in (0..dup.len() - 1).rev() {
        let mut merged = aggregate(&[dup[i].clone(), dup[i + 1].clone()]);
        if merged.len() == 1 {
            dup[i] = merged.remove(0);
            dup.remove(i + 1);
            break;
        }
    }
    dup
}
