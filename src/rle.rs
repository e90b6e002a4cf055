//! Run-length encoding of address groups.
//!
//! Used by the IPv6 compressed text form to find the zero run that gets
//! replaced by `::`.

use std::collections::HashMap;

/// One run of equal consecutive groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rle {
    /// Group value repeated in this run.
    pub part: u16,
    /// Ordinal of this run within the encoded output.
    pub pos: usize,
    /// Number of consecutive groups.
    pub cnt: usize,
    /// No other run of the same `part` is strictly longer.
    pub max: bool,
}

/// Collects closed runs and keeps the `max` flags up to date.
#[derive(Default)]
struct Runs {
    ret: Vec<Rle>,
    // part -> indexes into `ret` of runs with that part
    by_part: HashMap<u16, Vec<usize>>,
}

impl Runs {
    fn close(&mut self, mut last: Rle) {
        let seen = self.by_part.entry(last.part).or_default();
        for &idx in seen.iter() {
            let prev = &mut self.ret[idx];
            if prev.cnt > last.cnt {
                last.max = false;
            } else if prev.cnt < last.cnt {
                prev.max = false;
            }
        }
        last.pos = self.ret.len();
        seen.push(self.ret.len());
        self.ret.push(last);
    }
}

/// Encode `parts` into runs.
///
/// # Examples
/// ```
/// use ipaddress::rle::{code, Rle};
/// let runs = code(&[0x2001, 0, 0]);
/// assert_eq!(runs[1], Rle { part: 0, pos: 1, cnt: 2, max: true });
/// ```
pub fn code(parts: &[u16]) -> Vec<Rle> {
    let mut runs = Runs::default();
    let mut current: Option<Rle> = None;
    for &part in parts {
        match current.as_mut() {
            Some(run) if run.part == part => run.cnt += 1,
            _ => {
                if let Some(run) = current.take() {
                    runs.close(run);
                }
                current = Some(Rle {
                    part,
                    pos: 0,
                    cnt: 1,
                    max: true,
                });
            }
        }
    }
    if let Some(run) = current {
        runs.close(run);
    }
    log::trace!("rle::code({:?}) -> {} runs", parts, runs.ret.len());
    runs.ret
}
