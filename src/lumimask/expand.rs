use tracing::debug;

use crate::error::{LumiError, Result};
use crate::types::{LumiMask, PairSet, Run, RunBound, RunBounds};

/// Expands a lumimask into the set of `(run, lumi)` pairs it covers,
/// keeping only runs within `bounds`.
///
/// A range with `start > end` covers nothing and is skipped.
pub fn lumi_list(mask: &LumiMask, bounds: RunBounds) -> Result<PairSet> {
    let mut output = PairSet::new();
    for (key, ranges) in mask {
        let run: Run = key.parse().map_err(|source| LumiError::InvalidRun {
            key: key.clone(),
            source,
        })?;
        if !bounds.contains(run) {
            continue;
        }
        for range in ranges {
            if range.start() > range.end() {
                debug!("Skipping inverted range {} of run {}", range, run);
            }
            output.extend(range.lumis().map(|lumi| (run, lumi)));
        }
    }
    Ok(output)
}

pub fn lumi_list_in(
    mask: &LumiMask,
    first: Option<RunBound>,
    last: Option<RunBound>,
) -> Result<PairSet> {
    lumi_list(mask, RunBounds::new(first, last))
}
