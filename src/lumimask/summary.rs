use itertools::Itertools;

use crate::types::{LumiMask, Pair};
use crate::util::iterator::{CollapseRangesExt, GroupByRunExt};

/// Builds the compact run -> lumi ranges mapping of a collection of pairs.
///
/// Input order is irrelevant. Duplicated pairs are kept through sorting and
/// therefore split the range they fall in (see [`CollapseRangesExt`]).
pub fn json_summary(pairs: impl IntoIterator<Item = Pair>) -> LumiMask {
    let sorted = pairs.into_iter().sorted_unstable().collect_vec();
    let mut mask = LumiMask::new();
    if sorted.is_empty() {
        return mask;
    }
    for (run, lumis) in sorted.into_iter().group_by_run() {
        mask.insert(run.to_string(), lumis.into_iter().collapse_ranges().collect());
    }
    mask
}
