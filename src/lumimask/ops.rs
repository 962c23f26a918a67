use crate::error::Result;
use crate::types::{LumiMask, PairSet, RunBounds};

use super::{json_summary, lumi_list};

pub fn union(first: &PairSet, second: &PairSet) -> PairSet {
    first.union(second).copied().collect()
}

pub fn intersection(first: &PairSet, second: &PairSet) -> PairSet {
    first.intersection(second).copied().collect()
}

pub fn difference(first: &PairSet, second: &PairSet) -> PairSet {
    first.difference(second).copied().collect()
}

/// Binary operation on two lumimasks, evaluated on their expanded pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskOp {
    Union,
    Intersection,
    Difference,
}

impl MaskOp {
    pub fn apply_pairs(self, first: &PairSet, second: &PairSet) -> PairSet {
        match self {
            MaskOp::Union => union(first, second),
            MaskOp::Intersection => intersection(first, second),
            MaskOp::Difference => difference(first, second),
        }
    }

    pub fn apply(self, first: &LumiMask, second: &LumiMask) -> Result<LumiMask> {
        let first = lumi_list(first, RunBounds::unbounded())?;
        let second = lumi_list(second, RunBounds::unbounded())?;
        Ok(json_summary(self.apply_pairs(&first, &second)))
    }
}
