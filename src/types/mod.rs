use std::collections::{HashMap, HashSet};

pub mod range;
pub mod source;

pub use range::LumiRange;
pub use source::{MaskSource, RunBound, RunBounds};

pub type Run = u64;
pub type Lumi = u64;
pub type Pair = (Run, Lumi);

pub type PairSet = HashSet<Pair>;
pub type RangeList = Vec<LumiRange>;

// Keys are decimal run numbers, as in the JSON encoding
pub type LumiMask = HashMap<String, RangeList>;
