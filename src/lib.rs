pub mod error;
pub mod lumimask;
pub mod storage;
pub mod types;
pub mod util;

pub use error::{LumiError, Result};
pub use lumimask::{json_summary, lumi_list};
pub use storage::lumi_list_from_file;
pub use types::{LumiMask, LumiRange, Pair, PairSet, RunBounds};
