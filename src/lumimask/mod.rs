mod expand;
mod ops;
mod summary;

pub use expand::{lumi_list, lumi_list_in};
pub use ops::{difference, intersection, union, MaskOp};
pub use summary::json_summary;
