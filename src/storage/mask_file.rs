use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use camino::Utf8Path as Path;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::error::{LumiError, Result};
use crate::lumimask::lumi_list;
use crate::types::{LumiMask, MaskSource, PairSet, Run};

#[instrument(level = "debug")]
pub fn load_lumi_mask(path: &Path) -> Result<LumiMask> {
    let file = File::open(path).map_err(|source| LumiError::Io {
        path: path.to_owned(),
        source,
    })?;
    let mask: LumiMask =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| LumiError::Json {
            path: path.to_owned(),
            source,
        })?;
    debug!("Loaded {} runs from '{}'", mask.len(), path);
    Ok(mask)
}

pub fn expand_source(source: &MaskSource) -> Result<PairSet> {
    let mask = load_lumi_mask(&source.path)?;
    lumi_list(&mask, source.bounds)
}

/// Reads the lumimask referenced by `source` (`path` or `path:first:last`)
/// and expands it into pairs, keeping runs within the given bounds.
pub fn lumi_list_from_file(source: &str) -> Result<PairSet> {
    expand_source(&MaskSource::parse(source)?)
}

/// Writes `mask` as a pretty-printed JSON object ordered by run.
pub fn write_lumi_mask(mut writer: impl Write, mask: &LumiMask) -> std::io::Result<()> {
    let ordered: serde_json::Map<String, serde_json::Value> = mask
        .iter()
        .sorted_by(|(a, _), (b, _)| compare_runs(a, b))
        .map(|(run, ranges)| -> serde_json::Result<_> {
            Ok((run.clone(), serde_json::to_value(ranges)?))
        })
        .collect::<serde_json::Result<_>>()?;
    serde_json::to_writer_pretty(&mut writer, &ordered)?;
    writeln!(writer)?;
    writer.flush()
}

#[instrument(skip(mask), level = "debug")]
pub fn save_lumi_mask(path: &Path, mask: &LumiMask) -> Result<()> {
    let to_error = |source| LumiError::Io {
        path: path.to_owned(),
        source,
    };
    let file = File::create(path).map_err(to_error)?;
    write_lumi_mask(BufWriter::new(file), mask).map_err(to_error)?;
    debug!("Saved {} runs to '{}'", mask.len(), path);
    Ok(())
}

// Numeric order for run keys; anything unparsable goes last
fn compare_runs(a: &str, b: &str) -> Ordering {
    match (a.parse::<Run>(), b.parse::<Run>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
