// lumitools, run/lumi lumimask conversion utilities.

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use camino::Utf8Path as Path;
use clap::Parser;
use itertools::Itertools;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use lumitools::lumimask::{json_summary, MaskOp};
use lumitools::storage::{expand_source, parse_pairs, save_lumi_mask, write_lumi_mask};
use lumitools::types::{LumiMask, MaskSource, PairSet};

use crate::cli::{Args, CombineArgs, Command, OutputArgs};

mod cli;

fn setup_tracing() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::builder().parse_lossy(
        std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).unwrap_or("info".to_string()),
    );
    let fmt = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);
    tracing_subscriber::registry().with(fmt).try_init()?;
    Ok(())
}

fn load_pairs(source: &MaskSource) -> Result<PairSet> {
    expand_source(source).with_context(|| format!("Couldn't load lumimask '{source}'"))
}

fn emit_mask(mask: &LumiMask, output: &OutputArgs) -> Result<()> {
    match &output.output {
        Some(path) => {
            save_lumi_mask(path, mask)?;
            info!("Wrote {} runs to '{}'", mask.len(), path);
        }
        None => write_lumi_mask(std::io::stdout().lock(), mask)?,
    }
    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<(String, &Path)> {
    match input {
        Some(path) if path.as_str() != "-" => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Couldn't read pairs from '{path}'"))?;
            Ok((content, path))
        }
        _ => {
            let content =
                std::io::read_to_string(std::io::stdin()).context("Couldn't read pairs from stdin")?;
            Ok((content, Path::new("-")))
        }
    }
}

fn combine(op: MaskOp, args: &CombineArgs) -> Result<()> {
    let first = load_pairs(&args.first)?;
    let second = load_pairs(&args.second)?;
    let combined = op.apply_pairs(&first, &second);
    info!(
        "{:?} of {} and {} pairs: {} pairs",
        op,
        first.len(),
        second.len(),
        combined.len()
    );
    emit_mask(&json_summary(combined), &args.output)
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Summary(summary) => {
            let (content, origin) = read_input(summary.input.as_deref())?;
            let pairs = parse_pairs(&content, origin)?;
            let mask = json_summary(pairs.iter().copied());
            info!("Collapsed {} pairs into {} runs", pairs.len(), mask.len());
            emit_mask(&mask, &summary.output)?;
        }
        Command::Expand(expand) => {
            let pairs = load_pairs(&expand.source)?;
            let sorted = pairs.into_iter().sorted_unstable().collect_vec();
            let mut out = BufWriter::new(std::io::stdout().lock());
            if expand.json {
                serde_json::to_writer(&mut out, &sorted)?;
                writeln!(out)?;
            } else {
                for (run, lumi) in sorted {
                    writeln!(out, "{run} {lumi}")?;
                }
            }
            out.flush()?;
        }
        Command::Count(count) => {
            let pairs = load_pairs(&count.source)?;
            let runs = pairs.iter().map(|&(run, _)| run).unique().count();
            println!("{runs} runs, {} pairs", pairs.len());
        }
        Command::Union(args) => combine(MaskOp::Union, &args)?,
        Command::Intersect(args) => combine(MaskOp::Intersection, &args)?,
        Command::Diff(args) => combine(MaskOp::Difference, &args)?,
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    setup_tracing()?;
    run(args)
}
