use camino::Utf8PathBuf as PathBuf;
use clap::Parser;

use lumitools::types::MaskSource;

#[derive(Parser)]
#[command(version, about = "Convert between run/lumi pairs and JSON lumimasks")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand)]
pub enum Command {
    /// Collapse a list of run/lumi pairs into a lumimask
    Summary(SummaryArgs),
    /// List every run/lumi pair covered by a lumimask
    Expand(ExpandArgs),
    /// Pairs present in either lumimask
    Union(CombineArgs),
    /// Pairs present in both lumimasks
    Intersect(CombineArgs),
    /// Pairs present in the first lumimask but not in the second
    Diff(CombineArgs),
    /// Count runs and pairs covered by a lumimask
    Count(CountArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct SummaryArgs {
    /// File with one "run lumi" pair per line or a JSON array of pairs (defaults to stdin)
    #[clap(value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ExpandArgs {
    /// Lumimask file, optionally restricted to runs as PATH:FIRST:LAST
    #[clap(value_name = "SOURCE")]
    pub source: MaskSource,

    /// Print pairs as a JSON array instead of one pair per line
    #[clap(long, env = "LUMITOOLS_JSON")]
    pub json: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CombineArgs {
    #[clap(value_name = "SOURCE")]
    pub first: MaskSource,

    #[clap(value_name = "SOURCE")]
    pub second: MaskSource,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CountArgs {
    #[clap(value_name = "SOURCE")]
    pub source: MaskSource,
}

#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    /// Write the resulting lumimask to this file (defaults to stdout)
    #[clap(short, long, env = "LUMITOOLS_OUTPUT", value_name = "FILE")]
    pub output: Option<PathBuf>,
}
