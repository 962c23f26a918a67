use camino::Utf8Path as Path;

use crate::error::{LumiError, Result};
use crate::types::{Lumi, Pair, Run};

/// Parses raw `(run, lumi)` pairs.
///
/// Either a JSON array of `[run, lumi]` arrays, or one pair per line with
/// the two numbers separated by whitespace, `,` or `:`. Blank lines and
/// lines starting with `#` are ignored.
pub fn parse_pairs(content: &str, origin: &Path) -> Result<Vec<Pair>> {
    if content.trim_start().starts_with('[') {
        return serde_json::from_str(content).map_err(|source| LumiError::Json {
            path: origin.to_owned(),
            source,
        });
    }
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| {
            parse_line(line).ok_or_else(|| LumiError::InvalidPair {
                line: number,
                content: line.to_owned(),
            })
        })
        .collect()
}

fn parse_line(line: &str) -> Option<Pair> {
    let mut fields = line
        .split(|c: char| c.is_whitespace() || c == ',' || c == ':')
        .filter(|field| !field.is_empty());
    let run: Run = fields.next()?.parse().ok()?;
    let lumi: Lumi = fields.next()?.parse().ok()?;
    match fields.next() {
        Some(_) => None,
        None => Some((run, lumi)),
    }
}
