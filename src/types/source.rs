use std::str::FromStr;

use camino::Utf8PathBuf as PathBuf;

use super::Run;
use crate::error::{LumiError, Result};

// Signed and wider than `Run`, so any integer bound compares against every run
pub type RunBound = i128;

/// Inclusive run filter. A missing side is unbounded.
#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub struct RunBounds {
    pub first: Option<RunBound>,
    pub last: Option<RunBound>,
}

impl RunBounds {
    pub fn new(first: Option<RunBound>, last: Option<RunBound>) -> Self {
        Self { first, last }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, run: Run) -> bool {
        let run = RunBound::from(run);
        if matches!(self.first, Some(first) if run < first) {
            return false;
        }
        if matches!(self.last, Some(last) if run > last) {
            return false;
        }
        true
    }
}

impl std::fmt::Display for RunBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = |bound: Option<RunBound>| bound.map_or("*".to_owned(), |run| run.to_string());
        write!(f, "{}..={}", side(self.first), side(self.last))
    }
}

/// A lumimask file reference of the form `path` or `path:first:last`.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct MaskSource {
    pub path: PathBuf,
    pub bounds: RunBounds,
}

impl MaskSource {
    pub fn parse(source: &str) -> Result<Self> {
        if !source.contains(':') {
            return Ok(Self {
                path: source.into(),
                bounds: RunBounds::unbounded(),
            });
        }
        let (path, first, last) = match source.split(':').collect::<Vec<_>>()[..] {
            [path, first, last] => (path, first, last),
            _ => return Err(LumiError::MalformedSource(source.to_owned())),
        };
        Ok(Self {
            path: path.into(),
            bounds: RunBounds::new(Some(parse_bound(first)?), Some(parse_bound(last)?)),
        })
    }
}

fn parse_bound(value: &str) -> Result<RunBound> {
    value.parse().map_err(|source| LumiError::InvalidBound {
        value: value.to_owned(),
        source,
    })
}

impl FromStr for MaskSource {
    type Err = LumiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for MaskSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.bounds {
            RunBounds {
                first: Some(first),
                last: Some(last),
            } => write!(f, "{}:{}:{}", self.path, first, last),
            _ => write!(f, "{}", self.path),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LumiError;

    use super::{MaskSource, RunBounds};

    #[test]
    fn test_parse_plain_path() {
        let source = MaskSource::parse("a/b.json").unwrap();
        assert_eq!(source.path, "a/b.json");
        assert_eq!(source.bounds, RunBounds::unbounded());
    }

    #[test]
    fn test_parse_bounded_path() {
        let source: MaskSource = "a/b.json:10:20".parse().unwrap();
        assert_eq!(source.path, "a/b.json");
        assert_eq!(source.bounds, RunBounds::new(Some(10), Some(20)));
        assert_eq!(source.to_string(), "a/b.json:10:20");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            MaskSource::parse("a/b.json:10"),
            Err(LumiError::MalformedSource(_))
        ));
        assert!(matches!(
            MaskSource::parse("a/b.json:10:20:30"),
            Err(LumiError::MalformedSource(_))
        ));
        assert!(matches!(
            MaskSource::parse("a/b.json:ten:20"),
            Err(LumiError::InvalidBound { .. })
        ));
        assert!(matches!(
            MaskSource::parse("a/b.json:10:"),
            Err(LumiError::InvalidBound { .. })
        ));
        assert!(matches!(
            MaskSource::parse("a/b.json:1.5:20"),
            Err(LumiError::InvalidBound { .. })
        ));
    }

    #[test]
    fn test_negative_bounds() {
        let source = MaskSource::parse("a/b.json:-1:20").unwrap();
        assert_eq!(source.bounds, RunBounds::new(Some(-1), Some(20)));
        assert!(source.bounds.contains(0));
        assert!(source.bounds.contains(20));
        assert!(!source.bounds.contains(21));

        let source = MaskSource::parse("a/b.json:0:-1").unwrap();
        assert!(!source.bounds.contains(0));
        assert!(!source.bounds.contains(u64::MAX));
    }

    #[test]
    fn test_bounds() {
        let bounds = RunBounds::new(Some(150), None);
        assert!(!bounds.contains(100));
        assert!(bounds.contains(150));
        assert!(bounds.contains(u64::MAX));

        let bounds = RunBounds::new(Some(10), Some(20));
        assert!(bounds.contains(10));
        assert!(bounds.contains(20));
        assert!(!bounds.contains(21));
        assert_eq!(bounds.to_string(), "10..=20");

        let bounds = RunBounds::new(None, Some(u64::MAX.into()));
        assert!(bounds.contains(u64::MAX));

        assert!(RunBounds::unbounded().contains(0));
        assert_eq!(RunBounds::new(None, Some(5)).to_string(), "*..=5");
    }
}
