use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::Lumi;

/// Closed interval of lumis, encoded in JSON as `[start, end]`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct LumiRange(pub Lumi, pub Lumi);

impl LumiRange {
    pub fn single(lumi: Lumi) -> Self {
        LumiRange(lumi, lumi)
    }

    pub fn start(&self) -> Lumi {
        self.0
    }

    pub fn end(&self) -> Lumi {
        self.1
    }

    // `x == end + 1`, without wrapping at the top of the domain
    pub fn is_followed_by(&self, lumi: Lumi) -> bool {
        self.1.checked_add(1) == Some(lumi)
    }

    pub fn lumis(&self) -> RangeInclusive<Lumi> {
        self.0..=self.1
    }
}

impl std::fmt::Display for LumiRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::LumiRange;

    #[test]
    fn test_json_encoding() {
        assert_eq!(serde_json::to_string(&LumiRange(1, 3)).unwrap(), "[1,3]");
        assert_eq!(
            serde_json::from_str::<LumiRange>("[8, 10]").unwrap(),
            LumiRange(8, 10)
        );
        serde_json::from_str::<LumiRange>("[1]").unwrap_err();
        serde_json::from_str::<LumiRange>("[1, 2, 3]").unwrap_err();
        serde_json::from_str::<LumiRange>("[-1, 2]").unwrap_err();
        serde_json::from_str::<LumiRange>("{\"start\": 1}").unwrap_err();
    }

    #[test]
    fn test_adjacency() {
        assert!(LumiRange(1, 3).is_followed_by(4));
        assert!(!LumiRange(1, 3).is_followed_by(3));
        assert!(!LumiRange(1, 3).is_followed_by(5));
        assert!(!LumiRange::single(u64::MAX).is_followed_by(0));
    }

    #[test]
    fn test_lumis() {
        assert_eq!(LumiRange(5, 7).lumis().collect::<Vec<_>>(), vec![5, 6, 7]);
        assert_eq!(LumiRange(7, 5).lumis().count(), 0);
    }
}
