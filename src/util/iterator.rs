use crate::types::{Lumi, LumiRange, Run};

/// Groups `(run, lumi)` pairs sorted by run into `(run, lumis)`.
///
/// Runs are emitted in the order they first appear. The last group is
/// flushed once the inner iterator is exhausted.
pub struct GroupByRun<I> {
    inner: I,
    pending: Option<(Run, Vec<Lumi>)>,
}

impl<I: Iterator<Item = (Run, Lumi)>> Iterator for GroupByRun<I> {
    type Item = (Run, Vec<Lumi>);

    fn next(&mut self) -> Option<Self::Item> {
        for (run, lumi) in self.inner.by_ref() {
            match &mut self.pending {
                Some((current, lumis)) if *current == run => lumis.push(lumi),
                pending => {
                    if let Some(finished) = pending.replace((run, vec![lumi])) {
                        return Some(finished);
                    }
                }
            }
        }
        self.pending.take()
    }
}

/// Collapses ascending lumis into maximal contiguous ranges.
///
/// A repeated value does not extend the open range: `[1, 1, 2]` yields
/// `[1, 1]` and `[1, 2]`.
pub struct CollapseRanges<I> {
    inner: I,
    open: Option<LumiRange>,
}

impl<I: Iterator<Item = Lumi>> Iterator for CollapseRanges<I> {
    type Item = LumiRange;

    fn next(&mut self) -> Option<Self::Item> {
        for lumi in self.inner.by_ref() {
            match &mut self.open {
                Some(range) if range.is_followed_by(lumi) => range.1 = lumi,
                open => {
                    if let Some(closed) = open.replace(LumiRange::single(lumi)) {
                        return Some(closed);
                    }
                }
            }
        }
        self.open.take()
    }
}

pub trait GroupByRunExt: Iterator<Item = (Run, Lumi)> {
    fn group_by_run(self) -> GroupByRun<Self>
    where
        Self: Sized,
    {
        GroupByRun {
            inner: self,
            pending: None,
        }
    }
}

impl<T> GroupByRunExt for T where T: Iterator<Item = (Run, Lumi)> {}

pub trait CollapseRangesExt: Iterator<Item = Lumi> {
    fn collapse_ranges(self) -> CollapseRanges<Self>
    where
        Self: Sized,
    {
        CollapseRanges {
            inner: self,
            open: None,
        }
    }
}

impl<T> CollapseRangesExt for T where T: Iterator<Item = Lumi> {}
