use core::iter;

/// Number of modules covered by a codeword pattern and by the start pattern.
pub const PATTERN_MODULES: u32 = 17;

/// Run lengths of one printed segment, alternating space, bar, space, ...
/// Codeword and start patterns have 8 runs, the stop segment has a single
/// space run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    runs: [u8; 8],
    len: u8,
}

impl Pattern {
    /// Trailing 1 module space closing every row.
    pub const STOP: Pattern = Pattern { runs: [1, 0, 0, 0, 0, 0, 0, 0], len: 1 };

    pub const fn new(runs: [u8; 8]) -> Self {
        Self { runs, len: 8 }
    }

    #[inline]
    pub fn runs(&self) -> &[u8] {
        &self.runs[..self.len as usize]
    }

    /// Width of the segment in modules.
    pub fn modules(&self) -> u32 {
        self.runs().iter().map(|&r| r as u32).sum()
    }
}

impl From<[u8; 8]> for Pattern {
    fn from(runs: [u8; 8]) -> Self {
        Self::new(runs)
    }
}

/// A single run of a [Pattern].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub width: u8,
    pub bar: bool,
}

impl iter::IntoIterator for Pattern {
    type Item = Run;
    type IntoIter = Runs;

    fn into_iter(self) -> Self::IntoIter {
        Runs { runs: self.runs, front: 0, back: self.len }
    }
}

pub struct Runs {
    runs: [u8; 8],
    front: u8,
    back: u8,
}

impl Runs {
    #[inline]
    fn run(&self, i: u8) -> Run {
        // odd positions are bars
        Run { width: self.runs[i as usize], bar: i & 1 == 1 }
    }
}

impl iter::Iterator for Runs {
    type Item = Run;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let run = self.run(self.front);
            self.front += 1;
            Some(run)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = (self.back - self.front) as usize;
        (count, Some(count))
    }
}

impl iter::DoubleEndedIterator for Runs {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.run(self.back))
        } else {
            None
        }
    }
}

impl iter::ExactSizeIterator for Runs {}
impl iter::FusedIterator for Runs {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_alternate_space_bar() {
        let p = Pattern::new([8, 1, 1, 1, 1, 1, 1, 3]);
        let bars: Vec<bool> = p.into_iter().map(|r| r.bar).collect();
        assert_eq!(bars, [false, true, false, true, false, true, false, true]);
        assert_eq!(p.modules(), PATTERN_MODULES);
    }

    #[test]
    fn test_stop_is_single_space() {
        let runs: Vec<Run> = Pattern::STOP.into_iter().collect();
        assert_eq!(runs, [Run { width: 1, bar: false }]);
        assert_eq!(Pattern::STOP.modules(), 1);
    }

    #[test]
    fn test_runs_reversed() {
        let p = Pattern::new([1, 2, 3, 4, 1, 2, 3, 1]);
        let mut it = p.into_iter();
        assert_eq!(it.len(), 8);
        assert_eq!(it.next_back(), Some(Run { width: 1, bar: true }));
        assert_eq!(it.next(), Some(Run { width: 1, bar: false }));
        assert_eq!(it.len(), 6);
        let widths: Vec<u8> = it.rev().map(|r| r.width).collect();
        assert_eq!(widths, [3, 2, 1, 4, 3, 2]);
    }
}
