use core::iter;

use crate::generators::pattern::Pattern;
use crate::patterns::{lookup, CLUSTERS};
use crate::tables::START_RUNS;

pub const START_PAT: Pattern = Pattern::new(START_RUNS);
pub const STOP_PAT: Pattern = Pattern::STOP;

/// Matrix columns of a row: the row indicator then two data/ECC codewords.
pub const ROW_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy)]
enum RowPattern {
    Start,
    Indicator,
    Data,
    Stop,
    None,
}

/// Printed segments of one symbol row, left to right: start pattern, row
/// indicator, the two codewords and the stop space.
#[derive(Debug, Clone)]
pub struct SymbolRow<'a> {
    indicator: u16,
    codewords: &'a [u16],
    next_pat: RowPattern,
    row: u8,
    cluster: u8,
}

impl<'a> SymbolRow<'a> {
    pub fn new(row: u8, columns: &'a [u16; ROW_COLUMNS]) -> Self {
        Self {
            indicator: columns[0],
            codewords: &columns[1..],
            next_pat: RowPattern::Start,
            row,
            cluster: row % CLUSTERS as u8,
        }
    }

    #[inline]
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Cluster the codewords of this row are drawn from.
    #[inline]
    pub const fn cluster(&self) -> u8 {
        self.cluster
    }
}

impl<'a> iter::Iterator for SymbolRow<'a> {
    type Item = Pattern;

    fn next(&mut self) -> Option<Self::Item> {
        let (item, next) = match self.next_pat {
            RowPattern::Start => (Some(START_PAT), RowPattern::Indicator),
            RowPattern::Indicator => (Some(lookup(self.indicator, self.cluster)), RowPattern::Data),
            RowPattern::Data => {
                let cw = self.codewords[0];
                self.codewords = &self.codewords[1..];

                let next = if self.codewords.is_empty() { RowPattern::Stop } else { RowPattern::Data };

                (Some(lookup(cw, self.cluster)), next)
            },
            RowPattern::Stop => (Some(STOP_PAT), RowPattern::None),
            RowPattern::None => (None, RowPattern::None)
        };

        self.next_pat = next;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.codewords.len() + match self.next_pat {
            RowPattern::Start     => 3,
            RowPattern::Indicator => 2,
            RowPattern::Data      => 1,
            RowPattern::Stop      => 1,
            RowPattern::None      => 0,
        };
        (count, Some(count))
    }
}

impl<'a> ExactSizeIterator for SymbolRow<'a> {}
impl<'a> iter::FusedIterator for SymbolRow<'a> {}
