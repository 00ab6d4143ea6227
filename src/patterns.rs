//! Decoding of the packed codeword pattern table.
//!
//! Every `(codeword, cluster)` pair owns a group of [GROUP_LEN] bytes. A group
//! is read as a big-endian number written with the symbols of an [Alphabet]
//! (skip bytes carry no digit), then split into 7 base 6 digits which give the
//! first 7 run lengths minus one. The last run completes the pattern to 17
//! modules.

use crate::generators::pattern::{Pattern, PATTERN_MODULES};
use crate::tables::{PACKED_PATTERNS, PATTERN_ALPHABET, PATTERN_SKIP};

/// Number of codeword values.
pub const CODEWORDS: usize = 929;
/// Number of clusters (alternative renderings) per codeword.
pub const CLUSTERS: usize = 3;
/// Bytes per packed group.
pub const GROUP_LEN: usize = 3;

const NOT_A_SYMBOL: u8 = u8::MAX;

/// Digit alphabet of a packed table.
#[derive(Debug, Clone, Copy)]
pub struct Alphabet {
    values: [u8; 256],
    base: u32,
    skip: u8,
}

impl Alphabet {
    /// Builds an alphabet where `symbols[i]` stands for the digit `i`. The
    /// `skip` byte may appear in groups but contributes nothing.
    pub const fn new(symbols: &[u8], skip: u8) -> Self {
        assert!(symbols.len() > 1 && symbols.len() < NOT_A_SYMBOL as usize,
            "an alphabet must have between 2 and 254 symbols");

        let mut values = [NOT_A_SYMBOL; 256];
        let mut i = 0;
        while i < symbols.len() {
            let s = symbols[i] as usize;
            assert!(symbols[i] != skip, "the skip byte can not be part of the alphabet");
            assert!(values[s] == NOT_A_SYMBOL, "duplicate symbol in alphabet");
            values[s] = i as u8;
            i += 1;
        }

        Self { values, base: symbols.len() as u32, skip }
    }

    #[inline]
    pub const fn base(&self) -> u32 {
        self.base
    }

    #[inline]
    pub const fn skip(&self) -> u8 {
        self.skip
    }

    /// Digit value of `symbol`, or `None` for bytes outside the alphabet
    /// (including the skip byte).
    pub fn value(&self, symbol: u8) -> Option<u32> {
        match self.values[symbol as usize] {
            NOT_A_SYMBOL => None,
            v => Some(v as u32),
        }
    }

    /// Reads `group` as a most-significant-first number, ignoring skip bytes.
    pub fn read(&self, group: &[u8]) -> Option<u32> {
        group.iter()
            .filter(|&&c| c != self.skip)
            .try_fold(0u32, |acc, &c| acc.checked_mul(self.base)?.checked_add(self.value(c)?))
    }
}

/// Expands a decoded group value into its run lengths.
pub fn pattern_from_value(mut value: u32) -> Option<Pattern> {
    let mut runs = [0u8; 8];
    for run in runs[..7].iter_mut().rev() {
        *run = (value % 6) as u8 + 1;
        value /= 6;
    }

    // more than 7 base 6 digits
    if value != 0 {
        return None;
    }

    let sum: u32 = runs[..7].iter().map(|&r| r as u32).sum();
    if sum >= PATTERN_MODULES {
        return None;
    }
    runs[7] = (PATTERN_MODULES - sum) as u8;

    Some(Pattern::new(runs))
}

/// A packed pattern table: a payload of fixed size groups and the alphabet
/// they are written with.
#[derive(Debug, Clone, Copy)]
pub struct PackedTable<'a> {
    payload: &'a [u8],
    alphabet: Alphabet,
}

impl<'a> PackedTable<'a> {
    pub const fn new(payload: &'a [u8], alphabet: Alphabet) -> Self {
        assert!(payload.len() % GROUP_LEN == 0, "payload must be made of whole groups");
        Self { payload, alphabet }
    }

    /// Number of groups in the table.
    #[inline]
    pub const fn len(&self) -> usize {
        self.payload.len() / GROUP_LEN
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    #[inline]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn group(&self, index: usize) -> Option<&'a [u8]> {
        let start = index.checked_mul(GROUP_LEN)?;
        self.payload.get(start..start + GROUP_LEN)
    }

    /// Decodes the pattern stored in group `index`. Returns `None` when the
    /// index is out of range or the group is not a valid pattern.
    pub fn decode(&self, index: usize) -> Option<Pattern> {
        pattern_from_value(self.alphabet.read(self.group(index)?)?)
    }
}

/// Patterns of all codewords in all clusters.
pub static PATTERNS: PackedTable<'static> =
    PackedTable::new(PACKED_PATTERNS, Alphabet::new(PATTERN_ALPHABET, PATTERN_SKIP));

/// Returns the pattern of `codeword` in `cluster`.
///
/// Panics if either argument is out of range: both are computed by the
/// encoder itself and can not come from user input.
pub fn lookup(codeword: u16, cluster: u8) -> Pattern {
    assert!((codeword as usize) < CODEWORDS, "codeword {codeword} is out of range");
    assert!((cluster as usize) < CLUSTERS, "cluster {cluster} is out of range");

    let index = codeword as usize * CLUSTERS + cluster as usize;
    match PATTERNS.decode(index) {
        Some(pattern) => pattern,
        None => panic!("corrupt pattern table group {index}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGITS: Alphabet = Alphabet::new(b"0123456789", b'_');

    #[test]
    fn test_alphabet_read() {
        assert_eq!(DIGITS.base(), 10);
        assert_eq!(DIGITS.read(b"123"), Some(123));
        assert_eq!(DIGITS.read(b"1_3"), Some(13));
        assert_eq!(DIGITS.read(b"___"), Some(0));
        assert_eq!(DIGITS.read(b"1x3"), None);
    }

    #[test]
    fn test_pattern_from_value() {
        assert_eq!(pattern_from_value(0), Some(Pattern::new([1, 1, 1, 1, 1, 1, 1, 10])));
        // 5 * 6^6 + 1 = 233281: first run 6, last of the seven 2
        assert_eq!(pattern_from_value(233281), Some(Pattern::new([6, 1, 1, 1, 1, 1, 2, 4])));
        // all seven runs at 6 overflow the 17 modules
        assert_eq!(pattern_from_value(6u32.pow(7) - 1), None);
        assert_eq!(pattern_from_value(6u32.pow(7)), None);
    }

    #[test]
    fn test_custom_table() {
        let table = PackedTable::new(b"000_01xyz", DIGITS);
        assert_eq!(table.len(), 3);
        assert_eq!(table.decode(0), Some(Pattern::new([1, 1, 1, 1, 1, 1, 1, 10])));
        assert_eq!(table.decode(1), Some(Pattern::new([1, 1, 1, 1, 1, 1, 2, 9])));
        assert_eq!(table.decode(2), None);
        assert_eq!(table.decode(3), None);
    }

    #[test]
    fn test_table_size() {
        assert_eq!(PATTERNS.len(), CODEWORDS * CLUSTERS);
        assert_eq!(PATTERNS.alphabet().base(), 91);
    }

    #[test]
    fn test_all_patterns_sum_to_17() {
        for codeword in 0..CODEWORDS as u16 {
            for cluster in 0..CLUSTERS as u8 {
                let pattern = lookup(codeword, cluster);
                assert_eq!(pattern.modules(), 17, "codeword {codeword} cluster {cluster}");
                assert!(pattern.runs().iter().all(|&r| (1..=6).contains(&r)));
            }
        }
    }

    #[test]
    fn test_known_patterns() {
        assert_eq!(lookup(0, 0).runs(), [3, 1, 1, 1, 1, 1, 3, 6]);
        assert_eq!(lookup(0, 1).runs(), [5, 1, 1, 1, 1, 1, 2, 5]);
        assert_eq!(lookup(0, 2).runs(), [2, 1, 1, 1, 1, 1, 5, 5]);
        assert_eq!(lookup(8, 0).runs(), [2, 1, 1, 1, 1, 4, 2, 5]);
        assert_eq!(lookup(928, 2).runs(), [3, 3, 6, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_group_with_skip_byte() {
        assert_eq!(PATTERNS.group(902 * 3 + 1), Some(&b"-,a"[..]));
        assert_eq!(lookup(902, 1).runs(), [1, 1, 6, 1, 1, 2, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn test_lookup_out_of_range() {
        lookup(929, 0);
    }
}
