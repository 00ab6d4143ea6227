//! Card number to high level encoding conversion functions

use core::fmt;
use core::str::FromStr;

use log::debug;

use crate::ecc;
use crate::error::Error;

/// Number of digits of a card number.
pub const CARD_DIGITS: usize = 16;

/// Number of data codewords, including the length descriptor itself. It is
/// also the value of the length descriptor.
pub const DATA_CODEWORDS: usize = 8;
/// Number of codewords produced by the numeric compaction of a card number.
pub const NUMERIC_CODEWORDS: usize = 6;
/// Total number of codewords of a symbol (data + ECC).
pub const SYMBOL_CODEWORDS: usize = DATA_CODEWORDS + ecc::ECC_CODEWORDS;

/// Codeword used to latch to numeric mode
pub const M_LATCH_NUMERIC: u16 = 902;

/// Added to the card number before the base 900 conversion so that leading
/// zeros survive and the number of codewords does not depend on the value.
pub const NUMERIC_PAD: u64 = 100_000_000_000_000_000;

/// A validated 16-digit card number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digits([u8; CARD_DIGITS]);

impl Digits {
    /// Validates a 16 byte buffer of ASCII digits.
    pub fn new(bytes: &[u8]) -> Result<Self, Error> {
        let digits: [u8; CARD_DIGITS] = bytes.try_into()
            .map_err(|_| Error::InvalidLength(bytes.len()))?;

        if let Some(position) = digits.iter().position(|b| !b.is_ascii_digit()) {
            return Err(Error::InvalidDigit { position, byte: digits[position] });
        }

        Ok(Self(digits))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; CARD_DIGITS] {
        &self.0
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // only ASCII digits get past `new`
        core::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Numeric value of the card number.
    pub fn value(&self) -> u64 {
        self.0.iter().fold(0u64, |v, &d| v * 10 + (d - b'0') as u64)
    }
}

impl FromStr for Digits {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.as_bytes())
    }
}

impl TryFrom<&str> for Digits {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s.as_bytes())
    }
}

impl AsRef<str> for Digits {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Prints the digits as is, or in groups of four separated by spaces with the
/// alternate flag (`{:#}`), the way card numbers are usually written.
impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f.write_str(self.as_str());
        }

        for (i, group) in self.0.chunks(4).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(core::str::from_utf8(group).map_err(|_| fmt::Error)?)?;
        }
        Ok(())
    }
}

/// Numeric compaction of a card number: the 6 base 900 digits of the padded
/// value, most significant first.
pub fn compact(digits: &Digits) -> [u16; NUMERIC_CODEWORDS] {
    let mut n = digits.value() + NUMERIC_PAD;
    let mut out = [0u16; NUMERIC_CODEWORDS];

    for slot in out.iter_mut().rev() {
        let (q, r) = (n / 900, n % 900);
        *slot = r as u16;
        n = q;
    }

    // 900^6 > NUMERIC_PAD + 10^16, nothing can be left over
    assert_eq!(n, 0, "padded card number does not fit in {NUMERIC_CODEWORDS} codewords");
    out
}

/// Data section of the symbol: length descriptor, numeric latch and the
/// compacted card number.
pub fn data_codewords(digits: &Digits) -> [u16; DATA_CODEWORDS] {
    let mut data = [0u16; DATA_CODEWORDS];
    data[0] = DATA_CODEWORDS as u16;
    data[1] = M_LATCH_NUMERIC;
    data[2..].copy_from_slice(&compact(digits));
    data
}

/// Every codeword of the symbol, data followed by error correction.
pub fn encode_codewords(digits: &Digits) -> [u16; SYMBOL_CODEWORDS] {
    let mut codewords = [0u16; SYMBOL_CODEWORDS];
    codewords[..DATA_CODEWORDS].copy_from_slice(&data_codewords(digits));
    ecc::generate_ecc(&mut codewords);

    debug!("card {digits:#} encoded to codewords {codewords:?}");
    codewords
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> Digits {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_rejects_length() {
        assert_eq!(Digits::new(b"123"), Err(Error::InvalidLength(3)));
        assert_eq!("12345678123456789".parse::<Digits>(), Err(Error::InvalidLength(17)));
        assert_eq!(Digits::try_from(""), Err(Error::InvalidLength(0)));
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert_eq!("1234 5678 1234 5".parse::<Digits>(),
            Err(Error::InvalidDigit { position: 4, byte: b' ' }));
        assert_eq!(Digits::new(b"000000000000000a"),
            Err(Error::InvalidDigit { position: 15, byte: b'a' }));
    }

    #[test]
    fn test_display() {
        let d = digits("1234567812345678");
        assert_eq!(d.to_string(), "1234567812345678");
        assert_eq!(format!("{d:#}"), "1234 5678 1234 5678");
        assert_eq!(d.value(), 1234567812345678);
    }

    #[test]
    fn test_compact() {
        assert_eq!(compact(&digits("1234567812345678")), [171, 397, 419, 816, 428, 478]);
        assert_eq!(compact(&digits("0000000000000000")), [169, 315, 711, 223, 411, 100]);
        assert_eq!(compact(&digits("9999999999999999")), [186, 257, 332, 335, 722, 199]);
    }

    #[test]
    fn test_compact_round_trip() {
        for s in ["1234567812345678", "0000000000000000", "9999999999999999", "0000000000000001", "4000123400000137"] {
            let d = digits(s);
            let padded = compact(&d).iter().fold(0u64, |v, &c| v * 900 + c as u64);
            assert_eq!(padded - NUMERIC_PAD, d.value(), "{s}");
        }

        let padded = compact(&digits("1234567812345678")).iter().fold(0u64, |v, &c| v * 900 + c as u64);
        assert_eq!(padded, 101234567812345678);
    }

    #[test]
    fn test_data_codewords() {
        assert_eq!(data_codewords(&digits("1234567812345678")), [8, 902, 171, 397, 419, 816, 428, 478]);
    }

    #[test]
    fn test_encode_codewords() {
        assert_eq!(encode_codewords(&digits("1234567812345678")), [
            8, 902, 171, 397, 419, 816, 428, 478,
            // ecc
            807, 316, 815, 344, 580, 38, 851, 835
        ]);
        assert_eq!(encode_codewords(&digits("0000000000000000")), [
            8, 902, 169, 315, 711, 223, 411, 100,
            // ecc
            634, 907, 176, 772, 83, 243, 152, 678
        ]);
    }
}
