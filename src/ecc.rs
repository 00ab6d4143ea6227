use crate::tables::{ECC_L2, ECC_L2_LEAD};

/// Number of error correction codewords of the card symbol.
pub const ECC_CODEWORDS: usize = ECC_L2.len();

const MOD: u32 = 929;

/// Computes the error correction codewords of `data`.
///
/// The generator is fixed; any 8 codewords below 929 are accepted. A zero
/// remainder term yields the codeword 0.
pub fn generate_ec(data: &[u16; ECC_CODEWORDS]) -> [u16; ECC_CODEWORDS] {
    let mut ecc = [0u32; ECC_CODEWORDS];

    for &cw in data {
        let t = (cw as u32 + ecc[ECC_CODEWORDS - 1]) % MOD;

        for j in (0..ECC_CODEWORDS - 1).rev() {
            let factor = t * ECC_L2[j] as u32 % MOD;
            ecc[j + 1] = (ecc[j] + MOD - factor) % MOD;
        }
        ecc[0] = (MOD - t * ECC_L2_LEAD as u32 % MOD) % MOD;
    }

    let mut out = [0u16; ECC_CODEWORDS];
    for (o, &e) in out.iter_mut().zip(ecc.iter().rev()) {
        *o = ((MOD - e) % MOD) as u16;
    }
    out
}

/// Fills the last [ECC_CODEWORDS] slots of `codewords` with the error
/// correction of the codewords in front of them.
pub fn generate_ecc(codewords: &mut [u16]) {
    // the card symbol has as many data codewords as ECC codewords
    assert!(codewords.len() == 2 * ECC_CODEWORDS, "expected 8 data codewords followed by 8 ECC slots");

    let (data, ecc) = codewords.split_at_mut(ECC_CODEWORDS);
    let mut input = [0u16; ECC_CODEWORDS];
    input.copy_from_slice(data);
    ecc.copy_from_slice(&generate_ec(&input));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ecc_card() {
        let data: [u16; 8] = [8, 902, 171, 397, 419, 816, 428, 478];
        assert_eq!(generate_ec(&data), [807, 316, 815, 344, 580, 38, 851, 835]);
    }

    #[test]
    fn test_ecc_zeros_card() {
        let data: [u16; 8] = [8, 902, 169, 315, 711, 223, 411, 100];
        assert_eq!(generate_ec(&data), [634, 907, 176, 772, 83, 243, 152, 678]);
    }

    #[test]
    fn test_ecc_zero_term() {
        // card 4000123400000137, one remainder term is 0
        let data: [u16; 8] = [8, 902, 176, 112, 548, 874, 66, 737];
        assert_eq!(generate_ec(&data), [166, 51, 338, 0, 35, 194, 160, 158]);
    }

    #[test]
    fn test_ecc_deterministic() {
        let data: [u16; 8] = [8, 902, 186, 257, 332, 335, 722, 199];
        assert_eq!(generate_ec(&data), generate_ec(&data));
        assert_eq!(generate_ec(&data), [904, 99, 636, 189, 292, 416, 645, 221]);
    }

    #[test]
    fn test_ecc_in_place() {
        let mut codewords = [0u16; 16];
        codewords[..8].copy_from_slice(&[8, 902, 171, 397, 419, 816, 428, 478]);
        codewords[8..].fill(12);
        generate_ecc(&mut codewords);
        assert_eq!(&codewords[8..], &[807, 316, 815, 344, 580, 38, 851, 835]);
    }

    #[test]
    fn test_ecc_max_codewords() {
        let data = [928u16; 8];
        assert_eq!(generate_ec(&data), [110, 444, 829, 362, 105, 847, 233, 924]);
    }
}
