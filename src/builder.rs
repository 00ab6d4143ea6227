use log::trace;

use crate::bitmap::Bitmap;
use crate::generators::row::{SymbolRow, ROW_COLUMNS};
use crate::high_level::{encode_codewords, Digits, SYMBOL_CODEWORDS};
use crate::tables::ROW_INDICATORS;

/// Number of rows of the card symbol.
pub const ROWS: usize = ROW_INDICATORS.len();
/// Modules in a row: start pattern, 3 codewords of 17 modules and the stop space.
pub const ROW_MODULES: u32 = 17 + ROW_COLUMNS as u32 * 17 + 1;

/// Default module size in pixels as (width, height).
pub const DEFAULT_SCALE: (u32, u32) = (2, 6);

/// Width in pixels of a symbol rendered at the default scale.
pub const WIDTH: u32 = ROW_MODULES * DEFAULT_SCALE.0;
/// Height in pixels of a symbol rendered at the default scale.
pub const HEIGHT: u32 = ROWS as u32 * DEFAULT_SCALE.1;
/// Bytes per line of a symbol rendered at the default scale.
pub const STRIDE: usize = 20;

/// Codewords of the symbol by row: indicator then two codewords.
pub type Matrix = [[u16; ROW_COLUMNS]; ROWS];

/// Lays the 16 codewords out in rows of two behind their row indicator.
pub fn build_matrix(codewords: &[u16; SYMBOL_CODEWORDS]) -> Matrix {
    let mut matrix = [[0u16; ROW_COLUMNS]; ROWS];
    for ((row, &indicator), pair) in matrix.iter_mut().zip(ROW_INDICATORS.iter()).zip(codewords.chunks_exact(2)) {
        *row = [indicator, pair[0], pair[1]];
    }
    matrix
}

/// Renders `matrix` at the default scale: a 138x48 bitmap with a 20 byte
/// stride.
pub fn render(matrix: &Matrix) -> Bitmap {
    Symbol::from_matrix(*matrix).render().to_bitmap()
}

/// A card symbol ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    matrix: Matrix,
}

impl Symbol {
    /// Encodes a card number.
    pub fn new(digits: &Digits) -> Self {
        let matrix = build_matrix(&encode_codewords(digits));
        trace!("symbol matrix {matrix:?}");
        Self { matrix }
    }

    pub const fn from_matrix(matrix: Matrix) -> Self {
        Self { matrix }
    }

    #[inline]
    pub const fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Rows of the symbol, top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = SymbolRow<'_>> + '_ {
        self.matrix.iter()
            .enumerate()
            .map(|(row, columns)| SymbolRow::new(row as u8, columns))
    }

    pub const fn render(&self) -> SymbolRender<'_> {
        SymbolRender {
            inner: self,
            scale: DEFAULT_SCALE,
            inverted: false,
        }
    }
}

impl<'a> From<&'a Symbol> for SymbolRender<'a> {
    fn from(inner: &'a Symbol) -> Self {
        inner.render()
    }
}

/// Rendering settings of a [Symbol].
#[derive(Debug, Clone)]
pub struct SymbolRender<'a> {
    inner: &'a Symbol,
    scale: (u32, u32),
    inverted: bool,
}

impl<'a> SymbolRender<'a> {
    pub const fn width(&self) -> u32 {
        ROW_MODULES * self.scale.0
    }

    pub const fn height(&self) -> u32 {
        ROWS as u32 * self.scale.1
    }

    /// Returns the size of a module in pixels as (width, height).
    pub const fn scale(&self) -> (u32, u32) {
        self.scale
    }

    /// Sets the size of a module in pixels. Both must be at least 1.
    pub const fn set_scale(mut self, scale: (u32, u32)) -> Self {
        assert!(scale.0 > 0 && scale.1 > 0, "a module is at least one pixel wide and tall");
        self.scale = scale;
        self
    }

    /// Returns if the symbol is set to be rendered with inverted pixels.
    pub const fn inverted(&self) -> bool {
        self.inverted
    }

    /// Marks whether the symbol should be rendered with pixel values inverted.
    pub const fn set_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Paints the symbol into a fresh bitmap.
    pub fn to_bitmap(&self) -> Bitmap {
        let (dotw, doth) = self.scale;
        let mut bitmap = Bitmap::new(self.width(), self.height());

        for row in self.inner.iter() {
            let y = row.row() as u32 * doth;
            let mut p = 0;

            for pattern in row {
                for run in pattern {
                    let w = run.width as u32;
                    if run.bar {
                        bitmap.fill_rect(dotw * p, y, dotw * w, doth);
                    }
                    p += w;
                }
            }
            debug_assert_eq!(p, ROW_MODULES);
        }

        if self.inverted {
            bitmap.invert();
        }
        bitmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(s: &str) -> Symbol {
        Symbol::new(&s.parse().unwrap())
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(ROW_MODULES, 69);
        assert_eq!((WIDTH, HEIGHT), (138, 48));
        assert_eq!(Bitmap::new(WIDTH, HEIGHT).stride(), STRIDE);
    }

    #[test]
    fn test_build_matrix() {
        let codewords = [
            8, 902, 171, 397, 419, 816, 428, 478,
            807, 316, 815, 344, 580, 38, 851, 835
        ];
        assert_eq!(build_matrix(&codewords), [
            [2, 8, 902], [7, 171, 397], [1, 419, 816], [32, 428, 478],
            [37, 807, 316], [31, 815, 344], [62, 580, 38], [67, 851, 835]
        ]);
    }

    #[test]
    fn test_symbol_matrix() {
        assert_eq!(symbol("0000000000000000").matrix(), &[
            [2, 8, 902], [7, 169, 315], [1, 711, 223], [32, 411, 100],
            [37, 634, 907], [31, 176, 772], [62, 83, 243], [67, 152, 678]
        ]);
    }

    #[test]
    fn test_render_reference() {
        let bitmap = symbol("1234567812345678").render().to_bitmap();
        assert_eq!((bitmap.width(), bitmap.height(), bitmap.stride()), (138, 48, 20));
        assert_eq!(bitmap.as_bytes().len(), 960);
        assert_eq!(bitmap.count_set(), 2808);
        assert_eq!(bitmap.row(0), &[0, 0, 51, 243, 3, 48, 51, 0, 15, 51, 255, 240, 63, 15, 48, 192, 252, 0, 0, 0]);
        assert_eq!(bitmap.row(47), &[0, 0, 51, 243, 3, 48, 207, 240, 207, 63, 60, 0, 51, 255, 48, 0, 207, 0, 0, 0]);
    }

    #[test]
    fn test_render_zeros() {
        let bitmap = symbol("0000000000000000").render().to_bitmap();
        assert_eq!(bitmap.as_bytes().len(), 960);
        assert_eq!(bitmap.count_set(), 2964);
        assert_eq!(bitmap.row(47), &[0, 0, 51, 243, 3, 48, 207, 240, 15, 243, 3, 60, 60, 252, 51, 240, 252, 0, 0, 0]);

        for y in 0..HEIGHT {
            assert!(bitmap.row(y).iter().any(|&b| b != 0), "line {y} is empty");
        }
    }

    #[test]
    fn test_render_row_edges() {
        let bitmap = symbol("9999999999999999").render().to_bitmap();
        for y in 0..HEIGHT {
            assert!((0..16).all(|x| !bitmap.pixel(x, y)), "start space on line {y}");
            assert!(bitmap.pixel(16, y) && bitmap.pixel(17, y), "start bar on line {y}");
            assert!(!bitmap.pixel(136, y) && !bitmap.pixel(137, y), "stop space on line {y}");
            // the last codeword ends on a bar
            assert!(bitmap.pixel(135, y));
        }
    }

    #[test]
    fn test_lines_of_a_row_are_identical() {
        let bitmap = symbol("1234567812345678").render().to_bitmap();
        for row in 0..ROWS as u32 {
            let first = bitmap.row(row * 6);
            for y in row * 6 + 1..row * 6 + 6 {
                assert_eq!(bitmap.row(y), first);
            }
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let s = symbol("1234567812345678");
        assert_eq!(s.render().to_bitmap(), s.render().to_bitmap());
        assert_eq!(symbol("1234567812345678").render().to_bitmap().into_bytes(), s.render().to_bitmap().into_bytes());
    }

    #[test]
    fn test_render_fn_matches_symbol() {
        let s = symbol("4000123400000137");
        assert_eq!(render(s.matrix()), s.render().to_bitmap());
    }

    #[test]
    fn test_render_scaled() {
        let s = symbol("1234567812345678");
        let small = s.render().set_scale((1, 2)).to_bitmap();
        assert_eq!((small.width(), small.height(), small.stride()), (69, 16, 12));

        let big = s.render().to_bitmap();
        for y in 0..small.height() {
            for x in 0..small.width() {
                assert_eq!(small.pixel(x, y), big.pixel(2 * x, 3 * y));
            }
        }
    }

    #[test]
    fn test_render_inverted() {
        let s = symbol("1234567812345678");
        let inverted = s.render().set_inverted(true).to_bitmap();
        assert!(inverted.pixel(0, 0));
        assert!(!inverted.pixel(16, 0));
        assert_eq!(inverted.count_set(), 138 * 48 - 2808);
    }
}
