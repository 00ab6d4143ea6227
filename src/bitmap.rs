//! Owned 1 bit per pixel image.
//!
//! Lines are `stride` bytes apart, top line first. Within a line, pixel `x`
//! lives in byte `x / 8` at bit `x % 8` (least significant bit first). A set
//! bit is a painted pixel; the background is zero.

/// Monochrome bitmap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bitmap {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u8>,
}

impl Bitmap {
    /// Creates a blank bitmap whose lines are padded to whole 32-bit words.
    pub fn new(width: u32, height: u32) -> Self {
        let stride = (width as usize).div_ceil(32) * 4;
        Self::with_stride(width, height, stride)
    }

    /// Creates a blank bitmap with an explicit line stride in bytes.
    pub fn with_stride(width: u32, height: u32, stride: usize) -> Self {
        assert!(stride * 8 >= width as usize, "a {width} pixel line does not fit in {stride} bytes");

        Self { width, height, stride, data: vec![0; stride * height as usize] }
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per line.
    #[inline]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Bytes of line `y`, padding included.
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "line {y} is out of bounds");
        let start = y as usize * self.stride;
        &self.data[start..start + self.stride]
    }

    #[inline]
    fn locate(&self, x: u32, y: u32) -> (usize, u8) {
        assert!(x < self.width && y < self.height,
            "pixel ({x}, {y}) is outside of the {}x{} bitmap", self.width, self.height);
        (y as usize * self.stride + x as usize / 8, 1 << (x % 8))
    }

    /// Paints the pixel at (`x`, `y`).
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32) {
        let (i, mask) = self.locate(x, y);
        self.data[i] |= mask;
    }

    /// Returns whether the pixel at (`x`, `y`) is painted.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        let (i, mask) = self.locate(x, y);
        self.data[i] & mask != 0
    }

    /// Paints a `width` x `height` rectangle whose top-left corner is (`x`, `y`).
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        for py in y..y + height {
            for px in x..x + width {
                self.set_pixel(px, py);
            }
        }
    }

    /// Flips every pixel. Padding bits past the width stay clear.
    pub fn invert(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let (i, mask) = self.locate(x, y);
                self.data[i] ^= mask;
            }
        }
    }

    /// Number of painted pixels.
    pub fn count_set(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Every pixel in line order as `(x, y, painted)`.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, bool)> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }
}
