//! [embedded_graphics] support: a [Bitmap] draws itself at the origin of any
//! binary color target. Painted pixels are [BinaryColor::On].

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    Drawable, Pixel,
};

use crate::bitmap::Bitmap;

impl OriginDimensions for Bitmap {
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

impl Drawable for Bitmap {
    type Color = BinaryColor;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        target.draw_iter(self.pixels().map(|(x, y, on)| {
            Pixel(Point::new(x as i32, y as i32), BinaryColor::from(on))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::geometry::Dimensions;

    struct Canvas {
        size: Size,
        on: Vec<Point>,
        drawn: usize,
    }

    impl OriginDimensions for Canvas {
        fn size(&self) -> Size {
            self.size
        }
    }

    impl DrawTarget for Canvas {
        type Color = BinaryColor;
        type Error = core::convert::Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                self.drawn += 1;
                if color.is_on() {
                    self.on.push(point);
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_draw_bitmap() {
        let mut bitmap = Bitmap::new(10, 3);
        bitmap.set_pixel(0, 0);
        bitmap.set_pixel(9, 2);

        assert_eq!(bitmap.bounding_box().size, Size::new(10, 3));

        let mut canvas = Canvas { size: Size::new(10, 3), on: Vec::new(), drawn: 0 };
        bitmap.draw(&mut canvas).unwrap();
        assert_eq!(canvas.drawn, 30);
        assert_eq!(canvas.on, [Point::new(0, 0), Point::new(9, 2)]);
    }
}
