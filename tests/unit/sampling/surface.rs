//! Tests for pixel surfaces

#[cfg(test)]
mod tests {
    use crate::sampling::surface::{PixelSurface, SolidSurface};
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_rgba_image_reads_normalised_channels() {
        let mut img = RgbaImage::from_pixel(4, 2, Rgba([0, 0, 0, 255]));
        img.put_pixel(3, 1, Rgba([255, 0, 255, 0]));

        assert_eq!(PixelSurface::width(&img), 4);
        assert_eq!(PixelSurface::height(&img), 2);
        assert_eq!(img.pixel(3, 0), [1.0, 0.0, 1.0, 0.0]);
        assert_eq!(img.pixel(0, 1), [0.0, 0.0, 0.0, 1.0]);
    }

    // Tests surface row 0 is the bottom image row
    // Verified by reading image rows top-down
    #[test]
    fn test_rgba_image_origin_is_bottom_left() {
        let img = RgbaImage::from_fn(1, 3, |_, y| {
            if y == 0 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        });

        assert_eq!(img.pixel(0, 2), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(img.pixel(0, 0), [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(img.pixel(0, 1), [0.0, 0.0, 1.0, 1.0]);
    }

    // Tests out-of-range coordinates clamp to the edge
    // Verified by returning transparent black for out-of-range reads
    #[test]
    fn test_rgba_image_clamps_coordinates() {
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([255, 255, 255, 255]));

        assert_eq!(img.pixel(10, 10), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(img.pixel(10, 0), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_solid_surface() {
        let surface = SolidSurface {
            width: 3,
            height: 7,
            color: [0.5, 0.5, 0.5, 1.0],
        };
        assert_eq!((surface.width(), surface.height()), (3, 7));
        assert_eq!(surface.pixel(2, 6), [0.5, 0.5, 0.5, 1.0]);
    }
}
