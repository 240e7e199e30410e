//! Background colors sampled from images.
//!
//! Text laid over a photo needs a single background color to measure
//! against. [`BackgroundSampler`] reduces a region of an image to the
//! average color of the pixels beneath it; [`text_color_on_image`] feeds that
//! average into [`text_color_on_background`].

use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use legible_color::Color;
use tracing::debug;

use crate::font::FontDescriptor;
use crate::options::Options;
use crate::select::text_color_on_background;

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A rectangle in image pixel coordinates. May extend past the image, or
/// have negative width/height (it is normalized before use).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Whole pixels covered by a clipped region, half-open: `x0..x1`, `y0..y1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl PixelRect {
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.y1 - self.y0
    }
}

impl Region {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Same rectangle with non-negative width and height.
    #[must_use]
    pub fn standardized(self) -> Self {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Self { x, y, width, height }
    }

    /// Clip to a `width` × `height` image and round outward to whole pixels.
    ///
    /// `None` when the overlap has no area (including zero-size regions and
    /// regions that only touch the image edge).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn intersect_bounds(self, width: u32, height: u32) -> Option<PixelRect> {
        let r = self.standardized();
        let left = r.x.max(0.0);
        let top = r.y.max(0.0);
        let right = (r.x + r.width).min(f64::from(width));
        let bottom = (r.y + r.height).min(f64::from(height));

        // Written this way round so NaN coordinates also bail out.
        if !(right > left && bottom > top) {
            return None;
        }

        // Safe: all four values are within [0, width] / [0, height].
        Some(PixelRect {
            x0: left.floor() as u32,
            y0: top.floor() as u32,
            x1: right.ceil() as u32,
            y1: bottom.ceil() as u32,
        })
    }
}

// ---------------------------------------------------------------------------
// Sampling
// ---------------------------------------------------------------------------

/// Something that can report the average color under a region.
pub trait BackgroundSampler {
    /// Opaque average color under `region`, or `None` when the region misses
    /// the pixel data entirely (or there is none).
    fn average_color(&self, region: Region) -> Option<Color>;
}

impl BackgroundSampler for RgbaImage {
    fn average_color(&self, region: Region) -> Option<Color> {
        average_view(self, region)
    }
}

impl BackgroundSampler for DynamicImage {
    fn average_color(&self, region: Region) -> Option<Color> {
        average_view(self, region)
    }
}

/// Mean of the straight RGB channels under `region`. Pixel alpha is not
/// weighted in; the result is opaque.
fn average_view<I>(image: &I, region: Region) -> Option<Color>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = image.dimensions();
    let rect = region.intersect_bounds(width, height)?;

    let mut sums = [0u64; 3];
    for y in rect.y0..rect.y1 {
        for x in rect.x0..rect.x1 {
            let Rgba([r, g, b, _]) = image.get_pixel(x, y);
            sums[0] += u64::from(r);
            sums[1] += u64::from(g);
            sums[2] += u64::from(b);
        }
    }

    let count = u64::from(rect.width()) * u64::from(rect.height());
    #[allow(clippy::cast_precision_loss)]
    let channel = |sum: u64| sum as f64 / (count as f64 * 255.0);
    Some(Color::rgb(channel(sums[0]), channel(sums[1]), channel(sums[2])))
}

/// Black or white text for the part of `image` under `region`.
///
/// The font only decides whether the large-text threshold applies; an
/// absent font is treated as normal text. Returns `None` when the region
/// does not overlap the image's pixels.
#[must_use]
pub fn text_color_on_image<S>(
    image: &S,
    region: Region,
    target_alpha: f64,
    font: Option<&FontDescriptor>,
) -> Option<Color>
where
    S: BackgroundSampler + ?Sized,
{
    let Some(background) = image.average_color(region) else {
        debug!(?region, "no pixels under region, cannot pick a text color");
        return None;
    };
    Some(text_color_on_background(
        background,
        target_alpha,
        Options::for_font(font),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn solid(width: u32, height: u32, level: u8) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([level, level, level, 255]))
    }

    // ── Region ──────────────────────────────────────────────────────

    #[test]
    fn region_inside_image() {
        let rect = Region::new(2.0, 3.0, 10.0, 5.0).intersect_bounds(100, 100);
        assert_eq!(rect, Some(PixelRect { x0: 2, y0: 3, x1: 12, y1: 8 }));
    }

    #[test]
    fn region_is_clipped() {
        let rect = Region::new(90.0, -5.0, 20.0, 10.0).intersect_bounds(100, 100);
        assert_eq!(rect, Some(PixelRect { x0: 90, y0: 0, x1: 100, y1: 5 }));
    }

    #[test]
    fn fractional_region_rounds_outward() {
        let rect = Region::new(0.5, 0.5, 1.0, 1.0).intersect_bounds(10, 10);
        assert_eq!(rect, Some(PixelRect { x0: 0, y0: 0, x1: 2, y1: 2 }));
    }

    #[test]
    fn negative_size_is_standardized() {
        let rect = Region::new(10.0, 10.0, -5.0, -5.0).intersect_bounds(100, 100);
        assert_eq!(rect, Some(PixelRect { x0: 5, y0: 5, x1: 10, y1: 10 }));
    }

    #[test]
    fn zero_region_misses() {
        assert_eq!(Region::default().intersect_bounds(100, 100), None);
    }

    #[test]
    fn region_touching_edge_misses() {
        assert_eq!(Region::new(-10.0, -10.0, 10.0, 10.0).intersect_bounds(100, 100), None);
    }

    #[test]
    fn empty_image_misses() {
        assert_eq!(Region::new(0.0, 0.0, 10.0, 10.0).intersect_bounds(0, 0), None);
    }

    #[test]
    fn nan_region_misses() {
        assert_eq!(Region::new(f64::NAN, 0.0, 10.0, 10.0).intersect_bounds(100, 100), None);
    }

    // ── Sampling ────────────────────────────────────────────────────

    #[test]
    fn average_of_solid_image() {
        let color = solid(20, 20, 255).average_color(Region::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(color, Some(Color::WHITE));
    }

    #[test]
    fn average_of_two_halves() {
        let mut img = solid(2, 1, 0);
        img.put_pixel(1, 0, Rgba([255, 255, 255, 255]));
        let color = img.average_color(Region::new(0.0, 0.0, 2.0, 1.0));
        assert_eq!(color, Some(Color::white(0.5, 1.0)));
    }

    #[test]
    fn average_only_covers_region() {
        let mut img = solid(4, 4, 0);
        img.put_pixel(3, 3, Rgba([255, 0, 0, 255]));
        let color = img.average_color(Region::new(0.0, 0.0, 2.0, 2.0));
        assert_eq!(color, Some(Color::BLACK));
    }

    #[test]
    fn dynamic_image_samples_too() {
        let img = DynamicImage::ImageRgba8(solid(8, 8, 0));
        assert_eq!(img.average_color(Region::new(1.0, 1.0, 4.0, 4.0)), Some(Color::BLACK));
    }

    // ── Text color on image ─────────────────────────────────────────

    #[test]
    fn empty_image_gives_none() {
        let img = DynamicImage::new_rgba8(0, 0);
        let bold13 = FontDescriptor::bold(13.0);
        let color = text_color_on_image(&img, Region::new(0.0, 0.0, 10.0, 10.0), 1.0, Some(&bold13));
        assert_eq!(color, None);
    }

    #[test]
    fn grey_image_gives_some() {
        let img = solid(100, 100, 128);
        let color = text_color_on_image(&img, Region::new(0.0, 0.0, 10.0, 10.0), 1.0, None);
        assert!(color.is_some());
    }

    #[test]
    fn white_image_gives_black() {
        let img = solid(100, 100, 255);
        let bold13 = FontDescriptor::bold(13.0);
        let color = text_color_on_image(&img, Region::new(0.0, 0.0, 10.0, 10.0), 1.0, Some(&bold13));
        assert_eq!(color, Some(Color::BLACK));
    }

    #[test]
    fn black_image_gives_white() {
        let img = solid(100, 100, 0);
        let bold13 = FontDescriptor::bold(13.0);
        let color = text_color_on_image(&img, Region::new(0.0, 0.0, 10.0, 10.0), 1.0, Some(&bold13));
        assert_eq!(color, Some(Color::WHITE));
    }

    #[test]
    fn font_size_selects_threshold() {
        // Black at 0.45 passes for large text on white but not for normal.
        let img = solid(10, 10, 255);
        let region = Region::new(0.0, 0.0, 10.0, 10.0);
        let large = FontDescriptor::regular(24.0);
        let normal = FontDescriptor::regular(12.0);
        assert_eq!(
            text_color_on_image(&img, region, 0.45, Some(&large)),
            Some(Color::white(0.0, 0.45))
        );
        assert_eq!(text_color_on_image(&img, region, 0.45, Some(&normal)), Some(Color::BLACK));
    }

    #[test]
    fn custom_sampler() {
        struct Solid(Color);
        impl BackgroundSampler for Solid {
            fn average_color(&self, _region: Region) -> Option<Color> {
                Some(self.0)
            }
        }
        let sampler: &dyn BackgroundSampler = &Solid(Color::BLACK);
        let color = text_color_on_image(sampler, Region::default(), 1.0, None);
        assert_eq!(color, Some(Color::WHITE));
    }
}
