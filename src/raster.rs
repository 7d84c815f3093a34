//! Thin driver: clips a pixel-space region, maps pixel centers into shape
//! space, and invokes the field evaluator once per pixel.

use crate::algorithms::error_correction::{self, ClashThreshold};
use crate::algorithms::field::{compute_windings, evaluate_msdf, evaluate_sdf, MultiDistance};
use crate::algorithms::shape::Shape;
use crate::geometry::Vector2;
use crate::pixmap::{FromUnit, Gray, Pixmap, Rgb, Rgba, RgbaChannels};

/// A pixel-space axis-aligned rectangle. Coordinates may be negative or
/// exceed the pixmap's dimensions — [`PixelRegion::clip`] clamps both ends
/// independently before any pixel is touched (spec.md §9: test both a
/// negative-left and an oversized-right region).
#[derive(Debug, Clone, Copy)]
pub struct PixelRegion {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl PixelRegion {
    pub fn full(width: u32, height: u32) -> Self {
        Self { x0: 0, y0: 0, x1: width as i64, y1: height as i64 }
    }

    fn clip(self, width: u32, height: u32) -> (u32, u32, u32, u32) {
        let clamp_axis = |lo: i64, hi: i64, max: i64| {
            let lo = lo.clamp(0, max);
            let hi = hi.clamp(0, max);
            (lo.min(hi) as u32, lo.max(hi) as u32)
        };
        let (x0, x1) = clamp_axis(self.x0, self.x1, width as i64);
        let (y0, y1) = clamp_axis(self.y0, self.y1, height as i64);
        (x0, x1, y0, y1)
    }
}

/// `pixel = scale * (shape + translate)`, so `shape = pixel/scale - translate`.
fn pixel_to_shape(x: u32, y: u32, scale: Vector2, translate: Vector2) -> Vector2 {
    Vector2::new(
        (x as f64 + 0.5) / scale.x - translate.x,
        (y as f64 + 0.5) / scale.y - translate.y,
    )
}

fn mirrored_row(y: u32, y0: u32, y1: u32, inverse_y_axis: bool) -> u32 {
    if inverse_y_axis {
        y0 + y1 - 1 - y
    } else {
        y
    }
}

/// Write single-channel signed distances for `shape` into `pixmap` over
/// `region`. Callers must have scaled `range` to shape units.
pub fn generate_sdf<T: FromUnit + Send>(
    pixmap: &mut Pixmap<Gray<T>>,
    shape: &Shape,
    region: PixelRegion,
    range: f64,
    scale: Vector2,
    translate: Vector2,
) {
    let (x0, x1, y0, y1) = region.clip(pixmap.width(), pixmap.height());
    if x0 >= x1 || y0 >= y1 {
        return;
    }
    let windings = compute_windings(shape);
    log::debug!(
        "generate_sdf: region=({x0},{y0})..({x1},{y1}) contours={} range={range}",
        shape.contours.len()
    );

    #[cfg(not(feature = "parallel"))]
    {
        let mut scratch = vec![0.0; shape.contours.len()];
        for y in y0..y1 {
            let target_y = mirrored_row(y, y0, y1, shape.inverse_y_axis);
            for x in x0..x1 {
                let p = pixel_to_shape(x, y, scale, translate);
                let d = evaluate_sdf(shape, &windings, &mut scratch, p);
                pixmap.set(x, target_y, Gray::from_unit((d / range + 0.5) as f32));
            }
        }
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        let rows: Vec<(u32, Vec<Gray<T>>)> = (y0..y1)
            .into_par_iter()
            .map(|y| {
                let mut scratch = vec![0.0; shape.contours.len()];
                let target_y = mirrored_row(y, y0, y1, shape.inverse_y_axis);
                let row: Vec<Gray<T>> = (x0..x1)
                    .map(|x| {
                        let p = pixel_to_shape(x, y, scale, translate);
                        let d = evaluate_sdf(shape, &windings, &mut scratch, p);
                        Gray::from_unit((d / range + 0.5) as f32)
                    })
                    .collect();
                (target_y, row)
            })
            .collect();
        for (target_y, row) in rows {
            for (i, value) in row.into_iter().enumerate() {
                pixmap.set(x0 + i as u32, target_y, value);
            }
        }
    }
}

/// Pixel element able to receive an encoded MSDF `(r,g,b)` triple (alpha, if
/// any, is always left opaque — generators never touch it).
pub trait FromMsdfTriple: Copy {
    fn from_msdf(r: f32, g: f32, b: f32) -> Self;
}

impl<T: FromUnit> FromMsdfTriple for Rgb<T> {
    fn from_msdf(r: f32, g: f32, b: f32) -> Self {
        Rgb::from_unit(r, g, b)
    }
}

impl<T: FromUnit> FromMsdfTriple for Rgba<T> {
    fn from_msdf(r: f32, g: f32, b: f32) -> Self {
        Rgba::from_unit(r, g, b, 1.0)
    }
}

/// Write the multi-channel field for `shape` into `pixmap` over `region`.
/// `shape` must already have been colored ([`crate::algorithms::coloring::color_edges_simple`]).
pub fn generate_msdf<T: FromMsdfTriple + Send>(
    pixmap: &mut Pixmap<T>,
    shape: &Shape,
    region: PixelRegion,
    range: f64,
    scale: Vector2,
    translate: Vector2,
) {
    let (x0, x1, y0, y1) = region.clip(pixmap.width(), pixmap.height());
    if x0 >= x1 || y0 >= y1 {
        return;
    }
    let windings = compute_windings(shape);
    log::debug!(
        "generate_msdf: region=({x0},{y0})..({x1},{y1}) contours={} range={range}",
        shape.contours.len()
    );

    #[cfg(not(feature = "parallel"))]
    {
        let mut scratch = vec![MultiDistance::default(); shape.contours.len()];
        for y in y0..y1 {
            let target_y = mirrored_row(y, y0, y1, shape.inverse_y_axis);
            for x in x0..x1 {
                let p = pixel_to_shape(x, y, scale, translate);
                let msd = evaluate_msdf(shape, &windings, &mut scratch, p);
                let r = (msd.r / range + 0.5) as f32;
                let g = (msd.g / range + 0.5) as f32;
                let b = (msd.b / range + 0.5) as f32;
                pixmap.set(x, target_y, T::from_msdf(r, g, b));
            }
        }
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        let rows: Vec<(u32, Vec<T>)> = (y0..y1)
            .into_par_iter()
            .map(|y| {
                let mut scratch = vec![MultiDistance::default(); shape.contours.len()];
                let target_y = mirrored_row(y, y0, y1, shape.inverse_y_axis);
                let row: Vec<T> = (x0..x1)
                    .map(|x| {
                        let p = pixel_to_shape(x, y, scale, translate);
                        let msd = evaluate_msdf(shape, &windings, &mut scratch, p);
                        let r = (msd.r / range + 0.5) as f32;
                        let g = (msd.g / range + 0.5) as f32;
                        let b = (msd.b / range + 0.5) as f32;
                        T::from_msdf(r, g, b)
                    })
                    .collect();
                (target_y, row)
            })
            .collect();
        for (target_y, row) in rows {
            for (i, value) in row.into_iter().enumerate() {
                pixmap.set(x0 + i as u32, target_y, value);
            }
        }
    }
}

/// In-place MSDF touch-up over `region` (spec.md §4.7).
pub fn correct_errors<T: RgbaChannels>(pixmap: &mut Pixmap<T>, region: PixelRegion, threshold: ClashThreshold) {
    let (x0, x1, y0, y1) = region.clip(pixmap.width(), pixmap.height());
    if x0 >= x1 || y0 >= y1 {
        return;
    }
    error_correction::correct_errors(pixmap, (x0, y0, x1, y1), threshold);
}
