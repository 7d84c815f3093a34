//! Clash detection and collapse: finds neighbouring pixel pairs whose MSDF
//! encoding would decode to an interpolation artefact and flattens them to
//! a plain (non-multi-channel) distance.

use crate::pixmap::{Pixmap, RgbaChannels};
use std::collections::HashSet;

/// Per-axis clash threshold: `x` gates horizontal-neighbour comparisons,
/// `y` gates vertical-neighbour comparisons (spec.md §4.7's "threshold
/// vector").
#[derive(Debug, Clone, Copy)]
pub struct ClashThreshold {
    pub x: f64,
    pub y: f64,
}

impl ClashThreshold {
    pub fn uniform(t: f64) -> Self {
        Self { x: t, y: t }
    }
}

fn is_inside(c: [f32; 3]) -> bool {
    c.iter().filter(|&&v| v > 0.5).count() >= 2
}

/// All three channels strictly on the same side of 0.5.
fn is_uniform(c: [f32; 3]) -> bool {
    let all_above = c.iter().all(|&v| v > 0.5);
    let all_below = c.iter().all(|&v| v < 0.5);
    all_above || all_below
}

fn straddles(a: f32, b: f32) -> bool {
    (a > 0.5 && b < 0.5) || (a < 0.5 && b > 0.5)
}

/// Tests one majority-pair/minority-channel partition of the three
/// channels. `maj` indexes the two channels required to straddle 0.5 and
/// differ by at least `threshold`; `min_idx` is the remaining channel,
/// which must be no farther from 0.5 on `a` than it is on `b`.
fn partition_clashes(a: [f32; 3], b: [f32; 3], maj: [usize; 2], min_idx: usize, threshold: f64) -> bool {
    let (m0, m1) = (maj[0], maj[1]);
    if !straddles(a[m0], b[m0]) || !straddles(a[m1], b[m1]) {
        return false;
    }
    if ((a[m0] - b[m0]).abs() as f64) < threshold || ((a[m1] - b[m1]).abs() as f64) < threshold {
        return false;
    }
    let ac = (a[min_idx] - 0.5).abs();
    let bc = (b[min_idx] - 0.5).abs();
    ac >= bc
}

/// Whether pixels `a` and `b` (already-decoded `[R,G,B]` triples in
/// `[0,1]`) clash under `threshold` (spec.md §4.7).
fn clashes(a: [f32; 3], b: [f32; 3], threshold: f64) -> bool {
    if is_inside(a) != is_inside(b) {
        return false;
    }
    if is_uniform(a) || is_uniform(b) {
        return false;
    }
    partition_clashes(a, b, [0, 1], 2, threshold)
        || partition_clashes(a, b, [0, 2], 1, threshold)
        || partition_clashes(a, b, [1, 2], 0, threshold)
}

fn rgb(pixel: &impl RgbaChannels) -> [f32; 3] {
    let (r, g, b, _a) = pixel.channels();
    [r, g, b]
}

/// Scan `region = (x0, y0, x1, y1)` (already clipped by the caller) for
/// four-neighbour clashes and collapse every flagged pixel's `(R,G,B)` to
/// `(m,m,m)` with `m = median3(R,G,B)`. Alpha is untouched. Detection runs
/// to completion before any pixel is mutated so collapsing one pixel can't
/// spuriously trigger or suppress a clash elsewhere in the same pass.
pub fn correct_errors<T: RgbaChannels>(pixmap: &mut Pixmap<T>, region: (u32, u32, u32, u32), threshold: ClashThreshold) {
    let (x0, y0, x1, y1) = region;
    let mut flagged: HashSet<(u32, u32)> = HashSet::new();

    for y in y0..y1 {
        for x in x0..x1 {
            let here = rgb(&pixmap.get(x, y));
            if x + 1 < x1 {
                let right = rgb(&pixmap.get(x + 1, y));
                if clashes(here, right, threshold.x) {
                    flagged.insert((x, y));
                    flagged.insert((x + 1, y));
                }
            }
            if y + 1 < y1 {
                let below = rgb(&pixmap.get(x, y + 1));
                if clashes(here, below, threshold.y) {
                    flagged.insert((x, y));
                    flagged.insert((x, y + 1));
                }
            }
        }
    }

    log::debug!("correct_errors: {} pixel(s) flagged in region {:?}", flagged.len(), region);

    for (x, y) in flagged {
        let mut pixel = pixmap.get(x, y);
        let [r, g, b] = rgb(&pixel);
        let m = crate::math::median3(r as f64, g as f64, b as f64) as f32;
        pixel.set_rgb(m, m, m);
        pixmap.set(x, y, pixel);
    }
}
