//! Edge coloring: partitions each contour into red/green/blue-labelled runs
//! meeting at detected corners, so neighbouring non-corner edges always
//! share two of the three channels.

use crate::algorithms::contour::Contour;
use crate::algorithms::edge_color::EdgeColor;
use crate::algorithms::edge_segment::EdgeSegment;
use crate::algorithms::shape::Shape;

const START_COLORS: [EdgeColor; 3] = [EdgeColor::CYAN, EdgeColor::MAGENTA, EdgeColor::YELLOW];

/// Assign every edge in `shape` a non-[`EdgeColor::BLACK`] label.
///
/// `angle_threshold` (radians) is the external-angle criterion below which a
/// direction change between adjacent edges counts as a corner; values below
/// `PI/2` are the usual choice. `seed` selects the initial color partition
/// deterministically — the same seed on the same shape always produces the
/// same coloring.
pub fn color_edges_simple(shape: &mut Shape, angle_threshold: f64, seed: u64) {
    log::debug!(
        "coloring {} contour(s), angle_threshold={angle_threshold:.4}, seed={seed}",
        shape.contours.len()
    );
    let cross_threshold = angle_threshold.sin();
    let mut seed = seed;
    for contour in &mut shape.contours {
        color_contour(contour, cross_threshold, &mut seed);
    }
}

fn is_corner(prev_dir: crate::geometry::Vector2, next_dir: crate::geometry::Vector2, cross_threshold: f64) -> bool {
    let u = prev_dir.normalize();
    let v = next_dir.normalize();
    u.dot(v) <= 0.0 || u.cross(v).abs() > cross_threshold
}

/// Indices of edges that start immediately after a detected corner.
fn find_corners(edges: &[EdgeSegment], cross_threshold: f64) -> Vec<usize> {
    let n = edges.len();
    let mut corners = Vec::new();
    for i in 0..n {
        let prev = &edges[(i + n - 1) % n];
        let cur = &edges[i];
        if is_corner(prev.direction(1.0), cur.direction(0.0), cross_threshold) {
            corners.push(i);
        }
    }
    corners
}

/// §4.5 `switchColor`: advance to a new non-`banned` color, consuming a
/// little of `seed`'s entropy on the way.
fn switch_color(color: EdgeColor, seed: &mut u64, banned: EdgeColor) -> EdgeColor {
    let combined = color & banned;
    if matches!(combined.bits(), 1 | 2 | 4) {
        return EdgeColor::from_bits_truncate(combined.bits() ^ EdgeColor::WHITE.bits());
    }
    if color == EdgeColor::BLACK || color == EdgeColor::WHITE {
        let next = START_COLORS[(*seed % 3) as usize];
        *seed /= 3;
        return next;
    }
    let shift = 1 + (*seed & 1);
    let shifted = (color.bits() as u32) << shift;
    let wrapped = (shifted | (shifted >> 3)) & EdgeColor::WHITE.bits() as u32;
    *seed >>= 1;
    EdgeColor::from_bits_truncate(wrapped as u8)
}

fn color_contour(contour: &mut Contour, cross_threshold: f64, seed: &mut u64) {
    let n = contour.edges.len();
    if n == 0 {
        return;
    }
    let corners = find_corners(&contour.edges, cross_threshold);
    match corners.len() {
        0 => {
            for edge in &mut contour.edges {
                edge.set_color(EdgeColor::WHITE);
            }
        }
        1 => color_one_corner(contour, corners[0], seed),
        _ => color_multi_corner(contour, &corners, seed),
    }
}

fn color_one_corner(contour: &mut Contour, corner: usize, seed: &mut u64) {
    let c1 = EdgeColor::WHITE;
    let c0 = switch_color(c1, seed, EdgeColor::BLACK);
    let mut c2 = switch_color(c0, seed, EdgeColor::BLACK);
    if c2 == c0 {
        c2 = switch_color(c2, seed, EdgeColor::BLACK);
    }

    let m = contour.edges.len();
    if m >= 3 {
        let colors = [c0, c1, c2];
        for j in 0..m {
            let idx = (corner + j) % m;
            let slot = (1 + magic(j, m)) as usize;
            contour.edges[idx].set_color(colors[slot]);
        }
        return;
    }

    // m is 1 or 2: a single detected corner implies this holds (spec.md §9).
    debug_assert!(corner == 0 || corner == 1);
    if m == 1 {
        let (mut a, mut b, mut c) = contour.edges[0].split_in_thirds();
        a.set_color(c0);
        b.set_color(c1);
        c.set_color(c2);
        contour.edges = vec![a, b, c];
        return;
    }

    let (a0, b0, c0_part) = contour.edges[0].split_in_thirds();
    let (a1, b1, c1_part) = contour.edges[1].split_in_thirds();
    let edge0_parts = [a0, b0, c0_part];
    let edge1_parts = [a1, b1, c1_part];
    let mut parts: [Option<EdgeSegment>; 6] = [None, None, None, None, None, None];
    for (k, part) in edge0_parts.into_iter().enumerate() {
        parts[(3 * corner + k) % 6] = Some(part);
    }
    for (k, part) in edge1_parts.into_iter().enumerate() {
        parts[(3 - 3 * corner + k) % 6] = Some(part);
    }
    let colors6 = [c0, c0, c1, c1, c2, c2];
    contour.edges = parts
        .into_iter()
        .enumerate()
        .map(|(i, part)| {
            let mut edge = part.expect("all six split parts populated");
            edge.set_color(colors6[i]);
            edge
        })
        .collect();
}

/// §4.5 `magic(j, m)`: maps edge offset `j` (of `m` total, walking from the
/// single corner) to one of `{-1, 0, +1}` selecting `c0`/`c1`/`c2`.
fn magic(j: usize, m: usize) -> i32 {
    let v = 3.0 + (2.875 * j as f64 / (m - 1) as f64) - 1.4375 + 0.5;
    (v.floor() as i32) - 3
}

fn color_multi_corner(contour: &mut Contour, corners: &[usize], seed: &mut u64) {
    let num_corners = corners.len();
    let m = contour.edges.len();
    let mut color = switch_color(EdgeColor::WHITE, seed, EdgeColor::BLACK);
    let initial = color;

    for (ci, &start_idx) in corners.iter().enumerate() {
        let end_idx = corners[(ci + 1) % num_corners];
        let mut idx = start_idx;
        loop {
            contour.edges[idx].set_color(color);
            idx = (idx + 1) % m;
            if idx == end_idx {
                break;
            }
        }
        if ci + 1 < num_corners {
            let banned = if ci + 2 == num_corners { initial } else { EdgeColor::BLACK };
            color = switch_color(color, seed, banned);
        }
    }
}
