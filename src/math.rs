//! Scalar kernels shared by the rest of the engine.
//!
//! Everything here is a pure function of its arguments: median of three,
//! non-zero sign, the 2-D cross product, and the quadratic/cubic real-root
//! solvers the edge-distance routines build on.

/// `median3(a,b,c) = max(min(a,b), min(max(a,b), c))`.
///
/// Always returns one of `a`, `b`, `c`, and the result lies numerically
/// between the other two.
pub fn median3(a: f64, b: f64, c: f64) -> f64 {
    a.max(b.min(c)).min(b.max(c))
}

/// `+1` for non-negative `x` (including zero), `-1` otherwise.
///
/// Unlike [`f64::signum`], zero maps to `+1` rather than `+0.0` — callers
/// rely on a strictly two-valued sign to avoid degenerate branches.
pub fn non_zero_sign(x: f64) -> f64 {
    if x >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// 2-D cross product `a.x*b.y - a.y*b.x` of two `(x, y)` pairs.
pub fn cross2(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}

/// Solve `a*x^2 + b*x + c = 0`, returning the real roots in ascending order.
///
/// Degenerates to the linear/constant cases when `|a|` (and then `|b|`) is
/// negligible; a constant equation with `c != 0` has no solutions.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a.abs() < 1e-14 {
        if b.abs() < 1e-14 {
            return Vec::new();
        }
        return vec![-c / b];
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant > 0.0 {
        let sqrt_d = discriminant.sqrt();
        let mut roots = [(-b - sqrt_d) / (2.0 * a), (-b + sqrt_d) / (2.0 * a)];
        roots.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));
        roots.to_vec()
    } else if discriminant == 0.0 {
        vec![-b / (2.0 * a)]
    } else {
        Vec::new()
    }
}

/// Solve the depressed cubic `t^3 + a*t^2 + b*t + c = 0` via Cardano's
/// method in its trigonometric form when three real roots exist.
pub fn solve_cubic_normed(a: f64, b: f64, c: f64) -> Vec<f64> {
    let a2 = a * a;
    let q = (a2 - 3.0 * b) / 9.0;
    let r = (a * (2.0 * a2 - 9.0 * b) + 27.0 * c) / 54.0;
    let q3 = q * q * q;

    if r * r < q3 {
        let t = (r / q3.sqrt()).clamp(-1.0, 1.0).acos();
        let sqrt_q = q.sqrt();
        let third_a = a / 3.0;
        vec![
            -2.0 * sqrt_q * (t / 3.0).cos() - third_a,
            -2.0 * sqrt_q * ((t + 2.0 * std::f64::consts::PI) / 3.0).cos() - third_a,
            -2.0 * sqrt_q * ((t - 2.0 * std::f64::consts::PI) / 3.0).cos() - third_a,
        ]
    } else {
        let big_a = -non_zero_sign(r) * (r.abs() + (r * r - q3).sqrt()).cbrt();
        let big_b = if big_a == 0.0 { 0.0 } else { q / big_a };
        let third_a = a / 3.0;
        let real1 = (big_a + big_b) - third_a;
        let real2 = -0.5 * (big_a + big_b) - third_a;
        let imag = 0.5 * 3f64.sqrt() * (big_a - big_b);
        if imag.abs() < 1e-14 {
            vec![real1, real2]
        } else {
            vec![real1]
        }
    }
}

/// Solve `a*t^3 + b*t^2 + c*t + d = 0`. Falls back to [`solve_quadratic`]
/// when `a` is negligible.
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Vec<f64> {
    if a.abs() < 1e-14 {
        return solve_quadratic(b, c, d);
    }
    solve_cubic_normed(b / a, c / a, d / a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residual_ok(roots: &[f64], coeffs: &[f64]) -> bool {
        let scale = coeffs.iter().fold(0.0_f64, |m, &c| m.max(c.abs())).max(1.0);
        roots.iter().all(|&t| {
            let mut v = 0.0;
            let mut p = 1.0;
            for &c in coeffs.iter().rev() {
                v += c * p;
                p *= t;
            }
            v.abs() < 1e-6 * scale
        })
    }

    #[test]
    fn median3_returns_middle_value() {
        assert_eq!(median3(1.0, 2.0, 3.0), 2.0);
        assert_eq!(median3(3.0, 2.0, 1.0), 2.0);
        assert_eq!(median3(2.0, 2.0, 2.0), 2.0);
        assert_eq!(median3(-5.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn non_zero_sign_treats_zero_as_positive() {
        assert_eq!(non_zero_sign(0.0), 1.0);
        assert_eq!(non_zero_sign(-0.0), 1.0);
        assert_eq!(non_zero_sign(5.0), 1.0);
        assert_eq!(non_zero_sign(-5.0), -1.0);
    }

    #[test]
    fn quadratic_two_roots() {
        // (x-1)(x-3) = x^2 - 4x + 3
        let roots = solve_quadratic(1.0, -4.0, 3.0);
        assert_eq!(roots.len(), 2);
        assert!((roots[0] - 1.0).abs() < 1e-9);
        assert!((roots[1] - 3.0).abs() < 1e-9);
        assert!(residual_ok(&roots, &[1.0, -4.0, 3.0]));
    }

    #[test]
    fn quadratic_no_real_roots() {
        let roots = solve_quadratic(1.0, 0.0, 1.0);
        assert!(roots.is_empty());
    }

    #[test]
    fn quadratic_degenerate_to_linear() {
        let roots = solve_quadratic(0.0, 2.0, -4.0);
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn cubic_three_real_roots() {
        // (t+1)(t-1)(t-2) = t^3 - 2t^2 - t + 2
        let roots = solve_cubic(1.0, -2.0, -1.0, 2.0);
        assert_eq!(roots.len(), 3);
        assert!(residual_ok(&roots, &[1.0, -2.0, -1.0, 2.0]));
    }

    #[test]
    fn cubic_one_real_root() {
        // t^3 + t + 1 has a single real root (negative discriminant branch)
        let roots = solve_cubic(1.0, 0.0, 1.0, 1.0);
        assert_eq!(roots.len(), 1);
        assert!(residual_ok(&roots, &[1.0, 0.0, 1.0, 1.0]));
    }
}
