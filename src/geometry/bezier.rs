use std::sync::Arc;

use crate::foundation::core::{Point, Vec2};

/// Nominal segment count for arc-length sampling.
///
/// The cumulative table holds `ARC_SEGMENTS + 2` entries including both
/// endpoints, matching the reference sampling resolution.
const ARC_SEGMENTS: usize = 100;

/// A cubic Bezier curve with precomputed arc-length parametrization.
///
/// Construction is two-phase: control points go in, [`CubicBezier::new`]
/// derives the polynomial coefficients and freezes the cumulative arc-length
/// table. The curve is immutable afterwards; [`CubicBezier::translated`]
/// produces a shifted copy that shares the table, since translation never
/// changes shape or length.
#[derive(Clone, Debug)]
pub struct CubicBezier {
    /// Start point.
    pub p0: Point,
    /// First control point.
    pub p1: Point,
    /// Second control point.
    pub p2: Point,
    /// End point.
    pub p3: Point,
    a: Vec2,
    b: Vec2,
    c: Vec2,
    d: Vec2,
    arc_lengths: Arc<Vec<f64>>,
}

impl CubicBezier {
    /// Build a curve from four control points, computing coefficients and the
    /// arc-length table once.
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        let mut curve = Self::with_table(p0, p1, p2, p3, Arc::new(Vec::new()));
        curve.arc_lengths = Arc::new(curve.sample_arc_lengths());
        curve
    }

    fn with_table(p0: Point, p1: Point, p2: Point, p3: Point, table: Arc<Vec<f64>>) -> Self {
        let (v0, v1, v2, v3) = (p0.to_vec2(), p1.to_vec2(), p2.to_vec2(), p3.to_vec2());
        Self {
            p0,
            p1,
            p2,
            p3,
            a: v3 - v2 * 3.0 + v1 * 3.0 - v0,
            b: v2 * 3.0 - v1 * 6.0 + v0 * 3.0,
            c: v1 * 3.0 - v0 * 3.0,
            d: v0,
            arc_lengths: table,
        }
    }

    /// Point on the curve at parameter `t`.
    ///
    /// `evaluate(0)` is the start point and `evaluate(1)` the end point.
    /// Behavior outside `[0, 1]` is unspecified; callers clamp.
    pub fn evaluate(&self, t: f64) -> Point {
        let v = self.a * (t * t * t) + self.b * (t * t) + self.c * t + self.d;
        v.to_point()
    }

    /// Derivative vector at parameter `t`.
    pub fn tangent(&self, t: f64) -> Vec2 {
        self.a * (3.0 * t * t) + self.b * (2.0 * t) + self.c
    }

    /// Total arc length, the final entry of the cumulative table.
    pub fn length(&self) -> f64 {
        self.arc_lengths.last().copied().unwrap_or(0.0)
    }

    /// Cumulative arc-length table, monotonically non-decreasing from 0.
    pub fn arc_lengths(&self) -> &[f64] {
        &self.arc_lengths
    }

    /// Map a normalized arc-length fraction `u` in `[0, 1]` back to the
    /// curve parameter `t` whose arc length from the start is approximately
    /// `u * length()`.
    ///
    /// Scans the cumulative table for the last entry below the target and
    /// interpolates linearly between the bracketing entries. Zero-length
    /// curves return 0.
    pub fn parametrize(&self, u: f64) -> f64 {
        let table = &self.arc_lengths;
        let n = table.len();
        if n < 2 || self.length() <= 0.0 {
            return 0.0;
        }
        let target = u * table[n - 1];

        let mut index = 0;
        for (i, &v) in table.iter().enumerate().take(n - 1) {
            if v < target {
                index = i;
            }
        }

        if table[index] == target {
            return index as f64 / (n - 1) as f64;
        }

        let below = table[index];
        let above = table[index + 1];
        let seg = above - below;
        let frac = if seg > 0.0 { (target - below) / seg } else { 0.0 };
        (index as f64 + frac) / (n - 1) as f64
    }

    /// Translate the curve by `offset`, rebuilding coefficients from the
    /// shifted control points.
    ///
    /// The cached arc-length table is shared with the original curve: a
    /// translation is rigid, so shape and length are unchanged and the table
    /// must not be recomputed or discarded.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::with_table(
            self.p0 + offset,
            self.p1 + offset,
            self.p2 + offset,
            self.p3 + offset,
            Arc::clone(&self.arc_lengths),
        )
    }

    fn sample_arc_lengths(&self) -> Vec<f64> {
        let max = ARC_SEGMENTS + 1;
        let mut table = Vec::with_capacity(max + 1);
        table.push(0.0);
        let mut prev = self.evaluate(0.0);
        let mut sum = 0.0;
        for i in 1..=max {
            let p = self.evaluate(i as f64 / max as f64);
            sum += prev.distance(p);
            prev = p;
            table.push(sum);
        }
        table
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/bezier.rs"]
mod tests;
