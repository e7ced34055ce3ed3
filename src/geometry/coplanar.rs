// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use log::trace;

use crate::{
    geometry::{
        plane::Plane,
        point::Point3,
        point_2::{Point2, orient2d},
        segment::Segment3,
        tri_tri_intersect::Contact,
        triangle::Triangle,
    },
    numeric::Tolerance,
};

/// Common set of two triangles lying in one plane.
#[derive(Clone, Debug, PartialEq)]
pub enum CoplanarOverlap {
    Disjoint,
    /// The common set has no area.
    Touching(Contact),
    /// Convex polygon of non-zero area, counter-clockwise in the
    /// projection plane.
    Region(Vec<Point3>),
}

/// Drops the axis the normal is best aligned with and maps 2D points back
/// onto the plane.
struct Projection<'a> {
    plane: &'a Plane,
    i0: usize,
    i1: usize,
    drop: usize,
}

impl<'a> Projection<'a> {
    fn new(plane: &'a Plane) -> Self {
        let drop = plane.normal().dominant_axis();
        let (i0, i1) = match drop {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        };
        Projection {
            plane,
            i0,
            i1,
            drop,
        }
    }

    fn to_2d(&self, p: &Point3) -> Point2 {
        Point2::new(p[self.i0], p[self.i1])
    }

    /// Solves the plane equation for the dropped coordinate.
    fn to_3d(&self, p: &Point2) -> Point3 {
        let n = self.plane.normal();
        let c = -self.plane.offset();
        let mut coords = [0.0; 3];
        coords[self.i0] = p.x;
        coords[self.i1] = p.y;
        coords[self.drop] =
            (c - n.component(self.i0) * p.x - n.component(self.i1) * p.y) / n.component(self.drop);
        Point3::from_vals(coords)
    }
}

/// Return true if `p` lies inside or on the boundary of `tri`, allowing `eps`
/// of slack across every edge.
pub fn point_in_tri_2d(p: &Point2, tri: &[Point2; 3], tol: &Tolerance) -> bool {
    let ccw = orient2d(&tri[0], &tri[1], &tri[2]) >= 0.0;
    for k in 0..3 {
        let (a, b) = if ccw {
            (&tri[k], &tri[(k + 1) % 3])
        } else {
            (&tri[(k + 1) % 3], &tri[k])
        };
        let len = a.distance_to(b);
        if len == 0.0 {
            return false;
        }
        // signed distance of p to the edge line, positive inside
        if orient2d(a, b, p) / len <= -tol.eps() {
            return false;
        }
    }
    true
}

/// If segments [a0→a1] and [b0→b1] intersect in 2D, return the common part
/// as a pair of endpoints (equal when they cross at a single point).
pub fn segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    tol: &Tolerance,
) -> Option<(Point2, Point2)> {
    let da = [a1.x - a0.x, a1.y - a0.y];
    let db = [b1.x - b0.x, b1.y - b0.y];
    let len_a = da[0].hypot(da[1]);
    let len_b = db[0].hypot(db[1]);
    if len_a == 0.0 || len_b == 0.0 {
        return None;
    }
    let diff = [b0.x - a0.x, b0.y - a0.y];
    let denom = da[0] * db[1] - da[1] * db[0];

    if denom.abs() <= tol.eps() * len_a * len_b {
        // parallel; only collinear segments can share points
        let offset = (diff[0] * da[1] - diff[1] * da[0]) / len_a;
        if !tol.is_zero(offset) {
            return None;
        }
        let len2 = len_a * len_a;
        let t0 = (diff[0] * da[0] + diff[1] * da[1]) / len2;
        let t1 = ((b1.x - a0.x) * da[0] + (b1.y - a0.y) * da[1]) / len2;
        let (tmin, tmax) = if t0 < t1 { (t0, t1) } else { (t1, t0) };
        let slack = tol.eps() / len_a;
        if tmin > 1.0 + slack || tmax < -slack {
            return None;
        }
        let start = tmin.max(0.0);
        let end = tmax.min(1.0);
        if start > end {
            // touching within slack at an endpoint
            let t = start.min(1.0).max(0.0);
            let p = a0.lerp(a1, t);
            return Some((p, p));
        }
        return Some((a0.lerp(a1, start), a0.lerp(a1, end)));
    }

    let s = (diff[0] * db[1] - diff[1] * db[0]) / denom;
    let u = (diff[0] * da[1] - diff[1] * da[0]) / denom;
    let slack_a = tol.eps() / len_a;
    let slack_b = tol.eps() / len_b;
    if s >= -slack_a && s <= 1.0 + slack_a && u >= -slack_b && u <= 1.0 + slack_b {
        let p = a0.lerp(a1, s.clamp(0.0, 1.0));
        return Some((p, p));
    }
    None
}

/// Indices of the convex hull of `pts` (monotone chain), counter-clockwise.
/// Collinear points on the hull boundary are dropped.
pub fn convex_hull_2d_indices(pts: &[Point2]) -> Vec<usize> {
    let n = pts.len();
    if n < 3 {
        return (0..n).collect();
    }

    let mut idxs: Vec<usize> = (0..n).collect();
    idxs.sort_by(|&i, &j| {
        pts[i]
            .x
            .total_cmp(&pts[j].x)
            .then_with(|| pts[i].y.total_cmp(&pts[j].y))
    });

    let mut lower: Vec<usize> = Vec::new();
    for &i in &idxs {
        while lower.len() >= 2
            && orient2d(
                &pts[lower[lower.len() - 2]],
                &pts[lower[lower.len() - 1]],
                &pts[i],
            ) <= 0.0
        {
            lower.pop();
        }
        lower.push(i);
    }

    let mut upper: Vec<usize> = Vec::new();
    for &i in idxs.iter().rev() {
        while upper.len() >= 2
            && orient2d(
                &pts[upper[upper.len() - 2]],
                &pts[upper[upper.len() - 1]],
                &pts[i],
            ) <= 0.0
        {
            upper.pop();
        }
        upper.push(i);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Twice the area of a simple polygon (shoelace), positive when counter-clockwise.
fn polygon_area2(poly: &[Point2]) -> f64 {
    (0..poly.len())
        .map(|k| {
            let a = &poly[k];
            let b = &poly[(k + 1) % poly.len()];
            a.x * b.y - b.x * a.y
        })
        .sum()
}

/// Indices of the two points farthest apart.
fn farthest_pair(pts: &[Point2]) -> (usize, usize) {
    let mut best = (0, 0);
    let mut best_d = -1.0;
    for i in 0..pts.len() {
        for j in (i + 1)..pts.len() {
            let d = pts[i].distance_to(&pts[j]);
            if d > best_d {
                best_d = d;
                best = (i, j);
            }
        }
    }
    best
}

/// 2D overlap test for two triangles known to lie in `plane`.
///
/// Collects the vertices of each triangle that lie in the other plus every
/// edge-edge crossing; the common set is the convex hull of those points.
pub fn coplanar_tri_tri_intersection(
    t0: &Triangle,
    t1: &Triangle,
    plane: &Plane,
    tol: &Tolerance,
) -> CoplanarOverlap {
    let proj = Projection::new(plane);
    let p = t0.vertices().map(|v| proj.to_2d(&v));
    let q = t1.vertices().map(|v| proj.to_2d(&v));

    let mut pts: Vec<Point2> = Vec::new();
    pts.extend(p.iter().filter(|v| point_in_tri_2d(v, &q, tol)));
    pts.extend(q.iter().filter(|v| point_in_tri_2d(v, &p, tol)));

    for a in 0..3 {
        for b in 0..3 {
            if let Some((s, e)) =
                segment_intersect_2d(&p[a], &p[(a + 1) % 3], &q[b], &q[(b + 1) % 3], tol)
            {
                pts.push(s);
                pts.push(e);
            }
        }
    }

    let mut uniq: Vec<Point2> = Vec::new();
    for pt in pts {
        if !uniq.iter().any(|u| u.approx_eq(&pt, tol)) {
            uniq.push(pt);
        }
    }
    trace!("coplanar: {} distinct contact points", uniq.len());

    match uniq.len() {
        0 => CoplanarOverlap::Disjoint,
        1 => CoplanarOverlap::Touching(Contact::Point(proj.to_3d(&uniq[0]))),
        _ => {
            let hull: Vec<Point2> = convex_hull_2d_indices(&uniq)
                .into_iter()
                .map(|i| uniq[i])
                .collect();
            let (i, j) = farthest_pair(&uniq);
            let span = uniq[i].distance_to(&uniq[j]);
            // a sliver thinner than eps has no area
            let thin = hull.len() < 3 || polygon_area2(&hull).abs() / span < tol.eps();
            if thin {
                let seg = Segment3::new(&proj.to_3d(&uniq[i]), &proj.to_3d(&uniq[j]));
                CoplanarOverlap::Touching(Contact::Segment(seg))
            } else {
                CoplanarOverlap::Region(hull.iter().map(|v| proj.to_3d(v)).collect())
            }
        }
    }
}
