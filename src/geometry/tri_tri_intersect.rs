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

use log::{debug, trace};

use crate::{
    error::GeometryError,
    geometry::{
        coplanar::{CoplanarOverlap, coplanar_tri_tri_intersection},
        interval::{Interval, IntervalOverlap},
        line::Line3,
        plane::Plane,
        point::Point3,
        segment::Segment3,
        triangle::Triangle,
    },
    numeric::{Sign, Tolerance},
};

/// Boundary contact between two triangles.
#[derive(Clone, Debug, PartialEq)]
pub enum Contact {
    Point(Point3),
    Segment(Segment3),
}

/// Penetrating intersection between two triangles.
#[derive(Clone, Debug, PartialEq)]
pub enum Overlap {
    /// Crossing planes: the part of the planes' common line inside both
    /// triangles. May collapse to a point when the triangles pierce each
    /// other exactly at an edge.
    Segment(Segment3),
    /// Coplanar triangles: convex polygon of the common area.
    Region(Vec<Point3>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum TriTriIntersectionResult {
    Disjoint,
    /// The triangles meet without either passing through the other.
    Touching(Contact),
    Overlapping(Overlap),
}

impl TriTriIntersectionResult {
    pub fn intersects(&self) -> bool {
        !matches!(self, TriTriIntersectionResult::Disjoint)
    }
}

/// Signed distances of a triangle's vertices to the other triangle's plane.
#[derive(Clone, Copy, Debug)]
struct VertexClassification {
    dist: [f64; 3],
    signs: [Sign; 3],
}

impl VertexClassification {
    fn new(t: &Triangle, plane: &Plane, tol: &Tolerance) -> Self {
        let dist = t.vertices().map(|v| plane.signed_distance(&v));
        let signs = dist.map(|d| tol.sign(d));
        VertexClassification { dist, signs }
    }

    /// Every vertex off the plane, all on the same side.
    fn strictly_one_side(&self) -> bool {
        self.signs.iter().all(|s| *s == Sign::Positive)
            || self.signs.iter().all(|s| *s == Sign::Negative)
    }

    /// Vertices on both sides of the plane.
    fn straddles(&self) -> bool {
        self.signs.contains(&Sign::Positive) && self.signs.contains(&Sign::Negative)
    }

    fn all_on_plane(&self) -> bool {
        self.signs.iter().all(|s| s.is_zero())
    }
}

/// Parameters along `line` where `t` meets the other plane: vertices lying
/// on it plus the crossing point of every edge whose ends are on opposite sides.
fn crossing_interval(t: &Triangle, c: &VertexClassification, line: &Line3) -> Option<Interval> {
    let v = t.vertices();
    let mut params = Vec::with_capacity(4);
    for k in 0..3 {
        if c.signs[k].is_zero() {
            params.push(line.parameter_of(&v[k]));
        }
    }
    for (i, j) in [(0, 1), (1, 2), (2, 0)] {
        if c.signs[i].opposes(c.signs[j]) {
            let s = c.dist[i] / (c.dist[i] - c.dist[j]);
            let p = v[i] + v[i].vector_to(&v[j]) * s;
            params.push(line.parameter_of(&p));
        }
    }
    Interval::from_values(params)
}

/// Decides whether triangles `t0` and `t1` intersect and describes how.
///
/// 1. Classify `t1` against `t0`'s plane; all on one side means disjoint.
/// 2. Classify `t0` against `t1`'s plane. Coincident planes, or either
///    triangle lying within `eps` of the other's plane, go through the 2D
///    overlap test.
/// 3. Parallel, distinct planes are disjoint unless a triangle straddles
///    the other's plane.
/// 4. `t0` all on one side of `t1`'s plane means disjoint.
/// 5. Otherwise each triangle's crossing of the other plane is an interval
///    on the planes' common line, and the triangles meet where the
///    intervals overlap.
///
/// A collinear triangle is reported as [`GeometryError::DegenerateTriangle`],
/// never as a disjoint pair.
pub fn tri_tri_intersection(
    t0: &Triangle,
    t1: &Triangle,
    tol: &Tolerance,
) -> Result<TriTriIntersectionResult, GeometryError> {
    let p0 = t0
        .plane(tol)
        .map_err(|_| GeometryError::DegenerateTriangle { which: 0 })?;
    let p1 = t1
        .plane(tol)
        .map_err(|_| GeometryError::DegenerateTriangle { which: 1 })?;

    let c1 = VertexClassification::new(t1, &p0, tol);
    trace!("t1 against p0: {:?}", c1.dist);
    if c1.strictly_one_side() {
        debug!("t1 lies strictly on one side of p0");
        return Ok(TriTriIntersectionResult::Disjoint);
    }

    let c0 = VertexClassification::new(t0, &p1, tol);
    trace!("t0 against p1: {:?}", c0.dist);

    let crossing = c0.straddles() || c1.straddles();
    if (p0.coincides_with(&p1, tol) && !crossing) || c0.all_on_plane() || c1.all_on_plane() {
        // project onto the plane the other triangle lies on
        let plane = if c1.all_on_plane() || !c0.all_on_plane() {
            &p0
        } else {
            &p1
        };
        debug!("coplanar triangles");
        return Ok(match coplanar_tri_tri_intersection(t0, t1, plane, tol) {
            CoplanarOverlap::Disjoint => TriTriIntersectionResult::Disjoint,
            CoplanarOverlap::Touching(c) => TriTriIntersectionResult::Touching(c),
            CoplanarOverlap::Region(poly) => {
                TriTriIntersectionResult::Overlapping(Overlap::Region(poly))
            }
        });
    }

    // nearly parallel planes can still cross inside large triangles
    if p0.is_parallel_to(&p1, tol) && !crossing {
        debug!("parallel, distinct planes");
        return Ok(TriTriIntersectionResult::Disjoint);
    }

    if c0.strictly_one_side() {
        debug!("t0 lies strictly on one side of p1");
        return Ok(TriTriIntersectionResult::Disjoint);
    }

    let Some(line) = p0.intersection_line(&p1, tol) else {
        debug!("planes reported crossing but share no line");
        return Ok(TriTriIntersectionResult::Disjoint);
    };
    // unit direction, so interval parameters are lengths comparable to eps
    let line = match line.direction.normalized() {
        Some(dir) => Line3::new(line.origin, dir),
        None => return Ok(TriTriIntersectionResult::Disjoint),
    };

    let (Some(i0), Some(i1)) = (
        crossing_interval(t0, &c0, &line),
        crossing_interval(t1, &c1, &line),
    ) else {
        return Ok(TriTriIntersectionResult::Disjoint);
    };
    trace!("intervals on common line: {i0:?} {i1:?}");

    let penetrating = c0.straddles() && c1.straddles();
    let result = match i0.overlap(&i1, tol) {
        IntervalOverlap::Disjoint => TriTriIntersectionResult::Disjoint,
        IntervalOverlap::Touching(t) => {
            let p = line.point_at(t);
            if penetrating {
                TriTriIntersectionResult::Overlapping(Overlap::Segment(Segment3::new(&p, &p)))
            } else {
                TriTriIntersectionResult::Touching(Contact::Point(p))
            }
        }
        IntervalOverlap::Overlapping(lo, hi) => {
            let seg = Segment3::new(&line.point_at(lo), &line.point_at(hi));
            if penetrating {
                TriTriIntersectionResult::Overlapping(Overlap::Segment(seg))
            } else {
                TriTriIntersectionResult::Touching(Contact::Segment(seg))
            }
        }
    };
    debug!("interval test: {result:?}");
    Ok(result)
}

/// `true` when the triangles share at least one point.
pub fn tri_tri_overlap(
    t0: &Triangle,
    t1: &Triangle,
    tol: &Tolerance,
) -> Result<bool, GeometryError> {
    Ok(tri_tri_intersection(t0, t1, tol)?.intersects())
}
