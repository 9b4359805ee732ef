//! Contour polygon type and metrics

use std::f64::consts::PI;

/// Axis-aligned bounding box of a contour, in (row, col) grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Topmost row
    pub row: usize,
    /// Leftmost column
    pub col: usize,
    /// Number of rows covered
    pub height: usize,
    /// Number of columns covered
    pub width: usize,
}

/// External boundary polygon of one connected foreground region.
///
/// Points are boundary cells in (row, col) order as produced by
/// Moore-neighbor tracing; the polygon is implicitly closed. Ephemeral:
/// derived per call, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    points: Vec<(usize, usize)>,
}

impl Contour {
    /// Build a contour from an ordered boundary point list.
    pub fn new(points: Vec<(usize, usize)>) -> Self {
        Self { points }
    }

    /// Ordered boundary points, (row, col).
    pub fn points(&self) -> &[(usize, usize)] {
        &self.points
    }

    /// Number of boundary points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the contour has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Enclosed area by the shoelace formula over the closed polygon.
    ///
    /// Degenerate contours (fewer than 3 distinct points) enclose zero area.
    pub fn area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let mut acc = 0.0f64;
        let n = self.points.len();
        for i in 0..n {
            let (r1, c1) = self.points[i];
            let (r2, c2) = self.points[(i + 1) % n];
            acc += c1 as f64 * r2 as f64 - c2 as f64 * r1 as f64;
        }
        acc.abs() / 2.0
    }

    /// Closed boundary length: sum of segment lengths including the closing
    /// segment back to the first point.
    pub fn perimeter(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        let n = self.points.len();
        let mut acc = 0.0f64;
        for i in 0..n {
            let (r1, c1) = self.points[i];
            let (r2, c2) = self.points[(i + 1) % n];
            let dr = r1 as f64 - r2 as f64;
            let dc = c1 as f64 - c2 as f64;
            acc += (dr * dr + dc * dc).sqrt();
        }
        acc
    }

    /// Axis-aligned bounding box. `None` for an empty contour.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let (first_r, first_c) = *self.points.first()?;
        let mut min_r = first_r;
        let mut max_r = first_r;
        let mut min_c = first_c;
        let mut max_c = first_c;
        for &(r, c) in &self.points {
            min_r = min_r.min(r);
            max_r = max_r.max(r);
            min_c = min_c.min(c);
            max_c = max_c.max(c);
        }
        Some(BoundingBox {
            row: min_r,
            col: min_c,
            height: max_r - min_r + 1,
            width: max_c - min_c + 1,
        })
    }

    /// Circularity `4π·area / perimeter²`: 1.0 for a perfect circle,
    /// lower for elongated or irregular shapes. Zero-perimeter contours
    /// have circularity 0.
    pub fn circularity(&self) -> f64 {
        let p = self.perimeter();
        if p == 0.0 {
            return 0.0;
        }
        4.0 * PI * self.area() / (p * p)
    }
}
