//! Canvas-space geometry: points and axis-aligned boxes.
//!
//! Canvas coordinates grow right and down, with the origin at the top-left
//! corner of the card.

use serde::{Deserialize, Serialize};

/// A point in canvas coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `center` along `angle` radians.
    #[must_use]
    pub fn polar(center: Point, radius: f64, angle: f64) -> Self {
        Self {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    }

    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle `(x1, y1)`-`(x2, y2)` with `x1 <= x2`, `y1 <= y2`.
///
/// ```
/// use spot_it::layout::BoundingBox;
///
/// let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
/// let touching = BoundingBox::new(10.0, 0.0, 20.0, 10.0);
/// let crossing = BoundingBox::new(5.0, 5.0, 15.0, 15.0);
///
/// assert!(!a.intersects(&touching));
/// assert!(a.intersects(&crossing));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BoundingBox {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Square of side `edge` centred on `center`.
    #[must_use]
    pub fn square(center: Point, edge: f64) -> Self {
        let half = edge / 2.0;
        Self {
            x1: center.x - half,
            y1: center.y - half,
            x2: center.x + half,
            y2: center.y + half,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Top-left, top-right, bottom-left, bottom-right.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x1, self.y1),
            Point::new(self.x2, self.y1),
            Point::new(self.x1, self.y2),
            Point::new(self.x2, self.y2),
        ]
    }

    /// Interior overlap. Boxes that only share an edge or corner do not intersect.
    #[must_use]
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        !(self.x2 <= other.x1 || self.x1 >= other.x2 || self.y2 <= other.y1 || self.y1 >= other.y2)
    }

    /// All four corners lie within `radius` of `center`.
    #[must_use]
    pub fn within_circle(&self, center: Point, radius: f64) -> bool {
        self.corners().iter().all(|c| c.distance(center) <= radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square() {
        let b = BoundingBox::square(Point::new(50.0, 40.0), 20.0);
        assert_eq!(b, BoundingBox::new(40.0, 30.0, 60.0, 50.0));
        assert_eq!(b.width(), 20.0);
        assert_eq!(b.height(), 20.0);
        assert_eq!(b.center(), Point::new(50.0, 40.0));
    }

    #[test]
    fn test_intersects() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&BoundingBox::new(10.0, 0.0, 20.0, 10.0)));
        assert!(!a.intersects(&BoundingBox::new(0.0, 10.0, 10.0, 20.0)));
        assert!(!a.intersects(&BoundingBox::new(10.0, 10.0, 20.0, 20.0)));
        assert!(a.intersects(&BoundingBox::new(5.0, 5.0, 15.0, 15.0)));
        assert!(a.intersects(&BoundingBox::new(2.0, 2.0, 3.0, 3.0)));
        assert!(a.intersects(&a));
    }

    #[test]
    fn test_within_circle() {
        let center = Point::new(0.0, 0.0);
        let b = BoundingBox::square(center, 10.0);
        // Corner distance is 5·√2 ≈ 7.07
        assert!(b.within_circle(center, 7.1));
        assert!(!b.within_circle(center, 7.0));
    }

    #[test]
    fn test_polar() {
        let p = Point::polar(Point::new(100.0, 100.0), 50.0, std::f64::consts::FRAC_PI_2);
        assert!((p.x - 100.0).abs() < 1e-9);
        assert!((p.y - 150.0).abs() < 1e-9);
    }
}
