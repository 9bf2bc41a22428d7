//! One laid-out symbol instance.

use serde::{Deserialize, Serialize};

use super::geometry::{BoundingBox, Point};
use crate::core::SymbolId;

/// Position, size, and rotation of one symbol on one card.
///
/// `rotation_degrees` is counter-clockwise, the usual raster convention.
/// Placements are created per card and never shared between cards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub symbol: SymbolId,
    pub center_x: f64,
    pub center_y: f64,
    pub rotation_degrees: f64,
    pub edge_size: f64,
}

impl Placement {
    #[must_use]
    pub fn new(symbol: SymbolId, center: Point, rotation_degrees: f64, edge_size: f64) -> Self {
        Self {
            symbol,
            center_x: center.x,
            center_y: center.y,
            rotation_degrees,
            edge_size,
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Unrotated square footprint.
    #[must_use]
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::square(self.center(), self.edge_size)
    }

    /// Flattened `[symbol, x, y, rotation, size]` row for array consumers.
    #[must_use]
    pub fn to_row(&self) -> [f64; 5] {
        [
            f64::from(self.symbol.0),
            self.center_x,
            self.center_y,
            self.rotation_degrees,
            self.edge_size,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let p = Placement::new(SymbolId(3), Point::new(100.0, 120.0), 0.0, 40.0);
        assert_eq!(p.bounds(), BoundingBox::new(80.0, 100.0, 120.0, 140.0));
        assert_eq!(p.to_row(), [3.0, 100.0, 120.0, 0.0, 40.0]);
    }
}
