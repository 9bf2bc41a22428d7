//! Per-card overlap tracking.
//!
//! A `CollisionIndex` holds the boxes already committed on one card. It is
//! created fresh for every card and dropped with the card's layout.

use super::geometry::BoundingBox;

/// Growing set of committed bounding boxes for one card.
#[derive(Clone, Debug, Default)]
pub struct CollisionIndex {
    boxes: Vec<BoundingBox>,
}

impl CollisionIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `candidate` overlaps any accepted box. Touching edges do not count.
    #[must_use]
    pub fn overlaps(&self, candidate: &BoundingBox) -> bool {
        self.boxes.iter().any(|b| b.intersects(candidate))
    }

    /// Commit a box. Callers check [`overlaps`](Self::overlaps) first.
    pub fn accept(&mut self, bounds: BoundingBox) {
        debug_assert!(!self.overlaps(&bounds), "accepted an overlapping box");
        self.boxes.push(bounds);
    }

    #[must_use]
    pub fn boxes(&self) -> &[BoundingBox] {
        &self.boxes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Forget every box, ready for the next card.
    pub fn clear(&mut self) {
        self.boxes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_never_overlaps() {
        let index = CollisionIndex::new();
        assert!(index.is_empty());
        assert!(!index.overlaps(&BoundingBox::new(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_touching_edge() {
        let mut index = CollisionIndex::new();
        index.accept(BoundingBox::new(0.0, 0.0, 10.0, 10.0));

        assert!(!index.overlaps(&BoundingBox::new(10.0, 0.0, 20.0, 10.0)));
        assert!(index.overlaps(&BoundingBox::new(5.0, 5.0, 15.0, 15.0)));
    }

    #[test]
    fn test_accept_and_clear() {
        let mut index = CollisionIndex::new();
        index.accept(BoundingBox::new(0.0, 0.0, 10.0, 10.0));
        index.accept(BoundingBox::new(20.0, 20.0, 30.0, 30.0));
        assert_eq!(index.len(), 2);
        assert!(index.overlaps(&BoundingBox::new(25.0, 25.0, 35.0, 35.0)));

        index.clear();
        assert!(index.is_empty());
        assert!(!index.overlaps(&BoundingBox::new(25.0, 25.0, 35.0, 35.0)));
    }
}
