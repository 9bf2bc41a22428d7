//! Randomized free packing with collision avoidance.
//!
//! For each symbol, in card order, up to `max_attempts` candidate centres are
//! sampled in polar coordinates: a uniform angle and a uniform radius. A
//! uniform radius clusters candidates toward the centre rather than spreading
//! them evenly over the disc; layouts depend on that distribution, so it is
//! kept as is.
//!
//! A candidate is accepted when its square footprint lies inside the circle
//! and does not overlap anything already placed. When every attempt fails the
//! card's working size shrinks by [`SHRINK_STEP`] and the attempts repeat,
//! down to sizes above [`MIN_SYMBOL_SIZE`]. The shrunk size carries over to
//! the remaining symbols of the card. A symbol that fails at every size is
//! dropped and reported in [`PackingOutcome::dropped`].
//!
//! Only a non-finite or non-positive geometry is an error.
//!
//! ```
//! use spot_it::core::{LayoutRng, SymbolId};
//! use spot_it::layout::{FreePacking, Point};
//!
//! let packing = FreePacking::new(Point::new(250.0, 250.0), 230.0, 80.0);
//! let symbols = [SymbolId(0), SymbolId(1), SymbolId(2)];
//!
//! let outcome = packing.layout(&symbols, &mut LayoutRng::new(42)).unwrap();
//! assert_eq!(outcome.placements.len() + outcome.dropped.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

use super::collision::CollisionIndex;
use super::geometry::{BoundingBox, Point};
use super::placement::Placement;
use crate::core::config::{DEFAULT_MAX_ATTEMPTS, MIN_SYMBOL_SIZE, SHRINK_STEP};
use crate::core::{LayoutRng, SymbolId};
use crate::error::{Result, SpotError};

/// Free packing parameters for one circular canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FreePacking {
    /// Canvas centre.
    pub center: Point,
    /// Every box corner must stay within this distance of the centre.
    pub radius: f64,
    /// Starting symbol edge length.
    pub symbol_size: f64,
    /// Attempts per size step.
    pub max_attempts: u32,
}

/// Result of laying out one card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PackingOutcome {
    /// Committed placements, in card order.
    pub placements: Vec<Placement>,
    /// Symbols that could not be placed at any size.
    pub dropped: Vec<SymbolId>,
    /// Working size when the card finished.
    pub final_size: f64,
}

impl PackingOutcome {
    /// Every symbol of the card was placed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }
}

impl FreePacking {
    #[must_use]
    pub fn new(center: Point, radius: f64, symbol_size: f64) -> Self {
        Self {
            center,
            radius,
            symbol_size,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Reject geometry the sampler cannot draw from.
    pub fn validate(&self) -> Result<()> {
        let finite = [self.center.x, self.center.y, self.radius, self.symbol_size]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(SpotError::InvalidConfig(format!(
                "free packing needs finite geometry (radius {}, symbol size {})",
                self.radius, self.symbol_size
            )));
        }
        if self.radius < 0.0 || self.symbol_size <= 0.0 {
            return Err(SpotError::InvalidConfig(format!(
                "free packing radius {} and symbol size {} must be positive",
                self.radius, self.symbol_size
            )));
        }
        Ok(())
    }

    /// Place `symbols` on a fresh card.
    pub fn layout(&self, symbols: &[SymbolId], rng: &mut LayoutRng) -> Result<PackingOutcome> {
        self.validate()?;
        let mut index = CollisionIndex::new();
        let mut placements = Vec::with_capacity(symbols.len());
        let mut dropped = Vec::new();
        let mut current_size = self.symbol_size;

        for &symbol in symbols {
            let mut placed = self.try_place(current_size, &index, rng);

            if placed.is_none() {
                let mut size = current_size - SHRINK_STEP;
                while size > MIN_SYMBOL_SIZE {
                    current_size = size;
                    placed = self.try_place(size, &index, rng);
                    if placed.is_some() {
                        break;
                    }
                    size -= SHRINK_STEP;
                }
            }

            match placed {
                Some(center) => {
                    let placement = Placement::new(symbol, center, 0.0, current_size);
                    index.accept(placement.bounds());
                    placements.push(placement);
                }
                None => {
                    log::warn!(
                        "no room for {} after shrinking to {}px; card continues without it",
                        symbol,
                        current_size
                    );
                    dropped.push(symbol);
                }
            }
        }

        log::debug!(
            "packed {}/{} symbols, final size {}",
            placements.len(),
            symbols.len(),
            current_size
        );
        Ok(PackingOutcome {
            placements,
            dropped,
            final_size: current_size,
        })
    }

    /// Up to `max_attempts` random candidates at one size.
    fn try_place(
        &self,
        size: f64,
        index: &CollisionIndex,
        rng: &mut LayoutRng,
    ) -> Option<Point> {
        for _ in 0..self.max_attempts {
            let angle = rng.angle();
            let r = rng.up_to(self.radius);
            let center = Point::polar(self.center, r, angle);
            let candidate = BoundingBox::square(center, size);

            if !candidate.within_circle(self.center, self.radius) {
                continue;
            }
            if index.overlaps(&candidate) {
                continue;
            }
            return Some(center);
        }
        None
    }
}
