//! Deterministic layouts: circular and manual.
//!
//! Both compute positions analytically from per-symbol parameters and then
//! go through [`layout`], which zips the four parameter sequences into
//! placements. Neither checks for overlap: whoever supplies the parameters
//! is responsible for keeping symbols apart.

use serde::{Deserialize, Serialize};

use super::geometry::Point;
use super::overrides::SymbolOverride;
use super::placement::Placement;
use crate::core::{Canvas, SymbolId};
use crate::error::{Result, SpotError};

/// Rotation offset for symbols facing away from the centre.
pub const FACE_OUTWARD_DEGREES: f64 = 270.0;

/// Rotation offset for symbols facing the centre.
pub const FACE_INWARD_DEGREES: f64 = 90.0;

/// Zip per-symbol parameters into placements.
///
/// Every sequence must have exactly one entry per symbol; anything else is a
/// [`SpotError::LengthMismatch`].
///
/// ```
/// use spot_it::core::SymbolId;
/// use spot_it::layout::{layout, Point};
///
/// let symbols = [SymbolId(0), SymbolId(4)];
/// let positions = [Point::new(10.0, 10.0), Point::new(50.0, 50.0)];
///
/// let placements = layout(&symbols, &positions, &[0.0, 90.0], &[30.0, 30.0]).unwrap();
/// assert_eq!(placements[1].rotation_degrees, 90.0);
///
/// assert!(layout(&symbols, &positions, &[0.0, 90.0], &[30.0]).is_err());
/// ```
pub fn layout(
    symbols: &[SymbolId],
    positions: &[Point],
    rotations: &[f64],
    sizes: &[f64],
) -> Result<Vec<Placement>> {
    check_len("positions", symbols.len(), positions.len())?;
    check_len("rotations", symbols.len(), rotations.len())?;
    check_len("sizes", symbols.len(), sizes.len())?;

    Ok(symbols
        .iter()
        .zip(positions)
        .zip(rotations)
        .zip(sizes)
        .map(|(((&symbol, &position), &rotation), &size)| {
            Placement::new(symbol, position, rotation, size)
        })
        .collect())
}

pub(crate) fn check_len(field: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(SpotError::LengthMismatch {
            field,
            expected,
            actual,
        })
    }
}

/// Evenly spaced angles in degrees: `360·i / count`.
#[must_use]
pub fn default_angles(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 360.0 * i as f64 / count as f64)
        .collect()
}

/// Symbols on a circle around the canvas centre.
///
/// ```
/// use spot_it::layout::{CircularLayout, Point};
///
/// let circle = CircularLayout::new(Point::new(250.0, 250.0), 230.0, 80.0);
/// let p = circle.position(90.0);
/// assert!((p.x - 250.0).abs() < 1e-9);
/// assert!((p.y - 480.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircularLayout {
    pub center: Point,
    pub radius: f64,
    pub symbol_size: f64,
    /// Rotate symbols to face away from the centre.
    pub face_outward: bool,
}

impl CircularLayout {
    #[must_use]
    pub fn new(center: Point, radius: f64, symbol_size: f64) -> Self {
        Self {
            center,
            radius,
            symbol_size,
            face_outward: false,
        }
    }

    #[must_use]
    pub fn with_face_outward(mut self, outward: bool) -> Self {
        self.face_outward = outward;
        self
    }

    /// Fixed rotation offset combined with each symbol's angle.
    #[must_use]
    pub fn facing_offset(&self) -> f64 {
        if self.face_outward {
            FACE_OUTWARD_DEGREES
        } else {
            FACE_INWARD_DEGREES
        }
    }

    /// `center + radius·(cos θ, sin θ)` for `θ` in degrees.
    #[must_use]
    pub fn position(&self, angle_degrees: f64) -> Point {
        Point::polar(self.center, self.radius, angle_degrees.to_radians())
    }

    /// Default rotation for a symbol at `angle_degrees`.
    ///
    /// Negated because canvas angles run clockwise (y grows down) while
    /// rotations are counter-clockwise.
    #[must_use]
    pub fn rotation(&self, angle_degrees: f64) -> f64 {
        -(angle_degrees + self.facing_offset())
    }

    /// Lay out a card. `overrides` holds one entry per symbol; `angle`,
    /// `size_modifier` and `rotation` are honoured.
    pub fn layout(&self, symbols: &[SymbolId], overrides: &[SymbolOverride]) -> Result<Vec<Placement>> {
        check_len("overrides", symbols.len(), overrides.len())?;
        let defaults = default_angles(symbols.len());

        let mut positions = Vec::with_capacity(symbols.len());
        let mut rotations = Vec::with_capacity(symbols.len());
        let mut sizes = Vec::with_capacity(symbols.len());

        for (default_angle, over) in defaults.into_iter().zip(overrides) {
            over.validate()?;
            let angle = over.angle.unwrap_or(default_angle);
            positions.push(self.position(angle));
            rotations.push(over.rotation.unwrap_or_else(|| self.rotation(angle)));
            sizes.push(over.size_modifier_or_default() * self.symbol_size);
        }

        layout(symbols, &positions, &rotations, &sizes)
    }
}

/// Free-form positions with a circular initial suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ManualLayout {
    pub canvas: Canvas,
    pub symbol_size: f64,
}

impl ManualLayout {
    #[must_use]
    pub fn new(canvas: Canvas, symbol_size: f64) -> Self {
        Self {
            canvas,
            symbol_size,
        }
    }

    /// Evenly spaced whole-pixel positions on the canvas ring.
    #[must_use]
    pub fn default_positions(&self, count: usize) -> Vec<Point> {
        let (cx, cy) = self.canvas.center();
        let center = Point::new(cx, cy);
        let radius = self.canvas.ring_radius();
        default_angles(count)
            .into_iter()
            .map(|angle| {
                let p = Point::polar(center, radius, angle.to_radians());
                Point::new(self.clamp(p.x.trunc()), self.clamp(p.y.trunc()))
            })
            .collect()
    }

    fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.canvas.margin, self.canvas.size - self.canvas.margin)
    }

    /// Lay out a card. Positions outside the margin band are rejected.
    pub fn layout(&self, symbols: &[SymbolId], overrides: &[SymbolOverride]) -> Result<Vec<Placement>> {
        check_len("overrides", symbols.len(), overrides.len())?;
        let defaults = self.default_positions(symbols.len());
        let low = self.canvas.margin;
        let high = self.canvas.size - self.canvas.margin;

        let mut positions = Vec::with_capacity(symbols.len());
        let mut rotations = Vec::with_capacity(symbols.len());
        let mut sizes = Vec::with_capacity(symbols.len());

        for (default, over) in defaults.into_iter().zip(overrides) {
            over.validate()?;
            let position = Point::new(
                over.position_x.unwrap_or(default.x),
                over.position_y.unwrap_or(default.y),
            );
            for coordinate in [position.x, position.y] {
                if !(low..=high).contains(&coordinate) {
                    return Err(SpotError::InvalidConfig(format!(
                        "position {coordinate} outside {low}..={high}"
                    )));
                }
            }
            positions.push(position);
            rotations.push(over.rotation.unwrap_or(0.0));
            sizes.push(over.size_modifier_or_default() * self.symbol_size);
        }

        layout(symbols, &positions, &rotations, &sizes)
    }
}
