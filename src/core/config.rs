//! Deck and canvas configuration.
//!
//! Hosts configure a deck by providing:
//! - `DeckConfig`: order, card and symbol sizes, border, layout mode, seed
//! - `Canvas`: the square drawing surface derived from `card_size`
//!
//! Per-symbol overrides live in [`crate::layout::Overrides`], not here.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpotError};

/// Margin reserved around the card for the border stroke.
pub const MARGIN: f64 = 20.0;

/// Corner radius of the rounded-rectangle border.
pub const CORNER_RADIUS: f64 = 30.0;

/// Size decrement applied when free packing fails at the current size.
pub const SHRINK_STEP: f64 = 10.0;

/// Free packing never tries sizes at or below this edge length.
pub const MIN_SYMBOL_SIZE: f64 = 20.0;

/// Randomized placement attempts per size step.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Allowed range of a per-symbol size modifier.
pub const SIZE_MODIFIER_RANGE: std::ops::RangeInclusive<f64> = 0.0..=4.0;

/// How symbols are arranged on each card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutMode {
    /// Manual layout seeded from an evenly spaced circle.
    #[default]
    Simple,
    /// Symbols on a circle, rotated to face in or out.
    Circle,
    /// Manual layout with every parameter exposed.
    Advanced,
    /// Randomized free packing with collision avoidance.
    Scatter,
}

impl LayoutMode {
    /// Whether this mode uses the randomized free packing layout.
    #[must_use]
    pub const fn is_random(self) -> bool {
        matches!(self, LayoutMode::Scatter)
    }
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LayoutMode::Simple => "Simple",
            LayoutMode::Circle => "Circle",
            LayoutMode::Advanced => "Advanced",
            LayoutMode::Scatter => "Scatter",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for LayoutMode {
    type Err = SpotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(LayoutMode::Simple),
            "circle" => Ok(LayoutMode::Circle),
            "advanced" => Ok(LayoutMode::Advanced),
            "scatter" => Ok(LayoutMode::Scatter),
            other => Err(SpotError::InvalidConfig(format!("unknown layout mode '{other}'"))),
        }
    }
}

/// Outline drawn around each card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BorderStyle {
    /// Rounded rectangle inset by the margin.
    #[default]
    RoundedRect,
    /// Circle inset by the margin.
    Circle,
}

/// Square drawing surface of one card.
///
/// ```
/// use spot_it::core::Canvas;
///
/// let canvas = Canvas::new(500.0);
/// assert_eq!(canvas.center(), (250.0, 250.0));
/// assert_eq!(canvas.usable_radius(), 230.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    /// Side length in pixels.
    pub size: f64,
    /// Space kept free for the border stroke.
    pub margin: f64,
}

impl Canvas {
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self {
            size,
            margin: MARGIN,
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Center of the canvas. Integer-pixel, like the card raster.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        let c = (self.size / 2.0).floor();
        (c, c)
    }

    /// Radius of the usable interior: `size/2 - margin`.
    #[must_use]
    pub fn usable_radius(&self) -> f64 {
        self.size / 2.0 - self.margin
    }

    /// Default circle radius for circular and manual layouts: `(size - 2·margin) / 2`,
    /// truncated to whole pixels.
    #[must_use]
    pub fn ring_radius(&self) -> f64 {
        ((self.size - 2.0 * self.margin) / 2.0).floor()
    }
}

/// Complete deck configuration.
///
/// ```
/// use spot_it::core::{DeckConfig, LayoutMode};
///
/// let config = DeckConfig::default()
///     .with_order(3)
///     .with_mode(LayoutMode::Circle);
///
/// assert_eq!(config.total_symbols(), 7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Symbols per card (`n`). Hosts offer 3-9; the generator accepts n ≥ 2.
    pub order: usize,

    /// Card side length in pixels.
    pub card_size: u32,

    /// Base symbol edge length in pixels.
    pub symbol_size: u32,

    /// Border stroke width. Zero draws no border.
    pub border_thickness: u32,

    /// Border outline shape.
    pub border_style: BorderStyle,

    /// Arrangement strategy.
    pub mode: LayoutMode,

    /// Circle mode: rotate symbols to face outward (270°) instead of inward (90°).
    pub face_outward: bool,

    /// Circle mode radius. `None` uses [`Canvas::ring_radius`].
    pub circle_radius: Option<f64>,

    /// Free packing attempts per size step.
    pub max_attempts: u32,

    /// Seed for free packing.
    pub seed: u64,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            order: 4,
            card_size: 500,
            symbol_size: 80,
            border_thickness: 3,
            border_style: BorderStyle::RoundedRect,
            mode: LayoutMode::Simple,
            face_outward: false,
            circle_radius: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: 42,
        }
    }
}

impl DeckConfig {
    #[must_use]
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_card_size(mut self, size: u32) -> Self {
        self.card_size = size;
        self
    }

    #[must_use]
    pub fn with_symbol_size(mut self, size: u32) -> Self {
        self.symbol_size = size;
        self
    }

    #[must_use]
    pub fn with_border(mut self, thickness: u32, style: BorderStyle) -> Self {
        self.border_thickness = thickness;
        self.border_style = style;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: LayoutMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_face_outward(mut self, outward: bool) -> Self {
        self.face_outward = outward;
        self
    }

    #[must_use]
    pub fn with_circle_radius(mut self, radius: f64) -> Self {
        self.circle_radius = Some(radius);
        self
    }

    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of symbols (and cards) in the deck: `n² - n + 1`.
    #[must_use]
    pub fn total_symbols(&self) -> usize {
        crate::deck::total_symbols(self.order)
    }

    #[must_use]
    pub fn canvas(&self) -> Canvas {
        Canvas::new(f64::from(self.card_size))
    }

    /// Radius used by circle mode.
    #[must_use]
    pub fn effective_circle_radius(&self) -> f64 {
        self.circle_radius.unwrap_or_else(|| self.canvas().ring_radius())
    }

    /// Check the configuration before any deck or layout work.
    pub fn validate(&self) -> Result<()> {
        if self.order < 2 {
            return Err(SpotError::InvalidOrder { n: self.order });
        }
        if f64::from(self.card_size) <= 2.0 * MARGIN {
            return Err(SpotError::InvalidConfig(format!(
                "card size {} leaves no room inside the {MARGIN}px margin",
                self.card_size
            )));
        }
        if self.symbol_size == 0 {
            return Err(SpotError::InvalidConfig("symbol size must be positive".into()));
        }
        if self.max_attempts == 0 {
            return Err(SpotError::InvalidConfig("max attempts must be positive".into()));
        }
        if let Some(radius) = self.circle_radius {
            if !radius.is_finite() || radius < 0.0 {
                return Err(SpotError::InvalidConfig(format!(
                    "circle radius {radius} must be a non-negative number"
                )));
            }
        }
        Ok(())
    }
}
