//! Per-symbol layout overrides supplied by the host.
//!
//! Every field is optional; a missing field takes the default of the layout
//! that reads it. Overrides are keyed by `(card_index, symbol_index)` where
//! `symbol_index` is the position of the symbol on the card, not its id.
//!
//! ```
//! use spot_it::layout::{Overrides, SymbolOverride};
//!
//! let mut overrides = Overrides::new();
//! overrides.set(0, 2, SymbolOverride::default().with_angle(45.0));
//!
//! assert_eq!(overrides.get(0, 2).angle, Some(45.0));
//! assert_eq!(overrides.get(1, 2).angle, None);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::SIZE_MODIFIER_RANGE;
use crate::error::{Result, SpotError};

/// Optional per-symbol parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SymbolOverride {
    /// Circle mode angle in degrees.
    pub angle: Option<f64>,
    /// Multiplier on the base symbol size, in `0.0..=4.0`.
    pub size_modifier: Option<f64>,
    /// Rotation in degrees, counter-clockwise.
    pub rotation: Option<f64>,
    /// Manual mode centre x.
    pub position_x: Option<f64>,
    /// Manual mode centre y.
    pub position_y: Option<f64>,
}

impl SymbolOverride {
    #[must_use]
    pub fn with_angle(mut self, degrees: f64) -> Self {
        self.angle = Some(degrees);
        self
    }

    #[must_use]
    pub fn with_size_modifier(mut self, modifier: f64) -> Self {
        self.size_modifier = Some(modifier);
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    #[must_use]
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position_x = Some(x);
        self.position_y = Some(y);
        self
    }

    /// Effective size modifier (default 1.0).
    #[must_use]
    pub fn size_modifier_or_default(&self) -> f64 {
        self.size_modifier.unwrap_or(1.0)
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("angle", self.angle),
            ("size modifier", self.size_modifier),
            ("rotation", self.rotation),
            ("x position", self.position_x),
            ("y position", self.position_y),
        ];
        for (name, value) in fields {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(SpotError::InvalidConfig(format!("{name} override {v} is not finite")));
                }
            }
        }
        if let Some(m) = self.size_modifier {
            if !SIZE_MODIFIER_RANGE.contains(&m) {
                return Err(SpotError::InvalidConfig(format!(
                    "size modifier {m} outside {}..={}",
                    SIZE_MODIFIER_RANGE.start(),
                    SIZE_MODIFIER_RANGE.end()
                )));
            }
        }
        Ok(())
    }
}

/// Serialized form of one override: its slot plus the values.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub card: usize,
    pub symbol: usize,
    #[serde(flatten)]
    pub values: SymbolOverride,
}

/// Overrides for a whole deck.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<OverrideEntry>", into = "Vec<OverrideEntry>")]
pub struct Overrides {
    entries: FxHashMap<(usize, usize), SymbolOverride>,
}

impl Overrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the override for one symbol slot, replacing any previous one.
    pub fn set(&mut self, card: usize, symbol: usize, value: SymbolOverride) {
        self.entries.insert((card, symbol), value);
    }

    /// Override for one symbol slot; all-`None` if unset.
    #[must_use]
    pub fn get(&self, card: usize, symbol: usize) -> SymbolOverride {
        self.entries.get(&(card, symbol)).copied().unwrap_or_default()
    }

    /// Overrides for the first `count` symbol slots of a card.
    #[must_use]
    pub fn for_card(&self, card: usize, count: usize) -> Vec<SymbolOverride> {
        (0..count).map(|symbol| self.get(card, symbol)).collect()
    }

    pub fn remove(&mut self, card: usize, symbol: usize) -> Option<SymbolOverride> {
        self.entries.remove(&(card, symbol))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate every stored override.
    pub fn validate(&self) -> Result<()> {
        self.entries.values().try_for_each(SymbolOverride::validate)
    }
}

impl From<Vec<OverrideEntry>> for Overrides {
    fn from(list: Vec<OverrideEntry>) -> Self {
        let entries = list
            .into_iter()
            .map(|e| ((e.card, e.symbol), e.values))
            .collect();
        Self { entries }
    }
}

impl From<Overrides> for Vec<OverrideEntry> {
    fn from(overrides: Overrides) -> Self {
        let mut list: Vec<OverrideEntry> = overrides
            .entries
            .into_iter()
            .map(|((card, symbol), values)| OverrideEntry { card, symbol, values })
            .collect();
        list.sort_by_key(|e| (e.card, e.symbol));
        list
    }
}
