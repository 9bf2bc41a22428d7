//! End-to-end pipeline from configuration and assets to card sheets.
//!
//! A `DeckSession` checks its inputs once, generates the deck, and then lays
//! out cards on demand with the configured [`LayoutMode`]:
//!
//! | Mode | Layout |
//! |------|--------|
//! | `Simple`, `Advanced` | [`ManualLayout`] |
//! | `Circle` | [`CircularLayout`] |
//! | `Scatter` | [`FreePacking`], one RNG stream per card |
//!
//! ```
//! use spot_it::core::{DeckConfig, LayoutMode};
//! use spot_it::layout::Overrides;
//! use spot_it::session::DeckSession;
//!
//! let config = DeckConfig::default().with_order(3).with_mode(LayoutMode::Circle);
//! let assets: Vec<String> = (0..7).map(|i| format!("symbol_{i}.png")).collect();
//!
//! let session = DeckSession::new(config, assets).unwrap();
//! let (sheets, report) = session.sheets(&Overrides::new()).unwrap();
//!
//! assert_eq!(sheets.len(), 7);
//! assert_eq!(report.placed, 21);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Deck, DeckConfig, LayoutMode, LayoutRng, SymbolId};
use crate::deck::{generate, total_symbols};
use crate::error::{Result, SpotError};
use crate::layout::{CircularLayout, FreePacking, ManualLayout, Overrides, Placement, Point};
use crate::render::{export_deck, Border, CardRenderer, CardSink, CardSheet, Manifest};

/// Human-readable slot name, e.g. `"symbol 3, card 1"`.
#[must_use]
pub fn symbol_label(symbol: SymbolId, card_index: usize) -> String {
    format!("symbol {}, card {}", symbol.0 + 1, card_index + 1)
}

/// Lay out the symbols of card `index` with the configured mode.
///
/// Returns the placements and, for free packing, the symbols that did not
/// fit. Scatter mode seeds each card from `config.seed` and the card index,
/// so any card can be reproduced on its own.
pub fn layout_symbols(
    config: &DeckConfig,
    index: usize,
    symbols: &[SymbolId],
    overrides: &Overrides,
) -> Result<(Vec<Placement>, Vec<SymbolId>)> {
    let canvas = config.canvas();
    let (cx, cy) = canvas.center();
    let center = Point::new(cx, cy);
    let symbol_size = f64::from(config.symbol_size);

    match config.mode {
        LayoutMode::Simple | LayoutMode::Advanced => {
            let slots = overrides.for_card(index, symbols.len());
            let placements = ManualLayout::new(canvas, symbol_size).layout(symbols, &slots)?;
            Ok((placements, Vec::new()))
        }
        LayoutMode::Circle => {
            let slots = overrides.for_card(index, symbols.len());
            let placements = CircularLayout::new(center, config.effective_circle_radius(), symbol_size)
                .with_face_outward(config.face_outward)
                .layout(symbols, &slots)?;
            Ok((placements, Vec::new()))
        }
        LayoutMode::Scatter => {
            let mut rng = LayoutRng::new(config.seed).for_card(index);
            let outcome = FreePacking::new(center, canvas.usable_radius(), symbol_size)
                .with_max_attempts(config.max_attempts)
                .layout(symbols, &mut rng)?;
            Ok((outcome.placements, outcome.dropped))
        }
    }
}

/// Placement statistics for a whole deck.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutReport {
    pub cards: usize,
    pub placed: usize,
    /// `(card_index, symbol)` for every symbol free packing had to drop.
    pub dropped: Vec<(usize, SymbolId)>,
}

impl LayoutReport {
    /// Number of symbols left off their cards.
    #[must_use]
    pub fn exhausted_count(&self) -> usize {
        self.dropped.len()
    }

    fn record(&mut self, sheet: &CardSheet) {
        self.cards += 1;
        self.placed += sheet.placements.len();
        self.dropped
            .extend(sheet.dropped.iter().map(|&symbol| (sheet.index, symbol)));
    }
}

/// Validated inputs plus the generated deck.
#[derive(Clone, Debug)]
pub struct DeckSession {
    config: DeckConfig,
    assets: Vec<String>,
    deck: Deck,
}

impl DeckSession {
    /// Validate `config`, check there is an asset for every symbol, and generate the deck.
    ///
    /// Extra assets beyond `n² - n + 1` are ignored.
    pub fn new(config: DeckConfig, mut assets: Vec<String>) -> Result<Self> {
        config.validate()?;
        let required = total_symbols(config.order);
        if assets.len() < required {
            return Err(SpotError::InsufficientAssets {
                required,
                supplied: assets.len(),
            });
        }
        assets.truncate(required);

        let deck = generate(config.order)?;
        log::info!(
            "deck of order {} with {} cards, {} layout",
            config.order,
            deck.len(),
            config.mode
        );
        Ok(Self {
            config,
            assets,
            deck,
        })
    }

    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The assets in use, one per symbol.
    #[must_use]
    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    #[must_use]
    pub fn asset_for(&self, symbol: SymbolId) -> Option<&str> {
        self.assets.get(symbol.index()).map(String::as_str)
    }

    /// Lay out one card.
    pub fn layout_card(&self, index: usize, overrides: &Overrides) -> Result<CardSheet> {
        let card = self.deck.card(index).ok_or(SpotError::CardOutOfRange {
            index,
            len: self.deck.len(),
        })?;
        let (placements, dropped) = layout_symbols(&self.config, index, card.symbols(), overrides)?;

        log::debug!("card {} laid out with {} symbols", index + 1, placements.len());
        Ok(CardSheet {
            index,
            card_size: f64::from(self.config.card_size),
            border: Border::from_config(&self.config),
            placements,
            dropped,
        })
    }

    /// Lay out every card in deck order.
    pub fn sheets(&self, overrides: &Overrides) -> Result<(Vec<CardSheet>, LayoutReport)> {
        overrides.validate()?;
        let mut report = LayoutReport::default();
        let mut sheets = Vec::with_capacity(self.deck.len());
        for index in 0..self.deck.len() {
            let sheet = self.layout_card(index, overrides)?;
            report.record(&sheet);
            sheets.push(sheet);
        }
        if report.exhausted_count() > 0 {
            log::warn!(
                "{} symbols did not fit on their cards",
                report.exhausted_count()
            );
        }
        Ok((sheets, report))
    }

    /// Lay out, render, and write every card.
    pub fn export<R, S>(
        &self,
        overrides: &Overrides,
        renderer: &R,
        sink: &mut S,
    ) -> Result<(Manifest, LayoutReport)>
    where
        R: CardRenderer,
        R::Output: AsRef<[u8]>,
        S: CardSink + ?Sized,
    {
        let (sheets, report) = self.sheets(overrides)?;
        let manifest = export_deck(self.config.order, &sheets, renderer, &self.assets, sink)?;
        Ok((manifest, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SymbolOverride;

    fn assets(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("img_{i}.png")).collect()
    }

    #[test]
    fn test_symbol_label() {
        assert_eq!(symbol_label(SymbolId(2), 0), "symbol 3, card 1");
    }

    #[test]
    fn test_insufficient_assets() {
        let config = DeckConfig::default().with_order(4);
        let err = DeckSession::new(config, assets(12)).unwrap_err();
        assert!(matches!(
            err,
            SpotError::InsufficientAssets { required: 13, supplied: 12 }
        ));
    }

    #[test]
    fn test_extra_assets_ignored() {
        let session = DeckSession::new(DeckConfig::default().with_order(3), assets(10)).unwrap();
        assert_eq!(session.assets().len(), 7);
        assert_eq!(session.asset_for(SymbolId(6)), Some("img_6.png"));
        assert_eq!(session.asset_for(SymbolId(7)), None);
    }

    #[test]
    fn test_invalid_config_blocks() {
        let config = DeckConfig::default().with_order(1);
        assert!(matches!(
            DeckSession::new(config, assets(10)),
            Err(SpotError::InvalidOrder { n: 1 })
        ));
    }

    #[test]
    fn test_card_out_of_range() {
        let session = DeckSession::new(DeckConfig::default().with_order(3), assets(7)).unwrap();
        assert!(matches!(
            session.layout_card(7, &Overrides::new()),
            Err(SpotError::CardOutOfRange { index: 7, len: 7 })
        ));
    }

    #[test]
    fn test_manual_override_applies_to_one_card() {
        let session = DeckSession::new(DeckConfig::default().with_order(3), assets(7)).unwrap();
        let mut overrides = Overrides::new();
        overrides.set(1, 0, SymbolOverride::default().with_position(100.0, 100.0));

        let first = session.layout_card(0, &overrides).unwrap();
        let second = session.layout_card(1, &overrides).unwrap();
        assert_eq!(first.placements[0].center(), Point::new(480.0, 250.0));
        assert_eq!(second.placements[0].center(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let session = DeckSession::new(DeckConfig::default().with_order(3), assets(7)).unwrap();
        let mut overrides = Overrides::new();
        overrides.set(4, 1, SymbolOverride::default().with_size_modifier(9.0));
        assert!(matches!(
            session.sheets(&overrides),
            Err(SpotError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_scatter_cards_independent() {
        let config = DeckConfig::default().with_order(3).with_mode(LayoutMode::Scatter);
        let session = DeckSession::new(config, assets(7)).unwrap();

        let alone = session.layout_card(5, &Overrides::new()).unwrap();
        let (sheets, _) = session.sheets(&Overrides::new()).unwrap();
        assert_eq!(sheets[5], alone);
    }
}
