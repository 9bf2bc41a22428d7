//! Symbol identifiers, cards, and decks.
//!
//! A `SymbolId` names a logical symbol, independent of the image drawn for
//! it. A `Card` is the ordered list of symbols printed on one card and a
//! `Deck` is the full set of cards produced by the generator.
//!
//! ```
//! use spot_it::core::{Card, SymbolId};
//!
//! let a = Card::from_ids(&[0, 1, 2]);
//! let b = Card::from_ids(&[0, 3, 4]);
//!
//! assert_eq!(a.shared_with(&b), vec![SymbolId(0)]);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Identifier of a logical symbol, in `0..total_symbols`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

impl SymbolId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Index into the symbol asset list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Ordered symbols printed on one card.
///
/// SmallVec keeps cards up to order 9 inline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    symbols: SmallVec<[SymbolId; 9]>,
}

impl Card {
    #[must_use]
    pub fn new(symbols: SmallVec<[SymbolId; 9]>) -> Self {
        Self { symbols }
    }

    /// Build a card from raw ids.
    #[must_use]
    pub fn from_ids(ids: &[u32]) -> Self {
        Self {
            symbols: ids.iter().copied().map(SymbolId).collect(),
        }
    }

    #[must_use]
    pub fn symbols(&self) -> &[SymbolId] {
        &self.symbols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[must_use]
    pub fn contains(&self, symbol: SymbolId) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Symbols present on both cards, in this card's order.
    #[must_use]
    pub fn shared_with(&self, other: &Card) -> Vec<SymbolId> {
        self.symbols
            .iter()
            .copied()
            .filter(|s| other.contains(*s))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.symbols.iter().copied()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<String> = self.symbols.iter().map(|s| s.0.to_string()).collect();
        write!(f, "[{}]", ids.join(", "))
    }
}

/// A complete deck of `n² - n + 1` cards over `n² - n + 1` symbols.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    order: usize,
    cards: Vec<Card>,
}

impl Deck {
    pub(crate) fn new(order: usize, cards: Vec<Card>) -> Self {
        Self { order, cards }
    }

    /// Symbols per card (`n`).
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of distinct symbols used by the deck.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.order * self.order - self.order + 1
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
