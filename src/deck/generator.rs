//! Deck construction over symbol identifiers.
//!
//! The deck for order `n` is built from lines of an affine plane of order
//! `q = n - 1`, closed into a projective plane:
//!
//! 1. `n` cards through symbol `0`: card `i` holds `0` and
//!    `i·(n-1) + j + 1` for `j` in `0..n-1`.
//! 2. `(n-1)²` cards, one per `(i, j)`: symbol `i + 1` plus, for each block
//!    `k` in `0..n-1`, the symbol `n + (n-1)·k + (i·k + j)` where the
//!    arithmetic on `i·k + j` is done in a field of order `n - 1`.
//!
//! For prime `n - 1` the field is the integers mod `n - 1`, which gives the
//! classic `(i*k + j) % (n-1)` formula. For prime powers (`n` = 5, 9, ...)
//! modular arithmetic breaks the one-shared-symbol property, so
//! [`Construction::FiniteField`] uses GF(n-1) instead. No such plane exists
//! for some orders (`n = 7`); those fall back to the modular formula and the
//! result should be checked with [`verify_deck`].
//!
//! ```
//! use spot_it::deck::{generate, verify_deck};
//!
//! let deck = generate(3).unwrap();
//! assert_eq!(deck.len(), 7);
//! assert!(verify_deck(&deck).is_empty());
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::field::GaloisField;
use crate::core::{Card, Deck, SymbolId};
use crate::error::{Result, SpotError};

/// Number of symbols (and cards) in a deck of order `n`: `n² - n + 1`.
#[must_use]
pub const fn total_symbols(n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    n * n - n + 1
}

/// How the offset `i·k + j` of the second card family is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Construction {
    /// Integer arithmetic modulo `n - 1`.
    Modular,
    /// Field arithmetic in GF(n - 1). Only available when `n - 1` is a prime power.
    FiniteField,
}

impl Construction {
    /// Best construction for order `n`.
    #[must_use]
    pub fn for_order(n: usize) -> Self {
        match n.checked_sub(1).and_then(super::field::prime_power) {
            Some((_, 1)) | None => Construction::Modular,
            Some(_) => Construction::FiniteField,
        }
    }
}

/// Generate the deck of order `n`, choosing the construction automatically.
///
/// Fails with [`SpotError::InvalidOrder`] for `n < 2`.
pub fn generate(n: usize) -> Result<Deck> {
    generate_with(n, Construction::for_order(n))
}

/// Generate the deck of order `n` with an explicit construction.
pub fn generate_with(n: usize, construction: Construction) -> Result<Deck> {
    if n < 2 {
        return Err(SpotError::InvalidOrder { n });
    }
    let q = n - 1;

    let field = match construction {
        Construction::Modular => None,
        Construction::FiniteField => Some(GaloisField::new(q).ok_or_else(|| {
            SpotError::InvalidConfig(format!("no finite field of order {q} for deck order {n}"))
        })?),
    };
    let offset = |i: usize, k: usize, j: usize| match &field {
        Some(f) => f.add(f.mul(i, k), j),
        None => (i * k + j) % q,
    };

    let mut cards = Vec::with_capacity(total_symbols(n));

    for i in 0..n {
        let mut symbols: SmallVec<[SymbolId; 9]> = SmallVec::with_capacity(n);
        symbols.push(SymbolId(0));
        symbols.extend((0..q).map(|j| symbol(i * q + j + 1)));
        cards.push(Card::new(symbols));
    }

    for i in 0..q {
        for j in 0..q {
            let mut symbols: SmallVec<[SymbolId; 9]> = SmallVec::with_capacity(n);
            symbols.push(symbol(i + 1));
            symbols.extend((0..q).map(|k| symbol(n + q * k + offset(i, k, j))));
            cards.push(Card::new(symbols));
        }
    }

    log::debug!(
        "generated deck of order {} ({:?}): {} cards",
        n,
        construction,
        cards.len()
    );
    Ok(Deck::new(n, cards))
}

fn symbol(id: usize) -> SymbolId {
    SymbolId(id as u32)
}

/// A broken deck invariant found by [`verify_deck`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    /// Deck does not hold `n² - n + 1` cards.
    CardCount { expected: usize, actual: usize },
    /// Card does not hold exactly `n` symbols.
    CardLength { card: usize, len: usize },
    /// Card repeats a symbol.
    DuplicateSymbol { card: usize, symbol: SymbolId },
    /// Symbol id outside `0..total_symbols`.
    UnknownSymbol { card: usize, symbol: SymbolId },
    /// Two cards do not share exactly one symbol.
    SharedCount { first: usize, second: usize, shared: usize },
    /// Symbol does not appear on exactly `n` cards.
    SymbolFrequency { symbol: SymbolId, cards: usize },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::CardCount { expected, actual } => {
                write!(f, "deck has {actual} cards, expected {expected}")
            }
            Violation::CardLength { card, len } => write!(f, "card {card} has {len} symbols"),
            Violation::DuplicateSymbol { card, symbol } => {
                write!(f, "card {card} repeats {symbol}")
            }
            Violation::UnknownSymbol { card, symbol } => {
                write!(f, "card {card} uses out-of-range {symbol}")
            }
            Violation::SharedCount { first, second, shared } => {
                write!(f, "cards {first} and {second} share {shared} symbols")
            }
            Violation::SymbolFrequency { symbol, cards } => {
                write!(f, "{symbol} appears on {cards} cards")
            }
        }
    }
}

/// Check every Spot-It invariant of a deck. Empty means valid.
#[must_use]
pub fn verify_deck(deck: &Deck) -> Vec<Violation> {
    let n = deck.order();
    let total = total_symbols(n);
    let mut violations = Vec::new();

    if deck.len() != total {
        violations.push(Violation::CardCount {
            expected: total,
            actual: deck.len(),
        });
    }

    let mut frequency = vec![0usize; total];
    let mut membership: Vec<Vec<bool>> = Vec::with_capacity(deck.len());

    for (index, card) in deck.iter().enumerate() {
        if card.len() != n {
            violations.push(Violation::CardLength {
                card: index,
                len: card.len(),
            });
        }
        let mut seen = vec![false; total];
        for symbol in card.iter() {
            match seen.get_mut(symbol.index()) {
                None => violations.push(Violation::UnknownSymbol { card: index, symbol }),
                Some(true) => violations.push(Violation::DuplicateSymbol { card: index, symbol }),
                Some(slot) => {
                    *slot = true;
                    frequency[symbol.index()] += 1;
                }
            }
        }
        membership.push(seen);
    }

    for first in 0..membership.len() {
        for second in first + 1..membership.len() {
            let shared = membership[first]
                .iter()
                .zip(&membership[second])
                .filter(|(a, b)| **a && **b)
                .count();
            if shared != 1 {
                violations.push(Violation::SharedCount { first, second, shared });
            }
        }
    }

    for (id, &cards) in frequency.iter().enumerate() {
        if cards != n {
            violations.push(Violation::SymbolFrequency {
                symbol: symbol(id),
                cards,
            });
        }
    }

    violations
}
