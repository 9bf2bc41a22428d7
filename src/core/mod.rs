//! Core types: symbols, cards, decks, RNG, configuration.
//!
//! This module holds the building blocks shared by deck generation, layout,
//! and rendering. Hosts configure a deck via `DeckConfig` rather than by
//! touching the algorithms.

pub mod config;
pub mod rng;
pub mod symbol;

pub use config::{BorderStyle, Canvas, DeckConfig, LayoutMode};
pub use rng::{LayoutRng, LayoutRngState};
pub use symbol::{Card, Deck, SymbolId};
