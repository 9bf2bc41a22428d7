//! # spot-it
//!
//! Printable "Spot It!" decks: any two cards share exactly one symbol.
//!
//! ## Design Principles
//!
//! 1. **Pure construction**: Deck generation is a deterministic function of
//!    the order `n`. Nothing is mutated after it is built.
//!
//! 2. **Explicit randomness**: Free packing takes a seeded [`LayoutRng`];
//!    there is no ambient generator, so every layout is reproducible.
//!
//! 3. **Graceful degradation**: A symbol that cannot be packed is dropped
//!    and reported, never fatal to the rest of the deck.
//!
//! ## Pipeline
//!
//! ```text
//! generate(n) -> Deck -> FreePacking | CircularLayout | ManualLayout
//!             -> CardSheet -> CardRenderer -> CardSink
//! ```
//!
//! ## Modules
//!
//! - `core`: Symbol ids, cards, decks, RNG, configuration
//! - `deck`: Deck generation and invariant checks
//! - `layout`: Collision index, free packing, deterministic layouts, overrides
//! - `render`: Renderer boundary, SVG renderer, export sinks
//! - `session`: Validated end-to-end pipeline

pub mod core;
pub mod deck;
pub mod error;
pub mod layout;
pub mod render;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BorderStyle, Canvas, Card, Deck, DeckConfig, LayoutMode, LayoutRng, LayoutRngState, SymbolId,
};

pub use crate::deck::{generate, generate_with, total_symbols, verify_deck, Construction, Violation};

pub use crate::error::{Result, SpotError};

pub use crate::layout::{
    layout, BoundingBox, CircularLayout, CollisionIndex, FreePacking, ManualLayout, Overrides,
    PackingOutcome, Placement, Point, SymbolOverride,
};

pub use crate::render::{
    card_file_name, Border, CardRenderer, CardSheet, CardSink, DirectorySink, Manifest, MemorySink,
    SvgRenderer, ZipSink,
};

pub use crate::session::{symbol_label, DeckSession, LayoutReport};
