//! Deck generation: pure function of the order `n`.
//!
//! ## Key Types
//!
//! - `generate`: build the `n² - n + 1` card deck
//! - `Construction`: modular or finite-field offset arithmetic
//! - `verify_deck`: check the one-shared-symbol and frequency invariants

pub mod field;
pub mod generator;

pub use field::GaloisField;
pub use generator::{generate, generate_with, total_symbols, verify_deck, Construction, Violation};
